use ditto_tones::{DittoTones, Method, Oklch, RampSet};
use test_case::test_case;

#[test_case(RampSet::Tailwind, 22, 11 ; "tailwind")]
#[test_case(RampSet::Radix, 19, 12 ; "radix")]
fn bundled_sets_are_consistent(set: RampSet, n_ramps: usize, n_shades: usize) {
    let ramps = set.ramps();
    assert_eq!(ramps.len(), n_ramps);
    for (name, r) in &ramps {
        assert_eq!(r.len(), n_shades, "{name}");
        let first = r.iter().next().unwrap().1;
        let last = r.iter().last().unwrap().1;
        assert!(first.l > last.l, "{name}");
        for (_, c) in r {
            assert!(c.l.is_finite() && c.c.is_finite() && c.h.is_finite());
            assert!((0. ..=1.).contains(&c.l) && c.c >= 0.);
            assert!((0. ..360.).contains(&c.h));
        }
    }
    let d = DittoTones::from_ramp_set(set).unwrap();
    assert_eq!(d.shades().len(), n_shades);
    assert_eq!(d.neutrals(), set.neutrals());
}

#[test_case(RampSet::Tailwind ; "tailwind")]
#[test_case(RampSet::Radix ; "radix")]
fn neutrals_have_low_chroma(set: RampSet) {
    let ramps = set.ramps();
    for n in set.neutrals() {
        let r = &ramps[*n];
        let avg = r.iter().map(|(_, c)| c.c).sum::<f64>() / r.len() as f64;
        assert!(avg < 0.05, "{n}: {avg}");
    }
}

#[test]
fn tailwind_shades() {
    let d = DittoTones::from_ramp_set(RampSet::Tailwind).unwrap();
    assert_eq!(d.shades(), ["50", "100", "200", "300", "400", "500", "600",
                            "700", "800", "900", "950"]);
    assert_eq!(d.ramp_names()[..3], ["slate", "gray", "zinc"]);
}

#[test]
fn radix_steps_are_numeric() {
    let d = DittoTones::from_ramp_set(RampSet::Radix).unwrap();
    let expected: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
    assert_eq!(d.shades(), expected);
}

#[test]
fn tailwind_shade_is_recognized() {
    let d = DittoTones::from_ramp_set(RampSet::Tailwind).unwrap();
    let res = d.generate("oklch(62.3% 0.214 259.815)").unwrap();
    assert_eq!(res.method, Method::Exact);
    assert_eq!(res.sources[0].name, "blue");
    assert_eq!(res.matched_shade, "500");
}

#[test]
fn radix_step_is_recognized() {
    let d = DittoTones::from_ramp_set(RampSet::Radix).unwrap();
    let res = d.generate("#0090ff").unwrap();
    assert_eq!(res.method, Method::Exact);
    assert_eq!(res.sources[0].name, "blue");
    assert_eq!(res.matched_shade, "9");
}

#[test]
fn gray_goes_to_a_neutral_ramp() {
    for set in RampSet::ALL {
        let d = DittoTones::from_ramp_set(set).unwrap();
        let res = d.generate("#808080").unwrap();
        assert!(set.neutrals().contains(&res.sources[0].name.as_str()),
                "{}: {:?}", set.name(), res.sources);
    }
}

#[test_case("#3b82f6" ; "blue")]
#[test_case("#ff6b35" ; "orange")]
#[test_case("#10b981" ; "emerald")]
#[test_case("#8b5cf6" ; "violet")]
#[test_case("#e11d48" ; "rose")]
#[test_case("#78716c" ; "warm gray")]
fn generation_on_bundled_sets(color: &str) {
    for set in RampSet::ALL {
        let d = DittoTones::from_ramp_set(set).unwrap();
        let res = d.generate(color).unwrap();
        assert_eq!(res.scale.len(), d.shades().len());
        assert_eq!(res.scale[&res.matched_shade], res.input_color);
        assert!(res.scale.values()
                .all(|c| (0. ..=1.).contains(&c.l) && c.c >= 0.));
        let css = res.to_css("brand");
        assert_eq!(css.matches("--brand-").count(), d.shades().len());
    }
}

#[test_case(RampSet::Tailwind ; "tailwind")]
#[test_case(RampSet::Radix ; "radix")]
fn bundled_shades_resolve_to_themselves(set: RampSet) {
    let d = DittoTones::from_ramp_set(set).unwrap();
    let achromatic = d.options().achromatic_chroma;
    for (name, ramp) in set.ramps() {
        for (shade, c) in &ramp {
            if c.c < achromatic { continue }
            let res = d.generate_oklch(*c);
            assert_eq!((res.method, res.sources[0].name.as_str(),
                        res.matched_shade.as_str()),
                       (Method::Exact, name.as_str(), shade.as_str()),
                       "{}: {name}-{shade}", set.name());
        }
    }
}

#[test_case("oklch(55.4% 0.046 257.417)", "slate" ; "slate 500")]
#[test_case("oklch(79.5% 0.184 86.047)", "yellow" ; "yellow 500")]
fn tailwind_500_shades(color: &str, ramp: &str) {
    let d = DittoTones::from_ramp_set(RampSet::Tailwind).unwrap();
    let res = d.generate(color).unwrap();
    assert_eq!(res.method, Method::Exact);
    assert_eq!(res.sources[0].name, ramp);
    assert_eq!(res.matched_shade, "500");
    let l: Vec<f64> = d.shades().iter().map(|s| res.scale[s].l).collect();
    assert!(l.windows(2).all(|w| w[0] > w[1]), "{l:?}");
}

#[test_case(260., 0.12 ; "blue")]
#[test_case(150., 0.1 ; "green")]
fn tailwind_shade_follows_lightness(h: f64, c: f64) {
    let d = DittoTones::from_ramp_set(RampSet::Tailwind).unwrap();
    let ranks: Vec<usize> = [0.95, 0.85, 0.75, 0.65, 0.55, 0.45, 0.35, 0.25, 0.15]
        .iter()
        .map(|&l| {
            let res = d.generate_oklch(Oklch::new(l, c, h));
            d.shades().iter().position(|s| *s == res.matched_shade).unwrap()
        })
        .collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "{ranks:?}");
    assert!(ranks[0] < ranks[ranks.len() - 1]);
}
