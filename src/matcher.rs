//! Find the reference ramp(s) and the shade an input color belongs to.

use std::fmt;

use log::{debug, trace};

use crate::color::Oklch;
use crate::ramp::{IndexedRamp, Registry};

/// Thresholds and weights steering the matching.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MatchOptions {
    /// Inputs with a chroma below this are matched against the neutral
    /// ramps only.
    pub achromatic_chroma: f64,
    /// Ramps whose average chroma does not exceed this are neutral
    /// (unless neutral ramps are designated explicitly).
    pub neutral_ramp_chroma: f64,
    /// Weight of the lightness difference in the shade distance.
    pub lightness_weight: f64,
    /// Weight of the chroma difference in the shade distance.
    pub chroma_weight: f64,
    /// Hue distance (degrees) under which the nearest ramp is used alone.
    pub exact_hue_tolerance: f64,
    /// Shade distance under which a match is `exact`.
    pub exact_diff_tolerance: f64,
    /// Two ramps are blended only if both are within this hue distance
    /// (degrees) of the input.
    pub blend_window: f64,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            achromatic_chroma: 0.03,
            neutral_ramp_chroma: 0.05,
            lightness_weight: 1.,
            chroma_weight: 2.,
            exact_hue_tolerance: 3.,
            exact_diff_tolerance: 0.01,
            blend_window: 60.,
        }
    }
}

/// How the input color was related to the reference ramps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// The input is (nearly) a shade of a single ramp.
    Exact,
    /// A single ramp dominates.
    Single,
    /// The input sits between two ramps, whose scales are mixed.
    Blend,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Exact => "exact",
            Method::Single => "single",
            Method::Blend => "blend",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference ramp contributing to a result.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchSource {
    /// Name of the ramp.
    pub name: String,
    /// Distance between the input and the ramp's closest shade.
    pub diff: f64,
    /// Share of this ramp in the result, in \[0, 1\].
    pub weight: f64,
}

/// A ramp retained by the matcher, with its weight.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Source<'a> {
    pub(crate) ramp: &'a IndexedRamp,
    pub(crate) diff: f64,
    pub(crate) weight: f64,
}

impl Source<'_> {
    pub(crate) fn to_match_source(&self) -> MatchSource {
        MatchSource { name: self.ramp.name.clone(), diff: self.diff,
                      weight: self.weight }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Match<'a> {
    pub(crate) method: Method,
    /// Index of the matched shade.
    pub(crate) shade: usize,
    pub(crate) sources: Vec<Source<'a>>,
}

/// A candidate ramp with its best shade and hue distance to the input.
#[derive(Clone, Copy)]
struct Candidate<'a> {
    ramp: &'a IndexedRamp,
    shade: usize,
    diff: f64,
    hue_distance: f64,
}

impl<'a> Candidate<'a> {
    fn new(ramp: &'a IndexedRamp, input: &Oklch, o: &MatchOptions) -> Self {
        let (shade, diff) = best_shade(ramp, input, o);
        Candidate { ramp, shade, diff, hue_distance: ramp.hue_distance(input.h) }
    }

    fn alone(&self, method: Method) -> Match<'a> {
        Match { method, shade: self.shade,
                sources: vec![Source { ramp: self.ramp, diff: self.diff,
                                       weight: 1. }] }
    }
}

/// Distance between two colors ignoring the hue.
fn distance(a: &Oklch, b: &Oklch, o: &MatchOptions) -> f64 {
    (o.lightness_weight * (a.l - b.l)).hypot(o.chroma_weight * (a.c - b.c))
}

/// Index of the shade of `ramp` closest to `input` and its distance.
/// Ties go to the lighter shade.
fn best_shade(ramp: &IndexedRamp, input: &Oklch, o: &MatchOptions) -> (usize, f64) {
    ramp.colors.iter()
        .map(|c| distance(c, input, o))
        .enumerate()
        .fold((0, f64::INFINITY), |best, (i, d)| if d < best.1 { (i, d) } else { best })
}

/// Match `input` (already restricted to the valid domain) against the
/// ramps of `registry`.
pub(crate) fn match_color<'a>(registry: &'a Registry, input: &Oklch,
                              o: &MatchOptions) -> Match<'a> {
    if input.c < o.achromatic_chroma {
        let neutral = registry.neutrals()
            .map(|r| Candidate::new(r, input, o))
            .min_by(|a, b| a.diff.total_cmp(&b.diff));
        if let Some(n) = neutral {
            debug!("achromatic input {input}: exact on neutral \"{}\"",
                   n.ramp.name);
            return n.alone(Method::Exact);
        }
    }

    let candidates: Vec<Candidate<'a>> = registry.ramps.iter()
        .map(|r| Candidate::new(r, input, o))
        .collect();
    for c in &candidates {
        trace!("{}: hue distance {:.2}°, diff {:.4} at shade #{}",
               c.ramp.name, c.hue_distance, c.diff, c.shade);
    }

    // A shade of any ramp, neutral ones included, sitting on the input.
    let exact = candidates.iter()
        .filter(|c| c.diff <= o.exact_diff_tolerance
                && c.hue_distance <= o.blend_window)
        .min_by(|a, b| a.diff.total_cmp(&b.diff)
                .then(a.hue_distance.total_cmp(&b.hue_distance)));
    if let Some(e) = exact {
        debug!("{input}: exact on \"{}\"", e.ramp.name);
        return e.alone(Method::Exact);
    }

    let mut ranked: Vec<Candidate<'a>> = candidates.iter().copied()
        .filter(|c| c.ramp.ranks_by_hue(input.c))
        .collect();
    if ranked.is_empty() {
        ranked = candidates;
    }
    ranked.sort_by(|a, b| a.hue_distance.total_cmp(&b.hue_distance));
    // The registry holds at least one ramp.
    let first = ranked[0];
    if first.hue_distance <= o.exact_hue_tolerance {
        debug!("{input}: single on \"{}\"", first.ramp.name);
        return first.alone(Method::Single);
    }

    let second = ranked.get(1)
        .filter(|s| s.hue_distance <= o.blend_window && first.hue_distance > 0.);
    match second {
        Some(second) => {
            let total = first.hue_distance + second.hue_distance;
            let w2 = first.hue_distance / total;
            let w1 = 1. - w2;
            let shade = blended_shade(first.ramp, second.ramp, w1, w2, input, o);
            debug!("{input}: blend of \"{}\" ({w1:.3}) and \"{}\" ({w2:.3})",
                   first.ramp.name, second.ramp.name);
            Match {
                method: Method::Blend,
                shade,
                sources: vec![
                    Source { ramp: first.ramp, diff: first.diff, weight: w1 },
                    Source { ramp: second.ramp, diff: second.diff, weight: w2 },
                ],
            }
        }
        None => {
            debug!("{input}: single on \"{}\"", first.ramp.name);
            first.alone(Method::Single)
        }
    }
}

/// Shade index where `input` fits best on both ramps at once, each
/// ramp's distance counting with its weight.
fn blended_shade(r1: &IndexedRamp, r2: &IndexedRamp, w1: f64, w2: f64,
                 input: &Oklch, o: &MatchOptions) -> usize {
    r1.colors.iter().zip(&r2.colors)
        .map(|(c1, c2)| w1 * distance(c1, input, o) + w2 * distance(c2, input, o))
        .enumerate()
        .fold((0, f64::INFINITY), |best, (i, d)| if d < best.1 { (i, d) } else { best })
        .0
}


#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use crate::ramp::Ramp;

    const SHADES: [&str; 5] = ["100", "300", "500", "700", "900"];
    const L: [f64; 5] = [0.9, 0.7, 0.5, 0.3, 0.1];
    const C: [f64; 5] = [0.04, 0.12, 0.2, 0.12, 0.04];

    fn ramp(h: f64, cscale: f64) -> Ramp {
        SHADES.iter().zip(L.iter().zip(C))
            .map(|(s, (&l, c))| (*s, Oklch::new(l, c * cscale, h)))
            .collect()
    }

    fn registry(ramps: &[(&str, f64, f64)]) -> Registry {
        let ramps: IndexMap<String, Ramp> = ramps.iter()
            .map(|&(n, h, cscale)| (n.to_string(), ramp(h, cscale)))
            .collect();
        Registry::new(&ramps, &[], 0.05).unwrap()
    }

    fn names(m: &Match<'_>) -> Vec<String> {
        m.sources.iter().map(|s| s.ramp.name.clone()).collect()
    }

    #[test]
    fn exact_shade() {
        let reg = registry(&[("blue", 240., 1.), ("red", 30., 1.)]);
        let m = match_color(&reg, &Oklch::new(0.3, 0.12, 240.), &MatchOptions::default());
        assert_eq!(m.method, Method::Exact);
        assert_eq!(m.shade, 3);
        assert_eq!(names(&m), ["blue"]);
        assert_eq!(m.sources[0].weight, 1.);
        assert_eq!(m.sources[0].diff, 0.);
    }

    #[test]
    fn same_hue_other_lightness_is_single() {
        let reg = registry(&[("blue", 240., 1.), ("red", 30., 1.)]);
        let m = match_color(&reg, &Oklch::new(0.42, 0.2, 241.), &MatchOptions::default());
        assert_eq!(m.method, Method::Single);
        assert_eq!(m.shade, 2);
        assert!(m.sources[0].diff > 0.);
    }

    #[test]
    fn close_shade_near_a_hue_is_exact() {
        let reg = registry(&[("red", 20., 1.), ("orange", 60., 1.)]);
        // 10° off red, but right on its shade 500.
        let m = match_color(&reg, &Oklch::new(0.5, 0.2, 30.), &MatchOptions::default());
        assert_eq!(m.method, Method::Exact);
        assert_eq!(names(&m), ["red"]);
        assert_eq!(m.shade, 2);
    }

    #[test]
    fn dominant_ramp_is_single() {
        let reg = registry(&[("blue", 240., 1.), ("red", 30., 1.)]);
        // 20° from blue, 130° from red.
        let m = match_color(&reg, &Oklch::new(0.45, 0.2, 260.), &MatchOptions::default());
        assert_eq!(m.method, Method::Single);
        assert_eq!(names(&m), ["blue"]);
    }

    #[test]
    fn blend_between_two_hues() {
        let reg = registry(&[("red", 20., 1.), ("orange", 60., 1.),
                             ("blue", 240., 1.)]);
        let m = match_color(&reg, &Oklch::new(0.45, 0.2, 30.), &MatchOptions::default());
        assert_eq!(m.method, Method::Blend);
        assert_eq!(names(&m), ["red", "orange"]);
        // 10° from red, 30° from orange.
        assert!((m.sources[0].weight - 0.75).abs() < 1e-12);
        assert!((m.sources[1].weight - 0.25).abs() < 1e-12);
        let total: f64 = m.sources.iter().map(|s| s.weight).sum();
        assert!((total - 1.).abs() < 1e-5);
        assert_eq!(m.shade, 2);
    }

    #[test]
    fn midway_blend_is_even() {
        let reg = registry(&[("red", 20., 1.), ("orange", 60., 1.)]);
        let m = match_color(&reg, &Oklch::new(0.65, 0.12, 40.), &MatchOptions::default());
        assert_eq!(m.method, Method::Blend);
        assert!((m.sources[0].weight - 0.5).abs() < 1e-12);
        assert!((m.sources[1].weight - 0.5).abs() < 1e-12);
        assert_eq!(m.shade, 1);
    }

    #[test]
    fn blend_across_zero_degrees() {
        let reg = registry(&[("rose", 350., 1.), ("red", 20., 1.)]);
        let m = match_color(&reg, &Oklch::new(0.45, 0.2, 0.), &MatchOptions::default());
        assert_eq!(m.method, Method::Blend);
        assert_eq!(names(&m), ["rose", "red"]);
        assert!((m.sources[1].weight - 10. / 30.).abs() < 1e-12);
    }

    #[test]
    fn achromatic_input_uses_neutral_ramp() {
        let reg = registry(&[("blue", 240., 1.), ("gray", 0., 0.05),
                             ("red", 30., 1.)]);
        for input in [Oklch::new(0.5, 0., 0.), Oklch::new(0.5, 0.01, 30.),
                      Oklch::new(0.95, 0.02, 250.)] {
            let m = match_color(&reg, &input, &MatchOptions::default());
            assert_eq!(m.method, Method::Exact);
            assert_eq!(names(&m), ["gray"]);
        }
    }

    #[test]
    fn neutral_ramps_rank_within_their_chroma() {
        // "slate" is neutral (peak chroma 0.05) and 2° from the input.
        let reg = registry(&[("blue", 200., 1.), ("slate", 250., 0.25)]);
        let o = MatchOptions::default();
        let m = match_color(&reg, &Oklch::new(0.45, 0.04, 252.), &o);
        assert_eq!(m.method, Method::Single);
        assert_eq!(names(&m), ["slate"]);
        // Beyond its chroma, the neutral ramp is left out.
        let m = match_color(&reg, &Oklch::new(0.45, 0.15, 252.), &o);
        assert_eq!(m.method, Method::Single);
        assert_eq!(names(&m), ["blue"]);
    }

    #[test]
    fn neutral_shade_above_achromatic_chroma_is_exact() {
        let reg = registry(&[("blue", 240., 1.), ("slate", 250., 0.25)]);
        let m = match_color(&reg, &Oklch::new(0.5, 0.2 * 0.25, 250.),
                            &MatchOptions::default());
        assert_eq!(m.method, Method::Exact);
        assert_eq!(names(&m), ["slate"]);
        assert_eq!(m.shade, 2);
    }

    #[test]
    fn exact_shade_on_a_ramp_further_in_hue() {
        // Blue is 4° away, sky 6°, but only sky has the shade.
        let reg = registry(&[("blue", 240., 1.), ("sky", 250., 0.5)]);
        let m = match_color(&reg, &Oklch::new(0.5, 0.2 * 0.5, 244.),
                            &MatchOptions::default());
        assert_eq!(m.method, Method::Exact);
        assert_eq!(names(&m), ["sky"]);
        assert_eq!(m.shade, 2);
        assert_eq!(m.sources[0].diff, 0.);
    }

    #[test]
    fn only_neutral_ramps() {
        let reg = registry(&[("gray", 100., 0.05)]);
        let m = match_color(&reg, &Oklch::new(0.5, 0.2, 100.), &MatchOptions::default());
        assert_eq!(m.method, Method::Single);
        assert_eq!(names(&m), ["gray"]);
        assert_eq!(m.shade, 2);
    }

    #[test]
    fn lightness_orders_matched_shades() {
        let reg = registry(&[("gray", 0., 0.)]);
        let mut last = 0;
        for i in 0..=20 {
            let l = 1. - i as f64 / 20.;
            let m = match_color(&reg, &Oklch::new(l, 0., 0.), &MatchOptions::default());
            assert!(m.shade >= last, "L = {l}: shade {} < {last}", m.shade);
            last = m.shade;
        }
        assert_eq!(last, SHADES.len() - 1);
    }

    #[test]
    fn lightness_orders_matched_shades_of_a_chromatic_input() {
        let reg = registry(&[("blue", 240., 1.), ("red", 30., 1.)]);
        let mut shades = vec![];
        for i in 0..19 {
            let l = 0.95 - 0.05 * i as f64;
            let m = match_color(&reg, &Oklch::new(l, 0.1, 250.), &MatchOptions::default());
            assert_eq!(names(&m), ["blue"]);
            shades.push(m.shade);
        }
        assert!(shades.windows(2).all(|w| w[0] <= w[1]), "{shades:?}");
        assert_eq!((shades[0], shades[18]), (0, SHADES.len() - 1));
    }

    #[test]
    fn method_names() {
        assert_eq!(Method::Exact.to_string(), "exact");
        assert_eq!(Method::Single.as_str(), "single");
        assert_eq!(format!("{}", Method::Blend), "blend");
    }
}
