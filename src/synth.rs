//! Build a full scale anchored at the input color.
//!
//! Each source ramp is remapped so that its matched shade becomes the
//! input color.  Lighter shades keep their relative position between
//! the matched shade and white, darker shades between the matched
//! shade and black, so no lightness ever needs clamping.

use indexmap::IndexMap;

use crate::color::Oklch;
use crate::matcher::Source;
use crate::ramp::IndexedRamp;

/// Colors of a generated scale, by shade key in the registry order.
pub type Scale = IndexMap<String, Oklch>;

const EPS: f64 = 1e-9;

/// New lightness of a shade at `ls` in a reference ramp whose matched
/// shade, at `lm`, is moved to `lin`.
pub(crate) fn remap_lightness(ls: f64, lm: f64, lin: f64) -> f64 {
    if ls > lm {
        let span = 1. - lm;
        let t = if span > EPS { ((ls - lm) / span).min(1.) } else { 1. };
        lin + t * (1. - lin)
    } else if ls < lm {
        let t = if lm > EPS { ((lm - ls) / lm).min(1.) } else { 1. };
        lin * (1. - t)
    } else {
        lin
    }
}

/// New chroma of a shade at `cs` in a reference ramp whose matched
/// shade, at `cm`, is moved to `cin`.
pub(crate) fn remap_chroma(cs: f64, cm: f64, cin: f64) -> f64 {
    if cm > EPS { cs * (cin / cm) } else { cs }
}

/// Lightness and chroma of every shade of `ramp` once its shade `mid`
/// is anchored at `input`.
fn remap(ramp: &IndexedRamp, mid: usize, input: &Oklch) -> Vec<(f64, f64)> {
    let m = ramp.colors[mid];
    ramp.colors.iter().enumerate()
        .map(|(i, s)| {
            if i == mid { (input.l, input.c) }
            else { (remap_lightness(s.l, m.l, input.l),
                    remap_chroma(s.c, m.c, input.c)) }
        })
        .collect()
}

/// Combine the remapped `sources` with their weights.  The hue of every
/// shade is the input hue and the matched shade is the input itself.
pub(crate) fn synthesize(shades: &[String], sources: &[Source<'_>], mid: usize,
                         input: &Oklch) -> Scale {
    let mut lc = vec![(0., 0.); shades.len()];
    for src in sources {
        for (acc, (l, c)) in lc.iter_mut().zip(remap(src.ramp, mid, input)) {
            acc.0 += src.weight * l;
            acc.1 += src.weight * c;
        }
    }
    shades.iter().zip(lc).enumerate()
        .map(|(i, (shade, (l, c)))| {
            let color = if i == mid { *input } else { Oklch::new(l, c, input.h) };
            (shade.clone(), color)
        })
        .collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::ramp::Role;

    fn close(a: f64, b: f64, eps: f64) -> bool { (a - b).abs() <= eps }

    fn indexed(name: &str, colors: &[(f64, f64)], h: f64) -> IndexedRamp {
        IndexedRamp {
            name: name.to_string(),
            colors: colors.iter().map(|&(l, c)| Oklch::new(l, c, h)).collect(),
            hue: h,
            max_chroma: colors.iter().map(|c| c.1).fold(0., f64::max),
            role: Role::Chromatic,
        }
    }

    fn keys(n: usize) -> Vec<String> { (1..=n).map(|i| i.to_string()).collect() }

    #[test]
    fn darkening_keeps_the_white_point() {
        let l = remap_lightness(0.95, 0.5, 0.3);
        assert!(close(l, 0.93, 1e-12), "{l}");
        let l = remap_lightness(0.05, 0.5, 0.3);
        assert!(close(l, 0.03, 1e-12), "{l}");
    }

    #[test]
    fn lightening_does_not_collide() {
        let l1 = remap_lightness(0.9, 0.5, 0.6);
        let l2 = remap_lightness(0.95, 0.5, 0.6);
        assert!(close(l1, 0.92, 1e-12), "{l1}");
        assert!(close(l2, 0.96, 1e-12), "{l2}");
        assert!(l1 < l2 && l2 < 1.);
    }

    #[test]
    fn endpoints_stay_put() {
        assert_eq!(remap_lightness(1., 0.5, 0.8), 1.);
        assert_eq!(remap_lightness(0., 0.5, 0.8), 0.);
        assert_eq!(remap_lightness(0.5, 0.5, 0.8), 0.8);
        // Degenerate anchors.
        assert_eq!(remap_lightness(0.2, 0., 0.4), 0.4 + 0.2 * 0.6);
        assert_eq!(remap_lightness(0.8, 1., 0.4), 0.4 * 0.8);
    }

    #[test]
    fn chroma_is_proportional() {
        assert!(close(remap_chroma(0.1, 0.2, 0.3), 0.15, 1e-12));
        assert_eq!(remap_chroma(0.1, 0., 0.3), 0.1);
    }

    #[test]
    fn single_source_scale() {
        let ramp = indexed("custom", &[(0.95, 0.02), (0.5, 0.2), (0.05, 0.02)], 240.);
        let src = [Source { ramp: &ramp, diff: 0.2, weight: 1. }];
        let input = Oklch::new(0.3, 0.1, 250.);
        let scale = synthesize(&keys(3), &src, 1, &input);
        assert_eq!(scale.keys().collect::<Vec<_>>(), ["1", "2", "3"]);
        assert_eq!(scale["2"], input);
        assert!(close(scale["1"].l, 0.93, 1e-12));
        assert!(close(scale["1"].c, 0.01, 1e-12));
        assert!(close(scale["3"].l, 0.03, 1e-12));
        assert!(scale.values().all(|c| c.h == 250.));
    }

    #[test]
    fn blended_scale() {
        let a = indexed("a", &[(0.9, 0.05), (0.5, 0.2), (0.1, 0.05)], 20.);
        let b = indexed("b", &[(0.8, 0.1), (0.5, 0.2), (0.2, 0.1)], 60.);
        let src = [Source { ramp: &a, diff: 0., weight: 0.75 },
                   Source { ramp: &b, diff: 0., weight: 0.25 }];
        let input = Oklch::new(0.5, 0.2, 30.);
        let scale = synthesize(&keys(3), &src, 1, &input);
        assert!(close(scale["1"].l, 0.75 * 0.9 + 0.25 * 0.8, 1e-12));
        assert!(close(scale["1"].c, 0.75 * 0.05 + 0.25 * 0.1, 1e-12));
        assert!(close(scale["3"].l, 0.75 * 0.1 + 0.25 * 0.2, 1e-12));
        assert_eq!(scale["2"], input);
        assert!(scale.values().all(|c| c.h == 30.));
    }
}
