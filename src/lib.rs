//! Shade scales shaped after reference palettes.
//!
//! Given reference [`Ramp`]s (such as the Tailwind or Radix palettes,
//! see [`RampSet`]), [`DittoTones::generate`] finds the ramp(s) and the
//! shade an arbitrary color corresponds to and builds a whole
//! [`Scale`] around it: same shade keys, same lightness and chroma
//! curve as the reference, and the input color exactly at its shade.
//!
//! ```
//! use ditto_tones::{DittoTones, RampSet};
//! let ditto = DittoTones::from_ramp_set(RampSet::Tailwind).unwrap();
//! let res = ditto.generate("#3b82f6").unwrap();
//! assert_eq!(res.scale.len(), ditto.shades().len());
//! println!("{}", res.to_css("brand"));
//! ```

use indexmap::IndexMap;

mod color;
mod error;
mod matcher;
mod ramp;
mod ramps;
mod synth;

pub use color::{parse_color, Oklch, RGBColor};
pub use error::{ConfigurationError, InvalidColorError};
pub use matcher::{MatchOptions, MatchSource, Method};
pub use ramp::Ramp;
pub use synth::Scale;

use ramp::Registry;
use ramps::ty::RampSetData;

/// Configuration of a [`DittoTones`].
///
/// # Example
///
/// ```
/// use ditto_tones::{Config, DittoTones, Oklch, Ramp};
/// let blue: Ramp = [("1", Oklch::new(0.9, 0.05, 240.)),
///                   ("2", Oklch::new(0.5, 0.2, 240.))].into_iter().collect();
/// let gray: Ramp = [("1", Oklch::new(0.9, 0., 0.)),
///                   ("2", Oklch::new(0.5, 0., 0.))].into_iter().collect();
/// let ditto = DittoTones::new(Config::new().ramp("blue", blue)
///                                          .ramp("gray", gray)
///                                          .neutral("gray")).unwrap();
/// assert_eq!(ditto.ramp_names(), ["blue", "gray"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Config {
    ramps: IndexMap<String, Ramp>,
    neutrals: Vec<String>,
    options: MatchOptions,
}

impl Config {
    pub fn new() -> Self { Self::default() }

    /// Add a reference ramp.  A ramp with the same name is replaced but
    /// keeps its position.
    pub fn ramp(mut self, name: impl Into<String>, ramp: Ramp) -> Self {
        self.ramps.insert(name.into(), ramp);
        self
    }

    /// Add several reference ramps, in order.
    pub fn ramps<N: Into<String>>(mut self, ramps: impl IntoIterator<Item = (N, Ramp)>)
                                  -> Self {
        self.ramps.extend(ramps.into_iter().map(|(n, r)| (n.into(), r)));
        self
    }

    /// Designate the ramp `name` as neutral.  Use several times to
    /// designate more than one.  When none is designated, neutral ramps
    /// are recognized by their low average chroma.
    pub fn neutral(mut self, name: impl Into<String>) -> Self {
        self.neutrals.push(name.into());
        self
    }

    /// Set the matching thresholds.
    pub fn options(mut self, options: MatchOptions) -> Self {
        self.options = options;
        self
    }
}

/// The bundled reference palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RampSet {
    /// The Tailwind CSS v4 palette, shades 50 to 950.
    Tailwind,
    /// The Radix Colors light scales, steps 1 to 12.
    Radix,
}

impl RampSet {
    pub const ALL: [RampSet; 2] = [RampSet::Tailwind, RampSet::Radix];

    fn data(self) -> &'static RampSetData {
        match self {
            RampSet::Tailwind => &*ramps::TAILWIND,
            RampSet::Radix => &*ramps::RADIX,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            RampSet::Tailwind => "tailwind",
            RampSet::Radix => "radix",
        }
    }

    /// Return the ramps of the set, by name.
    pub fn ramps(self) -> IndexMap<String, Ramp> {
        self.data().ramps.iter()
            .map(|r| (r.name.to_string(),
                      r.shades.iter().copied().collect::<Ramp>()))
            .collect()
    }

    /// Return the names of the neutral ramps of the set.
    pub fn neutrals(self) -> &'static [&'static str] {
        &self.data().neutrals
    }

    /// Return a configuration using the ramps of this set.
    pub fn config(self) -> Config {
        self.neutrals().iter()
            .fold(Config::new().ramps(self.ramps()), |cfg, n| cfg.neutral(*n))
    }
}

/// The outcome of [`DittoTones::generate`].
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationResult {
    /// The parsed input color.
    pub input_color: Oklch,
    /// The shade key the input corresponds to.  `scale[matched_shade]`
    /// is the input color.
    pub matched_shade: String,
    pub method: Method,
    /// The contributing reference ramps, the dominant one first.
    pub sources: Vec<MatchSource>,
    /// The generated scale, one color per shade key.
    pub scale: Scale,
}

impl GenerationResult {
    /// Return a CSS `:root` rule defining `--{name}-{shade}` for each
    /// shade of the scale.
    pub fn to_css(&self, name: &str) -> String {
        let info: Vec<String> = self.sources.iter()
            .map(|s| format!("{} ({:.0}%)", s.name, 100. * s.weight))
            .collect();
        let mut css = format!(":root {{\n  /* {name}: {} from {} @ shade {} */\n",
                              self.method, info.join(" + "), self.matched_shade);
        for (shade, c) in &self.scale {
            css.push_str(&format!("  --{name}-{shade}: {c};\n"));
        }
        css.push('}');
        css
    }
}

/// Generator of shade scales from a fixed set of reference ramps.
#[derive(Clone, Debug)]
pub struct DittoTones {
    registry: Registry,
    options: MatchOptions,
}

impl DittoTones {
    /// Validate the ramps of `config`.  They must be at least one and
    /// all have the same shade keys.
    pub fn new(config: Config) -> Result<Self, ConfigurationError> {
        let registry = Registry::new(&config.ramps, &config.neutrals,
                                     config.options.neutral_ramp_chroma)?;
        Ok(DittoTones { registry, options: config.options })
    }

    /// Use one of the bundled palettes.
    pub fn from_ramp_set(set: RampSet) -> Result<Self, ConfigurationError> {
        Self::new(set.config())
    }

    /// Names of the reference ramps, in the order they were given.
    pub fn ramp_names(&self) -> Vec<&str> {
        self.registry.ramps.iter().map(|r| r.name.as_str()).collect()
    }

    /// Shade keys, from the lightest to the darkest as ordered by the
    /// reference data (numerically for numeric keys).
    pub fn shades(&self) -> &[String] { &self.registry.shades }

    /// Names of the ramps used for near-gray inputs.
    pub fn neutrals(&self) -> Vec<&str> {
        self.registry.neutrals().map(|r| r.name.as_str()).collect()
    }

    pub fn options(&self) -> &MatchOptions { &self.options }

    /// Build the scale for `color`, given in any CSS notation
    /// understood by [`parse_color`].
    pub fn generate(&self, color: &str) -> Result<GenerationResult, InvalidColorError> {
        Ok(self.generate_oklch(parse_color(color)?))
    }

    /// Build the scale for `color`.  Its components are first brought
    /// back to their valid domain (see [`Oklch::clamped`]).
    pub fn generate_oklch(&self, color: Oklch) -> GenerationResult {
        let input = color.clamped();
        let m = matcher::match_color(&self.registry, &input, &self.options);
        let scale = synth::synthesize(&self.registry.shades, &m.sources,
                                      m.shade, &input);
        GenerationResult {
            input_color: input,
            matched_shade: self.registry.shades[m.shade].clone(),
            method: m.method,
            sources: m.sources.iter().map(|s| s.to_match_source()).collect(),
            scale,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn test_ramps() -> Vec<(&'static str, Ramp)> {
        let blue = [(0.95, 0.02), (0.9, 0.04), (0.8, 0.08), (0.7, 0.12),
                    (0.6, 0.16), (0.5, 0.2), (0.4, 0.16), (0.3, 0.12),
                    (0.2, 0.08), (0.1, 0.04)];
        let red = [(0.95, 0.03), (0.9, 0.06), (0.8, 0.1), (0.7, 0.14),
                   (0.6, 0.18), (0.5, 0.22), (0.4, 0.18), (0.3, 0.14),
                   (0.2, 0.1), (0.1, 0.06)];
        let gray = [(0.98, 0.005), (0.96, 0.005), (0.9, 0.01), (0.8, 0.01),
                    (0.6, 0.01), (0.5, 0.01), (0.4, 0.01), (0.3, 0.01),
                    (0.2, 0.01), (0.1, 0.005)];
        let shades = ["50", "100", "200", "300", "400", "500", "600", "700",
                      "800", "900"];
        let ramp = |lc: [(f64, f64); 10], h: f64| -> Ramp {
            shades.iter().zip(lc)
                .map(|(s, (l, c))| (*s, Oklch::new(l, c, h)))
                .collect()
        };
        vec![("blue", ramp(blue, 240.)), ("red", ramp(red, 30.)),
             ("gray", ramp(gray, 0.))]
    }

    fn ditto() -> DittoTones {
        DittoTones::new(Config::new().ramps(test_ramps())).unwrap()
    }

    #[test]
    fn accessors() {
        let d = ditto();
        assert_eq!(d.ramp_names(), ["blue", "red", "gray"]);
        assert_eq!(d.shades(), ["50", "100", "200", "300", "400", "500", "600",
                                "700", "800", "900"]);
        assert_eq!(d.neutrals(), ["gray"]);
        assert_eq!(d.options(), &MatchOptions::default());
    }

    #[test]
    fn config_replaces_ramps_by_name() {
        let ramps = test_ramps();
        let cfg = Config::new().ramps(ramps.clone())
            .ramp("blue", ramps[1].1.clone());
        let d = DittoTones::new(cfg).unwrap();
        assert_eq!(d.ramp_names(), ["blue", "red", "gray"]);
    }

    #[test]
    fn invalid_color() {
        let e = ditto().generate("not-a-color").unwrap_err();
        assert!(e.to_string().contains("Invalid color"));
    }

    #[test]
    fn out_of_domain_input_is_clamped() {
        let res = ditto().generate_oklch(Oklch::new(1.3, -0.2, 400.));
        assert_eq!(res.input_color, Oklch::new(1., 0., 40.));
        assert_eq!(res.scale[&res.matched_shade], res.input_color);
    }

    #[test]
    fn css_export() {
        let res = ditto().generate("oklch(0.3 0.12 240)").unwrap();
        let css = res.to_css("brand");
        assert!(css.starts_with(":root {\n  /* brand: exact from blue (100%) @ shade 700 */\n"),
                "{css}");
        assert!(css.contains("  --brand-700: oklch(0.3 0.12 240);\n"), "{css}");
        assert_eq!(css.matches("--brand-").count(), 10);
        assert!(css.ends_with("}"));
    }

    #[test]
    fn ramp_set_names() {
        assert_eq!(RampSet::Tailwind.name(), "tailwind");
        assert_eq!(RampSet::ALL.map(RampSet::name), ["tailwind", "radix"]);
    }
}
