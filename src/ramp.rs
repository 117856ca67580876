//! Reference ramps and the registry indexing them.

use indexmap::IndexMap;
use log::warn;

use crate::color::{hue_distance, parse_color, Oklch};
use crate::error::{ConfigurationError, InvalidColorError};

/// A reference color scale: shade keys (such as `"500"`) mapped to
/// colors.  The insertion order is kept.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ramp {
    shades: IndexMap<String, Oklch>,
}

impl Ramp {
    pub fn new() -> Self { Self::default() }

    /// Build a ramp from CSS colors.
    ///
    /// # Example
    ///
    /// ```
    /// use ditto_tones::Ramp;
    /// let ramp = Ramp::parse([("1", "#fbfdff"), ("2", "oklch(0.5 0.2 240)")])
    ///     .unwrap();
    /// assert_eq!(ramp.len(), 2);
    /// ```
    pub fn parse<K, S>(shades: impl IntoIterator<Item = (K, S)>)
                       -> Result<Self, InvalidColorError>
    where K: Into<String>, S: AsRef<str> {
        let mut ramp = Ramp::new();
        for (k, s) in shades {
            ramp.insert(k, parse_color(s.as_ref())?);
        }
        Ok(ramp)
    }

    /// Set the color of `shade`, replacing any previous one.
    pub fn insert(&mut self, shade: impl Into<String>, color: Oklch) {
        self.shades.insert(shade.into(), color);
    }

    pub fn get(&self, shade: &str) -> Option<&Oklch> { self.shades.get(shade) }

    pub fn len(&self) -> usize { self.shades.len() }

    pub fn is_empty(&self) -> bool { self.shades.is_empty() }

    /// Iterate on the shades in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Oklch)> {
        self.shades.iter().map(|(k, c)| (k.as_str(), c))
    }

    /// Iterate on the shade keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.shades.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Oklch)> for Ramp {
    fn from_iter<I: IntoIterator<Item = (K, Oklch)>>(iter: I) -> Self {
        Ramp { shades: iter.into_iter().map(|(k, c)| (k.into(), c)).collect() }
    }
}

impl<'a> IntoIterator for &'a Ramp {
    type Item = (&'a String, &'a Oklch);
    type IntoIter = indexmap::map::Iter<'a, String, Oklch>;

    fn into_iter(self) -> Self::IntoIter { self.shades.iter() }
}

/// A validated ramp, its colors stored by shade index.
#[derive(Clone, Debug)]
pub(crate) struct IndexedRamp {
    pub(crate) name: String,
    /// `colors[i]` is the color of the i-th shade of the registry.
    pub(crate) colors: Vec<Oklch>,
    /// Hue of the most chromatic shade.
    pub(crate) hue: f64,
    pub(crate) max_chroma: f64,
    pub(crate) role: Role,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Role {
    Chromatic,
    /// Designated neutral, or low average chroma.
    Neutral,
    /// The least chromatic ramp, standing in for a missing neutral one.
    /// It is still ranked by hue.
    Fallback,
}

impl IndexedRamp {
    fn average_chroma(&self) -> f64 {
        self.colors.iter().map(|c| c.c).sum::<f64>() / self.colors.len() as f64
    }

    /// Whether the ramp is ranked by hue for an input of chroma `c`.  A
    /// neutral ramp is ranked only when one of its shades is at least as
    /// chromatic as the input.
    pub(crate) fn ranks_by_hue(&self, c: f64) -> bool {
        self.role != Role::Neutral || c <= self.max_chroma
    }

    /// Angular distance between the ramp's hue and `h`.
    pub(crate) fn hue_distance(&self, h: f64) -> f64 { hue_distance(self.hue, h) }
}

/// The set of reference ramps, validated and sharing one shade sequence.
#[derive(Clone, Debug)]
pub(crate) struct Registry {
    pub(crate) shades: Vec<String>,
    pub(crate) ramps: Vec<IndexedRamp>,
}

/// Order shade keys numerically when they all are numbers, otherwise
/// keep the order in which they were given.
fn sort_shades(keys: &mut [String]) {
    let numeric: Option<Vec<f64>> =
        keys.iter().map(|k| k.trim().parse::<f64>().ok()).collect();
    if numeric.is_some() {
        keys.sort_by(|a, b| {
            let a: f64 = a.trim().parse().unwrap_or_default();
            let b: f64 = b.trim().parse().unwrap_or_default();
            a.total_cmp(&b)
        });
    }
}

impl Registry {
    /// Validate `ramps` and index them.  `neutrals` are the names of
    /// ramps designated as neutral; when empty the neutral ramps are
    /// detected from their average chroma, which must not exceed
    /// `neutral_chroma`.
    pub(crate) fn new(ramps: &IndexMap<String, Ramp>, neutrals: &[String],
                      neutral_chroma: f64) -> Result<Self, ConfigurationError> {
        let (first_name, first) = ramps.first()
            .ok_or(ConfigurationError::NoRamps)?;
        if first.is_empty() {
            return Err(ConfigurationError::EmptyRamp(first_name.clone()));
        }
        let mut shades: Vec<String> = first.keys().map(String::from).collect();
        sort_shades(&mut shades);

        let mut indexed = Vec::with_capacity(ramps.len());
        for (name, ramp) in ramps {
            let colors: Option<Vec<Oklch>> =
                shades.iter().map(|s| ramp.get(s).copied()).collect();
            let colors = match colors {
                Some(colors) if ramp.len() == shades.len() => colors,
                _ => return Err(ConfigurationError::InconsistentKeys {
                    name: name.clone(),
                    expected: shades.clone() }),
            };
            let (hue, max_chroma) = colors.iter()
                .max_by(|a, b| a.c.total_cmp(&b.c))
                .map_or((0., 0.), |c| (c.h, c.c));
            indexed.push(IndexedRamp { name: name.clone(), colors, hue,
                                       max_chroma, role: Role::Chromatic });
        }

        for n in neutrals {
            match indexed.iter_mut().find(|r| &r.name == n) {
                Some(r) => r.role = Role::Neutral,
                None => return Err(ConfigurationError::UnknownNeutral(n.clone())),
            }
        }
        if neutrals.is_empty() {
            detect_neutrals(&mut indexed, neutral_chroma);
        }
        Ok(Registry { shades, ramps: indexed })
    }

    pub(crate) fn neutrals(&self) -> impl Iterator<Item = &IndexedRamp> {
        self.ramps.iter().filter(|r| r.role != Role::Chromatic)
    }
}

/// Flag the ramps with a low average chroma.  If there are none, the
/// least chromatic ramp is the neutral one.
fn detect_neutrals(ramps: &mut [IndexedRamp], neutral_chroma: f64) {
    let mut found = false;
    for r in ramps.iter_mut() {
        if r.average_chroma() <= neutral_chroma {
            r.role = Role::Neutral;
            found = true;
        }
    }
    if !found {
        let least = ramps.iter_mut()
            .min_by(|a, b| a.average_chroma().total_cmp(&b.average_chroma()));
        if let Some(r) = least {
            warn!("no ramp has an average chroma ≤ {neutral_chroma}, \
                   using \"{}\" as the neutral ramp", r.name);
            r.role = Role::Fallback;
        }
    }
}
