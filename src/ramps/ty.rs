pub(crate) use crate::color::Oklch;

/// A bundled reference ramp.
pub(crate) struct RampData {
    pub(crate) name: &'static str,
    pub(crate) shades: Vec<(&'static str, Oklch)>, // Invariant: non-empty
}

/// A bundled set of ramps sharing the same shade keys.
pub(crate) struct RampSetData {
    /// Names of the gray-like ramps of the set.
    pub(crate) neutrals: Vec<&'static str>,
    pub(crate) ramps: Vec<RampData>,
}
