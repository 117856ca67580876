//! Errors raised when building a [`DittoTones`](crate::DittoTones) or
//! parsing an input color.

/// The ramp set given to [`DittoTones::new`](crate::DittoTones::new) is
/// unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    /// No ramp was provided.
    #[error("At least one ramp is required")]
    NoRamps,

    /// The first ramp has no shades, so there is no shade sequence to
    /// share.
    #[error("Ramp \"{0}\" has no shades")]
    EmptyRamp(String),

    /// A ramp's shade keys differ from the first ramp's.
    #[error("Ramp \"{name}\" has inconsistent keys (expected {expected:?})")]
    InconsistentKeys {
        name: String,
        expected: Vec<String>,
    },

    /// A ramp designated as neutral is not part of the ramp set.
    #[error("Neutral ramp \"{0}\" is not defined")]
    UnknownNeutral(String),
}

/// A string could not be turned into a color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid color \"{input}\": {reason}")]
pub struct InvalidColorError {
    /// The offending input, as given.
    pub input: String,
    pub reason: String,
}

impl InvalidColorError {
    pub(crate) fn new(input: &str, reason: impl ToString) -> Self {
        Self { input: input.to_string(), reason: reason.to_string() }
    }
}
