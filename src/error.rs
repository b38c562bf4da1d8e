use thiserror::Error;

use crate::Script;

/// Shaping failure.
///
/// Every variant except [`ShapingError::UnmappedCodepoint`] aborts the call.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ShapingError {
    /// The script has no registered feature list and no feature was requested.
    #[error("script {} has no registered feature list", .0.tag())]
    UnsupportedScript(Script),

    /// The face has no glyph for a codepoint. Recovered by the notdef glyph.
    #[error("no glyph for codepoint U+{0:04X}")]
    UnmappedCodepoint(u32),

    /// A substitution would grow the buffer past its limit.
    #[error("buffer length {len} exceeds the limit of {max}")]
    BufferOverflow {
        /// The length the buffer would have grown to.
        len: usize,
        /// The maximum allowed length.
        max: usize,
    },

    /// A lookup ran out of its operation budget or recursed too deep.
    #[error("lookup {lookup} does not terminate")]
    RuleLoopDetected {
        /// Index of the lookup being applied.
        lookup: u16,
    },

    /// The segment cannot be shaped.
    #[error("invalid segment: {0}")]
    InvalidSegment(&'static str),

    /// The buffer could not grow.
    #[error("memory allocation failed")]
    AllocationFailure,
}

/// Library setup failure.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// `setup` was already called, or shaping already used the defaults.
    #[error("the shaper is already configured")]
    AlreadyConfigured,

    /// A limit is zero or otherwise unusable.
    #[error("invalid limit: {0}")]
    InvalidLimit(&'static str),
}
