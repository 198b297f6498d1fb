use thiserror::Error;

/// Error reported when a combinator is constructed with invalid arguments.
///
/// Construction fails before any element is pulled; once a combinator has
/// been built, its `next` never returns an error. Exhaustion is always
/// signalled with `None`, never through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A step of zero was given to `range_step` or `slice_step`.
    ///
    /// A zero step can never advance toward the stop bound, so the
    /// construction is rejected rather than producing a sequence that
    /// spins forever.
    #[error("step must be non-zero")]
    ZeroStep,

    /// A negative step was given to `slice_step`.
    ///
    /// Slice targets are positions in a forward-moving source, so the
    /// target indices must increase.
    #[error("slice step must be positive, got {0}")]
    NegativeSliceStep(i64),
}
