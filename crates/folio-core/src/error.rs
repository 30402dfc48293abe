use thiserror::Error;

/// Errors raised while building choreography curves or orbit layouts.
///
/// Sampling never fails; only construction validates its input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChoreoError {
    #[error("breakpoint set needs at least one point")]
    EmptyBreakpoints,
    #[error("breakpoint set has {progress} progress values but {values} values")]
    LengthMismatch { progress: usize, values: usize },
    #[error("breakpoint {index} is not a finite number")]
    NonFinite { index: usize },
    #[error("breakpoint progress decreases at index {index} ({prev} -> {next})")]
    Unsorted { index: usize, prev: f32, next: f32 },
    #[error("skill `{name}` sits on ring {ring} but the orbit has {ring_count} rings")]
    MissingRing {
        name: String,
        ring: usize,
        ring_count: usize,
    },
}

pub type Result<T> = std::result::Result<T, ChoreoError>;
