pub mod compare;
pub mod validate;

/// What a successful command run concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command completed; for `compare`, both sides are equivalent
    Success,
    /// The compared sides differ
    Mismatch,
}
