use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("output buffer has length {output}, input has length {input}")]
    LengthMismatch { input: usize, output: usize },
    #[error("counting range bound must not be negative")]
    NegativeBound,
    #[error("counting range bound is too large to allocate a count array")]
    BoundTooLarge,
    #[error("value at index {index} lies outside the counting range [0, k]")]
    ValueOutOfRange { index: usize },
    #[error("value at index {index} is not below the merge sentinel")]
    SentinelCollision { index: usize },
    #[error("unknown algorithm '{0}'")]
    UnknownAlgorithm(String),
    #[error("{algorithm} sort is not supported for this element type")]
    Unsupported { algorithm: &'static str },
}
