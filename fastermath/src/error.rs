#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid spline resolution: {bits} index bits, expected 1..={max}")]
    InvalidSplineResolution { bits: u32, max: u32 },
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),
}

pub type Result<T> = std::result::Result<T, Error>;
