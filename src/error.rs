use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    #[error("not enough samples for a quadratic fit: have {0}, need at least 3")]
    TooFewSamples(usize),
    #[error("sample x values have no spread")]
    DegenerateX,
    #[error("observed y values have no spread, correlation is undefined")]
    DegenerateY,
    #[error("normal equations are singular")]
    Singular,
    #[error("fitted curve is flat over the samples, correlation is undefined")]
    FlatPrediction,
}
