use thiserror::Error;

use crate::terms::Term;

#[derive(Debug, Error)]
pub enum FuzzyError {
    /// Break-points must be finite and non-decreasing
    #[error("malformed membership function: break-points {0:?} are not non-decreasing")]
    MalformedMembershipFunction(Vec<f64>),
    #[error("break-point {point} of term `{term}` lies outside the universe [{min}, {max}]")]
    BreakpointOutOfRange { term: Term, point: f64, min: f64, max: f64 },
    #[error("invalid universe: {0}")]
    InvalidUniverse(&'static str),
    #[error("variable `{0}` is defined more than once")]
    DuplicateVariable(String),
    #[error("unknown variable `{0}`")]
    UnknownVariable(String),
    #[error("variable `{variable}` has no term `{term}`")]
    UnknownTerm { variable: String, term: Term },
    /// Rules conclude terms of the output variable
    #[error("rule concludes `{term}`, which output variable `{variable}` does not define")]
    InvalidConsequence { variable: String, term: Term },
    #[error("output variable `{0}` cannot appear in a rule premise")]
    OutputInPremise(String),
    #[error("value given for `{0}`, which is not an input of this system")]
    UnknownInput(String),
    #[error("no value given for input variable `{0}`")]
    MissingInput(String),
    #[error("input for variable `{0}` is not a finite number")]
    NonFiniteInput(String),
    #[error("degree arrays differ in length ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("failed to parse system configuration")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = FuzzyError> = std::result::Result<T, E>;
