use thiserror::Error;

pub type KxResult<T> = Result<T, KxError>;

#[derive(Error, Debug)]
pub enum KxError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
