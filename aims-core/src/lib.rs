pub mod validation;

pub use validation::{
    parse_receive_time, validate_address, validate_basic_string, validate_name,
    validate_phone_number, validate_receive_time, RECEIVE_TIME_FORMAT,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Validation failed for {field}: {reason}")]
    Validation {
        field: String,
        reason: String,
    },
    #[error("Invalid receive time: {0}")]
    InvalidReceiveTime(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
