use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    EmptyName,
    #[error("phone number must have more than 5 digits: {0}")]
    InvalidPhone(String),
    #[error("email must contain @: {0}")]
    InvalidEmail(String),
    #[error("write birthday in format like \"27 August 1987\": {0}")]
    InvalidBirthday(String),
    #[error("unknown record field: {0}")]
    UnknownField(String),
    #[error("invalid page size: {0}")]
    InvalidPageSize(usize),
}
