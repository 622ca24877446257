use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("name is required")]
    EmptyName,
    #[error("invalid phone: {0}")]
    InvalidPhone(String),
    #[error("invalid birthday: {0}")]
    InvalidBirthday(String),
    #[error("invalid birthday day {day} for month {month}")]
    InvalidBirthdayDate { month: u8, day: u8 },
    #[error("phone {0} not found")]
    PhoneNotFound(String),
    #[error("search query is empty")]
    EmptySearchQuery,
    #[error("invalid search query: {0}")]
    InvalidSearchQuery(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
}

impl CoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::PhoneNotFound(_) => ErrorKind::NotFound,
            CoreError::EmptyName
            | CoreError::InvalidPhone(_)
            | CoreError::InvalidBirthday(_)
            | CoreError::InvalidBirthdayDate { .. }
            | CoreError::EmptySearchQuery
            | CoreError::InvalidSearchQuery(_) => ErrorKind::Validation,
        }
    }
}
