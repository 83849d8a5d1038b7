use thiserror::Error;

use crate::model::{BookId, UserId};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum Error {
    #[error("User '{0}' does not exist.")]
    UserNotFound(UserId),

    #[error("Book '{0}' does not exist.")]
    BookNotFound(BookId),

    #[error("Invalid argument '{name}' = {value}. Value must not be negative.")]
    InvalidArgument { name: &'static str, value: i64 },
}

/// Converts a signed external parameter into a count, rejecting negative values.
pub fn non_negative(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::InvalidArgument { name, value })
}
