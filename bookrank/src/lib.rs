pub use book_club::BookClub;
pub use error::{Error, Result};
pub use ranking::Ranker;

pub mod book_club;
pub mod error;
pub mod model;
pub mod ranking;
pub mod store;

#[cfg(test)]
pub(crate) mod test_util;
