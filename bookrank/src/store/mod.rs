//! Keyed in-memory stores for [Book](crate::model::Book)s and [User](crate::model::User)s.
//!
//! The stores own every entity. Everything else, the ranking engine included, reads them through
//! the shared [Books](crate::model::Books) and [Users](crate::model::Users) views.

pub use books::*;
pub use users::*;

mod books;
mod users;
