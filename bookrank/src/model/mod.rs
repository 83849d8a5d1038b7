use std::collections::HashMap;

pub use book::*;
pub use id::*;
pub use user::*;

mod book;
mod id;
mod user;

/// All registered books keyed by id.
pub type Books = HashMap<BookId, Book>;

/// All registered users keyed by id.
pub type Users = HashMap<UserId, User>;
