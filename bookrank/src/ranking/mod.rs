use std::fmt::Debug;

pub use config::*;
pub use popularity::*;
pub use select::Counts;
pub use snapshot::*;

use crate::model::{Book, UserId};
use crate::Result;

mod config;
mod popularity;
mod select;
mod snapshot;

/// A strategy for looking up and ranking the books of a user's social graph.
///
/// Every operation is a pure function of the [Snapshot] it is given. Returned books are copies
/// and never alias the stores.
pub trait Ranker: Debug {
    /// Every book in the list of `user_id`, in no particular order.
    fn user_books(&self, snapshot: Snapshot, user_id: &UserId) -> Result<Vec<Book>> {
        let user = snapshot.user(user_id)?;
        Ok(snapshot.resolve(user.books()))
    }

    /// At most `capacity` books from the list of `user_id`, ranked by how many direct friends
    /// also have them. Books no friend has are not ranked.
    fn top_books_among_friends(
        &self,
        snapshot: Snapshot,
        user_id: &UserId,
        capacity: usize,
    ) -> Result<Vec<Book>>;

    /// At most `capacity` books ranked by how many users hold them within the friend network of
    /// `user_id`, explored breadth-first until the first user at `max_depth` is reached.
    fn top_books_in_network(
        &self,
        snapshot: Snapshot,
        user_id: &UserId,
        capacity: usize,
        max_depth: usize,
    ) -> Result<Vec<Book>>;
}
