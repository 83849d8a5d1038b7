use log::{debug, info};

use crate::error::non_negative;
use crate::model::{Book, BookId, User, UserId};
use crate::ranking::{Popularity, Ranker, Snapshot};
use crate::store::{BookStore, UserStore};
use crate::Result;

/// Entry point tying the stores to a [Ranker].
///
/// Mutations go to the stores, queries hand the [Ranker] a [Snapshot] of the current stores.
/// Ranking parameters arrive here as signed integers from callers and are checked before they
/// reach the ranker.
#[derive(Debug)]
pub struct BookClub {
    books: BookStore,
    users: UserStore,
    ranker: Box<dyn Ranker>,
}

impl Default for BookClub {
    fn default() -> Self {
        Self {
            books: Default::default(),
            users: Default::default(),
            ranker: Box::new(Popularity::default()),
        }
    }
}

impl BookClub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the [Ranker] used by all queries. Defaults to [Popularity].
    pub fn ranker(mut self, ranker: impl Ranker + 'static) -> Self {
        self.ranker = Box::new(ranker);
        self
    }

    pub fn create_user(&mut self, name: impl ToString) -> User {
        let user = self.users.create(name);
        info!("new user '{}' ({})", user.name(), user.id());
        user
    }

    pub fn add_book(&mut self, name: impl ToString) -> Book {
        let book = self.books.add(name);
        info!("new book '{}' ({})", book.name(), book.id());
        book
    }

    /// Removes the user without touching the friend lists that refer to them.
    pub fn remove_user(&mut self, user_id: &UserId) -> Option<User> {
        let removed = self.users.remove(user_id);
        if let Some(user) = &removed {
            info!("removed user '{}' ({})", user.name(), user.id());
        }
        removed
    }

    pub fn user(&self, user_id: &UserId) -> Option<&User> {
        self.users.get(user_id)
    }

    pub fn book(&self, book_id: &BookId) -> Option<&Book> {
        self.books.get(book_id)
    }

    /// Befriends both users with each other. Nothing changes unless both users exist.
    pub fn add_friend(&mut self, a: &UserId, b: &UserId) -> Result<()> {
        self.users.add_friend(a, b)?;
        self.users.add_friend(b, a)?;
        info!("friends: {} <-> {}", a, b);
        Ok(())
    }

    pub fn add_book_to_list(&mut self, user_id: &UserId, book_id: &BookId) -> Result<()> {
        self.users.add_book(user_id, book_id, self.books.books())?;
        info!("book {} added to list of {}", book_id, user_id);
        Ok(())
    }

    pub fn user_books(&self, user_id: &UserId) -> Result<Vec<Book>> {
        self.ranker.user_books(self.snapshot(), user_id)
    }

    pub fn top_books_among_friends(&self, user_id: &UserId, capacity: i64) -> Result<Vec<Book>> {
        let capacity = non_negative("capacity", capacity)?;
        debug!("top {} books among friends of {}", capacity, user_id);
        self.ranker
            .top_books_among_friends(self.snapshot(), user_id, capacity)
    }

    pub fn top_books_in_network(
        &self,
        user_id: &UserId,
        capacity: i64,
        max_depth: i64,
    ) -> Result<Vec<Book>> {
        let capacity = non_negative("capacity", capacity)?;
        let max_depth = non_negative("max_depth", max_depth)?;
        debug!(
            "top {} books in network of {} up to depth {}",
            capacity, user_id, max_depth
        );
        self.ranker
            .top_books_in_network(self.snapshot(), user_id, capacity, max_depth)
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.books.books(), self.users.users())
    }
}
