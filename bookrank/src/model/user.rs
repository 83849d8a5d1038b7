use serde::Serialize;
use std::collections::HashSet;

use crate::model::{BookId, UserId};

/// A member of the social graph.
///
/// Friendship is symmetric by convention only: [User::friends] holds the outgoing edges of this
/// user and it is up to the caller (typically the [BookClub](crate::BookClub)) to add the reverse
/// edge. Only the [UserStore](crate::store::UserStore) mutates users.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct User {
    id: UserId,
    name: String,
    friends: HashSet<UserId>,
    books: HashSet<BookId>,
}

impl User {
    pub fn new(id: UserId, name: impl ToString) -> Self {
        Self {
            id,
            name: name.to_string(),
            friends: HashSet::new(),
            books: HashSet::new(),
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn friends(&self) -> &HashSet<UserId> {
        &self.friends
    }

    pub fn books(&self) -> &HashSet<BookId> {
        &self.books
    }

    pub fn has_book(&self, book_id: &BookId) -> bool {
        self.books.contains(book_id)
    }

    /// Returns false if the edge already existed.
    pub(crate) fn add_friend(&mut self, friend_id: UserId) -> bool {
        self.friends.insert(friend_id)
    }

    /// Returns false if the book was already in the list.
    pub(crate) fn add_book(&mut self, book_id: BookId) -> bool {
        self.books.insert(book_id)
    }
}
