use log::{trace, warn};

use crate::model::{Book, BookId, Books, User, UserId, Users};
use crate::{Error, Result};

/// Read-only view over the book and user stores for the duration of one ranking call.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'s> {
    books: &'s Books,
    users: &'s Users,
}

impl<'s> Snapshot<'s> {
    pub fn new(books: &'s Books, users: &'s Users) -> Self {
        Self { books, users }
    }

    pub fn books(&self) -> &'s Books {
        self.books
    }

    pub fn users(&self) -> &'s Users {
        self.users
    }

    /// Looks up the user a query starts from.
    pub fn user(&self, id: &UserId) -> Result<&'s User> {
        self.users.get(id).ok_or(Error::UserNotFound(*id))
    }

    pub fn book(&self, id: &BookId) -> Option<&'s Book> {
        let book = self.books.get(id);
        if book.is_none() {
            warn!("skipping unregistered book id {}", id);
        }
        book
    }

    /// Friends of `user` that exist in the snapshot. Ids of removed users are skipped.
    pub fn friends_of(&self, user: &'s User) -> impl Iterator<Item = &'s User> + 's {
        let users = self.users;
        user.friends().iter().filter_map(move |id| {
            let friend = users.get(id);
            if friend.is_none() {
                trace!("skipping dangling friend id {} of {}", id, user.id());
            }
            friend
        })
    }

    /// Resolves ids to owned copies of their books, skipping unregistered ids.
    pub fn resolve<'i>(&self, ids: impl IntoIterator<Item = &'i BookId>) -> Vec<Book> {
        ids.into_iter()
            .filter_map(|id| self.book(id))
            .cloned()
            .collect()
    }
}
