use log::debug;

use crate::model::{BookId, Books, User, UserId, Users};
use crate::{Error, Result};

#[derive(Debug, Default)]
pub struct UserStore {
    users: Users,
}

impl UserStore {
    /// Registers a new user under a freshly issued id and returns a copy of it.
    pub fn create(&mut self, name: impl ToString) -> User {
        let user = User::new(UserId::new(), name);
        debug!("created user: {} ({})", user.name(), user.id());
        self.users.insert(user.id(), user.clone());
        user
    }

    pub fn get(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    pub fn contains(&self, id: &UserId) -> bool {
        self.users.contains_key(id)
    }

    /// Removes the user. Other users' friend sets still refer to the removed id afterwards.
    pub fn remove(&mut self, id: &UserId) -> Option<User> {
        let removed = self.users.remove(id);
        if removed.is_some() {
            debug!("removed user: {}", id);
        }
        removed
    }

    /// Adds the single directed edge `user_id -> friend_id`.
    pub fn add_friend(&mut self, user_id: &UserId, friend_id: &UserId) -> Result<()> {
        if !self.users.contains_key(friend_id) {
            return Err(Error::UserNotFound(*friend_id));
        }
        let user = self.get_mut(user_id)?;
        if user.add_friend(*friend_id) {
            debug!("added friend edge: {} -> {}", user_id, friend_id);
        }
        Ok(())
    }

    /// Adds `book_id` to the user's list. `books` is consulted so that a user never refers to an
    /// unregistered book.
    pub fn add_book(&mut self, user_id: &UserId, book_id: &BookId, books: &Books) -> Result<()> {
        if !books.contains_key(book_id) {
            return Err(Error::BookNotFound(*book_id));
        }
        let user = self.get_mut(user_id)?;
        if user.add_book(*book_id) {
            debug!("added book {} to list of {}", book_id, user_id);
        }
        Ok(())
    }

    /// Read-only view of every registered user.
    pub fn users(&self) -> &Users {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn get_mut(&mut self, id: &UserId) -> Result<&mut User> {
        self.users.get_mut(id).ok_or(Error::UserNotFound(*id))
    }
}
