use log::debug;

use crate::model::{Book, BookId, Books};

#[derive(Debug, Default)]
pub struct BookStore {
    books: Books,
}

impl BookStore {
    /// Registers a new book under a freshly issued id and returns a copy of it.
    pub fn add(&mut self, name: impl ToString) -> Book {
        let book = Book::new(BookId::new(), name);
        debug!("added book: {}", book);
        self.books.insert(book.id(), book.clone());
        book
    }

    pub fn get(&self, id: &BookId) -> Option<&Book> {
        self.books.get(id)
    }

    pub fn contains(&self, id: &BookId) -> bool {
        self.books.contains_key(id)
    }

    /// Read-only view of every registered book.
    pub fn books(&self) -> &Books {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
