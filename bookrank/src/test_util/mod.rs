use uuid::Uuid;

use crate::model::{Book, BookId, Books, User, UserId, Users};
use crate::ranking::Snapshot;

pub const BEN: u128 = 1;
pub const RAM: u128 = 2;
pub const MOHAN: u128 = 3;
pub const KEVIN: u128 = 4;

pub fn book_id(n: u128) -> BookId {
    BookId::from(Uuid::from_u128(n))
}

pub fn user_id(n: u128) -> UserId {
    UserId::from(Uuid::from_u128(n))
}

/// Builds small social graphs with fixed ids. Book `n` has id `book_id(n)` and is named `Book{n}`.
#[derive(Debug, Default)]
pub struct TestGraph {
    pub books: Books,
    pub users: Users,
}

impl TestGraph {
    /// Adds user `n` holding `books`, registering any book not seen before.
    pub fn user(mut self, n: u128, books: &[u128]) -> Self {
        let mut user = User::new(user_id(n), format!("User{}", n));
        for b in books {
            let id = book_id(*b);
            self.books
                .entry(id)
                .or_insert_with(|| Book::new(id, format!("Book{}", b)));
            user.add_book(id);
        }
        self.users.insert(user.id(), user);
        self
    }

    /// Adds the friend edge in both directions.
    pub fn friends(self, a: u128, b: u128) -> Self {
        self.friend_edge(a, b).friend_edge(b, a)
    }

    /// Adds the directed edge `a -> b` without checking that `b` exists.
    pub fn friend_edge(mut self, a: u128, b: u128) -> Self {
        self.users
            .get_mut(&user_id(a))
            .expect("user must be added before its edges")
            .add_friend(user_id(b));
        self
    }

    /// Puts an unregistered book id into the list of user `n`.
    pub fn dangling_book(mut self, n: u128, book: u128) -> Self {
        self.users
            .get_mut(&user_id(n))
            .expect("user must be added before its books")
            .add_book(book_id(book));
        self
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.books, &self.users)
    }
}

/// Ben {1,2,3}, Ram {3,4,5}, Mohan {1,2,6}, Kevin {5,1,4} with friendships Kevin-Ram, Ben-Mohan
/// and Ram-Ben.
pub fn reference_network() -> TestGraph {
    TestGraph::default()
        .user(BEN, &[1, 2, 3])
        .user(RAM, &[3, 4, 5])
        .user(MOHAN, &[1, 2, 6])
        .user(KEVIN, &[5, 1, 4])
        .friends(KEVIN, RAM)
        .friends(BEN, MOHAN)
        .friends(RAM, BEN)
}
