use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use bookrank::model::{Book, BookId, UserId};
use bookrank::BookClub;

/// A social network plus the queries to run against it. Users and books are referred to by name,
/// which must be unique within a scenario.
#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub books: Vec<String>,
    #[serde(default)]
    pub users: Vec<UserEntry>,
    #[serde(default)]
    pub friendships: Vec<(String, String)>,
    #[serde(default)]
    pub queries: Vec<Query>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    pub name: String,
    #[serde(default)]
    pub books: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Query {
    Books { user: String },
    Friends { user: String, capacity: i64 },
    Network { user: String, capacity: i64, depth: i64 },
}

#[derive(Serialize, Debug)]
pub struct QueryResult {
    pub title: String,
    pub books: Vec<Book>,
}

/// A [BookClub] populated from a [Scenario], with the names used to populate it.
pub struct Network {
    pub club: BookClub,
    users: HashMap<String, UserId>,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("open scenario {:?}", path))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).with_context(|| format!("parse scenario {:?}", path))
    }

    /// Ben, Ram, Mohan and Kevin with six books, and the queries asked about Kevin.
    pub fn demo() -> Self {
        let user = |name: &str, books: &[&str]| UserEntry {
            name: name.to_string(),
            books: books.iter().map(|b| b.to_string()).collect_vec(),
        };
        let pair = |a: &str, b: &str| (a.to_string(), b.to_string());
        let kevin = "Kevin".to_string();
        Self {
            books: (1..=6).map(|i| format!("Book{}", i)).collect_vec(),
            users: vec![
                user("Ben", &["Book1", "Book2", "Book3"]),
                user("Ram", &["Book3", "Book4", "Book5"]),
                user("Mohan", &["Book1", "Book2", "Book6"]),
                user("Kevin", &["Book5", "Book1", "Book4"]),
            ],
            friendships: vec![
                pair("Kevin", "Ram"),
                pair("Ben", "Mohan"),
                pair("Ram", "Ben"),
            ],
            queries: vec![
                Query::Books { user: kevin.clone() },
                Query::Friends {
                    user: kevin.clone(),
                    capacity: 2,
                },
                Query::Network {
                    user: kevin,
                    capacity: 3,
                    depth: 3,
                },
            ],
        }
    }

    /// Populates `club` with every book, user and friendship of the scenario.
    pub fn build(&self, mut club: BookClub) -> Result<Network> {
        check_unique("book", self.books.iter())?;
        check_unique("user", self.users.iter().map(|u| &u.name))?;

        let books: HashMap<&str, BookId> = self
            .books
            .iter()
            .map(|name| (name.as_str(), club.add_book(name).id()))
            .collect();

        let mut users = HashMap::new();
        for entry in &self.users {
            let user_id = club.create_user(&entry.name).id();
            for book in &entry.books {
                let book_id = books
                    .get(book.as_str())
                    .ok_or_else(|| anyhow!("user '{}' lists unknown book '{}'", entry.name, book))?;
                club.add_book_to_list(&user_id, book_id)?;
            }
            users.insert(entry.name.clone(), user_id);
        }

        let mut network = Network { club, users };
        for (a, b) in &self.friendships {
            let a = network.user_id(a)?;
            let b = network.user_id(b)?;
            network.club.add_friend(&a, &b)?;
        }
        debug!(
            "built network: {} books, {} users, {} friendships",
            self.books.len(),
            self.users.len(),
            self.friendships.len()
        );
        Ok(network)
    }
}

impl Network {
    pub fn user_id(&self, name: &str) -> Result<UserId> {
        self.users
            .get(name)
            .copied()
            .ok_or_else(|| anyhow!("unknown user '{}'", name))
    }

    pub fn run(&self, query: &Query) -> Result<QueryResult> {
        let result = match query {
            Query::Books { user } => QueryResult {
                title: format!("All books of {}", user),
                books: self.club.user_books(&self.user_id(user)?)?,
            },
            Query::Friends { user, capacity } => QueryResult {
                title: format!("Top {} books of {} that friends have read", capacity, user),
                books: self
                    .club
                    .top_books_among_friends(&self.user_id(user)?, *capacity)?,
            },
            Query::Network {
                user,
                capacity,
                depth,
            } => QueryResult {
                title: format!(
                    "Top {} books in the network of {} up to depth {}",
                    capacity, user, depth
                ),
                books: self
                    .club
                    .top_books_in_network(&self.user_id(user)?, *capacity, *depth)?,
            },
        };
        Ok(result)
    }
}

fn check_unique<'a>(kind: &str, names: impl Iterator<Item = &'a String>) -> Result<()> {
    let duplicates = names.duplicates().join(", ");
    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("duplicate {} names: {}", kind, duplicates))
    }
}
