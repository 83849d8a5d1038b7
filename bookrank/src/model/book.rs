use serde::Serialize;
use std::fmt::{Display, Formatter};

use crate::model::BookId;

/// A registered book. Never mutated once created.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Book {
    id: BookId,
    name: String,
}

impl Book {
    pub fn new(id: BookId, name: impl ToString) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    /// Display name. Not unique across books.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Display for Book {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
