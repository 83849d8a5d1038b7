use std::cmp::Ordering;

#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Direction in which ranked books are sorted by their count before the capacity cut.
    pub order: Order,
}

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum Order {
    /// Lowest count first. This is the established behavior of the rankings even though it
    /// returns the least-read books for a "top" query.
    #[default]
    Ascending,

    /// Highest count first.
    Descending,
}

impl Order {
    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        match self {
            Order::Ascending => a.cmp(&b),
            Order::Descending => b.cmp(&a),
        }
    }
}
