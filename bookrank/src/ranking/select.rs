use std::collections::HashMap;

use itertools::Itertools;

use crate::model::{Book, BookId};
use crate::ranking::{Order, Snapshot};

/// Number of users (or friends) holding each candidate book.
pub type Counts = HashMap<BookId, usize>;

/// Orders `counts` by count in `order`, breaking ties by ascending [BookId], and returns at most
/// `capacity` resolved books. Unregistered ids are not candidates.
pub(crate) fn select(
    snapshot: Snapshot,
    counts: &Counts,
    order: Order,
    capacity: usize,
) -> Vec<Book> {
    counts
        .iter()
        .sorted_by(|(a_id, a), (b_id, b)| order.compare(**a, **b).then_with(|| a_id.cmp(b_id)))
        .filter_map(|(id, _)| snapshot.book(id))
        .take(capacity)
        .cloned()
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::ranking::select::{select, Counts};
    use crate::ranking::Order;
    use crate::test_util::{book_id, TestGraph};

    fn counts(pairs: &[(u128, usize)]) -> Counts {
        pairs.iter().map(|(n, c)| (book_id(*n), *c)).collect()
    }

    fn ids(graph: &TestGraph, counts: &Counts, order: Order, capacity: usize) -> Vec<u128> {
        select(graph.snapshot(), counts, order, capacity)
            .iter()
            .map(|b| b.id().as_uuid().as_u128())
            .collect_vec()
    }

    #[test]
    fn ascending_with_id_tie_break() {
        let graph = TestGraph::default().user(1, &[1, 2, 3, 4]);
        let counts = counts(&[(4, 1), (1, 3), (3, 1), (2, 2)]);
        assert_eq!(ids(&graph, &counts, Order::Ascending, 10), vec![3, 4, 2, 1]);
    }

    #[test]
    fn descending_with_id_tie_break() {
        let graph = TestGraph::default().user(1, &[1, 2, 3, 4]);
        let counts = counts(&[(4, 1), (1, 3), (3, 1), (2, 2)]);
        assert_eq!(ids(&graph, &counts, Order::Descending, 10), vec![1, 2, 3, 4]);
    }

    #[test]
    fn capacity() {
        let graph = TestGraph::default().user(1, &[1, 2, 3]);
        let counts = counts(&[(1, 1), (2, 1), (3, 1)]);
        assert_eq!(ids(&graph, &counts, Order::Ascending, 2), vec![1, 2]);
        assert!(ids(&graph, &counts, Order::Ascending, 0).is_empty());
    }

    #[test]
    fn unregistered_books_are_not_candidates() {
        let graph = TestGraph::default().user(1, &[1, 3]);
        let counts = counts(&[(1, 2), (2, 1), (3, 3)]);
        assert_eq!(ids(&graph, &counts, Order::Ascending, 2), vec![1, 3]);
    }
}
