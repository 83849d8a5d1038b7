use std::collections::{HashSet, VecDeque};

use itertools::Itertools;
use log::{debug, trace};

use crate::model::{Book, UserId};
use crate::ranking::select::{select, Counts};
use crate::ranking::{Config, Ranker, Snapshot};
use crate::Result;

/// Ranks books by how many users in a neighborhood of the social graph hold them.
#[derive(Debug, Default, Clone)]
pub struct Popularity {
    config: Config,
}

impl Popularity {
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// For each book in the list of `user_id`, the number of direct friends that also have it.
    /// Books that no friend has are left out.
    pub fn friend_overlap(&self, snapshot: Snapshot, user_id: &UserId) -> Result<Counts> {
        let user = snapshot.user(user_id)?;
        let friends = snapshot.friends_of(user).collect_vec();
        Ok(user
            .books()
            .iter()
            .filter_map(|book_id| {
                let count = friends.iter().filter(|f| f.has_book(book_id)).count();
                (count > 0).then_some((*book_id, count))
            })
            .collect())
    }

    /// Number of users holding each book, over a breadth-first walk of the friend graph starting
    /// at `user_id` (depth 0).
    ///
    /// The depth check happens when a user is dequeued and before their books are counted. The
    /// first user dequeued at `max_depth` ends the walk, so `max_depth == 0` counts nothing.
    /// Each user is counted once no matter how many paths lead to them.
    pub fn network_frequency(
        &self,
        snapshot: Snapshot,
        user_id: &UserId,
        max_depth: usize,
    ) -> Result<Counts> {
        let start = snapshot.user(user_id)?;
        let mut visited = HashSet::from([start.id()]);
        let mut queue = VecDeque::from([(start, 0)]);
        let mut frequency = Counts::new();

        while let Some((user, depth)) = queue.pop_front() {
            if depth == max_depth {
                debug!("depth cutoff at {} (depth {})", user.id(), depth);
                break;
            }
            trace!(
                "visiting {} at depth {} ({} books)",
                user.id(),
                depth,
                user.books().len()
            );
            for book_id in user.books() {
                *frequency.entry(*book_id).or_default() += 1;
            }
            for friend in snapshot.friends_of(user) {
                if visited.insert(friend.id()) {
                    queue.push_back((friend, depth + 1));
                }
            }
        }

        debug!(
            "network of {} up to depth {}: {} users visited, {} distinct books",
            user_id,
            max_depth,
            visited.len(),
            frequency.len()
        );
        Ok(frequency)
    }
}

impl Ranker for Popularity {
    fn top_books_among_friends(
        &self,
        snapshot: Snapshot,
        user_id: &UserId,
        capacity: usize,
    ) -> Result<Vec<Book>> {
        let counts = self.friend_overlap(snapshot, user_id)?;
        debug!("friend overlap for {}: {:?}", user_id, counts);
        Ok(select(snapshot, &counts, self.config.order, capacity))
    }

    fn top_books_in_network(
        &self,
        snapshot: Snapshot,
        user_id: &UserId,
        capacity: usize,
        max_depth: usize,
    ) -> Result<Vec<Book>> {
        let frequency = self.network_frequency(snapshot, user_id, max_depth)?;
        Ok(select(snapshot, &frequency, self.config.order, capacity))
    }
}
