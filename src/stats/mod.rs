//! Aggregations over a [`TripTable`](crate::data::model::TripTable).
//!
//! Every function here takes trips and returns a plain struct without
//! printing anything. Rendering lives in `ui::report`.

pub mod duration;
pub mod station;
pub mod time;
pub mod user;

use std::collections::HashMap;
use std::hash::Hash;

// ---------------------------------------------------------------------------
// Frequent – a value and how often it occurred
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Frequent<T> {
    pub value: T,
    pub count: usize,
}

// ---------------------------------------------------------------------------
// Tally – occurrence counts in first-seen order
// ---------------------------------------------------------------------------

/// Counts keys while remembering the order they were first seen in.
///
/// Ranking is a stable sort by descending count, so among equal counts the
/// key that appeared first in the data always comes first.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Tally {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The highest count, earliest-seen on ties.
    pub fn most_common(&self) -> Option<Frequent<K>> {
        let mut best: Option<&(K, usize)> = None;
        for entry in &self.entries {
            if best.map_or(true, |b| entry.1 > b.1) {
                best = Some(entry);
            }
        }
        best.map(|(k, n)| Frequent {
            value: k.clone(),
            count: *n,
        })
    }

    /// All keys, most frequent first.
    pub fn ranked(&self) -> Vec<(K, usize)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl<K: Eq + Hash + Clone> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone> FromIterator<K> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tally = Tally::new();
        for key in iter {
            tally.add(key);
        }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ties_go_to_the_first_seen_key() {
        let tally: Tally<&str> = ["b", "a", "a", "b", "c"].into_iter().collect();
        assert_eq!(
            tally.most_common(),
            Some(Frequent {
                value: "b",
                count: 2
            })
        );
        assert_eq!(tally.ranked(), vec![("b", 2), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn later_key_wins_only_with_a_strictly_higher_count() {
        let tally: Tally<u32> = [1, 2, 2, 1, 2].into_iter().collect();
        assert_eq!(tally.most_common().map(|f| f.value), Some(2));
    }

    #[test]
    fn empty_tally_has_no_winner() {
        let tally: Tally<String> = Tally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.most_common(), None);
        assert!(tally.ranked().is_empty());
    }
}
