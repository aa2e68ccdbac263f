//! Lazy ancestor and descendant traversal.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::store::RecordStore;

/// Which way a lineage walk follows the parent-child links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineageDirection {
    /// Follow child → parent links
    Ancestors,
    /// Follow parent → child links
    Descendants,
}

/// A relative reached by a lineage walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kin<'a> {
    /// Identifier of the relative
    pub id: &'a str,
    /// Number of links between the start patient and this relative
    pub generation: u32,
}

/// Breadth-first walk over ancestors or descendants of one patient
///
/// Each relative is yielded once, at its shortest generation distance; the
/// start patient is never yielded. Nothing is computed until the iterator
/// is advanced, so callers looking for one relative stop early.
#[derive(Debug, Clone)]
pub struct Lineage<'a> {
    store: &'a RecordStore,
    direction: LineageDirection,
    queue: VecDeque<Kin<'a>>,
    visited: FxHashSet<&'a str>,
}

impl<'a> Lineage<'a> {
    pub(crate) fn new(store: &'a RecordStore, start: &'a str, direction: LineageDirection) -> Self {
        let mut lineage = Self {
            store,
            direction,
            queue: VecDeque::new(),
            visited: FxHashSet::default(),
        };
        lineage.visited.insert(start);
        lineage.enqueue_next(start, 1);
        lineage
    }

    /// The direction of this walk
    #[must_use]
    pub const fn direction(&self) -> LineageDirection {
        self.direction
    }

    /// Only the identifiers of the relatives
    pub fn ids(self) -> impl Iterator<Item = &'a str> {
        self.map(|kin| kin.id)
    }

    fn enqueue_next(&mut self, id: &'a str, generation: u32) {
        let store = self.store;
        match self.direction {
            LineageDirection::Ancestors => {
                for (parent, _) in store.parent_ids(id) {
                    if self.visited.insert(parent) {
                        self.queue.push_back(Kin { id: parent, generation });
                    }
                }
            }
            LineageDirection::Descendants => {
                for child in store.child_ids(id) {
                    if self.visited.insert(child.as_str()) {
                        self.queue.push_back(Kin {
                            id: child.as_str(),
                            generation,
                        });
                    }
                }
            }
        }
    }
}

impl<'a> Iterator for Lineage<'a> {
    type Item = Kin<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let kin = self.queue.pop_front()?;
        self.enqueue_next(kin.id, kin.generation + 1);
        Some(kin)
    }
}
