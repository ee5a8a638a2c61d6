//! The open list shared by every search in this crate.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Ordering key of a queued node.
#[derive(Clone, Copy, Debug)]
struct Entry {
    f: f32,
    h: f32,
    seq: u64,
    id: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then(self.h.total_cmp(&other.h))
            .then(self.seq.cmp(&other.seq))
            .then(self.id.cmp(&other.id))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority structure of reachable-but-not-yet-expanded nodes.
///
/// Nodes are identified by an arena index. The minimum is the entry with the
/// lowest `f`; ties go to the lower `h` (closer to the goal), then to the
/// entry inserted first. Keys cannot be lowered in place: re-inserting an id
/// removes its previous entry.
#[derive(Debug, Default, Clone)]
pub struct Frontier {
    queue: BTreeSet<Entry>,
    entries: HashMap<usize, Entry>,
    seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.entries.clear();
        self.seq = 0;
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Queue `id` with ordering cost `f` and estimate `h`, replacing any
    /// entry it already has.
    pub fn insert(&mut self, id: usize, f: f32, h: f32) {
        self.remove(id);
        let entry = Entry {
            f,
            h,
            seq: self.seq,
            id,
        };
        self.seq += 1;
        self.queue.insert(entry);
        self.entries.insert(id, entry);
    }

    /// Remove `id` if queued. Returns whether it was.
    pub fn remove(&mut self, id: usize) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => self.queue.remove(&entry),
            None => false,
        }
    }

    pub fn contains(&self, id: usize) -> bool {
        self.entries.contains_key(&id)
    }

    /// The minimum entry as `(id, f)`.
    pub fn peek(&self) -> Option<(usize, f32)> {
        self.queue.first().map(|e| (e.id, e.f))
    }

    /// Remove and return the minimum id.
    pub fn pop(&mut self) -> Option<usize> {
        let entry = self.queue.pop_first()?;
        self.entries.remove(&entry.id);
        Some(entry.id)
    }

    /// The minimum ordering cost, or infinity when empty.
    pub fn min_key(&self) -> f32 {
        self.peek().map_or(f32::INFINITY, |(_, f)| f)
    }
}
