//! # Domain Entities
//!
//! Mutable working state for one assignment run, and the finished
//! [`Assignment`] handed back to the caller.
//!
//! The phases work on positions: a user is its index in the caller's user
//! list and an object is its index in the caller's object list. Identifiers
//! are only touched again when the run is converted into an [`Assignment`].

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use super::value_objects::UserPair;

/// Pairwise count of shared objects between users.
///
/// Square and symmetric; the diagonal is always zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrossoverMatrix {
    size: usize,
    counts: Vec<usize>,
}

impl CrossoverMatrix {
    /// Zero-initialized matrix for `size` users.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            counts: vec![0; size * size],
        }
    }

    /// Number of users covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shared count between users `a` and `b`.
    pub fn get(&self, a: usize, b: usize) -> usize {
        self.counts[a * self.size + b]
    }

    /// Record one more object shared between `a` and `b`, in both directions.
    pub fn increment(&mut self, a: usize, b: usize) {
        debug_assert_ne!(a, b, "a user cannot share with itself");
        self.counts[a * self.size + b] += 1;
        self.counts[b * self.size + a] += 1;
    }

    /// Sum of user `a`'s row: every object it shares, counted once per partner.
    pub fn row_total(&self, a: usize) -> usize {
        self.counts[a * self.size..(a + 1) * self.size].iter().sum()
    }

    /// All unordered pairs, outer loop over users in input order and inner
    /// loop over the users after it.
    pub fn pairs(&self) -> impl Iterator<Item = UserPair> + '_ {
        (0..self.size).flat_map(move |i| ((i + 1)..self.size).map(move |j| UserPair::new(i, j)))
    }
}

/// FIFO of object positions that are still free for allocation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObjectPool {
    queue: VecDeque<usize>,
}

impl ObjectPool {
    /// Pool holding `order` minus anything marked in `claimed`, keeping order.
    pub fn from_unclaimed(order: &[usize], claimed: &[bool]) -> Self {
        Self {
            queue: order.iter().copied().filter(|&obj| !claimed[obj]).collect(),
        }
    }

    /// Take the next object.
    pub fn pop_front(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    /// Objects still available.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the pool is drained.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl FromIterator<usize> for ObjectPool {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            queue: iter.into_iter().collect(),
        }
    }
}

/// Per-run working state mutated by the allocation phases.
#[derive(Clone, Debug)]
pub struct AllocationState {
    /// Object positions assigned to each user position, in assignment order.
    pub slots: Vec<Vec<usize>>,
    /// Shared counts maintained as shared objects are placed.
    pub crossover: CrossoverMatrix,
}

impl AllocationState {
    /// Empty state for `num_users` users.
    pub fn new(num_users: usize) -> Self {
        Self {
            slots: vec![Vec::new(); num_users],
            crossover: CrossoverMatrix::new(num_users),
        }
    }

    /// Number of objects currently held by `user`.
    pub fn count(&self, user: usize) -> usize {
        self.slots[user].len()
    }

    /// Give `object` to both users and record the share.
    pub fn share(&mut self, a: usize, b: usize, object: usize) {
        self.slots[a].push(object);
        self.slots[b].push(object);
        self.crossover.increment(a, b);
    }

    /// Resolve positions back to the caller's identifiers.
    pub fn into_assignment<U: Clone, O: Clone>(self, users: &[U], objects: &[O]) -> Assignment<U, O> {
        let sequences = self
            .slots
            .into_iter()
            .map(|slot| slot.into_iter().map(|obj| objects[obj].clone()).collect())
            .collect();

        Assignment {
            users: users.to_vec(),
            sequences,
            crossover: self.crossover,
        }
    }
}

/// Mapping from each user to its ordered, duplicate-free object sequence.
///
/// Users keep the caller's input order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment<U, O> {
    users: Vec<U>,
    sequences: Vec<Vec<O>>,
    crossover: CrossoverMatrix,
}

impl<U, O> Assignment<U, O> {
    /// Build an assignment from sequences produced elsewhere.
    ///
    /// The crossover matrix is derived from pairwise intersections, since
    /// there is no record of which objects were placed as shared.
    ///
    /// # Panics
    ///
    /// If `users` and `sequences` differ in length.
    pub fn from_sequences(users: Vec<U>, sequences: Vec<Vec<O>>) -> Self
    where
        O: Eq + Hash,
    {
        assert_eq!(users.len(), sequences.len(), "one sequence per user");

        let sets: Vec<HashSet<&O>> = sequences.iter().map(|s| s.iter().collect()).collect();
        let mut crossover = CrossoverMatrix::new(users.len());
        let pairs: Vec<UserPair> = crossover.pairs().collect();
        for pair in pairs {
            let shared = sets[pair.first].intersection(&sets[pair.second]).count();
            for _ in 0..shared {
                crossover.increment(pair.first, pair.second);
            }
        }

        Self {
            users,
            sequences,
            crossover,
        }
    }

    /// Users in input order.
    pub fn users(&self) -> &[U] {
        &self.users
    }

    /// Number of users.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether there are no users.
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Objects assigned to `user`, if the user is part of this assignment.
    pub fn objects_for(&self, user: &U) -> Option<&[O]>
    where
        U: PartialEq,
    {
        self.users
            .iter()
            .position(|u| u == user)
            .map(|idx| self.sequences[idx].as_slice())
    }

    /// `(user, objects)` entries in input order.
    pub fn iter(&self) -> impl Iterator<Item = (&U, &[O])> {
        self.users
            .iter()
            .zip(self.sequences.iter().map(Vec::as_slice))
    }

    /// Flattened `(user, object)` rows, the shape tabular writers consume.
    pub fn rows(&self) -> impl Iterator<Item = (&U, &O)> {
        self.iter()
            .flat_map(|(user, objects)| objects.iter().map(move |obj| (user, obj)))
    }

    /// Total number of `(user, object)` rows.
    pub fn total_assigned(&self) -> usize {
        self.sequences.iter().map(Vec::len).sum()
    }

    /// Shared counts recorded while the assignment was built.
    pub fn crossover(&self) -> &CrossoverMatrix {
        &self.crossover
    }
}
