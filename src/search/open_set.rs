use super::{Membership, NodeStore};
use crate::{Cost, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
	point: Point,
	rank: Cost,
	h_cost: Cost,
	seq: u64,
}

impl Entry {
	/// Lowest rank first. Ties go to the Entry closer to the goal, then to the older Entry.
	fn key(&self) -> (Cost, Cost, u64) {
		(self.rank, self.h_cost, self.seq)
	}
}

/// A binary min-heap of Points ordered by rank, with support for decreasing the rank of an
/// Entry in place.
///
/// The OpenSet keeps the `heap_index` and `membership` of its Points in the [`NodeStore`] up to
/// date: every Point in the heap is [`Membership::Open`] and its `heap_index` is its current
/// position in the heap.
#[derive(Clone, Debug, Default)]
pub struct OpenSet {
	entries: Vec<Entry>,
	next_seq: u64,
}

impl OpenSet {
	/// Creates an empty OpenSet
	pub fn new() -> OpenSet {
		OpenSet::default()
	}

	/// Creates an empty OpenSet with room for `capacity` Entries
	pub fn with_capacity(capacity: usize) -> OpenSet {
		OpenSet {
			entries: Vec::with_capacity(capacity),
			next_seq: 0,
		}
	}

	/// The number of Points in the heap
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Checks if the heap is empty
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Removes all Entries without touching the NodeStore.
	///
	/// The `heap_index` of the removed Points is left dangling, which is fine as long as the
	/// NodeStore is [`reset`](NodeStore::reset) before the next search.
	pub fn clear(&mut self) {
		self.entries.clear();
		self.next_seq = 0;
	}

	/// The Point with the lowest rank, without removing it
	pub fn peek_min(&self) -> Option<(Point, Cost)> {
		self.entries.first().map(|entry| (entry.point, entry.rank))
	}

	/// Adds `point` with the given `rank` and marks it as [`Membership::Open`].
	///
	/// The `h_cost` currently stored for `point` is used to break ties.
	#[track_caller]
	pub fn push(&mut self, store: &mut NodeStore, point: Point, rank: Cost) {
		let state = store.get_mut(point);
		debug_assert!(
			state.membership != Membership::Open,
			"{:?} is already in the OpenSet",
			point
		);
		state.membership = Membership::Open;
		let h_cost = state.h_cost;

		let seq = self.next_seq;
		self.next_seq += 1;

		self.entries.push(Entry {
			point,
			rank,
			h_cost,
			seq,
		});
		self.sift_up(store, self.entries.len() - 1);
	}

	/// Removes the Point with the lowest rank and marks it as [`Membership::Closed`].
	pub fn pop_min(&mut self, store: &mut NodeStore) -> Option<(Point, Cost)> {
		if self.entries.is_empty() {
			return None;
		}
		let min = self.entries.swap_remove(0);
		if !self.entries.is_empty() {
			self.place(store, 0);
			self.sift_down(store, 0);
		}

		let state = store.get_mut(min.point);
		state.membership = Membership::Closed;
		state.heap_index = None;

		Some((min.point, min.rank))
	}

	/// Lowers the rank of a Point that is already in the heap.
	///
	/// ## Panics
	/// If `point` is not [`Membership::Open`].
	/// In debug builds also if `new_rank` is not lower than the current rank.
	#[track_caller]
	pub fn decrease_key(&mut self, store: &mut NodeStore, point: Point, new_rank: Cost) {
		let state = store.get(point);
		let index = match (state.membership, state.heap_index) {
			(Membership::Open, Some(index)) => index,
			_ => panic!("decrease_key on {:?}, which is not in the OpenSet", point),
		};
		let entry = &mut self.entries[index];
		debug_assert_eq!(entry.point, point, "heap_index of {:?} is out of date", point);
		debug_assert!(
			new_rank < entry.rank,
			"decrease_key on {:?} from {} to {}",
			point,
			entry.rank,
			new_rank
		);
		entry.rank = new_rank;
		entry.h_cost = state.h_cost;
		self.sift_up(store, index);
	}

	fn sift_up(&mut self, store: &mut NodeStore, mut index: usize) {
		while index > 0 {
			let parent = (index - 1) / 2;
			if self.entries[index].key() >= self.entries[parent].key() {
				break;
			}
			self.entries.swap(index, parent);
			self.place(store, index);
			index = parent;
		}
		self.place(store, index);
	}

	fn sift_down(&mut self, store: &mut NodeStore, mut index: usize) {
		let len = self.entries.len();
		loop {
			let left = 2 * index + 1;
			if left >= len {
				break;
			}
			let right = left + 1;
			let child = if right < len && self.entries[right].key() < self.entries[left].key() {
				right
			} else {
				left
			};
			if self.entries[child].key() >= self.entries[index].key() {
				break;
			}
			self.entries.swap(index, child);
			self.place(store, index);
			index = child;
		}
		self.place(store, index);
	}

	/// writes the position of the Entry at `index` back into the store
	fn place(&self, store: &mut NodeStore, index: usize) {
		store.get_mut(self.entries[index].point).heap_index = Some(index);
	}
}
