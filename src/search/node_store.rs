use crate::{Cost, Point};

/// The version counter of a [`NodeStore`]
pub type Epoch = u32;

/// Which list of the search a Node is on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Membership {
	/// Not discovered during the current search
	Unseen,
	/// Discovered, waiting in the [`OpenSet`](super::OpenSet)
	Open,
	/// Expanded
	Closed,
}

/// The search information of a single Point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeState {
	/// The Cost of the cheapest known Path from the start
	pub g_cost: Cost,
	/// The estimated Cost towards the goal
	pub h_cost: Cost,
	/// `g_cost + h_cost`, the order of the [`OpenSet`](super::OpenSet)
	pub rank: Cost,
	/// The previous Point on the cheapest known Path. `None` for the start.
	pub parent: Option<Point>,
	/// The list the Node is on
	pub membership: Membership,
	/// The position in the [`OpenSet`](super::OpenSet). Only meaningful while `membership` is
	/// [`Membership::Open`].
	pub heap_index: Option<usize>,
}

impl NodeState {
	/// The state of every Point that was not touched during the current search
	pub const UNSEEN: NodeState = NodeState {
		g_cost: Cost::MAX,
		h_cost: 0,
		rank: Cost::MAX,
		parent: None,
		membership: Membership::Unseen,
		heap_index: None,
	};
}

impl Default for NodeState {
	fn default() -> NodeState {
		NodeState::UNSEEN
	}
}

#[derive(Clone, Copy, Debug)]
struct Slot {
	epoch: Epoch,
	state: NodeState,
}

/// Per-Point search state for an entire Grid, reusable across searches.
///
/// Every entry is tagged with the [`Epoch`] it was last written in. Calling [`reset`](NodeStore::reset)
/// bumps the current Epoch, which turns every entry into [`NodeState::UNSEEN`] without touching
/// it. Entries are lazily reinitialized the first time they are accessed in a new Epoch.
#[derive(Clone, Debug)]
pub struct NodeStore {
	width: usize,
	height: usize,
	slots: Vec<Slot>,
	epoch: Epoch,
}

impl NodeStore {
	/// Creates a new NodeStore for a Grid of the given size
	pub fn new((width, height): (usize, usize)) -> NodeStore {
		NodeStore {
			width,
			height,
			slots: vec![
				Slot {
					epoch: 0,
					state: NodeState::UNSEEN,
				};
				width * height
			],
			epoch: 1,
		}
	}

	/// The `(width, height)` this store was created for
	pub fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}

	/// The current Epoch
	pub fn epoch(&self) -> Epoch {
		self.epoch
	}

	/// Invalidates every entry in O(1).
	///
	/// Once every `Epoch::MAX` resets the counter wraps around, in which case all tags are
	/// cleared so that no entry from `Epoch::MAX` generations ago becomes valid again.
	pub fn reset(&mut self) {
		self.epoch = self.epoch.wrapping_add(1);
		if self.epoch == 0 {
			log::debug!("NodeStore epoch wrapped, clearing {} tags", self.slots.len());
			for slot in self.slots.iter_mut() {
				slot.epoch = 0;
			}
			self.epoch = 1;
		}
	}

	/// Reallocates the store for a different size. All entries become [`NodeState::UNSEEN`].
	pub fn resize(&mut self, size: (usize, usize)) {
		log::debug!("resizing NodeStore from {:?} to {:?}", self.size(), size);
		*self = NodeStore::new(size);
	}

	/// Returns the state of `point`, reinitializing it first if it is stale.
	#[track_caller]
	pub fn get(&mut self, point: Point) -> NodeState {
		*self.get_mut(point)
	}

	/// Returns a mutable reference to the state of `point`, reinitializing it first if it is stale.
	#[track_caller]
	pub fn get_mut(&mut self, point: Point) -> &mut NodeState {
		let index = self.index_of(point);
		let epoch = self.epoch;
		let slot = &mut self.slots[index];
		if slot.epoch != epoch {
			slot.epoch = epoch;
			slot.state = NodeState::UNSEEN;
		}
		&mut slot.state
	}

	/// Overwrites the state of `point` for the current Epoch.
	#[track_caller]
	pub fn set(&mut self, point: Point, state: NodeState) {
		let index = self.index_of(point);
		self.slots[index] = Slot {
			epoch: self.epoch,
			state,
		};
	}

	/// Returns the state of `point` without reinitializing it, or `None` if it is stale.
	#[track_caller]
	pub fn peek(&self, point: Point) -> Option<&NodeState> {
		let slot = &self.slots[self.index_of(point)];
		(slot.epoch == self.epoch).then_some(&slot.state)
	}

	#[track_caller]
	fn index_of(&self, point: Point) -> usize {
		debug_assert!(
			point.0 < self.width && point.1 < self.height,
			"Point {:?} is out of bounds for a NodeStore of size ({}, {})",
			point,
			self.width,
			self.height
		);
		point.1 * self.width + point.0
	}
}
