use super::{Membership, NodeState, NodeStore, OpenSet, PathfinderConfig};
use crate::{Cost, Path, Pather, Point};

use std::time::Instant;

/// Counters describing the most recent search of a [`Pathfinder`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
	/// Points taken from the OpenSet and expanded. The goal itself is not counted.
	pub expanded: usize,
	/// Points added to the OpenSet, including the start and reopened Points
	pub pushed: usize,
	/// Points in the OpenSet whose rank was lowered
	pub decreased: usize,
	/// Closed Points that were opened again because a cheaper Path was found
	pub reopened: usize,
}

/// A reusable A* search over a [`Pather`].
///
/// A Pathfinder owns the per-Point search state for an entire Grid. Starting a new search
/// invalidates the previous one in O(1), so a single Pathfinder can run any number of
/// searches without clearing or reallocating anything.
///
/// The Grid itself is passed to every search instead of being stored. This allows the Grid to
/// be modified between searches and to be shared between several Pathfinders, for example one
/// per thread.
///
/// ## Examples
/// ```
/// use terrain_pathfinding::{Grid, Pathfinder, PathfinderConfig};
///
/// // ~ = water (100), . = grass (1)
/// let grid: Grid = "
///     ..~..
///     ..~..
///     .....
/// ".parse().unwrap();
///
/// let mut pathfinder = Pathfinder::new((grid.width(), grid.height()), PathfinderConfig::default());
///
/// let path = pathfinder.find_path(&grid, (0, 0), (4, 0)).unwrap();
///
/// // the Path walks around the water instead of through it
/// assert!(path.iter().all(|&(x, y)| x != 2 || y == 2));
/// assert_eq!(path.cost(), 14 + 14 + 14 + 14);
///
/// // Paths are goal first
/// assert_eq!(path[0], (4, 0));
/// assert_eq!(path[path.len() - 1], (0, 0));
/// ```
#[derive(Clone, Debug)]
pub struct Pathfinder {
	store: NodeStore,
	open: OpenSet,
	neighbors: Vec<Point>,
	config: PathfinderConfig,
	stats: SearchStats,
}

impl Pathfinder {
	/// Creates a new Pathfinder for Grids of the given size.
	///
	/// Searching a Grid of a different size reallocates the internal storage.
	pub fn new((width, height): (usize, usize), config: PathfinderConfig) -> Pathfinder {
		Pathfinder {
			store: NodeStore::new((width, height)),
			open: OpenSet::with_capacity((width + height) * 4),
			neighbors: Vec::with_capacity(8),
			config,
			stats: SearchStats::default(),
		}
	}

	/// Creates a new Pathfinder with the default config, sized for `pather`
	pub fn for_grid<P: Pather>(pather: &P) -> Pathfinder {
		Pathfinder::new(pather.size(), PathfinderConfig::default())
	}

	/// The config used for every search
	pub fn config(&self) -> &PathfinderConfig {
		&self.config
	}

	/// Changes the config for all future searches
	pub fn set_config(&mut self, config: PathfinderConfig) {
		self.config = config;
	}

	/// The counters of the most recent search
	pub fn last_stats(&self) -> SearchStats {
		self.stats
	}

	/// The state a Point was left in by the most recent search, or `None` if the search
	/// never touched it.
	pub fn node(&self, point: Point) -> Option<&NodeState> {
		self.store.peek(point)
	}

	/// Discards the state of the previous search.
	///
	/// This is done automatically at the start of every search.
	pub fn reset(&mut self) {
		self.store.reset();
		self.open.clear();
	}

	/// Searches for the cheapest Path from `start` to `goal`.
	///
	/// Every step costs [`Pather::cost_to`], and the search is guided by
	/// [`Pather::estimated_cost_to`]. Returns `None` if the goal cannot be reached or the search
	/// exceeds [`PathfinderConfig::max_expansions`].
	///
	/// The returned Path is **goal first** and contains both `start` and `goal`.
	///
	/// ## Panics
	/// If `start` or `goal` is out of bounds.
	///
	/// ## Examples
	/// ```
	/// # use terrain_pathfinding::{Grid, Pathfinder, Terrain};
	/// let grid = Grid::new((5, 5), Terrain::Grass);
	/// let mut pathfinder = Pathfinder::for_grid(&grid);
	///
	/// let path = pathfinder.find_path(&grid, (1, 1), (1, 1)).unwrap();
	/// assert_eq!(path, vec![(1, 1)]);
	/// assert_eq!(path.cost(), 0);
	///
	/// let path = pathfinder.find_path(&grid, (0, 0), (3, 3)).unwrap();
	/// assert_eq!(path.len(), 4);
	/// assert_eq!(path.cost(), 3 * 14);
	/// ```
	pub fn find_path<P: Pather>(&mut self, pather: &P, start: Point, goal: Point) -> Option<Path<Point>> {
		assert!(
			pather.in_bounds(start),
			"start {:?} is out of bounds for a Grid of size {:?}",
			start,
			pather.size()
		);
		assert!(
			pather.in_bounds(goal),
			"goal {:?} is out of bounds for a Grid of size {:?}",
			goal,
			pather.size()
		);
		if pather.size() != self.store.size() {
			self.store.resize(pather.size());
		}

		let timer = Instant::now();
		self.reset();
		self.stats = SearchStats::default();

		let h_cost = pather.estimated_cost_to(start, goal);
		self.store.set(
			start,
			NodeState {
				g_cost: 0,
				h_cost,
				rank: h_cost,
				..NodeState::UNSEEN
			},
		);
		self.open.push(&mut self.store, start, h_cost);
		self.stats.pushed += 1;

		let mut neighbors = std::mem::take(&mut self.neighbors);

		let path = loop {
			let Some((current, _)) = self.open.pop_min(&mut self.store) else {
				log::debug!("no Path from {:?} to {:?}", start, goal);
				break None;
			};
			if current == goal {
				break Some(self.reconstruct(goal));
			}
			if let Some(max) = self.config.max_expansions {
				if self.stats.expanded >= max {
					log::debug!(
						"giving up on Path from {:?} to {:?} after {} expansions",
						start,
						goal,
						max
					);
					break None;
				}
			}
			self.stats.expanded += 1;
			self.expand(pather, current, goal, &mut neighbors);
		};

		self.neighbors = neighbors;

		log::trace!(
			"A* from {:?} to {:?}: cost {:?}, {} expanded, took {:?}",
			start,
			goal,
			path.as_ref().map(Path::cost),
			self.stats.expanded,
			timer.elapsed()
		);

		path
	}

	fn expand<P: Pather>(&mut self, pather: &P, current: Point, goal: Point, neighbors: &mut Vec<Point>) {
		let current_cost = self.store.get(current).g_cost;

		neighbors.clear();
		pather.neighbors(current, neighbors);

		for &neighbor in neighbors.iter() {
			let g_cost = current_cost.saturating_add(pather.cost_to(current, neighbor));

			// a saturated Cost is never an improvement, not even over an unseen Point
			let previous = self.store.get(neighbor);
			if g_cost == Cost::MAX || g_cost >= previous.g_cost {
				continue;
			}
			if previous.membership == Membership::Closed && !self.config.reopen_closed {
				continue;
			}

			let h_cost = pather.estimated_cost_to(neighbor, goal);
			let rank = g_cost.saturating_add(h_cost);
			{
				let state = self.store.get_mut(neighbor);
				state.g_cost = g_cost;
				state.h_cost = h_cost;
				state.rank = rank;
				state.parent = Some(current);
			}

			match previous.membership {
				Membership::Open => {
					self.open.decrease_key(&mut self.store, neighbor, rank);
					self.stats.decreased += 1;
				}
				Membership::Closed => {
					self.open.push(&mut self.store, neighbor, rank);
					self.stats.pushed += 1;
					self.stats.reopened += 1;
				}
				Membership::Unseen => {
					self.open.push(&mut self.store, neighbor, rank);
					self.stats.pushed += 1;
				}
			}
		}
	}

	/// follows the parents from `goal` back to the start
	fn reconstruct(&mut self, goal: Point) -> Path<Point> {
		let cost = self.store.get(goal).g_cost;

		let mut steps = vec![goal];
		let mut current = goal;
		while let Some(parent) = self.store.get(current).parent {
			steps.push(parent);
			current = parent;
		}
		Path::new(steps, cost)
	}
}
