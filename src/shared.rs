use crate::{
	neighbors::{MooreNeighborhood, Neighborhood},
	Grid, Path, Pathfinder, Point,
};
use std::sync::{
	atomic::{AtomicBool, Ordering},
	PoisonError, RwLock,
};

/// A [`Grid`] shared between searching threads and a thread that occasionally regenerates it.
///
/// Searches hold a read lock for their entire duration and regeneration holds the write lock,
/// so a search never sees a partially regenerated Grid. Requests to regenerate while a
/// regeneration is already running are dropped instead of queued.
///
/// ```
/// use terrain_pathfinding::{Grid, Pathfinder, SharedGrid, Terrain};
///
/// let shared = SharedGrid::new(Grid::new((8, 8), Terrain::Grass));
/// let mut pathfinder = Pathfinder::new((8, 8), Default::default());
///
/// assert_eq!(shared.find_path(&mut pathfinder, (0, 0), (7, 0)).unwrap().cost(), 70);
///
/// assert!(shared.regenerate(|grid| grid.regenerate(|_| Terrain::Forest)));
/// assert_eq!(shared.find_path(&mut pathfinder, (0, 0), (7, 0)).unwrap().cost(), 70 * 40);
/// ```
#[derive(Debug)]
pub struct SharedGrid<N: Neighborhood = MooreNeighborhood> {
	grid: RwLock<Grid<N>>,
	regenerating: AtomicBool,
}

impl<N: Neighborhood> SharedGrid<N> {
	/// Wraps a Grid
	pub fn new(grid: Grid<N>) -> SharedGrid<N> {
		SharedGrid {
			grid: RwLock::new(grid),
			regenerating: AtomicBool::new(false),
		}
	}

	/// Runs `f` with shared access to the Grid.
	///
	/// Blocks while a regeneration is running. If a regeneration panicked, the Grid is handed
	/// out in whatever state the regeneration left it in.
	pub fn read<R>(&self, f: impl FnOnce(&Grid<N>) -> R) -> R {
		let grid = self.grid.read().unwrap_or_else(PoisonError::into_inner);
		f(&grid)
	}

	/// Runs a search on the Grid. See [`Pathfinder::find_path`].
	pub fn find_path(&self, pathfinder: &mut Pathfinder, start: Point, goal: Point) -> Option<Path<Point>> {
		self.read(|grid| pathfinder.find_path(grid, start, goal))
	}

	/// Runs `f` with exclusive access to the Grid.
	///
	/// Returns `false` without running `f` if another regeneration is currently running.
	pub fn regenerate(&self, f: impl FnOnce(&mut Grid<N>)) -> bool {
		let Some(_flag) = RegenerationFlag::acquire(&self.regenerating) else {
			log::debug!("Grid is already being regenerated, skipping");
			return false;
		};
		let mut grid = self.grid.write().unwrap_or_else(PoisonError::into_inner);
		f(&mut grid);
		log::trace!("Grid regenerated");
		true
	}

	/// Checks if a regeneration is currently running
	pub fn is_regenerating(&self) -> bool {
		self.regenerating.load(Ordering::Acquire)
	}

	/// Returns the wrapped Grid
	pub fn into_inner(self) -> Grid<N> {
		self.grid.into_inner().unwrap_or_else(PoisonError::into_inner)
	}
}

/// cleared on drop, even if the regeneration panics
struct RegenerationFlag<'a>(&'a AtomicBool);

impl<'a> RegenerationFlag<'a> {
	fn acquire(flag: &'a AtomicBool) -> Option<RegenerationFlag<'a>> {
		flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
			.ok()
			.map(|_| RegenerationFlag(flag))
	}
}

impl Drop for RegenerationFlag<'_> {
	fn drop(&mut self) {
		self.0.store(false, Ordering::Release);
	}
}
