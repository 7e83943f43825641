#![warn(
	missing_docs,
	missing_debug_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate for repeatedly finding the cheapest Path across a weighted terrain Grid.
//!
//! ## Introduction
//! Every Tile of a [`Grid`] has a [`Terrain`], and every Terrain has a Cost multiplier (see
//! [`TerrainCosts`]). Walking onto a Tile costs the length of the step (`10` for a straight step,
//! `14` for a diagonal one) times the multiplier of that Tile. There are no solid Tiles: an
//! expensive Terrain like water is avoided whenever there is a cheaper way around it, but it can
//! always be crossed.
//!
//! Paths are found with A* by a [`Pathfinder`]. The interesting part is what happens
//! *between* searches: a Pathfinder keeps its per-Tile state and its open list around, and a new
//! search invalidates all of it in O(1) by bumping a generation counter. Tiles are only
//! reinitialized when a search actually touches them, so running thousands of short searches on
//! a large Grid costs nothing but the searches themselves.
//!
//! ## Examples
//! ```
//! use terrain_pathfinding::{Grid, Pathfinder, Terrain};
//!
//! // ~ = water, : = sand, . = grass, # = forest
//! let grid: Grid = "
//!     ..~..
//!     ..~..
//!     ..~..
//!     ..~..
//!     .....
//! ".parse().unwrap();
//!
//! let mut pathfinder = Pathfinder::for_grid(&grid);
//!
//! let path = pathfinder.find_path(&grid, (0, 0), (4, 0)).unwrap();
//!
//! // walking around the water is cheaper than crossing it
//! assert!(path.iter().any(|&point| point == (2, 4)));
//! assert!(path.cost() < 1000);
//!
//! // Paths are returned goal first
//! assert_eq!(path[0], (4, 0));
//! assert_eq!(path.start_first()[0], (0, 0));
//! ```
//!
//! The Pathfinder does not store the Grid, so the same Pathfinder can be used again after the
//! Grid changed, and any number of Pathfinders can search the same Grid at the same time:
//! ```
//! # use terrain_pathfinding::{Grid, Pathfinder, Terrain};
//! let mut grid = Grid::new((5, 5), Terrain::Grass);
//! let mut pathfinder = Pathfinder::for_grid(&grid);
//!
//! assert_eq!(pathfinder.find_path(&grid, (0, 2), (4, 2)).unwrap().cost(), 40);
//!
//! for y in 0..5 {
//!     grid.set_terrain((2, y), Terrain::Forest);
//! }
//! assert_eq!(pathfinder.find_path(&grid, (0, 2), (4, 2)).unwrap().cost(), 30 + 10 * 40);
//! ```
//! See [`SharedGrid`] for regenerating a Grid while other threads search it, and [`find_paths`]
//! for running a batch of searches in parallel.
//!
//! ### Configuration
//! The estimate that guides the search is part of the Grid ([`Heuristic`]), while limits on
//! the search itself are part of the [`PathfinderConfig`]:
//! ```
//! use terrain_pathfinding::{Grid, Heuristic, Pathfinder, PathfinderConfig, Terrain};
//!
//! let grid = Grid::new((64, 64), Terrain::Grass).with_heuristic(Heuristic::Octile);
//! let mut pathfinder = Pathfinder::new(
//!     (64, 64),
//!     PathfinderConfig {
//!         max_expansions: Some(10),
//!         ..PathfinderConfig::UNBOUNDED
//!     },
//! );
//!
//! assert!(pathfinder.find_path(&grid, (0, 0), (63, 63)).is_none());
//! ```

/// A shorthand for Points on the grid
pub type Point = (usize, usize);

/// The Type used for the Cost of Paths and steps
pub type Cost = usize;

pub mod neighbors;

mod terrain;
pub use self::terrain::{Terrain, TerrainCosts};

mod pather;
pub use self::pather::{Heuristic, Pather};

mod grid;
pub use self::grid::{Grid, ParseGridError};

mod path;
pub use self::path::{Iter, Path};

pub mod search;
pub use self::search::{Pathfinder, PathfinderConfig, SearchStats};

mod shared;
pub use self::shared::SharedGrid;

mod parallel;
pub use self::parallel::find_paths;

/// The most commonly used items
pub mod prelude {
	pub use crate::{
		find_paths,
		neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
		Grid, Heuristic, Path, Pather, Pathfinder, PathfinderConfig, SharedGrid, Terrain,
		TerrainCosts,
	};
}
