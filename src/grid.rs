use crate::{
	neighbors::{MooreNeighborhood, Neighborhood},
	Cost, Heuristic, Pather, Point, Terrain, TerrainCosts,
};
use std::{error::Error, fmt, str::FromStr};

/// A fixed-size Map of [`Terrain`] Tiles.
///
/// The Grid is indexed with `(x, y)` Points, where `x` is in `0..width` and `y` is in `0..height`.
/// Walking onto a Tile costs the step distance (see [`Neighborhood`]) multiplied by the
/// [`TerrainCosts`] entry of that Tile's Terrain.
///
/// ## Examples
/// ```
/// use terrain_pathfinding::{Grid, Terrain};
///
/// let grid: Grid = "\
/// ..~..
/// ..~..
/// .....".parse().unwrap();
///
/// assert_eq!((grid.width(), grid.height()), (5, 3));
/// assert_eq!(grid.terrain((2, 0)), Terrain::Water);
/// assert_eq!(grid.terrain_cost((2, 0)), 100);
/// assert_eq!(grid.terrain_cost((2, 2)), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<N: Neighborhood = MooreNeighborhood> {
	width: usize,
	height: usize,
	cells: Vec<Terrain>,
	costs: TerrainCosts,
	neighborhood: N,
	heuristic: Heuristic,
}

impl Grid<MooreNeighborhood> {
	/// Creates a Grid where every Tile has the same Terrain
	pub fn new((width, height): (usize, usize), terrain: Terrain) -> Grid {
		Grid::from_cells((width, height), vec![terrain; width * height])
	}

	/// Creates a Grid by asking `get_terrain` for every Point
	pub fn from_fn((width, height): (usize, usize), mut get_terrain: impl FnMut(Point) -> Terrain) -> Grid {
		let mut cells = Vec::with_capacity(width * height);
		for y in 0..height {
			for x in 0..width {
				cells.push(get_terrain((x, y)));
			}
		}
		Grid::from_cells((width, height), cells)
	}

	/// Creates a Grid from row-major Terrain data.
	///
	/// ## Panics
	/// If `cells.len() != width * height`.
	pub fn from_cells((width, height): (usize, usize), cells: Vec<Terrain>) -> Grid {
		assert_eq!(
			cells.len(),
			width * height,
			"Grid of size ({}, {}) needs {} cells",
			width,
			height,
			width * height
		);
		Grid {
			width,
			height,
			cells,
			costs: TerrainCosts::default(),
			neighborhood: MooreNeighborhood::new(width, height),
			heuristic: Heuristic::default(),
		}
	}
}

impl<N: Neighborhood> Grid<N> {
	/// Replaces the Neighborhood.
	///
	/// ## Panics
	/// If `neighborhood` was created for a different size than the Grid.
	///
	/// ```
	/// # use terrain_pathfinding::{prelude::*, Grid, Terrain};
	/// let grid = Grid::new((4, 4), Terrain::Grass).with_neighborhood(ManhattanNeighborhood::new(4, 4));
	/// let mut neighbors = vec![];
	/// grid.neighbors((1, 1), &mut neighbors);
	/// assert_eq!(neighbors.len(), 4);
	/// ```
	pub fn with_neighborhood<M: Neighborhood>(self, neighborhood: M) -> Grid<M> {
		assert_eq!(
			neighborhood.size(),
			(self.width, self.height),
			"Neighborhood does not match the size of the Grid"
		);
		Grid {
			width: self.width,
			height: self.height,
			cells: self.cells,
			costs: self.costs,
			neighborhood,
			heuristic: self.heuristic,
		}
	}
	/// Replaces the Cost table
	pub fn with_costs(mut self, costs: TerrainCosts) -> Self {
		self.costs = costs;
		self
	}
	/// Replaces the estimate used by [`estimated_cost_to`](Pather::estimated_cost_to)
	pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
		self.heuristic = heuristic;
		self
	}

	/// The number of Tiles along the x axis
	pub fn width(&self) -> usize {
		self.width
	}
	/// The number of Tiles along the y axis
	pub fn height(&self) -> usize {
		self.height
	}
	/// The Cost table of this Grid
	pub fn costs(&self) -> &TerrainCosts {
		&self.costs
	}
	/// The Neighborhood of this Grid
	pub fn neighborhood(&self) -> &N {
		&self.neighborhood
	}
	/// The estimate used by this Grid
	pub fn heuristic(&self) -> Heuristic {
		self.heuristic
	}

	/// The Terrain at `point`.
	///
	/// ## Panics
	/// If `point` is out of bounds.
	#[track_caller]
	pub fn terrain(&self, point: Point) -> Terrain {
		self.cells[self.index(point)]
	}

	/// The Cost multiplier of the Tile at `point`. Always greater than `0`.
	///
	/// ## Panics
	/// If `point` is out of bounds.
	#[track_caller]
	pub fn terrain_cost(&self, point: Point) -> Cost {
		self.costs.get(self.terrain(point))
	}

	/// Changes a single Tile.
	///
	/// ## Panics
	/// If `point` is out of bounds.
	#[track_caller]
	pub fn set_terrain(&mut self, point: Point, terrain: Terrain) {
		let index = self.index(point);
		self.cells[index] = terrain;
	}

	/// Replaces every Tile with the result of `get_terrain`, keeping the size.
	pub fn regenerate(&mut self, mut get_terrain: impl FnMut(Point) -> Terrain) {
		let width = self.width;
		for (i, cell) in self.cells.iter_mut().enumerate() {
			*cell = get_terrain((i % width, i / width));
		}
	}

	#[track_caller]
	fn index(&self, point: Point) -> usize {
		assert!(
			point.0 < self.width && point.1 < self.height,
			"Point {:?} is out of bounds for a Grid of size ({}, {})",
			point,
			self.width,
			self.height
		);
		point.1 * self.width + point.0
	}
}

impl<N: Neighborhood> Pather for Grid<N> {
	fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	fn neighbors(&self, point: Point, target: &mut Vec<Point>) {
		self.neighborhood.get_all_neighbors(point, target);
	}
	fn cost_to(&self, from: Point, to: Point) -> Cost {
		self.neighborhood
			.step_distance(from, to)
			.saturating_mul(self.terrain_cost(to))
	}
	fn estimated_cost_to(&self, from: Point, goal: Point) -> Cost {
		self.heuristic.estimate(from, goal)
	}
}

/// The Error returned when parsing a [`Grid`] from text fails
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseGridError {
	/// The text contained no rows
	Empty,
	/// A row had a different length than the first row
	UnevenRow {
		/// The index of the offending row
		row: usize,
		/// The length of the first row
		expected: usize,
		/// The length of the offending row
		found: usize,
	},
	/// A character did not match any [`Terrain::to_char`]
	UnknownTerrain {
		/// The Point of the character
		point: Point,
		/// The character itself
		found: char,
	},
}

impl fmt::Display for ParseGridError {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		match self {
			ParseGridError::Empty => write!(fmt, "Grid has no rows"),
			ParseGridError::UnevenRow {
				row,
				expected,
				found,
			} => write!(
				fmt,
				"row {} has {} Tiles, but the first row has {}",
				row, found, expected
			),
			ParseGridError::UnknownTerrain { point, found } => {
				write!(fmt, "unknown Terrain {:?} at {:?}", found, point)
			}
		}
	}
}

impl Error for ParseGridError {}

impl FromStr for Grid {
	type Err = ParseGridError;

	/// Parses one row per line, using the characters of [`Terrain::to_char`].
	/// Leading and trailing whitespace of each line is ignored, as are empty lines.
	fn from_str(s: &str) -> Result<Grid, ParseGridError> {
		let rows: Vec<&str> = s
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.collect();
		let width = match rows.first() {
			Some(row) => row.chars().count(),
			None => return Err(ParseGridError::Empty),
		};

		let mut cells = Vec::with_capacity(width * rows.len());
		for (y, row) in rows.iter().enumerate() {
			let found = row.chars().count();
			if found != width {
				return Err(ParseGridError::UnevenRow {
					row: y,
					expected: width,
					found,
				});
			}
			for (x, c) in row.chars().enumerate() {
				let terrain = Terrain::from_char(c).ok_or(ParseGridError::UnknownTerrain {
					point: (x, y),
					found: c,
				})?;
				cells.push(terrain);
			}
		}
		Ok(Grid::from_cells((width, rows.len()), cells))
	}
}

impl<N: Neighborhood> fmt::Display for Grid<N> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		for row in self.cells.chunks(self.width.max(1)) {
			for terrain in row {
				write!(fmt, "{}", terrain)?;
			}
			writeln!(fmt)?;
		}
		Ok(())
	}
}
