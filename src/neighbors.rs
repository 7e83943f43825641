//! A Module with the most common Neighborhoods

use crate::{Cost, Point};
use std::fmt::Debug;

/// The distance of one step along one of the 4 cardinal directions.
pub const ORTHOGONAL_STEP: Cost = 10;
/// The distance of one diagonal step. An integer approximation of `10 * sqrt(2)`.
pub const DIAGONAL_STEP: Cost = 14;

/// Defines how a Path can move along the Grid.
///
/// Different Scenarios may have different constraints as to how a Path may be formed.
/// For example if Agents can only move along the 4 cardinal directions, any Paths generated should
/// reflect that by only containing those steps.
///
/// This Trait provides a function to query all neighboring Points of an existing Point, as well
/// as the (unweighted) distance of a single step between two neighbors.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-right, ...)
pub trait Neighborhood: Clone + Debug {
	/// Appends all in-bounds Neighbors of a Point to `target`.
	///
	/// `point` itself is never part of the result.
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);
	/// The `(width, height)` of the Grid this Neighborhood was created for
	fn size(&self) -> (usize, usize);
	/// The distance of a single step from `from` to its neighbor `to`, before any terrain weighting.
	fn step_distance(&self, from: Point, to: Point) -> Cost {
		if from.0 != to.0 && from.1 != to.1 {
			DIAGONAL_STEP
		} else {
			ORTHOGONAL_STEP
		}
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
	width: usize,
	height: usize,
}

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> ManhattanNeighborhood {
		ManhattanNeighborhood { width, height }
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
		const OFFSETS: [(isize, isize); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
		push_offsets(point, &OFFSETS, (self.width, self.height), target);
	}
	fn step_distance(&self, _from: Point, _to: Point) -> Cost {
		ORTHOGONAL_STEP
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
/// This is the Neighborhood used by [`Grid::new`](crate::Grid::new).
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MooreNeighborhood {
	width: usize,
	height: usize,
}

impl MooreNeighborhood {
	/// Creates a new MooreNeighborhood.
	///
	/// `width` and `height` are the size of the Grid to move on.
	pub fn new(width: usize, height: usize) -> MooreNeighborhood {
		MooreNeighborhood { width, height }
	}
}

impl Neighborhood for MooreNeighborhood {
	fn size(&self) -> (usize, usize) {
		(self.width, self.height)
	}
	fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
		const OFFSETS: [(isize, isize); 8] = [
			(0, -1),
			(1, -1),
			(1, 0),
			(1, 1),
			(0, 1),
			(-1, 1),
			(-1, 0),
			(-1, -1),
		];
		push_offsets(point, &OFFSETS, (self.width, self.height), target);
	}
}

fn push_offsets(
	point: Point,
	offsets: &[(isize, isize)],
	(width, height): (usize, usize),
	target: &mut Vec<Point>,
) {
	let iter = offsets
		.iter()
		.map(|(dx, dy)| (point.0 as isize + dx, point.1 as isize + dy))
		.filter(|(x, y)| *x >= 0 && *y >= 0 && (*x as usize) < width && (*y as usize) < height)
		.map(|(x, y)| (x as usize, y as usize));
	target.extend(iter);
}
