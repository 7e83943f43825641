//! The interface between a Map and the [`Pathfinder`](crate::Pathfinder)

use crate::{neighbors::DIAGONAL_STEP, neighbors::ORTHOGONAL_STEP, Cost, Point};

/// Anything that can be searched by a [`Pathfinder`](crate::Pathfinder).
///
/// [`Grid`](crate::Grid) is the main implementation, but any Map that can enumerate neighbors
/// and give a Cost for walking between them can be used.
///
/// All Points handed to these methods are within `(0, 0)..size()`.
pub trait Pather {
	/// The `(width, height)` of the Map
	fn size(&self) -> (usize, usize);
	/// Appends all Points reachable in a single step from `point` to `target`.
	fn neighbors(&self, point: Point, target: &mut Vec<Point>);
	/// The Cost of a single step from `from` to its neighbor `to`. Must be greater than `0`.
	fn cost_to(&self, from: Point, to: Point) -> Cost;
	/// An estimate of the Cost of walking from `from` to `goal`.
	///
	/// Estimates that never exceed the actual Cost produce the cheapest Paths.
	fn estimated_cost_to(&self, from: Point, goal: Point) -> Cost;

	/// Checks if a Point lies within the Map
	fn in_bounds(&self, point: Point) -> bool {
		let (width, height) = self.size();
		point.0 < width && point.1 < height
	}
}

/// The estimate used for the remaining Cost towards the goal.
///
/// All estimates are in the same units as [`ORTHOGONAL_STEP`] and [`DIAGONAL_STEP`], and
/// assume the cheapest possible Terrain Cost of `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Heuristic {
	/// `10 * (|dx| + |dy|)`.
	///
	/// Exact for 4-connected movement. Once diagonal steps are allowed it overestimates
	/// (a diagonal covers a distance of 20 for a Cost of 14), so the resulting Paths may be
	/// slightly more expensive than the cheapest one in exchange for fewer expansions.
	#[default]
	Manhattan,
	/// `14 * min(|dx|, |dy|) + 10 * (max(|dx|, |dy|) - min(|dx|, |dy|))`.
	///
	/// Never overestimates on a Grid where every Terrain Cost is at least `1`.
	Octile,
	/// Always `0`, which turns the search into Dijkstra.
	Zero,
}

impl Heuristic {
	/// Calculates the estimate between two Points
	///
	/// ```
	/// # use terrain_pathfinding::Heuristic;
	/// assert_eq!(Heuristic::Manhattan.estimate((0, 0), (3, 1)), 40);
	/// assert_eq!(Heuristic::Octile.estimate((0, 0), (3, 1)), 34);
	/// assert_eq!(Heuristic::Zero.estimate((0, 0), (3, 1)), 0);
	/// ```
	pub fn estimate(self, point: Point, goal: Point) -> Cost {
		let dx = point.0.abs_diff(goal.0);
		let dy = point.1.abs_diff(goal.1);
		match self {
			Heuristic::Manhattan => ORTHOGONAL_STEP * (dx + dy),
			Heuristic::Octile => {
				let (min, max) = if dx < dy { (dx, dy) } else { (dy, dx) };
				DIAGONAL_STEP * min + ORTHOGONAL_STEP * (max - min)
			}
			Heuristic::Zero => 0,
		}
	}
}
