use crate::Cost;

use std::sync::Arc;

/// A Path found by a [`Pathfinder`](crate::Pathfinder).
///
/// The steps are stored **goal first**: `path[0]` is the goal and the last element is the start.
/// Both endpoints are included, so a Path from a Point to itself has a length of `1`.
/// Use [`start_first`](Path::start_first) for a view in walking order.
///
/// Paths are cheap to clone and reverse, since the steps are shared.
///
/// ```
/// # use terrain_pathfinding::{Grid, Pathfinder, Terrain};
/// let grid = Grid::new((3, 1), Terrain::Grass);
/// let mut pathfinder = Pathfinder::for_grid(&grid);
///
/// let path = pathfinder.find_path(&grid, (0, 0), (2, 0)).unwrap();
/// assert_eq!(path, vec![(2, 0), (1, 0), (0, 0)]);
/// assert_eq!(path.start_first(), vec![(0, 0), (1, 0), (2, 0)]);
/// assert_eq!(path.cost(), 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
	path: Arc<[P]>,
	cost: Cost,
	is_reversed: bool,
}

impl<P> Path<P> {
	/// Creates a new Path from its steps in goal-first order.
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path {
			path: path.into(),
			cost,
			is_reversed: false,
		}
	}

	/// The total Cost of walking the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The number of steps, including both endpoints
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// Checks if the Path has no steps
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// Returns `true` if this view iterates from the start to the goal.
	pub fn is_start_first(&self) -> bool {
		self.is_reversed
	}

	/// Returns a view of the same Path that iterates from the start to the goal.
	///
	/// Calling this on a view that already is start-first returns it unchanged.
	pub fn start_first(&self) -> Path<P> {
		Path {
			path: self.path.clone(),
			cost: self.cost,
			is_reversed: true,
		}
	}

	/// Returns a view of the same Path that iterates from the goal to the start.
	pub fn goal_first(&self) -> Path<P> {
		Path {
			path: self.path.clone(),
			cost: self.cost,
			is_reversed: false,
		}
	}

	/// Returns an Iterator over the Path
	pub fn iter(&self) -> Iter<P> {
		Iter {
			iter: self.path.iter(),
			reversed: self.is_reversed,
		}
	}

	/// Copies the steps in the order of this view
	pub fn to_vec(&self) -> Vec<P>
	where
		P: Clone,
	{
		self.iter().cloned().collect()
	}
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
	type Output = P;
	#[track_caller]
	fn index(&self, index: usize) -> &P {
		let index = if self.is_reversed {
			self.path.len() - index - 1
		} else {
			index
		};
		&self.path[index]
	}
}

/// An Iterator over the steps of a [`Path`]
#[derive(Debug)]
pub struct Iter<'a, P> {
	iter: std::slice::Iter<'a, P>,
	reversed: bool,
}

impl<'a, P> Iterator for Iter<'a, P> {
	type Item = &'a P;
	fn next(&mut self) -> Option<Self::Item> {
		if self.reversed {
			self.iter.next_back()
		} else {
			self.iter.next()
		}
	}
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.iter.size_hint()
	}
}

impl<P> DoubleEndedIterator for Iter<'_, P> {
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.reversed {
			self.iter.next()
		} else {
			self.iter.next_back()
		}
	}
}
impl<P> ExactSizeIterator for Iter<'_, P> {}
impl<P> std::iter::FusedIterator for Iter<'_, P> {}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = Iter<'a, P>;
	fn into_iter(self) -> Iter<'a, P> {
		self.iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		// we can't just use slice's eq because self might be reversed
		self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
	}
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
	fn eq(&self, rhs: &&'a [P]) -> bool {
		self.len() == rhs.len() && self.iter().zip(rhs.iter()).all(|(a, b)| a == b)
	}
}

use std::fmt;
impl<P: fmt::Debug> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		let mut iter = self.iter();
		match iter.next() {
			None => write!(fmt, "<empty>"),
			Some(first) => {
				write!(fmt, "{:?}", first)?;
				for p in iter {
					write!(fmt, " -> {:?}", p)?;
				}
				Ok(())
			}
		}
	}
}
