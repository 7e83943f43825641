//! Terrain classifications and their movement Costs

use crate::Cost;
use std::fmt;

/// The classification of a single Tile on the Grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Terrain {
	/// Deep or shallow water. Very expensive to cross, but never solid.
	Water,
	/// Beaches around the water
	Sand,
	/// Open land
	Grass,
	/// Dense forest
	Forest,
}

impl Terrain {
	/// All variants, in the order of their declaration
	pub const ALL: [Terrain; 4] = [Terrain::Water, Terrain::Sand, Terrain::Grass, Terrain::Forest];

	/// The character used to represent this Terrain in a text Grid.
	///
	/// ```
	/// # use terrain_pathfinding::Terrain;
	/// assert_eq!(Terrain::Water.to_char(), '~');
	/// assert_eq!(Terrain::from_char('~'), Some(Terrain::Water));
	/// ```
	pub fn to_char(self) -> char {
		match self {
			Terrain::Water => '~',
			Terrain::Sand => ':',
			Terrain::Grass => '.',
			Terrain::Forest => '#',
		}
	}

	/// The inverse of [`to_char`](Terrain::to_char)
	pub fn from_char(c: char) -> Option<Terrain> {
		match c {
			'~' => Some(Terrain::Water),
			':' => Some(Terrain::Sand),
			'.' => Some(Terrain::Grass),
			'#' => Some(Terrain::Forest),
			_ => None,
		}
	}
}

impl fmt::Display for Terrain {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "{}", self.to_char())
	}
}

/// The lookup from [`Terrain`] to the multiplier applied to every step onto a Tile of that Terrain.
///
/// Every Terrain has a Cost, and every Cost is strictly positive. There is no concept of a
/// solid Tile: a very high Cost makes a Tile effectively impassable, but it is still
/// reachable if there is no other way.
///
/// Costs of steps and Paths saturate at `Cost::MAX` instead of overflowing. A step whose Cost
/// saturates is never taken.
///
/// Default Costs:
/// ```
/// # use terrain_pathfinding::{Terrain, TerrainCosts};
/// let costs = TerrainCosts::default();
/// assert_eq!(costs.get(Terrain::Water), 100);
/// assert_eq!(costs.get(Terrain::Sand), 1);
/// assert_eq!(costs.get(Terrain::Grass), 1);
/// assert_eq!(costs.get(Terrain::Forest), 40);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainCosts {
	/// indexed by `Terrain as usize`
	costs: [Cost; Terrain::ALL.len()],
}

impl TerrainCosts {
	/// Creates a new table from `(Terrain, Cost)` pairs.
	///
	/// ## Panics
	/// If any Terrain is missing or any Cost is zero.
	pub fn new(costs: impl IntoIterator<Item = (Terrain, Cost)>) -> TerrainCosts {
		let mut table = [None; Terrain::ALL.len()];
		for (terrain, cost) in costs {
			table[terrain as usize] = Some(cost);
		}
		let mut costs = [0; Terrain::ALL.len()];
		for terrain in Terrain::ALL {
			costs[terrain as usize] = match table[terrain as usize] {
				None => panic!("missing Cost for Terrain {:?}", terrain),
				Some(0) => panic!("Cost for Terrain {:?} must be positive", terrain),
				Some(cost) => cost,
			};
		}
		TerrainCosts { costs }
	}

	/// Creates a table where every Terrain has the same Cost.
	pub fn uniform(cost: Cost) -> TerrainCosts {
		TerrainCosts::new(Terrain::ALL.iter().map(|&terrain| (terrain, cost)))
	}

	/// The Cost multiplier for `terrain`
	pub fn get(&self, terrain: Terrain) -> Cost {
		self.costs[terrain as usize]
	}

	/// Changes the Cost of a single Terrain.
	///
	/// ## Panics
	/// If `cost` is zero.
	pub fn set(&mut self, terrain: Terrain, cost: Cost) {
		assert!(cost > 0, "Cost for Terrain {:?} must be positive", terrain);
		self.costs[terrain as usize] = cost;
	}
}

impl Default for TerrainCosts {
	fn default() -> TerrainCosts {
		TerrainCosts::new([
			(Terrain::Water, 100),
			(Terrain::Sand, 1),
			(Terrain::Grass, 1),
			(Terrain::Forest, 40),
		])
	}
}
