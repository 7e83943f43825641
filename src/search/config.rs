/// Options for configuring a [`Pathfinder`](crate::Pathfinder)
///
/// Default options:
/// ```
/// # use terrain_pathfinding::PathfinderConfig;
/// assert_eq!(
/// 	PathfinderConfig {
/// 		max_expansions: None,
/// 		reopen_closed: true,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathfinderConfig {
	/// `None` (default): a search runs until the goal is reached or every reachable Point was expanded.
	///
	/// `Some(n)`: a search gives up and returns `None` after expanding `n` Points.
	///
	/// On large Grids with expensive Terrain a single search can expand the entire Grid.
	/// Setting a limit puts an upper bound on the time a single search can take.
	pub max_expansions: Option<usize>,
	/// `true` (default): a Point that was already expanded is opened again if a strictly
	/// cheaper Path to it is found later in the same search.
	///
	/// `false`: expanded Points are final.
	///
	/// Reopening is what keeps the Paths cheap when the estimate overestimates, as
	/// [`Heuristic::Manhattan`](crate::Heuristic::Manhattan) does once diagonal steps are
	/// allowed. Disabling it expands fewer Points.
	pub reopen_closed: bool,
}

impl PathfinderConfig {
	/// No limit on the number of expansions, closed Points may be reopened.
	///
	/// Values:
	/// ```
	/// # use terrain_pathfinding::PathfinderConfig;
	/// assert_eq!(
	/// 	PathfinderConfig {
	/// 		max_expansions: None,
	/// 		reopen_closed: true,
	/// 	},
	/// 	PathfinderConfig::UNBOUNDED
	/// );
	/// ```
	pub const UNBOUNDED: PathfinderConfig = PathfinderConfig {
		max_expansions: None,
		reopen_closed: true,
	};

	/// Returns the default config with a limit on the number of expansions
	///
	/// ```
	/// # use terrain_pathfinding::PathfinderConfig;
	/// assert_eq!(
	/// 	PathfinderConfig {
	/// 		max_expansions: Some(1000),
	/// 		..Default::default()
	/// 	},
	/// 	PathfinderConfig::with_max_expansions(1000)
	/// );
	/// ```
	pub fn with_max_expansions(max_expansions: usize) -> PathfinderConfig {
		PathfinderConfig {
			max_expansions: Some(max_expansions),
			..Default::default()
		}
	}
}

impl Default for PathfinderConfig {
	fn default() -> PathfinderConfig {
		PathfinderConfig::UNBOUNDED
	}
}
