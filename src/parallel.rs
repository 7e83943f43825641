use crate::{Path, Pather, Pathfinder, PathfinderConfig, Point};

/// Runs a batch of searches on the same Grid.
///
/// Each worker thread gets its own [`Pathfinder`], all of them share `pather`.
/// The results are in the same order as `queries`.
///
/// With the `parallel` feature (enabled by default) the searches are spread across threads
/// using [rayon](https://docs.rs/rayon), otherwise they run one after the other on a single
/// Pathfinder.
///
/// ```
/// # use terrain_pathfinding::{find_paths, Grid, Terrain};
/// let grid = Grid::new((16, 16), Terrain::Grass);
///
/// let paths = find_paths(&grid, &[((0, 0), (15, 0)), ((3, 3), (3, 3))], Default::default());
///
/// assert_eq!(paths[0].as_ref().unwrap().cost(), 150);
/// assert_eq!(paths[1].as_ref().unwrap().cost(), 0);
/// ```
pub fn find_paths<P: Pather + Sync>(
	pather: &P,
	queries: &[(Point, Point)],
	config: PathfinderConfig,
) -> Vec<Option<Path<Point>>> {
	log::trace!("searching {} Paths", queries.len());

	#[cfg(feature = "parallel")]
	let paths: Vec<Option<Path<Point>>> = {
		use rayon::prelude::*;
		queries
			.par_iter()
			.map_init(
				|| Pathfinder::new(pather.size(), config),
				|pathfinder, &(start, goal)| pathfinder.find_path(pather, start, goal),
			)
			.collect()
	};

	#[cfg(not(feature = "parallel"))]
	let paths: Vec<Option<Path<Point>>> = {
		let mut pathfinder = Pathfinder::new(pather.size(), config);
		queries
			.iter()
			.map(|&(start, goal)| pathfinder.find_path(pather, start, goal))
			.collect()
	};

	paths
}
