use nanorand::{Rng, WyRand};
use terrain_pathfinding::{prelude::*, Cost, Point};

use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_grid((width, height): (usize, usize), seed: u64) -> Grid {
    let mut rng = WyRand::new_seed(seed);
    Grid::from_fn((width, height), |_| {
        Terrain::ALL[rng.generate_range(0..Terrain::ALL.len())]
    })
}

/// plain Dijkstra over the entire Grid, used as the reference for the cheapest Cost
fn reference_cost<P: Pather>(pather: &P, start: Point, goal: Point) -> Option<Cost> {
    let (width, _) = pather.size();
    let index = |(x, y): Point| y * width + x;

    let mut best = vec![Cost::MAX; pather.size().0 * pather.size().1];
    let mut next = BinaryHeap::new();
    best[index(start)] = 0;
    next.push(Reverse((0, start)));

    let mut neighbors = vec![];
    while let Some(Reverse((cost, current))) = next.pop() {
        if current == goal {
            return Some(cost);
        }
        if cost > best[index(current)] {
            continue;
        }
        neighbors.clear();
        pather.neighbors(current, &mut neighbors);
        for &other in neighbors.iter() {
            let other_cost = cost + pather.cost_to(current, other);
            if other_cost < best[index(other)] {
                best[index(other)] = other_cost;
                next.push(Reverse((other_cost, other)));
            }
        }
    }
    None
}

/// checks that the Path is connected, starts and ends at the right Points and adds up to its Cost
fn assert_valid_path<P: Pather>(pather: &P, path: &Path<Point>, start: Point, goal: Point) {
    assert_eq!(path[0], goal);
    assert_eq!(path[path.len() - 1], start);

    let mut neighbors = vec![];
    let mut cost = 0;
    let steps = path.start_first().to_vec();
    for pair in steps.windows(2) {
        neighbors.clear();
        pather.neighbors(pair[0], &mut neighbors);
        assert!(neighbors.contains(&pair[1]), "{:?} is not a step", pair);
        cost += pather.cost_to(pair[0], pair[1]);
    }
    assert_eq!(cost, path.cost());
}

#[test]
fn start_equals_goal() {
    init();
    let grid = random_grid((7, 5), 1);
    let mut pathfinder = Pathfinder::for_grid(&grid);
    for y in 0..5 {
        for x in 0..7 {
            let path = pathfinder.find_path(&grid, (x, y), (x, y)).unwrap();
            assert_eq!(path, vec![(x, y)]);
            assert_eq!(path.cost(), 0);
        }
    }
}

#[test]
fn every_pair_is_reachable() {
    init();
    let grid = random_grid((8, 8), 2);
    let mut pathfinder = Pathfinder::for_grid(&grid);
    for start in [(0, 0), (7, 7), (3, 4), (0, 7)] {
        for y in 0..8 {
            for x in 0..8 {
                let path = pathfinder.find_path(&grid, start, (x, y));
                let path = path.unwrap_or_else(|| panic!("no Path from {:?} to {:?}", start, (x, y)));
                assert_valid_path(&grid, &path, start, (x, y));
            }
        }
    }
}

#[test]
fn optimal_without_diagonals() {
    init();
    for seed in 0..10 {
        let grid = random_grid((10, 10), seed).with_neighborhood(ManhattanNeighborhood::new(10, 10));
        let mut pathfinder = Pathfinder::for_grid(&grid);
        let mut rng = WyRand::new_seed(seed + 100);
        for _ in 0..20 {
            let start = (rng.generate_range(0..10usize), rng.generate_range(0..10usize));
            let goal = (rng.generate_range(0..10usize), rng.generate_range(0..10usize));
            let path = pathfinder.find_path(&grid, start, goal).unwrap();
            assert_valid_path(&grid, &path, start, goal);
            assert_eq!(Some(path.cost()), reference_cost(&grid, start, goal));
        }
    }
}

#[test]
fn optimal_with_octile_estimate() {
    init();
    for seed in 0..10 {
        let grid = random_grid((10, 10), seed).with_heuristic(Heuristic::Octile);
        let mut pathfinder = Pathfinder::for_grid(&grid);
        let mut rng = WyRand::new_seed(seed + 200);
        for _ in 0..20 {
            let start = (rng.generate_range(0..10usize), rng.generate_range(0..10usize));
            let goal = (rng.generate_range(0..10usize), rng.generate_range(0..10usize));
            let path = pathfinder.find_path(&grid, start, goal).unwrap();
            assert_valid_path(&grid, &path, start, goal);
            assert_eq!(Some(path.cost()), reference_cost(&grid, start, goal));
        }
    }
}

/// With diagonal steps the Manhattan estimate can overestimate, so the Path is only
/// guaranteed to be valid, not to be the cheapest one.
#[test]
fn manhattan_estimate_with_diagonals() {
    init();
    for seed in 0..10 {
        let grid = random_grid((10, 10), seed);
        assert_eq!(grid.heuristic(), Heuristic::Manhattan);
        let mut pathfinder = Pathfinder::for_grid(&grid);
        let mut rng = WyRand::new_seed(seed + 300);
        for _ in 0..20 {
            let start = (rng.generate_range(0..10usize), rng.generate_range(0..10usize));
            let goal = (rng.generate_range(0..10usize), rng.generate_range(0..10usize));
            let path = pathfinder.find_path(&grid, start, goal).unwrap();
            assert_valid_path(&grid, &path, start, goal);
            let best = reference_cost(&grid, start, goal).unwrap();
            assert!(path.cost() >= best);
        }
    }
}

#[test]
fn reuse_matches_fresh_pathfinder() {
    init();
    let grid = random_grid((32, 32), 7);
    let queries = [
        ((0, 0), (31, 31)),
        ((31, 0), (0, 31)),
        ((5, 5), (6, 6)),
        ((16, 16), (16, 16)),
        ((0, 0), (31, 31)),
        ((20, 3), (2, 28)),
    ];

    let mut reused = Pathfinder::for_grid(&grid);
    for &(start, goal) in queries.iter() {
        let path = reused.find_path(&grid, start, goal).unwrap();
        let stats = reused.last_stats();

        let mut fresh = Pathfinder::for_grid(&grid);
        let expected = fresh.find_path(&grid, start, goal).unwrap();

        assert_eq!(path, expected);
        assert_eq!(path.cost(), expected.cost());
        assert_eq!(stats, fresh.last_stats());
    }
}

#[test]
fn decrease_key_prefers_cheaper_parent() {
    init();
    // (1, 1) is forest and is first discovered diagonally from the start (14 * 40),
    // then orthogonally from (1, 0) for 10 + 10 * 40.
    let grid: Grid = "
        ..~
        ~#~
        ~.~
    "
    .parse()
    .unwrap();
    let mut pathfinder = Pathfinder::for_grid(&grid);

    let path = pathfinder.find_path(&grid, (0, 0), (1, 2)).unwrap();

    assert_eq!(path, vec![(1, 2), (1, 1), (1, 0), (0, 0)]);
    assert_eq!(path.cost(), 10 + 10 * 40 + 10);
    assert_eq!(pathfinder.node((1, 1)).unwrap().parent, Some((1, 0)));
    assert!(pathfinder.last_stats().decreased >= 1);
}

#[test]
fn terrain_steers_around_water() {
    init();
    let grid = Grid::from_fn((5, 5), |(x, y)| {
        if x == 2 && y < 4 {
            Terrain::Water
        } else {
            Terrain::Grass
        }
    });
    let costs = grid.costs();
    let water = costs.get(Terrain::Water);
    let grass = costs.get(Terrain::Grass);

    // straight across row 0, stepping into the water once
    let cost_through_water = 10 * grass + 10 * water + 10 * grass + 10 * grass;
    // two diagonals and two straight steps down to row 4, and the same back up
    let cost_detour = 2 * (2 * 14 * grass + 2 * 10 * grass);
    assert!(cost_detour < cost_through_water);

    let mut pathfinder = Pathfinder::for_grid(&grid);
    let path = pathfinder.find_path(&grid, (0, 0), (4, 0)).unwrap();

    assert_valid_path(&grid, &path, (0, 0), (4, 0));
    assert!(path.iter().any(|&point| point == (2, 4)));
    assert!(path.iter().all(|&(x, y)| x != 2 || y == 4));
    assert!(path.cost() < cost_through_water);

    let grid = grid.with_heuristic(Heuristic::Octile);
    let path = pathfinder.find_path(&grid, (0, 0), (4, 0)).unwrap();
    assert_eq!(path.cost(), cost_detour);
}

#[test]
fn without_reopening() {
    init();
    let grid = random_grid((16, 16), 9);
    let mut pathfinder = Pathfinder::new(
        (16, 16),
        PathfinderConfig {
            reopen_closed: false,
            ..Default::default()
        },
    );
    for goal in [(15, 15), (0, 15), (8, 3)] {
        let path = pathfinder.find_path(&grid, (0, 0), goal).unwrap();
        assert_valid_path(&grid, &path, (0, 0), goal);
        assert_eq!(pathfinder.last_stats().reopened, 0);
    }
}

#[test]
fn reopens_closed_point_for_cheaper_route() {
    init();
    // (2, 1) is first closed behind the water at (1, 1) for 1020, then reached diagonally
    // from the water at (1, 0) for 1014
    let grid: Grid = "
        .~..
        .~.#
    "
    .parse()
    .unwrap();
    let mut pathfinder = Pathfinder::for_grid(&grid);

    let path = pathfinder.find_path(&grid, (0, 0), (3, 1)).unwrap();

    assert_valid_path(&grid, &path, (0, 0), (3, 1));
    assert_eq!(path, vec![(3, 1), (2, 1), (1, 0), (0, 0)]);
    assert_eq!(path.cost(), 10 * 100 + 14 + 10 * 40);
    assert_eq!(pathfinder.last_stats().reopened, 1);

    let reopened = pathfinder.node((2, 1)).unwrap();
    assert_eq!(reopened.parent, Some((1, 0)));
    assert_eq!(reopened.g_cost, 10 * 100 + 14);

    pathfinder.set_config(PathfinderConfig {
        reopen_closed: false,
        ..Default::default()
    });
    let path = pathfinder.find_path(&grid, (0, 0), (3, 1)).unwrap();
    assert_valid_path(&grid, &path, (0, 0), (3, 1));
    assert_eq!(path.cost(), 10 + 10 * 100 + 10 + 10 * 40);
    assert_eq!(pathfinder.node((2, 1)).unwrap().parent, Some((1, 1)));
}

#[test]
fn huge_terrain_cost_does_not_overflow() {
    init();
    let mut costs = TerrainCosts::default();
    costs.set(Terrain::Water, Cost::MAX / 8);

    let grid: Grid = "
        ..~..
        .....
    "
    .parse()
    .unwrap();
    let grid = grid.with_costs(costs.clone()).with_heuristic(Heuristic::Octile);
    let mut pathfinder = Pathfinder::for_grid(&grid);
    let path = pathfinder.find_path(&grid, (0, 0), (4, 0)).unwrap();
    assert_valid_path(&grid, &path, (0, 0), (4, 0));
    assert!(!path.iter().any(|&point| point == (2, 0)));
    assert_eq!(path.cost(), 14 + 10 + 14 + 10);

    // the only way across saturates, so there is no Path instead of a wrapped Cost
    let grid: Grid = "..~..".parse().unwrap();
    let grid = grid.with_costs(costs);
    let mut pathfinder = Pathfinder::for_grid(&grid);
    assert!(pathfinder.find_path(&grid, (0, 0), (4, 0)).is_none());
    assert_eq!(pathfinder.node((2, 0)).and_then(|node| node.parent), None);
    assert!(pathfinder.find_path(&grid, (0, 0), (1, 0)).is_some());
}

#[test]
fn batch_matches_sequential() {
    init();
    let grid = random_grid((24, 24), 11);
    let mut rng = WyRand::new_seed(12);
    let queries: Vec<(Point, Point)> = (0..64)
        .map(|_| {
            (
                (rng.generate_range(0..24usize), rng.generate_range(0..24usize)),
                (rng.generate_range(0..24usize), rng.generate_range(0..24usize)),
            )
        })
        .collect();

    let paths = find_paths(&grid, &queries, PathfinderConfig::default());
    assert_eq!(paths.len(), queries.len());

    let mut pathfinder = Pathfinder::for_grid(&grid);
    for (&(start, goal), path) in queries.iter().zip(paths.iter()) {
        let expected = pathfinder.find_path(&grid, start, goal);
        assert_eq!(path, &expected);
    }
}
