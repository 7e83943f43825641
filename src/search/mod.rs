//! The A* search and the data structures it reuses between searches

mod config;
pub use self::config::PathfinderConfig;

mod node_store;
pub use self::node_store::{Epoch, Membership, NodeState, NodeStore};

mod open_set;
pub use self::open_set::OpenSet;

mod pathfinder;
pub use self::pathfinder::{Pathfinder, SearchStats};
