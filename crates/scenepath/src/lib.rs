//! Local tile pathfinding over a loaded scene.
//!
//! Routes are found with an 8-directional breadth-first search over a
//! [`CollisionGrid`](scenepath_core::CollisionGrid) snapshot:
//!
//! - **Exact routes** to a reachable target ([`Pathfinder::find_path`])
//! - **Approximate routes** to the best stand-in when the target cannot be
//!   reached ([`SearchMaps::nearest_reachable`])
//! - **Waypoints** where the route turns ([`Pathfinder::find_sparse_path`])
//! - **Flood fills** of the reachable area ([`Pathfinder::search_maps`])
//!
//! Every query allocates its own [`SearchMaps`], so searches over a shared
//! snapshot may run concurrently.
//!
//! # Layers
//!
//! | Item | Works in |
//! |---|---|
//! | [`Pathfinder`] | world coordinates, via a `CoordinateMapper` |
//! | [`grid_path`] | local grid cells, over any [`Pather`] |
//! | [`walkable`] | a single step on a collision grid |

mod approx;
mod bfs;
mod config;
mod distance;
mod maps;
mod neighbors;
mod path;
mod pathfinder;
mod sparse;
mod traits;
mod walk;

pub use config::{APPROX_MAX_HOPS, APPROX_WINDOW_RADIUS, SearchConfig};
pub use distance::{chebyshev, euclidean_sq};
pub use maps::{SearchMaps, UNVISITED};
pub use neighbors::{SEARCH_ORDER, neighbors_8};
pub use pathfinder::{Pathfinder, grid_path};
pub use sparse::reduce;
pub use traits::Pather;
pub use walk::{CollisionPather, walkable};
