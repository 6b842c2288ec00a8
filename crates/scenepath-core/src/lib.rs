//! **scenepath-core**: data model of the loaded game scene.
//!
//! This crate provides the types shared by the *scenepath* pathfinder:
//! grid geometry, world coordinates, per-tile collision flags, collision
//! snapshots and the mapping between world and scene coordinates.

pub mod collision;
pub mod flags;
pub mod geom;
pub mod scene;

pub use collision::{
    CollisionDataProvider, CollisionGrid, MAX_PLANES, MapError, SCENE_SIZE, SceneCollision,
};
pub use flags::CollisionFlags;
pub use geom::{Point, Range, WorldPoint};
pub use scene::{CoordinateMapper, SceneMapper};
