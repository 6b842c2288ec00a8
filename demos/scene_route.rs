//! Find a route across a scene and print it.
//!
//! ```bash
//! # random 104x104 scene
//! scene-route --seed 7 --start 5,5 --target 90,80
//!
//! # hand-drawn scene, target behind a wall
//! scene-route --map house.txt --start 0,0 --target 6,6
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::Parser;

use scenepath::{APPROX_MAX_HOPS, APPROX_WINDOW_RADIUS, Pathfinder, SearchConfig, reduce};
use scenepath_core::{
    CollisionDataProvider, CollisionFlags, CollisionGrid, CoordinateMapper, MAX_PLANES, Point,
    SCENE_SIZE, SceneCollision, SceneMapper, WorldPoint,
};
use scenepath_demos::{parse_point, random_grid, render};

/// Route a walker across a loaded scene
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// ASCII scene file ('.' open, '#' blocked, first line north); random if omitted
    #[clap(long, value_parser)]
    map: Option<PathBuf>,

    /// Seed of the random scene
    #[clap(long, default_value = "42")]
    seed: u64,

    /// Edge length of the random scene
    #[clap(long, default_value_t = SCENE_SIZE)]
    size: i32,

    /// Percentage of blocked tiles in the random scene
    #[clap(long, default_value = "25")]
    density: u32,

    /// Start tile in scene coordinates (x,y)
    #[clap(long, value_parser = parse_point, default_value = "0,0")]
    start: Point,

    /// Target tile in scene coordinates (x,y); the far corner if omitted
    #[clap(long, value_parser = parse_point)]
    target: Option<Point>,

    /// World tile of the scene's south-west corner (x,y)
    #[clap(long, value_parser = parse_point, default_value = "3200,3200")]
    origin: Point,

    /// Plane of the scene
    #[clap(long, default_value = "0")]
    plane: i32,

    /// Radius of the window searched around an unreachable target
    #[clap(long, default_value_t = APPROX_WINDOW_RADIUS)]
    radius: i32,

    /// Hop limit for a substitute target
    #[clap(long, default_value_t = APPROX_MAX_HOPS)]
    max_hops: i32,

    /// Only route to the exact target
    #[clap(long)]
    exact: bool,

    /// Do not draw the scene
    #[clap(long)]
    no_map: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    ensure!(
        (0..MAX_PLANES as i32).contains(&args.plane),
        "plane {} is outside 0..{MAX_PLANES}",
        args.plane
    );

    let mut grid = match &args.map {
        Some(path) => load_map(path)?,
        None => {
            ensure!(args.size > 0, "scene size must be positive");
            random_grid(args.seed, args.size, args.density)
        }
    };
    let size = grid.size();
    let start = args.start;
    let target = args.target.unwrap_or(Point::new(size - 1, size - 1));
    ensure!(grid.contains(start), "start {start} is outside the {size}x{size} scene");
    if args.map.is_none() {
        grid.set(start, CollisionFlags::OPEN);
    }

    let config = if args.exact {
        SearchConfig::exact()
    } else {
        SearchConfig::default()
            .with_approx_radius(args.radius)
            .with_approx_max_hops(args.max_hops)
    };

    let mapper = SceneMapper::new(args.origin).with_size(size);
    let collision = SceneCollision::with_plane(args.plane, grid);
    let pathfinder = Pathfinder::new(&collision, &mapper).with_config(config);

    let from = mapper.to_world(start, args.plane);
    let to = mapper.to_world(target, args.plane);
    log::info!("routing {from} -> {to} over a {size}x{size} scene");

    let dense = pathfinder.find_path(from, to);
    let sparse = reduce(&dense, from);
    match dense.last() {
        None => log::warn!("no route from {from} towards {to}"),
        Some(&end) if end != to => {
            log::info!("{to} is unreachable, stopping at {end}")
        }
        Some(_) => {}
    }
    log::info!("{} steps, {} waypoints", dense.len(), sparse.len());

    if !args.no_map {
        let local = |path: &[WorldPoint]| -> Vec<Point> {
            path.iter().filter_map(|w| mapper.to_grid(*w)).collect()
        };
        if let Some(grid) = collision.collision_grid(args.plane) {
            println!(
                "{}",
                render(grid, start, target, &local(&dense), &local(&sparse))
            );
        }
    }
    println!("dense:  {}", join(&dense));
    println!("sparse: {}", join(&sparse));
    Ok(())
}

fn load_map(path: &Path) -> Result<CollisionGrid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read scene {}", path.display()))?;
    let grid = CollisionGrid::from_ascii(&text)
        .with_context(|| format!("failed to parse scene {}", path.display()))?;
    log::debug!("loaded {} ({} blocked tiles)", path.display(), grid.blocked_count());
    Ok(grid)
}

fn join(path: &[WorldPoint]) -> String {
    path.iter()
        .map(WorldPoint::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
