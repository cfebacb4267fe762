use crate::numeric_types::{hp, map_dist, HitPoints, MapDistance, ONE_TILE};

// Width and height of the board, in tiles
pub const GRID_SIZE: MapDistance = map_dist(8);

// Width and height of a single tile, in pixels
pub const CELL_SIZE: i32 = 60;

// Size of the board, in pixels
pub const WIDTH: i32 = GRID_SIZE.value * CELL_SIZE;
pub const HEIGHT: i32 = GRID_SIZE.value * CELL_SIZE;

pub const HEALTHBAR_HEIGHT: i32 = 5;
pub const HEALTHBAR_GAP: i32 = 2;

// Health that fills a health bar completely, whatever the unit started with
pub const FULL_HEALTH: HitPoints = hp(100);

pub const MELEE_REACH: MapDistance = ONE_TILE;
pub const ARCHER_RANGE: MapDistance = map_dist(3);
pub const FIRE_ARROW_TURNS: u32 = 3;

pub const USER_LINEUP: &str = "lineup.json";
