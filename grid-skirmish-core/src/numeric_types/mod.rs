use core::marker::PhantomData;

#[macro_use]
mod map_distance;

#[macro_use]
mod hit_points;

system! {
    quantities: Q {
        map_distance: tile, D;
        hit_points: point, H;
    }
    units: U {
        mod map_distance::MapDistance,
        mod hit_points::HitPoints,
    }
}

mod storage {
    Q!(crate::numeric_types, i32);
}

pub use self::storage::HitPoints;
pub use self::storage::MapDistance;

pub const fn map_dist(value: i32) -> MapDistance {
    MapDistance {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}

pub const ZERO_TILES: MapDistance = map_dist(0);
pub const ONE_TILE: MapDistance = map_dist(1);

pub const fn hp(value: i32) -> HitPoints {
    HitPoints {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}
