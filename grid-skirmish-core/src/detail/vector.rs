use crate::numeric_types::{map_dist, MapDistance, ZERO_TILES};
use crate::*;

use super::constants::GRID_SIZE;

impl<T> Vector<T> {
    pub fn cast<U: From<T>>(self) -> Vector<U> {
        Vector {
            x: self.x.into(),
            y: self.y.into(),
        }
    }
}

impl<T: std::ops::Mul> Vector<T> {
    pub fn piecewise_multiply(self, rhs: Vector<T>) -> Vector<T::Output> {
        Vector {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }
}

impl<T: std::ops::Sub<Output = T>> std::ops::Sub for Vector<T> {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Vector<MapDistance> {
    pub fn new(x: i32, y: i32) -> Self {
        Vector {
            x: map_dist(x),
            y: map_dist(y),
        }
    }

    // Whether both coordinates lie on the board
    pub fn on_grid(self) -> bool {
        (ZERO_TILES..GRID_SIZE).contains(&self.x) && (ZERO_TILES..GRID_SIZE).contains(&self.y)
    }

    // Chebyshev distance: the larger of the two axis distances
    pub fn chebyshev_distance(self, other: Self) -> MapDistance {
        let offset = self - other;
        map_dist(offset.x.value.abs().max(offset.y.value.abs()))
    }

    pub fn values(self) -> Vector<i32> {
        Vector {
            x: self.x.value,
            y: self.y.value,
        }
    }
}
