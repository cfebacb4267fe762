use crate::*;

// Represents a rectangle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle<T> {
    pub top_left: Vector<T>,
    pub size: Vector<T>,
}

impl<T: Copy> Rectangle<T> {
    pub fn top(&self) -> T {
        self.top_left.y
    }
    pub fn left(&self) -> T {
        self.top_left.x
    }
    pub fn width(&self) -> T {
        self.size.x
    }
    pub fn height(&self) -> T {
        self.size.y
    }
}
