use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A location on the board plane, ie, a plain coordinate pair. Unlike a
/// [`crate::Square`], a point carries no identity and no occupancy; two
/// points are equal exactly when their coordinates are.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, rhs: Direction) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from(value: (i32, i32)) -> Self {
        Point::new(value.0, value.1)
    }
}

/// A unit step along the grid. Each component is -1, 0 or 1, so adding a
/// direction to a point moves it one square towards some neighbour (or
/// nowhere, for the zero direction). Produced by
/// [`crate::Vector::direction`]; callers do not normally construct these
/// by hand.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Direction {
    pub x: i32,
    pub y: i32,
}

impl Direction {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
