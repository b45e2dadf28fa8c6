use serde::{Deserialize, Serialize};

/// A rectangle with an area.
///
/// ```
/// use object_utils::Rectangle;
///
/// let r = Rectangle::new(10.0, 20.0);
/// assert_eq!(r.width, 10.0);
/// assert_eq!(r.height, 20.0);
/// assert_eq!(r.area(), 200.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
