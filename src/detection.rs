use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

/// Contains (x,y) of the centroid and the radius of its enclosing circle
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub x: f32,
    pub y: f32,
    #[serde(rename = "r")]
    pub radius: f32,
}

impl Detection {
    #[inline]
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    #[inline(always)]
    pub fn point(&self) -> na::Point2<f32> {
        na::Point2::new(self.x, self.y)
    }
}
