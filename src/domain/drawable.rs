use serde::{Deserialize, Serialize};

use super::body::{Body, Color};
use super::shape::Shape;

/// Primitive handed to the external renderer, in world pixel space.
///
/// `x`/`y` is the top-left of the unrotated box; `rotation` turns it about
/// the box center, exactly like a body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub shape: Shape,
    pub color: Color,
    pub rotation: f32,
}

impl Drawable {
    /// Box of size `w` x `h` centered on (`cx`, `cy`).
    pub fn centered(cx: f32, cy: f32, w: f32, h: f32, shape: Shape, color: Color, rotation: f32) -> Self {
        Self {
            x: cx - w * 0.5,
            y: cy - h * 0.5,
            w,
            h,
            shape,
            color,
            rotation,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w * 0.5, self.y + self.h * 0.5)
    }
}

impl From<&Body> for Drawable {
    fn from(body: &Body) -> Self {
        Self {
            x: body.pos.x,
            y: body.pos.y,
            w: body.w,
            h: body.h,
            shape: body.shape,
            color: body.color,
            rotation: body.rotation,
        }
    }
}
