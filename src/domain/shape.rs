use serde::{Deserialize, Serialize};

/// Primitive shape tag of a body.
///
/// Persisted as a lowercase string. Tags this build does not know about load
/// as [`Shape::Unknown`], which has no geometry and never collides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    #[default]
    Rect,
    Circle,
    Triangle,
    #[serde(other)]
    Unknown,
}

impl Shape {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "rect" => Shape::Rect,
            "circle" => Shape::Circle,
            "triangle" => Shape::Triangle,
            _ => Shape::Unknown,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Shape::Rect => "rect",
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Unknown => "unknown",
        }
    }

    /// Area of the shape inscribed in a `w` x `h` box.
    pub fn area(self, w: f32, h: f32) -> f32 {
        match self {
            Shape::Rect => w * h,
            Shape::Triangle => 0.5 * w * h,
            Shape::Circle => {
                let r = effective_radius(w, h);
                std::f32::consts::PI * r * r
            }
            Shape::Unknown => 0.0,
        }
    }
}

/// Radius used for circle collision: the mean of the half extents.
#[inline]
pub fn effective_radius(w: f32, h: f32) -> f32 {
    (w * 0.5 + h * 0.5) * 0.5
}
