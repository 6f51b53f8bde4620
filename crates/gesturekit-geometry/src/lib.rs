//! Geometry for gesture bounds tests
//!
//! Points, sizes, rectangles and the per-edge hit-slop used to grow or
//! shrink a target's bounds before a containment check.

mod bounds;
mod geometry;

pub use bounds::*;
pub use geometry::*;

pub mod prelude {
    pub use crate::bounds::HitSlop;
    pub use crate::geometry::{Point, Rect, Size};
}
