use crate::{Point, Rect, Size};

/// Per-edge padding applied to a target's bounds before containment tests.
///
/// Positive pads grow the touchable area outward, negative pads shrink it.
/// `HitSlop::NONE` leaves the bounds equal to the target rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitSlop {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl HitSlop {
    pub const NONE: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn uniform(all: f32) -> Self {
        Self {
            left: all,
            top: all,
            right: all,
            bottom: all,
        }
    }

    pub fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    pub fn from_components(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.left == 0.0 && self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0
    }

    /// Expands `[0,0]..[width,height]` by the pads.
    pub fn apply(&self, size: Size) -> Rect {
        Rect::from_edges(
            -self.left,
            -self.top,
            size.width + self.right,
            size.height + self.bottom,
        )
    }

    /// Inclusive containment, compared against the padded edges directly.
    ///
    /// Going through [`apply`](Self::apply) would recompute the far edges as
    /// `origin + extent`, which does not round-trip in f32.
    pub fn contains(&self, size: Size, point: Point) -> bool {
        point.x >= -self.left
            && point.x <= size.width + self.right
            && point.y >= -self.top
            && point.y <= size.height + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_matches_exact_rectangle() {
        let bounds = HitSlop::NONE.apply(Size::new(100.0, 100.0));
        assert_eq!(bounds, Rect::from_size(Size::new(100.0, 100.0)));
    }

    #[test]
    fn pads_grow_each_edge_independently() {
        let slop = HitSlop::from_components(10.0, 20.0, 30.0, 40.0);
        let size = Size::new(100.0, 100.0);

        assert!(slop.contains(size, Point::new(-10.0, -20.0)));
        assert!(!slop.contains(size, Point::new(-11.0, 0.0)));
        assert!(slop.contains(size, Point::new(130.0, 140.0)));
        assert!(!slop.contains(size, Point::new(130.0, 140.5)));
    }

    #[test]
    fn far_edges_are_inclusive_with_fractional_pads() {
        let widths = [100.0_f32, 33.3, 77.7, 1000.1, 480.0];
        for width in widths {
            for step in 1..200 {
                let pad = step as f32 * 0.1;
                let size = Size::new(width, width * 0.5);
                let slop = HitSlop::from_components(pad, pad, 0.0, 0.0);
                assert!(
                    slop.contains(size, Point::new(width, width * 0.5)),
                    "far corner rejected: width {width}, pad {pad}"
                );
                assert!(
                    slop.contains(size, Point::new(-pad, -pad)),
                    "near corner rejected: width {width}, pad {pad}"
                );
            }
        }
    }

    #[test]
    fn far_edge_with_left_pad_only() {
        let slop = HitSlop::from_components(16.3, 0.0, 0.0, 0.0);
        let size = Size::new(33.3, 50.0);

        assert!(slop.contains(size, Point::new(33.3, 10.0)));
        assert!(!slop.contains(size, Point::new(33.31, 10.0)));
    }

    #[test]
    fn negative_pads_shrink_bounds() {
        let slop = HitSlop::uniform(-10.0);
        let size = Size::new(100.0, 100.0);

        assert!(!slop.contains(size, Point::new(5.0, 50.0)));
        assert!(slop.contains(size, Point::new(10.0, 90.0)));
    }
}
