use gesturekit_geometry::{HitSlop, Point, Size};

/// Surface a handler is attached to.
///
/// The handler only needs the target's extent; hierarchy and hit-testing stay
/// with the orchestrator.
pub trait GestureTarget {
    fn width(&self) -> f32;

    fn height(&self) -> f32;

    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

impl GestureTarget for Size {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }
}

/// Inclusive containment of `(x, y)` in the target rectangle grown by `hit_slop`.
pub fn is_within_bounds(
    target: &dyn GestureTarget,
    hit_slop: Option<HitSlop>,
    x: f32,
    y: f32,
) -> bool {
    hit_slop
        .unwrap_or(HitSlop::NONE)
        .contains(target.size(), Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_slop_uses_exact_rectangle() {
        let target = Size::new(100.0, 100.0);
        assert!(is_within_bounds(&target, None, 100.0, 0.0));
        assert!(!is_within_bounds(&target, None, 150.0, 50.0));
    }

    #[test]
    fn slop_corners_are_inclusive() {
        let target = Size::new(40.0, 60.0);
        let slop = Some(HitSlop::from_components(4.0, 3.0, 2.0, 1.0));

        assert!(is_within_bounds(&target, slop, -4.0, -3.0));
        assert!(is_within_bounds(&target, slop, 42.0, 61.0));
        assert!(!is_within_bounds(&target, slop, -5.0, 0.0));
        assert!(!is_within_bounds(&target, slop, 0.0, 61.5));
    }

    #[test]
    fn fractional_far_edge_is_inclusive() {
        let target = Size::new(33.3, 50.0);
        let slop = Some(HitSlop::from_components(16.3, 0.0, 0.0, 0.0));

        assert!(is_within_bounds(&target, slop, 33.3, 10.0));
        assert!(is_within_bounds(&target, slop, -16.3, 50.0));
        assert!(!is_within_bounds(&target, slop, 33.4, 10.0));
    }
}
