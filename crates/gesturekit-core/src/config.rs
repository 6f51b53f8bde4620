use gesturekit_geometry::HitSlop;

/// Static configuration of a handler.
///
/// Fixed for the duration of an interaction: the handler only accepts a new
/// configuration while it is detached.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HandlerConfig {
    /// `None` means the bounds are the exact target rectangle.
    pub hit_slop: Option<HitSlop>,
    pub should_cancel_when_outside: bool,
    pub should_cancel_others_when_activated: bool,
    pub should_be_required_by_others_to_fail: bool,
}

impl HandlerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hit_slop(mut self, left: f32, top: f32, right: f32, bottom: f32) -> Self {
        self.hit_slop = Some(HitSlop::from_components(left, top, right, bottom));
        self
    }

    pub fn with_uniform_hit_slop(mut self, padding: f32) -> Self {
        self.hit_slop = Some(HitSlop::uniform(padding));
        self
    }

    pub fn cancel_when_outside(mut self, value: bool) -> Self {
        self.should_cancel_when_outside = value;
        self
    }

    pub fn cancel_others_when_activated(mut self, value: bool) -> Self {
        self.should_cancel_others_when_activated = value;
        self
    }

    pub fn required_by_others_to_fail(mut self, value: bool) -> Self {
        self.should_be_required_by_others_to_fail = value;
        self
    }

    pub fn effective_hit_slop(&self) -> HitSlop {
        self.hit_slop.unwrap_or(HitSlop::NONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_slop_and_no_relationships() {
        let config = HandlerConfig::default();
        assert_eq!(config.hit_slop, None);
        assert!(config.effective_hit_slop().is_zero());
        assert!(!config.should_cancel_when_outside);
        assert!(!config.should_cancel_others_when_activated);
        assert!(!config.should_be_required_by_others_to_fail);
    }

    #[test]
    fn uniform_slop_sets_every_edge() {
        let config = HandlerConfig::new().with_uniform_hit_slop(12.0);
        assert_eq!(config.hit_slop, Some(HitSlop::uniform(12.0)));
    }
}
