use gesturekit_geometry::Point;
use web_time::Instant;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer observation delivered to a handler.
///
/// `position` is in the target's local coordinate space; the orchestrator is
/// responsible for translating raw device coordinates before dispatch.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerSample {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Number of pointers currently in contact, including this one.
    pub pointer_count: usize,
    /// When the sample was taken; `None` until the source stamps it.
    pub time: Option<Instant>,
}

impl PointerSample {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            pointer_count: 1,
            time: None,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn with_pointer_count(mut self, pointer_count: usize) -> Self {
        self.pointer_count = pointer_count;
        self
    }

    pub fn at(mut self, time: Instant) -> Self {
        self.time = Some(time);
        self
    }

    /// Stamps the sample with the current time.
    pub fn stamped_now(self) -> Self {
        self.at(Instant::now())
    }

    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn unstamped_samples_compare_equal() {
        assert_eq!(PointerSample::down(3.0, 4.0), PointerSample::down(3.0, 4.0));
        assert_eq!(PointerSample::moved(1.0, 1.0).time, None);
    }

    #[test]
    fn replayed_stream_keeps_its_timestamps() {
        let start = Instant::now();
        let stream: Vec<_> = (0..3u64)
            .map(|step| {
                PointerSample::moved(step as f32, 0.0).at(start + Duration::from_millis(16 * step))
            })
            .collect();
        let replay = stream.clone();

        assert_eq!(stream, replay);
        assert_eq!(
            replay[2].time.map(|time| time.duration_since(start)),
            Some(Duration::from_millis(32))
        );
    }

    #[test]
    fn stamped_now_sets_a_time() {
        assert!(PointerSample::up(0.0, 0.0).stamped_now().time.is_some());
    }
}
