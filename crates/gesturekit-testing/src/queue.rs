//! Sample routing for tests.
//!
//! Queues samples and delivers them the way an orchestrator routes input:
//! each sample is mirrored to the listener and then handled, for as long as
//! the handler still wants events.

use gesturekit_core::{AnyGestureHandler, HandlerError, PointerSample};

#[derive(Default)]
pub struct SampleQueue {
    queue: Vec<PointerSample>,
}

impl SampleQueue {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, sample: PointerSample) -> &mut Self {
        self.queue.push(sample);
        self
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Delivers queued samples and returns how many reached the handler.
    ///
    /// Samples left after the handler stops wanting events are discarded.
    pub fn deliver(
        &mut self,
        handler: &mut dyn AnyGestureHandler,
    ) -> Result<usize, HandlerError> {
        let mut delivered = 0;
        for sample in self.queue.drain(..) {
            if !handler.want_events() {
                break;
            }
            handler.dispatch_touch_event(&sample);
            handler.handle(&sample)?;
            delivered += 1;
        }
        Ok(delivered)
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerSample),
    {
        for sample in self.queue.drain(..) {
            handler(sample);
        }
    }
}
