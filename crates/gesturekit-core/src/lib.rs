//! Gesture handler state machine
//!
//! A [`GestureHandler`] tracks one touch interaction and decides whether it
//! is recognized. Arbitration between handlers belongs to an external
//! [`Orchestrator`]; the handler only reports its transitions and answers
//! relationship queries derived from its [`HandlerConfig`].

mod config;
mod error;
mod gesture;
mod handler;
mod orchestrator;
mod sample;
mod state;
mod target;

pub use config::HandlerConfig;
pub use error::HandlerError;
pub use gesture::{GenericGesture, Gesture};
pub use handler::{AnyGestureHandler, GestureHandler, HandlerTag};
pub use orchestrator::{GestureListener, Orchestrator};
pub use sample::{PointerEventKind, PointerId, PointerSample};
pub use state::GestureState;
pub use target::{is_within_bounds, GestureTarget};

pub use gesturekit_geometry::{HitSlop, Point, Rect, Size};

pub mod prelude {
    pub use crate::config::HandlerConfig;
    pub use crate::error::HandlerError;
    pub use crate::gesture::{GenericGesture, Gesture};
    pub use crate::handler::{AnyGestureHandler, GestureHandler, HandlerTag};
    pub use crate::orchestrator::{GestureListener, Orchestrator};
    pub use crate::sample::{PointerEventKind, PointerId, PointerSample};
    pub use crate::state::GestureState;
    pub use crate::target::GestureTarget;
    pub use gesturekit_geometry::prelude::*;
}
