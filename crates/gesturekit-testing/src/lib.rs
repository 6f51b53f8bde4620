//! Testing utilities and harness for gesturekit
//!
//! Stand-ins for the collaborators a handler is prepared against: a
//! recording orchestrator, a listener, a resizable surface, a scripted
//! gesture and a sample queue that routes input the way an orchestrator
//! would.

pub mod gesture;
pub mod listener;
pub mod orchestrator;
pub mod queue;
pub mod surface;

pub use gesture::{HookCall, ScriptedGesture, Step};
pub use listener::{ListenerEvent, RecordingListener};
pub use orchestrator::{RecordingOrchestrator, StateChange};
pub use queue::SampleQueue;
pub use surface::TestSurface;

pub mod prelude {
    pub use crate::gesture::{HookCall, ScriptedGesture, Step};
    pub use crate::listener::{ListenerEvent, RecordingListener};
    pub use crate::orchestrator::{RecordingOrchestrator, StateChange};
    pub use crate::queue::SampleQueue;
    pub use crate::surface::TestSurface;
}
