use crate::handler::HandlerTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerError {
    /// `prepare` was called on a handler that is still attached.
    AlreadyPrepared { tag: HandlerTag },
    /// Input or a transition reached a handler that was never prepared or was reset.
    NotPrepared { tag: HandlerTag },
    /// The attached target was dropped before the handler was reset.
    TargetReleased { tag: HandlerTag },
    /// The attached orchestrator was dropped before the handler was reset.
    OrchestratorReleased { tag: HandlerTag },
    /// Configuration can only change while the handler is detached.
    ConfigLocked { tag: HandlerTag },
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HandlerError::AlreadyPrepared { tag } => {
                write!(f, "handler {tag} already prepared or hasn't been reset")
            }
            HandlerError::NotPrepared { tag } => write!(f, "handler {tag} is not prepared"),
            HandlerError::TargetReleased { tag } => {
                write!(f, "target of handler {tag} was released while attached")
            }
            HandlerError::OrchestratorReleased { tag } => {
                write!(f, "orchestrator of handler {tag} was released while attached")
            }
            HandlerError::ConfigLocked { tag } => {
                write!(f, "handler {tag} cannot be reconfigured while attached")
            }
        }
    }
}

impl std::error::Error for HandlerError {}
