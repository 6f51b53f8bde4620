use std::fmt;

/// Recognition state of a single gesture handler.
///
/// `Failed`, `Cancelled` and `End` are terminal: once reached, only a reset
/// brings the handler back to `Undetermined`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    #[default]
    Undetermined,
    Began,
    Active,
    Cancelled,
    Failed,
    End,
}

impl GestureState {
    pub const ALL: [GestureState; 6] = [
        GestureState::Undetermined,
        GestureState::Began,
        GestureState::Active,
        GestureState::Cancelled,
        GestureState::Failed,
        GestureState::End,
    ];

    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GestureState::Cancelled | GestureState::Failed | GestureState::End
        )
    }

    /// Whether the transition table allows moving from `self` to `next`.
    pub fn can_transition_to(self, next: GestureState) -> bool {
        use GestureState::*;
        match next {
            Undetermined => false,
            Began => self == Undetermined,
            Active => matches!(self, Undetermined | Began),
            End => matches!(self, Began | Active),
            Cancelled | Failed => matches!(self, Undetermined | Began | Active),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GestureState::Undetermined => "UNDETERMINED",
            GestureState::Began => "BEGAN",
            GestureState::Active => "ACTIVE",
            GestureState::Cancelled => "CANCELLED",
            GestureState::Failed => "FAILED",
            GestureState::End => "END",
        }
    }

    /// Numeric code used when bridging states to other layers.
    pub fn code(self) -> u8 {
        match self {
            GestureState::Undetermined => 0,
            GestureState::Failed => 2,
            GestureState::Began => 3,
            GestureState::Cancelled => 4,
            GestureState::Active => 5,
            GestureState::End => 6,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.code() == code)
    }
}

impl fmt::Display for GestureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
