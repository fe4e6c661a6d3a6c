// Key reader state domain model
use std::fmt;

/// Ordinal plotted for a state label outside the known set
pub const UNRECOGNIZED_ORDINAL: i32 = -1;

/// Y-axis category labels, in ordinal order
pub const STATE_LABELS: [&str; 3] = ["Key is not touching", "Key touching", "Open lock"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    NotTouching,
    Touching,
    OpenLock,
}

impl KeyState {
    pub const ALL: [KeyState; 3] = [KeyState::NotTouching, KeyState::Touching, KeyState::OpenLock];

    /// Exact match against the labels the reader emits
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|state| state.label() == label)
    }

    pub fn label(self) -> &'static str {
        STATE_LABELS[self.ordinal() as usize]
    }

    pub fn ordinal(self) -> i32 {
        match self {
            KeyState::NotTouching => 0,
            KeyState::Touching => 1,
            KeyState::OpenLock => 2,
        }
    }
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a state label onto the y-axis. Never fails: unknown labels map to
/// [`UNRECOGNIZED_ORDINAL`].
pub fn state_axis_lookup(label: &str) -> i32 {
    KeyState::from_label(label)
        .map(KeyState::ordinal)
        .unwrap_or(UNRECOGNIZED_ORDINAL)
}
