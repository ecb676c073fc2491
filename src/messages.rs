//! Message types for the Elm-style architecture
//!
//! Everything that can change board state arrives as one of these messages,
//! in order, through a single channel.

use std::time::SystemTime;

use crate::bindings::BindingStore;

/// MIDI note number identifying a pad
pub type NoteKey = u8;

/// Raw controller input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMsg {
    /// Pad struck
    Down { key: NoteKey, at: SystemTime },
    /// Pad released
    Up { key: NoteKey, at: SystemTime },
}

/// Retrigger timer callbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateMsg {
    /// The window armed with this generation has elapsed
    Expired { generation: u64 },
}

/// Progress of the rebind flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RebindMsg {
    /// User picked a clip from the assets directory
    Selected { key: String, file_name: String },
    /// User backed out of the menu
    Cancelled { key: String },
    /// The assets directory could not be listed
    ListingFailed { key: String, error: String },
    /// The new table has been written and read back
    Committed(BindingStore),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Key(KeyMsg),
    Gate(GateMsg),
    Rebind(RebindMsg),
}

impl Msg {
    pub fn key_down(key: NoteKey, at: SystemTime) -> Self {
        Msg::Key(KeyMsg::Down { key, at })
    }

    pub fn key_up(key: NoteKey, at: SystemTime) -> Self {
        Msg::Key(KeyMsg::Up { key, at })
    }

    /// Short name for log spans
    pub fn name(&self) -> &'static str {
        match self {
            Msg::Key(KeyMsg::Down { .. }) => "Key::Down",
            Msg::Key(KeyMsg::Up { .. }) => "Key::Up",
            Msg::Gate(GateMsg::Expired { .. }) => "Gate::Expired",
            Msg::Rebind(RebindMsg::Selected { .. }) => "Rebind::Selected",
            Msg::Rebind(RebindMsg::Cancelled { .. }) => "Rebind::Cancelled",
            Msg::Rebind(RebindMsg::ListingFailed { .. }) => "Rebind::ListingFailed",
            Msg::Rebind(RebindMsg::Committed(_)) => "Rebind::Committed",
        }
    }
}
