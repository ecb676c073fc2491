//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! `update` never touches the player, the terminal, timers or the disk; it
//! returns one of these and the runtime carries it out.

use crate::bindings::BindingStore;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Spawn the platform audio player for a clip (fire-and-forget)
    PlayClip { path: String, volume: f32 },
    /// Start the retrigger timer
    /// After delay_ms, sends Msg::Gate(Expired { generation })
    ArmGate { generation: u64, delay_ms: u64 },
    /// List assets and open the selection menu for a key
    /// Sends one Msg::Rebind(Selected | Cancelled | ListingFailed)
    StartRebind { key: String },
    /// Persist the table, read it back, and send Msg::Rebind(Committed)
    ///
    /// Failure here is fatal.
    CommitStore { store: BindingStore },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Flatten into the individual commands, in execution order
    pub fn into_vec(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_vec).collect(),
            cmd => vec![cmd],
        }
    }
}
