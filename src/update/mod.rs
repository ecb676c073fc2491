//! Update functions for the Elm-style architecture
//!
//! All board state transformations flow through these functions.
//!
//! ```text
//!            key-down, bound                 gate expired
//!   Idle ─────────────────────▶ Suppressed ───────────────▶ Idle
//!    │  key-down, unbound
//!    │  key-up, held ≥ 5s
//!    ▼
//!  Binding ── committed / cancelled / listing failed ──▶ Idle
//! ```

mod gate;
mod keys;
mod rebind;

use tracing::{debug, span, Level};

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::BoardModel;

pub use gate::update_gate;
pub use keys::update_key;
pub use rebind::{begin_rebind, update_rebind};

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut BoardModel, msg: Msg) -> Option<Cmd> {
    let _span = span!(Level::DEBUG, "update", msg = msg.name()).entered();
    let before = model.state();

    let result = match msg {
        Msg::Key(m) => update_key(model, m),
        Msg::Gate(m) => update_gate(model, m),
        Msg::Rebind(m) => update_rebind(model, m),
    };

    let after = model.state();
    if before != after {
        debug!(target: "state", "{:?} → {:?}", before, after);
    }

    result
}
