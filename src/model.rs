//! Board state
//!
//! One owned value holds everything the controller reads and mutates. The
//! runtime holds the only instance and feeds it messages one at a time.

use crate::bindings::BindingStore;
use crate::config::RuntimeConfig;
use crate::gate::RetriggerGate;
use crate::tracker::PressTracker;

/// Observable controller state, derived from the model's parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardState {
    /// Key-downs are evaluated
    Idle,
    /// Retrigger window open; key-downs are ignored
    Suppressed,
    /// A rebind flow is running; key-downs are ignored
    Binding,
}

#[derive(Debug, Clone)]
pub struct BoardModel {
    pub config: RuntimeConfig,
    /// Authoritative table; replaced only by a committed reload
    pub store: BindingStore,
    pub gate: RetriggerGate,
    pub tracker: PressTracker,
    /// Key whose rebind flow is active, if any
    pub rebinding: Option<String>,
}

impl BoardModel {
    /// Build the model around a store that has finished loading
    ///
    /// There is no model without a store, so no input can be handled before
    /// the initial load completes.
    pub fn new(config: RuntimeConfig, store: BindingStore) -> Self {
        Self {
            config,
            store,
            gate: RetriggerGate::new(),
            tracker: PressTracker::new(),
            rebinding: None,
        }
    }

    pub fn state(&self) -> BoardState {
        if self.rebinding.is_some() {
            BoardState::Binding
        } else if !self.gate.is_open() {
            BoardState::Suppressed
        } else {
            BoardState::Idle
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> BoardModel {
        BoardModel::new(
            RuntimeConfig {
                volume: 1.0,
                assets_path: "/sounds".to_string(),
                retrigger_delay_ms: 200,
            },
            BindingStore::new(),
        )
    }

    #[test]
    fn test_starts_idle() {
        assert_eq!(model().state(), BoardState::Idle);
    }

    #[test]
    fn test_closed_gate_is_suppressed() {
        let mut model = model();
        model.gate.close();
        assert_eq!(model.state(), BoardState::Suppressed);
    }

    #[test]
    fn test_rebind_outranks_gate() {
        let mut model = model();
        model.gate.close();
        model.rebinding = Some("36".to_string());
        assert_eq!(model.state(), BoardState::Binding);
    }

    #[test]
    fn test_binding_ends_in_idle_even_inside_window() {
        let mut model = model();
        let generation = model.gate.close();
        model.rebinding = Some("36".to_string());

        // What the rebind flow does on commit or cancel
        model.rebinding = None;
        model.gate.open();
        assert_eq!(model.state(), BoardState::Idle);

        // The window's own timer firing afterwards changes nothing
        model.gate.expire(generation);
        assert_eq!(model.state(), BoardState::Idle);
    }
}
