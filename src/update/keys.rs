//! Key event handling: play decisions and hold-to-rebind

use std::time::SystemTime;

use crate::commands::Cmd;
use crate::messages::{KeyMsg, NoteKey};
use crate::model::{BoardModel, BoardState};
use crate::tracker::{Release, REBIND_HOLD};

use super::rebind::begin_rebind;

/// Handle controller key messages
pub fn update_key(model: &mut BoardModel, msg: KeyMsg) -> Option<Cmd> {
    match msg {
        KeyMsg::Down { key, at } => key_down(model, key, at),
        KeyMsg::Up { key, at } => key_up(model, key, at),
    }
}

fn key_down(model: &mut BoardModel, key: NoteKey, at: SystemTime) -> Option<Cmd> {
    // Tracked in every state so a later key-up can still be measured
    model.tracker.record(key, at);

    match model.state() {
        BoardState::Idle => {}
        BoardState::Suppressed => {
            tracing::debug!("Key {} ignored: retrigger window open", key);
            return None;
        }
        BoardState::Binding => {
            tracing::debug!("Key {} ignored: rebind in progress", key);
            return None;
        }
    }

    let key_id = key.to_string();
    let Some(binding) = model.store.find_by_key(&key_id) else {
        tracing::info!("No matching bind for key {}, select a clip for it.", key_id);
        return begin_rebind(model, key_id);
    };

    tracing::info!("Key {} pressed, playing {}.", key_id, binding.file_name());
    let play = Cmd::PlayClip {
        path: binding.file_path.clone(),
        volume: model.config.volume,
    };

    let generation = model.gate.close();
    let arm = Cmd::ArmGate {
        generation,
        delay_ms: model.config.retrigger_delay_ms,
    };

    Some(Cmd::batch(vec![play, arm]))
}

fn key_up(model: &mut BoardModel, key: NoteKey, at: SystemTime) -> Option<Cmd> {
    match model.tracker.release(key, at) {
        Release::Spurious => {
            tracing::trace!("Key {} released with no tracked press", key);
            None
        }
        Release::OtherKey => None,
        Release::Tap { held } => {
            tracing::info!(
                "You pressed the key for {:.1} seconds, press for {} seconds to rebind.",
                held.as_secs_f64(),
                REBIND_HOLD.as_secs()
            );
            None
        }
        Release::Hold { held } => {
            tracing::debug!("Key {} held for {:.1}s", key, held.as_secs_f64());
            begin_rebind(model, key.to_string())
        }
    }
}
