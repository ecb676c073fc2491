//! Rebind flow: entering, committing and leaving the Binding state

use crate::bindings::Binding;
use crate::commands::Cmd;
use crate::messages::RebindMsg;
use crate::model::BoardModel;

/// Enter the Binding state for `key` and ask the runtime for a selection
///
/// Only one rebind runs at a time; a request while one is active is dropped.
pub fn begin_rebind(model: &mut BoardModel, key: String) -> Option<Cmd> {
    if let Some(active) = &model.rebinding {
        tracing::debug!("Rebind for key {} ignored: key {} is being bound", key, active);
        return None;
    }

    tracing::info!("Binding key {}...", key);
    model.rebinding = Some(key.clone());
    Some(Cmd::StartRebind { key })
}

/// Handle rebind flow messages
pub fn update_rebind(model: &mut BoardModel, msg: RebindMsg) -> Option<Cmd> {
    match msg {
        RebindMsg::Selected { key, file_name } => {
            if model.rebinding.as_deref() != Some(key.as_str()) {
                tracing::warn!("Dropping selection for key {}: no rebind active for it", key);
                return None;
            }

            let binding = Binding::new(key, model.config.clip_path(&file_name));
            tracing::info!("Binding key {} to {}", binding.key, binding.file_path);

            // Still Binding until the commit comes back
            let store = model.store.clone().upsert(binding);
            Some(Cmd::CommitStore { store })
        }

        RebindMsg::Committed(store) => {
            model.store = store;
            model.rebinding = None;
            model.gate.open();
            None
        }

        RebindMsg::Cancelled { key } => {
            tracing::info!("Binding got cancelled");
            finish(model, &key);
            None
        }

        RebindMsg::ListingFailed { key, error } => {
            tracing::error!(
                "Could not list clips in {}: {}",
                model.config.assets_path,
                error
            );
            finish(model, &key);
            None
        }
    }
}

/// Leaving the flow also ends any retrigger window still open from before it
fn finish(model: &mut BoardModel, key: &str) {
    if model.rebinding.as_deref() == Some(key) {
        model.rebinding = None;
        model.gate.open();
    }
}
