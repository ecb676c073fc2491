//! Worker side of the rebind flow
//!
//! Runs off the update loop: lists the clips and blocks on the menu, then
//! reports the outcome as a single message.

use crate::assets::AssetSource;
use crate::messages::RebindMsg;
use crate::selector::{Selection, Selector};

/// List clips in `assets_path` and let the user pick one for `key`
pub fn select_clip(
    key: String,
    assets_path: &str,
    assets: &dyn AssetSource,
    selector: &dyn Selector,
) -> RebindMsg {
    let clips = match assets.list_files(assets_path) {
        Ok(clips) => clips,
        Err(e) => {
            return RebindMsg::ListingFailed {
                key,
                error: e.to_string(),
            }
        }
    };

    if clips.is_empty() {
        tracing::info!("No clips found in {}, nothing to bind", assets_path);
        return RebindMsg::Cancelled { key };
    }

    tracing::info!("Hit escape to cancel binding");

    match selector.select(&clips) {
        Ok(Selection::Chosen(file_name)) => RebindMsg::Selected { key, file_name },
        Ok(Selection::Cancelled) => RebindMsg::Cancelled { key },
        Err(e) => {
            tracing::warn!("Clip menu failed: {}", e);
            RebindMsg::Cancelled { key }
        }
    }
}
