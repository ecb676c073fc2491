//! Retrigger timer callbacks

use crate::commands::Cmd;
use crate::messages::GateMsg;
use crate::model::BoardModel;

pub fn update_gate(model: &mut BoardModel, msg: GateMsg) -> Option<Cmd> {
    match msg {
        GateMsg::Expired { generation } => {
            if model.gate.expire(generation) {
                tracing::trace!("Retrigger window {} closed", generation);
            }
            None
        }
    }
}
