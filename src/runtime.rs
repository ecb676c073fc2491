//! Board runtime: owns the model and carries out commands
//!
//! Every message, from the MIDI callback, a timer or the rebind worker, goes
//! through one channel and is applied by `update` on the runtime's thread.
//! Side effects run on short-lived threads and report back as messages, with
//! one exception: committing the store is done inline, so no further input is
//! evaluated until the new table is in place.

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::time::Duration;

use crate::assets::{AssetDir, AssetSource};
use crate::bindings::{StoreError, StoreFile};
use crate::commands::Cmd;
use crate::messages::{GateMsg, Msg, RebindMsg};
use crate::model::BoardModel;
use crate::player::{Player, SystemPlayer};
use crate::rebind::select_clip;
use crate::selector::{Selector, TerminalSelector};
use crate::update::update;

/// The outside world, behind traits so tests can stand in for it
#[derive(Clone)]
pub struct Collaborators {
    pub player: Arc<dyn Player>,
    pub assets: Arc<dyn AssetSource>,
    pub selector: Arc<dyn Selector>,
}

impl Collaborators {
    /// Platform player, filesystem assets and the terminal menu
    pub fn system(player: SystemPlayer) -> Self {
        Self {
            player: Arc::new(player),
            assets: Arc::new(AssetDir),
            selector: Arc::new(TerminalSelector),
        }
    }
}

pub struct Runtime {
    model: BoardModel,
    store_file: StoreFile,
    collaborators: Collaborators,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl Runtime {
    pub fn new(model: BoardModel, store_file: StoreFile, collaborators: Collaborators) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        Self {
            model,
            store_file,
            collaborators,
            msg_tx,
            msg_rx,
        }
    }

    /// Handle for producers (the MIDI callback) to feed messages in
    pub fn sender(&self) -> Sender<Msg> {
        self.msg_tx.clone()
    }

    pub fn model(&self) -> &BoardModel {
        &self.model
    }

    /// Process messages until a commit fails
    ///
    /// The runtime keeps its own sender, so the channel never disconnects
    /// and this only returns on error.
    pub fn run(&mut self) -> Result<(), StoreError> {
        while let Ok(msg) = self.msg_rx.recv() {
            self.dispatch(msg)?;
        }
        Ok(())
    }

    /// Process at most one message, waiting up to `timeout` for it
    ///
    /// Returns whether a message was handled.
    pub fn recv_timeout(&mut self, timeout: Duration) -> Result<bool, StoreError> {
        match self.msg_rx.recv_timeout(timeout) {
            Ok(msg) => {
                self.dispatch(msg)?;
                Ok(true)
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => Ok(false),
        }
    }

    /// Apply one message and run the resulting commands
    pub fn dispatch(&mut self, msg: Msg) -> Result<(), StoreError> {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd)?;
        }
        Ok(())
    }

    fn process_cmd(&mut self, cmd: Cmd) -> Result<(), StoreError> {
        match cmd {
            Cmd::None => {}
            Cmd::PlayClip { path, volume } => {
                let player = Arc::clone(&self.collaborators.player);
                std::thread::spawn(move || {
                    if let Err(e) = player.play(&path, volume) {
                        tracing::error!("Could not play {}: {}", path, e);
                    }
                });
            }
            Cmd::ArmGate {
                generation,
                delay_ms,
            } => {
                let tx = self.msg_tx.clone();
                std::thread::spawn(move || {
                    std::thread::sleep(Duration::from_millis(delay_ms));
                    let _ = tx.send(Msg::Gate(GateMsg::Expired { generation }));
                });
            }
            Cmd::StartRebind { key } => {
                let tx = self.msg_tx.clone();
                let assets = Arc::clone(&self.collaborators.assets);
                let selector = Arc::clone(&self.collaborators.selector);
                let assets_path = self.model.config.assets_path.clone();
                std::thread::spawn(move || {
                    let msg = select_clip(key, &assets_path, assets.as_ref(), selector.as_ref());
                    let _ = tx.send(Msg::Rebind(msg));
                });
            }
            Cmd::CommitStore { store } => {
                let reloaded = self.store_file.commit(&store)?;
                self.dispatch(Msg::Rebind(RebindMsg::Committed(reloaded)))?;
            }
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd)?;
                }
            }
        }
        Ok(())
    }
}
