//! Shared test helpers for integration tests
//!
//! `Board` drives the real update loop synchronously: timers run on a virtual
//! clock, the player only records, and the clip menu answers from a script.
//! The bindings file is real and lives in a temp directory.
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use padboard::assets::{AssetError, AssetSource};
use padboard::bindings::{BindingStore, StoreError, StoreFile};
use padboard::commands::Cmd;
use padboard::messages::{GateMsg, Msg, NoteKey, RebindMsg};
use padboard::model::BoardModel;
use padboard::rebind::select_clip;
use padboard::selector::{Selection, Selector};
use padboard::update::update;
use padboard::RuntimeConfig;
use tempfile::TempDir;

pub const ASSETS_PATH: &str = "/sounds";

/// Wall-clock time `ms` milliseconds into a test
pub fn at(ms: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_millis(1_700_000_000_000 + ms)
}

pub fn test_config(retrigger_delay_ms: u64) -> RuntimeConfig {
    RuntimeConfig {
        volume: 0.8,
        assets_path: ASSETS_PATH.to_string(),
        retrigger_delay_ms,
    }
}

/// Assets directory held in memory
pub struct MemoryAssets(pub Vec<String>);

impl AssetSource for MemoryAssets {
    fn list_files(&self, _dir: &str) -> Result<Vec<String>, AssetError> {
        Ok(self.0.clone())
    }
}

/// Menu that answers from a queue, cancelling once it runs dry
#[derive(Default)]
pub struct ScriptedSelector {
    answers: Mutex<VecDeque<Selection>>,
    opened: Mutex<usize>,
}

impl ScriptedSelector {
    pub fn push(&self, answer: Selection) {
        self.answers.lock().unwrap().push_back(answer);
    }

    pub fn opened(&self) -> usize {
        *self.opened.lock().unwrap()
    }
}

impl Selector for ScriptedSelector {
    fn select(&self, _options: &[String]) -> io::Result<Selection> {
        *self.opened.lock().unwrap() += 1;
        Ok(self
            .answers
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Selection::Cancelled))
    }
}

pub struct Board {
    pub model: BoardModel,
    pub store_file: StoreFile,
    pub assets: MemoryAssets,
    pub selector: ScriptedSelector,
    /// Clip paths handed to the player, in order
    pub plays: Vec<String>,
    /// Keys a rebind was started for, in order
    pub rebinds: Vec<String>,
    /// Rebind waiting on the menu
    pending: Option<String>,
    /// (due ms, generation)
    timers: Vec<(u64, u64)>,
    now_ms: u64,
    _dir: TempDir,
}

impl Board {
    /// Board over a fresh bindings file
    pub fn new(retrigger_delay_ms: u64) -> Self {
        Self::with_file(None, retrigger_delay_ms).unwrap()
    }

    /// Board over a bindings file with the given content, or none at all
    pub fn with_file(content: Option<&str>, retrigger_delay_ms: u64) -> Result<Self, StoreError> {
        let dir = TempDir::new().unwrap();
        let store_file = StoreFile::new(dir.path().join("bindings.json"));
        if let Some(content) = content {
            std::fs::write(store_file.path(), content).unwrap();
        }
        let store = store_file.load()?;

        Ok(Self {
            model: BoardModel::new(test_config(retrigger_delay_ms), store),
            store_file,
            assets: MemoryAssets(vec![
                "kick.wav".to_string(),
                "snare.wav".to_string(),
                "clap.wav".to_string(),
            ]),
            selector: ScriptedSelector::default(),
            plays: Vec::new(),
            rebinds: Vec::new(),
            pending: None,
            timers: Vec::new(),
            now_ms: 0,
            _dir: dir,
        })
    }

    pub fn path(&self) -> PathBuf {
        self.store_file.path().to_path_buf()
    }

    pub fn file_content(&self) -> String {
        std::fs::read_to_string(self.store_file.path()).unwrap()
    }

    /// Fire every timer due by `ms`, then move the clock there
    pub fn advance_to(&mut self, ms: u64) {
        loop {
            self.timers.sort();
            match self.timers.first() {
                Some(&(due, generation)) if due <= ms => {
                    self.timers.remove(0);
                    self.now_ms = due;
                    self.dispatch(Msg::Gate(GateMsg::Expired { generation }));
                }
                _ => break,
            }
        }
        self.now_ms = ms;
    }

    pub fn key_down(&mut self, key: NoteKey, ms: u64) {
        self.advance_to(ms);
        self.dispatch(Msg::key_down(key, at(ms)));
    }

    pub fn key_up(&mut self, key: NoteKey, ms: u64) {
        self.advance_to(ms);
        self.dispatch(Msg::key_up(key, at(ms)));
    }

    /// Strike and release a pad after `held_ms`
    pub fn tap(&mut self, key: NoteKey, ms: u64, held_ms: u64) {
        self.key_down(key, ms);
        self.key_up(key, ms + held_ms);
    }

    pub fn menu_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Let the open menu answer with the next scripted selection
    pub fn answer_menu(&mut self) {
        let key = self
            .pending
            .take()
            .expect("answer_menu called with no rebind pending");
        let msg = select_clip(key, ASSETS_PATH, &self.assets, &self.selector);
        self.dispatch(Msg::Rebind(msg));
    }

    /// Reload the bindings file as a fresh start would
    pub fn reload(&self) -> BindingStore {
        self.store_file.load().unwrap()
    }

    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            for cmd in cmd.into_vec() {
                self.run(cmd);
            }
        }
    }

    fn run(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None | Cmd::Batch(_) => {}
            Cmd::PlayClip { path, .. } => self.plays.push(path),
            Cmd::ArmGate {
                generation,
                delay_ms,
            } => self.timers.push((self.now_ms + delay_ms, generation)),
            Cmd::StartRebind { key } => {
                self.rebinds.push(key.clone());
                self.pending = Some(key);
            }
            Cmd::CommitStore { store } => {
                let reloaded = self.store_file.commit(&store).unwrap();
                self.dispatch(Msg::Rebind(RebindMsg::Committed(reloaded)));
            }
        }
    }
}
