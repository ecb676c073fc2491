//! MIDI controller input
//!
//! Opens one input port and forwards note on/off as key messages on the
//! runtime's channel. Everything else the controller sends (CC, pitch bend,
//! clock) is dropped here.

use std::sync::mpsc::Sender;
use std::time::SystemTime;

use anyhow::{anyhow, bail, Context, Result};
use midir::{Ignore, MidiInput, MidiInputConnection};

use crate::messages::Msg;

const CLIENT_NAME: &str = "padboard";

/// Translate a raw MIDI message into a key message
///
/// Note-on with velocity 0 is treated as note-off, as most controllers send
/// it that way. Any channel is accepted.
pub fn decode(message: &[u8], at: SystemTime) -> Option<Msg> {
    let (&status, rest) = message.split_first()?;
    let key = *rest.first()? & 0x7F;
    let velocity = rest.get(1).map(|v| v & 0x7F).unwrap_or(0);

    match status & 0xF0 {
        0x90 if velocity > 0 => Some(Msg::key_down(key, at)),
        0x90 | 0x80 => Some(Msg::key_up(key, at)),
        _ => None,
    }
}

/// Names of the available input ports, in port-index order
pub fn list_ports() -> Result<Vec<String>> {
    let midi_in = MidiInput::new(CLIENT_NAME).context("Failed to initialize MIDI input")?;
    Ok(midi_in
        .ports()
        .iter()
        .map(|port| {
            midi_in
                .port_name(port)
                .unwrap_or_else(|_| "unknown".to_string())
        })
        .collect())
}

/// A live connection to one input port
///
/// Events flow until this is dropped.
pub struct MidiListener {
    _connection: MidiInputConnection<()>,
    port_name: String,
}

impl MidiListener {
    /// Connect to input port `port_index` and send decoded events to `tx`
    pub fn connect(port_index: usize, tx: Sender<Msg>) -> Result<Self> {
        let mut midi_in = MidiInput::new(CLIENT_NAME).context("Failed to initialize MIDI input")?;
        midi_in.ignore(Ignore::All);

        let ports = midi_in.ports();
        if ports.is_empty() {
            bail!("No MIDI devices connected, please connect a device and run again.");
        }
        let port = ports.get(port_index).ok_or_else(|| {
            anyhow!(
                "MIDI port {} does not exist ({} available, see --list-ports)",
                port_index,
                ports.len()
            )
        })?;

        let port_name = midi_in
            .port_name(port)
            .unwrap_or_else(|_| "unknown".to_string());

        let connection = midi_in
            .connect(
                port,
                "padboard-input",
                move |_timestamp, message, _| {
                    if let Some(msg) = decode(message, SystemTime::now()) {
                        // Receiver gone means the board is shutting down
                        let _ = tx.send(msg);
                    }
                },
                (),
            )
            .map_err(|e| anyhow!("Failed to open MIDI port {}: {}", port_name, e))?;

        Ok(Self {
            _connection: connection,
            port_name,
        })
    }

    pub fn port_name(&self) -> &str {
        &self.port_name
    }
}
