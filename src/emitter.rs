// emitter.rs - Provided change-notification sinks

use log::info;
use std::cell::Cell;
use std::sync::mpsc::Sender;

use crate::tracker::{AppearanceChange, EventEmitter};

/// Emitter that reports transitions through the `log` facade. Useful for
/// hosts that only want visibility, not delivery.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogEmitter;

impl EventEmitter for LogEmitter {
    fn emit(&self, event: &str, change: &AppearanceChange) {
        info!("{}: color scheme is now {}", event, change.color_scheme);
    }
}

/// Emitter that forwards changes over an mpsc channel.
///
/// `Sender` has no liveness probe, so a dropped receiver is only noticed on
/// the first failed send; from then on the emitter reports inactive and the
/// tracker stops handing it events.
pub struct ChannelEmitter {
    sender: Sender<AppearanceChange>,
    disconnected: Cell<bool>,
}

impl ChannelEmitter {
    pub fn new(sender: Sender<AppearanceChange>) -> Self {
        Self {
            sender,
            disconnected: Cell::new(false),
        }
    }
}

impl EventEmitter for ChannelEmitter {
    fn is_active(&self) -> bool {
        !self.disconnected.get()
    }

    fn emit(&self, _event: &str, change: &AppearanceChange) {
        if self.sender.send(*change).is_err() {
            self.disconnected.set(true);
        }
    }
}
