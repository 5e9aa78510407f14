// SPDX-License-Identifier: GPL-3.0-only

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::entities::MessageKind;

/// The single region used to show transient status and error text
pub trait MessageSink: Send + Sync {
    /// Replaces whatever message is showing
    fn show_message(&self, text: &str, kind: MessageKind);
    fn clear_message(&self);
}

/// The region the rendered Pokémon card is written into
pub trait DisplaySink: Send + Sync {
    /// Replaces the region contents wholesale
    fn show_pokemon(&self, html: &str);
    fn clear_display(&self);
}

/// In-memory message and display regions, the web page is rendered from them
/// once a lookup settles
#[derive(Debug, Default)]
pub struct PageRegions {
    message: Mutex<Option<(String, MessageKind)>>,
    display: Mutex<String>,
}

impl PageRegions {
    /// Current message text and presentation, if any
    pub fn message(&self) -> Option<(String, MessageKind)> {
        lock(&self.message).clone()
    }

    /// Current contents of the display region
    pub fn display(&self) -> String {
        lock(&self.display).clone()
    }
}

impl MessageSink for PageRegions {
    fn show_message(&self, text: &str, kind: MessageKind) {
        *lock(&self.message) = Some((text.to_string(), kind));
    }

    fn clear_message(&self) {
        *lock(&self.message) = None;
    }
}

impl DisplaySink for PageRegions {
    fn show_pokemon(&self, html: &str) {
        *lock(&self.display) = html.to_string();
    }

    fn clear_display(&self) {
        lock(&self.display).clear();
    }
}

/// Regions for the one-shot `lookup` command: messages go to stderr, the card to stdout
#[derive(Debug, Default)]
pub struct TerminalRegions;

impl MessageSink for TerminalRegions {
    fn show_message(&self, text: &str, kind: MessageKind) {
        eprintln!("[{kind}] {text}");
    }

    fn clear_message(&self) {}
}

impl DisplaySink for TerminalRegions {
    fn show_pokemon(&self, html: &str) {
        println!("{html}");
    }

    fn clear_display(&self) {}
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
