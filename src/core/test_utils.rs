// SPDX-License-Identifier: GPL-3.0-only

//! Fakes for exercising lookups without a network or a page.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::core::api::PokemonFetcher;
use crate::core::sinks::{DisplaySink, MessageSink};
use crate::entities::{MessageKind, PokemonResponse};
use crate::utils::StarryError;

/// Body PokéApi sends for `pokemon/pikachu`, trimmed to a realistic subset
pub fn pikachu_json() -> serde_json::Value {
    serde_json::json!({
        "name": "pikachu",
        "id": 25,
        "base_experience": 112,
        "sprites": {
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            "other": {
                "official-artwork": {
                    "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png"
                }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ],
        "stats": [
            { "base_stat": 35, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 55, "effort": 0, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } },
            { "base_stat": 40, "effort": 0, "stat": { "name": "defense", "url": "https://pokeapi.co/api/v2/stat/3/" } },
            { "base_stat": 50, "effort": 0, "stat": { "name": "special-attack", "url": "https://pokeapi.co/api/v2/stat/4/" } },
            { "base_stat": 50, "effort": 0, "stat": { "name": "special-defense", "url": "https://pokeapi.co/api/v2/stat/5/" } },
            { "base_stat": 90, "effort": 2, "stat": { "name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/" } }
        ]
    })
}

pub fn pikachu() -> PokemonResponse {
    serde_json::from_value(pikachu_json()).expect("pikachu fixture decodes")
}

/// Fetcher answering from a fixed script, unknown identifiers are `NotFound`
#[derive(Default)]
pub struct ScriptedFetcher {
    responses: HashMap<String, Result<PokemonResponse, StarryError>>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedFetcher {
    pub fn with(mut self, identifier: &str, response: Result<PokemonResponse, StarryError>) -> Self {
        self.responses.insert(identifier.to_string(), response);
        self
    }

    pub fn delayed(mut self, identifier: &str, delay: Duration) -> Self {
        self.delays.insert(identifier.to_string(), delay);
        self
    }

    /// Identifiers requested so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PokemonFetcher for ScriptedFetcher {
    async fn fetch(&self, identifier: &str) -> Result<PokemonResponse, StarryError> {
        self.calls.lock().unwrap().push(identifier.to_string());

        if let Some(delay) = self.delays.get(identifier) {
            tokio::time::sleep(*delay).await;
        }

        self.responses
            .get(identifier)
            .cloned()
            .unwrap_or(Err(StarryError::NotFound))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Message(String, MessageKind),
    ClearMessage,
    Display(String),
    ClearDisplay,
}

/// Sink that keeps every write so tests can assert on ordering
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl MessageSink for RecordingSink {
    fn show_message(&self, text: &str, kind: MessageKind) {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::Message(text.to_string(), kind));
    }

    fn clear_message(&self) {
        self.events.lock().unwrap().push(SinkEvent::ClearMessage);
    }
}

impl DisplaySink for RecordingSink {
    fn show_pokemon(&self, html: &str) {
        self.events
            .lock()
            .unwrap()
            .push(SinkEvent::Display(html.to_string()));
    }

    fn clear_display(&self) {
        self.events.lock().unwrap().push(SinkEvent::ClearDisplay);
    }
}
