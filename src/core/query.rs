// SPDX-License-Identifier: GPL-3.0-only

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use crate::{
    core::{
        api::PokemonFetcher,
        render::{extract_pokemon, render_pokemon},
        sinks::{DisplaySink, MessageSink},
    },
    entities::{MessageKind, StarryPokemon},
    fl,
    utils::StarryError,
};

/// How a submission ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Rendered(StarryPokemon),
    Failed(StarryError),
    /// A newer submission started before this one resolved, its result was dropped
    Superseded,
}

/// Lowercases and trims what the user typed
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase().trim().to_string()
}

/// Turns submissions into one fetch each and writes the outcome to the page regions.
///
/// The latest submission wins: when an older lookup resolves after a newer one was
/// submitted it leaves both regions alone.
pub struct QueryHandler {
    fetcher: Arc<dyn PokemonFetcher>,
    messages: Arc<dyn MessageSink>,
    display: Arc<dyn DisplaySink>,
    latest_submission: AtomicU64,
}

impl QueryHandler {
    pub fn new(
        fetcher: Arc<dyn PokemonFetcher>,
        messages: Arc<dyn MessageSink>,
        display: Arc<dyn DisplaySink>,
    ) -> Self {
        Self {
            fetcher,
            messages,
            display,
            latest_submission: AtomicU64::new(0),
        }
    }

    pub async fn submit(&self, raw_query: &str) -> LookupOutcome {
        let submission = self.latest_submission.fetch_add(1, Ordering::SeqCst) + 1;
        let query = normalize_query(raw_query);

        if query.is_empty() {
            tracing::debug!("rejected empty query");
            let error = StarryError::Validation;
            self.messages
                .show_message(&error.user_message(), MessageKind::Error);
            return LookupOutcome::Failed(error);
        }

        tracing::info!(query = %query, "looking up pokémon");
        self.display.clear_display();
        self.messages
            .show_message(&fl!("searching"), MessageKind::Loading);

        let result = self
            .fetcher
            .fetch(&query)
            .await
            .and_then(|response| extract_pokemon(&query, &response))
            .and_then(|pokemon| render_pokemon(&pokemon).map(|card| (card, pokemon)));

        if self.latest_submission.load(Ordering::SeqCst) != submission {
            tracing::debug!(query = %query, "dropping superseded lookup");
            return LookupOutcome::Superseded;
        }

        match result {
            Ok((card, pokemon)) => {
                self.messages.clear_message();
                self.display.show_pokemon(&card);
                LookupOutcome::Rendered(pokemon)
            }
            Err(error) => {
                tracing::warn!(query = %query, %error, "lookup failed");
                self.display.clear_display();
                self.messages
                    .show_message(&error.user_message(), MessageKind::Error);
                LookupOutcome::Failed(error)
            }
        }
    }
}
