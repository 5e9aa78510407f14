// SPDX-License-Identifier: GPL-3.0-only

use std::time::Duration;

use anywho::{Error, anywho};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};

use crate::{entities::PokemonResponse, utils::StarryError};

/// Anything able to turn a normalized name or id into a PokéApi record
#[async_trait]
pub trait PokemonFetcher: Send + Sync {
    /// Performs exactly one attempt, no retries
    async fn fetch(&self, identifier: &str) -> Result<PokemonResponse, StarryError>;
}

/// PokéApi client, one GET to `<base_url>/<identifier>` per lookup
#[derive(Debug, Clone)]
pub struct StarryApi {
    client: reqwest::Client,
    base_url: Url,
}

impl StarryApi {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(anywho!("Invalid PokéApi base url: {}", base_url));
        }

        let mut builder = reqwest::Client::builder().pool_max_idle_per_host(10);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
        })
    }

    /// Url for a single Pokémon, the identifier is appended as one encoded path segment.
    ///
    /// `.` and `..` are dot segments that url normalization would fold into the base
    /// path, so they have no Pokémon url and yield `None`.
    pub fn endpoint(&self, identifier: &str) -> Option<Url> {
        if matches!(identifier, "." | "..") {
            return None;
        }

        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(identifier);
        }
        Some(url)
    }
}

#[async_trait]
impl PokemonFetcher for StarryApi {
    async fn fetch(&self, identifier: &str) -> Result<PokemonResponse, StarryError> {
        let Some(url) = self.endpoint(identifier) else {
            tracing::info!(identifier, "identifier is a dot segment, not requesting it");
            return Err(StarryError::NotFound);
        };
        tracing::debug!(%url, "requesting pokémon");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::info!(identifier, "pokémon not found upstream");
            return Err(StarryError::NotFound);
        }
        if !status.is_success() {
            tracing::warn!(identifier, status = status.as_u16(), "unexpected upstream status");
            return Err(StarryError::Status(status.as_u16()));
        }

        let pokemon: PokemonResponse = response.json().await?;
        tracing::debug!(?pokemon, "decoded pokémon");

        Ok(pokemon)
    }
}
