// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

/// The Pokémon currently on display, built fresh from every successful lookup
#[derive(Clone, PartialEq, Eq)]
pub struct StarryPokemon {
    /// Normalized name or id the user searched for
    pub identifier: String,
    pub name: String,
    pub id: i64,
    pub artwork_url: String,
    pub types: Vec<String>,
    pub stats: StarryPokemonStats,
}

impl Debug for StarryPokemon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StarryPokemon")
            .field("identifier", &self.identifier)
            .field("id", &self.id)
            .finish()
    }
}

/// Base stats shown on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarryPokemonStats {
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
}
