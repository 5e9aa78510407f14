// SPDX-License-Identifier: GPL-3.0-only

mod message;
mod pokemon_response;
mod starry_pokemon;

pub use message::MessageKind;
pub use pokemon_response::PokemonResponse;
pub use starry_pokemon::{StarryPokemon, StarryPokemonStats};
