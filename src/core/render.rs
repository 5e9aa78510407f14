// SPDX-License-Identifier: GPL-3.0-only

use askama::Template;

use crate::{
    entities::{PokemonResponse, StarryPokemon, StarryPokemonStats},
    fl,
    utils::StarryError,
};

/// Pulls the fields the card needs out of an upstream record.
///
/// Every one of hp, attack, defense and speed must be present, as must the official
/// artwork; a hole fails with [`StarryError::MissingField`] instead of rendering a
/// partial card. Types may be empty.
pub fn extract_pokemon(
    identifier: &str,
    response: &PokemonResponse,
) -> Result<StarryPokemon, StarryError> {
    let artwork_url = response
        .artwork_url()
        .ok_or(StarryError::MissingField("official-artwork"))?;

    Ok(StarryPokemon {
        identifier: identifier.to_string(),
        name: response.name.clone(),
        id: response.id,
        artwork_url: artwork_url.to_string(),
        types: response
            .types
            .iter()
            .map(|slot| slot.type_.name.clone())
            .collect(),
        stats: StarryPokemonStats {
            hp: required_stat(response, "hp")?,
            attack: required_stat(response, "attack")?,
            defense: required_stat(response, "defense")?,
            speed: required_stat(response, "speed")?,
        },
    })
}

fn required_stat(response: &PokemonResponse, name: &'static str) -> Result<i64, StarryError> {
    response
        .base_stat(name)
        .ok_or(StarryError::MissingField(name))
}

/// One line of the stat listing
struct StatLine {
    label: String,
    value: i64,
}

/// The card that replaces the display region, see `templates/pokemon_card.html`
#[derive(Template)]
#[template(path = "pokemon_card.html")]
struct PokemonCard<'a> {
    name: &'a str,
    id: i64,
    artwork_url: &'a str,
    alt: String,
    types: &'a [String],
    stats: [StatLine; 4],
}

/// Renders the card that replaces the display region
pub fn render_pokemon(pokemon: &StarryPokemon) -> Result<String, StarryError> {
    let stat = |label: String, value: i64| StatLine { label, value };

    let card = PokemonCard {
        name: &pokemon.name,
        id: pokemon.id,
        artwork_url: &pokemon.artwork_url,
        alt: fl!("artwork-alt", name = pokemon.name.as_str()),
        types: &pokemon.types,
        // Fixed order, whatever order upstream sent them in
        stats: [
            stat(fl!("stat-hp"), pokemon.stats.hp),
            stat(fl!("stat-attack"), pokemon.stats.attack),
            stat(fl!("stat-defense"), pokemon.stats.defense),
            stat(fl!("stat-speed"), pokemon.stats.speed),
        ],
    };

    Ok(card.render()?)
}
