// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Subset of the PokéApi `pokemon` resource we care about.
///
/// Everything below `name` and `id` is optional on the wire so that a record with
/// holes still decodes; the renderer decides which holes are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    pub id: i64,
    #[serde(default)]
    pub sprites: Option<PokemonSprites>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
}

impl PokemonResponse {
    /// Official artwork url, if the upstream record carries one
    pub fn artwork_url(&self) -> Option<&str> {
        self.sprites
            .as_ref()?
            .other
            .as_ref()?
            .official_artwork
            .as_ref()?
            .front_default
            .as_deref()
    }

    /// Base value of the first stat entry named `name`
    pub fn base_stat(&self, name: &str) -> Option<i64> {
        self.stats
            .iter()
            .find(|slot| slot.stat.name == name)
            .map(|slot| slot.base_stat)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSprites {
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<OfficialArtwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialArtwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSlot {
    pub stat: NamedResource,
    pub base_stat: i64,
}

/// A `{ "name": ... }` reference, the url PokéApi sends alongside is ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}
