//! PokeAPI wire types
//!
//! Mirrors of the JSON bodies returned by the catalog endpoints. Field
//! names are fixed by the upstream contract. Fields the upstream API may
//! omit or send as `null` are optional here and get resolved when the
//! body is turned into an [`EntityDetail`].

use serde::{Deserialize, Serialize};

use super::format::artwork_url_for;
use super::types::{AbilitySlot, EntityDetail, EntitySummary, StatEntry, TypeSlot};

// =============================================================================
// SHARED
// =============================================================================

/// A `{ name, url }` reference to another catalog resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

// =============================================================================
// LIST ENDPOINT
// =============================================================================

/// Body of `GET {base}/pokemon?limit=..&offset=..`
///
/// Only `results` is consumed; the paging fields are kept for logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse {
    pub results: Vec<EntitySummary>,
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
}

// =============================================================================
// DETAIL ENDPOINT
// =============================================================================

/// Body of `GET {base}/pokemon/{nameOrId}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailResponse {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// `null` upstream for some alternate forms
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub types: Vec<TypeSlotWire>,
    #[serde(default)]
    pub stats: Vec<StatWire>,
    #[serde(default)]
    pub abilities: Vec<AbilityWire>,
    #[serde(default)]
    pub sprites: Option<Sprites>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlotWire {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatWire {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilityWire {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl DetailResponse {
    /// Official artwork URL as reported by the API, if any
    pub fn official_artwork(&self) -> Option<&str> {
        self.sprites
            .as_ref()?
            .other
            .as_ref()?
            .official_artwork
            .as_ref()?
            .front_default
            .as_deref()
            .filter(|url| !url.is_empty())
    }
}

impl From<DetailResponse> for EntityDetail {
    fn from(wire: DetailResponse) -> Self {
        let artwork_url = wire
            .official_artwork()
            .map(str::to_string)
            .unwrap_or_else(|| artwork_url_for(wire.id));

        Self {
            id: wire.id,
            name: wire.name,
            height: wire.height,
            weight: wire.weight,
            base_experience: wire.base_experience,
            types: wire
                .types
                .into_iter()
                .map(|t| TypeSlot {
                    slot: t.slot,
                    type_name: t.kind.name,
                })
                .collect(),
            stats: wire
                .stats
                .into_iter()
                .map(|s| StatEntry {
                    stat_name: s.stat.name,
                    base_value: s.base_stat,
                    effort: s.effort,
                })
                .collect(),
            abilities: wire
                .abilities
                .into_iter()
                .map(|a| AbilitySlot {
                    ability_name: a.ability.name,
                    slot: a.slot,
                    is_hidden: a.is_hidden,
                })
                .collect(),
            artwork_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bulbasaur_json() -> serde_json::Value {
        json!({
            "id": 1,
            "name": "bulbasaur",
            "height": 7,
            "weight": 69,
            "base_experience": 64,
            "types": [
                { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } },
                { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } }
            ],
            "stats": [
                { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "" } },
                { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack", "url": "" } }
            ],
            "abilities": [
                { "ability": { "name": "overgrow", "url": "" }, "is_hidden": false, "slot": 1 },
                { "ability": { "name": "chlorophyll", "url": "" }, "is_hidden": true, "slot": 3 }
            ],
            "sprites": {
                "front_default": "front.png",
                "other": {
                    "official-artwork": { "front_default": "https://example.test/artwork/1.png" }
                }
            }
        })
    }

    #[test]
    fn test_list_response_keeps_server_order() {
        let body = json!({
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        });
        let list: ListResponse = serde_json::from_value(body).unwrap();
        assert_eq!(list.results.len(), 2);
        assert_eq!(list.results[0].name, "bulbasaur");
        assert_eq!(list.results[1].name, "ivysaur");
        assert_eq!(list.count, Some(1302));
        assert_eq!(list.previous, None);
    }

    #[test]
    fn test_list_response_only_requires_results() {
        let list: ListResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(list.results.is_empty());
        assert_eq!(list.count, None);
    }

    #[test]
    fn test_list_response_missing_results_is_error() {
        assert!(serde_json::from_str::<ListResponse>(r#"{"count": 3}"#).is_err());
    }

    #[test]
    fn test_detail_into_entity() {
        let wire: DetailResponse = serde_json::from_value(bulbasaur_json()).unwrap();
        let detail = EntityDetail::from(wire);

        assert_eq!(detail.id, 1);
        assert_eq!(detail.name, "bulbasaur");
        assert_eq!(detail.height, 7);
        assert_eq!(detail.weight, 69);
        assert_eq!(detail.base_experience, Some(64));
        assert_eq!(detail.types[0].type_name, "grass");
        assert_eq!(detail.types[1].slot, 2);
        assert_eq!(detail.stats[1].stat_name, "special-attack");
        assert_eq!(detail.stats[1].base_value, 65);
        assert_eq!(detail.stats[1].effort, 1);
        assert!(detail.abilities[1].is_hidden);
        assert_eq!(detail.abilities[1].slot, 3);
        assert_eq!(detail.artwork_url, "https://example.test/artwork/1.png");
    }

    #[test]
    fn test_detail_artwork_falls_back_to_template() {
        let mut body = bulbasaur_json();
        body["sprites"]["other"]["official-artwork"]["front_default"] = json!(null);
        let detail = EntityDetail::from(serde_json::from_value::<DetailResponse>(body).unwrap());
        assert_eq!(detail.artwork_url, artwork_url_for(1));
    }

    #[test]
    fn test_detail_tolerates_missing_optional_fields() {
        let body = json!({
            "id": 10001,
            "name": "deoxys-attack",
            "height": 17,
            "weight": 608,
            "base_experience": null,
            "types": [{ "slot": 1, "type": { "name": "psychic" } }],
            "stats": [{ "base_stat": 180, "stat": { "name": "attack" } }],
            "abilities": [{ "ability": { "name": "pressure" }, "slot": 1 }],
            "sprites": { "other": null }
        });
        let detail = EntityDetail::from(serde_json::from_value::<DetailResponse>(body).unwrap());
        assert_eq!(detail.base_experience, None);
        assert_eq!(detail.stats[0].effort, 0);
        assert!(!detail.abilities[0].is_hidden);
        assert_eq!(detail.artwork_url, artwork_url_for(10001));
    }

    #[test]
    fn test_detail_missing_required_field_is_error() {
        let mut body = bulbasaur_json();
        body.as_object_mut().unwrap().remove("height");
        assert!(serde_json::from_value::<DetailResponse>(body).is_err());
    }
}
