//! Projection over the user's league list.
//!
//! The fantasy API nests collections as objects keyed by position
//! (`{"0": {...}, "count": 1}`) and entities as arrays of fragments
//! (`"user": [{"guid": ..}, {"games": ..}]`). Rather than indexing blindly,
//! each hop is resolved explicitly and a missing level becomes
//! [`GatewayError::LeagueNotFound`].

use serde::Deserialize;
use serde_json::Value;

use crate::error::{GatewayError, Result};

/// Identifying fields of one league
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeagueSummary {
    pub league_key: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Element `index` of a positional collection, given either as a JSON array
/// or as an object keyed by the decimal index.
fn nth(value: &Value, index: usize) -> Option<&Value> {
    match value {
        Value::Array(items) => items.get(index),
        Value::Object(map) => map.get(&index.to_string()),
        _ => None,
    }
}

/// The fragment of an entity array that carries `key`.
fn fragment<'a>(entity: &'a Value, key: &str) -> Option<&'a Value> {
    match entity {
        Value::Array(parts) => parts.iter().find_map(|part| part.get(key)),
        Value::Object(map) => map.get(key),
        _ => None,
    }
}

fn missing(what: &str) -> GatewayError {
    GatewayError::LeagueNotFound(format!("missing {}", what))
}

/// First league of the first game of the logged-in user.
///
/// Only the first league is ever used; users in several NHL leagues get the
/// one the API lists first.
pub fn first_league(response: &Value) -> Result<LeagueSummary> {
    let users = response
        .get("fantasy_content")
        .and_then(|c| c.get("users"))
        .ok_or_else(|| missing("fantasy_content.users"))?;
    let user = nth(users, 0).and_then(|u| u.get("user")).ok_or_else(|| missing("user"))?;
    let games = fragment(user, "games").ok_or_else(|| missing("games"))?;
    let game = nth(games, 0).and_then(|g| g.get("game")).ok_or_else(|| missing("game"))?;
    let leagues = fragment(game, "leagues").ok_or_else(|| missing("leagues"))?;
    let league = nth(leagues, 0)
        .and_then(|l| l.get("league"))
        .ok_or_else(|| missing("league"))?;

    let fields = nth(league, 0).unwrap_or(league);
    LeagueSummary::deserialize(fields)
        .map_err(|e| GatewayError::LeagueNotFound(format!("league fields: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leagues_response(leagues: Value) -> Value {
        json!({
            "fantasy_content": {
                "xml:lang": "en-US",
                "users": {
                    "0": {
                        "user": [
                            { "guid": "ABC123" },
                            {
                                "games": {
                                    "0": {
                                        "game": [
                                            { "game_key": "453", "code": "nhl", "season": "2024" },
                                            { "leagues": leagues }
                                        ]
                                    },
                                    "count": 1
                                }
                            }
                        ]
                    },
                    "count": 1
                }
            }
        })
    }

    #[test]
    fn test_first_league() {
        let response = leagues_response(json!({
            "0": { "league": [{ "league_key": "453.l.1111", "name": "Office Pool" }] },
            "1": { "league": [{ "league_key": "453.l.2222", "name": "Family" }] },
            "count": 2
        }));

        let league = first_league(&response).unwrap();
        assert_eq!(league.league_key, "453.l.1111");
        assert_eq!(league.name.as_deref(), Some("Office Pool"));
    }

    #[test]
    fn test_array_shaped_collections() {
        let response = json!({
            "fantasy_content": {
                "users": [{ "user": [{}, { "games": [{ "game": [{}, {
                    "leagues": [{ "league": [{ "league_key": "453.l.42" }] }]
                }] }] }] }]
            }
        });
        assert_eq!(first_league(&response).unwrap().league_key, "453.l.42");
    }

    #[test]
    fn test_no_leagues() {
        let response = leagues_response(json!({ "count": 0 }));
        let err = first_league(&response).unwrap_err();
        assert!(matches!(err, GatewayError::LeagueNotFound(ref m) if m.contains("league")));
    }

    #[test]
    fn test_user_without_games() {
        let response = json!({
            "fantasy_content": { "users": { "0": { "user": [{ "guid": "ABC" }] }, "count": 1 } }
        });
        assert!(matches!(first_league(&response), Err(GatewayError::LeagueNotFound(_))));
    }

    #[test]
    fn test_unexpected_shape() {
        assert!(first_league(&json!({ "error": "nope" })).is_err());
        assert!(first_league(&json!([])).is_err());
    }
}
