use std::collections::BTreeMap;

use serde_json::Value;

use crate::util::de::or_default;

/// A flat record the HTML renderer can lay out as `field -> value` rows.
pub trait Record {
    /// Rows in display order.
    fn rows(&self) -> Vec<(String, String)>;
}

/// Account identity of the signed-in player.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct IdentityRecord {
    #[serde(deserialize_with = "or_default")]
    pub puuid: String,
    #[serde(alias = "gameName", deserialize_with = "or_default")]
    pub game_name: String,
    #[serde(alias = "tagLine", deserialize_with = "or_default")]
    pub tag_line: String,
}

impl Record for IdentityRecord {
    fn rows(&self) -> Vec<(String, String)> {
        vec![
            ("puuid".to_string(), self.puuid.clone()),
            ("gameName".to_string(), self.game_name.clone()),
            ("tagLine".to_string(), self.tag_line.clone()),
        ]
    }
}

/// Free champion rotation of the week.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct RotationRecord {
    #[serde(alias = "freeChampionIds", deserialize_with = "or_default")]
    pub free_champion_ids: Vec<u32>,
    #[serde(
        alias = "freeChampionIdsForNewPlayers",
        deserialize_with = "or_default"
    )]
    pub free_champion_ids_for_new_players: Vec<u32>,
    #[serde(alias = "maxNewPlayerLevel", deserialize_with = "or_default")]
    pub max_new_player_level: u32,
}

impl Record for RotationRecord {
    fn rows(&self) -> Vec<(String, String)> {
        vec![
            (
                "freeChampionIds".to_string(),
                join_ids(&self.free_champion_ids),
            ),
            (
                "freeChampionIdsForNewPlayers".to_string(),
                join_ids(&self.free_champion_ids_for_new_players),
            ),
            (
                "maxNewPlayerLevel".to_string(),
                self.max_new_player_level.to_string(),
            ),
        ]
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Untyped JSON objects render with their keys in sorted order.
impl Record for BTreeMap<String, Value> {
    fn rows(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key.clone(), value)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_accepts_wire_and_snake_case_names() {
        let wire: IdentityRecord =
            serde_json::from_str(r#"{"puuid":"123","gameName":"user","tagLine":"tag"}"#).unwrap();
        let snake: IdentityRecord =
            serde_json::from_str(r#"{"puuid":"123","game_name":"user","tag_line":"tag"}"#)
                .unwrap();
        assert_eq!(wire, snake);
        assert_eq!(wire.game_name, "user");
    }

    #[test]
    fn identity_with_only_puuid() {
        let record: IdentityRecord = serde_json::from_str(r#"{"puuid":"abc"}"#).unwrap();
        assert_eq!(record.puuid, "abc");
        assert_eq!(record.game_name, "");
        assert_eq!(record.rows()[0], ("puuid".to_string(), "abc".to_string()));
    }

    #[test]
    fn identity_null_field_keeps_the_rest() {
        let record: IdentityRecord =
            serde_json::from_str(r#"{"puuid":"abc","gameName":null,"tagLine":42}"#).unwrap();
        assert_eq!(record.puuid, "abc");
        assert_eq!(record.game_name, "");
        assert_eq!(record.tag_line, "");
    }

    #[test]
    fn rotation_wrong_typed_field_keeps_the_rest() {
        let record: RotationRecord = serde_json::from_str(
            r#"{"freeChampionIds":"none","freeChampionIdsForNewPlayers":[4],"maxNewPlayerLevel":null}"#,
        )
        .unwrap();
        assert!(record.free_champion_ids.is_empty());
        assert_eq!(record.free_champion_ids_for_new_players, vec![4]);
        assert_eq!(record.max_new_player_level, 0);
    }

    #[test]
    fn rotation_rows_join_champion_ids() {
        let record: RotationRecord = serde_json::from_str(
            r#"{"freeChampionIds":[1,2,3],"freeChampionIdsForNewPlayers":[4],"maxNewPlayerLevel":10}"#,
        )
        .unwrap();
        assert_eq!(
            record.rows(),
            vec![
                ("freeChampionIds".to_string(), "1, 2, 3".to_string()),
                ("freeChampionIdsForNewPlayers".to_string(), "4".to_string()),
                ("maxNewPlayerLevel".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn untyped_records_are_sorted_by_key() {
        let record: BTreeMap<String, Value> =
            serde_json::from_str(r#"{"key2":"v2","key1":"v1","n":3,"missing":null}"#).unwrap();
        assert_eq!(
            record.rows(),
            vec![
                ("key1".to_string(), "v1".to_string()),
                ("key2".to_string(), "v2".to_string()),
                ("missing".to_string(), String::new()),
                ("n".to_string(), "3".to_string()),
            ]
        );
    }
}
