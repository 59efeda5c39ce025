//! Curated career file types
//!
//! Career files are hand-authored JSON (camelCase). Only the fields the
//! reconciler reads or corrects are typed; every other key is carried through
//! `extra` so a reconcile pass never drops data it does not understand.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::canonical::AbilityType;

/// Category tag of curated entries that are never reconciled
pub const TOME_TACTIC_CATEGORY: &str = "TomeTactic";

/// Mastery path requirement of a curated ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryRequirement {
    pub path: String,
    pub points: u8,
}

/// One entry of a career's hand-authored ability list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuratedAbility {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<u32>,
    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u32>,
    #[serde(default, rename = "minrank", skip_serializing_if = "Option::is_none")]
    pub min_rank: Option<u8>,
    /// Seconds, fractional
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cast_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_range: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ap_cost: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mastery: Option<MasteryRequirement>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability_type: Option<AbilityType>,
    /// One magnitude per canonical component
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CuratedAbility {
    /// Entries tagged `TomeTactic` are passed through untouched
    #[must_use]
    pub fn is_tome_tactic(&self) -> bool {
        self.category.as_deref() == Some(TOME_TACTIC_CATEGORY)
    }

    /// Cast time in whole milliseconds
    #[must_use]
    pub fn cast_time_ms(&self) -> Option<u32> {
        self.cast_time.map(|secs| (secs * 1000.0).round() as u32)
    }
}

/// A career's curated file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Career {
    /// Mastery path names, ordered by specialization line
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mastery_paths: Vec<String>,
    pub data: Vec<CuratedAbility>,
    /// Display metadata (`name` and anything else)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Career {
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.extra.get("name").and_then(Value::as_str)
    }
}

/// Reference primary stats of a career at the level the catalog is tuned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseStats {
    pub strength: u32,
    pub ballistic_skill: u32,
    pub intelligence: u32,
    pub willpower: u32,
}

impl BaseStats {
    #[must_use]
    pub fn get(&self, stat: crate::canonical::Stat) -> u32 {
        use crate::canonical::Stat;
        match stat {
            Stat::Strength => self.strength,
            Stat::BallisticSkill => self.ballistic_skill,
            Stat::Intelligence => self.intelligence,
            Stat::Willpower => self.willpower,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CAREER_JSON: &str = r#"{
  "name": "Ironbreaker",
  "icon": "ib.png",
  "masteryPaths": ["Vengeance", "Grudge", "Stone"],
  "data": [
    {
      "name": "Cave-In",
      "description": "Snares enemies.",
      "gameId": 1374,
      "minrank": 12,
      "castTime": 1.5,
      "apCost": 25,
      "mastery": { "path": "Stone", "points": 5 },
      "icon": "cave-in.png",
      "values": [40]
    },
    {
      "name": "Oath Friend",
      "description": "",
      "category": "TomeTactic"
    }
  ]
}"#;

    #[test]
    fn test_round_trip_preserves_unknown_keys() {
        let career: Career = serde_json::from_str(CAREER_JSON).unwrap();
        assert_eq!(career.display_name(), Some("Ironbreaker"));
        assert_eq!(career.mastery_paths.len(), 3);

        let cave_in = &career.data[0];
        assert_eq!(cave_in.game_id, Some(1374));
        assert_eq!(cave_in.min_rank, Some(12));
        assert_eq!(cave_in.cast_time_ms(), Some(1500));
        assert_eq!(cave_in.extra.get("icon"), Some(&Value::from("cave-in.png")));
        assert!(career.data[1].is_tome_tactic());

        let written = serde_json::to_value(&career).unwrap();
        assert_eq!(written["data"][0]["icon"], "cave-in.png");
        assert_eq!(written["data"][0]["minrank"], 12);
        assert_eq!(written["icon"], "ib.png");
        assert!(written["data"][1].get("gameId").is_none());
    }

    #[test]
    fn test_empty_mastery_paths_not_written() {
        let career: Career = serde_json::from_str(r#"{ "name": "Slayer", "data": [] }"#).unwrap();
        let written = serde_json::to_value(&career).unwrap();
        assert!(written.get("masteryPaths").is_none());
    }

    #[test]
    fn test_base_stats_lookup() {
        let stats = BaseStats {
            strength: 147,
            ballistic_skill: 98,
            intelligence: 74,
            willpower: 172,
        };
        assert_eq!(stats.get(crate::canonical::Stat::Willpower), 172);
        assert_eq!(stats.get(crate::canonical::Stat::BallisticSkill), 98);
    }
}
