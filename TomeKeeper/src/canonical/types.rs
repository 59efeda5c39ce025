//! Type definitions for the canonical ability dataset

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of numeric parameters carried by every component row (`A00`–`A07`)
pub const COMPONENT_VALUE_COUNT: usize = 8;

/// Ability category as stored in the game's ability table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityType {
    Standard,
    Morale,
    Tactic,
    Granted,
    Passive,
    Pet,
}

impl AbilityType {
    /// Decode the numeric `AbilityType` column
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Standard),
            1 => Some(Self::Morale),
            2 => Some(Self::Tactic),
            3 => Some(Self::Granted),
            4 => Some(Self::Passive),
            5 => Some(Self::Pet),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Morale => "morale",
            Self::Tactic => "tactic",
            Self::Granted => "granted",
            Self::Passive => "passive",
            Self::Pet => "pet",
        }
    }
}

impl fmt::Display for AbilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavioral switches packed into the ability table's `Flags` column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AbilityFlags(u32);

impl AbilityFlags {
    pub const REQUIRES_SHIELD: Self = Self(0x0001);
    pub const REQUIRES_TWO_HANDED: Self = Self(0x0002);
    pub const REQUIRES_DUAL_WIELD: Self = Self(0x0004);
    pub const BEHIND_TARGET: Self = Self(0x0008);
    pub const FRONT_OF_TARGET: Self = Self(0x0010);
    pub const CAST_WHILE_MOVING: Self = Self(0x0020);
    pub const GROUND_TARGETED: Self = Self(0x0040);
    pub const CHANNELED: Self = Self(0x0080);
    pub const GRANTS_TACTIC_SLOT: Self = Self(0x0100);
    pub const IGNORES_DEFENSE: Self = Self(0x0200);
    pub const UNDEFENDABLE: Self = Self(0x0400);
    pub const BUFF_LINE: Self = Self(0x0800);
    pub const PET_COMMAND: Self = Self(0x1000);
    /// Purpose unknown; set on a handful of career abilities with unusual `A07` values
    pub const FLAG13: Self = Self(0x2000);

    /// Flags addressable by name from the command line, in bit order
    pub const NAMED: &'static [(&'static str, Self)] = &[
        ("requires_shield", Self::REQUIRES_SHIELD),
        ("requires_two_handed", Self::REQUIRES_TWO_HANDED),
        ("requires_dual_wield", Self::REQUIRES_DUAL_WIELD),
        ("behind_target", Self::BEHIND_TARGET),
        ("front_of_target", Self::FRONT_OF_TARGET),
        ("cast_while_moving", Self::CAST_WHILE_MOVING),
        ("ground_targeted", Self::GROUND_TARGETED),
        ("channeled", Self::CHANNELED),
        ("grants_tactic_slot", Self::GRANTS_TACTIC_SLOT),
        ("ignores_defense", Self::IGNORES_DEFENSE),
        ("undefendable", Self::UNDEFENDABLE),
        ("buff_line", Self::BUFF_LINE),
        ("pet_command", Self::PET_COMMAND),
        ("flag13", Self::FLAG13),
    ];

    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Look up a flag by its command-line name (case-insensitive)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::NAMED
            .iter()
            .find(|(flag_name, _)| *flag_name == lower)
            .map(|(_, flag)| *flag)
    }

    /// Names of all known flags that are set
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .iter()
            .filter(move |(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
    }
}

/// Primary attribute a component's magnitude scales with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stat {
    Strength,
    BallisticSkill,
    Intelligence,
    Willpower,
}

impl Stat {
    /// Decode a non-zero `ScalingStat` column value
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Strength),
            2 => Some(Self::BallisticSkill),
            3 => Some(Self::Intelligence),
            4 => Some(Self::Willpower),
            _ => None,
        }
    }
}

/// Operation performed by a component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentOp {
    Damage,
    Heal,
    StatChange,
    ApChange,
    MoraleChange,
    Knockback,
    Snare,
    /// Fires another ability; `A00` holds its id
    TriggerAbility,
    MechanicChange,
    Unknown(u16),
}

impl ComponentOp {
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => Self::Damage,
            2 => Self::Heal,
            3 => Self::StatChange,
            4 => Self::ApChange,
            5 => Self::MoraleChange,
            6 => Self::Knockback,
            7 => Self::Snare,
            8 => Self::TriggerAbility,
            9 => Self::MechanicChange,
            other => Self::Unknown(other),
        }
    }
}

/// A single sub-effect of an ability
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Component {
    #[serde(rename = "ComponentID")]
    pub component_id: u32,
    pub operation: ComponentOp,
    /// Raw parameters `A00`..`A07`
    pub values: [i32; COMPONENT_VALUE_COUNT],
    pub duration_ms: u32,
    pub interval_ms: u32,
    pub radius: u32,
    pub scaling: Option<Stat>,
    /// Percent of `stat / 5` added to the magnitude
    pub coefficient: u32,
}

impl Component {
    /// Unscaled magnitude (`|A00|`)
    #[must_use]
    pub fn base_magnitude(&self) -> i64 {
        i64::from(self.values[0].unsigned_abs())
    }

    /// Id of the ability fired by a `TriggerAbility` component
    #[must_use]
    pub fn linked_ability(&self) -> Option<u32> {
        match self.operation {
            ComponentOp::TriggerAbility if self.values[0] > 0 => Some(self.values[0] as u32),
            _ => None,
        }
    }
}

/// An ability as extracted from the game data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CanonicalAbility {
    #[serde(rename = "AbilityID")]
    pub ability_id: u32,
    /// Owning career; 0 = shared by all careers
    #[serde(rename = "CareerID")]
    pub career_id: u16,
    pub name: String,
    /// Description rendered with canonical values
    pub description: String,
    /// Raw description text with `{TOKEN}` placeholders
    pub description_template: String,
    pub ability_type: AbilityType,
    pub flags: AbilityFlags,
    pub cooldown_ms: u32,
    pub min_rank: u8,
    pub cast_time_ms: u32,
    pub min_range: u32,
    pub max_range: u32,
    #[serde(rename = "APCost")]
    pub ap_cost: u32,
    /// Mastery specialization line (0 = core ability)
    pub spec_line: u8,
    pub mastery_points: u8,
    pub results: Vec<String>,
    pub components: Vec<Component>,
}

impl CanonicalAbility {
    /// Whether a curated ability of `career_id` may link to this record
    #[must_use]
    pub fn visible_to(&self, career_id: u16) -> bool {
        self.career_id == 0 || self.career_id == career_id
    }

    #[must_use]
    pub fn cooldown_secs(&self) -> u32 {
        self.cooldown_ms / 1000
    }

    #[must_use]
    pub fn cast_time_secs(&self) -> f64 {
        f64::from(self.cast_time_ms) / 1000.0
    }
}

/// Statistics about a canonical dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetStats {
    pub ability_count: usize,
    pub shared_count: usize,
    pub career_count: usize,
    pub component_count: usize,
    pub unnamed_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_from_name_and_names() {
        let flags = AbilityFlags::REQUIRES_SHIELD.union(AbilityFlags::FLAG13);
        assert_eq!(AbilityFlags::from_name("FLAG13"), Some(AbilityFlags::FLAG13));
        assert_eq!(AbilityFlags::from_name("nope"), None);
        assert_eq!(flags.names().collect::<Vec<_>>(), vec!["requires_shield", "flag13"]);
        assert!(flags.contains(AbilityFlags::FLAG13));
        assert!(!flags.contains(AbilityFlags::CHANNELED));
    }

    #[test]
    fn test_linked_ability_only_for_trigger() {
        let mut component = Component {
            component_id: 1,
            operation: ComponentOp::TriggerAbility,
            values: [9001, 0, 0, 0, 0, 0, 0, 0],
            duration_ms: 0,
            interval_ms: 0,
            radius: 0,
            scaling: None,
            coefficient: 0,
        };
        assert_eq!(component.linked_ability(), Some(9001));

        component.operation = ComponentOp::Damage;
        assert_eq!(component.linked_ability(), None);
        assert_eq!(component.base_magnitude(), 9001);
    }

    #[test]
    fn test_visible_to_shared_and_owner() {
        let ability = CanonicalAbility {
            ability_id: 1,
            career_id: 0,
            name: String::new(),
            description: String::new(),
            description_template: String::new(),
            ability_type: AbilityType::Standard,
            flags: AbilityFlags::empty(),
            cooldown_ms: 0,
            min_rank: 1,
            cast_time_ms: 0,
            min_range: 0,
            max_range: 0,
            ap_cost: 0,
            spec_line: 0,
            mastery_points: 0,
            results: Vec::new(),
            components: Vec::new(),
        };
        assert!(ability.visible_to(4));
        let owned = CanonicalAbility { career_id: 2, ..ability };
        assert!(owned.visible_to(2));
        assert!(!owned.visible_to(4));
    }
}
