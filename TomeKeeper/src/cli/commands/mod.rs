use std::str::FromStr;

use crate::canonical::AbilityFlags;

pub mod definitions;
pub mod execute;
pub mod inspect;
pub mod reconcile;

pub use definitions::Commands;

/// Ability flag given by name (`flag13`) or raw mask (`0x2000`, `8192`)
#[derive(Debug, Clone, Copy)]
pub struct FlagArg(pub AbilityFlags);

impl FromStr for FlagArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(flag) = AbilityFlags::from_name(s) {
            return Ok(FlagArg(flag));
        }

        let bits = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u32::from_str_radix(hex, 16).ok(),
            None => s.parse().ok(),
        };

        match bits {
            Some(bits) if bits != 0 => Ok(FlagArg(AbilityFlags::from_bits(bits))),
            _ => {
                let names: Vec<&str> = AbilityFlags::NAMED.iter().map(|(name, _)| *name).collect();
                Err(format!(
                    "Invalid flag '{s}'. Valid values: {} or a non-zero bit mask",
                    names.join(", ")
                ))
            }
        }
    }
}
