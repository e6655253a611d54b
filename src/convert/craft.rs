// src/convert/craft.rs

//! Craft-type remapper
//!
//! XWA numbers craft canonically. The legacy platforms (TIE, XvT, BoP) keep
//! a few types in slots that XWA later reused for other craft, so a handful
//! of codes move when crossing the boundary:
//!
//! | XWA code | Craft                     | Legacy code |
//! |----------|---------------------------|-------------|
//! | 77       | Ground platform/turret    | 31          |
//! | 89       | Shipyard                  | 10          |
//! | 90       | Repair Yard               | 11          |
//! | 91       | Mobile Siege Cannon       | 39          |
//! | 39       | Falcon-class transport    | 38          |
//! | 71       | Satellite 3               | 69          |
//! | 84, 87   | Hyperspace buoys          | 82          |
//! | 88       | Cargo canister            | 59          |
//! | 227      | Cruiser variant           | 48          |
//! | 228, 229 | Destroyer II variants     | 51, 52      |
//!
//! The first four only move when the caller asks for legacy slots.

use crate::platform::Platform;
use thiserror::Error;

/// Why a craft code could not be translated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CraftTypeError {
    #[error("craft type {code} is a reserved legacy slot with no meaning on {platform}")]
    Reserved { code: u8, platform: Platform },

    #[error("craft type {code} becomes {mapped}, beyond the {platform} maximum of {max}")]
    OutOfRange {
        code: u8,
        mapped: u8,
        platform: Platform,
        max: u8,
    },
}

/// Canonical codes XWA reuses from legacy slots
pub const RESERVED_CANONICAL: [u8; 3] = [10, 11, 31];

/// Relocated craft: (canonical, legacy)
const RELOCATED: [(u8, u8); 4] = [(77, 31), (89, 10), (90, 11), (91, 39)];

/// Craft with a close legacy stand-in: (canonical, legacy)
const SUBSTITUTED: [(u8, u8); 8] = [
    (39, 38),
    (71, 69),
    (84, 82),
    (87, 82),
    (88, 59),
    (227, 48),
    (228, 51),
    (229, 52),
];

/// Translate a craft-type code between platforms
///
/// With `to_legacy` unset the relocated codes (77, 89, 90, 91) keep their
/// canonical numbers, and the ceiling check decides whether they survive.
pub fn translate(
    code: u8,
    source: Platform,
    dest: Platform,
    to_legacy: bool,
) -> Result<u8, CraftTypeError> {
    let mapped = match (
        source.uses_legacy_craft_numbering(),
        dest.uses_legacy_craft_numbering(),
    ) {
        (true, true) | (false, false) => code,
        (false, true) => canonical_to_legacy(code, source, to_legacy)?,
        (true, false) => legacy_to_canonical(code),
    };

    let max = dest.limits().max_craft_type;
    if mapped > max {
        return Err(CraftTypeError::OutOfRange {
            code,
            mapped,
            platform: dest,
            max,
        });
    }
    Ok(mapped)
}

fn canonical_to_legacy(code: u8, source: Platform, to_legacy: bool) -> Result<u8, CraftTypeError> {
    if RESERVED_CANONICAL.contains(&code) {
        return Err(CraftTypeError::Reserved {
            code,
            platform: source,
        });
    }
    if to_legacy {
        if let Some(&(_, legacy)) = RELOCATED.iter().find(|(canonical, _)| *canonical == code) {
            return Ok(legacy);
        }
    }
    Ok(SUBSTITUTED
        .iter()
        .find(|(canonical, _)| *canonical == code)
        .map(|&(_, legacy)| legacy)
        .unwrap_or(code))
}

fn legacy_to_canonical(code: u8) -> u8 {
    RELOCATED
        .iter()
        .find(|(_, legacy)| *legacy == code)
        .map(|&(canonical, _)| canonical)
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_table_holds() {
        let expected = [
            (77, 31),
            (89, 10),
            (90, 11),
            (91, 39),
            (39, 38),
            (71, 69),
            (84, 82),
            (87, 82),
            (88, 59),
            (227, 48),
            (228, 51),
            (229, 52),
        ];
        for (canonical, legacy) in expected {
            assert_eq!(
                translate(canonical, Platform::Xwa, Platform::Tie, true),
                Ok(legacy),
                "code {}",
                canonical
            );
        }
    }

    #[test]
    fn test_reserved_codes_always_fail() {
        for code in RESERVED_CANONICAL {
            for dest in [Platform::Tie, Platform::Xvt, Platform::Bop] {
                for to_legacy in [true, false] {
                    assert!(matches!(
                        translate(code, Platform::Xwa, dest, to_legacy),
                        Err(CraftTypeError::Reserved { .. })
                    ));
                }
            }
        }
    }

    #[test]
    fn test_every_success_is_in_legacy_range() {
        for dest in [Platform::Tie, Platform::Xvt] {
            let max = dest.limits().max_craft_type;
            for code in 0..=u8::MAX {
                if let Ok(mapped) = translate(code, Platform::Xwa, dest, true) {
                    assert!(mapped <= max, "{} -> {} on {}", code, mapped, dest);
                }
            }
        }
    }

    #[test]
    fn test_every_unreserved_low_code_translates() {
        for code in 0..=91u8 {
            if RESERVED_CANONICAL.contains(&code) {
                continue;
            }
            assert!(
                translate(code, Platform::Xwa, Platform::Xvt, true).is_ok(),
                "code {}",
                code
            );
        }
    }

    #[test]
    fn test_high_codes_without_stand_in_fail() {
        assert!(matches!(
            translate(150, Platform::Xwa, Platform::Tie, true),
            Err(CraftTypeError::OutOfRange {
                mapped: 150,
                max: 92,
                ..
            })
        ));
    }

    #[test]
    fn test_relocation_needs_to_legacy() {
        assert_eq!(translate(89, Platform::Xwa, Platform::Tie, false), Ok(89));
        assert_eq!(translate(39, Platform::Xwa, Platform::Tie, false), Ok(38));
    }

    #[test]
    fn test_legacy_to_legacy_is_identity_with_ceiling() {
        assert_eq!(translate(10, Platform::Xvt, Platform::Tie, true), Ok(10));
        assert_eq!(translate(91, Platform::Xvt, Platform::Tie, true), Ok(91));
        assert_eq!(translate(92, Platform::Tie, Platform::Xvt, true), Err(CraftTypeError::OutOfRange {
            code: 92,
            mapped: 92,
            platform: Platform::Xvt,
            max: 91,
        }));
    }

    #[test]
    fn test_legacy_to_canonical_restores_relocated() {
        assert_eq!(translate(10, Platform::Tie, Platform::Xwa, true), Ok(89));
        assert_eq!(translate(31, Platform::Xvt, Platform::Xwa, true), Ok(77));
        assert_eq!(translate(5, Platform::Xvt, Platform::Xwa, true), Ok(5));
    }
}
