// src/platform.rs

//! Mission file platforms and their capability constants
//!
//! Four dialects share one family of record layouts but differ in how many
//! records they hold and which value ranges are legal:
//!
//! | Platform | Flight groups | Messages | Ticks/sec | Craft numbering |
//! |----------|---------------|----------|-----------|-----------------|
//! | TIE      | 48            | 16       | 12        | legacy          |
//! | XvT      | 46            | 64       | 20        | legacy          |
//! | BoP      | 46            | 64       | 20        | legacy          |
//! | XWA      | 192           | 64       | 21        | canonical       |
//!
//! The converter treats these as read-only facts.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// A mission file dialect, ordered from simplest to richest
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Platform {
    #[strum(to_string = "TIE")]
    Tie,
    #[strum(to_string = "XvT")]
    Xvt,
    /// Balance of Power, the XvT expansion format
    #[strum(to_string = "BoP")]
    Bop,
    #[strum(to_string = "XWA")]
    Xwa,
}

impl Platform {
    /// Capability constants for this platform
    pub const fn limits(self) -> &'static PlatformLimits {
        match self {
            Self::Tie => &TIE_LIMITS,
            Self::Xvt | Self::Bop => &XVT_LIMITS,
            Self::Xwa => &XWA_LIMITS,
        }
    }

    /// Whether craft-type codes use the legacy (pre-XWA) numbering
    pub const fn uses_legacy_craft_numbering(self) -> bool {
        !matches!(self, Self::Xwa)
    }

    /// Whether this is one of the XvT-family dialects
    pub const fn is_xvt_family(self) -> bool {
        matches!(self, Self::Xvt | Self::Bop)
    }

    /// Suffix substituted for `.TIE` when a converted mission is renamed
    pub const fn file_suffix(self) -> &'static str {
        match self {
            Self::Tie => "_TIE.tie",
            Self::Xvt => "_XvT.tie",
            Self::Bop => "_BoP.tie",
            Self::Xwa => "_XWA.tie",
        }
    }
}

/// Fixed sizes and legal value ceilings of a platform
///
/// Every `max_*` value is an inclusive index ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformLimits {
    pub flight_groups: usize,
    pub messages: usize,
    pub max_condition: u8,
    pub max_variable_type: u8,
    pub max_amount: u8,
    pub max_craft_type: u8,
    pub max_formation: u8,
    pub max_abort: u8,
    pub max_order: u8,
    pub ticks_per_second: u16,
    pub orders_per_flight_group: usize,
    pub waypoints_per_flight_group: usize,
    pub goals_per_flight_group: usize,
    pub arrival_triggers: usize,
    pub departure_triggers: usize,
    pub message_triggers: usize,
    pub teams: usize,
    pub briefings: usize,
    pub briefing_tags: usize,
    pub briefing_strings: usize,
    /// Size of the briefing event window in 16-bit words
    pub briefing_event_words: usize,
    pub flight_group_string_length: usize,
    pub order_designation_length: usize,
    pub message_length: usize,
    pub message_note_length: usize,
    pub team_name_length: usize,
}

pub const TIE_LIMITS: PlatformLimits = PlatformLimits {
    flight_groups: 48,
    messages: 16,
    max_condition: 24,
    max_variable_type: 9,
    max_amount: 15,
    max_craft_type: 92,
    max_formation: 12,
    max_abort: 4,
    max_order: 38,
    ticks_per_second: 12,
    orders_per_flight_group: 3,
    waypoints_per_flight_group: 15,
    goals_per_flight_group: 4,
    arrival_triggers: 2,
    departure_triggers: 1,
    message_triggers: 2,
    teams: 6,
    briefings: 1,
    briefing_tags: 32,
    briefing_strings: 32,
    briefing_event_words: 0x190,
    flight_group_string_length: 12,
    order_designation_length: 0,
    message_length: 63,
    message_note_length: 12,
    team_name_length: 12,
};

pub const XVT_LIMITS: PlatformLimits = PlatformLimits {
    flight_groups: 46,
    messages: 64,
    max_condition: 46,
    max_variable_type: 25,
    max_amount: 19,
    max_craft_type: 91,
    max_formation: 32,
    max_abort: 5,
    max_order: 39,
    ticks_per_second: 20,
    orders_per_flight_group: 4,
    waypoints_per_flight_group: 22,
    goals_per_flight_group: 8,
    arrival_triggers: 4,
    departure_triggers: 2,
    message_triggers: 4,
    teams: 10,
    briefings: 8,
    briefing_tags: 32,
    briefing_strings: 32,
    briefing_event_words: 0x320,
    flight_group_string_length: 20,
    order_designation_length: 16,
    message_length: 63,
    message_note_length: 15,
    team_name_length: 20,
};

pub const XWA_LIMITS: PlatformLimits = PlatformLimits {
    flight_groups: 192,
    messages: 64,
    max_condition: 71,
    max_variable_type: 28,
    max_amount: 21,
    max_craft_type: 232,
    max_formation: 34,
    max_abort: 5,
    max_order: 44,
    ticks_per_second: 21,
    // 4 regions x 4 orders, region-major
    orders_per_flight_group: 16,
    waypoints_per_flight_group: 22,
    goals_per_flight_group: 8,
    arrival_triggers: 4,
    departure_triggers: 2,
    message_triggers: 4,
    teams: 10,
    briefings: 2,
    briefing_tags: 128,
    briefing_strings: 128,
    briefing_event_words: 0x4B0,
    flight_group_string_length: 20,
    order_designation_length: 16,
    message_length: 63,
    message_note_length: 63,
    team_name_length: 20,
};
