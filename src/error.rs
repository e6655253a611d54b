// src/error.rs

//! Error types for mission conversion
//!
//! Every failure carries enough context to be shown to the user verbatim:
//! which entity owns the value, which field it sits in, and the value's
//! display name.

use crate::platform::Platform;
use std::fmt;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// Errors that can occur while building or converting mission graphs
#[derive(Debug, Error)]
pub enum Error {
    #[error("{platform} supports at most {limit} {what}, mission has {count}")]
    CapacityExceeded {
        what: Capacity,
        limit: usize,
        count: usize,
        platform: Platform,
    },

    #[error("{entity}: {field} \"{value_name}\" ({value}) is not supported by {platform}")]
    IncompatibleValue {
        entity: Entity,
        field: Field,
        value: u16,
        value_name: String,
        platform: Platform,
    },

    #[error("Invalid target combination: type {target_type} cannot take value {value}")]
    InvalidTargetCombination { target_type: u8, value: u8 },

    #[error("{record} record for {platform} must be {expected} bytes, got {actual}")]
    RawRecordLength {
        record: &'static str,
        platform: Platform,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to read name table: {0}")]
    NameTableRead(#[from] std::io::Error),

    #[error("Failed to parse name table: {0}")]
    NameTableParse(#[from] toml::de::Error),
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The (limit, count) pair of a capacity failure
    pub fn capacity(&self) -> Option<(usize, usize)> {
        match self {
            Self::CapacityExceeded { limit, count, .. } => Some((*limit, *count)),
            _ => None,
        }
    }
}

/// Bounded collections checked before and during conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Capacity {
    #[strum(serialize = "flight groups")]
    FlightGroups,
    #[strum(serialize = "messages")]
    Messages,
    #[strum(serialize = "briefing event words")]
    BriefingEvents,
}

/// Field whose value failed a range check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Field {
    #[strum(serialize = "craft type")]
    CraftType,
    #[strum(serialize = "formation")]
    Formation,
    #[strum(serialize = "abort condition")]
    AbortCondition,
    #[strum(serialize = "order")]
    OrderCommand,
    #[strum(serialize = "order target type")]
    OrderTargetType,
    #[strum(serialize = "trigger condition")]
    TriggerCondition,
    #[strum(serialize = "trigger variable type")]
    TriggerVariableType,
    #[strum(serialize = "trigger amount")]
    TriggerAmount,
    #[strum(serialize = "message delay")]
    MessageDelay,
}

/// The mission entity that owns a rejected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    FlightGroup(usize),
    Message(usize),
    GlobalGoal { team: usize, category: GoalCategory },
    Briefing(usize),
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FlightGroup(index) => write!(f, "FlightGroup {}", index),
            Self::Message(index) => write!(f, "Message {}", index),
            Self::GlobalGoal { team, category } => {
                write!(f, "Team {} {} global goal", team + 1, category)
            }
            Self::Briefing(index) => write!(f, "Briefing {}", index),
        }
    }
}

/// Mission-wide goal category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GoalCategory {
    Primary,
    Prevent,
    Secondary,
    Bonus,
}
