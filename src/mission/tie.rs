// src/mission/tie.rs

//! TIE mission model, the simplest platform
//!
//! TIE has no teams. Affiliation is a per-craft IFF slot, and hostility is a
//! single flag per IFF. Debriefing is a set of officer questions rather than
//! free-text outcome strings.

use crate::mission::record::{
    Arrival, Briefing, Departure, GoalPair, Order, Orientation, Trigger, Waypoint,
};
use crate::platform::Platform;
use serde::{Deserialize, Serialize};

/// Number of IFF slots
pub const IFF_SLOTS: usize = 6;
/// IFF slots 0 and 1 have fixed names
pub const FIXED_IFF_NAMES: [&str; 2] = ["Rebel", "Imperial"];
/// Questions per officer
pub const QUESTIONS_PER_OFFICER: usize = 10;
/// End-of-mission message lines
pub const END_OF_MISSION_MESSAGES: usize = 6;

/// A TIE mission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// File path the mission was loaded from or will be saved to
    pub path: String,
    pub flight_groups: Vec<FlightGroup>,
    pub messages: Vec<Message>,
    pub global_goals: GlobalGoals,
    /// Names of IFF slots 2..=5; slots 0 and 1 are fixed
    pub iff_names: Vec<String>,
    pub iff_hostile: Vec<bool>,
    pub end_of_mission_messages: Vec<String>,
    pub briefing: Briefing,
    pub questions: BriefingQuestions,
}

impl Mission {
    pub fn new() -> Self {
        Self {
            path: String::new(),
            flight_groups: Vec::new(),
            messages: Vec::new(),
            global_goals: GlobalGoals::default(),
            iff_names: vec![String::new(); IFF_SLOTS],
            iff_hostile: vec![false; IFF_SLOTS],
            end_of_mission_messages: vec![String::new(); END_OF_MISSION_MESSAGES],
            briefing: Briefing::new(Platform::Tie),
            questions: BriefingQuestions::new(),
        }
    }

    /// Display name of an IFF slot
    pub fn iff_name(&self, slot: usize) -> &str {
        match FIXED_IFF_NAMES.get(slot) {
            Some(name) => name,
            None => self.iff_names.get(slot).map(String::as_str).unwrap_or(""),
        }
    }
}

impl Default for Mission {
    fn default() -> Self {
        Self::new()
    }
}

/// A TIE flight group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightGroup {
    pub name: String,
    pub cargo: String,
    pub special_cargo: String,
    pub craft_type: u8,
    pub number_of_craft: u8,
    pub number_of_waves: u8,
    /// Craft carrying the special cargo (0 = none)
    pub special_craft: u8,
    pub iff: u8,
    pub ai_rating: u8,
    pub status: u8,
    pub warheads: u8,
    pub beam: u8,
    pub formation: u8,
    /// Non-zero when the player flies this group
    pub player_craft: u8,
    pub orientation: Orientation,
    pub arrival: Arrival,
    pub departure: Departure,
    pub orders: Vec<Order>,
    pub waypoints: Vec<Waypoint>,
    pub goals: FlightGroupGoals,
}

impl FlightGroup {
    pub fn new() -> Self {
        let limits = Platform::Tie.limits();
        Self {
            name: String::new(),
            cargo: String::new(),
            special_cargo: String::new(),
            craft_type: 0,
            number_of_craft: 1,
            number_of_waves: 0,
            special_craft: 0,
            iff: 0,
            ai_rating: 0,
            status: 0,
            warheads: 0,
            beam: 0,
            formation: 0,
            player_craft: 0,
            orientation: Orientation::default(),
            arrival: Arrival::new(Platform::Tie),
            departure: Departure::new(Platform::Tie),
            orders: vec![Order::default(); limits.orders_per_flight_group],
            waypoints: vec![Waypoint::default(); limits.waypoints_per_flight_group],
            goals: FlightGroupGoals::default(),
        }
    }
}

impl Default for FlightGroup {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-flight-group goals: one (condition, amount) pair per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlightGroupGoals {
    pub primary: GoalPair,
    pub secondary: GoalPair,
    pub secret: GoalPair,
    pub bonus: GoalPair,
    pub bonus_points: i16,
}

/// An in-flight message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub note: String,
    pub triggers: [Trigger; 2],
    pub trigger_or: bool,
    /// Delay in five-second ticks
    pub delay: u8,
}

impl Message {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            note: String::new(),
            triggers: [Trigger::default(); 2],
            trigger_or: false,
            delay: 0,
        }
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

/// A two-trigger mission-wide goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalGoal {
    pub triggers: [Trigger; 2],
    pub trigger_or: bool,
}

impl Default for GlobalGoal {
    fn default() -> Self {
        Self {
            triggers: [Trigger::never(); 2],
            trigger_or: false,
        }
    }
}

/// Mission-wide goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GlobalGoals {
    pub primary: GlobalGoal,
    pub secondary: GlobalGoal,
    pub bonus: GlobalGoal,
}

/// A pre-mission question asked of the flight officer
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub answer: String,
}

impl Question {
    pub fn is_empty(&self) -> bool {
        self.question.is_empty()
    }
}

/// A debriefing question shown when its outcome condition holds
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PostMissionQuestion {
    pub question: String,
    pub answer: String,
    pub condition: u8,
    pub condition_type: u8,
}

/// Outcome conditions a debriefing question can hang off
pub mod outcome {
    pub const PRIMARY_COMPLETE: u8 = 4;
    pub const PRIMARY_FAILED: u8 = 5;
    /// Condition type for outcome-driven questions
    pub const OUTCOME_TYPE: u8 = 1;
}

/// Pre- and post-mission officer questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingQuestions {
    pub pre_mission: Vec<Question>,
    pub post_mission: Vec<PostMissionQuestion>,
}

impl BriefingQuestions {
    pub fn new() -> Self {
        Self {
            pre_mission: vec![Question::default(); QUESTIONS_PER_OFFICER],
            post_mission: vec![PostMissionQuestion::default(); QUESTIONS_PER_OFFICER],
        }
    }
}

impl Default for BriefingQuestions {
    fn default() -> Self {
        Self::new()
    }
}
