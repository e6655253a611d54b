// src/mission/xvt.rs

//! XvT and BoP mission model
//!
//! BoP shares every record layout with XvT. The only difference the model
//! carries is the `platform` tag and the BoP outcome strings.

use crate::mission::record::{
    Arrival, Briefing, Departure, Globals, Order, Orientation, RichGoal, Trigger, Waypoint,
};
use crate::platform::Platform;
use serde::{Deserialize, Serialize};

/// Role slots per flight group
pub const ROLES: usize = 4;
/// End-of-mission message lines per team
pub const END_OF_MISSION_MESSAGES: usize = 6;

/// An XvT or BoP mission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    /// `Xvt` or `Bop`
    pub platform: Platform,
    pub path: String,
    pub flight_groups: Vec<FlightGroup>,
    pub messages: Vec<Message>,
    /// One entry per team
    pub globals: Vec<Globals>,
    pub teams: Vec<Team>,
    pub briefings: Vec<Briefing>,
    pub description: String,
    /// Debriefing text on success (BoP only)
    pub success_text: String,
    /// Debriefing text on failure (BoP only)
    pub failure_text: String,
}

impl Mission {
    /// Create an empty XvT mission
    pub fn new() -> Self {
        Self::with_platform(Platform::Xvt)
    }

    /// Create an empty mission for the given XvT-family variant
    pub fn with_platform(platform: Platform) -> Self {
        let limits = Platform::Xvt.limits();
        let platform = if platform.is_xvt_family() {
            platform
        } else {
            Platform::Xvt
        };
        Self {
            platform,
            path: String::new(),
            flight_groups: Vec::new(),
            messages: Vec::new(),
            globals: vec![Globals::default(); limits.teams],
            teams: (0..limits.teams).map(Team::new).collect(),
            briefings: vec![Briefing::new(Platform::Xvt); limits.briefings],
            description: String::new(),
            success_text: String::new(),
            failure_text: String::new(),
        }
    }

    pub fn is_bop(&self) -> bool {
        self.platform == Platform::Bop
    }
}

impl Default for Mission {
    fn default() -> Self {
        Self::new()
    }
}

/// An XvT flight group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightGroup {
    pub name: String,
    pub designation: String,
    pub cargo: String,
    pub special_cargo: String,
    pub roles: Vec<String>,
    pub craft_type: u8,
    pub number_of_craft: u8,
    pub number_of_waves: u8,
    pub special_craft: u8,
    pub global_group: u8,
    pub iff: u8,
    pub team: u8,
    pub ai_rating: u8,
    pub status: u8,
    pub warheads: u8,
    pub beam: u8,
    pub formation: u8,
    /// Multiplayer slot (0 = AI)
    pub player_number: u8,
    pub player_craft: u8,
    pub orientation: Orientation,
    pub arrival: Arrival,
    pub departure: Departure,
    pub orders: Vec<Order>,
    pub waypoints: Vec<Waypoint>,
    pub goals: Vec<RichGoal>,
}

impl FlightGroup {
    pub fn new() -> Self {
        let limits = Platform::Xvt.limits();
        Self {
            name: String::new(),
            designation: String::new(),
            cargo: String::new(),
            special_cargo: String::new(),
            roles: vec![String::new(); ROLES],
            craft_type: 0,
            number_of_craft: 1,
            number_of_waves: 0,
            special_craft: 0,
            global_group: 0,
            iff: 0,
            team: 0,
            ai_rating: 0,
            status: 0,
            warheads: 0,
            beam: 0,
            formation: 0,
            player_number: 0,
            player_craft: 0,
            orientation: Orientation::default(),
            arrival: Arrival::new(Platform::Xvt),
            departure: Departure::new(Platform::Xvt),
            orders: vec![Order::default(); limits.orders_per_flight_group],
            waypoints: vec![Waypoint::default(); limits.waypoints_per_flight_group],
            goals: vec![RichGoal::default(); limits.goals_per_flight_group],
        }
    }
}

impl Default for FlightGroup {
    fn default() -> Self {
        Self::new()
    }
}

/// An in-flight message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub note: String,
    pub triggers: [Trigger; 4],
    /// (T1 or T2, T3 or T4, T12 or T34)
    pub and_or: [bool; 3],
    /// Delay in five-second ticks
    pub delay: u8,
    pub sent_to_team: [bool; 10],
}

impl Message {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            note: String::new(),
            triggers: [Trigger::default(); 4],
            and_or: [false; 3],
            delay: 0,
            sent_to_team: [true; 10],
        }
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

/// A team: name, alliances and end-of-mission text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub allied_with: [bool; 10],
    pub end_of_mission_messages: Vec<String>,
}

impl Team {
    /// A team allied only with itself
    pub fn new(index: usize) -> Self {
        let mut allied_with = [false; 10];
        if let Some(own) = allied_with.get_mut(index) {
            *own = true;
        }
        Self {
            name: String::new(),
            allied_with,
            end_of_mission_messages: vec![String::new(); END_OF_MISSION_MESSAGES],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mission_sized_for_xvt() {
        let mission = Mission::new();
        assert_eq!(mission.teams.len(), 10);
        assert_eq!(mission.globals.len(), 10);
        assert_eq!(mission.briefings.len(), 8);
        assert!(!mission.is_bop());
    }

    #[test]
    fn test_with_platform_rejects_non_family() {
        assert_eq!(Mission::with_platform(Platform::Bop).platform, Platform::Bop);
        assert_eq!(Mission::with_platform(Platform::Tie).platform, Platform::Xvt);
    }

    #[test]
    fn test_team_allied_with_self() {
        let team = Team::new(3);
        assert!(team.allied_with[3]);
        assert_eq!(team.allied_with.iter().filter(|a| **a).count(), 1);
    }

    #[test]
    fn test_new_flight_group_sized_for_xvt() {
        let fg = FlightGroup::new();
        assert_eq!(fg.orders.len(), 4);
        assert_eq!(fg.waypoints.len(), 22);
        assert_eq!(fg.goals.len(), 8);
        assert_eq!(fg.arrival.and_or.len(), 3);
        assert_eq!(fg.departure.and_or.len(), 1);
    }
}
