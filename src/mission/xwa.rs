// src/mission/xwa.rs

//! XWA mission model, the richest platform
//!
//! XWA numbers craft types canonically, splits a flight group's orders into
//! four regions, and gives each team an explicit allegiance towards every
//! other team.

use crate::mission::record::{
    Arrival, Briefing, Departure, Globals, Order, Orientation, RichGoal, Trigger, Waypoint,
};
use crate::platform::Platform;
use serde::{Deserialize, Serialize};

/// Role slots per flight group
pub const ROLES: usize = 4;
/// Regions a mission can span
pub const REGIONS: usize = 4;
/// Orders per region
pub const ORDERS_PER_REGION: usize = 4;
/// End-of-mission message lines per team
pub const END_OF_MISSION_MESSAGES: usize = 6;

/// An XWA mission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub path: String,
    pub flight_groups: Vec<FlightGroup>,
    pub messages: Vec<Message>,
    pub globals: Vec<Globals>,
    pub teams: Vec<Team>,
    pub briefings: Vec<Briefing>,
    pub region_names: Vec<String>,
    pub description: String,
    pub success_text: String,
    pub failure_text: String,
}

impl Mission {
    pub fn new() -> Self {
        let limits = Platform::Xwa.limits();
        Self {
            path: String::new(),
            flight_groups: Vec::new(),
            messages: Vec::new(),
            globals: vec![Globals::default(); limits.teams],
            teams: (0..limits.teams).map(Team::new).collect(),
            briefings: vec![Briefing::new(Platform::Xwa); limits.briefings],
            region_names: vec![String::new(); REGIONS],
            description: String::new(),
            success_text: String::new(),
            failure_text: String::new(),
        }
    }
}

impl Default for Mission {
    fn default() -> Self {
        Self::new()
    }
}

/// An XWA flight group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightGroup {
    pub name: String,
    pub designation: String,
    pub cargo: String,
    pub special_cargo: String,
    pub roles: Vec<String>,
    /// Canonical craft-type code
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
    pub player_number: u8,
    pub player_craft: u8,
    /// Region the group starts in
    pub region: u8,
    pub orientation: Orientation,
    pub arrival: Arrival,
    pub departure: Departure,
    /// Region-major: region 1 orders first
    pub orders: Vec<Order>,
    pub waypoints: Vec<Waypoint>,
    pub goals: Vec<RichGoal>,
}

impl FlightGroup {
    pub fn new() -> Self {
        let limits = Platform::Xwa.limits();
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
            region: 0,
            orientation: Orientation::default(),
            arrival: Arrival::new(Platform::Xwa),
            departure: Departure::new(Platform::Xwa),
            orders: vec![Order::default(); limits.orders_per_flight_group],
            waypoints: vec![Waypoint::default(); limits.waypoints_per_flight_group],
            goals: vec![RichGoal::default(); limits.goals_per_flight_group],
        }
    }

    /// The orders of one region (0-based)
    pub fn region_orders(&self, region: usize) -> &[Order] {
        let start = (region * ORDERS_PER_REGION).min(self.orders.len());
        let end = (start + ORDERS_PER_REGION).min(self.orders.len());
        &self.orders[start..end]
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
    pub and_or: [bool; 3],
    pub delay_minutes: u8,
    pub delay_seconds: u8,
    pub sent_to_team: [bool; 10],
}

impl Message {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            note: String::new(),
            triggers: [Trigger::default(); 4],
            and_or: [false; 3],
            delay_minutes: 0,
            delay_seconds: 0,
            sent_to_team: [true; 10],
        }
    }

    /// Total delay in seconds
    pub fn delay_total_seconds(&self) -> u32 {
        u32::from(self.delay_minutes) * 60 + u32::from(self.delay_seconds)
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new()
    }
}

/// How one team regards another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Allegiance {
    #[default]
    Hostile,
    Friendly,
    Neutral,
}

/// A team: name, allegiances and end-of-mission text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub allegiances: [Allegiance; 10],
    pub end_of_mission_messages: Vec<String>,
}

impl Team {
    /// A team friendly only towards itself
    pub fn new(index: usize) -> Self {
        let mut allegiances = [Allegiance::Hostile; 10];
        if let Some(own) = allegiances.get_mut(index) {
            *own = Allegiance::Friendly;
        }
        Self {
            name: String::new(),
            allegiances,
            end_of_mission_messages: vec![String::new(); END_OF_MISSION_MESSAGES],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_orders_are_region_major() {
        let mut fg = FlightGroup::new();
        for (i, order) in fg.orders.iter_mut().enumerate() {
            order.command = i as u8;
        }
        let region2: Vec<u8> = fg.region_orders(1).iter().map(|o| o.command).collect();
        assert_eq!(region2, vec![4, 5, 6, 7]);
        assert!(fg.region_orders(4).is_empty());
    }

    #[test]
    fn test_message_delay_seconds() {
        let mut msg = Message::new();
        msg.delay_minutes = 2;
        msg.delay_seconds = 15;
        assert_eq!(msg.delay_total_seconds(), 135);
    }

    #[test]
    fn test_new_mission_sized_for_xwa() {
        let mission = Mission::new();
        assert_eq!(mission.briefings.len(), 2);
        assert_eq!(mission.briefings[0].tags.len(), 128);
        assert_eq!(mission.teams[0].allegiances[0], Allegiance::Friendly);
        assert_eq!(mission.teams[0].allegiances[1], Allegiance::Hostile);
    }
}
