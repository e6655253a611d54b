// tests/common/mod.rs

//! Shared mission builders for integration tests.

#![allow(dead_code)]

use mission_convert::mission::record::{
    BriefingEvent, EventKind, GoalArgument, RichGoal, Trigger, Waypoint, condition,
    variable_type,
};
use mission_convert::mission::{xvt, xwa};

/// An XWA flight group flying the given canonical craft type
pub fn xwa_flight_group(name: &str, craft_type: u8) -> xwa::FlightGroup {
    let mut fg = xwa::FlightGroup::new();
    fg.name = name.to_string();
    fg.craft_type = craft_type;
    fg.number_of_craft = 2;
    fg.waypoints[0] = Waypoint::from_km(1.0, -2.5, 0.0);
    fg.arrival.triggers[0] = Trigger::new(condition::ALWAYS, variable_type::NONE, 0, 0);
    fg
}

/// An XvT flight group flying the given legacy craft type
pub fn xvt_flight_group(name: &str, craft_type: u8) -> xvt::FlightGroup {
    let mut fg = xvt::FlightGroup::new();
    fg.name = name.to_string();
    fg.craft_type = craft_type;
    fg
}

/// An enabled goal aimed at team 1
pub fn team_one_goal(argument: GoalArgument, condition: u8, amount: u8) -> RichGoal {
    RichGoal {
        argument,
        condition,
        amount,
        points: 0,
        enabled: true,
        team: 0,
    }
}

/// An XWA mission with `count` plain flight groups
pub fn xwa_mission_with_flight_groups(count: usize) -> xwa::Mission {
    let mut mission = xwa::Mission::new();
    mission.path = "missions/1b3m2.tie".to_string();
    mission.flight_groups = (0..count)
        .map(|i| xwa_flight_group(&format!("Alpha {}", i), 1))
        .collect();
    mission
}

/// A representative XWA mission that converts cleanly to every platform
pub fn sample_xwa_mission() -> xwa::Mission {
    let mut mission = xwa_mission_with_flight_groups(3);
    mission.flight_groups[1].craft_type = 89;
    mission.flight_groups[2].goals[0] =
        team_one_goal(GoalArgument::Primary, condition::DESTROYED, 0);

    let mut message = xwa::Message::new();
    message.text = "Shipyard in sight".to_string();
    message.delay_minutes = 1;
    message.delay_seconds = 30;
    message.triggers[0] = Trigger::new(condition::CREATED, variable_type::FLIGHT_GROUP, 1, 0);
    mission.messages.push(message);

    mission.briefings[0].length = 210;
    mission.briefings[0].events = vec![
        BriefingEvent::new(0, EventKind::TitleText, vec![0]),
        BriefingEvent::new(105, EventKind::CaptionText, vec![1]),
        BriefingEvent::end(),
    ];
    mission.briefings[0].strings[0] = "Operation".to_string();

    mission.teams[0].name = "Rebels".to_string();
    mission.teams[1].name = "Imperials".to_string();
    mission.teams[2].name = "Pirates".to_string();
    mission.description = "Capture the shipyard".to_string();
    mission
}
