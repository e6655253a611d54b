// tests/downgrade_integration.rs
//! Integration tests for mission downgrades
//!
//! End-to-end coverage of the three conversion directions:
//! - Craft renumbering across the XWA boundary
//! - Global goal collapse and documented synonym rewrites
//! - All-or-nothing capacity failures
//! - Briefing tick rescaling and window limits

mod common;

use common::{sample_xwa_mission, team_one_goal, xvt_flight_group, xwa_flight_group, xwa_mission_with_flight_groups};
use mission_convert::convert::briefing::rescale_time;
use mission_convert::convert::translate;
use mission_convert::mission::record::{
    BriefingEvent, EventKind, GlobalGoal, GoalArgument, Trigger, Waypoint, amount, condition,
    km_to_raw, raw_to_km, variable_type,
};
use mission_convert::mission::{tie, xvt, xwa};
use mission_convert::{
    Capacity, ConversionOptions, Entity, Error, Field, MissionConverter, NameTable, Platform,
    convert_xvt_to_tie, convert_xwa_to_tie, convert_xwa_to_xvt,
};

// =============================================================================
// END-TO-END SCENARIOS
// =============================================================================

#[test]
fn test_shipyard_becomes_legacy_slot() {
    let mut src = xwa::Mission::new();
    src.flight_groups.push(xwa_flight_group("Shipyard", 89));

    let out = convert_xwa_to_tie(&src).unwrap();
    assert_eq!(out.flight_groups[0].craft_type, 10);

    let out = convert_xwa_to_xvt(&src).unwrap();
    assert_eq!(out.flight_groups[0].craft_type, 10);
}

#[test]
fn test_secondary_global_becomes_bonus() {
    let mut src = xwa::Mission::new();
    let mut secondary = GlobalGoal::default();
    secondary.triggers[0] = Trigger::new(
        condition::DESTROYED,
        variable_type::FLIGHT_GROUP,
        0,
        amount::EACH_SPECIAL,
    );
    src.globals[0].secondary = secondary;
    let mut prevent = GlobalGoal::default();
    prevent.triggers[0] = Trigger::new(condition::CAPTURED, variable_type::FLIGHT_GROUP, 0, 0);
    src.globals[0].prevent = prevent;
    src.flight_groups.push(xwa_flight_group("Convoy", 1));

    let converted = MissionConverter::with_defaults().xwa_to_tie(&src).unwrap();
    let goals = converted.mission.global_goals;
    assert_eq!(goals.bonus.triggers[0].condition, condition::DESTROYED);
    assert_eq!(goals.bonus.triggers[0].amount, amount::ALL_SPECIAL);
    assert_eq!(goals.secondary, tie::GlobalGoal::default());
    assert_eq!(goals.primary, tie::GlobalGoal::default());
    assert_eq!(converted.loss_report.dropped, vec!["Team 1 Prevent global goal".to_string()]);
}

#[test]
fn test_too_many_flight_groups_fails_without_output() {
    let src = xwa_mission_with_flight_groups(50);
    let err = MissionConverter::with_defaults().xwa_to_tie(&src).unwrap_err();
    assert_eq!(err.capacity(), Some((48, 50)));
    assert!(matches!(
        err,
        Error::CapacityExceeded {
            what: Capacity::FlightGroups,
            platform: Platform::Tie,
            ..
        }
    ));
    assert!(err.to_string().contains("48"));
    assert!(err.to_string().contains("50"));
}

#[test]
fn test_briefing_time_rescaled_between_tick_rates() {
    assert_eq!(rescale_time(120, 12, 10), 100);

    let mut src = xvt::Mission::new();
    src.briefings[0].events = vec![
        BriefingEvent::new(200, EventKind::PageBreak, vec![]),
        BriefingEvent::end(),
    ];
    let out = convert_xvt_to_tie(&src).unwrap();
    assert_eq!(out.briefing.events[0].time, 120);
    assert!(out.briefing.events[1].is_end());
}

// =============================================================================
// CAPACITY AND ALL-OR-NOTHING
// =============================================================================

#[test]
fn test_xvt_ceiling_is_lower_than_tie() {
    let src = xwa_mission_with_flight_groups(47);
    assert!(convert_xwa_to_tie(&src).is_ok());
    let err = convert_xwa_to_xvt(&src).unwrap_err();
    assert_eq!(err.capacity(), Some((46, 47)));
}

#[test]
fn test_first_incompatible_field_aborts() {
    let mut src = xwa_mission_with_flight_groups(10);
    src.flight_groups[7].formation = 30;
    src.flight_groups[8].craft_type = 31;

    let err = convert_xwa_to_tie(&src).unwrap_err();
    match err {
        Error::IncompatibleValue {
            entity,
            field,
            value,
            platform,
            ..
        } => {
            assert_eq!(entity, Entity::FlightGroup(7));
            assert_eq!(field, Field::Formation);
            assert_eq!(value, 30);
            assert_eq!(platform, Platform::Tie);
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_error_text_names_entity_and_value() {
    let mut src = xwa::Mission::new();
    src.flight_groups.push(xwa_flight_group("Reserved", 11));
    let err = convert_xwa_to_xvt(&src).unwrap_err();
    let text = err.to_string();
    assert!(text.starts_with("FlightGroup 0: craft type"), "{}", text);
    assert!(text.contains("(11)"));
}

#[test]
fn test_message_trigger_failure_names_message() {
    let mut src = xvt::Mission::new();
    let mut message = xvt::Message::new();
    message.triggers[1] = Trigger::new(40, variable_type::NONE, 0, 0);
    src.messages.push(xvt::Message::new());
    src.messages.push(message);

    let err = convert_xvt_to_tie(&src).unwrap_err();
    assert!(matches!(
        err,
        Error::IncompatibleValue {
            entity: Entity::Message(1),
            field: Field::TriggerCondition,
            value: 40,
            ..
        }
    ));
}

#[test]
fn test_source_is_not_mutated() {
    let src = sample_xwa_mission();
    let before = src.clone();
    convert_xwa_to_tie(&src).unwrap();
    convert_xwa_to_xvt(&src).unwrap();
    assert_eq!(src, before);
}

// =============================================================================
// TRIGGER SLOTS BEYOND THE DESTINATION
// =============================================================================

#[test]
fn test_primary_global_on_third_trigger_is_reported() {
    let mut src = xwa::Mission::new();
    src.globals[0].primary.triggers[2] =
        Trigger::new(condition::DESTROYED, variable_type::FLIGHT_GROUP, 0, 0);
    src.flight_groups.push(xwa_flight_group("Target", 1));

    let converted = MissionConverter::with_defaults().xwa_to_tie(&src).unwrap();
    assert_eq!(converted.mission.global_goals.primary, tie::GlobalGoal::default());
    assert!(
        converted
            .loss_report
            .dropped
            .contains(&"Team 1 Primary global goal trigger 3".to_string())
    );
}

#[test]
fn test_gated_message_reports_lost_pair() {
    let mut src = xvt::Mission::new();
    let mut message = xvt::Message::new();
    message.triggers[0] = Trigger::new(condition::ALWAYS, variable_type::NONE, 0, 0);
    message.triggers[2] = Trigger::new(condition::DESTROYED, variable_type::FLIGHT_GROUP, 0, 0);
    src.messages.push(message);

    let converted = MissionConverter::with_defaults().xvt_to_tie(&src).unwrap();
    assert_eq!(converted.mission.messages[0].triggers[0].condition, condition::ALWAYS);
    let dropped = &converted.loss_report.dropped;
    assert!(dropped.contains(&"Message 0 trigger 3".to_string()));
    assert!(dropped.contains(&"Message 0 trigger combinator 3 (AND)".to_string()));
}

// =============================================================================
// FULL MISSION CONVERSIONS
// =============================================================================

#[test]
fn test_sample_mission_to_tie() {
    let converted = MissionConverter::with_defaults()
        .xwa_to_tie(&sample_xwa_mission())
        .unwrap();
    let mission = converted.mission;

    assert_eq!(mission.path, "MISSIONS/1B3M2_TIE.tie");
    assert_eq!(mission.flight_groups.len(), 3);
    assert_eq!(mission.flight_groups[1].craft_type, 10);
    assert_eq!(mission.flight_groups[2].goals.primary.condition, condition::DESTROYED);
    assert_eq!(mission.flight_groups[0].waypoints[0], Waypoint::new(160, -400, 0));

    assert_eq!(mission.messages.len(), 1);
    assert_eq!(mission.messages[0].delay, 18);
    assert_eq!(mission.messages[0].triggers[0].variable, 1);

    assert_eq!(mission.briefing.length, 120);
    assert_eq!(mission.briefing.events[1].time, 60);
    assert_eq!(mission.briefing.strings[0], "Operation");

    assert_eq!(mission.iff_name(2), "Pirates");
    assert_eq!(mission.iff_hostile[..3], [false, true, true]);

    assert_eq!(mission.questions.pre_mission[0].answer, "Capture the shipyard");
    assert!(mission.questions.post_mission[0].question.is_empty());
}

#[test]
fn test_sample_mission_to_bop() {
    let mut src = sample_xwa_mission();
    src.success_text = "The shipyard is ours".to_string();
    src.teams[0].allegiances[2] = xwa::Allegiance::Neutral;

    let converter = MissionConverter::new(ConversionOptions {
        names: NameTable::default(),
        xvt_variant: Platform::Bop,
    });
    let converted = converter.xwa_to_xvt(&src).unwrap();
    let mission = converted.mission;

    assert_eq!(mission.platform, Platform::Bop);
    assert_eq!(mission.path, "MISSIONS/1B3M2_BoP.tie");
    assert_eq!(mission.success_text, "The shipyard is ours");
    assert_eq!(mission.messages[0].delay, 18);
    assert_eq!(mission.briefings.len(), 8);
    assert_eq!(mission.briefings[0].events[1].time, 100);
    assert_eq!(mission.teams[2].name, "Pirates");
    assert!(!mission.teams[0].allied_with[2]);
    assert!(converted.loss_report.is_empty(), "{}", converted.loss_report);
}

#[test]
fn test_xvt_mission_to_tie_drops_team_data() {
    let mut src = xvt::Mission::new();
    let mut fg = xvt_flight_group("Mu", 5);
    fg.team = 1;
    fg.designation = "Red".to_string();
    fg.goals[0] = team_one_goal(GoalArgument::Prevent, condition::DESTROYED, 0);
    src.flight_groups.push(fg);
    src.path = "train.tie".to_string();

    let converted = MissionConverter::with_defaults().xvt_to_tie(&src).unwrap();
    assert_eq!(converted.mission.path, "TRAIN_TIE.tie");
    assert_eq!(converted.mission.flight_groups[0].craft_type, 5);
    assert!(!converted.mission.flight_groups[0].goals.primary.is_set());
    assert_eq!(converted.loss_report.dropped.len(), 3);
}

// =============================================================================
// LAWS
// =============================================================================

#[test]
fn test_amount_synonyms_across_a_conversion() {
    let pairs = [
        (amount::PERCENT_66, amount::PERCENT_75),
        (amount::PERCENT_33, amount::PERCENT_50),
        (amount::EACH_CRAFT, amount::PERCENT_100),
        (amount::EACH_SPECIAL, amount::ALL_SPECIAL),
    ];
    for (rich, simple) in pairs {
        let mut src = xvt::Mission::new();
        let mut fg = xvt_flight_group("Beta", 1);
        fg.arrival.triggers[0] = Trigger::new(condition::DESTROYED, variable_type::FLIGHT_GROUP, 0, rich);
        src.flight_groups.push(fg);
        let out = convert_xvt_to_tie(&src).unwrap();
        assert_eq!(out.flight_groups[0].arrival.triggers[0].amount, simple);
    }
}

#[test]
fn test_native_amounts_survive_unchanged() {
    for code in 0..=15u8 {
        let mut src = xvt::Mission::new();
        let mut fg = xvt_flight_group("Beta", 1);
        fg.arrival.triggers[0] = Trigger::new(condition::DESTROYED, variable_type::FLIGHT_GROUP, 0, code);
        src.flight_groups.push(fg);
        let once = convert_xvt_to_tie(&src).unwrap();
        assert_eq!(once.flight_groups[0].arrival.triggers[0].amount, code);
    }
}

#[test]
fn test_craft_property_over_canonical_range() {
    for code in 0..=u8::MAX {
        let result = translate(code, Platform::Xwa, Platform::Tie, true);
        if [10, 11, 31].contains(&code) {
            assert!(result.is_err(), "code {}", code);
        } else if code <= 91 {
            assert!(result.is_ok(), "code {}", code);
        }
        if let Ok(mapped) = result {
            assert!(mapped <= Platform::Tie.limits().max_craft_type);
        }
    }
}

#[test]
fn test_waypoint_fixed_point_law() {
    for raw in i16::MIN..=i16::MAX {
        if raw % 160 == 0 {
            assert_eq!(km_to_raw(raw_to_km(raw)), raw);
        }
    }

    let mut src = xwa::Mission::new();
    let mut fg = xwa_flight_group("Gamma", 1);
    fg.waypoints[3] = Waypoint::new(-32768, 7, 32767);
    src.flight_groups.push(fg);
    let out = convert_xwa_to_xvt(&src).unwrap();
    assert_eq!(out.flight_groups[0].waypoints[3], Waypoint::new(-32768, 7, 32767));
}

#[test]
fn test_conversion_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MissionConverter>();
    assert_send_sync::<xwa::Mission>();
    assert_send_sync::<tie::Mission>();
    assert_send_sync::<Error>();

    let src = sample_xwa_mission();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let src = src.clone();
            std::thread::spawn(move || convert_xwa_to_tie(&src).map(|m| m.flight_groups.len()))
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 3);
    }
}
