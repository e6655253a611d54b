// src/convert/message.rs

//! In-flight message transcriber

use crate::convert::LossReport;
use crate::convert::validate::Downgrade;
use crate::error::{Entity, Field, Result};
use crate::mission::record::Trigger;
use crate::mission::{tie, xvt, xwa};

/// Length of one delay tick in seconds
pub const DELAY_TICK_SECONDS: u32 = 5;

/// Convert a minutes/seconds delay to five-second ticks, truncating
pub fn delay_to_ticks(minutes: u8, seconds: u8) -> u32 {
    (u32::from(seconds) + u32::from(minutes) * 60) / DELAY_TICK_SECONDS
}

impl Downgrade<'_> {
    /// Minutes/seconds delay as a single tick byte
    pub fn message_delay(&self, entity: Entity, minutes: u8, seconds: u8) -> Result<u8> {
        let ticks = delay_to_ticks(minutes, seconds);
        u8::try_from(ticks).map_err(|_| {
            self.incompatible(
                entity,
                Field::MessageDelay,
                u16::try_from(ticks).unwrap_or(u16::MAX),
                format!("{}:{:02}", minutes, seconds),
            )
        })
    }

    pub fn message_to_xvt(
        &self,
        index: usize,
        src: &xwa::Message,
        report: &mut LossReport,
    ) -> Result<xvt::Message> {
        let entity = Entity::Message(index);
        let limits = self.dest.limits();
        let mut message = xvt::Message::new();

        message.text = self.fit_string(&src.text, limits.message_length, || format!("{} text", entity), report);
        message.note = self.fit_string(
            &src.note,
            limits.message_note_length,
            || format!("{} note", entity),
            report,
        );
        for (slot, trigger) in message.triggers.iter_mut().zip(&src.triggers) {
            *slot = self.trigger(entity, trigger)?;
        }
        message.and_or = src.and_or;
        message.delay = self.message_delay(entity, src.delay_minutes, src.delay_seconds)?;
        message.sent_to_team = src.sent_to_team;
        Ok(message)
    }

    pub fn xvt_message_to_tie(
        &self,
        index: usize,
        src: &xvt::Message,
        report: &mut LossReport,
    ) -> Result<tie::Message> {
        let entity = Entity::Message(index);
        let mut message =
            self.tie_message(entity, &src.text, &src.note, &src.triggers, &src.and_or, report)?;
        message.delay = src.delay;
        self.note_recipients(entity, &src.sent_to_team, report);
        Ok(message)
    }

    pub fn xwa_message_to_tie(
        &self,
        index: usize,
        src: &xwa::Message,
        report: &mut LossReport,
    ) -> Result<tie::Message> {
        let entity = Entity::Message(index);
        let mut message =
            self.tie_message(entity, &src.text, &src.note, &src.triggers, &src.and_or, report)?;
        message.delay = self.message_delay(entity, src.delay_minutes, src.delay_seconds)?;
        self.note_recipients(entity, &src.sent_to_team, report);
        Ok(message)
    }

    fn tie_message(
        &self,
        entity: Entity,
        text: &str,
        note: &str,
        triggers: &[Trigger],
        and_or: &[bool],
        report: &mut LossReport,
    ) -> Result<tie::Message> {
        let limits = self.dest.limits();
        let mut message = tie::Message::new();
        message.text = self.fit_string(text, limits.message_length, || format!("{} text", entity), report);
        message.note = self.fit_string(note, limits.message_note_length, || format!("{} note", entity), report);
        for (slot, trigger) in message.triggers.iter_mut().zip(triggers) {
            *slot = self.trigger(entity, trigger)?;
        }
        message.trigger_or = and_or.first().copied().unwrap_or(false);
        self.note_dropped_triggers(
            &entity.to_string(),
            triggers,
            and_or,
            message.triggers.len(),
            report,
        );
        Ok(message)
    }

    fn note_recipients(&self, entity: Entity, sent_to_team: &[bool; 10], report: &mut LossReport) {
        if sent_to_team.iter().any(|sent| !sent) {
            report.add_dropped(format!("{} team recipients, sent to everyone", entity));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::mission::record::{condition, variable_type};
    use crate::names::NameTable;
    use crate::platform::Platform;

    #[test]
    fn test_delay_to_ticks_truncates() {
        assert_eq!(delay_to_ticks(0, 4), 0);
        assert_eq!(delay_to_ticks(0, 5), 1);
        assert_eq!(delay_to_ticks(1, 14), 14);
        assert_eq!(delay_to_ticks(21, 15), 255);
    }

    #[test]
    fn test_delay_overflow_fails() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xwa, Platform::Xvt, &names);
        assert_eq!(downgrade.message_delay(Entity::Message(0), 21, 15).unwrap(), 255);
        let err = downgrade.message_delay(Entity::Message(3), 21, 20).unwrap_err();
        assert!(matches!(
            err,
            Error::IncompatibleValue {
                field: Field::MessageDelay,
                value: 256,
                ..
            }
        ));
        assert!(err.to_string().contains("21:20"));
    }

    #[test]
    fn test_xvt_message_to_tie_keeps_two_triggers() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xvt, Platform::Tie, &names);
        let mut report = LossReport::new();
        let mut src = xvt::Message::new();
        src.text = "Red Leader standing by".to_string();
        src.triggers[0] = Trigger::new(condition::DESTROYED, variable_type::FLIGHT_GROUP, 2, 0);
        src.triggers[3] = Trigger::new(40, 0, 0, 0);
        src.and_or = [true, false, false];
        src.delay = 12;

        let message = downgrade.xvt_message_to_tie(0, &src, &mut report).unwrap();
        assert_eq!(message.text, src.text);
        assert_eq!(message.triggers[0].condition, condition::DESTROYED);
        assert!(message.trigger_or);
        assert_eq!(message.delay, 12);
        assert_eq!(
            report.dropped,
            vec![
                "Message 0 trigger 4".to_string(),
                "Message 0 trigger combinator 2 (AND)".to_string(),
                "Message 0 trigger combinator 3 (AND)".to_string(),
            ]
        );
    }

    #[test]
    fn test_second_trigger_pair_reported_for_tie() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xvt, Platform::Tie, &names);
        let mut report = LossReport::new();
        let mut src = xvt::Message::new();
        src.triggers[0] = Trigger::new(condition::ALWAYS, variable_type::NONE, 0, 0);
        src.triggers[2] = Trigger::new(condition::DESTROYED, variable_type::FLIGHT_GROUP, 0, 0);

        let message = downgrade.xvt_message_to_tie(4, &src, &mut report).unwrap();
        assert_eq!(message.triggers[0].condition, condition::ALWAYS);
        assert!(report.dropped.contains(&"Message 4 trigger 3".to_string()));
        assert!(
            report
                .dropped
                .contains(&"Message 4 trigger combinator 3 (AND)".to_string())
        );
    }

    #[test]
    fn test_xwa_message_only_unused_slots_beyond_tie() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xwa, Platform::Tie, &names);
        let mut report = LossReport::new();
        let mut src = xwa::Message::new();
        src.triggers[1] = Trigger::new(condition::CREATED, variable_type::FLIGHT_GROUP, 1, 0);
        src.triggers[3] = Trigger::never();

        downgrade.xwa_message_to_tie(0, &src, &mut report).unwrap();
        assert!(report.is_empty(), "{}", report);
    }

    #[test]
    fn test_xwa_message_note_truncated_for_xvt() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xwa, Platform::Xvt, &names);
        let mut report = LossReport::new();
        let mut src = xwa::Message::new();
        src.note = "Commander's aside to the wing".to_string();
        src.delay_minutes = 1;
        src.sent_to_team[1] = false;

        let message = downgrade.message_to_xvt(0, &src, &mut report).unwrap();
        assert_eq!(message.note.chars().count(), 15);
        assert_eq!(message.delay, 12);
        assert!(!message.sent_to_team[1]);
        assert_eq!(report.truncated.len(), 1);
    }
}
