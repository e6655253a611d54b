// src/convert/validate.rs

//! Value range validators
//!
//! A value either passes, is rewritten through a documented synonym (see
//! `trigger`), or fails with `IncompatibleValue`. Nothing above a hard
//! ceiling is ever clamped.

use crate::error::{Capacity, Entity, Error, Field, Result};
use crate::names::NameTable;
use crate::platform::Platform;

/// Fail unless `count` fits the destination's fixed capacity
pub fn check_capacity(what: Capacity, count: usize, dest: Platform) -> Result<()> {
    let limits = dest.limits();
    let limit = match what {
        Capacity::FlightGroups => limits.flight_groups,
        Capacity::Messages => limits.messages,
        Capacity::BriefingEvents => limits.briefing_event_words,
    };
    if count > limit {
        return Err(Error::CapacityExceeded {
            what,
            limit,
            count,
            platform: dest,
        });
    }
    Ok(())
}

/// The direction of a downgrade plus the names used in its error text
#[derive(Debug, Clone, Copy)]
pub struct Downgrade<'a> {
    pub source: Platform,
    pub dest: Platform,
    pub names: &'a NameTable,
}

impl<'a> Downgrade<'a> {
    pub fn new(source: Platform, dest: Platform, names: &'a NameTable) -> Self {
        Self {
            source,
            dest,
            names,
        }
    }

    /// Display name of a coded value, as the source platform defines it
    pub fn value_name(&self, field: Field, value: u8) -> String {
        match field {
            Field::CraftType => self.names.craft_type(self.source, value),
            Field::Formation => self.names.formation(value),
            Field::AbortCondition => self.names.abort(value),
            Field::OrderCommand => self.names.order(value),
            Field::OrderTargetType | Field::TriggerVariableType => self.names.variable_type(value),
            Field::TriggerCondition => self.names.condition(value),
            Field::TriggerAmount => self.names.amount(value),
            Field::MessageDelay => format!("{} ticks", value),
        }
    }

    /// Build the error for a value the destination cannot hold
    pub fn incompatible(
        &self,
        entity: Entity,
        field: Field,
        value: u16,
        value_name: String,
    ) -> Error {
        Error::IncompatibleValue {
            entity,
            field,
            value,
            value_name,
            platform: self.dest,
        }
    }

    /// Pass `value` through if it is within the inclusive ceiling `max`
    pub fn check(&self, entity: Entity, field: Field, value: u8, max: u8) -> Result<u8> {
        if value > max {
            return Err(self.incompatible(
                entity,
                field,
                u16::from(value),
                self.value_name(field, value),
            ));
        }
        Ok(value)
    }

    pub fn formation(&self, entity: Entity, value: u8) -> Result<u8> {
        self.check(entity, Field::Formation, value, self.dest.limits().max_formation)
    }

    pub fn abort(&self, entity: Entity, value: u8) -> Result<u8> {
        self.check(entity, Field::AbortCondition, value, self.dest.limits().max_abort)
    }

    pub fn order_command(&self, entity: Entity, value: u8) -> Result<u8> {
        self.check(entity, Field::OrderCommand, value, self.dest.limits().max_order)
    }

    /// Truncate a string to `width` characters, noting any loss
    pub fn fit_string(
        &self,
        text: &str,
        width: usize,
        label: impl FnOnce() -> String,
        report: &mut super::LossReport,
    ) -> String {
        if text.chars().count() <= width {
            return text.to_string();
        }
        report.add_truncated(format!("{} \"{}\" cut to {} characters", label(), text, width));
        crate::mission::record::truncate_chars(text, width)
    }
}
