// src/convert/trigger.rs

//! Trigger downgrade rule
//!
//! Checks run in a fixed order: condition ceiling, variable-type ceiling,
//! craft remap for craft-type variables, then the amount synonym rewrite.
//! Amounts already inside the destination's range are never touched, so the
//! rule is idempotent.

use crate::convert::LossReport;
use crate::convert::craft;
use crate::convert::validate::Downgrade;
use crate::error::{Entity, Field, Result};
use crate::mission::record::{Trigger, amount, variable_type};
use crate::platform::Platform;

/// Destination equivalent of a richer amount code, if one is documented
///
/// "66%" becomes "75%", "33%" becomes "50%", "each craft" becomes "100%" and
/// "each special craft" becomes "all special craft in".
pub fn amount_synonym(code: u8) -> Option<u8> {
    match code {
        amount::PERCENT_66 => Some(amount::PERCENT_75),
        amount::PERCENT_33 => Some(amount::PERCENT_50),
        amount::EACH_CRAFT => Some(amount::PERCENT_100),
        amount::EACH_SPECIAL => Some(amount::ALL_SPECIAL),
        _ => None,
    }
}

impl Downgrade<'_> {
    /// Check a condition code against the destination ceiling
    pub fn condition(&self, entity: Entity, code: u8) -> Result<u8> {
        self.check(
            entity,
            Field::TriggerCondition,
            code,
            self.dest.limits().max_condition,
        )
    }

    /// Check an amount code, rewriting documented synonyms
    pub fn amount(&self, entity: Entity, code: u8) -> Result<u8> {
        let max = self.dest.limits().max_amount;
        if code <= max {
            return Ok(code);
        }
        match amount_synonym(code) {
            Some(rewritten) if rewritten <= max => {
                tracing::debug!("{}: amount {} rewritten to {}", entity, code, rewritten);
                Ok(rewritten)
            }
            _ => Err(self.incompatible(
                entity,
                Field::TriggerAmount,
                u16::from(code),
                self.value_name(Field::TriggerAmount, code),
            )),
        }
    }

    /// Remap a craft-type code, attributing failures to `entity`
    pub fn craft_type(&self, entity: Entity, code: u8) -> Result<u8> {
        craft::translate(code, self.source, self.dest, true).map_err(|e| {
            tracing::debug!("{}: {}", entity, e);
            self.incompatible(
                entity,
                Field::CraftType,
                u16::from(code),
                self.value_name(Field::CraftType, code),
            )
        })
    }

    /// Downgrade one trigger
    pub fn trigger(&self, entity: Entity, trigger: &Trigger) -> Result<Trigger> {
        let condition = self.condition(entity, trigger.condition)?;
        let var_type = self.check(
            entity,
            Field::TriggerVariableType,
            trigger.variable_type,
            self.dest.limits().max_variable_type,
        )?;
        let variable = if var_type == variable_type::CRAFT_TYPE {
            self.craft_type(entity, trigger.variable)?
        } else {
            trigger.variable
        };
        let amount = self.amount(entity, trigger.amount)?;
        let parameter = if self.dest == Platform::Xwa {
            trigger.parameter
        } else {
            0
        };

        Ok(Trigger {
            condition,
            variable_type: var_type,
            variable,
            amount,
            parameter,
        })
    }

    /// Downgrade the first `count` triggers of `triggers`
    pub fn triggers(&self, entity: Entity, triggers: &[Trigger], count: usize) -> Result<Vec<Trigger>> {
        triggers
            .iter()
            .take(count)
            .map(|t| self.trigger(entity, t))
            .collect()
    }

    /// Record trigger slots past `kept` that still carry a condition
    ///
    /// The combinators past the destination's last pair are recorded too,
    /// but only when a live trigger went with them.
    pub fn note_dropped_triggers(
        &self,
        owner: &str,
        triggers: &[Trigger],
        and_or: &[bool],
        kept: usize,
        report: &mut LossReport,
    ) {
        let mut live = false;
        for (slot, trigger) in triggers.iter().enumerate().skip(kept) {
            if *trigger != Trigger::default() && !trigger.is_never() {
                report.add_dropped(format!("{} trigger {}", owner, slot + 1));
                live = true;
            }
        }
        if !live {
            return;
        }
        for (slot, or) in and_or.iter().enumerate().skip(kept.saturating_sub(1)) {
            report.add_dropped(format!(
                "{} trigger combinator {} ({})",
                owner,
                slot + 1,
                if *or { "OR" } else { "AND" }
            ));
        }
    }
}
