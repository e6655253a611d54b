// src/convert/briefing.rs

//! Briefing transcriber
//!
//! Event times are rescaled between tick rates. XWA's icon and region
//! opcodes have no meaning elsewhere and are skipped. The rebuilt event
//! stream must fit the destination's fixed word window.

use crate::convert::LossReport;
use crate::convert::validate::{Downgrade, check_capacity};
use crate::error::{Capacity, Entity, Result};
use crate::mission::record::{Briefing, BriefingEvent};

/// Rescale a tick count between two tick rates, truncating
pub fn rescale_time(time: u16, source_tps: u16, dest_tps: u16) -> u16 {
    if source_tps == 0 {
        return time;
    }
    let scaled = u32::from(time) * u32::from(dest_tps) / u32::from(source_tps);
    u16::try_from(scaled).unwrap_or(u16::MAX)
}

impl Downgrade<'_> {
    /// Copy the first `min(src, dest)` briefings
    pub fn briefings(&self, src: &[Briefing], report: &mut LossReport) -> Result<Vec<Briefing>> {
        let count = self.dest.limits().briefings;
        let mut out = vec![Briefing::new(self.dest); count];
        for (index, (dest, briefing)) in out.iter_mut().zip(src).enumerate() {
            *dest = self.briefing(index, briefing, report)?;
        }
        for (index, briefing) in src.iter().enumerate().skip(count) {
            if briefing.events.iter().any(|e| !e.is_end()) {
                report.add_dropped(format!("{}, {} has {}", Entity::Briefing(index), self.dest, count));
            }
        }
        Ok(out)
    }

    /// Downgrade one briefing
    pub fn briefing(&self, index: usize, src: &Briefing, report: &mut LossReport) -> Result<Briefing> {
        let source_tps = self.source.limits().ticks_per_second;
        let limits = self.dest.limits();
        let dest_tps = limits.ticks_per_second;

        let entity = Entity::Briefing(index);
        let mut briefing = Briefing::new(self.dest);
        briefing.length = rescale_time(src.length, source_tps, dest_tps);
        briefing.events.clear();

        for (position, event) in src.events.iter().enumerate() {
            if event.is_end() {
                break;
            }
            if !event.kind.supported_on(self.dest) {
                report.add_briefing_note(format!(
                    "{} event {} ({:?}) skipped",
                    entity, position, event.kind
                ));
                continue;
            }
            let count = event.kind.param_count();
            let mut params = event.params.clone();
            if params.len() != count {
                report.add_briefing_note(format!(
                    "{} event {} ({:?}) had {} parameters, {} expected",
                    entity,
                    position,
                    event.kind,
                    params.len(),
                    count
                ));
                params.resize(count, 0);
            }
            briefing.events.push(BriefingEvent::new(
                rescale_time(event.time, source_tps, dest_tps),
                event.kind,
                params,
            ));
        }
        briefing.events.push(BriefingEvent::end());

        check_capacity(Capacity::BriefingEvents, briefing.word_len(), self.dest)
            .inspect_err(|_| tracing::warn!("{} does not fit {}", entity, self.dest))?;

        for (dest, tag) in briefing.tags.iter_mut().zip(&src.tags) {
            dest.clone_from(tag);
        }
        for (dest, text) in briefing.strings.iter_mut().zip(&src.strings) {
            dest.clone_from(text);
        }
        let lost = count_non_empty(src.tags.iter().skip(briefing.tags.len()))
            + count_non_empty(src.strings.iter().skip(briefing.strings.len()));
        if lost > 0 {
            report.add_briefing_note(format!(
                "{}: {} tag/string entries beyond {} slots dropped",
                entity, lost, limits.briefing_tags
            ));
        }
        Ok(briefing)
    }
}

fn count_non_empty<'a>(strings: impl Iterator<Item = &'a String>) -> usize {
    strings.filter(|s| !s.is_empty()).count()
}
