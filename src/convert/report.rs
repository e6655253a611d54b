// src/convert/report.rs

//! Record of documented data loss during a downgrade
//!
//! A conversion either fails outright or succeeds with a `LossReport`
//! listing everything the destination could not hold: dropped goal
//! categories, truncated strings, skipped briefing events and so on. Silent
//! order/waypoint truncation is policy and is not reported.

use serde::Serialize;
use std::fmt;

/// What a downgrade had to leave behind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LossReport {
    /// Whole features with no destination counterpart
    pub dropped: Vec<String>,
    /// Strings cut to the destination's fixed width
    pub truncated: Vec<String>,
    /// Briefing events that were skipped
    pub briefing_notes: Vec<String>,
}

impl LossReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.dropped.is_empty() && self.truncated.is_empty() && self.briefing_notes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.dropped.len() + self.truncated.len() + self.briefing_notes.len()
    }

    pub fn add_dropped(&mut self, note: impl Into<String>) {
        let note = note.into();
        tracing::debug!("Dropped: {}", note);
        self.dropped.push(note);
    }

    pub fn add_truncated(&mut self, note: impl Into<String>) {
        let note = note.into();
        tracing::debug!("Truncated: {}", note);
        self.truncated.push(note);
    }

    pub fn add_briefing_note(&mut self, note: impl Into<String>) {
        let note = note.into();
        tracing::debug!("Briefing: {}", note);
        self.briefing_notes.push(note);
    }

    /// Print a summary of what was lost
    pub fn print_summary(&self, target: &str) {
        if self.is_empty() {
            return;
        }
        println!("  Conversion notes for {}:", target);
        print!("{}", self);
    }
}

impl fmt::Display for LossReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for note in &self.dropped {
            writeln!(f, "    [DROPPED] {}", note)?;
        }
        for note in &self.truncated {
            writeln!(f, "    [TRUNCATED] {}", note)?;
        }
        for note in &self.briefing_notes {
            writeln!(f, "    [BRIEFING] {}", note)?;
        }
        Ok(())
    }
}
