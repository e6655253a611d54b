// src/convert/converter.rs
//! Mission converter
//!
//! One entry point per supported direction: XWA to XvT/BoP, XWA to TIE and
//! XvT/BoP to TIE. Each checks gross capacity, builds the destination graph
//! in memory and hands it back only if every field made it across. The
//! first incompatibility aborts the whole conversion.

use crate::convert::LossReport;
use crate::convert::validate::{Downgrade, check_capacity};
use crate::error::{Capacity, Result};
use crate::mission::record::Briefing;
use crate::mission::tie::{self, PostMissionQuestion, Question, outcome};
use crate::mission::{xvt, xwa};
use crate::names::NameTable;
use crate::platform::Platform;
use tracing::{debug, info, warn};

/// Prompt for the synthesized objectives question
pub const OBJECTIVES_PROMPT: &str = "What are the mission objectives?";
/// Prompt for the synthesized success debriefing
pub const SUCCESS_PROMPT: &str = "What have I accomplished?";
/// Prompt for the synthesized failure debriefing
pub const FAILURE_PROMPT: &str = "Any suggestions?";

/// Options for mission conversion
#[derive(Debug, Clone)]
pub struct ConversionOptions {
    /// Display names used in error text and loss notes
    pub names: NameTable,
    /// XvT-family dialect produced from XWA (`Xvt` or `Bop`)
    pub xvt_variant: Platform,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            names: NameTable::default(),
            xvt_variant: Platform::Xvt,
        }
    }
}

/// A converted mission plus what could not be carried over
#[derive(Debug, Clone)]
pub struct Conversion<M> {
    pub mission: M,
    pub loss_report: LossReport,
}

/// Downgrades missions between platforms
#[derive(Debug, Clone, Default)]
pub struct MissionConverter {
    options: ConversionOptions,
}

impl MissionConverter {
    /// Create a new converter with the given options
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Create a converter with default options
    pub fn with_defaults() -> Self {
        Self::new(ConversionOptions::default())
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    fn xvt_variant(&self) -> Platform {
        if self.options.xvt_variant.is_xvt_family() {
            self.options.xvt_variant
        } else {
            Platform::Xvt
        }
    }

    /// Convert an XWA mission to XvT (or BoP, per options)
    pub fn xwa_to_xvt(&self, src: &xwa::Mission) -> Result<Conversion<xvt::Mission>> {
        let dest = self.xvt_variant();
        let downgrade = Downgrade::new(Platform::Xwa, dest, &self.options.names);
        start(&downgrade, src.flight_groups.len(), src.messages.len())?;
        let mut report = LossReport::new();

        let mut mission = xvt::Mission::with_platform(dest);
        mission.flight_groups = Vec::with_capacity(src.flight_groups.len());
        for (index, fg) in src.flight_groups.iter().enumerate() {
            mission
                .flight_groups
                .push(downgrade.flight_group_to_xvt(index, fg, &mut report)?);
        }
        mission.messages = Vec::with_capacity(src.messages.len());
        for (index, message) in src.messages.iter().enumerate() {
            mission
                .messages
                .push(downgrade.message_to_xvt(index, message, &mut report)?);
        }
        mission.globals = downgrade.globals_to_xvt(&src.globals)?;
        mission.briefings = downgrade.briefings(&src.briefings, &mut report)?;
        mission.teams = downgrade.teams_to_xvt(&src.teams, &mut report);

        mission.description = src.description.clone();
        if dest == Platform::Bop {
            mission.success_text = src.success_text.clone();
            mission.failure_text = src.failure_text.clone();
        } else {
            for (label, text) in [("success", &src.success_text), ("failure", &src.failure_text)] {
                if !text.is_empty() {
                    report.add_dropped(format!("Mission {} text, XvT has no debriefing text", label));
                }
            }
        }
        if src.region_names.iter().any(|r| !r.is_empty()) {
            report.add_dropped("Region names");
        }
        mission.path = rewrite_path(&src.path, dest);

        Ok(finish(&downgrade, mission, report))
    }

    /// Convert an XWA mission to TIE
    pub fn xwa_to_tie(&self, src: &xwa::Mission) -> Result<Conversion<tie::Mission>> {
        let downgrade = Downgrade::new(Platform::Xwa, Platform::Tie, &self.options.names);
        start(&downgrade, src.flight_groups.len(), src.messages.len())?;
        let mut report = LossReport::new();

        let mut mission = tie::Mission::new();
        mission.flight_groups = Vec::with_capacity(src.flight_groups.len());
        for (index, fg) in src.flight_groups.iter().enumerate() {
            mission
                .flight_groups
                .push(downgrade.flight_group_to_tie(index, fg, &mut report)?);
        }
        mission.messages = Vec::with_capacity(src.messages.len());
        for (index, message) in src.messages.iter().enumerate() {
            mission
                .messages
                .push(downgrade.xwa_message_to_tie(index, message, &mut report)?);
        }
        mission.global_goals = downgrade.globals_to_tie(&src.globals, &mut report)?;
        mission.briefing = first_briefing(downgrade.briefings(&src.briefings, &mut report)?);

        let iff = downgrade.xwa_teams_to_tie(&src.teams, &mut report);
        mission.iff_names = iff.names;
        mission.iff_hostile = iff.hostile;
        mission.end_of_mission_messages = iff.end_of_mission_messages;

        mission.questions =
            synthesize_questions(&src.description, &src.success_text, &src.failure_text);
        mission.path = rewrite_path(&src.path, Platform::Tie);

        Ok(finish(&downgrade, mission, report))
    }

    /// Convert an XvT or BoP mission to TIE
    pub fn xvt_to_tie(&self, src: &xvt::Mission) -> Result<Conversion<tie::Mission>> {
        let source = if src.platform.is_xvt_family() {
            src.platform
        } else {
            Platform::Xvt
        };
        let downgrade = Downgrade::new(source, Platform::Tie, &self.options.names);
        start(&downgrade, src.flight_groups.len(), src.messages.len())?;
        let mut report = LossReport::new();

        let mut mission = tie::Mission::new();
        mission.flight_groups = Vec::with_capacity(src.flight_groups.len());
        for (index, fg) in src.flight_groups.iter().enumerate() {
            mission
                .flight_groups
                .push(downgrade.flight_group_to_tie(index, fg, &mut report)?);
        }
        mission.messages = Vec::with_capacity(src.messages.len());
        for (index, message) in src.messages.iter().enumerate() {
            mission
                .messages
                .push(downgrade.xvt_message_to_tie(index, message, &mut report)?);
        }
        mission.global_goals = downgrade.globals_to_tie(&src.globals, &mut report)?;
        mission.briefing = first_briefing(downgrade.briefings(&src.briefings, &mut report)?);

        let iff = downgrade.xvt_teams_to_tie(&src.teams, &mut report);
        mission.iff_names = iff.names;
        mission.iff_hostile = iff.hostile;
        mission.end_of_mission_messages = iff.end_of_mission_messages;

        mission.questions =
            synthesize_questions(&src.description, &src.success_text, &src.failure_text);
        mission.path = rewrite_path(&src.path, Platform::Tie);

        Ok(finish(&downgrade, mission, report))
    }
}

fn start(downgrade: &Downgrade<'_>, flight_groups: usize, messages: usize) -> Result<()> {
    info!(
        "Converting {} mission to {} ({} flight groups, {} messages)",
        downgrade.source, downgrade.dest, flight_groups, messages
    );
    check_capacity(Capacity::FlightGroups, flight_groups, downgrade.dest)?;
    check_capacity(Capacity::Messages, messages, downgrade.dest)
}

fn finish<M>(downgrade: &Downgrade<'_>, mission: M, loss_report: LossReport) -> Conversion<M> {
    if loss_report.is_empty() {
        info!("Converted {} mission to {} without loss", downgrade.source, downgrade.dest);
    } else {
        warn!(
            "Converted {} mission to {} with {} loss notes",
            downgrade.source,
            downgrade.dest,
            loss_report.len()
        );
    }
    Conversion {
        mission,
        loss_report,
    }
}

fn first_briefing(briefings: Vec<Briefing>) -> Briefing {
    briefings
        .into_iter()
        .next()
        .unwrap_or_else(|| Briefing::new(Platform::Tie))
}

/// Build officer questions from the mission's summary strings
pub fn synthesize_questions(
    description: &str,
    success_text: &str,
    failure_text: &str,
) -> tie::BriefingQuestions {
    let mut questions = tie::BriefingQuestions::new();
    if !description.is_empty() {
        questions.pre_mission[0] = Question {
            question: OBJECTIVES_PROMPT.to_string(),
            answer: description.to_string(),
        };
    }
    if !success_text.is_empty() {
        questions.post_mission[0] = PostMissionQuestion {
            question: SUCCESS_PROMPT.to_string(),
            answer: success_text.to_string(),
            condition: outcome::PRIMARY_COMPLETE,
            condition_type: outcome::OUTCOME_TYPE,
        };
    }
    if !failure_text.is_empty() {
        questions.post_mission[1] = PostMissionQuestion {
            question: FAILURE_PROMPT.to_string(),
            answer: failure_text.to_string(),
            condition: outcome::PRIMARY_FAILED,
            condition_type: outcome::OUTCOME_TYPE,
        };
    }
    questions
}

/// Rename a mission path for the destination platform
///
/// The path is upper-cased and its last `.TIE` replaced by the platform
/// suffix. A path without `.TIE` gets the suffix appended.
pub fn rewrite_path(path: &str, dest: Platform) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut upper = path.to_uppercase();
    match upper.rfind(".TIE") {
        Some(pos) => upper.replace_range(pos..pos + 4, dest.file_suffix()),
        None => upper.push_str(dest.file_suffix()),
    }
    debug!("Rewrote path {} -> {}", path, upper);
    upper
}

/// Convert XWA to XvT with default options
pub fn convert_xwa_to_xvt(src: &xwa::Mission) -> Result<xvt::Mission> {
    MissionConverter::with_defaults()
        .xwa_to_xvt(src)
        .map(|c| c.mission)
}

/// Convert XWA to TIE with default options
pub fn convert_xwa_to_tie(src: &xwa::Mission) -> Result<tie::Mission> {
    MissionConverter::with_defaults()
        .xwa_to_tie(src)
        .map(|c| c.mission)
}

/// Convert XvT or BoP to TIE with default options
pub fn convert_xvt_to_tie(src: &xvt::Mission) -> Result<tie::Mission> {
    MissionConverter::with_defaults()
        .xvt_to_tie(src)
        .map(|c| c.mission)
}
