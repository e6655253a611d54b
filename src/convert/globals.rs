// src/convert/globals.rs

//! Mission-wide goals and team/IFF transcription
//!
//! TIE has one global goal block and no teams, so only team 1's globals
//! survive a downgrade to TIE. Its primary category maps to TIE primary and
//! its secondary category to TIE bonus. TIE's own secondary category has no
//! source and stays "never".

use crate::convert::LossReport;
use crate::convert::validate::Downgrade;
use crate::error::{Entity, GoalCategory, Result};
use crate::mission::record::{GlobalGoal, Globals};
use crate::mission::tie::{self, IFF_SLOTS};
use crate::mission::{xvt, xwa};

impl Downgrade<'_> {
    /// Collapse per-team globals into TIE's global goal block
    pub fn globals_to_tie(
        &self,
        globals: &[Globals],
        report: &mut LossReport,
    ) -> Result<tie::GlobalGoals> {
        let mut out = tie::GlobalGoals::default();
        let Some(team_one) = globals.first() else {
            return Ok(out);
        };

        out.primary = self.tie_global(0, GoalCategory::Primary, &team_one.primary, report)?;
        out.bonus = self.tie_global(0, GoalCategory::Secondary, &team_one.secondary, report)?;
        if team_one.prevent.is_set() {
            report.add_dropped(Entity::GlobalGoal {
                team: 0,
                category: GoalCategory::Prevent,
            }
            .to_string());
        }

        for (team, team_globals) in globals.iter().enumerate().skip(1) {
            for (category, goal) in team_globals.categories() {
                if goal.is_set() {
                    report.add_dropped(Entity::GlobalGoal { team, category }.to_string());
                }
            }
        }
        Ok(out)
    }

    fn tie_global(
        &self,
        team: usize,
        category: GoalCategory,
        src: &GlobalGoal,
        report: &mut LossReport,
    ) -> Result<tie::GlobalGoal> {
        let entity = Entity::GlobalGoal { team, category };
        let mut out = tie::GlobalGoal::default();
        for (slot, trigger) in out.triggers.iter_mut().zip(&src.triggers) {
            *slot = self.trigger(entity, trigger)?;
        }
        out.trigger_or = src.and_or[0];
        self.note_dropped_triggers(
            &entity.to_string(),
            &src.triggers,
            &src.and_or,
            out.triggers.len(),
            report,
        );
        Ok(out)
    }

    /// Copy every team's globals, validating each trigger
    pub fn globals_to_xvt(&self, globals: &[Globals]) -> Result<Vec<Globals>> {
        let mut out = vec![Globals::default(); self.dest.limits().teams];
        for (team, (dest, src)) in out.iter_mut().zip(globals).enumerate() {
            dest.primary = self.rich_global(team, GoalCategory::Primary, &src.primary)?;
            dest.prevent = self.rich_global(team, GoalCategory::Prevent, &src.prevent)?;
            dest.secondary = self.rich_global(team, GoalCategory::Secondary, &src.secondary)?;
        }
        Ok(out)
    }

    fn rich_global(&self, team: usize, category: GoalCategory, src: &GlobalGoal) -> Result<GlobalGoal> {
        let entity = Entity::GlobalGoal { team, category };
        let mut out = src.clone();
        for (dest, trigger) in out.triggers.iter_mut().zip(&src.triggers) {
            *dest = self.trigger(entity, trigger)?;
        }
        Ok(out)
    }
}

/// TIE IFF slots and end-of-mission text derived from teams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TieIff {
    pub names: Vec<String>,
    pub hostile: Vec<bool>,
    pub end_of_mission_messages: Vec<String>,
}

impl TieIff {
    fn new() -> Self {
        Self {
            names: vec![String::new(); IFF_SLOTS],
            hostile: vec![false; IFF_SLOTS],
            end_of_mission_messages: vec![String::new(); tie::END_OF_MISSION_MESSAGES],
        }
    }

    /// Fill slots from team names and a hostility predicate on team 1
    fn fill<'t>(
        &mut self,
        downgrade: &Downgrade<'_>,
        names: impl Iterator<Item = &'t str>,
        hostile: impl Fn(usize) -> bool,
        report: &mut LossReport,
    ) {
        let width = downgrade.dest.limits().team_name_length;
        for (slot, name) in names.enumerate().take(IFF_SLOTS) {
            self.hostile[slot] = hostile(slot);
            if slot >= tie::FIXED_IFF_NAMES.len() {
                self.names[slot] =
                    downgrade.fit_string(name, width, || format!("IFF {} name", slot), report);
            }
        }
    }

    fn end_messages(&mut self, messages: &[String]) {
        for (dest, src) in self.end_of_mission_messages.iter_mut().zip(messages) {
            dest.clone_from(src);
        }
    }
}

impl Downgrade<'_> {
    /// Collapse XvT teams into TIE IFF slots
    pub fn xvt_teams_to_tie(&self, teams: &[xvt::Team], report: &mut LossReport) -> TieIff {
        let mut iff = TieIff::new();
        let allied = teams.first().map(|t| t.allied_with).unwrap_or([true; 10]);
        iff.fill(
            self,
            teams.iter().map(|t| t.name.as_str()),
            |slot| !allied[slot],
            report,
        );
        if let Some(team_one) = teams.first() {
            iff.end_messages(&team_one.end_of_mission_messages);
        }
        self.note_extra_teams(teams.iter().map(|t| t.name.as_str()), report);
        iff
    }

    /// Collapse XWA teams into TIE IFF slots; neutral teams are not hostile
    pub fn xwa_teams_to_tie(&self, teams: &[xwa::Team], report: &mut LossReport) -> TieIff {
        let mut iff = TieIff::new();
        let allegiances = teams
            .first()
            .map(|t| t.allegiances)
            .unwrap_or([xwa::Allegiance::Friendly; 10]);
        iff.fill(
            self,
            teams.iter().map(|t| t.name.as_str()),
            |slot| allegiances[slot] == xwa::Allegiance::Hostile,
            report,
        );
        if let Some(team_one) = teams.first() {
            iff.end_messages(&team_one.end_of_mission_messages);
        }
        self.note_extra_teams(teams.iter().map(|t| t.name.as_str()), report);
        iff
    }

    fn note_extra_teams<'t>(&self, names: impl Iterator<Item = &'t str>, report: &mut LossReport) {
        for (team, name) in names.enumerate().skip(IFF_SLOTS) {
            if !name.is_empty() {
                report.add_dropped(format!("Team {} \"{}\", TIE has {} IFF slots", team + 1, name, IFF_SLOTS));
            }
        }
    }

    /// XWA teams to XvT: allied exactly where XWA is friendly
    pub fn teams_to_xvt(&self, teams: &[xwa::Team], report: &mut LossReport) -> Vec<xvt::Team> {
        let width = self.dest.limits().team_name_length;
        let mut out: Vec<xvt::Team> = (0..self.dest.limits().teams).map(xvt::Team::new).collect();
        for (index, (dest, src)) in out.iter_mut().zip(teams).enumerate() {
            dest.name = self.fit_string(&src.name, width, || format!("Team {} name", index + 1), report);
            for (allied, allegiance) in dest.allied_with.iter_mut().zip(&src.allegiances) {
                *allied = *allegiance == xwa::Allegiance::Friendly;
            }
            for (line, text) in dest.end_of_mission_messages.iter_mut().zip(&src.end_of_mission_messages) {
                line.clone_from(text);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::record::{Trigger, amount, condition, variable_type};
    use crate::names::NameTable;
    use crate::platform::Platform;

    fn goal(trigger: Trigger) -> GlobalGoal {
        let mut goal = GlobalGoal::default();
        goal.triggers[0] = trigger;
        goal
    }

    #[test]
    fn test_secondary_becomes_bonus_and_prevent_is_dropped() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xwa, Platform::Tie, &names);
        let mut report = LossReport::new();
        let mut globals = vec![Globals::default(); 10];
        globals[0].secondary = goal(Trigger::new(
            condition::DESTROYED,
            variable_type::FLIGHT_GROUP,
            0,
            amount::EACH_SPECIAL,
        ));
        globals[0].prevent = goal(Trigger::new(condition::DESTROYED, variable_type::FLIGHT_GROUP, 1, 0));

        let out = downgrade.globals_to_tie(&globals, &mut report).unwrap();
        assert_eq!(out.bonus.triggers[0].condition, condition::DESTROYED);
        assert_eq!(out.bonus.triggers[0].amount, amount::ALL_SPECIAL);
        assert!(out.secondary.triggers.iter().all(Trigger::is_never));
        assert!(out.primary.triggers.iter().all(Trigger::is_never));
        assert_eq!(report.dropped, vec!["Team 1 Prevent global goal".to_string()]);
    }

    #[test]
    fn test_primary_goal_on_third_trigger_is_reported() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xwa, Platform::Tie, &names);
        let mut report = LossReport::new();
        let mut globals = vec![Globals::default(); 10];
        globals[0].primary.triggers[2] =
            Trigger::new(condition::DESTROYED, variable_type::FLIGHT_GROUP, 0, 0);

        let out = downgrade.globals_to_tie(&globals, &mut report).unwrap();
        assert!(out.primary.triggers.iter().all(Trigger::is_never));
        assert_eq!(
            report.dropped,
            vec![
                "Team 1 Primary global goal trigger 3".to_string(),
                "Team 1 Primary global goal trigger combinator 2 (AND)".to_string(),
                "Team 1 Primary global goal trigger combinator 3 (AND)".to_string(),
            ]
        );
    }

    #[test]
    fn test_other_team_globals_dropped() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xvt, Platform::Tie, &names);
        let mut report = LossReport::new();
        let mut globals = vec![Globals::default(); 10];
        globals[2].primary = goal(Trigger::new(condition::CREATED, 0, 0, 0));

        downgrade.globals_to_tie(&globals, &mut report).unwrap();
        assert_eq!(report.dropped, vec!["Team 3 Primary global goal".to_string()]);
    }

    #[test]
    fn test_globals_to_xvt_copies_every_team() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xwa, Platform::Xvt, &names);
        let mut globals = vec![Globals::default(); 10];
        globals[9].secondary = goal(Trigger::new(condition::CAPTURED, 0, 0, amount::PERCENT_33));
        globals[9].secondary.points = -150;
        globals[9].secondary.and_or = [true, true, false];

        let out = downgrade.globals_to_xvt(&globals).unwrap();
        assert_eq!(out.len(), 10);
        assert_eq!(out[9].secondary.triggers[0].amount, amount::PERCENT_33);
        assert_eq!(out[9].secondary.points, -150);
        assert_eq!(out[9].secondary.and_or, [true, true, false]);
    }

    #[test]
    fn test_xwa_neutral_team_is_not_hostile() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xwa, Platform::Tie, &names);
        let mut report = LossReport::new();
        let mut teams: Vec<xwa::Team> = (0..10).map(xwa::Team::new).collect();
        teams[0].allegiances[2] = xwa::Allegiance::Neutral;
        teams[0].allegiances[3] = xwa::Allegiance::Friendly;
        teams[2].name = "Smugglers".to_string();
        teams[0].end_of_mission_messages[0] = "Well done".to_string();

        let iff = downgrade.xwa_teams_to_tie(&teams, &mut report);
        assert_eq!(iff.hostile, vec![false, true, false, false, true, true]);
        assert_eq!(iff.names[2], "Smugglers");
        assert_eq!(iff.end_of_mission_messages[0], "Well done");
    }

    #[test]
    fn test_xvt_allies_are_not_hostile() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xvt, Platform::Tie, &names);
        let mut report = LossReport::new();
        let mut teams: Vec<xvt::Team> = (0..10).map(xvt::Team::new).collect();
        teams[0].allied_with[4] = true;
        teams[7].name = "Pirates".to_string();

        let iff = downgrade.xvt_teams_to_tie(&teams, &mut report);
        assert_eq!(iff.hostile, vec![false, true, true, true, false, true]);
        assert_eq!(report.dropped.len(), 1);
    }

    #[test]
    fn test_xwa_teams_to_xvt_alliances() {
        let names = NameTable::default();
        let downgrade = Downgrade::new(Platform::Xwa, Platform::Xvt, &names);
        let mut report = LossReport::new();
        let mut teams: Vec<xwa::Team> = (0..10).map(xwa::Team::new).collect();
        teams[1].allegiances[0] = xwa::Allegiance::Neutral;
        teams[1].allegiances[5] = xwa::Allegiance::Friendly;

        let out = downgrade.teams_to_xvt(&teams, &mut report);
        assert!(!out[1].allied_with[0]);
        assert!(out[1].allied_with[1]);
        assert!(out[1].allied_with[5]);
    }
}
