// src/convert/flight_group.rs

//! Flight-group field transcriber
//!
//! Populates a freshly constructed destination flight group from a source
//! one. Slots are copied positionally up to the smaller of the two layouts;
//! extra source orders and waypoints are dropped without a note.

use crate::convert::LossReport;
use crate::convert::validate::Downgrade;
use crate::error::{Entity, Field, GoalCategory, Result};
use crate::mission::record::{
    Arrival, Departure, GoalArgument, GoalPair, Order, RichGoal, Target, Waypoint, condition,
    variable_type,
};
use crate::mission::{RichFlightGroup, tie, xvt, xwa};

impl Downgrade<'_> {
    /// Downgrade an XvT or XWA flight group to TIE
    pub fn flight_group_to_tie<F: RichFlightGroup>(
        &self,
        index: usize,
        src: &F,
        report: &mut LossReport,
    ) -> Result<tie::FlightGroup> {
        let entity = Entity::FlightGroup(index);
        let width = self.dest.limits().flight_group_string_length;
        let mut fg = tie::FlightGroup::new();

        fg.name = self.fit_string(src.name(), width, || format!("{} name", entity), report);
        fg.cargo = self.fit_string(src.cargo(), width, || format!("{} cargo", entity), report);
        fg.special_cargo = self.fit_string(
            src.special_cargo(),
            width,
            || format!("{} special cargo", entity),
            report,
        );

        fg.craft_type = self.craft_type(entity, src.craft_type())?;
        fg.number_of_craft = src.number_of_craft();
        fg.number_of_waves = src.number_of_waves();
        fg.special_craft = src.special_craft();
        fg.iff = src.iff();
        fg.ai_rating = src.ai_rating();
        fg.status = src.status();
        fg.warheads = src.warheads();
        fg.beam = src.beam();
        fg.formation = self.formation(entity, src.formation())?;
        fg.orientation = src.orientation();

        if src.player_number() > 1 {
            report.add_dropped(format!(
                "{} multiplayer slot {}, flown by AI",
                entity,
                src.player_number()
            ));
        } else {
            fg.player_craft = src.player_craft();
        }

        if !src.designation().is_empty() {
            report.add_dropped(format!("{} designation \"{}\"", entity, src.designation()));
        }
        if src.roles().iter().any(|r| !r.is_empty()) {
            report.add_dropped(format!("{} roles", entity));
        }
        if src.team() != 0 {
            report.add_dropped(format!("{} team {}", entity, usize::from(src.team()) + 1));
        }
        if src.global_group() != 0 {
            report.add_dropped(format!("{} global group {}", entity, src.global_group()));
        }

        fg.arrival = self.arrival(entity, src.arrival(), report)?;
        fg.departure = self.departure(entity, src.departure(), report)?;
        fg.orders = self.orders(entity, src.orders(), report)?;
        fg.waypoints = self.waypoints(src.waypoints());
        fg.goals = self.collapse_goals(entity, src.goals(), report)?;

        Ok(fg)
    }

    /// Downgrade an XWA flight group to XvT
    pub fn flight_group_to_xvt(
        &self,
        index: usize,
        src: &xwa::FlightGroup,
        report: &mut LossReport,
    ) -> Result<xvt::FlightGroup> {
        let entity = Entity::FlightGroup(index);
        let width = self.dest.limits().flight_group_string_length;
        let mut fg = xvt::FlightGroup::new();

        fg.name = self.fit_string(&src.name, width, || format!("{} name", entity), report);
        fg.designation = self.fit_string(
            &src.designation,
            width,
            || format!("{} designation", entity),
            report,
        );
        fg.cargo = self.fit_string(&src.cargo, width, || format!("{} cargo", entity), report);
        fg.special_cargo = self.fit_string(
            &src.special_cargo,
            width,
            || format!("{} special cargo", entity),
            report,
        );
        for (slot, role) in fg.roles.iter_mut().zip(&src.roles) {
            *slot = role.clone();
        }

        fg.craft_type = self.craft_type(entity, src.craft_type)?;
        fg.number_of_craft = src.number_of_craft;
        fg.number_of_waves = src.number_of_waves;
        fg.special_craft = src.special_craft;
        fg.global_group = src.global_group;
        fg.iff = src.iff;
        fg.team = src.team;
        fg.ai_rating = src.ai_rating;
        fg.status = src.status;
        fg.warheads = src.warheads;
        fg.beam = src.beam;
        fg.formation = self.formation(entity, src.formation)?;
        fg.player_number = src.player_number;
        fg.player_craft = src.player_craft;
        fg.orientation = src.orientation;

        if src.region != 0 {
            report.add_dropped(format!("{} start region {}", entity, usize::from(src.region) + 1));
        }

        fg.arrival = self.arrival(entity, &src.arrival, report)?;
        fg.departure = self.departure(entity, &src.departure, report)?;
        fg.orders = self.orders(entity, &src.orders, report)?;
        fg.waypoints = self.waypoints(&src.waypoints);
        fg.goals = self.rich_goals(entity, &src.goals)?;

        Ok(fg)
    }

    fn arrival(&self, entity: Entity, src: &Arrival, report: &mut LossReport) -> Result<Arrival> {
        let mut arrival = Arrival::new(self.dest);
        let count = arrival.triggers.len();
        for (slot, trigger) in arrival
            .triggers
            .iter_mut()
            .zip(self.triggers(entity, &src.triggers, count)?)
        {
            *slot = trigger;
        }
        for (slot, flag) in arrival.and_or.iter_mut().zip(&src.and_or) {
            *slot = *flag;
        }
        self.note_dropped_triggers(
            &format!("{} arrival", entity),
            &src.triggers,
            &src.and_or,
            count,
            report,
        );
        arrival.delay = src.delay;
        arrival.mothership = src.mothership;
        arrival.alternate_mothership = src.alternate_mothership;
        Ok(arrival)
    }

    fn departure(
        &self,
        entity: Entity,
        src: &Departure,
        report: &mut LossReport,
    ) -> Result<Departure> {
        let mut departure = Departure::new(self.dest);
        let count = departure.triggers.len();
        for (slot, trigger) in departure
            .triggers
            .iter_mut()
            .zip(self.triggers(entity, &src.triggers, count)?)
        {
            *slot = trigger;
        }
        for (slot, flag) in departure.and_or.iter_mut().zip(&src.and_or) {
            *slot = *flag;
        }
        self.note_dropped_triggers(
            &format!("{} departure", entity),
            &src.triggers,
            &src.and_or,
            count,
            report,
        );
        departure.timer = src.timer;
        departure.abort = self.abort(entity, src.abort)?;
        departure.mothership = src.mothership;
        departure.alternate_mothership = src.alternate_mothership;
        Ok(departure)
    }

    fn orders(&self, entity: Entity, src: &[Order], report: &mut LossReport) -> Result<Vec<Order>> {
        let mut orders = vec![Order::default(); self.dest.limits().orders_per_flight_group];
        for (slot, (dest, order)) in orders.iter_mut().zip(src).enumerate() {
            *dest = self.order(entity, slot, order, report)?;
        }
        Ok(orders)
    }

    /// Downgrade a single order
    pub fn order(
        &self,
        entity: Entity,
        slot: usize,
        src: &Order,
        report: &mut LossReport,
    ) -> Result<Order> {
        let mut targets = [Target::NONE; 4];
        for (dest, target) in targets.iter_mut().zip(&src.targets) {
            *dest = self.target(entity, target)?;
        }
        let designation = self.fit_string(
            &src.designation,
            self.dest.limits().order_designation_length,
            || format!("{} order {} designation", entity, slot + 1),
            report,
        );

        Ok(Order {
            command: self.order_command(entity, src.command)?,
            throttle: src.throttle,
            variables: src.variables,
            targets,
            target1_or_target2: src.target1_or_target2,
            target3_or_target4: src.target3_or_target4,
            designation,
        })
    }

    fn target(&self, entity: Entity, target: &Target) -> Result<Target> {
        let target_type = self.check(
            entity,
            Field::OrderTargetType,
            target.target_type(),
            self.dest.limits().max_variable_type,
        )?;
        let value = if target_type == variable_type::CRAFT_TYPE {
            self.craft_type(entity, target.value())?
        } else {
            target.value()
        };
        Target::new(target_type, value)
    }

    fn waypoints(&self, src: &[Waypoint]) -> Vec<Waypoint> {
        let mut waypoints = vec![Waypoint::default(); self.dest.limits().waypoints_per_flight_group];
        for (dest, waypoint) in waypoints.iter_mut().zip(src) {
            *dest = *waypoint;
        }
        waypoints
    }

    /// Collapse per-team goals into TIE's one-pair-per-category block
    ///
    /// Only enabled goals aimed at team 1 survive. The first goal of each
    /// category wins.
    pub fn collapse_goals(
        &self,
        entity: Entity,
        goals: &[RichGoal],
        report: &mut LossReport,
    ) -> Result<tie::FlightGroupGoals> {
        let mut out = tie::FlightGroupGoals::default();
        for (slot, goal) in goals.iter().enumerate() {
            if !goal.enabled || goal.condition == condition::NEVER {
                continue;
            }
            let category = GoalCategory::from(goal.argument);
            if goal.team != 0 {
                report.add_dropped(format!(
                    "{} goal {} ({}) for team {}",
                    entity,
                    slot + 1,
                    category,
                    usize::from(goal.team) + 1
                ));
                continue;
            }
            let dest = match goal.argument {
                GoalArgument::Primary => &mut out.primary,
                GoalArgument::Secondary => &mut out.secondary,
                GoalArgument::Bonus => &mut out.bonus,
                GoalArgument::Prevent => {
                    report.add_dropped(format!("{} goal {} (Prevent)", entity, slot + 1));
                    continue;
                }
            };
            if dest.is_set() {
                report.add_dropped(format!(
                    "{} goal {} ({}), category already set",
                    entity,
                    slot + 1,
                    category
                ));
                continue;
            }
            *dest = GoalPair {
                condition: self.condition(entity, goal.condition)?,
                amount: self.amount(entity, goal.amount)?,
            };
            if goal.argument == GoalArgument::Bonus {
                out.bonus_points = goal.points;
            }
        }
        Ok(out)
    }

    fn rich_goals(&self, entity: Entity, goals: &[RichGoal]) -> Result<Vec<RichGoal>> {
        let mut out = vec![RichGoal::default(); self.dest.limits().goals_per_flight_group];
        for (dest, goal) in out.iter_mut().zip(goals) {
            *dest = RichGoal {
                condition: self.condition(entity, goal.condition)?,
                amount: self.amount(entity, goal.amount)?,
                ..goal.clone()
            };
        }
        Ok(out)
    }
}
