// src/mission/mod.rs

//! In-memory mission graphs
//!
//! One module per platform family plus the records they share. A mission
//! exclusively owns its flight groups, messages, goals and briefings.
//! Cross-references between flight groups (motherships, trigger variables,
//! order targets) are plain indices.

pub mod record;
pub mod tie;
pub mod xvt;
pub mod xwa;

use record::{Arrival, Departure, Order, Orientation, RichGoal, Waypoint};

/// Read access to the flight-group fields XvT and XWA have in common
///
/// Lets a single transcriber downgrade either rich layout to TIE.
pub trait RichFlightGroup {
    fn name(&self) -> &str;
    fn designation(&self) -> &str;
    fn cargo(&self) -> &str;
    fn special_cargo(&self) -> &str;
    fn roles(&self) -> &[String];
    fn craft_type(&self) -> u8;
    fn number_of_craft(&self) -> u8;
    fn number_of_waves(&self) -> u8;
    fn special_craft(&self) -> u8;
    fn global_group(&self) -> u8;
    fn iff(&self) -> u8;
    fn team(&self) -> u8;
    fn ai_rating(&self) -> u8;
    fn status(&self) -> u8;
    fn warheads(&self) -> u8;
    fn beam(&self) -> u8;
    fn formation(&self) -> u8;
    fn player_number(&self) -> u8;
    fn player_craft(&self) -> u8;
    fn orientation(&self) -> Orientation;
    fn arrival(&self) -> &Arrival;
    fn departure(&self) -> &Departure;
    fn orders(&self) -> &[Order];
    fn waypoints(&self) -> &[Waypoint];
    fn goals(&self) -> &[RichGoal];
}

macro_rules! impl_rich_flight_group {
    ($ty:ty) => {
        impl RichFlightGroup for $ty {
            fn name(&self) -> &str {
                &self.name
            }
            fn designation(&self) -> &str {
                &self.designation
            }
            fn cargo(&self) -> &str {
                &self.cargo
            }
            fn special_cargo(&self) -> &str {
                &self.special_cargo
            }
            fn roles(&self) -> &[String] {
                &self.roles
            }
            fn craft_type(&self) -> u8 {
                self.craft_type
            }
            fn number_of_craft(&self) -> u8 {
                self.number_of_craft
            }
            fn number_of_waves(&self) -> u8 {
                self.number_of_waves
            }
            fn special_craft(&self) -> u8 {
                self.special_craft
            }
            fn global_group(&self) -> u8 {
                self.global_group
            }
            fn iff(&self) -> u8 {
                self.iff
            }
            fn team(&self) -> u8 {
                self.team
            }
            fn ai_rating(&self) -> u8 {
                self.ai_rating
            }
            fn status(&self) -> u8 {
                self.status
            }
            fn warheads(&self) -> u8 {
                self.warheads
            }
            fn beam(&self) -> u8 {
                self.beam
            }
            fn formation(&self) -> u8 {
                self.formation
            }
            fn player_number(&self) -> u8 {
                self.player_number
            }
            fn player_craft(&self) -> u8 {
                self.player_craft
            }
            fn orientation(&self) -> Orientation {
                self.orientation
            }
            fn arrival(&self) -> &Arrival {
                &self.arrival
            }
            fn departure(&self) -> &Departure {
                &self.departure
            }
            fn orders(&self) -> &[Order] {
                &self.orders
            }
            fn waypoints(&self) -> &[Waypoint] {
                &self.waypoints
            }
            fn goals(&self) -> &[RichGoal] {
                &self.goals
            }
        }
    };
}

impl_rich_flight_group!(xvt::FlightGroup);
impl_rich_flight_group!(xwa::FlightGroup);
