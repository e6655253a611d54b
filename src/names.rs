// src/names.rs

//! Display names for coded mission values
//!
//! Names only ever appear in error text. The converter receives a
//! `NameTable` as an explicit value, and nothing it decides depends on the
//! table's contents.
//!
//! A table can be partially overridden from TOML. Missing sections keep the
//! built-in defaults:
//!
//! ```toml
//! formations = ["Vee", "Finger Four"]
//! legacy_craft = ["None", "X-Wing", "Y-Wing"]
//! ```
//!
//! Codes past the end of a list, or with an empty entry, fall back to a
//! generic label such as `Formation 40`.

use crate::error::Result;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};
use std::path::Path;

const CONDITIONS: &[&str] = &[
    "always (TRUE)",
    "be created",
    "be destroyed",
    "be attacked",
    "be captured",
    "be inspected",
    "be boarded",
    "be docked",
    "be disabled",
    "have survived (exist)",
    "none (FALSE)",
    "---",
    "complete mission",
    "complete Primary mission",
    "fail Primary mission",
    "complete Secondary mission",
    "fail Secondary mission",
    "complete Bonus mission",
    "fail Bonus mission",
    "be dropped off",
    "be reinforced",
    "have 0% shields",
    "have 50% hull",
    "run out of missiles",
    "arrive late",
    // XvT
    "arrive in hyperspace",
    "be picked up",
    "be exchanged",
    "have cargo delivered",
    "be disabled (any)",
    "be attacked by team",
    "be destroyed by team",
    "be captured by team",
    "be inspected by team",
    "have 75% hull",
    "have 25% hull",
    "be reinforced by team",
    "have warheads fired",
    "be hit by a warhead",
    "be identified",
    "lose systems",
    "be boarded by team",
    "fail to arrive",
    "be scrambled",
    "reach final waypoint",
    "complete docking",
    "be rescued",
    // XWA
    "be in region",
    "leave region",
    "have order completed",
    "have special cargo delivered",
    "be ionized",
    "be targeted",
    "be tractored",
    "release cargo",
    "have hull damaged",
    "have shields damaged",
    "enter hyperspace",
    "be docked with",
    "be launched",
    "be recovered",
    "be cloaked",
    "be uncloaked",
    "be shot down by player",
    "be captured by player",
    "be inspected by player",
    "trigger mission timer",
    "have Primary goal complete",
    "have Prevent goal complete",
    "have Secondary goal complete",
    "have Bonus goal complete",
    "be flagged by script",
];

const VARIABLE_TYPES: &[&str] = &[
    "none",
    "Flight Group",
    "Ship type",
    "Ship class",
    "Object type",
    "IFF",
    "Ship orders",
    "Craft when",
    "Global Group",
    "Misc",
    // XvT
    "Team",
    "Player #",
    "Before elapsed time",
    "All except FG",
    "All except ship type",
    "All except ship class",
    "All except object type",
    "All except IFF",
    "All except global group",
    "All except team",
    "All except player #",
    "Global unit",
    "All except global unit",
    "Global cargo",
    "All except global cargo",
    "Message #",
    // XWA
    "Region",
    "All except region",
    "Mission elapsed",
];

const AMOUNTS: &[&str] = &[
    "100% of",
    "75% of",
    "50% of",
    "25% of",
    "At least one of",
    "All but one of",
    "All special craft in",
    "All non-special craft in",
    "All non-player craft in",
    "Player's craft in",
    "100% of first wave",
    "75% of first wave",
    "50% of first wave",
    "25% of first wave",
    "At least one of first wave",
    "All but one of first wave",
    // XvT
    "66% of",
    "33% of",
    "Each craft",
    "Each special craft",
    // XWA
    "Each non-special craft",
    "All player craft in",
];

const FORMATIONS: &[&str] = &[
    "Vic",
    "Finger Four",
    "Line Astern",
    "Line Abreast",
    "Echelon Right",
    "Echelon Left",
    "Double Astern",
    "Diamond",
    "Stack",
    "High X",
    "Vic Abreast",
    "High Vic",
    "Reverse High Vic",
    // XvT
    "Reverse Line Astern",
    "Stacked Low",
    "Abreast Right",
    "Abreast Left",
    "Wing Forward",
    "Wing Back",
    "Line Astern Up",
    "Line Astern Down",
    "Abreast V",
    "Abreast Inverted V",
    "Double Astern Wide",
    "Double Abreast",
    "Ring",
    "Swarm",
    "Wedge",
    "Broadside",
    "Arrow",
    "Reverse Arrow",
    "Box",
    "Column",
    // XWA
    "Random",
    "Escort",
];

const ABORTS: &[&str] = &[
    "never",
    "0% shields",
    "(unused)",
    "0% equipment",
    "50% hull",
    "attacked",
];

const ORDERS: &[&str] = &[
    "Hold Steady",
    "Go Home",
    "Circle",
    "Circle and Evade",
    "Rendezvous",
    "Disabled",
    "Awaiting Boarding",
    "Attack",
    "Attack Escorts",
    "Protect",
    "Escort",
    "Disable",
    "Board to Give Cargo",
    "Board to Take Cargo",
    "Board to Exchange Cargo",
    "Board to Capture",
    "Board to Destroy",
    "Pick Up",
    "Drop Off",
    "Wait",
    "SS Wait",
    "SS Patrol Loop",
    "SS Await Return",
    "SS Launch",
    "SS Protect",
    "SS Wait (Boarding)",
    "SS Patrol and Attack",
    "SS Patrol and Disable",
    "SS Hold Station",
    "SS Go Home",
    "SS Wait (Docking)",
    "SS Board",
    "Board to Repair",
    "Hold Station",
    "Hold Steady (Warp)",
    "SS Hold Steady",
    "Self Destruct",
    "Kamikaze",
    "SS Disabled",
    // XvT
    "Deliver",
    // XWA
    "Drop Mines",
    "Follow Path",
    "Release Cargo",
    "Enter Hyperspace",
    "Load Cargo",
];

const LEGACY_CRAFT: &[&str] = &[
    "None",
    "X-wing",
    "Y-wing",
    "A-wing",
    "B-wing",
    "TIE Fighter",
    "TIE Interceptor",
    "TIE Bomber",
    "TIE Advanced",
    "TIE Defender",
    "Shipyard",
    "Repair Yard",
    "Missile Boat",
    "T-wing",
    "Z-95 Headhunter",
    "R-41 Starchaser",
    "Assault Gunboat",
    "Shuttle",
    "Escort Shuttle",
    "System Patrol Craft",
    "Scout Craft",
    "Stormtrooper Transport",
    "Assault Transport",
    "Escort Transport",
    "Tug",
    "Combat Utility Vehicle",
    "Container A",
    "Container B",
    "Container C",
    "Container D",
    "Heavy Lifter",
    "Platform/Turret",
    "Bulk Freighter",
    "Cargo Ferry",
    "Modular Conveyor",
    "Container Transport",
    "Medium Transport",
    "Murrian Transport",
    "Corellian Transport",
    "Mobile Siege Cannon",
    "Corellian Corvette",
    "Modified Corvette",
    "Nebulon B Frigate",
    "Modified Frigate",
    "C-3 Passenger Liner",
    "Carrack Cruiser",
    "Strike Cruiser",
    "Escort Carrier",
    "Dreadnaught",
    "Calamari Cruiser",
    "Light Calamari Cruiser",
    "Interdictor Cruiser",
    "Victory-class Star Destroyer",
    "Imperator-class Star Destroyer",
    "Executor-class Star Destroyer",
    "Container E",
    "Container F",
    "Container G",
    "Container H",
    "Cargo Canister",
    "Platform A",
    "Platform B",
    "Platform C",
    "Platform D",
    "Platform E",
    "Platform F",
    "Asteroid R&D Station",
    "Asteroid Laser Battery",
    "Asteroid Warhead Battery",
    "Satellite 1",
    "Satellite 2",
    "Satellite 3",
    "Satellite 4",
    "Satellite 5",
    "Mine 1",
    "Mine 2",
    "Mine 3",
    "Mine 4",
    "Gun Emplacement",
    "Probe A",
    "Probe B",
    "Probe C",
    "Nav Buoy 1",
    "Nav Buoy 2",
    "Asteroid Field",
    "Planet",
    "Backdrop",
    "Comm Satellite",
    "Deep Space Beacon",
    "Star Destroyer II",
    "Victory II",
    "Pulsar Skate",
    "Asteroid Hangar",
];

/// XWA codes whose names differ from the legacy slot of the same number
const XWA_CRAFT_OVERRIDES: &[(u8, &str)] = &[
    (10, "(reserved)"),
    (11, "(reserved)"),
    (31, "(reserved)"),
    (39, "Millennium Falcon"),
    (71, "Satellite 3 (Imperial)"),
    (77, "Platform/Turret"),
    (84, "Hyperspace Buoy"),
    (87, "Rendezvous Buoy"),
    (88, "Cargo Canister"),
    (89, "Shipyard"),
    (90, "Repair Yard"),
    (91, "Mobile Siege Cannon"),
    (227, "Dreadnaught (refit)"),
    (228, "Interdictor II"),
    (229, "Victory II"),
];

const XWA_CRAFT_TABLE_LEN: usize = 233;

/// Lookup tables mapping coded values to display names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameTable {
    pub conditions: Vec<String>,
    pub variable_types: Vec<String>,
    pub amounts: Vec<String>,
    pub formations: Vec<String>,
    pub aborts: Vec<String>,
    pub orders: Vec<String>,
    /// Craft names in TIE/XvT/BoP numbering
    pub legacy_craft: Vec<String>,
    /// Craft names in XWA numbering
    pub xwa_craft: Vec<String>,
}

impl Default for NameTable {
    fn default() -> Self {
        Self {
            conditions: to_owned(CONDITIONS),
            variable_types: to_owned(VARIABLE_TYPES),
            amounts: to_owned(AMOUNTS),
            formations: to_owned(FORMATIONS),
            aborts: to_owned(ABORTS),
            orders: to_owned(ORDERS),
            legacy_craft: to_owned(LEGACY_CRAFT),
            xwa_craft: default_xwa_craft(),
        }
    }
}

impl NameTable {
    /// Parse a (possibly partial) table from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a (possibly partial) table from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn condition(&self, code: u8) -> String {
        lookup(&self.conditions, code, "Condition")
    }

    pub fn variable_type(&self, code: u8) -> String {
        lookup(&self.variable_types, code, "Variable type")
    }

    pub fn amount(&self, code: u8) -> String {
        lookup(&self.amounts, code, "Amount")
    }

    pub fn formation(&self, code: u8) -> String {
        lookup(&self.formations, code, "Formation")
    }

    pub fn abort(&self, code: u8) -> String {
        lookup(&self.aborts, code, "Abort")
    }

    pub fn order(&self, code: u8) -> String {
        lookup(&self.orders, code, "Order")
    }

    /// Craft name for a code in the given platform's numbering
    pub fn craft_type(&self, platform: Platform, code: u8) -> String {
        if platform.uses_legacy_craft_numbering() {
            lookup(&self.legacy_craft, code, "Craft type")
        } else {
            lookup(&self.xwa_craft, code, "Craft type")
        }
    }
}

fn lookup(names: &[String], code: u8, kind: &str) -> String {
    match names.get(usize::from(code)) {
        Some(name) if !name.is_empty() => name.clone(),
        _ => format!("{} {}", kind, code),
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn default_xwa_craft() -> Vec<String> {
    let mut names = vec![String::new(); XWA_CRAFT_TABLE_LEN];
    // The low slots share legacy names; later XWA additions are unnamed by default
    for (slot, name) in names.iter_mut().zip(LEGACY_CRAFT.iter().take(77)) {
        *slot = name.to_string();
    }
    for (code, name) in XWA_CRAFT_OVERRIDES {
        names[usize::from(*code)] = name.to_string();
    }
    names
}
