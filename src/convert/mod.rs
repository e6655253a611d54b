// src/convert/mod.rs

//! Cross-platform mission downgrades
//!
//! Leaf to root:
//!
//! - `validate`: capacity and value-ceiling checks
//! - `craft`: craft-type renumbering between XWA and the legacy platforms
//! - `trigger`: the trigger rule, including amount synonyms
//! - `flight_group`, `message`, `globals`, `briefing`: per-record transcribers
//! - `converter`: the entry points that drive all of the above
//!
//! Conversion never mutates its source and never returns a partially built
//! destination.

pub mod briefing;
pub mod converter;
pub mod craft;
pub mod flight_group;
pub mod globals;
pub mod message;
pub mod report;
pub mod trigger;
pub mod validate;

pub use converter::{
    Conversion, ConversionOptions, MissionConverter, convert_xvt_to_tie, convert_xwa_to_tie,
    convert_xwa_to_xvt, rewrite_path,
};
pub use craft::{CraftTypeError, translate};
pub use report::LossReport;
pub use validate::{Downgrade, check_capacity};
