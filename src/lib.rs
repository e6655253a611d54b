// src/lib.rs

//! Mission Convert
//!
//! Downgrades space-combat mission graphs between four platforms: TIE, XvT,
//! BoP (the XvT expansion) and XWA.
//!
//! # Architecture
//!
//! - Structured records: every on-disk slot is a named field, never a byte offset
//! - Explicit downgrades: each direction is a named function returning `Result`
//! - All-or-nothing: the first incompatible value aborts the conversion
//! - Documented loss: anything dropped on purpose lands in a `LossReport`
//!
//! ```no_run
//! use mission_convert::mission::xwa;
//! use mission_convert::MissionConverter;
//!
//! let source = xwa::Mission::new();
//! let converted = MissionConverter::with_defaults().xwa_to_tie(&source)?;
//! converted.loss_report.print_summary("TIE");
//! # Ok::<(), mission_convert::Error>(())
//! ```

pub mod convert;
mod error;
pub mod mission;
pub mod names;
pub mod platform;

pub use convert::{
    Conversion, ConversionOptions, CraftTypeError, LossReport, MissionConverter,
    convert_xvt_to_tie, convert_xwa_to_tie, convert_xwa_to_xvt,
};
pub use error::{Capacity, Entity, Error, Field, GoalCategory, Result};
pub use names::NameTable;
pub use platform::{Platform, PlatformLimits};
