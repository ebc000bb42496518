//! Person name formatting.
//!
//! This module provides:
//! - `PersonName`: an immutable first/middle/last name value with full name,
//!   middle initial and initials renderings
//! - `NameFormat`: selector for one of those renderings
//! - Low-level helpers for initials and slot-removing joins
//!
//! The module is organized into three components:
//! - `person`: the name value and its renderings
//! - `name_format`: the rendering selector, parsable from config and CLI input
//! - `formatting`: blank detection, initial extraction and piece joining

mod formatting;
mod name_format;
mod person;

pub use formatting::{build_name_string, initial_of, is_blank};
pub use name_format::NameFormat;
pub use person::{FormattedName, NamePart, PersonName};
