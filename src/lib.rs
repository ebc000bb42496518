//! Person Name Formatting Library
//!
//! This library turns a person's first, optional middle, and last name into
//! three renderings: the full name, the full name with a middle initial, and
//! the initials.
//!
//! # Examples
//!
//! ```rust
//! use person_name::{AppError, NameFormat, PersonName};
//!
//! fn main() -> Result<(), AppError> {
//!     let person = PersonName::new("Joshua", Some("David"), "Weaver");
//!
//!     assert_eq!(person.full_name(), "Joshua David Weaver");
//!     assert_eq!(person.full_name_with_middle_initial(), "Joshua D. Weaver");
//!     assert_eq!(person.initials()?, "J.D.W.");
//!
//!     // A missing or blank middle name drops out of every rendering
//!     let person = PersonName::new("Joshua", Some("  "), "Weaver");
//!     assert_eq!(person.format(NameFormat::Initials)?, "J.W.");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod person_name;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use person_name::{FormattedName, NameFormat, NamePart, PersonName};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
