use super::formatting::{build_name_string, initial_of, is_blank};
use super::name_format::NameFormat;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Required name slots that an initial can be taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamePart {
    First,
    Last,
}

impl fmt::Display for NamePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePart::First => f.write_str("first"),
            NamePart::Last => f.write_str("last"),
        }
    }
}

/// A person's name made of a first name, an optional middle name and a last name.
///
/// Values are immutable once built. Every rendering is computed on demand from the
/// stored parts, so the same instance always yields the same strings.
///
/// A middle name that is missing or contains only whitespace is treated as absent:
/// its slot is dropped from every rendering instead of leaving an empty piece behind.
///
/// # Examples
/// ```
/// use person_name::PersonName;
///
/// let person = PersonName::new("Joshua", Some("David"), "Weaver");
/// assert_eq!(person.full_name(), "Joshua David Weaver");
/// assert_eq!(person.full_name_with_middle_initial(), "Joshua D. Weaver");
/// assert_eq!(person.initials().unwrap(), "J.D.W.");
///
/// let person = PersonName::new("Joshua", None, "Weaver");
/// assert_eq!(person.full_name(), "Joshua Weaver");
/// assert_eq!(person.initials().unwrap(), "J.W.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
    last_name: String,
}

/// All three renderings of a name, as produced by [`PersonName::formatted`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedName {
    pub full_name: String,
    pub full_name_with_middle_initial: String,
    pub initials: String,
}

impl PersonName {
    /// Creates a name from its parts.
    ///
    /// No validation is performed: empty first or last names are stored as given and
    /// only fail later when an initial has to be taken from them. Use
    /// [`PersonName::try_new`] to reject them up front.
    pub fn new(first_name: &str, middle_name: Option<&str>, last_name: &str) -> Self {
        Self {
            first_name: first_name.to_string(),
            middle_name: middle_name.map(str::to_string),
            last_name: last_name.to_string(),
        }
    }

    /// Creates a name, failing immediately if the first or last name is empty.
    ///
    /// # Errors
    /// * `AppError::EmptyNamePart` - If the first or last name is an empty string
    ///
    /// # Examples
    /// ```
    /// use person_name::{AppError, PersonName};
    ///
    /// assert!(PersonName::try_new("Joshua", None, "Weaver").is_ok());
    /// assert!(matches!(
    ///     PersonName::try_new("", None, "Weaver"),
    ///     Err(AppError::EmptyNamePart { .. })
    /// ));
    /// ```
    pub fn try_new(
        first_name: &str,
        middle_name: Option<&str>,
        last_name: &str,
    ) -> Result<Self, AppError> {
        if first_name.is_empty() {
            debug!("Rejecting name with empty first name");
            return Err(AppError::empty_name_part(NamePart::First));
        }
        if last_name.is_empty() {
            debug!("Rejecting name with empty last name");
            return Err(AppError::empty_name_part(NamePart::Last));
        }
        Ok(Self::new(first_name, middle_name, last_name))
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// The middle name exactly as it was given, blank or not.
    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// True if a middle name is present and not blank after trimming.
    pub fn has_middle_name(&self) -> bool {
        self.given_middle_name().is_some()
    }

    /// Returns "First Middle Last", or "First Last" when no middle name is given.
    pub fn full_name(&self) -> String {
        build_name_string(
            [
                Some(self.first_name.as_str()),
                self.middle_slot(),
                Some(self.last_name.as_str()),
            ],
            " ",
        )
    }

    /// Returns "First M. Last", or "First Last" when no middle name is given.
    pub fn full_name_with_middle_initial(&self) -> String {
        let middle_initial = self.middle_initial();
        build_name_string(
            [
                Some(self.first_name.as_str()),
                middle_initial.as_deref(),
                Some(self.last_name.as_str()),
            ],
            " ",
        )
    }

    /// Returns the initials with no separators, e.g. "J.D.W.", or "J.W." when no
    /// middle name is given.
    ///
    /// # Errors
    /// * `AppError::EmptyNamePart` - If the first or last name is an empty string
    pub fn initials(&self) -> Result<String, AppError> {
        let first_initial = initial_of(&self.first_name).ok_or_else(|| {
            debug!("No initial available for empty first name");
            AppError::empty_name_part(NamePart::First)
        })?;
        let last_initial = initial_of(&self.last_name).ok_or_else(|| {
            debug!("No initial available for empty last name");
            AppError::empty_name_part(NamePart::Last)
        })?;

        Ok(build_name_string(
            [Some(first_initial), self.middle_initial(), Some(last_initial)],
            "",
        ))
    }

    /// Renders the name in the requested format.
    pub fn format(&self, format: NameFormat) -> Result<String, AppError> {
        match format {
            NameFormat::Full => Ok(self.full_name()),
            NameFormat::MiddleInitial => Ok(self.full_name_with_middle_initial()),
            NameFormat::Initials => self.initials(),
        }
    }

    /// Renders all three formats at once.
    pub fn formatted(&self) -> Result<FormattedName, AppError> {
        Ok(FormattedName {
            full_name: self.full_name(),
            full_name_with_middle_initial: self.full_name_with_middle_initial(),
            initials: self.initials()?,
        })
    }

    fn given_middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref().filter(|middle| !is_blank(middle))
    }

    /// The middle piece for a rendering; `None` removes the slot before joining.
    fn middle_slot(&self) -> Option<&str> {
        let middle = self.given_middle_name();
        if middle.is_none() {
            debug!("No middle name given, removing middle slot");
        }
        middle
    }

    // Taken from the first character as given, like the first and last initials
    fn middle_initial(&self) -> Option<String> {
        self.middle_slot().and_then(initial_of)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    fn with_middle() -> PersonName {
        PersonName::new("Joshua", Some("David"), "Weaver")
    }

    fn without_middle() -> PersonName {
        PersonName::new("Joshua", None, "Weaver")
    }

    #[test]
    fn test_full_name_with_middle() {
        assert_eq!(with_middle().full_name(), "Joshua David Weaver");
    }

    #[test]
    fn test_full_name_without_middle_has_single_space() {
        let full_name = without_middle().full_name();
        assert_eq!(full_name, "Joshua Weaver");
        assert!(!full_name.contains("  "));
        assert_eq!(full_name.trim(), full_name);
    }

    #[test]
    fn test_full_name_with_middle_initial() {
        assert_eq!(with_middle().full_name_with_middle_initial(), "Joshua D. Weaver");
    }

    #[test]
    fn test_full_name_with_middle_initial_without_middle() {
        let name = without_middle().full_name_with_middle_initial();
        assert_eq!(name, "Joshua Weaver");
        assert!(!name.contains('.'));
        assert!(!name.contains("  "));
    }

    #[test]
    fn test_initials_with_middle() {
        assert_eq!(with_middle().initials().unwrap(), "J.D.W.");
    }

    #[test]
    fn test_initials_without_middle() {
        let initials = without_middle().initials().unwrap();
        assert_eq!(initials, "J.W.");
        assert!(!initials.contains(".."));
    }

    #[test]
    fn test_operations_are_repeatable() {
        let person = with_middle();
        assert_eq!(person.full_name(), person.full_name());
        assert_eq!(
            person.full_name_with_middle_initial(),
            person.full_name_with_middle_initial()
        );
        assert_eq!(person.initials().unwrap(), person.initials().unwrap());
        assert_eq!(person, with_middle());
    }

    #[test]
    fn test_whitespace_middle_name_is_absent() {
        let blank = PersonName::new("Joshua", Some("   "), "Weaver");
        let absent = without_middle();

        assert!(!blank.has_middle_name());
        assert_eq!(blank.full_name(), absent.full_name());
        assert_eq!(
            blank.full_name_with_middle_initial(),
            absent.full_name_with_middle_initial()
        );
        assert_eq!(blank.initials().unwrap(), absent.initials().unwrap());
    }

    #[test]
    fn test_empty_middle_name_is_absent() {
        let person = PersonName::new("Joshua", Some(""), "Weaver");
        assert!(!person.has_middle_name());
        assert_eq!(person.full_name(), "Joshua Weaver");
        assert_eq!(person.initials().unwrap(), "J.W.");
    }

    #[test]
    fn test_initials_capitalize_but_full_name_does_not() {
        let person = PersonName::new("joshua", Some("david"), "weaver");
        assert_eq!(person.initials().unwrap(), "J.D.W.");
        assert_eq!(person.full_name(), "joshua david weaver");
        assert_eq!(person.full_name_with_middle_initial(), "joshua D. weaver");
    }

    #[test]
    fn test_only_first_character_is_capitalized() {
        let person = PersonName::new("jOSHUA", Some("dAVID"), "wEAVER");
        assert_eq!(person.initials().unwrap(), "J.D.W.");
        assert_eq!(person.full_name(), "jOSHUA dAVID wEAVER");
    }

    #[test]
    fn test_leading_whitespace_is_kept_in_every_initial() {
        // Each initial comes from the first character exactly as given
        let person = PersonName::new(" joshua", Some(" david"), " weaver");
        assert_eq!(person.initials().unwrap(), " . . .");
        assert_eq!(person.full_name_with_middle_initial(), " joshua  .  weaver");
        assert_eq!(person.full_name(), " joshua  david  weaver");
    }

    #[test]
    fn test_leading_whitespace_in_first_name_only() {
        let person = PersonName::new(" joshua", Some("david"), "Weaver");
        assert_eq!(person.initials().unwrap(), " .D.W.");
        assert_eq!(person.full_name_with_middle_initial(), " joshua D. Weaver");
    }

    #[test]
    fn test_leading_whitespace_in_last_name_only() {
        let person = PersonName::new("Joshua", None, " weaver");
        assert_eq!(person.initials().unwrap(), "J. .");
        assert_eq!(person.full_name(), "Joshua  weaver");
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture_debug_logs(f: impl FnOnce()) -> String {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = logs.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_removed_middle_slot_is_logged() {
        let output = capture_debug_logs(|| {
            PersonName::new("Joshua", Some("  "), "Weaver").full_name();
        });
        assert!(
            output.contains("removing middle slot"),
            "Expected slot removal to be logged. Output: {output}"
        );
    }

    #[test]
    fn test_given_middle_name_is_not_logged_as_removed() {
        let output = capture_debug_logs(|| {
            let person = with_middle();
            person.full_name();
            person.initials().unwrap();
        });
        assert!(!output.contains("removing middle slot"));
    }

    #[test]
    fn test_initials_empty_first_name_fails() {
        let person = PersonName::new("", Some("David"), "Weaver");
        let error = person.initials().unwrap_err();
        assert!(matches!(
            error,
            AppError::EmptyNamePart {
                part: NamePart::First
            }
        ));
    }

    #[test]
    fn test_initials_empty_last_name_fails() {
        let person = PersonName::new("Joshua", None, "");
        let error = person.initials().unwrap_err();
        assert!(matches!(
            error,
            AppError::EmptyNamePart {
                part: NamePart::Last
            }
        ));
    }

    #[test]
    fn test_empty_parts_are_accepted_by_new() {
        let person = PersonName::new("", None, "Weaver");
        assert_eq!(person.first_name(), "");
        assert_eq!(person.full_name(), " Weaver");
    }

    #[test]
    fn test_try_new_rejects_empty_parts() {
        assert!(matches!(
            PersonName::try_new("", None, "Weaver"),
            Err(AppError::EmptyNamePart {
                part: NamePart::First
            })
        ));
        assert!(matches!(
            PersonName::try_new("Joshua", Some("David"), ""),
            Err(AppError::EmptyNamePart {
                part: NamePart::Last
            })
        ));
    }

    #[test]
    fn test_try_new_accepts_blank_middle() {
        let person = PersonName::try_new("Joshua", Some(" "), "Weaver").unwrap();
        assert_eq!(person.full_name(), "Joshua Weaver");
    }

    #[test]
    fn test_accessors() {
        let person = PersonName::new("Joshua", Some(" "), "Weaver");
        assert_eq!(person.first_name(), "Joshua");
        assert_eq!(person.middle_name(), Some(" "));
        assert_eq!(person.last_name(), "Weaver");
    }

    #[test]
    fn test_format_dispatch() {
        let person = with_middle();
        assert_eq!(person.format(NameFormat::Full).unwrap(), "Joshua David Weaver");
        assert_eq!(
            person.format(NameFormat::MiddleInitial).unwrap(),
            "Joshua D. Weaver"
        );
        assert_eq!(person.format(NameFormat::Initials).unwrap(), "J.D.W.");
    }

    #[test]
    fn test_format_full_tolerates_empty_first_name() {
        let person = PersonName::new("", None, "Weaver");
        assert!(person.format(NameFormat::Full).is_ok());
        assert!(person.format(NameFormat::Initials).is_err());
        assert!(person.formatted().is_err());
    }

    #[test]
    fn test_formatted() {
        let formatted = without_middle().formatted().unwrap();
        assert_eq!(
            formatted,
            FormattedName {
                full_name: "Joshua Weaver".to_string(),
                full_name_with_middle_initial: "Joshua Weaver".to_string(),
                initials: "J.W.".to_string(),
            }
        );
    }

    #[test]
    fn test_display_is_full_name() {
        assert_eq!(with_middle().to_string(), "Joshua David Weaver");
        assert_eq!(without_middle().to_string(), "Joshua Weaver");
    }

    #[test]
    fn test_name_part_display() {
        assert_eq!(NamePart::First.to_string(), "first");
        assert_eq!(NamePart::Last.to_string(), "last");
    }
}
