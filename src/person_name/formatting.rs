//! Low-level name piece helpers.
//!
//! This module provides functions for:
//! - Detecting blank name components
//! - Turning a name component into an initial ("David" -> "D.")
//! - Joining name pieces while dropping missing slots

/// Returns true when the name is empty or contains only whitespace.
///
/// # Examples
/// ```
/// use person_name::person_name::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("   "));
/// assert!(!is_blank(" David "));
/// ```
pub fn is_blank(name: &str) -> bool {
    name.trim().is_empty()
}

/// Builds an initial from the first character of a name: the character uppercased,
/// followed by a period. Only the first character is considered; the rest of the
/// name is ignored.
///
/// # Arguments
/// * `name` - The name component to take the initial from
///
/// # Returns
/// * `Option<String>` - The initial (e.g., "J."), or None if the name is empty
///
/// # Examples
/// ```
/// use person_name::person_name::initial_of;
///
/// assert_eq!(initial_of("Joshua"), Some("J.".to_string()));
/// assert_eq!(initial_of("weaver"), Some("W.".to_string()));
/// assert_eq!(initial_of("Äkäslompolo"), Some("Ä.".to_string()));
/// assert_eq!(initial_of(""), None);
/// ```
pub fn initial_of(name: &str) -> Option<String> {
    name.chars().next().map(|c| format!("{}.", c.to_uppercase()))
}

/// Joins name pieces with a delimiter, dropping every absent slot before joining.
///
/// Absent pieces are removed rather than blanked, so a missing middle name never
/// leaves a doubled delimiter behind. Present pieces are kept verbatim, including
/// empty strings.
///
/// # Arguments
/// * `pieces` - Ordered name pieces; `None` marks a slot to remove
/// * `delimiter` - Separator placed between the remaining pieces
///
/// # Examples
/// ```
/// use person_name::person_name::build_name_string;
///
/// let joined = build_name_string([Some("Joshua"), None, Some("Weaver")], " ");
/// assert_eq!(joined, "Joshua Weaver");
///
/// let joined = build_name_string([Some("J."), Some("D."), Some("W.")], "");
/// assert_eq!(joined, "J.D.W.");
/// ```
pub fn build_name_string<I, S>(pieces: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    pieces
        .into_iter()
        .flatten()
        .enumerate()
        .fold(String::new(), |mut joined, (i, piece)| {
            if i > 0 {
                joined.push_str(delimiter);
            }
            joined.push_str(piece.as_ref());
            joined
        })
}
