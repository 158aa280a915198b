//! The greeting computation shared by every wiring style.
//!
//! Each module realizes the same program: store [`NAME_VALUE`] under
//! [`NAME_KEY`], read it back, and format it with [`format_greeting`].

/// Key under which the greeted name is stored.
pub const NAME_KEY: &str = "name";

/// Name written by the greeting programs.
pub const NAME_VALUE: &str = "Brandon";

/// Formats the greeting for a name.
///
/// # Examples
///
/// ```rust
/// use effect_injection::greeting::format_greeting;
///
/// assert_eq!(format_greeting("Brandon".to_string()), "Hello Brandon");
/// ```
#[must_use]
pub fn format_greeting(name: String) -> String {
    format!("Hello {name}")
}
