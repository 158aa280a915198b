//! Programs written against the Free DSL.

use super::dsl::{get, set};
use super::program::Program;
use crate::greeting::{NAME_KEY, NAME_VALUE, format_greeting};

/// Stores the name, reads it back and formats the greeting.
///
/// The program is a plain value: it mentions no store, and nothing happens
/// until an interpreter runs it.
///
/// # Examples
///
/// ```rust
/// use effect_injection::free::{greeting_program, run_in_memory};
///
/// let (greeting, environment) = run_in_memory(greeting_program()).unwrap();
/// assert_eq!(greeting, "Hello Brandon");
/// assert_eq!(environment["name"], "Brandon");
/// ```
pub fn greeting_program() -> Program<String> {
    set(NAME_KEY, NAME_VALUE)
        .flat_map(|()| get(NAME_KEY))
        .map(format_greeting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::free::interpreter::run_in_memory;
    use rstest::rstest;
    use std::collections::HashMap;

    #[rstest]
    fn test_greeting_program_starts_with_set() {
        assert_eq!(greeting_program().to_string(), "Step(Set(name, Brandon))");
    }

    #[rstest]
    fn test_greeting_program_result_and_environment() {
        let (greeting, environment) =
            run_in_memory(greeting_program()).expect("greeting reads the key it sets");
        assert_eq!(greeting, "Hello Brandon");
        assert_eq!(
            environment,
            HashMap::from([("name".to_string(), "Brandon".to_string())])
        );
    }
}
