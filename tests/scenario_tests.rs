#![cfg(feature = "free")]
//! End-to-end scenarios for interpreted programs.
//!
//! Tests cover:
//! - The greeting program against an empty environment
//! - Reading a key that was never written
//! - Later writes overwriting earlier ones
//! - Running against a borrowed data store instead of a map

use effect_injection::StoreError;
use effect_injection::free::{
    Program, get, greeting_program, interpret, interpret_with_store, run_in_memory, set,
};
use effect_injection::greeting::format_greeting;
use effect_injection::store::{DataStore, InMemoryDataStore};
use rstest::rstest;
use std::collections::HashMap;

#[rstest]
fn greeting_against_empty_environment() {
    let program = set("name", "Brandon")
        .flat_map(|()| get("name"))
        .map(|name| format!("Hello {name}"));

    let mut environment: HashMap<String, String> = HashMap::new();
    let result = interpret(program, &mut environment);

    assert_eq!(result, Ok("Hello Brandon".to_string()));
    assert_eq!(
        environment,
        HashMap::from([("name".to_string(), "Brandon".to_string())])
    );
}

#[rstest]
fn greeting_program_matches_hand_built_program() {
    let hand_built = set("name", "Brandon")
        .flat_map(|()| get("name"))
        .map(format_greeting);

    assert_eq!(run_in_memory(greeting_program()), run_in_memory(hand_built));
}

#[rstest]
fn missing_key_fails_with_key_not_found() {
    let mut environment: HashMap<String, String> = HashMap::new();
    let result = interpret(get("missing"), &mut environment);

    assert_eq!(result, Err(StoreError::key_not_found("missing")));
    assert_eq!(result.unwrap_err().to_string(), "key not found: missing");
}

#[rstest]
fn later_set_overwrites_earlier_set() {
    let program = set("a", "1")
        .flat_map(|()| set("a", "2"))
        .flat_map(|()| get("a"));

    let (value, environment) = run_in_memory(program).expect("a is set before it is read");
    assert_eq!(value, "2");
    assert_eq!(environment.get("a").map(String::as_str), Some("2"));
}

#[rstest]
#[case("name", "Brandon")]
#[case("", "")]
#[case("emoji", "\u{1f980}")]
fn set_then_get_round_trips_any_string(#[case] key: &str, #[case] value: &str) {
    let (read, _) = run_in_memory(set(key, value).then(get(key))).expect("key was set");
    assert_eq!(read, value);
}

#[rstest]
fn existing_environment_entries_are_visible() {
    let mut environment = HashMap::from([("name".to_string(), "Ada".to_string())]);
    let result = interpret(get("name").map(format_greeting), &mut environment);
    assert_eq!(result, Ok("Hello Ada".to_string()));
}

#[rstest]
fn program_is_reusable_as_a_description_until_interpreted() {
    fn build() -> Program<String> {
        set("k", "v").then(get("k"))
    }

    let first = run_in_memory(build());
    let second = run_in_memory(build());
    assert_eq!(first, second);
}

#[rstest]
fn interpret_against_data_store() {
    let store = InMemoryDataStore::new();
    let result = interpret_with_store(greeting_program(), &store);

    assert_eq!(result, Ok("Hello Brandon".to_string()));
    assert_eq!(store.get("name"), Ok("Brandon".to_string()));
}

#[rstest]
fn interpret_against_boxed_data_store() {
    let store: Box<dyn DataStore> = Box::new(InMemoryDataStore::new());
    assert_eq!(
        interpret_with_store(get("missing"), store.as_ref()),
        Err(StoreError::key_not_found("missing"))
    );
}
