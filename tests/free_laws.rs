#![cfg(feature = "free")]
//! Property-based tests for the Functor and Monad laws of `Program`.
//!
//! Two programs are considered equal when interpreting them against equal
//! starting environments gives the same result and leaves the same
//! environment behind.
//!
//! Programs under test are generated from [`Script`]s: an empty script is a
//! bare `Halt`, any other is a chain of reads and writes over a small key
//! space, so some runs succeed and some stop at a missing key.
//!
//! ## Functor Laws
//! - Identity: p.map(|x| x) == p
//! - Composition: p.map(f).map(g) == p.map(|x| g(f(x)))
//!
//! ## Monad Laws
//! - Left Identity: pure(a).flat_map(f) == f(a)
//! - Right Identity: m.flat_map(pure) == m
//! - Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))

use effect_injection::StoreError;
use effect_injection::free::{Program, get, set};
use proptest::prelude::*;
use std::collections::HashMap;

type Outcome<A> = (Result<A, StoreError>, HashMap<String, String>);

fn observe<A>(program: Program<A>, initial: &HashMap<String, String>) -> Outcome<A> {
    let mut environment = initial.clone();
    let result = program.interpret(&mut environment);
    (result, environment)
}

/// One store effect in a generated program.
#[derive(Debug, Clone)]
enum Operation {
    Get(String),
    Set(String, String),
}

/// A recipe for a `Program<String>`.
///
/// The program starts from `seed`, appends every value it reads and returns
/// the accumulated string.
#[derive(Debug, Clone)]
struct Script {
    seed: String,
    operations: Vec<Operation>,
}

impl Script {
    fn build(&self) -> Program<String> {
        self.operations
            .iter()
            .cloned()
            .fold(Program::pure(self.seed.clone()), |program, operation| match operation {
                Operation::Get(key) => program.flat_map(move |accumulated| {
                    get(key).map(move |value| format!("{accumulated}{value}"))
                }),
                Operation::Set(key, value) => program.flat_map(move |accumulated| {
                    set(key, value).map(move |()| accumulated)
                }),
            })
    }
}

fn key_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c"]).prop_map(str::to_string)
}

fn environment_strategy() -> impl Strategy<Value = HashMap<String, String>> {
    prop::collection::hash_map(key_strategy(), "[a-z0-9]{0,4}", 0..3)
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        key_strategy().prop_map(Operation::Get),
        (key_strategy(), "[a-z0-9]{0,4}").prop_map(|(key, value)| Operation::Set(key, value)),
    ]
}

fn script_strategy() -> impl Strategy<Value = Script> {
    ("[a-z]{0,4}", prop::collection::vec(operation_strategy(), 0..8))
        .prop_map(|(seed, operations)| Script { seed, operations })
}

/// An effectful continuation: records its input under `key` and extends it.
fn record(key: &'static str, suffix: &'static str) -> impl Fn(String) -> Program<String> + Clone {
    move |input: String| set(key, input.clone()).map(move |()| format!("{input}{suffix}"))
}

#[test]
fn empty_script_builds_halt() {
    let script = Script {
        seed: "seed".to_string(),
        operations: Vec::new(),
    };
    assert!(matches!(script.build(), Program::Halt(ref value) if value == "seed"));
}

#[test]
fn script_reads_accumulate_in_order() {
    let script = Script {
        seed: ">".to_string(),
        operations: vec![
            Operation::Set("a".to_string(), "1".to_string()),
            Operation::Get("a".to_string()),
            Operation::Set("a".to_string(), "2".to_string()),
            Operation::Get("a".to_string()),
        ],
    };
    let (result, environment) = observe(script.build(), &HashMap::new());
    assert_eq!(result, Ok(">12".to_string()));
    assert_eq!(environment["a"], "2");
}

proptest! {
    #[test]
    fn prop_functor_identity(initial in environment_strategy(), script in script_strategy()) {
        let left = observe(script.build().map(|x| x), &initial);
        let right = observe(script.build(), &initial);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_functor_composition(initial in environment_strategy(), script in script_strategy()) {
        let f = |x: String| x.len();
        let g = |n: usize| n * 2 + 1;

        let left = observe(script.build().map(f).map(g), &initial);
        let right = observe(script.build().map(move |x| g(f(x))), &initial);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_monad_left_identity(initial in environment_strategy(), value in "[a-z]{0,4}") {
        let f = record("a", "!");

        let left = observe(Program::pure(value.clone()).flat_map(f.clone()), &initial);
        let right = observe(f(value), &initial);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_monad_left_identity_with_generated_continuation(
        initial in environment_strategy(),
        value in "[a-z]{0,4}",
        script in script_strategy(),
    ) {
        let continuation =
            move |input: String| script.build().map(move |output| format!("{input}{output}"));

        let left = observe(Program::pure(value.clone()).flat_map(continuation.clone()), &initial);
        let right = observe(continuation(value), &initial);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_monad_right_identity(initial in environment_strategy(), script in script_strategy()) {
        let left = observe(script.build().flat_map(Program::pure), &initial);
        let right = observe(script.build(), &initial);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_monad_associativity(initial in environment_strategy(), script in script_strategy()) {
        let f = record("b", "?");
        let g = record("c", "!");

        let left = observe(script.build().flat_map(f.clone()).flat_map(g.clone()), &initial);
        let right = observe(script.build().flat_map(move |x| f(x).flat_map(g)), &initial);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_missing_key_fails_whatever_the_continuation(
        key in "[a-z]{1,8}",
    ) {
        let program = get(key.clone()).flat_map(record("a", "!")).map(|x| x.len());
        let (result, environment) = observe(program, &HashMap::new());
        prop_assert_eq!(result, Err(StoreError::key_not_found(key)));
        prop_assert!(environment.is_empty());
    }
}
