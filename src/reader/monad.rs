//! The Reader monad: computations that read an environment.
//!
//! A `Reader<R, A>` wraps a function `R -> A`. Composing readers threads the
//! same environment through every step without any step naming it, which is
//! what makes Reader a dependency injection technique: the dependency shows up
//! only once, when the composed reader is finally [`run`](Reader::run).
//!
//! # Laws
//!
//! ## Functor Laws
//!
//! - Identity: `reader.fmap(|x| x) == reader`
//! - Composition: `reader.fmap(f).fmap(g) == reader.fmap(|x| g(f(x)))`
//!
//! ## Monad Laws
//!
//! - Left Identity: `Reader::pure(a).flat_map(f) == f(a)`
//! - Right Identity: `m.flat_map(Reader::pure) == m`
//! - Associativity: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
//!
//! Two readers are equal when they produce equal results for every
//! environment.

use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

/// A computation that produces an `A` from an environment of type `R`.
///
/// # Examples
///
/// ```rust
/// use effect_injection::reader::Reader;
///
/// let port: Reader<u16, u16> = Reader::ask();
/// let address = port.fmap(|port| format!("localhost:{port}"));
///
/// assert_eq!(address.run(8080), "localhost:8080");
/// ```
pub struct Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    run_function: Rc<dyn Fn(R) -> A>,
}

impl<R, A> Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    /// Creates a Reader from a function of the environment.
    pub fn new<F>(function: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self {
            run_function: Rc::new(function),
        }
    }

    /// Runs the computation with the given environment.
    ///
    /// A Reader can be run any number of times.
    pub fn run(&self, environment: R) -> A {
        (self.run_function)(environment)
    }

    /// Creates a Reader that ignores the environment and returns `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_injection::reader::Reader;
    ///
    /// let reader: Reader<i32, &str> = Reader::pure("constant");
    /// assert_eq!(reader.run(0), "constant");
    /// ```
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Maps a function over the result (Functor `fmap`).
    pub fn fmap<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let original_function = self.run_function;
        Reader::new(move |environment| function((original_function)(environment)))
    }

    /// Alias for `fmap`.
    pub fn map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.fmap(function)
    }

    /// Chains a Reader that depends on this Reader's result (Monad `bind`).
    ///
    /// Both readers see the same environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_injection::reader::Reader;
    ///
    /// let reader: Reader<i32, i32> = Reader::ask();
    /// let chained = reader.flat_map(|value| Reader::new(move |environment| value + environment));
    /// assert_eq!(chained.run(10), 20);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        let original_function = self.run_function;
        Reader::new(move |environment: R| {
            let value = (original_function)(environment.clone());
            function(value).run(environment)
        })
    }

    /// Alias for `flat_map`.
    pub fn and_then<B, F>(self, function: F) -> Reader<R, B>
    where
        F: Fn(A) -> Reader<R, B> + 'static,
        B: 'static,
        R: Clone,
    {
        self.flat_map(function)
    }

    /// Sequences two Readers, discarding the first result.
    #[must_use]
    pub fn then<B>(self, next: Reader<R, B>) -> Reader<R, B>
    where
        B: 'static,
        R: Clone,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Creates a Reader that projects a value out of the environment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use effect_injection::reader::Reader;
    ///
    /// let length: Reader<String, usize> = Reader::asks(|environment: String| environment.len());
    /// assert_eq!(length.run("Brandon".to_string()), 7);
    /// ```
    pub fn asks<F>(projection: F) -> Self
    where
        F: Fn(R) -> A + 'static,
    {
        Self::new(projection)
    }

    /// Runs `computation` with an environment transformed by `modifier`.
    pub fn local<F>(modifier: F, computation: Self) -> Self
    where
        F: Fn(R) -> R + 'static,
    {
        let computation_function = computation.run_function;
        Self::new(move |environment| (computation_function)(modifier(environment)))
    }
}

impl<Env> Reader<Env, Env>
where
    Env: Clone + 'static,
{
    /// Creates a Reader that returns the environment itself.
    #[must_use]
    pub fn ask() -> Self {
        Self::new(|environment| environment)
    }
}

impl<R, A> Clone for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn clone(&self) -> Self {
        Self {
            run_function: Rc::clone(&self.run_function),
        }
    }
}

impl<R, A> Display for Reader<R, A>
where
    R: 'static,
    A: 'static,
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "<Reader>")
    }
}

static_assertions::assert_not_impl_any!(Reader<i32, i32>: Send, Sync);
