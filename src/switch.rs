//! # Switch expressions
//!
//! A switch is built in two phases. [`SwitchHead`] closes over the subject and
//! opens the first case; [`SwitchBody`] collects further cases and resolves to
//! the result of the first case whose predicate matches, or to a default.
//!
//! ```
//! use switch_expr::prelude::*;
//!
//! let name = switch(2)
//!     .case(equal_to(1), "one")
//!     .case(equal_to(2), "two")
//!     .default("other");
//! assert_eq!(name, "two");
//! ```
//!
//! Cases are tested in the order they were added. Once a predicate matches no
//! later predicate is tested and only the matching producer runs. Panics from
//! predicates or producers are not caught, and `Result` values produced by a
//! case are returned untouched.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::core::{Predicate, Producer};
use super::error::{SwitchError, SwitchResult};

/// Holds the subject until the first case is declared.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchHead<S> {
    subject: S,
}

impl<S> SwitchHead<S> {
    pub fn new(subject: S) -> Self {
        Self { subject }
    }

    pub fn into_subject(self) -> S {
        self.subject
    }

    /// Opens a chain that takes the subject over, so `S` need not be `Clone`.
    pub fn into_case<'a, P, R>(self, predicate: P, value: R) -> SwitchBody<'a, S, R>
    where
        P: Predicate<S> + 'a,
    {
        self.into_case_producer(predicate, Producer::constant(value))
    }

    pub fn into_case_with<'a, P, F, R>(self, predicate: P, producer: F) -> SwitchBody<'a, S, R>
    where
        P: Predicate<S> + 'a,
        F: Fn(&S) -> R + 'a,
    {
        self.into_case_producer(predicate, Producer::lazy(producer))
    }

    pub fn into_case_producer<'a, P, R>(
        self,
        predicate: P,
        producer: Producer<'a, S, R>,
    ) -> SwitchBody<'a, S, R>
    where
        P: Predicate<S> + 'a,
    {
        SwitchBody::new(self.subject, predicate, producer)
    }
}

impl<S: Clone> SwitchHead<S> {
    /// Opens a chain whose first case yields `value` when `predicate` matches.
    ///
    /// The head can open any number of chains; each gets its own copy of the
    /// subject and its own case list.
    pub fn case<'a, P, R>(&self, predicate: P, value: R) -> SwitchBody<'a, S, R>
    where
        P: Predicate<S> + 'a,
    {
        self.case_producer(predicate, Producer::constant(value))
    }

    /// Like [`case`](Self::case), but the result is computed from the subject
    /// and only when this case wins.
    pub fn case_with<'a, P, F, R>(&self, predicate: P, producer: F) -> SwitchBody<'a, S, R>
    where
        P: Predicate<S> + 'a,
        F: Fn(&S) -> R + 'a,
    {
        self.case_producer(predicate, Producer::lazy(producer))
    }

    pub fn case_producer<'a, P, R>(
        &self,
        predicate: P,
        producer: Producer<'a, S, R>,
    ) -> SwitchBody<'a, S, R>
    where
        P: Predicate<S> + 'a,
    {
        SwitchBody::new(self.subject.clone(), predicate, producer)
    }
}

struct Case<'a, S, R> {
    predicate: Box<dyn Predicate<S> + 'a>,
    producer: Producer<'a, S, R>,
}

/// Ordered cases over a captured subject.
///
/// A body always holds at least one case.
///
/// Predicates and producers are stored as plain boxed closures, which may
/// capture non-thread-safe state such as `Cell` counters. A body is therefore
/// neither `Send` nor `Sync` and stays on the thread that built it; to resolve
/// the same cases on several threads, build one body per thread.
///
/// ```compile_fail
/// use switch_expr::prelude::*;
///
/// let body = switch(1).case(equal_to(1), "one");
/// std::thread::spawn(move || body.default("other"));
/// ```
pub struct SwitchBody<'a, S, R> {
    subject: S,
    cases: Vec<Case<'a, S, R>>,
}

impl<'a, S, R> SwitchBody<'a, S, R> {
    pub fn new<P>(subject: S, predicate: P, producer: Producer<'a, S, R>) -> Self
    where
        P: Predicate<S> + 'a,
    {
        Self {
            subject,
            cases: vec![Case {
                predicate: Box::new(predicate),
                producer,
            }],
        }
    }

    pub fn case<P>(self, predicate: P, value: R) -> Self
    where
        P: Predicate<S> + 'a,
    {
        self.case_producer(predicate, Producer::constant(value))
    }

    pub fn case_with<P, F>(self, predicate: P, producer: F) -> Self
    where
        P: Predicate<S> + 'a,
        F: Fn(&S) -> R + 'a,
    {
        self.case_producer(predicate, Producer::lazy(producer))
    }

    pub fn case_producer<P>(mut self, predicate: P, producer: Producer<'a, S, R>) -> Self
    where
        P: Predicate<S> + 'a,
    {
        self.cases.push(Case {
            predicate: Box::new(predicate),
            producer,
        });
        self
    }

    pub fn subject(&self) -> &S {
        &self.subject
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Index of the first case whose predicate matches. No producer runs.
    pub fn matching_case(&self) -> Option<usize> {
        self.cases
            .iter()
            .position(|case| case.predicate.test(&self.subject))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn explain(&self) -> Resolution {
        let matched = self.matching_case();
        Resolution {
            cases: self.cases.len(),
            evaluated: matched.map_or(self.cases.len(), |index| index + 1),
            matched,
        }
    }

    /// Resolves without a default, consuming the chain.
    ///
    /// The winning constant is moved out, so `R` need not be `Clone`.
    pub fn into_finish(self) -> Option<R> {
        match self.matching_case() {
            Some(index) => Some(self.take_case(index)),
            None => {
                trace!("switch fell through {} cases without default", self.cases.len());
                None
            }
        }
    }

    pub fn into_resolve(self, default: Producer<'_, S, R>) -> R {
        match self.matching_case() {
            Some(index) => self.take_case(index),
            None => {
                trace!("switch fell through {} cases to default", self.cases.len());
                default.into_value(&self.subject)
            }
        }
    }

    pub fn into_default(self, value: R) -> R {
        self.into_resolve(Producer::constant(value))
    }

    pub fn into_default_with<F>(self, default: F) -> R
    where
        F: Fn(&S) -> R,
    {
        self.into_resolve(Producer::lazy(default))
    }

    fn take_case(self, index: usize) -> R {
        let Self { subject, mut cases } = self;
        let case = cases.swap_remove(index);
        trace!(
            lazy = case.producer.is_lazy(),
            "switch matched case {} of {}",
            index,
            cases.len() + 1
        );
        case.producer.into_value(&subject)
    }
}

impl<S, R: Clone> SwitchBody<'_, S, R> {
    /// Result of the first matching case, or `None` when nothing matches.
    ///
    /// The body is left intact and can be resolved again.
    pub fn finish(&self) -> Option<R> {
        match self.matching_case() {
            Some(index) => Some(self.produce_case(index)),
            None => {
                trace!("switch fell through {} cases without default", self.cases.len());
                None
            }
        }
    }

    /// Result of the first matching case, falling back to `default`.
    ///
    /// A lazy default only runs when no case matches, and receives the subject.
    pub fn resolve(&self, default: Producer<'_, S, R>) -> R {
        match self.matching_case() {
            Some(index) => self.produce_case(index),
            None => {
                trace!("switch fell through {} cases to default", self.cases.len());
                default.into_value(&self.subject)
            }
        }
    }

    pub fn default(&self, value: R) -> R {
        self.resolve(Producer::constant(value))
    }

    pub fn default_with<F>(&self, default: F) -> R
    where
        F: Fn(&S) -> R,
    {
        self.resolve(Producer::lazy(default))
    }

    pub fn try_finish(&self) -> SwitchResult<R> {
        self.finish().ok_or(SwitchError::NoMatch {
            cases: self.cases.len(),
        })
    }

    fn produce_case(&self, index: usize) -> R {
        let producer = &self.cases[index].producer;
        trace!(
            lazy = producer.is_lazy(),
            "switch matched case {} of {}",
            index,
            self.cases.len()
        );
        producer.produce(&self.subject)
    }
}

impl<S: fmt::Debug, R: fmt::Debug> fmt::Debug for SwitchBody<'_, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwitchBody")
            .field("subject", &self.subject)
            .field(
                "producers",
                &self.cases.iter().map(|c| &c.producer).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// How a body would resolve against its subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Number of declared cases.
    pub cases: usize,
    /// Number of predicates tested before the scan stopped.
    pub evaluated: usize,
    /// Index of the winning case, `None` when the default applies.
    pub matched: Option<usize>,
}

impl Resolution {
    pub fn is_default(&self) -> bool {
        self.matched.is_none()
    }
}
