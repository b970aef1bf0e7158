//! # switch-expr: switch as an expression
//!
//! A value-based, runtime dispatch construct. A subject is captured once,
//! an ordered list of `(predicate, result)` cases is declared against it, and
//! the chain resolves to the result of the first matching case or a default.
//!
//! ```text
//! switch(subject) → SwitchHead ─case→ SwitchBody ─case→ … ─default→ R
//! ```
//!
//! ## Building blocks
//!
//! - [`switch`](switch::SwitchHead) captures the subject and opens the chain.
//! - [`SwitchBody`](switch::SwitchBody) accumulates cases and resolves them
//!   first-match-wins.
//! - [`Producer`](core::Producer) is the result side of a case: either a
//!   constant handed back as is, or a function of the subject that only runs
//!   when its case wins.
//! - [`predicates`] provides `equal_to`, `included_in` and combinators to
//!   compose them.
//!
//! Predicates return a strict `bool`. Equality is `PartialEq` between values of
//! the subject's own type, so there is no implicit coercion.
//!
//! ## Example
//!
//! ```
//! use switch_expr::prelude::*;
//!
//! let grade = |score: u32| {
//!     switch(score)
//!         .case(|s: &u32| *s >= 90, "A")
//!         .case(|s: &u32| *s >= 75, "B")
//!         .case(included_in!(73, 74), "B-")
//!         .default("C")
//! };
//! assert_eq!(grade(95), "A");
//! assert_eq!(grade(74), "B-");
//! assert_eq!(grade(12), "C");
//! ```

pub mod core;
pub mod error;
pub mod predicates;
pub mod prelude;
pub mod switch;

// Re-exports
pub use crate::core::{Predicate, Producer};
pub use error::*;
pub use prelude::{equal_to, switch};
pub use switch::{Resolution, SwitchBody, SwitchHead};

/// Builds an [`IncludedIn`](predicates::IncludedIn) predicate from a list of
/// items, e.g. `included_in!("a", "b", "c")`.
#[macro_export]
macro_rules! included_in {
    ($($item:expr),* $(,)?) => {
        $crate::predicates::IncludedIn::new(vec![$($item),*])
    };
}
