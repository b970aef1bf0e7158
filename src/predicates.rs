//! # Predicate factories
//!
//! Reusable predicates over a switch subject. [`EqualTo`] and [`IncludedIn`]
//! compare with `PartialEq` only, so the subject and the operands must share a
//! type and nothing is coerced (`f64::NAN` never matches, not even itself).
//! The remaining types compose predicates and short-circuit in argument order.

use std::fmt;

use super::core::Predicate;

// EqualTo: 対象が value と等しい場合に true
#[derive(Clone, PartialEq)]
pub struct EqualTo<T> {
    value: T,
}

impl<T> EqualTo<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: PartialEq> Predicate<T> for EqualTo<T> {
    fn test(&self, subject: &T) -> bool {
        *subject == self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for EqualTo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "equal_to({:?})", self.value)
    }
}

// IncludedIn: 対象が items のいずれかと等しい場合に true
#[derive(Clone, PartialEq)]
pub struct IncludedIn<T> {
    items: Vec<T>,
}

impl<T> IncludedIn<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> Predicate<T> for IncludedIn<T> {
    fn test(&self, subject: &T) -> bool {
        self.items.contains(subject)
    }
}

impl<T: fmt::Debug> fmt::Debug for IncludedIn<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "included_in({:?})", self.items)
    }
}

#[derive(Clone, Debug)]
pub struct Not<P> {
    predicate: P,
}

impl<P> Not<P> {
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<S, P: Predicate<S>> Predicate<S> for Not<P> {
    fn test(&self, subject: &S) -> bool {
        !self.predicate.test(subject)
    }
}

#[derive(Clone, Debug)]
pub struct And<P1, P2> {
    left: P1,
    right: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(left: P1, right: P2) -> Self {
        Self { left, right }
    }
}

impl<S, P1, P2> Predicate<S> for And<P1, P2>
where
    P1: Predicate<S>,
    P2: Predicate<S>,
{
    fn test(&self, subject: &S) -> bool {
        self.left.test(subject) && self.right.test(subject)
    }
}

#[derive(Clone, Debug)]
pub struct Or<P1, P2> {
    left: P1,
    right: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(left: P1, right: P2) -> Self {
        Self { left, right }
    }
}

impl<S, P1, P2> Predicate<S> for Or<P1, P2>
where
    P1: Predicate<S>,
    P2: Predicate<S>,
{
    fn test(&self, subject: &S) -> bool {
        self.left.test(subject) || self.right.test(subject)
    }
}

/// Matches when every predicate matches. An empty list always matches.
pub struct AllOf<'a, S> {
    predicates: Vec<Box<dyn Predicate<S> + 'a>>,
}

impl<'a, S> AllOf<'a, S> {
    pub fn new(predicates: Vec<Box<dyn Predicate<S> + 'a>>) -> Self {
        Self { predicates }
    }
}

impl<S> Predicate<S> for AllOf<'_, S> {
    fn test(&self, subject: &S) -> bool {
        self.predicates.iter().all(|p| p.test(subject))
    }
}

/// Matches when at least one predicate matches. An empty list never matches.
pub struct AnyOf<'a, S> {
    predicates: Vec<Box<dyn Predicate<S> + 'a>>,
}

impl<'a, S> AnyOf<'a, S> {
    pub fn new(predicates: Vec<Box<dyn Predicate<S> + 'a>>) -> Self {
        Self { predicates }
    }
}

impl<S> Predicate<S> for AnyOf<'_, S> {
    fn test(&self, subject: &S) -> bool {
        self.predicates.iter().any(|p| p.test(subject))
    }
}

/// Method-style composition for any predicate.
pub trait PredicateExt<S>: Predicate<S> + Sized {
    fn and<P: Predicate<S>>(self, other: P) -> And<Self, P> {
        And::new(self, other)
    }

    fn or<P: Predicate<S>>(self, other: P) -> Or<Self, P> {
        Or::new(self, other)
    }

    fn negate(self) -> Not<Self> {
        Not::new(self)
    }
}

impl<S, P: Predicate<S>> PredicateExt<S> for P {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_equal_to() {
        let two = EqualTo::new(2);
        assert!(two.test(&2));
        assert!(!two.test(&3));

        // 文字列
        let hello = EqualTo::new("hello");
        assert!(hello.test(&"hello"));
        assert!(!hello.test(&"Hello"));
    }

    #[test]
    fn test_equal_to_nan_never_matches() {
        let nan = EqualTo::new(f64::NAN);
        assert!(!nan.test(&f64::NAN));
        assert!(!nan.test(&0.0));

        let zero = EqualTo::new(0.0_f64);
        assert!(zero.test(&-0.0));
    }

    #[test]
    fn test_included_in() {
        let letters = IncludedIn::new(vec!["a", "b", "c"]);
        assert!(letters.test(&"a"));
        assert!(letters.test(&"c"));
        assert!(!letters.test(&"z"));
        assert_eq!(letters.items(), &["a", "b", "c"]);

        // 重複しても結果は変わらない
        let duplicated = IncludedIn::new(vec![1, 1, 2, 2]);
        assert!(duplicated.test(&2));
        assert!(!duplicated.test(&3));

        let empty: IncludedIn<i32> = IncludedIn::new(vec![]);
        assert!(!empty.test(&0));
    }

    #[test]
    fn test_included_in_nan() {
        let numbers = IncludedIn::new(vec![1.0, f64::NAN]);
        assert!(numbers.test(&1.0));
        assert!(!numbers.test(&f64::NAN));
    }

    #[test]
    fn test_factories_are_reusable() {
        let is_vowel = IncludedIn::new(vec!['a', 'e', 'i', 'o', 'u']);
        let vowels = "education".chars().filter(|c| is_vowel.test(c)).count();
        assert_eq!(vowels, 5);
        assert!(is_vowel.test(&'e'));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", EqualTo::new(1)), "equal_to(1)");
        assert_eq!(
            format!("{:?}", IncludedIn::new(vec!["x", "y"])),
            "included_in([\"x\", \"y\"])"
        );
    }

    #[test]
    fn test_not() {
        let not_two = Not::new(EqualTo::new(2));
        assert!(not_two.test(&1));
        assert!(!not_two.test(&2));
    }

    #[test]
    fn test_and_or_short_circuit() {
        let calls = Cell::new(0);
        let counted = |_: &i32| {
            calls.set(calls.get() + 1);
            true
        };

        let and = And::new(EqualTo::new(1), &counted);
        assert!(!and.test(&2));
        assert_eq!(calls.get(), 0);
        assert!(and.test(&1));
        assert_eq!(calls.get(), 1);

        let or = Or::new(EqualTo::new(1), &counted);
        assert!(or.test(&1));
        assert_eq!(calls.get(), 1);
        assert!(or.test(&5));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_all_of_any_of() {
        let between = AllOf::<i32>::new(vec![
            Box::new(|x: &i32| *x >= 10),
            Box::new(|x: &i32| *x <= 20),
        ]);
        assert!(between.test(&15));
        assert!(!between.test(&9));
        assert!(!between.test(&21));

        let special = AnyOf::<i32>::new(vec![
            Box::new(EqualTo::new(0)),
            Box::new(|x: &i32| *x < 0),
        ]);
        assert!(special.test(&0));
        assert!(special.test(&-3));
        assert!(!special.test(&3));

        // 空のリスト
        assert!(AllOf::<i32>::new(vec![]).test(&1));
        assert!(!AnyOf::<i32>::new(vec![]).test(&1));
    }

    #[test]
    fn test_predicate_ext() {
        let positive = |x: &i32| *x > 0;
        let even = |x: &i32| x % 2 == 0;

        let positive_even = positive.and(even);
        assert!(positive_even.test(&4));
        assert!(!positive_even.test(&3));
        assert!(!positive_even.test(&-4));

        let odd_or_negative = even.negate().or(|x: &i32| *x < 0);
        assert!(odd_or_negative.test(&3));
        assert!(odd_or_negative.test(&-4));
        assert!(!odd_or_negative.test(&4));
    }
}
