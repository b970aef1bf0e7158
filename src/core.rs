use std::fmt;

/// A test applied to the subject of a switch.
///
/// Every `Fn(&S) -> bool` is a predicate, so plain closures can be handed to
/// [`SwitchHead::case`](crate::switch::SwitchHead::case) directly. The
/// factories in [`predicates`](crate::predicates) build reusable ones.
pub trait Predicate<S> {
    fn test(&self, subject: &S) -> bool;
}

impl<S, F> Predicate<S> for F
where
    F: Fn(&S) -> bool,
{
    fn test(&self, subject: &S) -> bool {
        self(subject)
    }
}

/// The result side of a case.
///
/// A plain value is lifted into `Constant` and handed back unchanged, while
/// `Lazy` is only run for the case that wins and receives the subject.
/// Which one applies is fixed when the case is added, so a function value can
/// still be returned as a literal result through `Constant`.
pub enum Producer<'a, S, R> {
    Constant(R),
    Lazy(Box<dyn Fn(&S) -> R + 'a>),
}

impl<'a, S, R> Producer<'a, S, R> {
    pub fn constant(value: R) -> Self {
        Producer::Constant(value)
    }

    pub fn lazy<F>(f: F) -> Self
    where
        F: Fn(&S) -> R + 'a,
    {
        Producer::Lazy(Box::new(f))
    }

    pub fn is_lazy(&self) -> bool {
        matches!(self, Producer::Lazy(_))
    }

    /// Produces a result without giving up the producer. Constants are cloned.
    pub fn produce(&self, subject: &S) -> R
    where
        R: Clone,
    {
        match self {
            Producer::Constant(value) => value.clone(),
            Producer::Lazy(f) => f(subject),
        }
    }

    /// Consumes the producer, moving a constant out as is.
    pub fn into_value(self, subject: &S) -> R {
        match self {
            Producer::Constant(value) => value,
            Producer::Lazy(f) => f(subject),
        }
    }
}

impl<S, R: fmt::Debug> fmt::Debug for Producer<'_, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Producer::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Producer::Lazy(_) => f.write_str("Lazy(<fn>)"),
        }
    }
}
