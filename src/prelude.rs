use super::core::Predicate;
use super::predicates::*;
use super::switch::SwitchHead;

pub use super::core::Producer;
pub use super::error::{SwitchError, SwitchResult};
pub use super::included_in;
pub use super::predicates::PredicateExt;
pub use super::switch::{Resolution, SwitchBody};

pub fn switch<S>(subject: S) -> SwitchHead<S> {
    SwitchHead::new(subject)
}

pub fn equal_to<T: PartialEq>(value: T) -> EqualTo<T> {
    EqualTo::new(value)
}

pub fn included_in<T, I>(items: I) -> IncludedIn<T>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    IncludedIn::new(items.into_iter().collect())
}

pub fn not<P>(predicate: P) -> Not<P> {
    Not::new(predicate)
}

pub fn all_of<'a, S>(predicates: Vec<Box<dyn Predicate<S> + 'a>>) -> AllOf<'a, S> {
    AllOf::new(predicates)
}

pub fn any_of<'a, S>(predicates: Vec<Box<dyn Predicate<S> + 'a>>) -> AnyOf<'a, S> {
    AnyOf::new(predicates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_included_in_function_and_macro_agree() {
        let from_fn = included_in(["a", "b", "c"]);
        let from_macro = included_in!("a", "b", "c");
        assert_eq!(from_fn, from_macro);

        let empty: IncludedIn<u8> = included_in!();
        assert!(empty.items().is_empty());
    }

    #[test]
    fn test_switch_with_prelude() {
        let result = switch("b")
            .case(not(equal_to("b")), 0)
            .case(
                any_of::<&str>(vec![Box::new(equal_to("x")), Box::new(included_in!("a", "b"))]),
                1,
            )
            .default(2);
        assert_eq!(result, 1);
    }
}
