use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitchError {
    #[error("No case matched the subject ({cases} cases tested) and no default was given")]
    NoMatch { cases: usize },
}

pub type SwitchResult<T> = Result<T, SwitchError>;
