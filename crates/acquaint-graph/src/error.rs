use thiserror::Error;

/// Loader invariant violations caught while building a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate person {0:?}")]
    DuplicatePerson(String),

    #[error("friendship references unknown person {0:?}")]
    UnknownPerson(String),

    #[error("{0:?} cannot be friends with themselves")]
    SelfFriendship(String),
}
