use crate::reference::ReferenceError;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("{first} and {second} options can not be specified both")]
    ConflictingOptions {
        first: &'static str,
        second: &'static str,
    },

    #[error("invalid {kind} repository: {source}")]
    InvalidRepository {
        kind: RepositoryKind,
        source: ReferenceError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryKind {
    Db,
    JavaDb,
}

impl fmt::Display for RepositoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryKind::Db => f.write_str("db"),
            RepositoryKind::JavaDb => f.write_str("javadb"),
        }
    }
}
