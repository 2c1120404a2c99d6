use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not parse reference {input:?}: {problem}")]
pub struct ReferenceError {
    input: String,
    problem: Problem,
}

impl ReferenceError {
    pub(crate) fn new(input: &str, problem: Problem) -> Self {
        Self {
            input: input.to_string(),
            problem,
        }
    }

    pub fn problem(&self) -> &Problem {
        &self.problem
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Problem {
    #[error("reference is empty")]
    Empty,

    #[error("registry must be a valid host[:port]: {0}")]
    Registry(String),

    #[error("repository must be between 1 and 255 characters: {0}")]
    RepositoryLength(String),

    #[error(
        "repository can only contain the characters `abcdefghijklmnopqrstuvwxyz0123456789_-./`: {0}"
    )]
    RepositoryChars(String),

    #[error("repository contains an empty path component: {0}")]
    RepositoryComponent(String),

    #[error("tag must be 1-128 characters of `A-Za-z0-9_.-` and can not start with `.` or `-`: {0}")]
    Tag(String),

    #[error("digest must be of the form `sha256:<64 hex characters>`: {0}")]
    Digest(String),
}
