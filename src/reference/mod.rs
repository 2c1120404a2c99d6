//! OCI repository references of the form `registry[:port]/repository[:tag|@digest]`.
//!
//! A [`Reference`] is only ever built by [`Reference::parse`], so holding one
//! means the string passed structural validation. Fields stay private: callers
//! compare references and format them, nothing else.

mod error;

pub use error::{Problem, ReferenceError};

use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const DEFAULT_REGISTRY: &str = "index.docker.io";
const DOCKER_HUB: &str = "docker.io";
const DEFAULT_TAG: &str = "latest";
const REPOSITORY_CHARS: &str = "abcdefghijklmnopqrstuvwxyz0123456789_-./";
const MAX_REPOSITORY_LEN: usize = 255;

static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_.-]{0,127}$").expect("tag pattern is valid")
});

static DIGEST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^sha256:[a-f0-9]{64}$").expect("digest pattern is valid"));

static HOST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*|\[[0-9A-Fa-f:.]+\])(?::[0-9]{1,5})?$",
    )
    .expect("host pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference {
    registry: String,
    repository: String,
    identifier: Identifier,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Identifier {
    Tag(String),
    Digest(String),
}

impl Reference {
    pub fn parse(raw: &str) -> Result<Self, ReferenceError> {
        let fail = |problem| ReferenceError::new(raw, problem);

        if raw.is_empty() {
            return Err(fail(Problem::Empty));
        }

        let (name, identifier) = match raw.split_once('@') {
            Some((name, digest)) => {
                if !DIGEST.is_match(digest) {
                    return Err(fail(Problem::Digest(digest.to_string())));
                }
                // A tag next to a digest is checked but the digest wins.
                let (name, _) = split_tag(name).map_err(fail)?;
                (name, Identifier::Digest(digest.to_string()))
            }
            None => {
                let (name, tag) = split_tag(raw).map_err(fail)?;
                (name, Identifier::Tag(tag.unwrap_or(DEFAULT_TAG).to_string()))
            }
        };

        let (registry, repository) = split_registry(name).map_err(fail)?;

        Ok(Self {
            registry,
            repository,
            identifier,
        })
    }
}

fn split_tag(name: &str) -> Result<(&str, Option<&str>), Problem> {
    match name.rsplit_once(':') {
        // `localhost:5000/foo` has a port, not a tag.
        Some((base, tag)) if !tag.contains('/') => {
            if !TAG.is_match(tag) {
                return Err(Problem::Tag(tag.to_string()));
            }
            Ok((base, Some(tag)))
        }
        _ => Ok((name, None)),
    }
}

fn split_registry(name: &str) -> Result<(String, String), Problem> {
    let (registry, repository) = match name.split_once('/') {
        Some((host, rest))
            if host.contains(['.', ':']) || host.eq_ignore_ascii_case("localhost") =>
        {
            (host, rest)
        }
        _ => (DEFAULT_REGISTRY, name),
    };

    // Hosts are case-insensitive.
    let registry = registry.to_ascii_lowercase();
    let registry = if registry == DOCKER_HUB {
        DEFAULT_REGISTRY.to_string()
    } else {
        registry
    };
    if !HOST.is_match(&registry) {
        return Err(Problem::Registry(registry));
    }

    check_repository(repository)?;

    let repository = if registry == DEFAULT_REGISTRY && !repository.contains('/') {
        format!("library/{repository}")
    } else {
        repository.to_string()
    };

    Ok((registry, repository))
}

fn check_repository(repository: &str) -> Result<(), Problem> {
    if repository.is_empty() || repository.len() > MAX_REPOSITORY_LEN {
        return Err(Problem::RepositoryLength(repository.to_string()));
    }
    if repository.chars().any(|c| !REPOSITORY_CHARS.contains(c)) {
        return Err(Problem::RepositoryChars(repository.to_string()));
    }
    if repository.split('/').any(str::is_empty) {
        return Err(Problem::RepositoryComponent(repository.to_string()));
    }
    Ok(())
}

impl FromStr for Reference {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.identifier {
            Identifier::Tag(tag) => write!(f, "{}/{}:{}", self.registry, self.repository, tag),
            Identifier::Digest(digest) => {
                write!(f, "{}/{}@{}", self.registry, self.repository, digest)
            }
        }
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
