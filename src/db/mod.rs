pub mod args;
mod error;
pub mod flags;

pub use args::DbArgs;
pub use error::{DbError, RepositoryKind};
pub use flags::DbFlagValues;

use crate::log::Logger;
use crate::reference::Reference;
use flags::{
    DOWNLOAD_DB_ONLY_FLAG, DOWNLOAD_JAVA_DB_ONLY_FLAG, SKIP_DB_UPDATE_FLAG,
    SKIP_JAVA_DB_UPDATE_FLAG,
};
use serde::Serialize;

pub const LIGHT_DEPRECATION: &str = "'--light' option is deprecated and will be removed. See also: https://github.com/aquasecurity/trivy/discussions/1649";

/// Validated database options, handed to whatever fetches the databases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbOptions {
    pub reset: bool,
    pub download_db_only: bool,
    pub skip_db_update: bool,
    pub download_java_db_only: bool,
    pub skip_java_db_update: bool,
    pub no_progress: bool,
    pub light: bool,
    pub db_repository: Reference,
    pub java_db_repository: Reference,
}

/// Resolves the bound flag values into [`DbOptions`].
///
/// The order of checks is observable and must stay as is:
/// the `--light` warning is always emitted first, even when a later check
/// fails; flag conflicts are reported before any repository is parsed; the
/// db repository is parsed before the Java one, so only the first invalid
/// repository is reported.
pub fn to_options(flags: &DbFlagValues, logger: &dyn Logger) -> Result<DbOptions, DbError> {
    if flags.light {
        logger.warn(LIGHT_DEPRECATION);
    }

    if flags.skip_db_update && flags.download_db_only {
        return Err(DbError::ConflictingOptions {
            first: SKIP_DB_UPDATE_FLAG,
            second: DOWNLOAD_DB_ONLY_FLAG,
        });
    }

    if flags.skip_java_db_update && flags.download_java_db_only {
        return Err(DbError::ConflictingOptions {
            first: SKIP_JAVA_DB_UPDATE_FLAG,
            second: DOWNLOAD_JAVA_DB_ONLY_FLAG,
        });
    }

    let db_repository = parse_repository(&flags.db_repository, RepositoryKind::Db)?;
    let java_db_repository = parse_repository(&flags.java_db_repository, RepositoryKind::JavaDb)?;

    Ok(DbOptions {
        reset: flags.reset,
        download_db_only: flags.download_db_only,
        skip_db_update: flags.skip_db_update,
        download_java_db_only: flags.download_java_db_only,
        skip_java_db_update: flags.skip_java_db_update,
        no_progress: flags.no_progress,
        light: flags.light,
        db_repository,
        java_db_repository,
    })
}

fn parse_repository(raw: &str, kind: RepositoryKind) -> Result<Reference, DbError> {
    Reference::parse(raw).map_err(|source| DbError::InvalidRepository { kind, source })
}
