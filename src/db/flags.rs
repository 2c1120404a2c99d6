use super::args::DbArgs;
use crate::config::DbConfig;

pub const DEFAULT_DB_REPOSITORY: &str = "ghcr.io/aquasecurity/trivy-db";
pub const DEFAULT_JAVA_DB_REPOSITORY: &str = "ghcr.io/aquasecurity/trivy-java-db";

pub const SKIP_DB_UPDATE_FLAG: &str = "--skip-db-update";
pub const DOWNLOAD_DB_ONLY_FLAG: &str = "--download-db-only";
pub const SKIP_JAVA_DB_UPDATE_FLAG: &str = "--skip-java-db-update";
pub const DOWNLOAD_JAVA_DB_ONLY_FLAG: &str = "--download-java-db-only";

/// Raw flag values after CLI, environment and config file have been bound.
/// Nothing here is validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbFlagValues {
    pub reset: bool,
    pub download_db_only: bool,
    pub skip_db_update: bool,
    pub download_java_db_only: bool,
    pub skip_java_db_update: bool,
    pub no_progress: bool,
    pub light: bool,
    pub db_repository: String,
    pub java_db_repository: String,
}

impl Default for DbFlagValues {
    fn default() -> Self {
        Self {
            reset: false,
            download_db_only: false,
            skip_db_update: false,
            download_java_db_only: false,
            skip_java_db_update: false,
            no_progress: false,
            light: false,
            db_repository: DEFAULT_DB_REPOSITORY.to_string(),
            java_db_repository: DEFAULT_JAVA_DB_REPOSITORY.to_string(),
        }
    }
}

impl DbFlagValues {
    /// CLI and environment (already merged by clap) win over the config file,
    /// which wins over the defaults.
    pub fn resolve(args: &DbArgs, config: &DbConfig) -> Self {
        let flag = |set: bool, configured: Option<bool>| set || configured.unwrap_or(false);
        let string = |set: &Option<String>, configured: &Option<String>, default: &str| {
            set.clone()
                .or_else(|| configured.clone())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            reset: flag(args.reset, config.reset),
            download_db_only: flag(args.download_db_only, config.download_only),
            skip_db_update: flag(args.skip_db_update, config.skip_update),
            download_java_db_only: flag(args.download_java_db_only, config.download_java_only),
            skip_java_db_update: flag(args.skip_java_db_update, config.skip_java_update),
            no_progress: flag(args.no_progress, config.no_progress),
            light: flag(args.light, config.light),
            db_repository: string(
                &args.db_repository,
                &config.repository,
                DEFAULT_DB_REPOSITORY,
            ),
            java_db_repository: string(
                &args.java_db_repository,
                &config.java_db_repository,
                DEFAULT_JAVA_DB_REPOSITORY,
            ),
        }
    }
}
