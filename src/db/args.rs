use clap::Args;
use clap::builder::BoolishValueParser;

#[derive(Debug, Default, Args)]
pub struct DbArgs {
    #[arg(
        long,
        value_parser = BoolishValueParser::new(),
        env = "TRIVY_RESET",
        help = "Remove all caches and database"
    )]
    pub reset: bool,

    #[arg(
        long,
        value_parser = BoolishValueParser::new(),
        env = "TRIVY_DOWNLOAD_DB_ONLY",
        help = "Download/update vulnerability database but don't run a scan"
    )]
    pub download_db_only: bool,

    #[arg(
        long,
        value_parser = BoolishValueParser::new(),
        env = "TRIVY_SKIP_DB_UPDATE",
        help = "Skip updating vulnerability database"
    )]
    pub skip_db_update: bool,

    #[arg(
        long,
        value_parser = BoolishValueParser::new(),
        env = "TRIVY_DOWNLOAD_JAVA_DB_ONLY",
        help = "Download/update Java index database but don't run a scan"
    )]
    pub download_java_db_only: bool,

    #[arg(
        long,
        value_parser = BoolishValueParser::new(),
        env = "TRIVY_SKIP_JAVA_DB_UPDATE",
        help = "Skip updating Java index database"
    )]
    pub skip_java_db_update: bool,

    #[arg(
        long,
        value_parser = BoolishValueParser::new(),
        env = "TRIVY_NO_PROGRESS",
        help = "Suppress progress bar"
    )]
    pub no_progress: bool,

    #[arg(
        long,
        env = "TRIVY_DB_REPOSITORY",
        value_name = "REPOSITORY",
        help = "OCI repository to retrieve trivy-db from"
    )]
    pub db_repository: Option<String>,

    #[arg(
        long,
        env = "TRIVY_JAVA_DB_REPOSITORY",
        value_name = "REPOSITORY",
        help = "OCI repository to retrieve trivy-java-db from"
    )]
    pub java_db_repository: Option<String>,

    #[arg(
        long,
        value_parser = BoolishValueParser::new(),
        env = "TRIVY_LIGHT",
        hide = true,
        help = "Deprecated"
    )]
    pub light: bool,
}
