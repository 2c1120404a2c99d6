use crate::db::DbOptions;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn format_output(format: OutputFormat, options: &DbOptions) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(options),
        OutputFormat::Text => Ok(format_text(options)),
    }
}

fn format_text(options: &DbOptions) -> String {
    [
        ("reset", options.reset.to_string()),
        ("download-db-only", options.download_db_only.to_string()),
        ("skip-db-update", options.skip_db_update.to_string()),
        ("download-java-db-only", options.download_java_db_only.to_string()),
        ("skip-java-db-update", options.skip_java_db_update.to_string()),
        ("no-progress", options.no_progress.to_string()),
        ("light", options.light.to_string()),
        ("db-repository", options.db_repository.to_string()),
        ("java-db-repository", options.java_db_repository.to_string()),
    ]
    .iter()
    .map(|(key, value)| format!("{key}: {value}"))
    .collect::<Vec<_>>()
    .join("\n")
}
