use thiserror::Error;

use crate::config::ConfigError;
use crate::db::DbError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
