//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid catalog item: {0}")]
    InvalidItem(String),

    #[error("Duplicate catalog item id: {0}")]
    DuplicateItem(String),

    #[error("Unknown catalog item id: {0}")]
    UnknownItem(String),

    #[error("Item already rated in this session: {0}")]
    AlreadyRated(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
