use crate::error::{Result, StyleGenomeError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// カタログパスを上書きする環境変数
pub const CATALOG_ENV: &str = "STYLE_GENOME_CATALOG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 1回の診断で評価するアイテム数
    pub quiz_size: usize,
    /// カタログJSON（未設定なら組み込みカタログ）
    pub catalog_path: Option<PathBuf>,
    /// おすすめの表示件数
    pub recommendation_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiz_size: 8,
            catalog_path: None,
            recommendation_limit: 4,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（存在しなければ既定値）
    ///
    /// 件数の値はセッターと同じ検証を通す。
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let raw: Config = serde_json::from_str(&content)?;

        let mut config = Config {
            catalog_path: raw.catalog_path,
            ..Self::default()
        };
        config.set_quiz_size(raw.quiz_size)?;
        config.set_recommendation_limit(raw.recommendation_limit)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| StyleGenomeError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("style-genome").join("config.json"))
    }

    /// 有効なカタログパス（環境変数を優先）
    pub fn effective_catalog_path(&self) -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CATALOG_ENV) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        self.catalog_path.clone()
    }

    pub fn set_quiz_size(&mut self, size: usize) -> Result<()> {
        if size == 0 {
            return Err(StyleGenomeError::Config("診断アイテム数は1以上にしてください".into()));
        }
        self.quiz_size = size;
        Ok(())
    }

    pub fn set_recommendation_limit(&mut self, limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(StyleGenomeError::Config("おすすめ件数は1以上にしてください".into()));
        }
        self.recommendation_limit = limit;
        Ok(())
    }
}
