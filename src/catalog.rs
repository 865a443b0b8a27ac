//! カタログ読み込み
//!
//! コマンド引数 > 環境変数 > 設定ファイル > 組み込みカタログ の順に解決する。

use crate::config::Config;
use crate::error::{Result, StyleGenomeError};
use std::path::{Path, PathBuf};
use style_genome_common::{Catalog, CatalogItem, Formality};
use tracing::info;

/// 使用するカタログパスを決定（None なら組み込み）
pub fn resolve_catalog_path(explicit: Option<&Path>, config: &Config) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| config.effective_catalog_path())
}

/// カタログを読み込む
pub fn load_catalog(explicit: Option<&Path>, config: &Config) -> Result<Catalog> {
    match resolve_catalog_path(explicit, config) {
        Some(path) => {
            if !path.exists() {
                return Err(StyleGenomeError::FileNotFound(path.display().to_string()));
            }
            let catalog = Catalog::from_file(&path)?;
            info!(path = %path.display(), items = catalog.len(), "loaded catalog");
            Ok(catalog)
        }
        None => Ok(Catalog::canonical()),
    }
}

/// フォーマル度で絞り込み（None なら全件、カタログ順）
pub fn filter_by_formality(catalog: &Catalog, formality: Option<Formality>) -> Vec<&CatalogItem> {
    catalog
        .iter()
        .filter(|item| formality.map_or(true, |f| item.formality == f))
        .collect()
}
