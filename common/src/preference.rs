//! 好み記録モジュール
//!
//! 1回の診断セッションで「好き/好きじゃない」と評価したアイテムを蓄積する。

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::types::{CatalogItem, Verdict};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 評価済みアイテムの記録（評価順）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreferenceRecord {
    liked: Vec<CatalogItem>,
    disliked: Vec<CatalogItem>,
}

impl PreferenceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// 評価を追加する
    ///
    /// 同じidを再評価した場合は `Error::AlreadyRated` を返し、記録は変更しない。
    pub fn record_rating(&mut self, item: &CatalogItem, verdict: Verdict) -> Result<()> {
        if self.contains(&item.id) {
            return Err(Error::AlreadyRated(item.id.clone()));
        }

        match verdict {
            Verdict::Like => self.liked.push(item.clone()),
            Verdict::Dislike => self.disliked.push(item.clone()),
        }
        Ok(())
    }

    pub fn liked(&self) -> &[CatalogItem] {
        &self.liked
    }

    pub fn disliked(&self) -> &[CatalogItem] {
        &self.disliked
    }

    pub fn contains(&self, id: &str) -> bool {
        self.liked.iter().chain(&self.disliked).any(|item| item.id == id)
    }

    /// 評価済みid（除外セット）
    pub fn rated_ids(&self) -> HashSet<&str> {
        self.liked
            .iter()
            .chain(&self.disliked)
            .map(|item| item.id.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.liked.len() + self.disliked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.liked.is_empty() && self.disliked.is_empty()
    }

    /// 保存用のスナップショット
    pub fn snapshot(&self) -> PreferenceSnapshot {
        PreferenceSnapshot {
            liked: self.liked.iter().map(|item| item.id.clone()).collect(),
            disliked: self.disliked.iter().map(|item| item.id.clone()).collect(),
        }
    }
}

/// 保存・読み込み用の好み記録（id参照）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSnapshot {
    #[serde(default)]
    pub liked: Vec<String>,
    #[serde(default)]
    pub disliked: Vec<String>,
}

impl PreferenceSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// カタログと照合して記録を復元する（likedを先に適用）
    pub fn resolve(&self, catalog: &Catalog) -> Result<PreferenceRecord> {
        let mut record = PreferenceRecord::new();
        let ratings = self
            .liked
            .iter()
            .map(|id| (id, Verdict::Like))
            .chain(self.disliked.iter().map(|id| (id, Verdict::Dislike)));

        for (id, verdict) in ratings {
            let item = catalog
                .get(id)
                .ok_or_else(|| Error::UnknownItem(id.clone()))?;
            record.record_rating(item, verdict)?;
        }

        Ok(record)
    }
}
