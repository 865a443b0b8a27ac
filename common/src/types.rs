//! 診断データの型定義
//!
//! CLIとライブラリで共有される型:
//! - CatalogItem: カタログの1アイテム
//! - StyleProfile: 好みから導出したスタイルプロファイル
//! - ScoredCandidate: スコア付きのおすすめ候補

use serde::{Deserialize, Serialize};

/// フォーマル度（閉じた列挙）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Formality {
    Casual,
    #[serde(alias = "smart_casual")]
    SmartCasual,
    Business,
    Formal,
}

impl Formality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::SmartCasual => "smart-casual",
            Formality::Business => "business",
            Formality::Formal => "formal",
        }
    }
}

impl std::str::FromStr for Formality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "casual" => Ok(Formality::Casual),
            "smart-casual" | "smart_casual" => Ok(Formality::SmartCasual),
            "business" => Ok(Formality::Business),
            "formal" => Ok(Formality::Formal),
            _ => Err(format!(
                "Unknown formality: {}. Use casual, smart-casual, business, or formal",
                s
            )),
        }
    }
}

impl std::fmt::Display for Formality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// カタログアイテム
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,

    pub name: String,

    /// 画像の参照先（エンジンでは解釈しない）
    #[serde(default)]
    pub image_ref: String,

    #[serde(default)]
    pub category: String,         // outerwear / tops / bottoms / dresses ...

    #[serde(default)]
    pub style: String,            // professional / casual / edgy ...

    #[serde(default)]
    pub color: String,

    pub formality: Formality,
}

impl CatalogItem {
    pub fn new(
        id: &str,
        name: &str,
        category: &str,
        style: &str,
        color: &str,
        formality: Formality,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            image_ref: String::new(),
            category: category.to_string(),
            style: style.to_string(),
            color: color.to_string(),
            formality,
        }
    }

    pub fn with_image_ref(mut self, image_ref: &str) -> Self {
        self.image_ref = image_ref.to_string();
        self
    }
}

/// 評価（好き/好きじゃない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Like,
    Dislike,
}

/// スタイルプロファイル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    pub chromatic: String,
    pub silhouette: String,
    pub texture: String,
    pub context: String,
    /// 0.3〜0.9
    pub confidence: f64,
    pub description: String,
}

impl StyleProfile {
    /// 表示用の信頼度（%）
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

/// スコア付きおすすめ候補
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub score: f64,
}

/// マッチ率の基準スコア
pub const MATCH_BASE_SCORE: f64 = 8.0;

/// トップマッチ表示の閾値
pub const TOP_MATCH_THRESHOLD: f64 = 6.0;

impl ScoredCandidate {
    pub fn new(item: CatalogItem, score: f64) -> Self {
        Self { item, score }
    }

    /// マッチ率（%）。基準スコアを超えると100%を超える
    pub fn match_percent(&self) -> u32 {
        (self.score / MATCH_BASE_SCORE * 100.0).round() as u32
    }

    pub fn is_top_match(&self) -> bool {
        self.score > TOP_MATCH_THRESHOLD
    }
}
