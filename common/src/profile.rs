//! スタイルプロファイル生成モジュール
//!
//! 「好き」と評価したアイテムから4つの特徴と信頼度を導出する。
//! 特徴の対応表は上から順に評価し、最初に一致した行を採用する。

use crate::frequency::most_frequent;
use crate::preference::PreferenceRecord;
use crate::types::StyleProfile;
use tracing::debug;

/// 対応表（値, ラベル）
pub type TraitTable = &'static [(&'static str, &'static str)];

/// 最頻出カラー → 色彩傾向
pub const CHROMATIC_TABLE: TraitTable = &[
    ("black", "Bold & Dramatic"),
    ("blue", "Cool & Sophisticated"),
    ("white", "Clean & Minimalist"),
    ("red", "Warm & Vibrant"),
    ("beige", "Earthy & Natural"),
    ("striped", "Playful & Patterned"),
];
pub const CHROMATIC_DEFAULT: &str = "Neutral & Balanced";

/// 最頻出スタイル → シルエット
pub const SILHOUETTE_TABLE: TraitTable = &[
    ("elegant", "Refined & Structured"),
    ("edgy", "Bold & Angular"),
    ("minimalist", "Clean & Simple"),
    ("casual", "Relaxed & Comfortable"),
    ("formal", "Sophisticated & Tailored"),
    ("cozy", "Soft & Comfortable"),
    ("classic", "Timeless & Elegant"),
];
pub const SILHOUETTE_DEFAULT: &str = "Classic & Versatile";

/// カテゴリ（含まれるか）→ 素材感。優先順
pub const TEXTURE_TABLE: TraitTable = &[
    ("outerwear", "Structured & Layered"),
    ("dresses", "Flowing & Feminine"),
    ("tops", "Versatile & Adaptable"),
    ("bottoms", "Structured & Practical"),
];
pub const TEXTURE_DEFAULT: &str = "Mixed Textures";

/// 最頻出フォーマル度 → 利用シーン
pub const CONTEXT_TABLE: TraitTable = &[
    ("business", "Professional & Polished"),
    ("casual", "Relaxed & Approachable"),
    ("formal", "Elegant & Sophisticated"),
    ("smart-casual", "Versatile & Modern"),
];
pub const CONTEXT_DEFAULT: &str = "Adaptable Style";

const MIN_CONFIDENCE: f64 = 0.3;
const MAX_CONFIDENCE: f64 = 0.9;
const BASE_CONFIDENCE: f64 = 0.4;
const CONFIDENCE_PER_LIKE: f64 = 0.1;

/// 対応表を引く（最初に一致した行）
pub fn lookup(table: TraitTable, value: &str, default: &'static str) -> &'static str {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, label)| *label)
        .unwrap_or(default)
}

/// 対応表のうち、値の集合に含まれる最初の行
fn first_present(
    table: TraitTable,
    mut present: impl FnMut(&str) -> bool,
    default: &'static str,
) -> &'static str {
    table
        .iter()
        .find(|(key, _)| present(*key))
        .map(|(_, label)| *label)
        .unwrap_or(default)
}

/// 「好き」の件数から信頼度を計算（9件以上で頭打ち）
pub fn confidence_for(liked_count: usize) -> f64 {
    if liked_count == 0 {
        return MIN_CONFIDENCE;
    }
    (BASE_CONFIDENCE + CONFIDENCE_PER_LIKE * liked_count as f64).min(MAX_CONFIDENCE)
}

/// 未診断時のプロファイル
pub fn uninitialized_profile() -> StyleProfile {
    StyleProfile {
        chromatic: CHROMATIC_DEFAULT.to_string(),
        silhouette: SILHOUETTE_DEFAULT.to_string(),
        texture: "Mixed Preferences".to_string(),
        context: CONTEXT_DEFAULT.to_string(),
        confidence: MIN_CONFIDENCE,
        description: "Complete the quiz to discover your unique style DNA!".to_string(),
    }
}

/// 好み記録からスタイルプロファイルを生成
pub fn synthesize_profile(record: &PreferenceRecord) -> StyleProfile {
    let liked = record.liked();
    if liked.is_empty() {
        return uninitialized_profile();
    }

    let dominant_color = most_frequent(liked.iter().map(|i| i.color.as_str())).unwrap_or("varied");
    let dominant_style = most_frequent(liked.iter().map(|i| i.style.as_str())).unwrap_or("eclectic");
    let dominant_formality =
        most_frequent(liked.iter().map(|i| i.formality.as_str())).unwrap_or("versatile");

    debug!(dominant_color, dominant_style, dominant_formality, "dominant preferences");

    let texture = first_present(
        TEXTURE_TABLE,
        |category| liked.iter().any(|i| i.category == category),
        TEXTURE_DEFAULT,
    );

    StyleProfile {
        chromatic: lookup(CHROMATIC_TABLE, dominant_color, CHROMATIC_DEFAULT).to_string(),
        silhouette: lookup(SILHOUETTE_TABLE, dominant_style, SILHOUETTE_DEFAULT).to_string(),
        texture: texture.to_string(),
        context: lookup(CONTEXT_TABLE, dominant_formality, CONTEXT_DEFAULT).to_string(),
        confidence: confidence_for(liked.len()),
        description: format!(
            "Based on your {} likes, you prefer {} styles with {} tones.",
            liked.len(),
            dominant_style,
            dominant_color
        ),
    }
}
