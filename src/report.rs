//! 診断結果レポート
//!
//! プロファイルとおすすめをまとめ、テキスト表示またはJSONで書き出す。

use crate::cli::OutputFormat;
use crate::error::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use style_genome_common::{
    score_recommendations_with, synthesize_profile, Catalog, PreferenceRecord, RecommendOptions,
    ScoredCandidate, StyleProfile,
};

/// 信頼度バーの幅（文字数）
const CONFIDENCE_BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Local>,
    pub liked_count: usize,
    pub disliked_count: usize,
    pub profile: StyleProfile,
    pub recommendations: Vec<ScoredCandidate>,
}

impl Report {
    pub fn build(record: &PreferenceRecord, catalog: &Catalog, options: &RecommendOptions) -> Self {
        Self {
            generated_at: Local::now(),
            liked_count: record.liked().len(),
            disliked_count: record.disliked().len(),
            profile: synthesize_profile(record),
            recommendations: score_recommendations_with(record, catalog, options),
        }
    }

    /// 「好き」に基づくおすすめか（厳選アイテムではないか）
    pub fn is_personalized(&self) -> bool {
        self.liked_count > 0
    }

    pub fn render_text(&self) -> String {
        let mut out = render_profile(&self.profile);

        if self.is_personalized() {
            let _ = writeln!(out, "\nYour Preferences");
            let _ = writeln!(out, "  ✅ Liked: {} items", self.liked_count);
            let _ = writeln!(out, "  ❌ Disliked: {} items", self.disliked_count);
        }

        out.push('\n');
        out.push_str(&render_recommendations(&self.recommendations, self.is_personalized()));
        out
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 指定形式で出力（パス省略時は標準出力）
    pub fn export(&self, format: OutputFormat, output: Option<&Path>) -> Result<()> {
        let content = match format {
            OutputFormat::Text => self.render_text(),
            OutputFormat::Json => self.to_json()?,
        };

        match output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, content)?;
                println!("✔ 出力: {}", path.display());
            }
            None => println!("{}", content),
        }

        Ok(())
    }
}

/// 信頼度バー
fn confidence_bar(confidence: f64) -> String {
    let filled = ((confidence * CONFIDENCE_BAR_WIDTH as f64).round() as usize).min(CONFIDENCE_BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(CONFIDENCE_BAR_WIDTH - filled))
}

pub fn render_profile(profile: &StyleProfile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Visual Style Genome");
    let _ = writeln!(out, "{}", profile.description);
    let _ = writeln!(
        out,
        "  Confidence Score      {} {}%",
        confidence_bar(profile.confidence),
        profile.confidence_percent()
    );
    let _ = writeln!(out, "  Chromatic Preference: {}", profile.chromatic);
    let _ = writeln!(out, "  Silhouette Style:     {}", profile.silhouette);
    let _ = writeln!(out, "  Texture Affinity:     {}", profile.texture);
    let _ = writeln!(out, "  Context Match:        {}", profile.context);
    out
}

pub fn render_recommendations(recommendations: &[ScoredCandidate], personalized: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "✨ Personalized Recommendations");

    if recommendations.is_empty() {
        let _ = writeln!(out, "  おすすめできるアイテムがありません");
        return out;
    }

    if personalized {
        let _ = writeln!(out, "  We found {} items that match your style", recommendations.len());
    } else {
        let _ = writeln!(out, "  Discover curated styles just for you");
    }

    for (i, candidate) in recommendations.iter().enumerate() {
        let badge = if candidate.is_top_match() { " ★Top Match" } else { "" };
        let _ = write!(out, "  {}. {}{}", i + 1, candidate.item.name, badge);
        if personalized {
            let _ = write!(out, " ({}% match)", candidate.match_percent());
        }
        out.push('\n');
        let _ = writeln!(
            out,
            "     {} · {} · {}",
            candidate.item.category, candidate.item.style, candidate.item.color
        );
    }

    out
}
