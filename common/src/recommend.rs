//! おすすめスコアリングモジュール
//!
//! 好み記録とカタログから、未評価アイテムを加点方式で採点して並べる。
//!
//! ## 採点
//! 1. 完全一致: カラー +4 / スタイル +3 / カテゴリ +2 / フォーマル度 +2
//! 2. 類似属性（下の表）: カラー +2 / スタイル +2 / フォーマル度 +1
//! 3. 未経験カテゴリ +1（既に加点がある場合のみ）
//! 4. 0点は 0.5 に底上げ

use crate::catalog::Catalog;
use crate::preference::PreferenceRecord;
use crate::types::{CatalogItem, ScoredCandidate};
use std::collections::HashSet;
use tracing::debug;

/// 類似属性ルール（好きな値, 加点対象の値, 加点）
pub type AffinityTable = &'static [(&'static str, &'static [&'static str], f64)];

pub const COLOR_AFFINITY: AffinityTable = &[
    ("black", &["navy", "burgundy"], 2.0),
    ("white", &["cream", "beige"], 2.0),
    ("blue", &["navy"], 2.0),
    ("red", &["burgundy", "pink"], 2.0),
];

pub const STYLE_AFFINITY: AffinityTable = &[
    ("professional", &["elegant", "sophisticated", "classic"], 2.0),
    ("casual", &["relaxed", "cozy", "nautical"], 2.0),
    ("elegant", &["professional", "sophisticated", "glamorous"], 2.0),
    ("romantic", &["feminine", "cheerful"], 2.0),
];

pub const FORMALITY_AFFINITY: AffinityTable = &[
    ("formal", &["business"], 1.0),
    ("business", &["smart-casual"], 1.0),
    ("casual", &["smart-casual"], 1.0),
];

const COLOR_MATCH: f64 = 4.0;
const STYLE_MATCH: f64 = 3.0;
const CATEGORY_MATCH: f64 = 2.0;
const FORMALITY_MATCH: f64 = 2.0;
const DIVERSITY_BONUS: f64 = 1.0;
const UNMATCHED_FLOOR: f64 = 0.5;

/// 初回ユーザー向けの厳選アイテム（表示名）
pub const CURATED_PICKS: [&str; 6] = [
    "Red Cocktail Dress",
    "Classic Black Blazer",
    "Burgundy Midi Dress",
    "Emerald Silk Blouse",
    "Camel Wool Coat",
    "Pink Cashmere Cardigan",
];

/// おすすめオプション
#[derive(Debug, Clone)]
pub struct RecommendOptions {
    /// 採点したおすすめの件数上限（「好き」が無いときの厳選アイテムには適用しない）
    pub limit: usize,
    /// 厳選アイテムの表示名（順序が優先度）
    pub curated_names: Vec<String>,
    /// 厳選アイテムに付けるスコア
    pub curated_score: f64,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            limit: 4,
            curated_names: CURATED_PICKS.iter().map(|name| name.to_string()).collect(),
            curated_score: 8.0,
        }
    }
}

/// 「好き」アイテムの属性集合
struct LikedProfile<'a> {
    colors: HashSet<&'a str>,
    styles: HashSet<&'a str>,
    categories: HashSet<&'a str>,
    formalities: HashSet<&'a str>,
}

impl<'a> LikedProfile<'a> {
    fn from_items(items: &'a [CatalogItem]) -> Self {
        let non_empty = |value: &'a str| (!value.is_empty()).then_some(value);
        Self {
            colors: items.iter().filter_map(|i| non_empty(i.color.as_str())).collect(),
            styles: items.iter().filter_map(|i| non_empty(i.style.as_str())).collect(),
            categories: items.iter().filter_map(|i| non_empty(i.category.as_str())).collect(),
            formalities: items.iter().map(|i| i.formality.as_str()).collect(),
        }
    }
}

/// 完全一致の加点（空の値は一致しない）
fn exact(liked: &HashSet<&str>, value: &str, points: f64) -> f64 {
    if !value.is_empty() && liked.contains(value) {
        points
    } else {
        0.0
    }
}

/// 類似属性ルールの加点（ルールごとに独立して加算）
fn affinity(table: AffinityTable, liked: &HashSet<&str>, value: &str) -> f64 {
    if value.is_empty() {
        return 0.0;
    }
    table
        .iter()
        .filter(|(trigger, targets, _)| liked.contains(trigger) && targets.contains(&value))
        .map(|(_, _, points)| points)
        .sum()
}

/// 1アイテムを採点
fn score_candidate(liked: &LikedProfile<'_>, item: &CatalogItem) -> f64 {
    let formality = item.formality.as_str();

    let mut score = exact(&liked.colors, &item.color, COLOR_MATCH)
        + exact(&liked.styles, &item.style, STYLE_MATCH)
        + exact(&liked.categories, &item.category, CATEGORY_MATCH)
        + exact(&liked.formalities, formality, FORMALITY_MATCH);

    score += affinity(COLOR_AFFINITY, &liked.colors, &item.color);
    score += affinity(STYLE_AFFINITY, &liked.styles, &item.style);
    score += affinity(FORMALITY_AFFINITY, &liked.formalities, formality);

    // 新しいカテゴリへの加点だけでは正のスコアにしない
    if !liked.categories.contains(item.category.as_str()) && score > 0.0 {
        score += DIVERSITY_BONUS;
    }

    if score == 0.0 {
        score = UNMATCHED_FLOOR;
    }

    score
}

/// 厳選アイテムをカタログから表示名で解決
fn curated_candidates<'a>(
    catalog: &'a Catalog,
    options: &'a RecommendOptions,
) -> impl Iterator<Item = ScoredCandidate> + 'a {
    options
        .curated_names
        .iter()
        .filter_map(move |name| catalog.find_by_name(name))
        .map(move |item| ScoredCandidate::new(item.clone(), options.curated_score))
}

/// 既定オプションでおすすめを生成
pub fn score_recommendations(record: &PreferenceRecord, catalog: &Catalog) -> Vec<ScoredCandidate> {
    score_recommendations_with(record, catalog, &RecommendOptions::default())
}

/// おすすめを生成する
///
/// # Arguments
/// * `record` - 評価済みの好み記録
/// * `catalog` - 対象カタログ
/// * `options` - 件数上限・厳選アイテム
///
/// # Returns
/// スコア降順（同点はカタログ順）の候補。「好き」が無い場合は厳選アイテム
pub fn score_recommendations_with(
    record: &PreferenceRecord,
    catalog: &Catalog,
    options: &RecommendOptions,
) -> Vec<ScoredCandidate> {
    let excluded = record.rated_ids();

    if record.liked().is_empty() {
        return curated_candidates(catalog, options)
            .filter(|c| !excluded.contains(c.item.id.as_str()))
            .collect();
    }

    let liked = LikedProfile::from_items(record.liked());

    let mut scored: Vec<ScoredCandidate> = catalog
        .iter()
        .filter(|item| !excluded.contains(item.id.as_str()))
        .map(|item| ScoredCandidate::new(item.clone(), score_candidate(&liked, item)))
        .collect();

    // 安定ソートなので同点はカタログ順のまま
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(options.limit);

    if scored.len() < options.limit {
        let backfill: Vec<ScoredCandidate> = curated_candidates(catalog, options)
            .filter(|c| !scored.iter().any(|s| s.item.id == c.item.id))
            .take(options.limit - scored.len())
            .collect();
        scored.extend(backfill);
    }

    debug!(
        recommendations = ?scored
            .iter()
            .map(|c| (c.item.name.as_str(), c.score))
            .collect::<Vec<_>>(),
        "generated recommendations"
    );

    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Formality, Verdict};

    fn record(catalog: &Catalog, liked: &[&str], disliked: &[&str]) -> PreferenceRecord {
        let mut record = PreferenceRecord::new();
        for id in liked {
            record.record_rating(catalog.get(id).expect("アイテムなし"), Verdict::Like).unwrap();
        }
        for id in disliked {
            record.record_rating(catalog.get(id).expect("アイテムなし"), Verdict::Dislike).unwrap();
        }
        record
    }

    fn ids(candidates: &[ScoredCandidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.item.id.as_str()).collect()
    }

    fn item(id: &str, category: &str, style: &str, color: &str, formality: Formality) -> CatalogItem {
        CatalogItem::new(id, id, category, style, color, formality)
    }

    #[test]
    fn test_blazer_and_jacket_scenario() {
        let catalog = Catalog::canonical();
        let record = record(&catalog, &["item_001", "item_005"], &[]);

        let result = score_recommendations(&record, &catalog);

        // item_009: カラー+4 スタイル+3 formal→business+1 新カテゴリ+1
        // extra_002: black→burgundy+2 professional→sophisticated+2 casual→smart-casual+1 新カテゴリ+1
        // item_007: フォーマル度+2 black→navy+2 新カテゴリ+1
        // extra_003: カテゴリ+2 professional→classic+2 formal→business+1
        assert_eq!(ids(&result), vec!["item_009", "extra_002", "item_007", "extra_003"]);
        let scores: Vec<f64> = result.iter().map(|c| c.score).collect();
        assert_eq!(scores, vec![9.0, 6.0, 5.0, 5.0]);
    }

    #[test]
    fn test_empty_liked_returns_curated() {
        let catalog = Catalog::canonical();
        let result = score_recommendations(&PreferenceRecord::new(), &catalog);

        let names: Vec<&str> = result.iter().map(|c| c.item.name.as_str()).collect();
        assert_eq!(names, CURATED_PICKS.to_vec());
        assert!(result.iter().all(|c| c.score == 8.0));
    }

    #[test]
    fn test_limit_applies_to_scored_results_only() {
        let catalog = Catalog::canonical();
        let options = RecommendOptions { limit: 2, ..Default::default() };

        let curated = score_recommendations_with(&PreferenceRecord::new(), &catalog, &options);
        assert_eq!(curated.len(), CURATED_PICKS.len());

        let record = record(&catalog, &["item_001"], &[]);
        let scored = score_recommendations_with(&record, &catalog, &options);
        assert_eq!(scored.len(), 2);
    }

    #[test]
    fn test_empty_liked_curated_excludes_disliked() {
        let catalog = Catalog::canonical();
        let record = record(&catalog, &[], &["item_004", "item_003"]);
        let result = score_recommendations(&record, &catalog);

        assert_eq!(result.len(), 5);
        assert!(!ids(&result).contains(&"item_004"));
        assert_eq!(result[0].item.name, "Classic Black Blazer");
    }

    #[test]
    fn test_curated_skips_names_missing_from_catalog() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("x", "Camel Wool Coat", "outerwear", "classic", "camel", Formality::Business),
            CatalogItem::new("y", "Something Else", "tops", "cozy", "cream", Formality::Casual),
        ])
        .unwrap();
        let result = score_recommendations(&PreferenceRecord::new(), &catalog);
        assert_eq!(ids(&result), vec!["x"]);
    }

    #[test]
    fn test_exclusion_invariant() {
        let catalog = Catalog::canonical();
        let liked = ["item_002", "item_004", "extra_004"];
        let disliked = ["item_009", "extra_002"];
        let record = record(&catalog, &liked, &disliked);

        let result = score_recommendations(&record, &catalog);
        assert_eq!(result.len(), 4);
        for c in &result {
            assert!(!liked.contains(&c.item.id.as_str()));
            assert!(!disliked.contains(&c.item.id.as_str()));
        }
    }

    #[test]
    fn test_sorted_and_ties_follow_catalog_order() {
        let catalog = Catalog::canonical();
        let record = record(&catalog, &["item_003"], &[]);
        let options = RecommendOptions { limit: 20, ..Default::default() };

        let result = score_recommendations_with(&record, &catalog, &options);
        assert_eq!(result.len(), 14);
        assert!(result.windows(2).all(|w| w[0].score >= w[1].score));

        let position = |id: &str| catalog.iter().position(|i| i.id == id).unwrap();
        for w in result.windows(2) {
            if w[0].score == w[1].score {
                assert!(position(w[0].item.id.as_str()) < position(w[1].item.id.as_str()));
            }
        }
    }

    #[test]
    fn test_unmatched_floor_and_diversity_rule() {
        let catalog = Catalog::new(vec![
            item("liked", "tops", "edgy", "black", Formality::Formal),
            // 一致なし・新カテゴリ → 多様性ボーナスは付かず 0.5
            item("none", "bottoms", "cheerful", "yellow", Formality::SmartCasual),
            // カラーのみ一致・新カテゴリ → 4 + 1
            item("color", "dresses", "cheerful", "black", Formality::SmartCasual),
            // カテゴリのみ一致 → 2（多様性ボーナスなし）
            item("category", "tops", "cheerful", "yellow", Formality::SmartCasual),
        ])
        .unwrap();
        let record = record(&catalog, &["liked"], &[]);

        let result = score_recommendations(&record, &catalog);
        assert_eq!(ids(&result), vec!["color", "category", "none"]);
        let scores: Vec<f64> = result.iter().map(|c| c.score).collect();
        assert_eq!(scores[..2], [5.0, 2.0]);
        assert_eq!(scores[2], 0.5);
    }

    #[test]
    fn test_affinity_bonuses_stack() {
        let catalog = Catalog::new(vec![
            item("a", "tops", "professional", "black", Formality::Formal),
            item("b", "tops", "elegant", "red", Formality::Business),
            item("c", "dresses", "sophisticated", "burgundy", Formality::SmartCasual),
        ])
        .unwrap();
        let record = record(&catalog, &["a", "b"], &[]);

        let result = score_recommendations(&record, &catalog);
        // black→burgundy+2 red→burgundy+2 professional→sophisticated+2
        // elegant→sophisticated+2 business→smart-casual+1 新カテゴリ+1
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].score, 10.0);
    }

    #[test]
    fn test_backfill_with_curated() {
        let catalog = Catalog::canonical();
        let all: Vec<&str> = catalog.iter().map(|i| i.id.as_str()).collect();
        // 2件だけ未評価で残す
        let liked: Vec<&str> = all
            .iter()
            .copied()
            .filter(|id| *id != "item_010" && *id != "item_006")
            .collect();
        let record = record(&catalog, &liked, &[]);

        let result = score_recommendations(&record, &catalog);
        assert_eq!(result.len(), 4);
        let result_ids = ids(&result);
        assert!(result_ids[..2].contains(&"item_006"));
        assert!(result_ids[..2].contains(&"item_010"));
        // 厳選リスト順で補充
        assert_eq!(result[2].item.name, "Red Cocktail Dress");
        assert_eq!(result[3].item.name, "Classic Black Blazer");
        assert_eq!(result[2].score, 8.0);
    }

    #[test]
    fn test_empty_catalog_yields_empty() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        let mut record = PreferenceRecord::new();
        let liked = item("a", "tops", "cozy", "cream", Formality::Casual);
        record.record_rating(&liked, Verdict::Like).unwrap();

        assert!(score_recommendations(&record, &catalog).is_empty());
        assert!(score_recommendations(&PreferenceRecord::new(), &catalog).is_empty());
    }

    #[test]
    fn test_empty_fields_never_match() {
        let mut record = PreferenceRecord::new();
        let liked = item("a", "", "", "", Formality::Casual);
        record.record_rating(&liked, Verdict::Like).unwrap();
        let candidate = item("b", "", "", "", Formality::Formal);

        let profile = LikedProfile::from_items(record.liked());
        assert_eq!(score_candidate(&profile, &candidate), UNMATCHED_FLOOR);
    }

    #[test]
    fn test_idempotent() {
        let catalog = Catalog::canonical();
        let record = record(&catalog, &["item_006", "extra_001"], &["item_001"]);
        assert_eq!(
            score_recommendations(&record, &catalog),
            score_recommendations(&record, &catalog)
        );
    }
}
