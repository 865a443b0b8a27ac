//! カタログモジュール
//!
//! 診断・おすすめの対象となるアイテム集合を管理する。
//! 読み込み時に検証と正規化を行い、スコアリング側では不正データを扱わない。

use crate::error::{Error, Result};
use crate::types::{CatalogItem, Formality};
use serde::Serialize;
use std::collections::HashSet;

const UNSPLASH: &str = "https://images.unsplash.com";

/// 順序付きの不変カタログ
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// アイテム一覧からカタログを作成（検証・正規化あり）
    pub fn new(items: Vec<CatalogItem>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(items.len());

        for item in items {
            let item = normalize_item(item)?;
            if !seen.insert(item.id.clone()) {
                return Err(Error::DuplicateItem(item.id));
            }
            normalized.push(item);
        }

        Ok(Self { items: normalized })
    }

    /// JSON文字列（アイテムの配列）から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<CatalogItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// 組み込みの15アイテム
    pub fn canonical() -> Self {
        use Formality::*;

        let rows: [(&str, &str, &str, &str, &str, Formality, &str); 15] = [
            // プロフェッショナル・エレガント
            ("item_001", "Classic Black Blazer", "outerwear", "professional", "black", Formal, "photo-1594633312681-425c7b97ccd1"),
            ("item_002", "White Cotton Button Shirt", "tops", "classic", "white", Business, "photo-1603252109303-2751441dd157"),
            ("item_009", "Black Pencil Skirt", "bottoms", "professional", "black", Business, "photo-1506629905607-d405d7d3b880"),
            // カジュアル
            ("item_003", "Classic Blue Jeans", "bottoms", "casual", "blue", Casual, "photo-1542272604-787c3835535d"),
            ("item_007", "Navy Striped Top", "tops", "nautical", "navy", Casual, "photo-1434389677669-e08b4cac3105"),
            ("item_008", "Cream Knit Sweater", "tops", "cozy", "cream", Casual, "photo-1515886657613-9f3515b0c78f"),
            // ドレス
            ("item_004", "Red Cocktail Dress", "dresses", "glamorous", "red", Formal, "photo-1566479179817-c0ae8e4b4b3d"),
            ("item_006", "Floral Summer Dress", "dresses", "romantic", "floral", Casual, "photo-1496747611176-843222e1e57c"),
            ("item_010", "Yellow Sundress", "dresses", "cheerful", "yellow", Casual, "photo-1572804013309-59a88b7e92f1"),
            // エッジ
            ("item_005", "Black Leather Jacket", "outerwear", "edgy", "black", Casual, "photo-1520975954732-35dd22299614"),
            // バリエーション
            ("extra_001", "Emerald Silk Blouse", "tops", "elegant", "green", Business, "photo-1551028719-00167b16eac5"),
            ("extra_002", "Burgundy Midi Dress", "dresses", "sophisticated", "burgundy", SmartCasual, "photo-1583496661160-fb5886a13d27"),
            ("extra_003", "Camel Wool Coat", "outerwear", "classic", "camel", Business, "photo-1578662996442-48f60103fc96"),
            ("extra_004", "White Linen Pants", "bottoms", "relaxed", "white", SmartCasual, "photo-1473966968600-fa801b869a1a"),
            ("extra_005", "Pink Cashmere Cardigan", "tops", "feminine", "pink", Casual, "photo-1583743814966-8936f37f4678"),
        ];

        let items = rows
            .iter()
            .map(|&(id, name, category, style, color, formality, photo)| {
                CatalogItem::new(id, name, category, style, color, formality)
                    .with_image_ref(&format!("{}/{}?w=300&h=400&fit=crop", UNSPLASH, photo))
            })
            .collect();

        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// 表示名の完全一致で検索
    pub fn find_by_name(&self, name: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogItem;
    type IntoIter = std::slice::Iter<'a, CatalogItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// タグを正規化し、必須フィールドの欠落を検出する
fn normalize_item(mut item: CatalogItem) -> Result<CatalogItem> {
    item.id = item.id.trim().to_string();
    item.name = item.name.trim().to_string();
    item.category = normalize_tag(&item.category);
    item.style = normalize_tag(&item.style);
    item.color = normalize_tag(&item.color);

    if item.id.is_empty() {
        return Err(Error::InvalidItem(format!("id が空です (name: {})", item.name)));
    }

    let missing = [
        ("name", &item.name),
        ("category", &item.category),
        ("style", &item.style),
        ("color", &item.color),
    ]
    .iter()
    .find(|(_, value)| value.is_empty())
    .map(|(field, _)| *field);

    if let Some(field) = missing {
        return Err(Error::InvalidItem(format!("{}: {} が空です", item.id, field)));
    }

    Ok(item)
}

fn normalize_tag(value: &str) -> String {
    value.trim().to_lowercase()
}
