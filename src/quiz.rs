//! 対話式スタイル診断モジュール
//!
//! カタログから出題アイテムを抽選し、1件ずつ「好き/好きじゃない」を記録する。
//! 途中終了した場合も、それまでの評価で好み記録を確定する。

use crate::error::{Result, StyleGenomeError};
use dialoguer::Input;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use style_genome_common::{Catalog, CatalogItem, PreferenceRecord, Verdict};
use tracing::debug;

/// 診断セッション
#[derive(Debug, Clone)]
pub struct QuizSession {
    items: Vec<CatalogItem>,
    index: usize,
    record: PreferenceRecord,
}

impl QuizSession {
    /// カタログからランダムに `size` 件を抽選してセッションを開始
    ///
    /// `seed` を指定すると出題順が再現される。
    pub fn new(catalog: &Catalog, size: usize, seed: Option<u64>) -> Result<Self> {
        if catalog.is_empty() {
            return Err(StyleGenomeError::EmptyCatalog("出題できるアイテムがありません".into()));
        }
        if size == 0 {
            return Err(StyleGenomeError::Config("診断アイテム数は1以上にしてください".into()));
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };

        let mut items = catalog.items().to_vec();
        items.shuffle(&mut rng);
        items.truncate(size);

        debug!(
            items = ?items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            "quiz items selected"
        );

        Ok(Self::from_items(items))
    }

    /// 出題順を指定して開始
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self {
            items,
            index: 0,
            record: PreferenceRecord::new(),
        }
    }

    /// 現在の出題アイテム（完了後は None）
    pub fn current(&self) -> Option<&CatalogItem> {
        self.items.get(self.index)
    }

    /// (何問目, 全問数)
    pub fn progress(&self) -> (usize, usize) {
        ((self.index + 1).min(self.items.len()), self.items.len())
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.items.len()
    }

    /// 現在のアイテムを評価して次へ進む
    pub fn rate(&mut self, verdict: Verdict) -> Result<()> {
        let Some(item) = self.items.get(self.index) else {
            return Ok(());
        };

        self.record.record_rating(item, verdict)?;
        self.index += 1;
        Ok(())
    }

    pub fn record(&self) -> &PreferenceRecord {
        &self.record
    }

    /// セッションを終了し、好み記録を確定する
    pub fn finish(self) -> PreferenceRecord {
        self.record
    }
}

/// 対話アクション
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// 好き
    Like,
    /// 好きじゃない
    Dislike,
    /// ここまでで結果を見る
    Finish,
}

/// 入力文字列をアクションに変換
pub fn parse_action(input: &str) -> Option<QuizAction> {
    match input.trim() {
        "l" | "L" | "y" | "+" => Some(QuizAction::Like),
        "d" | "D" | "n" | "-" => Some(QuizAction::Dislike),
        "q" | "Q" => Some(QuizAction::Finish),
        _ => None,
    }
}

/// 対話式で診断を進める
pub fn run_interactive_quiz(mut session: QuizSession, verbose: bool) -> Result<PreferenceRecord> {
    println!("操作: [l]好き [d]好きじゃない [q]ここで結果を見る");
    println!("---\n");

    while let Some(item) = session.current() {
        let (current, total) = session.progress();
        println!("[{}/{}] {}", current, total, item.name);
        if verbose {
            println!(
                "  ({} / {} / {} / {})",
                item.category, item.style, item.color, item.formality
            );
        }
        if !item.image_ref.is_empty() {
            println!("  画像: {}", item.image_ref);
        }

        match prompt_quiz_action()? {
            QuizAction::Like => {
                session.rate(Verdict::Like)?;
                println!("  → 好き\n");
            }
            QuizAction::Dislike => {
                session.rate(Verdict::Dislike)?;
                println!("  → 好きじゃない\n");
            }
            QuizAction::Finish => {
                println!("ここまでの評価で診断します...\n");
                break;
            }
        }
    }

    Ok(session.finish())
}

/// 評価プロンプト（不正な入力は再入力）
fn prompt_quiz_action() -> Result<QuizAction> {
    loop {
        let input: String = Input::new()
            .with_prompt("評価 (l:好き d:好きじゃない q:終了)")
            .interact_text()
            .map_err(|e| StyleGenomeError::Prompt(e.to_string()))?;

        match parse_action(&input) {
            Some(action) => return Ok(action),
            None => println!("  l / d / q のいずれかを入力してください"),
        }
    }
}
