use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use style_genome_common::Formality;

#[derive(Parser)]
#[command(name = "style-genome")]
#[command(about = "ファッション好み診断・スタイルゲノム生成ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 対話式でアイテムを評価して診断
    Quiz {
        /// カタログJSONファイル（省略時は設定 or 組み込みカタログ）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 評価するアイテム数（1以上、省略時は設定値）
        #[arg(short = 'n', long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        items: Option<usize>,

        /// 抽選のシード（同じ値で同じ出題順）
        #[arg(long)]
        seed: Option<u64>,

        /// 評価結果（好み記録JSON）の保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 好み記録からスタイルプロファイルを表示
    Profile {
        /// 好み記録JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// カタログJSONファイル
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 好み記録からおすすめを生成
    Recommend {
        /// 好み記録JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// カタログJSONファイル
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// 出力形式 (text/json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// おすすめ件数（1以上、省略時は設定値）
        ///
        /// 採点したおすすめにだけ適用する。「好き」が無いときは厳選アイテムをすべて表示する。
        #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        limit: Option<usize>,
    },

    /// カタログを表示/書き出し
    Catalog {
        /// カタログJSONファイル
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// フォーマル度で絞り込み (casual/smart-casual/business/formal)
        #[arg(long)]
        formality: Option<Formality>,

        /// JSONとして書き出すパス
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// 設定を表示/編集
    Config {
        /// 診断アイテム数を設定
        #[arg(long)]
        set_quiz_size: Option<usize>,

        /// 既定のカタログJSONを設定
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// おすすめ件数を設定
        #[arg(long)]
        set_limit: Option<usize>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

/// 結果の出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("txt".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("pdf".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_recommend_command() {
        let cli = Cli::try_parse_from([
            "style-genome", "recommend", "prefs.json", "--format", "json", "--limit", "3", "-v",
        ])
        .expect("パース失敗");

        assert!(cli.verbose);
        match cli.command {
            Commands::Recommend { input, format, limit, catalog, output } => {
                assert_eq!(input, PathBuf::from("prefs.json"));
                assert_eq!(format, OutputFormat::Json);
                assert_eq!(limit, Some(3));
                assert!(catalog.is_none());
                assert!(output.is_none());
            }
            _ => panic!("recommend として解釈されていない"),
        }
    }

    #[test]
    fn test_zero_counts_rejected() {
        assert!(Cli::try_parse_from(["style-genome", "quiz", "-n", "0"]).is_err());
        assert!(Cli::try_parse_from(["style-genome", "recommend", "prefs.json", "--limit", "0"]).is_err());

        let cli = Cli::try_parse_from(["style-genome", "quiz", "-n", "1"]).expect("パース失敗");
        assert!(matches!(cli.command, Commands::Quiz { items: Some(1), .. }));
    }

    #[test]
    fn test_parse_catalog_formality() {
        let cli = Cli::try_parse_from(["style-genome", "catalog", "--formality", "smart_casual"])
            .expect("パース失敗");
        match cli.command {
            Commands::Catalog { formality, export, .. } => {
                assert_eq!(formality, Some(Formality::SmartCasual));
                assert!(export.is_none());
            }
            _ => panic!("catalog として解釈されていない"),
        }

        assert!(Cli::try_parse_from(["style-genome", "catalog", "--formality", "black-tie"]).is_err());
    }

    #[test]
    fn test_parse_quiz_defaults() {
        let cli = Cli::try_parse_from(["style-genome", "quiz", "--seed", "42"]).expect("パース失敗");
        match cli.command {
            Commands::Quiz { items, seed, .. } => {
                assert_eq!(items, None);
                assert_eq!(seed, Some(42));
            }
            _ => panic!("quiz として解釈されていない"),
        }
    }
}
