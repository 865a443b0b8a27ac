use clap::Parser;
use style_genome::{catalog, cli, config, error, quiz, report};
use cli::{Cli, Commands, OutputFormat};
use config::Config;
use error::Result;
use std::path::Path;
use style_genome_common::{PreferenceSnapshot, RecommendOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Quiz { catalog, items, seed, output } => {
            println!("👗 style-genome - スタイル診断\n");

            let catalog = catalog::load_catalog(catalog.as_deref(), &config)?;
            let size = items.unwrap_or(config.quiz_size);
            let session = quiz::QuizSession::new(&catalog, size, seed)?;
            println!("✔ {}件のアイテムを出題します\n", session.progress().1);

            let record = quiz::run_interactive_quiz(session, cli.verbose)?;

            if let Some(path) = output {
                let json = record.snapshot().to_json()?;
                std::fs::write(&path, json)?;
                println!("✔ 好み記録を保存: {}\n", path.display());
            }

            let options = recommend_options(None, &config);
            let report = report::Report::build(&record, &catalog, &options);
            report.export(OutputFormat::Text, None)?;

            println!("\n✅ 診断完了");
        }

        Commands::Profile { input, catalog } => {
            let catalog = catalog::load_catalog(catalog.as_deref(), &config)?;
            let record = load_snapshot(&input)?.resolve(&catalog)?;
            let profile = style_genome_common::synthesize_profile(&record);
            print!("{}", report::render_profile(&profile));
        }

        Commands::Recommend { input, catalog, format, output, limit } => {
            let catalog = catalog::load_catalog(catalog.as_deref(), &config)?;
            let record = load_snapshot(&input)?.resolve(&catalog)?;
            let options = recommend_options(limit, &config);

            let report = report::Report::build(&record, &catalog, &options);
            report.export(format, output.as_deref())?;
        }

        Commands::Catalog { catalog, formality, export } => {
            let catalog = catalog::load_catalog(catalog.as_deref(), &config)?;
            let items = catalog::filter_by_formality(&catalog, formality);

            if let Some(path) = export {
                let json = serde_json::to_string_pretty(&items)?;
                std::fs::write(&path, json)?;
                println!("✔ カタログを書き出しました: {} ({}件)", path.display(), items.len());
            } else {
                match formality {
                    Some(f) => println!("カタログ: {}件（{}: {}件）", catalog.len(), f, items.len()),
                    None => println!("カタログ: {}件", catalog.len()),
                }
                for item in &items {
                    println!(
                        "  {:<10} {:<28} {} / {} / {} / {}",
                        item.id, item.name, item.category, item.style, item.color, item.formality
                    );
                }
            }
        }

        Commands::Config { set_quiz_size, set_catalog, set_limit, show } => {
            let mut config = config;
            let changed = set_quiz_size.is_some() || set_catalog.is_some() || set_limit.is_some();

            if let Some(size) = set_quiz_size {
                config.set_quiz_size(size)?;
                println!("✔ 診断アイテム数を設定しました: {}", size);
            }

            if let Some(path) = set_catalog {
                println!("✔ カタログを設定しました: {}", path.display());
                config.catalog_path = Some(path);
            }

            if let Some(limit) = set_limit {
                config.set_recommendation_limit(limit)?;
                println!("✔ おすすめ件数を設定しました: {}", limit);
            }

            if changed {
                config.save()?;
            }

            if show || !changed {
                println!("設定:");
                println!("  診断アイテム数: {}", config.quiz_size);
                println!("  おすすめ件数: {}", config.recommendation_limit);
                match config.effective_catalog_path() {
                    Some(path) => println!("  カタログ: {}", path.display()),
                    None => println!("  カタログ: 組み込み（{}件）", style_genome_common::Catalog::canonical().len()),
                }
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_snapshot(path: &Path) -> Result<PreferenceSnapshot> {
    if !path.exists() {
        return Err(error::StyleGenomeError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(PreferenceSnapshot::from_json(&content)?)
}

fn recommend_options(limit: Option<usize>, config: &Config) -> RecommendOptions {
    RecommendOptions {
        limit: limit.unwrap_or(config.recommendation_limit),
        ..Default::default()
    }
}
