use std::time::Duration;

use clap::Parser;
use shopkit::config::{Cli, Command, FileConfig};
use shopkit::core::{calendar, catalog, compute, text};
use shopkit::domain::model::{Describe, Scalar};
use shopkit::utils::logger;
use shopkit::ShopkitError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("Starting shopkit CLI");

    let config = match &cli.config {
        Some(path) => match FileConfig::load_from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("Failed to load config {}: {}", path.display(), e);
                eprintln!("invalid config {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!("Command failed: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Command, config: &FileConfig) -> shopkit::Result<()> {
    match command {
        Command::FormatName { text: value, case } => {
            let mode = case.unwrap_or_else(|| config.default_case());
            println!("{}", text::render(&value, Some(mode)));
        }

        Command::Featured { input, min_rating } => {
            let books = catalog::read_books(&input)?;
            let threshold = min_rating.unwrap_or_else(|| config.min_rating());
            let picks = catalog::featured(&books, threshold);

            tracing::info!(
                "{} of {} books rated above {}",
                picks.len(),
                books.len(),
                threshold
            );
            println!("{}", serde_json::to_string_pretty(&picks)?);
        }

        Command::Priciest { input } => {
            let products = catalog::read_products(&input)?;
            match catalog::priciest(&products) {
                Some(product) => println!("{}", serde_json::to_string_pretty(product)?),
                None => println!("catalog is empty"),
            }
        }

        Command::Merge { inputs } => {
            let mut lists = Vec::new();
            for path in &inputs {
                lists.push(catalog::read_products(path)?);
            }
            let merged = catalog::merge(lists);

            tracing::info!("Merged {} products from {} lists", merged.len(), inputs.len());
            println!("{}", serde_json::to_string_pretty(&merged)?);
        }

        Command::Describe { input } => {
            let staff = catalog::read_staff(&input)?;
            for record in &staff {
                println!("{}", record.describe());
            }
        }

        Command::Measure { value } => {
            let scalar = match value.parse::<f64>() {
                Ok(number) => Scalar::Number(number),
                Err(_) => Scalar::Text(value),
            };
            println!("{}", compute::measure(&scalar));
        }

        Command::DayKind { day } => {
            let parsed = day
                .parse::<chrono::Weekday>()
                .map_err(|_| ShopkitError::InvalidInput {
                    message: format!("unrecognized day of week: {}", day),
                })?;
            println!("{}", calendar::classify(parsed));
        }

        Command::Square { value, delay_ms } => {
            let delay = Duration::from_millis(delay_ms.unwrap_or_else(|| config.delay_ms()));
            let squared = compute::square_later(value, delay).await?;
            println!("{}", squared);
        }
    }

    Ok(())
}
