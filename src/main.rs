use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use word_search::{
    cli::{Cli, OutputFormat},
    config::Config,
    dictionary::Dictionary,
    report::SearchReport,
    search::WordSearch,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env(&cli)?;
    config.validate()?;
    tracing::info!(
        "Xsize={}, Ysize={}, Dictionary={}",
        config.grid.xsize,
        config.grid.ysize,
        config.dictionary.path.display()
    );

    // Load dictionary
    let dictionary = Dictionary::load(&config.dictionary.path).await?;

    let mut rng = match config.grid.seed {
        Some(seed) => {
            tracing::info!("Using grid seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    tracing::info!("Initializing word search");
    let mut search = WordSearch::generate(dictionary, config.grid.xsize, config.grid.ysize, &mut rng);

    tracing::info!("Finding words...");
    let mut report = SearchReport::new(search.find_words());
    if cli.show_grid {
        report = report.with_grid(search.grid());
    }

    match cli.format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    Ok(())
}
