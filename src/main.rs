use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use grand_prixdictor::scoring::{Condition, ScoreResult};
use grand_prixdictor::weather::WeatherSettings;
use grand_prixdictor::PredictorError;

const EXIT_SUCCESS: i32 = 0;
const EXIT_USAGE: i32 = 1;
const EXIT_CONFIG: i32 = 2;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    /// Header, winner and bordered grid table
    Table,
    /// Tab-separated rows for scripting
    Tsv,
}

#[derive(Parser, Debug)]
#[command(name = "grand-prixdictor")]
#[command(about = "Predict the finishing order of an F1 Grand Prix weekend", long_about = None)]
#[command(after_help = "Example: grand-prixdictor 'Monza' 'wet'")]
#[command(version)]
struct Cli {
    /// Name of the race track or country (e.g. Monza)
    track: Option<String>,

    /// Race condition: 'wet' or 'dry'
    condition: Option<String>,

    /// Enable verbose logging and print per-driver score breakdowns
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (defaults to ./f1_config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Skip weather lookup entirely
    #[arg(long)]
    no_weather: bool,

    /// Timeout for the live weather request (e.g. "10s", "500ms")
    #[arg(long, value_parser = humantime::parse_duration, default_value = "10s")]
    weather_timeout: Duration,

    /// Seed for simulated weather, for reproducible predictions
    #[arg(long)]
    seed: Option<u64>,
}

fn usage_error(message: &str) -> ! {
    eprintln!("Error: Incorrect usage! {}", message);
    eprintln!("{}", Cli::command().render_help());
    std::process::exit(EXIT_USAGE);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_USAGE,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    grand_prixdictor::logger::init_cli_logger(cli.verbose);
    let start_time = Instant::now();

    let Some(track) = cli.track.as_deref() else {
        usage_error("No arguments provided!");
    };

    let condition = match cli.condition.as_deref().map(str::parse::<Condition>) {
        Some(Ok(condition)) => Some(condition),
        Some(Err(e)) => usage_error(&e.to_string()),
        None => None,
    };

    if condition.is_none() {
        eprintln!(
            "Note: For more accurate race predictions, run with both a track name and a race condition ('wet' or 'dry')."
        );
    }

    // Load config
    let config = match grand_prixdictor::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let mut grid = match grand_prixdictor::grid::build_grid(&config) {
        Ok(g) => g,
        Err(PredictorError::InvalidConfig(errors)) => {
            eprintln!("Config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
        Err(e) => {
            eprintln!("Failed to initialise teams and drivers: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let weather_settings = if cli.no_weather {
        None
    } else {
        Some(WeatherSettings {
            timeout: cli.weather_timeout,
            seed: cli.seed,
            ..WeatherSettings::from_env()
        })
    };

    let prediction = grand_prixdictor::predict_race(
        &mut grid,
        Some(track),
        condition,
        weather_settings.as_ref(),
    )
    .await;

    match cli.format {
        OutputFormat::Table => {
            let use_colors = grand_prixdictor::output::should_use_colors();
            println!(
                "{}",
                grand_prixdictor::output::format_results(&grid, &prediction.context, use_colors)
            );

            if cli.verbose {
                let by_number: HashMap<u32, &ScoreResult> = grid
                    .drivers
                    .iter()
                    .map(|d| d.number)
                    .zip(prediction.results.iter())
                    .collect();

                println!();
                println!("Score breakdown:");
                for row in grand_prixdictor::output::ranked_rows(&grid) {
                    if let Some(result) = by_number.get(&row.driver.number) {
                        println!("{}", grand_prixdictor::output::format_breakdown(&row, result));
                    }
                }
            }
        }
        OutputFormat::Tsv => {
            let rows = grand_prixdictor::output::ranked_rows(&grid);
            println!("{}", grand_prixdictor::output::format_tsv(&rows));
        }
    }

    tracing::debug!(
        "Predicted {} drivers in {:?}",
        grid.drivers.len(),
        start_time.elapsed()
    );

    std::process::exit(EXIT_SUCCESS);
}
