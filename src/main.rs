use anyhow::{Context, Result};
use clap::Parser;

use string_calculator::config::{Args, Config, OutputFormat};
use string_calculator::input::read_input;
use string_calculator::{Calculator, Evaluation};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .parse_filters(&args.log_level)
        .parse_default_env()
        .init();

    let config = Config::from_args(args)?;
    if let Some(path) = &config.config_path {
        log::info!("Using config file: {}", path.display());
    }

    let input = read_input(&config.input, config.escapes)?;
    let calculator = Calculator::with_default_delimiter(config.default_delimiter.as_str())?;
    let evaluation = calculator.evaluate(&input)?;
    log::debug!(
        "Summed {} numbers with delimiter {:?} (default {:?})",
        evaluation.numbers.len(),
        evaluation.delimiter,
        calculator.default_delimiter()
    );

    print_evaluation(&evaluation, config.format)
}

fn print_evaluation(evaluation: &Evaluation, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => println!("{}", evaluation.total),
        OutputFormat::Json => {
            let json =
                serde_json::to_string(evaluation).context("Failed to serialize evaluation")?;
            println!("{json}");
        }
    }
    Ok(())
}
