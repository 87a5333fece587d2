mod console;
mod report;
mod terminal;

use anyhow::Context;
use bingo_core::{evaluate, BingoError, Completion, RngState, SimulationConfig, SimulationOutcome};
use bingo_data::load_pool_or_builtin;
use clap::{Parser, ValueEnum};
use console::ConsoleObserver;
use report::Report;
use std::path::PathBuf;

const EXIT_ABORTED: i32 = 1;
const EXIT_FAILED: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Rule {
    /// The combination wins with its fastest card
    First,
    /// Every card of the combination has to complete
    All,
}

impl From<Rule> for Completion {
    fn from(value: Rule) -> Self {
        match value {
            Rule::First => Self::FirstCard,
            Rule::All => Self::AllCards,
        }
    }
}

/// An awesome Bingo card combination simulator!
/// Which combination of cards has the highest chance to win?
#[derive(Debug, Parser)]
#[command(name = "bingo", version)]
struct Cli {
    /// Number of cards in each set to be analyzed
    num_of_cards: usize,
    /// Number of simulation cycles for each combination
    #[arg(short = 'c', long = "simu-cycles", default_value_t = 100_000)]
    simu_cycles: u32,
    /// Show all results instead of summary list
    #[arg(short = 'v', long = "verbose-results")]
    verbose_results: bool,
    /// Best and worst results shown in the summary list
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Seed for the deck shuffles; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// Card pool JSON file; the built-in cards are used when omitted
    #[arg(long)]
    pool: Option<PathBuf>,
    /// When a combination counts as complete
    #[arg(long, value_enum, default_value_t = Rule::First)]
    rule: Rule,
    /// Also write the ranked results as JSON
    #[arg(long)]
    json: Option<PathBuf>,
    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let result = run(&cli);
    match &result {
        Ok(SimulationOutcome::Completed) => {}
        Ok(SimulationOutcome::Aborted) => println!("Simulation aborted."),
        Err(err) if is_internal(err) => log::error!("{err:#}"),
        Err(err) => eprintln!("error: {err:#}"),
    }
    std::process::exit(exit_code(&result));
}

fn exit_code(result: &anyhow::Result<SimulationOutcome>) -> i32 {
    match result {
        Ok(SimulationOutcome::Completed) => 0,
        Ok(SimulationOutcome::Aborted) => EXIT_ABORTED,
        Err(_) => EXIT_FAILED,
    }
}

/// Simulator contract violations, as opposed to bad input.
fn is_internal(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<BingoError>(), Some(BingoError::Simulation(_)))
}

fn run(cli: &Cli) -> anyhow::Result<SimulationOutcome> {
    let pool = load_pool_or_builtin(cli.pool.as_deref())?;
    let config = SimulationConfig {
        num_of_cards: cli.num_of_cards,
        cycles: cli.simu_cycles,
        seed: cli.seed.unwrap_or_else(rand::random),
        completion: cli.rule.into(),
    };
    config
        .validate(pool.len())
        .context("invalid run parameters")?;
    let rng = RngState::from_seed(config.seed);
    log::info!("seed {}", rng.seed());

    if !terminal::stdout_is_tty() {
        colored::control::set_override(false);
    }
    let cancel = terminal::install_interrupt();

    console::print_cards(&pool);
    println!("=== Finding all combinations ===");
    let mut observer = ConsoleObserver::new(!cli.no_progress);
    let evaluation = evaluate(&pool, &config, rng, &mut observer, &cancel);
    terminal::restore_interrupt();
    let evaluation = evaluation?;

    if let Some(path) = cli.json.as_deref() {
        report::write_json(path, &Report::new(&pool, &config, &evaluation))?;
    }
    if evaluation.outcome == SimulationOutcome::Completed {
        let terse = if cli.verbose_results { 0 } else { cli.top };
        console::print_results(&pool, &evaluation.combinations, terse, config.completion);
    }
    Ok(evaluation.outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingo_core::{ConfigError, SimulationError};

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["bingo", "3"]).expect("parse");
        assert_eq!(cli.num_of_cards, 3);
        assert_eq!(cli.simu_cycles, 100_000);
        assert_eq!(cli.top, 10);
        assert_eq!(cli.rule, Rule::First);
        assert!(!cli.verbose_results);
        assert!(cli.seed.is_none());
    }

    #[test]
    fn parses_short_flags() {
        let cli = Cli::try_parse_from(["bingo", "2", "-c", "500", "-v", "--rule", "all"])
            .expect("parse");
        assert_eq!(cli.simu_cycles, 500);
        assert!(cli.verbose_results);
        assert_eq!(Completion::from(cli.rule), Completion::AllCards);
    }

    #[test]
    fn out_of_range_cards_fail_before_simulation() {
        for requested in ["0", "11"] {
            let cli = Cli::try_parse_from(["bingo", requested, "--no-progress"]).expect("parse");
            let err = run(&cli).expect_err("must be rejected");
            let message = format!("{err:#}");
            assert!(message.contains("valid: 1..10"), "{message}");
        }
    }

    #[test]
    fn outcome_maps_to_exit_code() {
        assert_eq!(exit_code(&Ok(SimulationOutcome::Completed)), 0);
        assert_eq!(exit_code(&Ok(SimulationOutcome::Aborted)), EXIT_ABORTED);
        assert_eq!(exit_code(&Err(anyhow::anyhow!("bad pool"))), EXIT_FAILED);
        assert_ne!(EXIT_ABORTED, 0);
        assert_ne!(EXIT_ABORTED, EXIT_FAILED);
    }

    #[test]
    fn only_simulator_failures_count_as_internal() {
        let internal = anyhow::Error::from(BingoError::Simulation(SimulationError::NoCombinations));
        assert!(is_internal(&internal));
        let rejected = Err::<(), _>(ConfigError::ZeroCycles)
            .context("invalid run parameters")
            .expect_err("config error");
        assert!(!is_internal(&rejected));
        assert!(!is_internal(&anyhow::anyhow!("missing pool file")));
    }

    #[test]
    fn negative_card_count_is_a_parse_error() {
        assert!(Cli::try_parse_from(["bingo", "-1"]).is_err());
    }
}
