use bingo_core::{
    Card, CardPool, Color, Combination, Completion, RankedEntry, Ranking, RankingRow,
    SimulationEvent, SimulationObserver, SimulationOutcome,
};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

const PROGRESS_TEMPLATE: &str = "{msg} {wide_bar} {pos}/{len} [{elapsed_precise}<{eta_precise}]";

pub fn swatch(color: Color) -> String {
    "  ".on_truecolor(color.r, color.g, color.b).to_string()
}

pub fn card_line(card: &Card) -> String {
    let numbers = card
        .numbers
        .iter()
        .map(|number| format!("{number:2}"))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{:>12} {} {}", card.name, swatch(card.color), numbers)
}

pub fn print_cards(pool: &CardPool) {
    println!("=== Configured Bingo cards ===");
    for card in pool {
        println!("{}", card_line(card));
    }
    println!();
}

/// `1234567` -> `1,234,567`.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn result_line(pool: &CardPool, entry: &RankedEntry<'_>) -> String {
    let cards: Vec<&Card> = entry.combination.cards(pool).collect();
    let swatches = cards
        .iter()
        .map(|card| swatch(card.color))
        .collect::<Vec<_>>()
        .join(" ");
    let names = cards
        .iter()
        .map(|card| card.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let score = entry
        .combination
        .score()
        .map(|score| format!("{score:.3}"))
        .unwrap_or_else(|| "n/a".to_string());
    let mut line = format!("{:11}: {swatches} Score = {score} [{names}]", entry.rank);
    if entry.best {
        line.push_str(" (best)");
    }
    if entry.worst {
        line.push_str(" (worst)");
    }
    line
}

pub fn print_results(
    pool: &CardPool,
    combinations: &[Combination],
    terse: usize,
    completion: Completion,
) {
    println!("=== Simulation results ===");
    match completion {
        Completion::FirstCard => println!(
            "Score = Number of card drawings until one of the chosen cards is completed."
        ),
        Completion::AllCards => println!(
            "Score = Number of card drawings until all of the chosen cards are completed."
        ),
    }
    if terse > 0 {
        println!(
            "Showing only the {terse} best and worst results. (Show all with -v flag.)"
        );
    }
    for row in Ranking::new(combinations).excerpt(terse) {
        match row {
            RankingRow::Entry(entry) => println!("{}", result_line(pool, &entry)),
            RankingRow::Gap => println!(),
        }
    }
}

/// Prints run milestones and drives the progress bar.
pub struct ConsoleObserver {
    show_progress: bool,
    num_of_cards: usize,
    progress: Option<ProgressBar>,
}

impl ConsoleObserver {
    pub fn new(show_progress: bool) -> Self {
        Self {
            show_progress,
            num_of_cards: 0,
            progress: None,
        }
    }

    fn start_progress(&mut self, trials: u64) {
        let bar = if self.show_progress {
            ProgressBar::new(trials)
        } else {
            ProgressBar::hidden()
        };
        match ProgressStyle::with_template(PROGRESS_TEMPLATE) {
            Ok(style) => bar.set_style(style),
            Err(err) => log::warn!("progress template rejected: {err}"),
        }
        self.progress = Some(bar);
    }
}

impl SimulationObserver for ConsoleObserver {
    fn observe(&mut self, event: &SimulationEvent) {
        match event {
            SimulationEvent::Generated {
                pool_size,
                num_of_cards,
                combinations,
            } => {
                self.num_of_cards = *num_of_cards;
                println!(
                    "Found a total of {combinations} combinations taking {num_of_cards} out of {pool_size} cards without repetition."
                );
                println!();
            }
            SimulationEvent::Started {
                deck,
                cycles,
                combinations,
            } => {
                println!(
                    "=== Simulating combinations of {} cards ===",
                    self.num_of_cards
                );
                let numbers = deck
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(" ");
                println!("Card deck consists of {} number cards: ", deck.len());
                println!("  {numbers}");
                println!(
                    "Performing {} simulation cycles with each combination.",
                    thousands(u64::from(*cycles))
                );
                self.start_progress(*combinations as u64 * u64::from(*cycles));
            }
            SimulationEvent::CombinationStarted { index, total } => {
                if let Some(bar) = &self.progress {
                    bar.set_message(format!("Combination {} of {total}", index + 1));
                }
            }
            SimulationEvent::TrialFinished { .. } => {
                if let Some(bar) = &self.progress {
                    bar.inc(1);
                }
            }
            SimulationEvent::CombinationScored { index, score } => {
                log::debug!("combination #{index} scored {score:.3}");
            }
            SimulationEvent::Finished { outcome, scored } => {
                if let Some(bar) = self.progress.take() {
                    match outcome {
                        SimulationOutcome::Completed => bar.finish(),
                        SimulationOutcome::Aborted => bar.abandon(),
                    }
                }
                log::info!("{scored} combinations scored");
                println!();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    fn pool() -> CardPool {
        CardPool::new(vec![
            Card::new("Red", Color::rgb(0xcc, 0, 0x44), vec![11, 27, 1]),
            Card::new("Light blue", Color::rgb(0, 0xff, 0xff), vec![17, 30, 2]),
        ])
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1_000), "1,000");
        assert_eq!(thousands(100_000), "100,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn card_line_aligns_name_and_numbers() {
        plain();
        let pool = pool();
        assert_eq!(card_line(&pool.cards()[0]), "         Red    11 27  1");
        assert_eq!(card_line(&pool.cards()[1]), "  Light blue    17 30  2");
    }

    #[test]
    fn result_line_marks_best_and_worst() {
        plain();
        let pool = pool();
        let combination = Combination::from_indices(vec![0, 1]).expect("valid");
        let entry = RankedEntry {
            rank: 1,
            combination: &combination,
            best: true,
            worst: true,
        };
        assert_eq!(
            result_line(&pool, &entry),
            "          1:       Score = n/a [Red, Light blue] (best) (worst)"
        );
    }
}
