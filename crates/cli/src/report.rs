use anyhow::Context;
use bingo_core::{
    CardPool, Completion, Evaluation, Ranking, RankingRow, SimulationConfig, SimulationOutcome,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportEntry {
    pub rank: usize,
    pub cards: Vec<String>,
    pub indices: Vec<usize>,
    /// `None` for combinations an aborted run never finished.
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub num_of_cards: usize,
    pub simu_cycles: u32,
    pub seed: u64,
    pub rule: Completion,
    pub status: SimulationOutcome,
    pub deck: Vec<u32>,
    pub results: Vec<ReportEntry>,
}

impl Report {
    pub fn new(pool: &CardPool, config: &SimulationConfig, evaluation: &Evaluation) -> Self {
        let results = Ranking::new(&evaluation.combinations)
            .excerpt(0)
            .into_iter()
            .filter_map(|row| match row {
                RankingRow::Entry(entry) => Some(ReportEntry {
                    rank: entry.rank,
                    cards: entry
                        .combination
                        .cards(pool)
                        .map(|card| card.name.clone())
                        .collect(),
                    indices: entry.combination.indices().to_vec(),
                    score: entry.combination.score(),
                }),
                RankingRow::Gap => None,
            })
            .collect();
        Self {
            num_of_cards: config.num_of_cards,
            simu_cycles: config.cycles,
            seed: config.seed,
            rule: config.completion,
            status: evaluation.outcome,
            deck: evaluation.deck.numbers().to_vec(),
            results,
        }
    }
}

pub fn write_json(path: &Path, report: &Report) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let body = serde_json::to_string_pretty(report).context("encode report")?;
    fs::write(path, body).with_context(|| format!("write {}", path.display()))?;
    log::info!("report written to {}", path.display());
    Ok(())
}
