use std::{path::PathBuf, sync::Arc};

use anyhow::{Context as _, bail};
use geotrivia_engine::{
    Difficulty, EvaluatorConfig, Feedback, GameSession, GameSummary, SessionSnapshot,
};
use geotrivia_geometry::{PlanarGeometryProvider, geo::Point};
use serde::Serialize;

use crate::util::{self, CatalogSourceArg, Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReplayArg {
    #[clap(flatten)]
    source: CatalogSourceArg,
    /// JSON array of `[longitude, latitude]` guesses, one per question
    #[arg(long)]
    guesses: PathBuf,
    #[arg(long, default_value = "easy")]
    difficulty: Difficulty,
    /// Evaluator config JSON file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ReplayReport {
    difficulty: Difficulty,
    config: EvaluatorConfig,
    answers: Vec<AnswerEntry>,
    summary: Option<GameSummary>,
    session: SessionSnapshot,
}

#[derive(Debug, Serialize)]
struct AnswerEntry {
    index: usize,
    question: String,
    guess: [f64; 2],
    tier: Option<u32>,
    score_delta: u64,
    feedback: Option<Feedback>,
}

pub(crate) async fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let catalog = Arc::new(arg.source.load().await?);
    let guesses: Vec<[f64; 2]> = util::read_json_file("guesses", &arg.guesses)?;
    let config = match &arg.config {
        Some(path) => util::read_json_file("evaluator config", path)?,
        None => EvaluatorConfig::default(),
    };

    if guesses.len() < catalog.count() {
        bail!(
            "{} guesses for {} questions in {}",
            guesses.len(),
            catalog.count(),
            arg.guesses.display()
        );
    }
    if guesses.len() > catalog.count() {
        tracing::warn!(
            extra = guesses.len() - catalog.count(),
            "ignoring guesses beyond the last question"
        );
    }

    let mut session = GameSession::with_config(catalog, PlanarGeometryProvider, config)
        .context("Invalid evaluator config")?;
    session.set_difficulty(arg.difficulty)?;
    session.start_game()?;

    let mut answers = vec![];
    for [x, y] in guesses.into_iter().take(session.question_count()) {
        let index = session.current_index();
        let question = session
            .current_question()
            .map(|q| q.text)
            .unwrap_or_default();
        let (tier, score_delta) = session
            .submit_guess(Point::new(x, y))
            .map(|result| (result.tier, result.score_delta))
            .with_context(|| format!("Failed to evaluate guess for question {index}"))?;
        answers.push(AnswerEntry {
            index,
            question,
            guess: [x, y],
            tier,
            score_delta,
            feedback: session.feedback().cloned(),
        });
        session.next_question()?;
    }

    if let Some(message) = session.end_of_game_message() {
        eprintln!("{message}");
    }

    let report = ReplayReport {
        difficulty: session.difficulty(),
        config: *session.config(),
        answers,
        summary: session.summary().copied(),
        session: session.snapshot(),
    };
    Output::save_json(&report, arg.output.clone())
}
