use crate::infra::{load_engine, parse_answer_sheet, AnswerSheet, InMemoryProfileRepository};
use chrono::SecondsFormat;
use clap::Args;
use riasec_match::career::{
    Answer, CareerMatchingService, Dimension, MatchingResultsView, QuestionnaireSession, UserId,
};
use riasec_match::config::{AppConfig, MatchingConfig};
use riasec_match::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

const BAR_WIDTH: u32 = 30;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Answers 0-4 in question order, comma separated ('-' for unanswered), or a file path
    #[arg(long, value_parser = parse_answer_sheet)]
    pub(crate) answers: AnswerSheet,
    /// Question catalog CSV (`id,dimension`); overrides APP_QUESTION_CATALOG
    #[arg(long)]
    pub(crate) questions: Option<PathBuf>,
    /// Profession catalog CSV or JSON; overrides APP_PROFESSION_CATALOG
    #[arg(long)]
    pub(crate) professions: Option<PathBuf>,
    /// Number of matches to show (defaults to APP_MATCH_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Print the results payload as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Respondent identifier used when storing the demo profile
    #[arg(long, default_value = "demo-respondent")]
    pub(crate) user: String,
    /// Dimension the scripted respondent favors (letter or name). Defaults to Investigative.
    #[arg(long)]
    pub(crate) persona: Option<Dimension>,
    /// Number of matches to show (defaults to APP_MATCH_LIMIT)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        questions,
        professions,
        limit,
        json,
    } = args;

    let mut matching = AppConfig::load()?.matching;
    if questions.is_some() {
        matching.question_catalog = questions;
    }
    if professions.is_some() {
        matching.profession_catalog = professions;
    }

    let service = matching_service(&matching)?;
    let outcome = service.score(&answers.0)?;
    let view = MatchingResultsView::from_outcome(&outcome, service.limit(limit));

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render_results(&view);
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        user,
        persona,
        limit,
    } = args;
    let persona = persona.unwrap_or(Dimension::Investigative);

    let service = matching_service(&AppConfig::load()?.matching)?;
    let questions = service.questions().to_vec();

    println!("RIASEC questionnaire demo");
    println!(
        "- {} questions | scripted respondent '{}' favoring {}",
        questions.len(),
        user,
        persona.name()
    );

    let mut session = QuestionnaireSession::new(questions.clone());
    session.start()?;

    let midpoint = questions.len() / 2;
    for (index, question) in questions.iter().enumerate() {
        session.answer(scripted_answer(question.dimension, persona, index))?;

        if index + 1 == midpoint {
            let progress = session.completion();
            println!(
                "- halfway: {}/{} answered ({}%)",
                progress.answered, progress.total, progress.percentage
            );
            // step back once and confirm the previous answer before moving on
            let revisited = session.previous()?;
            session.answer(scripted_answer(
                questions[revisited].dimension,
                persona,
                revisited,
            ))?;
        }
    }

    session.review()?;
    println!("- reviewing answers, revising question 1");
    session.go_to(0)?;
    session.answer(Answer::Neutral)?;
    session.review()?;
    let answers = session.submit()?;

    let user_id = UserId(user);
    let submitted = service.submit(user_id.clone(), &answers, limit)?;
    println!("\nSubmitted profile");
    render_results(&submitted);

    let reloaded = service.results(&user_id, limit)?;
    println!(
        "\nReloaded stored profile for '{}': Holland code {}, {} matches recomputed",
        user_id.0,
        reloaded.holland_code,
        reloaded.matches.len()
    );

    Ok(())
}

fn matching_service(
    config: &MatchingConfig,
) -> Result<CareerMatchingService<InMemoryProfileRepository>, AppError> {
    let engine = load_engine(config)?;
    Ok(CareerMatchingService::new(
        engine,
        Arc::new(InMemoryProfileRepository::default()),
        config.match_limit,
    ))
}

/// Strong preference for the persona, mild interest in the neighbouring dimension,
/// mixed indifference elsewhere.
fn scripted_answer(dimension: Dimension, persona: Dimension, index: usize) -> Answer {
    let neighbour = Dimension::ordered()[(persona.index() + 1) % Dimension::ordered().len()];
    if dimension == persona {
        Answer::StrongLike
    } else if dimension == neighbour {
        Answer::Like
    } else if index % 2 == 0 {
        Answer::Neutral
    } else {
        Answer::Dislike
    }
}

fn render_results(view: &MatchingResultsView) {
    println!("Holland code: {}", view.holland_code);
    if let Some(completion) = view.completion {
        println!(
            "Answered: {}/{} ({}%)",
            completion.answered, completion.total, completion.percentage
        );
    }
    if let Some(updated_at) = view.updated_at {
        println!(
            "Stored at: {}",
            updated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
    }

    println!("Profile (scale 0-{}):", view.chart_ceiling);
    for entry in &view.dimensions {
        println!(
            "  {} {:<13} {:>3}  {}",
            entry.dimension,
            entry.name,
            entry.score,
            bar(entry.score, view.chart_ceiling)
        );
    }

    if view.matches.is_empty() {
        println!("No matching professions.");
        return;
    }
    println!("Closest professions:");
    for (rank, entry) in view.matches.iter().enumerate() {
        println!(
            "  {:>2}. {:<24} {:>3}%  (cosine {:.3})",
            rank + 1,
            entry.name,
            entry.percent,
            entry.correlation
        );
    }
}

fn bar(score: u32, ceiling: u32) -> String {
    if ceiling == 0 {
        return String::new();
    }
    "#".repeat((score.min(ceiling) * BAR_WIDTH / ceiling) as usize)
}
