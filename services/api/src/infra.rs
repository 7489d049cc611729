use metrics_exporter_prometheus::PrometheusHandle;
use riasec_match::career::{
    sample_professions, sample_questions, Answer, CatalogError, MatchingEngine, ProfessionCatalog,
    ProfileRecord, ProfileRepository, QuestionCatalog, RepositoryError, UserId,
};
use riasec_match::config::MatchingConfig;
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;

const SEPARATORS: [char; 3] = [',', ';', '\n'];

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local profile store; a resubmission replaces the previous profile.
#[derive(Default, Clone)]
pub(crate) struct InMemoryProfileRepository {
    records: Arc<Mutex<HashMap<UserId, ProfileRecord>>>,
}

impl ProfileRepository for InMemoryProfileRepository {
    fn save(&self, record: ProfileRecord) -> Result<ProfileRecord, RepositoryError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile store poisoned".to_string()))?;
        let record = match guard.remove(&record.user_id) {
            Some(previous) => ProfileRecord {
                created_at: previous.created_at,
                ..record
            },
            None => record,
        };
        guard.insert(record.user_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, user_id: &UserId) -> Result<Option<ProfileRecord>, RepositoryError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("profile store poisoned".to_string()))?;
        Ok(guard.get(user_id).cloned())
    }
}

/// Build the engine from configured catalog files, falling back to the bundled samples.
pub(crate) fn load_engine(config: &MatchingConfig) -> Result<MatchingEngine, CatalogError> {
    let questions = match &config.question_catalog {
        Some(path) => QuestionCatalog::from_path(path)?,
        None => sample_questions(),
    };
    let professions = match &config.profession_catalog {
        Some(path) => ProfessionCatalog::from_path(path)?,
        None => sample_professions(),
    };

    info!(
        questions = questions.len(),
        professions = professions.len(),
        evaluated = professions.iter().filter(|p| p.is_evaluated()).count(),
        "loaded matching catalogs"
    );

    Ok(MatchingEngine::new(questions, professions))
}

/// Positional answers collected from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AnswerSheet(pub(crate) Vec<Option<Answer>>);

/// Parse an answer sheet given inline (`4,3,-,0`) or as a path to a file with the same format.
///
/// `-` or an empty cell marks an unanswered question; trailing separators are ignored, so a
/// sheet ending in unanswered questions has to spell them out as `-`.
pub(crate) fn parse_answer_sheet(raw: &str) -> Result<AnswerSheet, String> {
    let path = Path::new(raw.trim());
    let contents = if path.is_file() {
        std::fs::read_to_string(path)
            .map_err(|err| format!("failed to read answers from '{raw}' ({err})"))?
    } else {
        raw.to_string()
    };

    contents
        .trim_end_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .split(&SEPARATORS[..])
        .map(str::trim)
        .enumerate()
        .map(|(index, cell)| parse_answer_cell(index, cell))
        .collect::<Result<Vec<_>, _>>()
        .map(AnswerSheet)
}

fn parse_answer_cell(index: usize, cell: &str) -> Result<Option<Answer>, String> {
    if cell.is_empty() || cell == "-" {
        return Ok(None);
    }

    cell.parse::<u8>()
        .ok()
        .and_then(Answer::from_value)
        .map(Some)
        .ok_or_else(|| format!("answer {} ('{cell}') must be 0-4 or '-'", index + 1))
}
