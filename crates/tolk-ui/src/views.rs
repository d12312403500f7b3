use serde::Serialize;
use tolk_types::{LanguageCode, LanguageOption, OutcomeKind, SessionId, SessionSnapshot};

/// What the page needs to build its widgets
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub title: String,
    pub provider: String,
    pub languages: Vec<LanguageOption>,
    /// Example button labels, in display order
    pub examples: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: SessionId,
    pub input: String,
    pub source: LanguageCode,
    pub target: LanguageCode,
    pub output: Option<OutputView>,
}

#[derive(Debug, Serialize)]
pub struct OutputView {
    pub kind: OutcomeKind,
    /// Text for the output box, markers included
    pub text: String,
}

impl From<SessionSnapshot> for SessionView {
    fn from(snapshot: SessionSnapshot) -> Self {
        let state = snapshot.state;
        Self {
            id: snapshot.id,
            input: state.input,
            source: state.source,
            target: state.target,
            output: state.output.map(|outcome| OutputView {
                kind: outcome.kind(),
                text: outcome.to_string(),
            }),
        }
    }
}
