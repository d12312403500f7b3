use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use uuid::Uuid;

/// Short language identifier, e.g. `en` or `hi`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LanguageCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for LanguageCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

/// A display label paired with its language code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageOption {
    pub label: String,
    pub code: LanguageCode,
}

impl LanguageOption {
    pub fn new(label: impl Into<String>, code: impl Into<LanguageCode>) -> Self {
        Self {
            label: label.into(),
            code: code.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    pub source: LanguageCode,
    pub target: LanguageCode,
}

/// Input rejected before it reaches the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    EmptyText,
    SameLanguage,
}

impl Warning {
    pub fn message(&self) -> &'static str {
        match self {
            Warning::EmptyText => "Please enter some text to translate",
            Warning::SameLanguage => "Source and target languages are the same",
        }
    }
}

/// Result of one translate action.
///
/// `Display` renders the text shown in the output box, including the
/// warning/error markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    Translated(String),
    Warning(Warning),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Translated,
    Warning,
    Error,
}

impl TranslationOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            TranslationOutcome::Translated(_) => OutcomeKind::Translated,
            TranslationOutcome::Warning(_) => OutcomeKind::Warning,
            TranslationOutcome::Error(_) => OutcomeKind::Error,
        }
    }
}

impl fmt::Display for TranslationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationOutcome::Translated(text) => f.write_str(text),
            TranslationOutcome::Warning(warning) => write!(f, "⚠️ {}", warning.message()),
            TranslationOutcome::Error(message) => write!(f, "❌ Translation error: {message}"),
        }
    }
}

/// Everything a single browser session can see and change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub input: String,
    pub source: LanguageCode,
    pub target: LanguageCode,
    /// Display-output slot, empty until the first translate
    pub output: Option<TranslationOutcome>,
}

impl SessionState {
    pub fn new(source: LanguageCode, target: LanguageCode) -> Self {
        Self {
            input: String::new(),
            source,
            target,
            output: None,
        }
    }

    pub fn request(&self) -> TranslationRequest {
        TranslationRequest {
            text: self.input.clone(),
            source: self.source.clone(),
            target: self.target.clone(),
        }
    }
}

/// User actions coming from the front-end
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// Translate button
    Translate,
    /// Enter pressed in the input box
    Submit,
    Swap,
    SelectExample { key: String },
    Edit { text: String },
    SelectSource { code: LanguageCode },
    SelectTarget { code: LanguageCode },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for SessionId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub id: SessionId,
    pub state: SessionState,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Unknown session: {0}")]
    UnknownSession(SessionId),

    #[error("Session limit reached ({0} open sessions)")]
    SessionLimit(usize),

    #[error("Session {0} has too many pending events")]
    Busy(SessionId),

    #[error("Session controller is not running")]
    ControllerGone,
}

pub type Reply<T> = oneshot::Sender<Result<T, SessionError>>;

/// Requests from the UI server to the app event loop
#[derive(Debug)]
pub enum AppEvent {
    OpenSession {
        reply: Reply<SessionSnapshot>,
    },
    Session {
        id: SessionId,
        event: SessionEvent,
        reply: Reply<SessionSnapshot>,
    },
    ViewSession {
        id: SessionId,
        reply: Reply<SessionSnapshot>,
    },
    CloseSession {
        id: SessionId,
        reply: Reply<()>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_display_carries_markers() {
        let ok = TranslationOutcome::Translated("Bonjour".to_string());
        assert_eq!(ok.to_string(), "Bonjour");

        let empty = TranslationOutcome::Warning(Warning::EmptyText);
        assert_eq!(empty.to_string(), "⚠️ Please enter some text to translate");

        let same = TranslationOutcome::Warning(Warning::SameLanguage);
        assert_eq!(same.to_string(), "⚠️ Source and target languages are the same");

        let err = TranslationOutcome::Error("boom".to_string());
        assert_eq!(err.to_string(), "❌ Translation error: boom");
        assert_eq!(err.kind(), OutcomeKind::Error);
    }

    #[test]
    fn session_events_deserialize_from_tagged_json() {
        let event: SessionEvent = serde_json::from_str(r#"{"type":"translate"}"#).unwrap();
        assert_eq!(event, SessionEvent::Translate);

        let event: SessionEvent =
            serde_json::from_str(r#"{"type":"edit","text":"Hello"}"#).unwrap();
        assert_eq!(
            event,
            SessionEvent::Edit {
                text: "Hello".to_string()
            }
        );

        let event: SessionEvent =
            serde_json::from_str(r#"{"type":"select_target","code":"fr"}"#).unwrap();
        assert_eq!(
            event,
            SessionEvent::SelectTarget {
                code: LanguageCode::from("fr")
            }
        );

        assert!(serde_json::from_str::<SessionEvent>(r#"{"type":"explode"}"#).is_err());
    }

    #[test]
    fn session_event_debug_names_the_variant() {
        let event = SessionEvent::SelectSource { code: "fr".into() };
        assert_eq!(
            format!("{event:?}"),
            r#"SelectSource { code: LanguageCode("fr") }"#
        );
        assert_eq!(format!("{:?}", SessionEvent::Swap), "Swap");
    }
}
