//! Session reducer.
//!
//! Every user action goes through `update`, which mutates the session state in
//! place and returns the effect the session task has to run. Translation results
//! come back through `apply_outcome`.

use std::sync::Arc;

use tolk_types::{SessionEvent, SessionState, TranslationOutcome, TranslationRequest};

use crate::catalog::LanguageCatalog;
use crate::examples::ExampleSet;

/// Read-only data every session reduces against
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    pub catalog: Arc<LanguageCatalog>,
    pub examples: Arc<ExampleSet>,
}

impl SessionContext {
    pub fn new(catalog: LanguageCatalog, examples: ExampleSet) -> Self {
        Self {
            catalog: Arc::new(catalog),
            examples: Arc::new(examples),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    Translate(TranslationRequest),
}

pub fn update(
    state: &mut SessionState,
    event: SessionEvent,
    ctx: &SessionContext,
) -> Option<SessionEffect> {
    match event {
        // Button and Enter key share one path
        SessionEvent::Translate | SessionEvent::Submit => {
            Some(SessionEffect::Translate(state.request()))
        }
        SessionEvent::Swap => {
            std::mem::swap(&mut state.source, &mut state.target);
            tracing::debug!("Swapped languages: {} -> {}", state.source, state.target);
            None
        }
        SessionEvent::SelectExample { key } => {
            state.input = ctx.examples.resolve(&key).to_string();
            None
        }
        SessionEvent::Edit { text } => {
            state.input = text;
            None
        }
        SessionEvent::SelectSource { code } => {
            if ctx.catalog.contains(&code) {
                state.source = code;
            } else {
                tracing::warn!("Ignoring unknown source language '{}'", code);
            }
            None
        }
        SessionEvent::SelectTarget { code } => {
            if ctx.catalog.contains(&code) {
                state.target = code;
            } else {
                tracing::warn!("Ignoring unknown target language '{}'", code);
            }
            None
        }
    }
}

pub fn apply_outcome(state: &mut SessionState, outcome: TranslationOutcome) {
    state.output = Some(outcome);
}
