use kanal::AsyncReceiver;
use tolk_core::session::{self, SessionContext, SessionEffect};
use tolk_translator::Gateway;
use tolk_types::{
    Reply, SessionError, SessionEvent, SessionId, SessionSnapshot, SessionState,
    TranslationOutcome,
};

#[derive(Debug)]
pub enum SessionCommand {
    Apply {
        event: SessionEvent,
        reply: Reply<SessionSnapshot>,
    },
    View {
        reply: Reply<SessionSnapshot>,
    },
}

impl SessionCommand {
    pub fn fail(self, error: SessionError) {
        match self {
            SessionCommand::Apply { reply, .. } | SessionCommand::View { reply } => {
                let _ = reply.send(Err(error));
            }
        }
    }
}

/// One session's controller: handles each command to completion before
/// taking the next, so a translate blocks only this session
pub async fn run_session(
    id: SessionId,
    mut state: SessionState,
    ctx: SessionContext,
    gateway: Gateway,
    commands: AsyncReceiver<SessionCommand>,
) {
    while let Ok(command) = commands.recv().await {
        match command {
            SessionCommand::Apply { event, reply } => {
                if let Some(effect) = session::update(&mut state, event, &ctx) {
                    run_effect(&gateway, &mut state, effect).await;
                }
                let _ = reply.send(Ok(SessionSnapshot {
                    id,
                    state: state.clone(),
                }));
            }
            SessionCommand::View { reply } => {
                let _ = reply.send(Ok(SessionSnapshot {
                    id,
                    state: state.clone(),
                }));
            }
        }
    }

    tracing::debug!("Session {} task finished", id);
}

async fn run_effect(gateway: &Gateway, state: &mut SessionState, effect: SessionEffect) {
    match effect {
        SessionEffect::Translate(request) => {
            let gateway = gateway.clone();
            // Provider panics surface as an error outcome
            let outcome = match tokio::spawn(async move { gateway.translate(&request).await }).await
            {
                Ok(outcome) => outcome,
                Err(e) => {
                    tracing::error!("Translation task failed: {e}");
                    TranslationOutcome::Error(format!("translation task failed: {e}"))
                }
            };
            session::apply_outcome(state, outcome);
        }
    }
}
