use std::collections::HashMap;
use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tolk_types::{AppEvent, SessionError, SessionId, SessionSnapshot};

use crate::state::AppState;

pub mod session;

use session::{SessionCommand, run_session};

struct SessionEntry {
    commands: AsyncSender<SessionCommand>,
    last_seen: Instant,
}

/// Open sessions, keyed by id. Only the event loop touches it.
struct Registry {
    sessions: HashMap<SessionId, SessionEntry>,
    idle_timeout: Duration,
}

impl Registry {
    fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            idle_timeout,
        }
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Drop sessions nobody has touched within the idle timeout.
    /// Their tasks finish whatever is queued and exit.
    fn evict_idle(&mut self) {
        let now = Instant::now();
        let timeout = self.idle_timeout;
        let before = self.sessions.len();
        self.sessions
            .retain(|_, entry| now.duration_since(entry.last_seen) < timeout);

        let evicted = before - self.sessions.len();
        if evicted > 0 {
            tracing::info!(
                "Closed {} idle sessions ({} open)",
                evicted,
                self.sessions.len()
            );
        }
    }
}

/// App's main loop: owns the session registry and routes UI requests
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let idle_timeout = state.config.session.idle_timeout();
    let mut sessions = Registry::new(idle_timeout);
    let mut session_tasks = JoinSet::new();

    let mut sweep = time::interval(
        (idle_timeout / 4).clamp(Duration::from_secs(1), Duration::from_secs(60)),
    );
    sweep.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = sweep.tick() => {
                sessions.evict_idle();
            }
            event = ui_to_app_rx.recv() => {
                handle_event(&state, &mut sessions, &mut session_tasks, event?);
            }
        }

        while let Some(result) = session_tasks.try_join_next() {
            if let Err(e) = result {
                tracing::error!("Session task panicked: {e}");
            }
        }
    }

    tracing::info!("[EVENT_LOOP] Stopping, {} sessions open", sessions.len());
    sessions.sessions.clear();
    session_tasks.shutdown().await;

    Ok(())
}

fn handle_event(
    state: &Arc<AppState>,
    sessions: &mut Registry,
    session_tasks: &mut JoinSet<()>,
    event: AppEvent,
) {
    match event {
        AppEvent::OpenSession { reply } => {
            let limit = state.config.session.max_sessions;
            if sessions.len() >= limit {
                sessions.evict_idle();
            }
            if sessions.len() >= limit {
                tracing::warn!("Refusing new session, {} already open", sessions.len());
                let _ = reply.send(Err(SessionError::SessionLimit(sessions.len())));
                return;
            }

            let id = SessionId::new();
            let initial = state.new_session_state();
            let (tx, rx) = kanal::bounded_async(state.config.session.channel_capacity);

            session_tasks.spawn(run_session(
                id,
                initial.clone(),
                state.context.clone(),
                state.gateway.clone(),
                rx,
            ));
            sessions.sessions.insert(
                id,
                SessionEntry {
                    commands: tx,
                    last_seen: Instant::now(),
                },
            );
            tracing::debug!("Session {} opened ({} open)", id, sessions.len());

            let _ = reply.send(Ok(SessionSnapshot { id, state: initial }));
        }
        AppEvent::Session { id, event, reply } => {
            tracing::debug!("Session {} event: {:?}", id, event);
            forward(sessions, id, SessionCommand::Apply { event, reply });
        }
        AppEvent::ViewSession { id, reply } => {
            forward(sessions, id, SessionCommand::View { reply });
        }
        AppEvent::CloseSession { id, reply } => {
            // Dropping the sender lets the task finish its queue and exit
            let result = match sessions.sessions.remove(&id) {
                Some(_) => {
                    tracing::debug!("Session {} closed ({} open)", id, sessions.len());
                    Ok(())
                }
                None => Err(SessionError::UnknownSession(id)),
            };
            let _ = reply.send(result);
        }
    }
}

/// Queue a command on a session without waiting, so one slow session
/// never holds up the others
fn forward(sessions: &mut Registry, id: SessionId, command: SessionCommand) {
    let now = Instant::now();
    let Some(entry) = sessions.sessions.get_mut(&id) else {
        command.fail(SessionError::UnknownSession(id));
        return;
    };

    // Expired but not swept yet
    if now.duration_since(entry.last_seen) >= sessions.idle_timeout {
        tracing::debug!("Session {} expired", id);
        sessions.sessions.remove(&id);
        command.fail(SessionError::UnknownSession(id));
        return;
    }
    entry.last_seen = now;

    let mut slot = Some(command);
    match entry.commands.try_send_option(&mut slot) {
        Ok(true) => {}
        Ok(false) => {
            tracing::warn!("Session {} queue is full", id);
            if let Some(command) = slot.take() {
                command.fail(SessionError::Busy(id));
            }
        }
        Err(_) => {
            tracing::warn!("Session {} task is gone, removing it", id);
            sessions.sessions.remove(&id);
            if let Some(command) = slot.take() {
                command.fail(SessionError::UnknownSession(id));
            }
        }
    }
}
