use kanal::AsyncSender;
use tokio::sync::oneshot;
use tolk_types::{AppEvent, Reply, SessionError, SessionEvent, SessionId, SessionSnapshot};

/// Request/response bridge from HTTP handlers to the app event loop
#[derive(Clone)]
pub struct UiBridge {
    to_app_tx: AsyncSender<AppEvent>,
}

impl UiBridge {
    pub fn new(to_app_tx: AsyncSender<AppEvent>) -> Self {
        Self { to_app_tx }
    }

    async fn request<T>(
        &self,
        make_event: impl FnOnce(Reply<T>) -> AppEvent,
    ) -> Result<T, SessionError> {
        let (reply, response) = oneshot::channel();

        if self.to_app_tx.send(make_event(reply)).await.is_err() {
            tracing::error!("App event loop is gone, dropping request");
            return Err(SessionError::ControllerGone);
        }

        response.await.unwrap_or(Err(SessionError::ControllerGone))
    }

    pub async fn open_session(&self) -> Result<SessionSnapshot, SessionError> {
        self.request(|reply| AppEvent::OpenSession { reply }).await
    }

    pub async fn send_event(
        &self,
        id: SessionId,
        event: SessionEvent,
    ) -> Result<SessionSnapshot, SessionError> {
        self.request(|reply| AppEvent::Session { id, event, reply })
            .await
    }

    pub async fn view_session(&self, id: SessionId) -> Result<SessionSnapshot, SessionError> {
        self.request(|reply| AppEvent::ViewSession { id, reply }).await
    }

    pub async fn close_session(&self, id: SessionId) -> Result<(), SessionError> {
        self.request(|reply| AppEvent::CloseSession { id, reply }).await
    }
}
