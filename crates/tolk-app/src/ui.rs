use std::sync::Arc;

use kanal::AsyncSender;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tolk_types::AppEvent;
use tolk_ui::{CatalogView, UiBridge, UiState};

use crate::state::AppState;

pub fn catalog_view(state: &AppState) -> CatalogView {
    CatalogView {
        title: state.config.ui.title.clone(),
        provider: state.gateway.metadata().name,
        languages: state.context.catalog.options().to_vec(),
        examples: state.context.examples.keys().map(str::to_string).collect(),
    }
}

pub async fn ui_loop(
    listener: TcpListener,
    state: Arc<AppState>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let ui_state = UiState::new(UiBridge::new(ui_to_app_tx), catalog_view(&state));
    tolk_ui::ui_loop(listener, ui_state, cancel).await
}
