/// Open the front-end in the default browser; failure is only logged
pub fn open_page(url: &str) {
    match open::that(url) {
        Ok(()) => tracing::info!("Opened {} in the browser", url),
        Err(e) => tracing::warn!("Could not open a browser for {}: {}", url, e),
    }
}
