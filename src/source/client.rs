// src/source/client.rs
use crate::utils::error::FetchError;
use reqwest::header;
use std::path::Path;
use std::time::Duration;

/// Team game log the dashboard is built from.
pub const DEFAULT_GAME_LOG_URL: &str = "https://www.foxsports.com/nba/washington-wizards-team-game-log";

// Some stat sites refuse requests without a browser-like agent.
const USER_AGENT: &str = "Mozilla/5.0 (compatible; gamelog-dashboard/0.1)";

/// Creates a reqwest client with the agent and the request timeout.
fn build_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// Downloads the game log page. One attempt, no retry.
pub async fn download_page(url: &str, timeout: Duration) -> Result<String, FetchError> {
    let client = build_client(timeout)?;

    tracing::info!("Downloading game log from: {}", url);
    tracing::debug!("Using User-Agent: {}, timeout {:?}", USER_AGENT, timeout);

    let response = client.get(url)
        .header(header::ACCEPT, "text/html,application/xhtml+xml,*/*")
        .send()
        .await?; // Propagates reqwest::Error as FetchError::Network

    let status = response.status();
    if !status.is_success() {
        tracing::error!("HTTP error status: {} for URL: {}", status, url);
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(FetchError::Forbidden);
        }
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        return Err(FetchError::Http(status));
    }

    let body = response.text().await?;
    tracing::debug!("Successfully downloaded {} bytes from {}", body.len(), url);

    Ok(body)
}

/// Reads a previously saved copy of the page instead of fetching it.
pub fn load_page(path: &Path) -> Result<String, FetchError> {
    let body = std::fs::read_to_string(path).map_err(|source| FetchError::File {
        path: path.display().to_string(),
        source,
    })?;
    tracing::info!("Loaded saved page {} ({} bytes)", path.display(), body.len());
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_is_a_network_error() {
        let result = tokio_test::block_on(download_page("not a url", Duration::from_secs(1)));
        assert!(matches!(result, Err(FetchError::Network(_))));
    }

    #[test]
    fn test_load_missing_page() {
        let err = load_page(Path::new("/definitely/not/here.html")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.html"));
    }
}
