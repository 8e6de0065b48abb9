//! Epoch queries against the chain LCD endpoint

use gloo_net::http::Request;
use shared::dto::epoch::{Epoch, EpochError, EpochsResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("LCD responded with HTTP {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error(transparent)]
    Epoch(#[from] EpochError),
}

pub async fn fetch_epochs(url: &str) -> Result<EpochsResponse, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<EpochsResponse>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch all epochs and pick the one named `identifier`.
pub async fn fetch_epoch(url: &str, identifier: &str) -> Result<Epoch, FetchError> {
    let epochs = fetch_epochs(url).await?;
    Ok(epochs.find(identifier)?)
}
