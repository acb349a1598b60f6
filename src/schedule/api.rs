use lazy_static::lazy_static;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use tracing::{error, info};

const MAX_RETRIES: u32 = 5;

lazy_static! {
    static ref REST_CLIENT: ClientWithMiddleware = ClientBuilder::new(Client::new())
        .with(RetryTransientMiddleware::new_with_policy(
            ExponentialBackoff::builder().build_with_max_retries(MAX_RETRIES)
        ))
        .build();
}

pub struct ScheduleAPI;

impl ScheduleAPI {
    /// Fetches the raw delimited schedule text. One logical attempt
    /// per load; transient failures are retried by the middleware,
    /// anything else surfaces as an error for the caller's fallback
    /// path.
    #[tracing::instrument]
    pub async fn fetch_schedule(url: &str) -> Result<String, ApiError> {
        info!("Fetching schedule data");

        let response = REST_CLIENT
            .get(url)
            .send()
            .await
            .map_err(|err| {
                error!("Schedule request failed: {:?}", err);
                ApiError::RequestFailed
            })?
            .error_for_status()
            .map_err(|err| {
                error!("Schedule request was rejected: {:?}", err);
                ApiError::RequestFailed
            })?;

        response.text().await.map_err(|err| {
            error!("Could not read schedule response: {:?}", err);
            ApiError::InvalidResponse
        })
    }
}

#[derive(Debug)]
pub enum ApiError {
    RequestFailed,
    InvalidResponse,
}
