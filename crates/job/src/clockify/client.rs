//! Client for the tracking service's time-off endpoint.

use chrono::{Days, NaiveDate, NaiveTime};
use offsync_core::TimeOffRequest;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::{debug, instrument};

use crate::config::ClockifyConfig;

use super::error::ClockifyError;
use super::types::{TimeOffQuery, TimeOffRequestsPage};

/// Tracking service API base URL.
const CLOCKIFY_API_BASE: &str = "https://api.clockify.me/api/v1";

/// How far ahead of the reference date the fetch window extends, in days.
///
/// The window also reaches one day back so that requests ending yesterday
/// (whose users return to work today) are still visible.
pub const LOOKAHEAD_DAYS: u64 = 30;

/// Client for fetching approved time-off requests.
#[derive(Clone)]
pub struct ClockifyClient {
    client: Client,
    workspace_id: String,
    base_url: String,
}

impl std::fmt::Debug for ClockifyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockifyClient")
            .field("workspace_id", &self.workspace_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ClockifyClient {
    /// Create a new tracking service client.
    ///
    /// The API key is installed as a default `X-Api-Key` header so it is
    /// sent on every request.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build or the API key is
    /// not a valid header value.
    pub fn new(config: &ClockifyConfig) -> Result<Self, ClockifyError> {
        let mut headers = HeaderMap::new();

        let mut api_key = HeaderValue::from_str(config.api_key.expose_secret())
            .map_err(|e| ClockifyError::Config(format!("invalid API key format: {e}")))?;
        api_key.set_sensitive(true);
        headers.insert("X-Api-Key", api_key);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            workspace_id: config.workspace_id.clone(),
            base_url: CLOCKIFY_API_BASE.to_string(),
        })
    }

    /// Override the API base URL (used by tests against a mock server).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the approved time-off requests relevant to `reference_date`.
    ///
    /// The query window spans from the day before the reference date (so
    /// return-to-work-day requests are included) to [`LOOKAHEAD_DAYS`]
    /// ahead. Requests that ended before yesterday are excluded; entries
    /// that fail to parse are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns error if the service is unreachable, returns a non-success
    /// response, or the body cannot be parsed. All of these abort the run.
    #[instrument(skip(self), fields(workspace_id = %self.workspace_id))]
    pub async fn approved_requests(
        &self,
        reference_date: NaiveDate,
    ) -> Result<Vec<TimeOffRequest>, ClockifyError> {
        let window_start = reference_date
            .checked_sub_days(Days::new(1))
            .unwrap_or(reference_date);
        let window_end = reference_date
            .checked_add_days(Days::new(LOOKAHEAD_DAYS))
            .unwrap_or(reference_date);

        let query = TimeOffQuery {
            start: window_start.and_time(NaiveTime::MIN).and_utc(),
            end: window_end
                .and_hms_opt(23, 59, 59)
                .unwrap_or_else(|| window_end.and_time(NaiveTime::MIN))
                .and_utc(),
            statuses: vec!["APPROVED".to_string()],
            users: vec![],
        };

        let url = format!(
            "{}/workspaces/{}/time-off/requests",
            self.base_url, self.workspace_id
        );

        let response = self.client.post(&url).json(&query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClockifyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let page: TimeOffRequestsPage = response
            .json()
            .await
            .map_err(|e| ClockifyError::Parse(e.to_string()))?;

        let requests: Vec<TimeOffRequest> = page
            .requests
            .into_iter()
            .filter_map(super::types::WireTimeOffRequest::into_domain)
            .filter(|request| request.status.is_approved())
            .filter(|request| request.end_date >= window_start)
            .collect();

        debug!(
            count = requests.len(),
            window_start = %window_start,
            window_end = %window_end,
            "Fetched approved time-off requests"
        );

        Ok(requests)
    }
}
