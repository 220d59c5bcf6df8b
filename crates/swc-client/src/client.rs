//! HTTP client with configuration-driven retry behavior.

use crate::bulk::{self, BulkEntity};
use crate::config::SwcConfig;
use crate::error::{Result, SwcError};
use crate::types::{Counts, HealthCheck, League, Performance, Player, Team};
use bytes::Bytes;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{
    policies::ExponentialBackoff, Jitter, RetryTransientMiddleware, Retryable, RetryableStrategy,
};
use std::collections::BTreeMap;

/// SWC API client.
///
/// Wraps a single GET call path with retry middleware chosen at
/// construction time, and derives the bulk file name table from the
/// configured format. Construction performs no network I/O.
pub struct SwcClient {
    http: ClientWithMiddleware,
    config: SwcConfig,
    bulk_file_names: BTreeMap<BulkEntity, String>,
}

impl SwcClient {
    /// API health check.
    pub const HEALTH_CHECK_ENDPOINT: &'static str = "/";
    /// List leagues.
    pub const LIST_LEAGUES_ENDPOINT: &'static str = "/v0/leagues/";
    /// List players.
    pub const LIST_PLAYERS_ENDPOINT: &'static str = "/v0/players/";
    /// List weekly scoring performances.
    pub const LIST_PERFORMANCES_ENDPOINT: &'static str = "/v0/performances/";
    /// List teams.
    pub const LIST_TEAMS_ENDPOINT: &'static str = "/v0/teams/";
    /// Record counts for all entities.
    pub const GET_COUNTS_ENDPOINT: &'static str = "/v0/counts/";

    /// Create a new client with the given configuration.
    pub fn new(config: SwcConfig) -> Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .unwrap_or_else(|_| HeaderValue::from_static("swc-client")),
        );

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        // Retry wrapping happens here or not at all: with backoff disabled
        // the base client is used directly and the first failure propagates.
        let http = if config.backoff {
            let retry_policy = ExponentialBackoff::builder()
                .retry_bounds(config.backoff_initial_delay, config.backoff_max_delay)
                .jitter(Jitter::Full)
                .build_with_total_retry_duration(config.backoff_max_time);
            ClientBuilder::new(reqwest_client)
                .with(RetryTransientMiddleware::new_with_policy_and_strategy(
                    retry_policy,
                    SwcRetryStrategy,
                ))
                .build()
        } else {
            ClientBuilder::new(reqwest_client).build()
        };

        let bulk_file_names = bulk::bulk_file_names(config.bulk_file_format);
        tracing::debug!(files = ?bulk_file_names, "assembled bulk file table");

        Ok(Self {
            http,
            config,
            bulk_file_names,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// The entity -> bulk filename table derived from the configured format.
    pub fn bulk_file_names(&self) -> &BTreeMap<BulkEntity, String> {
        &self.bulk_file_names
    }

    /// Bulk filename for one entity.
    pub fn bulk_file_name(&self, entity: BulkEntity) -> &str {
        &self.bulk_file_names[&entity]
    }

    // =========================================================================
    // Endpoint Methods
    // =========================================================================

    /// Check that the API is up.
    pub async fn get_health_check(&self) -> Result<HealthCheck> {
        let response = self.call_api(Self::HEALTH_CHECK_ENDPOINT, &[]).await?;
        Self::decode(response).await
    }

    /// List leagues, with member teams embedded.
    pub async fn list_leagues(&self, filters: &LeagueFilters) -> Result<Vec<League>> {
        let response = self
            .call_api(Self::LIST_LEAGUES_ENDPOINT, &filters.query())
            .await?;
        Self::decode(response).await
    }

    /// List players.
    pub async fn list_players(&self, filters: &PlayerFilters) -> Result<Vec<Player>> {
        let response = self
            .call_api(Self::LIST_PLAYERS_ENDPOINT, &filters.query())
            .await?;
        Self::decode(response).await
    }

    /// List weekly scoring performances.
    pub async fn list_performances(
        &self,
        filters: &PerformanceFilters,
    ) -> Result<Vec<Performance>> {
        let response = self
            .call_api(Self::LIST_PERFORMANCES_ENDPOINT, &filters.query())
            .await?;
        Self::decode(response).await
    }

    /// List teams, with rosters embedded.
    pub async fn list_teams(&self, filters: &TeamFilters) -> Result<Vec<Team>> {
        let response = self
            .call_api(Self::LIST_TEAMS_ENDPOINT, &filters.query())
            .await?;
        Self::decode(response).await
    }

    /// Record counts across the core entity tables.
    pub async fn get_counts(&self) -> Result<Counts> {
        let response = self.call_api(Self::GET_COUNTS_ENDPOINT, &[]).await?;
        Self::decode(response).await
    }

    // =========================================================================
    // Bulk Files
    // =========================================================================

    /// Download one bulk snapshot file, undecoded.
    ///
    /// The file name comes from the construction-time table, so the
    /// extension always matches the configured format.
    pub async fn get_bulk_file(&self, entity: BulkEntity) -> Result<Bytes> {
        let url = format!(
            "{}{}",
            self.config.bulk_file_base_url,
            self.bulk_file_names[&entity]
        );
        let response = self.send(&url, &[]).await?;
        Ok(response.bytes().await?)
    }

    // =========================================================================
    // Internal HTTP Methods
    // =========================================================================

    /// Issue one GET against `base_url + api_endpoint`.
    ///
    /// Parameters with absent values are stripped before the request goes
    /// out. Returns the raw response; decoding is the caller's business.
    pub async fn call_api(
        &self,
        api_endpoint: &str,
        api_params: &[(&str, Option<String>)],
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.config.base_url, api_endpoint);
        let query = filter_params(api_params);
        self.send(&url, &query).await
    }

    /// Send a GET through the (possibly retry-wrapped) HTTP stack and
    /// surface non-success statuses as errors.
    async fn send(&self, url: &str, query: &[(String, String)]) -> Result<reqwest::Response> {
        tracing::debug!(url, params = ?query, "sending request");

        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.inspect_err(|error| {
            tracing::error!(url, params = ?query, %error, "request error");
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "received response");
            return Ok(response);
        }

        let message = match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => status.to_string(),
        };
        tracing::error!(
            url,
            params = ?query,
            status = status.as_u16(),
            body = %message,
            "status error"
        );
        Err(SwcError::Status {
            status: status.as_u16(),
            message,
        })
    }

    /// Decode a success response body.
    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let body = response.bytes().await?;
        tracing::debug!(body = %String::from_utf8_lossy(&body), "response body");
        serde_json::from_slice(&body).map_err(|e| {
            SwcError::InvalidResponse(format!(
                "failed to decode response body: {} (body: {})",
                e,
                String::from_utf8_lossy(&body)
            ))
        })
    }
}

/// Produce the outgoing parameter list: entries with set values only.
fn filter_params(params: &[(&str, Option<String>)]) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_ref()
                .map(|value| ((*key).to_string(), value.clone()))
        })
        .collect()
}

/// Retry classification for the SWC API.
///
/// Retries on transport failures (connection, timeout, DNS) and on any
/// non-success HTTP status. Everything else is fatal. The backoff policy's
/// time budget, not an attempt count, decides when retrying stops.
struct SwcRetryStrategy;

impl RetryableStrategy for SwcRetryStrategy {
    fn handle(&self, res: &reqwest_middleware::Result<reqwest::Response>) -> Option<Retryable> {
        match res {
            Ok(response) if response.status().is_success() => None,
            Ok(_) => Some(Retryable::Transient),
            Err(error) => {
                if error.is_timeout() || error.is_connect() {
                    Some(Retryable::Transient)
                } else {
                    Some(Retryable::Fatal)
                }
            }
        }
    }
}

// =============================================================================
// List Filters
// =============================================================================

/// Filters for [`SwcClient::list_leagues`]. Unset fields stay out of the
/// query string.
#[derive(Debug, Clone, Default)]
pub struct LeagueFilters {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    /// Only records changed on or after this date
    pub minimum_last_changed_date: Option<NaiveDate>,
    /// Exact league name match
    pub league_name: Option<String>,
}

impl LeagueFilters {
    fn query(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("skip", self.skip.map(|v| v.to_string())),
            ("limit", self.limit.map(|v| v.to_string())),
            (
                "minimum_last_changed_date",
                self.minimum_last_changed_date.map(|d| d.to_string()),
            ),
            ("league_name", self.league_name.clone()),
        ]
    }
}

/// Filters for [`SwcClient::list_players`].
#[derive(Debug, Clone, Default)]
pub struct PlayerFilters {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    /// Only records changed on or after this date
    pub minimum_last_changed_date: Option<NaiveDate>,
    /// Exact first name match
    pub first_name: Option<String>,
    /// Exact last name match
    pub last_name: Option<String>,
}

impl PlayerFilters {
    fn query(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("skip", self.skip.map(|v| v.to_string())),
            ("limit", self.limit.map(|v| v.to_string())),
            (
                "minimum_last_changed_date",
                self.minimum_last_changed_date.map(|d| d.to_string()),
            ),
            ("first_name", self.first_name.clone()),
            ("last_name", self.last_name.clone()),
        ]
    }
}

/// Filters for [`SwcClient::list_performances`].
#[derive(Debug, Clone, Default)]
pub struct PerformanceFilters {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    /// Only records changed on or after this date
    pub minimum_last_changed_date: Option<NaiveDate>,
}

impl PerformanceFilters {
    fn query(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("skip", self.skip.map(|v| v.to_string())),
            ("limit", self.limit.map(|v| v.to_string())),
            (
                "minimum_last_changed_date",
                self.minimum_last_changed_date.map(|d| d.to_string()),
            ),
        ]
    }
}

/// Filters for [`SwcClient::list_teams`].
#[derive(Debug, Clone, Default)]
pub struct TeamFilters {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
    /// Only records changed on or after this date
    pub minimum_last_changed_date: Option<NaiveDate>,
    /// Exact team name match
    pub team_name: Option<String>,
    /// Restrict to one league
    pub league_id: Option<i32>,
}

impl TeamFilters {
    fn query(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("skip", self.skip.map(|v| v.to_string())),
            ("limit", self.limit.map(|v| v.to_string())),
            (
                "minimum_last_changed_date",
                self.minimum_last_changed_date.map(|d| d.to_string()),
            ),
            ("team_name", self.team_name.clone()),
            ("league_id", self.league_id.map(|v| v.to_string())),
        ]
    }
}
