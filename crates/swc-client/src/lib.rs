//! SportsWorldCentral Fantasy Football SDK
//!
//! A Rust HTTP client for the SWC fantasy football REST API, with
//! configuration-driven retry behavior and bulk-file-format selection.
//!
//! # Features
//!
//! - **Typed endpoints**: leagues, players, performances, teams, counts,
//!   health check
//! - **Automatic retries**: exponential backoff with jitter for transport
//!   and status failures, bounded by a total time budget
//! - **Bulk downloads**: CSV or Parquet snapshot files, chosen once at
//!   configuration time
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use swc_client::{LeagueFilters, SwcClient, SwcConfig};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SwcClient::new(
//!         SwcConfig::builder("http://localhost:8000")
//!             .backoff(true)
//!             .backoff_max_time(Duration::from_secs(30))
//!             .build()?,
//!     )?;
//!
//!     client.get_health_check().await?;
//!
//!     let leagues = client.list_leagues(&LeagueFilters::default()).await?;
//!     for league in leagues {
//!         println!("{}: {} teams", league.league_name, league.teams.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Retry Behavior
//!
//! With `backoff` enabled, failed calls are retried with exponentially
//! growing, jittered waits until the call succeeds or the cumulative
//! elapsed time exceeds `backoff_max_time`, at which point the last error
//! surfaces. Both transport failures and non-success HTTP statuses are
//! retried; configuration and decoding errors are not. With `backoff`
//! disabled, the first failure propagates immediately.
//!
//! # Error Handling
//!
//! All operations return `Result<T, SwcError>`:
//!
//! - `Transport`: the network exchange failed (connection, timeout, DNS)
//! - `Status`: the exchange completed with a non-success HTTP status
//! - `InvalidResponse`: a success body that failed to decode
//! - `Config`: invalid configuration

pub mod bulk;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use bulk::{BulkEntity, BulkFileFormat};
pub use client::{
    LeagueFilters, PerformanceFilters, PlayerFilters, SwcClient, TeamFilters,
};
pub use config::{SwcConfig, SwcConfigBuilder, DEFAULT_BULK_FILE_BASE_URL};
pub use error::{Result, SwcError};
pub use types::{Counts, HealthCheck, League, Performance, Player, Team};
