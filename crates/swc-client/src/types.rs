//! Response types for the SWC API.
//!
//! These types mirror the API response structures and are used for
//! deserialization of JSON responses.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheck {
    /// Human-readable status message
    pub message: String,
}

/// An NFL player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique player identifier
    pub player_id: i32,
    /// NFL GSIS identifier
    pub gsis_id: String,
    pub first_name: String,
    pub last_name: String,
    /// Position code (QB, RB, WR, ...)
    pub position: String,
    /// Date this record last changed
    pub last_changed_date: NaiveDate,
}

/// A single week's scoring for one player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Performance {
    /// Unique performance identifier
    pub performance_id: i32,
    /// Player this performance belongs to
    pub player_id: i32,
    /// Season week, as the API reports it
    pub week_number: String,
    /// Fantasy points scored that week
    pub fantasy_points: f64,
    /// Date this record last changed
    pub last_changed_date: NaiveDate,
}

/// A fantasy team within a league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Unique team identifier
    pub team_id: i32,
    pub team_name: String,
    /// League this team belongs to
    pub league_id: i32,
    /// Date this record last changed
    pub last_changed_date: NaiveDate,
    /// Roster, embedded in team responses
    #[serde(default)]
    pub players: Vec<Player>,
}

/// A fantasy league.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct League {
    /// Unique league identifier
    pub league_id: i32,
    pub league_name: String,
    /// Scoring system in use (e.g., "PPR")
    pub scoring_type: String,
    /// Date this record last changed
    pub last_changed_date: NaiveDate,
    /// Member teams, embedded in league responses
    #[serde(default)]
    pub teams: Vec<Team>,
}

/// Record counts across the core entity tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counts {
    pub league_count: i32,
    pub team_count: i32,
    pub player_count: i32,
}
