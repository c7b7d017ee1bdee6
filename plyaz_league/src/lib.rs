//! # PLYAZ League
//!
//! The competition domain engine behind the PLYAZ league manager.
//!
//! Everything here is a pure function or value type over in-memory data:
//! callers decode stored rows into these types, call the engine, and persist
//! whatever comes back. Nothing in this crate performs I/O or holds global
//! state, so every call is independent and safe from concurrent handlers.
//!
//! ## Core Modules
//!
//! - [`fixture`]: Match lifecycle state machine and fixture records
//! - [`bracket`]: Seeded single-elimination brackets with byes and advancement
//! - [`standings`]: Standings aggregation and table ranking
//! - [`schedule`]: Round-robin schedules and group draws
//! - [`stats`]: Player statistics from match events
//! - [`config`]: Point scheme and limits, with environment overrides
//!
//! ## Example
//!
//! ```
//! use plyaz_league::{MatchStatus, validate_transition};
//!
//! let result = validate_transition(MatchStatus::Live, MatchStatus::Completed);
//! assert!(result.is_ok());
//! ```

pub mod bracket;
pub mod config;
pub mod entities;
pub mod fixture;
pub mod schedule;
pub mod standings;
pub mod stats;

pub use bracket::{Bracket, BracketError, Entrant, MatchRef};
pub use config::EngineConfig;
pub use entities::{PlayerId, TeamId};
pub use fixture::{Fixture, FixtureError, MatchStatus, validate_transition};
pub use standings::{PointScheme, StandingsRow, rank};
