//! League standings.
//!
//! This module provides:
//! - Aggregate rows per team with derived points and goal difference
//! - A configurable point scheme (default 3/1/0)
//! - Table ranking by points, goal difference, then goals scored
//! - Row aggregation from completed match results
//!
//! ## Example
//!
//! ```
//! use plyaz_league::entities::TeamId;
//! use plyaz_league::standings::{MatchResult, PointScheme, aggregate, rank};
//!
//! let results = vec![MatchResult {
//!     home: TeamId::new("lions"),
//!     away: TeamId::new("tigers"),
//!     home_goals: 2,
//!     away_goals: 1,
//! }];
//!
//! let rows = aggregate(&results, &[]);
//! let table = rank(&rows, &PointScheme::default());
//! assert_eq!(table[0].row.team.as_str(), "lions");
//! assert_eq!(table[0].points, 3);
//! ```

pub mod aggregate;
pub mod models;
pub mod ranking;

pub use aggregate::aggregate;
pub use models::{MatchResult, PointScheme, RankedRow, StandingsRow};
pub use ranking::{rank, sort_rows};
