//! Match lifecycle state machine.
//!
//! A match moves through a fixed set of statuses. The legal moves are held in
//! a table rather than spread across conditionals:
//!
//! - **upcoming**: live, postponed, cancelled
//! - **live**: completed, postponed
//! - **postponed**: upcoming, cancelled
//! - **completed** and **cancelled**: terminal
//!
//! Re-entering the current status is rejected, never treated as a no-op.
//!
//! ## Example
//!
//! ```
//! use plyaz_league::fixture::{MatchStatus, validate_transition};
//!
//! assert!(validate_transition(MatchStatus::Upcoming, MatchStatus::Live).is_ok());
//! assert!(validate_transition(MatchStatus::Upcoming, MatchStatus::Completed).is_err());
//! ```

pub mod errors;
pub mod models;
pub mod status;

pub use errors::{FixtureError, FixtureResult};
pub use models::{Fixture, FixtureId, Score};
pub use status::{MatchStatus, can_transition, validate_transition, validate_transition_str};
