//! Knockout bracket engine.
//!
//! This module provides single-elimination brackets:
//! - Standard seeding (seed `k` opens against seed `size + 1 - k`)
//! - Byes for the top seeds when the field is not a power of two
//! - Winner advancement into the fed next-round slot
//! - Binary snapshots for storing a bracket between requests
//!
//! A recorded winner cannot be changed. Correcting a result means
//! regenerating, or restoring an earlier snapshot.
//!
//! ## Example
//!
//! ```
//! use plyaz_league::bracket::{Bracket, BracketError, Entrant, MatchRef};
//!
//! let entrants: Vec<Entrant> = (1..=5)
//!     .map(|seed| Entrant::new(&format!("team-{seed}"), seed))
//!     .collect();
//!
//! let mut bracket = Bracket::generate(&entrants)?;
//! assert_eq!(bracket.total_rounds(), 3);
//! assert_eq!(bracket.bye_count(), 3);
//!
//! // The only real first-round match is seed 4 against seed 5
//! let opener = MatchRef::new(1, 1);
//! let winner = entrants[3].id.clone();
//! assert_eq!(bracket.get(opener).and_then(|m| m.home.entrant()), Some(&winner));
//! assert_eq!(bracket.record_winner(opener, &winner)?, Some(MatchRef::new(2, 0)));
//!
//! assert_eq!(
//!     bracket.record_winner(opener, &winner),
//!     Err(BracketError::AlreadyResolved(opener))
//! );
//! # Ok::<(), BracketError>(())
//! ```

pub mod engine;
pub mod errors;
pub mod models;
pub mod seeding;

pub use engine::Bracket;
pub use errors::{BracketError, BracketResult, SnapshotError};
pub use models::{BracketMatch, Entrant, EntrantId, MatchRef, Side, Slot, round_name};
pub use seeding::seeded_order;
