//! Fixture scheduling.
//!
//! - Round-robin schedules (single and double leg) using the circle method
//! - Random draws of teams into groups

pub mod draw;
pub mod round_robin;

pub use draw::{GroupAssignment, into_groups, random_draw, random_draw_thread_rng};
pub use round_robin::{ScheduledFixture, double_round_robin, round_robin};
