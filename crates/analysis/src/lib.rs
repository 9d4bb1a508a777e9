//! Selection pipeline over precomputed strategy tables.
//!
//! A request is a [`Selection`]: scenario, first action, optional spin, a
//! Top-K size, and an optional follow-up reply to drill into. [`API::render`]
//! turns it into a [`Report`] by filtering the scenario's table, ranking the
//! surviving replies by EV, and (for scenarios with player data) joining the
//! per-player usage table. Absent data never fails a request; it becomes a
//! [`Notice`] instead.
//!
//! ## Core Types
//!
//! - [`API`] — entry point over a table [`Source`](ttev_tables::Source)
//! - [`Entry`] — a filtered strategy row with its composite label
//! - [`Chart`] — EV bars and usage line, ready for a plotting backend
//! - [`Ranking`] — Top-K table
//! - [`Breakdown`] — top players for one follow-up reply
mod api;
mod breakdown;
mod chart;
mod entry;
mod notice;
mod ranking;
mod report;
mod selection;

pub use api::*;
pub use breakdown::*;
pub use chart::*;
pub use entry::*;
pub use notice::*;
pub use ranking::*;
pub use report::*;
pub use selection::*;
