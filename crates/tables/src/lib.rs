//! Data access for precomputed strategy tables.
//!
//! Tables are flat CSV files produced elsewhere; this crate decodes them into
//! typed rows and hands them out behind [`Arc`](std::sync::Arc) so repeated
//! loads of the same path can be served from memory.
//!
//! ## Core Types
//!
//! - [`Strategy`] — one row of a scenario's strategy table
//! - [`Share`] — one row of a per-player usage table
//! - [`Roster`] — player id to display name mapping
//! - [`Source`] — read interface over tables addressed by path
//! - [`Disk`] — reads tables from a data directory
//! - [`Cache`] — memoizes any [`Source`] by path
mod cache;
mod decode;
mod disk;
mod records;
mod roster;
mod source;

pub use cache::*;
pub use decode::*;
pub use disk::*;
pub use records::*;
pub use roster::*;
pub use source::*;
