//! Label registries for stroke and spin codes.
//!
//! Match tables encode every stroke as an integer action code and every
//! spin as an integer spin code. These two closed enumerations own the
//! mapping from code to bilingual display label.
//!
//! ## Core Types
//!
//! - [`Action`] — 19 stroke codes, partitioned into strokes (0–14) and serves (15–18)
//! - [`Spin`] — 6 spin codes
mod action;
mod spin;

pub use action::*;
pub use spin::*;

/// Decode an integer code that may have been written as a float.
/// Dataframe exports turn integer columns holding blanks into floats (`2.0`).
fn integral(x: f64) -> Result<u8, String> {
    match x.fract() == 0.0 && (0.0..=u8::MAX as f64).contains(&x) {
        true => Ok(x as u8),
        false => Err(format!("not an integer code: {}", x)),
    }
}
