//! Types shared by every layer of `sortr`.
//!
//! * **[`parcel`]**: the package, its measurements and the handling categories.
//! * **[`config`]**: presentation options assembled by the command line.

pub mod config;
pub mod parcel;
