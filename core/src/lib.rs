//! # Sortr Core
//!
//! The package classifier. Pure, synchronous and free of I/O: the same four
//! numbers always give the same [`Category`](sortr_common::parcel::Category).

pub mod classifier;

pub use classifier::{Assessment, classify, classify_package};
