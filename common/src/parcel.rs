//! # Parcel Models
//!
//! Value objects describing a package on its way through the sorter.
//!
//! * [`package::Package`]: three edges and a mass, validated on construction.
//! * [`category::Category`]: the handling stack a package ends up on.
//! * [`measure::Field`]: names a single measured quantity and its unit.
//!
//! None of these carry identity or state between classifications.

pub mod category;
pub mod measure;
pub mod package;

pub use category::Category;
pub use measure::{Field, is_valid_measure};
pub use package::{Package, PackageError};
