//! # Package Model
//!
//! A package only exists for the duration of one classification. It is built
//! from four raw numbers and either validates completely or not at all.

use thiserror::Error;

use crate::parcel::measure::{Field, is_valid_measure};

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PackageError {
    #[error("{field} must be a finite number greater than zero (got {value} {unit})", unit = .field.unit())]
    InvalidMeasure { field: Field, value: f64 },
}

/// Three edges in centimeters and a mass in kilograms, all known to be valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Package {
    width: f64,
    height: f64,
    length: f64,
    mass: f64,
}

impl Package {
    /// Validates the measurements in the order width, height, length, mass.
    ///
    /// The first invalid field is reported; the rest are not inspected.
    pub fn new(width: f64, height: f64, length: f64, mass: f64) -> Result<Self, PackageError> {
        Ok(Self {
            width: checked(Field::Width, width)?,
            height: checked(Field::Height, height)?,
            length: checked(Field::Length, length)?,
            mass: checked(Field::Mass, mass)?,
        })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn edges(&self) -> [f64; 3] {
        [self.width, self.height, self.length]
    }

    /// Pairs every field with its value, edges first.
    pub fn measurements(&self) -> [(Field, f64); 4] {
        [
            (Field::Width, self.width),
            (Field::Height, self.height),
            (Field::Length, self.length),
            (Field::Mass, self.mass),
        ]
    }
}

fn checked(field: Field, value: f64) -> Result<f64, PackageError> {
    if is_valid_measure(value) {
        Ok(value)
    } else {
        Err(PackageError::InvalidMeasure { field, value })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
