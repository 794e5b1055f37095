use sortr_common::parcel::{Category, Field, Package, PackageError};
use sortr_core::{Assessment, classify, classify_package};

/// Packages measured at the sorting arm, paired with the stack they belong on.
const SCENARIOS: &[((f64, f64, f64, f64), Category)] = &[
    // Exactly at the volume limit, not above it
    ((100.0, 100.0, 100.0, 10.0), Category::Standard),
    ((100.0, 100.0, 100.1, 10.0), Category::Special),
    ((150.0, 100.0, 100.0, 10.0), Category::Special),
    ((150.0, 100.0, 100.0, 20.0), Category::Rejected),
    ((100.0, 100.0, 100.0, 19.9), Category::Standard),
    ((100.0, 100.0, 100.0, 20.0), Category::Special),
    // Below the edge limit but bulky by volume
    ((149.9, 100.0, 100.0, 10.0), Category::Special),
];

#[test]
fn known_packages_sort_as_expected() {
    for &((width, height, length, mass), expected) in SCENARIOS {
        assert_eq!(
            classify(width, height, length, mass),
            expected,
            "{width}x{height}x{length} @ {mass}kg"
        );
    }
}

#[test]
fn validated_package_agrees_with_raw_classification() {
    for &((width, height, length, mass), expected) in SCENARIOS {
        let package: Package = Package::new(width, height, length, mass).unwrap();
        assert_eq!(classify_package(&package), expected);
        assert_eq!(Assessment::of(&package).category(), expected);
    }
}

#[test]
fn invalid_measurements_reject_regardless_of_others() {
    let bad_values = [0.0, -1.0, -5.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY];

    for bad in bad_values {
        assert_eq!(classify(bad, 1.0, 1.0, 1.0), Category::Rejected);
        assert_eq!(classify(1.0, bad, 1.0, 1.0), Category::Rejected);
        assert_eq!(classify(1.0, 1.0, bad, 1.0), Category::Rejected);
        assert_eq!(classify(1.0, 1.0, 1.0, bad), Category::Rejected);
    }
}

#[test]
fn rejection_reason_names_the_field() {
    let err: PackageError = Package::new(100.0, 100.0, 100.0, f64::INFINITY).unwrap_err();
    assert_eq!(
        err,
        PackageError::InvalidMeasure {
            field: Field::Mass,
            value: f64::INFINITY
        }
    );
    assert!(err.to_string().starts_with("mass"));
}

#[test]
fn repeated_calls_do_not_drift() {
    let runs: Vec<Category> = (0..100).map(|_| classify(150.0, 100.0, 100.0, 20.0)).collect();
    assert!(runs.iter().all(|&c| c == Category::Rejected));
}
