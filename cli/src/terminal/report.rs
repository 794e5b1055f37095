//! The `--explain` report: how a package ended up on its stack.

use sortr_common::parcel::{Category, Package, PackageError};
use sortr_core::Assessment;
use sortr_core::classifier::{EDGE_LIMIT_CM, MASS_LIMIT_KG, VOLUME_LIMIT_CM3};

use crate::terminal::{format, print};

pub fn assessment(package: &Package, assessment: &Assessment) {
    print::header("package assessment");

    for (field, value) in package.measurements() {
        print::aligned_line(field.name(), format::measure(field, value));
    }
    print::aligned_line("volume", format!("{} cm³", assessment.volume));

    let edge_rule: String = format!("an edge ≥ {EDGE_LIMIT_CM} cm");
    let volume_rule: String = format!("volume > {VOLUME_LIMIT_CM3} cm³");
    let mass_rule: String = format!("mass ≥ {MASS_LIMIT_KG} kg");

    print::tree_head(1, "bulky", &format::verdict(assessment.is_bulky(), "by edge or volume"));
    print::as_tree_one_level(vec![
        ("edge", format::verdict(assessment.oversized_by_edge, &edge_rule)),
        ("volume", format::verdict(assessment.oversized_by_volume, &volume_rule)),
    ]);
    print::tree_head(2, "heavy", &format::verdict(assessment.heavy, &mass_rule));

    print::aligned_line("category", format::category(assessment.category()));
    print::end_of_report();
}

pub fn rejection(err: &PackageError) {
    print::header("package rejected");
    print::aligned_line("reason", err.to_string());
    print::aligned_line("category", format::category(Category::Rejected));
    print::end_of_report();
}
