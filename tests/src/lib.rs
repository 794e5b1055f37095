//! Cross-crate scenarios for the package sorter.

#[cfg(test)]
mod scenarios;
