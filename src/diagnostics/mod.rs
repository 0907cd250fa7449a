//! Diagnostic tooling that exercises a running service from the outside.

pub mod timing;
