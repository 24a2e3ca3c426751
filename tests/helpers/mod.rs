// Test Helper Modules
//
// Fixture data sources and small builders shared by the unit, integration and
// contract test binaries. Each binary pulls this module in with
// `#[path = "../helpers/mod.rs"] mod helpers;` and uses only part of it.

#![allow(dead_code)]


pub use test_data::*;
