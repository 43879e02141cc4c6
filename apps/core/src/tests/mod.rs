//! Test Module
//!
//! Cross-module test suite for the analysis core.
//!
//! ## Test Categories
//! - `parser_tests`: header grammar variants, continuation handling, ordering
//! - `analysis_tests`: full pipeline scenarios, record invariants, JSON shape
//! - `avatar_tests`: trait-to-attribute mapping and seeded perturbation
