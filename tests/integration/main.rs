//! Integration tests for the scraper
//!
//! These tests use wiremock to serve small copies of the documentation and
//! PEP pages and drive every mode end-to-end.

mod download_tests;
mod pep_tests;
mod whats_new_tests;
