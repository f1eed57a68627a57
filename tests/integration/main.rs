//! Integration tests for termfolio

mod helpers;

mod catalog_test;
mod cli_test;
mod session_test;
