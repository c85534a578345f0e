//! Integration tests for segplay

mod helpers;

mod cli_test;
mod page_test;
mod registry_test;
