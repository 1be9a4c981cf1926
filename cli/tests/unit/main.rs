//! Unit tests for the playpen CLI.
//!
//! These use mocked collaborators and tempdir filesystems; no container
//! runtime is touched.

#![allow(clippy::expect_used)]

mod helpers;
mod property_tests;
