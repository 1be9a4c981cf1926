//! Integration tests for the playpen CLI surface.
//!
//! Argument failures and the pre-staging existence check abort before any
//! orchestration call, so everything here runs without a container runtime.

#![allow(clippy::expect_used)]
