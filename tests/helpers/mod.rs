// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the axum request helper used by the HTTP tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
