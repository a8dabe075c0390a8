// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking of tallied documents.

pub mod ranking;

pub use ranking::{compare_candidates, rank, Candidate};
