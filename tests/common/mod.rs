//! Shared test utilities for branch-navigator
//!
//! Integration tests run the real binary against throwaway repositories,
//! so these helpers drive the real `git` executable.

pub mod assertions;
pub mod repository;
