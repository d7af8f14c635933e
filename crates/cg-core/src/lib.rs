//! # cg-core
//!
//! Core types, language detection, and error types for codeguess.
//!
//! This crate provides the foundational types shared across all codeguess crates:
//! - Entity structs for the round-content pipeline (listings, files, cache rows, rounds)
//! - Content-type and directory-entry enums
//! - The per-request upstream call budget
//! - File-extension → language mapping and comment-style families
//! - The static catalog of candidate repositories
//! - Cross-cutting error types

pub mod budget;
pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod language;
