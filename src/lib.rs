//! Enrich a publications data file with citation counts.
//!
//! The pipeline extracts `doi:` fields, resolves each DOI through an expiring local
//! cache and an ordered list of remote sources, and writes `citations:` fields back
//! next to each DOI without disturbing the rest of the file.

pub mod cache;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod extract;
pub mod patch;
pub mod resolver;
pub mod sources;
