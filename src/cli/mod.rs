// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Three subcommands: `query` runs one query against a JSON corpus dump,
//! `inspect` summarizes the index built from it, and `session` drives a
//! search session from line-based commands on stdin.

pub mod display;
pub mod script;

use clap::{Parser, Subcommand};
use docsift::{ConfigError, SearchConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Incremental prefix search over a documentation site's pages",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query a corpus and print the suggestions
    Query {
        /// JSON corpus dump (an array of pages)
        #[arg(short, long)]
        corpus: PathBuf,

        /// Search config JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Maximum number of suggestions (overrides the config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print suggestions as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Query text; multiple words are joined with spaces
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Summarize the index built from a corpus
    Inspect {
        /// JSON corpus dump
        #[arg(short, long)]
        corpus: PathBuf,
    },

    /// Drive a search session from commands read on stdin
    ///
    /// One command per line: `type <text>`, `down`, `up`, `enter`,
    /// `hover <i>`, `leave`, `select <i>`, `focus`, `blur`, `key <k>`.
    /// The session view is printed after every command.
    Session {
        /// JSON corpus dump
        #[arg(short, long)]
        corpus: PathBuf,

        /// Search config JSON file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Apply a `--limit` override, validating it like a config file value.
pub fn with_limit(config: SearchConfig, limit: Option<usize>) -> Result<SearchConfig, ConfigError> {
    let config = SearchConfig {
        limit: limit.unwrap_or(config.limit),
        ..config
    };
    config.validate()?;
    Ok(config)
}
