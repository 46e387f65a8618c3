// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Context;
use clap::Parser;
use docsift::{
    load_index, normalize_query, passes_length_gate, query, search_documents, JsonCorpus,
    SearchBox, SearchConfig, SearchIndex, SessionView,
};
use futures::executor::block_on;
use std::io::{self, BufRead};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{
    field_label, focus_marker, pad_right, row, section_bot, section_top, themed, tier_badge, CYAN,
    DIM, GRAY,
};
use cli::script::{apply, parse_line};
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Query {
            corpus,
            config,
            limit,
            json,
            text,
        } => run_query(&corpus, config.as_deref(), limit, json, &text.join(" ")),
        Commands::Inspect { corpus } => run_inspect(&corpus),
        Commands::Session { corpus, config } => run_session(&corpus, config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

fn load_corpus(path: &Path) -> anyhow::Result<JsonCorpus> {
    JsonCorpus::from_path(path).with_context(|| format!("loading corpus {}", path.display()))
}

fn build(corpus: &JsonCorpus) -> SearchIndex {
    let index = block_on(load_index(corpus));
    tracing::info!(
        pages = corpus.len(),
        documents = index.len(),
        "index built"
    );
    index
}

fn run_query(
    corpus_path: &Path,
    config_path: Option<&Path>,
    limit: Option<usize>,
    json: bool,
    text: &str,
) -> anyhow::Result<()> {
    let config = cli::with_limit(load_config(config_path)?, limit).context("invalid --limit")?;
    let limit = config.limit;
    let corpus = load_corpus(corpus_path)?;
    let index = build(&corpus);

    let entries = query(&index, text, limit);
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    section_top(&format!("QUERY {:?}", text));
    if !passes_length_gate(text) {
        row(&themed(GRAY, &[DIM], " too short to search"));
    } else if entries.is_empty() {
        row(&themed(GRAY, &[DIM], " empty index"));
    }

    // Same order `query` used, so matches line up with page entries.
    let matches = search_documents(&index, &normalize_query(text));
    for (i, entry) in entries.iter().enumerate() {
        if entry.is_sentinel() {
            row(&format!(" {}", themed(GRAY, &[DIM], entry.label())));
            continue;
        }
        let badge = matches
            .get(i)
            .map(|m| tier_badge(m.tier()))
            .unwrap_or_default();
        let label = pad_right(&themed(CYAN, &[], entry.label()), 32);
        row(&format!(" {:>2}. {} {} {}", i + 1, label, pad_right(&badge, 9), entry.link));
        if let Some(page) = entry.value.page() {
            for header in page.matching_headers(text) {
                row(&themed(GRAY, &[], &format!("       > {}", header)));
            }
        }
    }
    section_bot();
    Ok(())
}

fn run_inspect(corpus_path: &Path) -> anyhow::Result<()> {
    let corpus = load_corpus(corpus_path)?;
    let index = build(&corpus);

    section_top("INDEX");
    row(&format!(" pages in dump    {}", corpus.len()));
    row(&format!(" documents        {}", index.len()));
    row(&format!(" vocabulary       {}", index.vocabulary_len()));
    section_bot();

    section_top("TOKENS PER FIELD");
    for (field, count) in index.field_token_counts() {
        row(&format!(" {} {}", pad_right(&field_label(field), 14), count));
    }
    section_bot();

    section_top("DOCUMENTS");
    for doc in index.documents() {
        let label = pad_right(&themed(CYAN, &[], doc.record.display_label()), 36);
        row(&format!(
            " {:>4} {} {:>4} tokens  {}",
            doc.doc_id.0,
            label,
            doc.token_count(),
            doc.record.path
        ));
    }
    section_bot();
    Ok(())
}

fn run_session(corpus_path: &Path, config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let corpus = load_corpus(corpus_path)?;
    let mut search = SearchBox::new(config);
    block_on(search.load(&corpus));

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!(%err, "skipping line");
                continue;
            }
        };
        if let Some(navigation) = apply(&mut search, command) {
            println!("navigate {}", navigation.path);
        }
        print_view(&search.view());
    }
    Ok(())
}

fn print_view(view: &SessionView<'_>) {
    let focus = if view.is_focused { "focused" } else { "blurred" };
    section_top(&format!("{:?} {}", view.query, focus));
    if view.show_suggestions {
        for (i, entry) in view.suggestions.iter().enumerate() {
            let marker = focus_marker(view.focus_index == Some(i));
            row(&format!(" {} {} {}", marker, pad_right(entry.label(), 32), entry.link));
        }
    }
    section_bot();
}
