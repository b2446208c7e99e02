//! `sv find` — quick-search suggestions by project name.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use standview_core::view::QuickSearch;

use super::{LoadStatus, Session};
use crate::output::{OutputMode, pretty_section, render_mode};

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Text to look for. A blank query suggests nothing.
    pub query: String,

    /// Maximum suggestions to show (0 = all).
    #[arg(short = 'n', long, default_value = "0")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
struct Suggestion<'a> {
    id: &'a str,
    name: &'a str,
    status: &'a str,
}

#[derive(Debug, Serialize)]
pub struct FindOutput<'a> {
    query: &'a str,
    count: usize,
    suggestions: Vec<Suggestion<'a>>,
    load: LoadStatus,
}

/// Execute `sv find`.
pub fn run_find(args: &FindArgs, output: OutputMode, session: &Session) -> anyhow::Result<()> {
    let search = QuickSearch::new(args.query.as_str());
    let hits = search.suggestions(session.records(), &session.quick_search);
    let count = hits.len();
    let take = if args.limit == 0 { count } else { args.limit };

    let payload = FindOutput {
        query: &args.query,
        count,
        suggestions: hits
            .into_iter()
            .take(take)
            .map(|r| Suggestion {
                id: &r.project_id,
                name: &r.project_name,
                status: &r.status,
            })
            .collect(),
        load: LoadStatus::from(session.store.state()),
    };

    render_mode(
        output,
        &payload,
        |p, w| render_find_text(p, w),
        |p, w| render_find_human(p, w),
    )
}

fn render_find_human(find: &FindOutput<'_>, w: &mut dyn Write) -> std::io::Result<()> {
    if find.suggestions.is_empty() {
        writeln!(w, "No matching projects.")?;
        return Ok(());
    }
    pretty_section(w, &format!("{} match(es) for \"{}\"", find.count, find.query))?;
    for s in &find.suggestions {
        writeln!(w, "{:<12} {:<40} {}", s.id, s.name, s.status)?;
    }
    if find.suggestions.len() < find.count {
        writeln!(w, "... {} more", find.count - find.suggestions.len())?;
    }
    Ok(())
}

fn render_find_text(find: &FindOutput<'_>, w: &mut dyn Write) -> std::io::Result<()> {
    for s in &find.suggestions {
        writeln!(w, "{}\t{}", s.id, s.name)?;
    }
    Ok(())
}
