//! `sv list` — searchable, paginated project listing.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use standview_core::view::{ListingState, ListingView};
use standview_core::{PageNav, ProjectRecord, Status};

use super::{LoadStatus, Session};
use crate::output::{OutputMode, pretty_rule, pretty_section, render_mode};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Case-insensitive substring matched against name, status, venue and dates.
    pub query: Option<String>,

    /// Page to show (1-based). Out-of-range pages are clamped.
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Projects per page. Defaults to `listing.page_size` from config.
    #[arg(short = 'n', long)]
    pub page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
struct NavLinks {
    show_controls: bool,
    first: Option<usize>,
    prev: Option<usize>,
    next: Option<usize>,
    last: Option<usize>,
}

impl From<PageNav> for NavLinks {
    fn from(nav: PageNav) -> Self {
        Self {
            show_controls: nav.show_controls(),
            first: nav.first(),
            prev: nav.prev(),
            next: nav.next(),
            last: nav.last(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListOutput<'a> {
    query: String,
    page: usize,
    page_size: usize,
    total_pages: usize,
    filtered_total: usize,
    summary: String,
    projects: Vec<&'a ProjectRecord>,
    nav: NavLinks,
    load: LoadStatus,
}

impl<'a> ListOutput<'a> {
    fn from_view(view: ListingView<'a>, load: LoadStatus) -> Self {
        let summary = view.summary();
        Self {
            query: view.query,
            page: view.page.page,
            page_size: view.page.page_size,
            total_pages: view.page.total_pages,
            filtered_total: view.filtered_total,
            summary,
            projects: view.page.items,
            nav: view.nav.into(),
            load,
        }
    }
}

/// Execute `sv list`.
pub fn run_list(args: &ListArgs, output: OutputMode, session: &Session) -> anyhow::Result<()> {
    let page_size = args.page_size.unwrap_or(session.config.listing.page_size);
    let mut state = ListingState::new(args.query.clone().unwrap_or_default(), args.page);
    let view = state.view(session.records(), &session.listing, page_size);
    if state.page() != args.page {
        tracing::debug!(requested = args.page, shown = state.page(), "page clamped");
    }

    let payload = ListOutput::from_view(view, LoadStatus::from(session.store.state()));
    render_mode(
        output,
        &payload,
        |p, w| render_list_text(p, w),
        |p, w| render_list_human(p, w),
    )
}

fn status_marker(raw: &str) -> &'static str {
    match Status::classify(raw) {
        Some(Status::Pending) => "○",
        Some(Status::AdminApproved) => "◐",
        Some(Status::DesignSubmitted) => "◑",
        Some(Status::ProjectConfirmed) => "●",
        None => "·",
    }
}

fn render_list_human(list: &ListOutput<'_>, w: &mut dyn Write) -> std::io::Result<()> {
    if list.projects.is_empty() {
        writeln!(w, "No projects found.")?;
        return Ok(());
    }

    let heading = if list.query.is_empty() {
        "Projects".to_string()
    } else {
        format!("Projects matching \"{}\"", list.query)
    };
    pretty_section(w, &heading)?;

    for record in &list.projects {
        writeln!(
            w,
            "{} {:<12} {}",
            status_marker(&record.status),
            record.project_id,
            record.project_name
        )?;
        writeln!(
            w,
            "  {:<18} {} → {}  {}",
            record.status, record.start_date, record.end_date, record.venue
        )?;
    }

    pretty_rule(w)?;
    writeln!(w, "{}", list.summary)?;
    if list.nav.show_controls {
        writeln!(w, "{}", nav_line(list))?;
    }
    Ok(())
}

fn nav_line(list: &ListOutput<'_>) -> String {
    let pages: Vec<String> = PageNav::new(list.page, list.total_pages)
        .pages()
        .map(|n| {
            if n == list.page {
                format!("[{n}]")
            } else {
                n.to_string()
            }
        })
        .collect();

    let mut parts = Vec::new();
    if let Some(prev) = list.nav.prev {
        parts.push(format!("« {prev}"));
    }
    parts.push(pages.join(" "));
    if let Some(next) = list.nav.next {
        parts.push(format!("{next} »"));
    }
    format!("page {} of {}: {}", list.page, list.total_pages, parts.join("  "))
}

fn render_list_text(list: &ListOutput<'_>, w: &mut dyn Write) -> std::io::Result<()> {
    for record in &list.projects {
        writeln!(
            w,
            "{}\t{}\t{}\t{}\t{}\t{}",
            record.project_id,
            record.project_name,
            record.status,
            record.start_date,
            record.end_date,
            record.venue
        )?;
    }
    Ok(())
}
