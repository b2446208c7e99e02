//! `sv show` — full details of one project.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use standview_core::detail::Detail;
use standview_core::error::StandviewError;
use standview_core::view::{DetailView, QuickSearch};
use standview_core::{ProjectRecord, Status};

use super::{LoadStatus, Session};
use crate::output::{CliError, OutputMode, pretty_kv, pretty_section, render_error, render_mode};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Project ID (exact match).
    pub id: String,

    /// Also list quick-search suggestions for this query under the details.
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
struct Suggestion<'a> {
    id: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ShowOutput<'a> {
    status_slug: &'static str,
    project: &'a ProjectRecord,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    suggestions: Vec<Suggestion<'a>>,
    load: LoadStatus,
}

/// Execute `sv show`.
///
/// # Errors
///
/// Returns an error if the snapshot failed to load, the id is not in it, or
/// output rendering fails.
pub fn run_show(args: &ShowArgs, output: OutputMode, session: &Session) -> anyhow::Result<()> {
    let search = QuickSearch::new(args.search.clone().unwrap_or_default());
    let view = DetailView::build(
        &session.store,
        &args.id,
        &search,
        &session.quick_search,
    );

    let record = match view.detail {
        Detail::Found(record) => record,
        Detail::Loading => {
            render_error(
                output,
                &CliError::with_details(
                    "project data is still loading",
                    "retry once the data file has been written",
                    "data_loading",
                ),
            )?;
            anyhow::bail!("project data is still loading");
        }
        Detail::NotFound if session.load_error.is_some() => {
            if let Some(ref err) = session.load_error {
                render_error(output, &CliError::from(err))?;
            }
            anyhow::bail!(
                "project '{}' unavailable: project data failed to load",
                args.id
            );
        }
        Detail::NotFound => {
            let err = StandviewError::RecordNotFound {
                project_id: args.id.clone(),
            };
            render_error(output, &CliError::from(&err))?;
            return Err(err.into());
        }
    };

    let payload = ShowOutput {
        status_slug: Status::slug_for(&record.status),
        project: record,
        suggestions: view
            .suggestions
            .iter()
            .map(|r| Suggestion {
                id: &r.project_id,
                name: &r.project_name,
            })
            .collect(),
        load: LoadStatus::from(session.store.state()),
    };

    render_mode(
        output,
        &payload,
        |p, w| render_show_text(p, w),
        |p, w| render_show_human(p, w),
    )
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn render_show_human(show: &ShowOutput<'_>, w: &mut dyn Write) -> std::io::Result<()> {
    let p = show.project;
    pretty_section(w, &format!("{} {}", p.project_id, or_dash(&p.project_name)))?;
    pretty_kv(w, "status", or_dash(&p.status))?;
    pretty_kv(w, "start", or_dash(&p.start_date))?;
    pretty_kv(w, "end", or_dash(&p.end_date))?;

    writeln!(w)?;
    pretty_section(w, "Venue")?;
    pretty_kv(w, "venue", or_dash(&p.venue))?;
    pretty_kv(w, "city", or_dash(&p.venue_city))?;
    pretty_kv(w, "country", or_dash(&p.venue_country))?;
    pretty_kv(w, "hall", or_dash(&p.venue_hall_number))?;
    pretty_kv(w, "stand", or_dash(&p.venue_stand_number))?;
    let area = if p.total_sq_mtr.is_empty() {
        "-".to_string()
    } else {
        format!("{} m²", p.total_sq_mtr)
    };
    pretty_kv(w, "area", area)?;

    if !p.company_logo_url.is_empty() || !p.design_image_url.is_empty() {
        writeln!(w)?;
        pretty_section(w, "Assets")?;
        pretty_kv(w, "logo", or_dash(&p.company_logo_url))?;
        pretty_kv(w, "design", or_dash(&p.design_image_url))?;
    }

    if !show.suggestions.is_empty() {
        writeln!(w)?;
        pretty_section(w, "Suggestions")?;
        for s in &show.suggestions {
            writeln!(w, "{:<12} {}", s.id, s.name)?;
        }
    }
    Ok(())
}

fn render_show_text(show: &ShowOutput<'_>, w: &mut dyn Write) -> std::io::Result<()> {
    let p = show.project;
    let rows: [(&str, &str); 14] = [
        ("id", p.project_id.as_str()),
        ("name", p.project_name.as_str()),
        ("status", p.status.as_str()),
        ("status_slug", show.status_slug),
        ("start_date", p.start_date.as_str()),
        ("end_date", p.end_date.as_str()),
        ("venue", p.venue.as_str()),
        ("venue_city", p.venue_city.as_str()),
        ("venue_country", p.venue_country.as_str()),
        ("venue_hall_number", p.venue_hall_number.as_str()),
        ("venue_stand_number", p.venue_stand_number.as_str()),
        ("total_sq_mtr", p.total_sq_mtr.as_str()),
        ("company_logo_url", p.company_logo_url.as_str()),
        ("design_image_url", p.design_image_url.as_str()),
    ];
    for (key, value) in rows {
        writeln!(w, "{key}\t{value}")?;
    }
    for s in &show.suggestions {
        writeln!(w, "suggestion\t{}\t{}", s.id, s.name)?;
    }
    Ok(())
}
