//! `sv stats` — dashboard cards and status overview.

use std::io::Write;

use clap::Args;
use serde::Serialize;
use standview_core::view::Dashboard;

use super::{LoadStatus, Session};
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

const BAR_WIDTH: usize = 40;

/// Arguments for `sv stats`.
#[derive(Args, Debug, Default)]
pub struct StatsArgs {}

#[derive(Debug, Serialize)]
struct BucketRow {
    status: &'static str,
    slug: &'static str,
    count: usize,
    percent: f64,
}

/// Report payload for `sv stats`.
#[derive(Debug, Serialize)]
pub struct StatsOutput {
    total: usize,
    ongoing: usize,
    pending: usize,
    approved: usize,
    submitted: usize,
    confirmed: usize,
    unknown: usize,
    breakdown: Vec<BucketRow>,
    load: LoadStatus,
}

impl StatsOutput {
    fn from_dashboard(dash: &Dashboard, load: LoadStatus) -> Self {
        Self {
            total: dash.counts.total,
            ongoing: dash.ongoing,
            pending: dash.counts.pending,
            approved: dash.counts.approved,
            submitted: dash.counts.submitted,
            confirmed: dash.counts.confirmed,
            unknown: dash.unknown,
            breakdown: dash
                .breakdown
                .iter()
                .map(|row| BucketRow {
                    status: row.status.label(),
                    slug: row.status.slug(),
                    count: row.count,
                    percent: row.percent,
                })
                .collect(),
            load,
        }
    }
}

/// Execute `sv stats`.
pub fn run_stats(_args: &StatsArgs, output: OutputMode, session: &Session) -> anyhow::Result<()> {
    let dash = Dashboard::build(session.records());
    let payload = StatsOutput::from_dashboard(&dash, LoadStatus::from(session.store.state()));

    render_mode(
        output,
        &payload,
        |p, w| render_stats_text(p, w),
        |p, w| render_stats_human(p, w, &session.data_path.display().to_string()),
    )
}

fn bar(percent: f64) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn render_stats_human(stats: &StatsOutput, w: &mut dyn Write, source: &str) -> std::io::Result<()> {
    pretty_section(w, "Dashboard")?;
    pretty_kv(w, "total", stats.total.to_string())?;
    pretty_kv(w, "ongoing", stats.ongoing.to_string())?;
    pretty_kv(w, "submitted", stats.submitted.to_string())?;
    pretty_kv(w, "confirmed", stats.confirmed.to_string())?;
    if stats.unknown > 0 {
        pretty_kv(w, "other", stats.unknown.to_string())?;
    }

    writeln!(w)?;
    pretty_section(w, "Project status overview")?;
    for row in &stats.breakdown {
        writeln!(
            w,
            "{:<18} {} {:>3} ({:.0}%)",
            row.status,
            bar(row.percent),
            row.count,
            row.percent
        )?;
    }

    writeln!(w)?;
    writeln!(w, "source: {source} ({})", stats.load.state)?;
    Ok(())
}

fn render_stats_text(stats: &StatsOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "total\t{}", stats.total)?;
    writeln!(w, "ongoing\t{}", stats.ongoing)?;
    writeln!(w, "unknown\t{}", stats.unknown)?;
    for row in &stats.breakdown {
        writeln!(w, "{}\t{}\t{:.1}", row.slug, row.count, row.percent)?;
    }
    Ok(())
}
