//! `gridnav rank` command implementation.

use std::io::{self, Write};

use colored::Colorize;
use gridnav::{Error, ImpactSummary, rank_by_impact};

use super::Navigator;
use super::display::describe;

/// Run the rank command.
pub fn run(nav: &Navigator, limit: usize) -> Result<(), Error> {
    if limit == 0 {
        return Err(Error::Config("--limit must be at least 1".to_string()));
    }

    let ranked = rank_by_impact(&nav.topology);
    write_ranking(&mut io::stdout().lock(), nav, &ranked, limit)?;
    Ok(())
}

fn write_ranking(
    out: &mut impl Write,
    nav: &Navigator,
    ranked: &[ImpactSummary],
    limit: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{} (top {} of {}):",
        "Most critical equipment".white().bold(),
        limit.min(ranked.len()),
        ranked.len()
    )?;

    for (position, summary) in ranked.iter().take(limit).enumerate() {
        let count = summary.affected_count.to_string();
        let count = if summary.affected_count == 0 {
            count.dimmed()
        } else {
            count.red()
        };
        writeln!(
            out,
            "  {:>3}. {} - {} nodes, {} loads",
            position + 1,
            describe(&nav.topology, &summary.node).cyan(),
            count,
            summary.load_count
        )?;
    }

    Ok(())
}
