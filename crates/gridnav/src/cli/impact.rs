//! `gridnav impact` command implementation.

use std::io::{self, Write};

use colored::Colorize;
use gridnav::{Error, ImpactReport, deenergize_impact};

use super::Navigator;
use super::display::{describe, write_nodes};

/// Run the impact command.
pub fn run(nav: &Navigator, target: &str) -> Result<(), Error> {
    let node = nav.topology.resolve(target)?;
    let report = deenergize_impact(&nav.topology, node.key.as_str())?;
    write_impact(&mut io::stdout().lock(), nav, &report)?;
    Ok(())
}

fn write_impact(out: &mut impl Write, nav: &Navigator, report: &ImpactReport) -> io::Result<()> {
    writeln!(
        out,
        "If {} is turned OFF:",
        describe(&nav.topology, &report.node).cyan().bold()
    )?;
    writeln!(out)?;

    if report.is_empty() {
        writeln!(out, "  {}", "Nothing else loses power.".green())?;
        return Ok(());
    }

    writeln!(
        out,
        "  {} ({} nodes):",
        "De-energized".white().bold(),
        report.affected_count().to_string().red()
    )?;
    write_nodes(
        out,
        &nav.topology,
        &report.affected,
        nav.config.max_display,
        "(none)",
    )?;

    writeln!(out)?;

    writeln!(
        out,
        "  {} ({} loads):",
        "End loads affected".white().bold(),
        report.loads.len().to_string().yellow()
    )?;
    write_nodes(
        out,
        &nav.topology,
        &report.loads,
        nav.config.max_display,
        "(none)",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(nav: &Navigator, key: &str) -> String {
        colored::control::set_override(false);
        let report = deenergize_impact(&nav.topology, key).unwrap();
        let mut out = Vec::new();
        write_impact(&mut out, nav, &report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn uv_panel_takes_out_its_switches() {
        let nav = Navigator::demo();
        let text = render(&nav, "UV1B");

        assert!(text.starts_with("If UV1B (UV Panel 01-B) is turned OFF:"));
        assert!(text.contains("De-energized (2 nodes):"));
        assert!(text.contains("End loads affected (2 loads):"));
        assert!(text.contains("• SE1"));
    }

    #[test]
    fn load_affects_nothing() {
        let nav = Navigator::demo();
        let text = render(&nav, "SW3");
        assert!(text.contains("Nothing else loses power."));
    }

    #[test]
    fn truncates_to_configured_limit() {
        let mut nav = Navigator::demo();
        nav.config.max_display = 3;
        let text = render(&nav, "KAV1001");
        assert!(text.contains("... and"));
    }
}
