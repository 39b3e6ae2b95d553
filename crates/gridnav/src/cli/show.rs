//! `gridnav show` command implementation.

use std::io::{self, Write};

use colored::Colorize;
use gridnav::{Error, query};

use super::Navigator;
use super::display::{describe, write_nodes};

/// Run the show command.
pub fn run(nav: &Navigator, target: &str) -> Result<(), Error> {
    write_show(&mut io::stdout().lock(), nav, target)
}

fn write_show(out: &mut impl Write, nav: &Navigator, target: &str) -> Result<(), Error> {
    let topology = &nav.topology;
    let node = topology.resolve(target)?;
    let result = query(topology, node.key.as_str())?;
    let role = topology.role(node.key.as_str())?;

    writeln!(
        out,
        "{} {}",
        describe(topology, &node.key).cyan().bold(),
        format!("[{role}]").dimmed()
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "  {} ({} nodes):",
        "Fed from".white().bold(),
        result.ancestors.len().to_string().green()
    )?;
    write_nodes(
        out,
        topology,
        &result.ancestors,
        nav.config.max_display,
        "No upstream (source node)",
    )?;

    writeln!(out)?;

    writeln!(
        out,
        "  {} ({} nodes):",
        "Feeds".white().bold(),
        result.descendants.len().to_string().yellow()
    )?;
    write_nodes(
        out,
        topology,
        &result.descendants,
        nav.config.max_display,
        "No downstream (end load)",
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(target: &str) -> String {
        colored::control::set_override(false);
        let nav = Navigator::demo();
        let mut out = Vec::new();
        write_show(&mut out, &nav, target).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn source_node_has_no_upstream() {
        let text = render("TOB6");
        assert!(text.starts_with("TOB6 (TOB No. 6) [source]"));
        assert!(text.contains("Fed from (0 nodes):"));
        assert!(text.contains("No upstream (source node)"));
    }

    #[test]
    fn label_lookup_shows_both_directions() {
        let text = render("X1 Feeder");
        assert!(text.contains("Fed from (3 nodes):"));
        assert!(text.contains("KAV1001 (KAV 10-01)"));
        assert!(text.contains("Feeds ("));
        assert!(!text.contains("No downstream"));
    }

    #[test]
    fn end_load_has_no_downstream() {
        let text = render("SE1");
        assert!(text.contains("No downstream (end load)"));
    }

    #[test]
    fn unknown_node_is_an_error() {
        let nav = Navigator::demo();
        let err = write_show(&mut Vec::new(), &nav, "NOPE").unwrap_err();
        assert!(matches!(err, Error::UnknownNode(_)));
    }
}
