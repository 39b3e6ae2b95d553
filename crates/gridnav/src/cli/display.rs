//! Common display utilities for CLI commands.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use gridnav::{NodeKey, NodeRole, Topology};

/// Write a list of nodes as bullets, truncated to `max_display` entries.
///
/// Each line shows the key and, when it differs, the display label. An empty
/// list prints `empty_message` instead.
pub fn write_nodes(
    out: &mut impl Write,
    topology: &Topology,
    keys: &[NodeKey],
    max_display: usize,
    empty_message: &str,
) -> io::Result<()> {
    if keys.is_empty() {
        writeln!(out, "    {}", empty_message.dimmed())?;
        return Ok(());
    }

    for key in keys.iter().take(max_display) {
        writeln!(out, "    {} {}", "•".dimmed(), describe(topology, key))?;
    }

    if keys.len() > max_display {
        writeln!(
            out,
            "    {} ... and {} more",
            "•".dimmed(),
            keys.len() - max_display
        )?;
    }

    Ok(())
}

/// `KEY (Label)`, or just `KEY` when the label adds nothing.
pub fn describe(topology: &Topology, key: &NodeKey) -> String {
    match topology.node(key.as_str()) {
        Ok(node) if node.label != key.as_str() => format!("{key} ({})", node.label),
        _ => key.to_string(),
    }
}

/// Role name padded to a fixed column, colored by role.
pub fn role_tag(role: NodeRole) -> ColoredString {
    let text = format!("{:<12}", role.to_string());
    match role {
        NodeRole::Source => text.green(),
        NodeRole::Intermediate => text.cyan(),
        NodeRole::Load => text.yellow(),
        NodeRole::Isolated => text.dimmed(),
    }
}
