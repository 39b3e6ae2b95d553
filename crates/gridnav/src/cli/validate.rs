//! `gridnav validate` command implementation.
//!
//! Reaching this command means the table already built; integrity errors
//! surface from `Navigator::open`. What remains is a summary of the network.

use std::io::{self, Write};

use colored::Colorize;
use gridnav::{Error, NodeRole, Topology};

use super::Navigator;
use super::display::role_tag;

/// Run the validate command.
pub fn run(nav: &Navigator) -> Result<(), Error> {
    write_summary(&mut io::stdout().lock(), &nav.topology)
}

fn write_summary(out: &mut impl Write, topology: &Topology) -> Result<(), Error> {
    let mut counts = [0usize; 4];
    for key in topology.all_node_keys() {
        counts[role_slot(topology.role(key.as_str())?)] += 1;
    }

    writeln!(
        out,
        "{} {} nodes, {} feeds, no cycles",
        "ok:".green().bold(),
        topology.len(),
        topology.edge_count()
    )?;

    for role in [
        NodeRole::Source,
        NodeRole::Intermediate,
        NodeRole::Load,
        NodeRole::Isolated,
    ] {
        writeln!(out, "  {} {}", role_tag(role), counts[role_slot(role)])?;
    }

    Ok(())
}

fn role_slot(role: NodeRole) -> usize {
    match role {
        NodeRole::Source => 0,
        NodeRole::Intermediate => 1,
        NodeRole::Load => 2,
        NodeRole::Isolated => 3,
    }
}
