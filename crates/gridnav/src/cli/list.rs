//! `gridnav list` command implementation.

use std::io::{self, Write};

use colored::Colorize;
use gridnav::{Error, Topology};

use super::Navigator;
use super::display::role_tag;

/// Run the list command.
pub fn run(nav: &Navigator) -> Result<(), Error> {
    write_list(&mut io::stdout().lock(), &nav.topology)?;
    Ok(())
}

fn write_list(out: &mut impl Write, topology: &Topology) -> Result<(), Error> {
    writeln!(
        out,
        "{} ({} nodes, {} feeds):",
        "Equipment".white().bold(),
        topology.len().to_string().green(),
        topology.edge_count().to_string().green()
    )?;

    let width = topology
        .all_node_keys()
        .map(|k| k.as_str().len())
        .max()
        .unwrap_or(0);

    for node in topology.nodes() {
        let role = topology.role(node.key.as_str())?;
        writeln!(
            out,
            "  {}  {}  {}",
            format!("{:<width$}", node.key.as_str()).cyan(),
            role_tag(role),
            node.label
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_node_in_table_order() {
        colored::control::set_override(false);
        let nav = Navigator::demo();
        let mut out = Vec::new();
        write_list(&mut out, &nav.topology).unwrap();
        let text = String::from_utf8(out).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Equipment (26 nodes, 25 feeds):"));
        assert_eq!(lines.count(), 26);

        let tob6 = text.find("TOB6").unwrap();
        let kav = text.find("KAV1001").unwrap();
        assert!(tob6 < kav);
    }
}
