//! `gridnav layout` command implementation.
//!
//! Text output lists each layer top to bottom followed by the edges to draw;
//! JSON output is the projected graph itself, for external renderers.

use std::io::{self, Write};

use colored::Colorize;
use gridnav::{EdgePolicy, Error, Layer, ProjectedGraph, QueryOptions, query_with};

use super::Navigator;
use super::types::OutputFormatArg;

/// Run the layout command.
///
/// `edges` overrides the configured edge policy when given.
pub fn run(
    nav: &Navigator,
    target: &str,
    format: OutputFormatArg,
    edges: Option<EdgePolicy>,
) -> Result<(), Error> {
    let graph = project(nav, target, edges)?;
    let mut out = io::stdout().lock();
    match format {
        OutputFormatArg::Text => write_text(&mut out, &graph)?,
        OutputFormatArg::Json => {
            serde_json::to_writer_pretty(&mut out, &graph)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn project(
    nav: &Navigator,
    target: &str,
    edges: Option<EdgePolicy>,
) -> Result<ProjectedGraph, Error> {
    let node = nav.topology.resolve(target)?;
    let options = QueryOptions {
        edge_policy: edges.unwrap_or(nav.config.edge_policy),
    };
    Ok(query_with(&nav.topology, node.key.as_str(), &options)?.projected)
}

fn write_text(out: &mut impl Write, graph: &ProjectedGraph) -> io::Result<()> {
    for (layer, title) in [
        (Layer::Upstream, "Upstream"),
        (Layer::Focal, "Selected"),
        (Layer::Downstream, "Downstream"),
    ] {
        writeln!(
            out,
            "{} {}:",
            format!("[{}]", layer.index()).dimmed(),
            title.white().bold()
        )?;

        let mut any = false;
        for node in graph.layer(layer) {
            any = true;
            let hops = node
                .distance
                .map(|d| format!(" ({d} hops)"))
                .unwrap_or_default();
            writeln!(
                out,
                "  {:>3}. {} {}{}",
                node.rank,
                node.key.as_str().cyan(),
                node.label,
                hops.dimmed()
            )?;
        }
        if !any {
            writeln!(out, "  {}", "(none)".dimmed())?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{} ({}):", "Edges".white().bold(), graph.edges.len())?;
    for edge in &graph.edges {
        writeln!(out, "  {} -> {}", edge.from, edge.to)?;
    }

    Ok(())
}
