//! Bundled demonstration network.
//!
//! Two transformer outgoing breakers (TOB) feed one HV switchboard, which
//! splits into two feeders, then down through distribution boards and UV
//! panels to individual switches and loads. Used when no network file is
//! configured, and handy in tests.

use crate::table::{EquipmentTable, NodeSpec};
use crate::types::NodeKey;

const NODES: &[(&str, &str)] = &[
    ("TOB6", "TOB No. 6"),
    ("TOB9", "TOB No. 9"),
    ("KAV1001", "KAV 10-01"),
    ("X1", "X1 Feeder"),
    ("X2", "X2 Feeder"),
    ("KV4501", "KV 45-01"),
    ("KV4502", "KV 45-02"),
    ("LVP02", "LV Panel-02"),
    ("LVP03", "LV Panel-03"),
    ("QLEROOM", "QLE Room"),
    ("LVDB06", "LV DB 06"),
    ("UV1A", "UV Panel 01-A"),
    ("UV0", "UV Panel 0"),
    ("UV1B", "UV Panel 01-B"),
    ("S1", "S1"),
    ("S2", "S2"),
    ("S3", "S3"),
    ("S4", "S4"),
    ("S5", "S5"),
    ("S6", "S6"),
    ("SW1", "SW1"),
    ("SW2", "SW2"),
    ("SW3", "SW3"),
    ("SW4", "SW4"),
    ("SE1", "SE1"),
    ("SE2", "SE2"),
];

const EDGES: &[(&str, &str)] = &[
    ("TOB6", "KAV1001"),
    ("TOB9", "KAV1001"),
    ("KAV1001", "X1"),
    ("KAV1001", "X2"),
    ("X1", "KV4501"),
    ("X2", "KV4502"),
    ("KV4501", "LVP02"),
    ("KV4501", "LVP03"),
    ("KV4501", "QLEROOM"),
    ("KV4501", "LVDB06"),
    ("LVP02", "UV1A"),
    ("LVP03", "UV0"),
    ("QLEROOM", "UV1B"),
    ("UV1A", "S1"),
    ("UV1A", "S2"),
    ("UV1A", "S3"),
    ("UV1A", "S4"),
    ("UV1A", "S5"),
    ("UV1A", "S6"),
    ("UV0", "SW1"),
    ("UV0", "SW2"),
    ("UV0", "SW3"),
    ("UV0", "SW4"),
    ("UV1B", "SE1"),
    ("UV1B", "SE2"),
];

/// The demonstration network as an equipment table.
#[must_use]
pub fn demo_table() -> EquipmentTable {
    EquipmentTable::new(
        NODES
            .iter()
            .map(|&(key, label)| NodeSpec {
                key: NodeKey::from(key),
                label: Some(label.to_string()),
            })
            .collect(),
        EDGES
            .iter()
            .map(|&(from, to)| (NodeKey::from(from), NodeKey::from(to)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeRole;

    #[test]
    fn demo_table_is_a_valid_topology() {
        let topo = demo_table().into_topology().unwrap();
        assert_eq!(topo.len(), 26);
        assert_eq!(topo.edge_count(), 25);
    }

    #[test]
    fn demo_roles() {
        let topo = demo_table().into_topology().unwrap();
        assert_eq!(topo.role("TOB6").unwrap(), NodeRole::Source);
        assert_eq!(topo.role("KV4502").unwrap(), NodeRole::Load);
        assert_eq!(topo.role("LVDB06").unwrap(), NodeRole::Load);
        assert_eq!(topo.role("UV1A").unwrap(), NodeRole::Intermediate);
    }
}
