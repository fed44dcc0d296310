//! `Nodes` section.
//!
//! ```text
//! Nodes {
//!   Master: ECU, 5 ms, 0.1 ms;
//!   Slaves: Door1, Door2;
//! }
//! ```

use super::{number::parse_ms, split};
use crate::{Error, Result, types::NodeTable};

pub(crate) const SECTION: &str = "Nodes";

/// Fields of the `marker: ...;` statement with all whitespace removed.
fn fields<'a>(statements: &'a [String], marker: &str) -> Result<Vec<&'a str>> {
    statements
        .iter()
        .find_map(|s| s.strip_prefix(marker)?.strip_prefix(':'))
        .map(|rest| rest.split(',').collect())
        .ok_or_else(|| Error::MalformedSection {
            section: SECTION.to_string(),
            reason: format!("missing {marker:?} statement"),
        })
}

/// Build the node table from the body of the `Nodes` section.
///
/// # Errors
/// [`Error::MalformedSection`] when the `Master:` or `Slaves:` statement is
/// missing or the master name is empty.
pub(crate) fn parse_nodes(body: &str) -> Result<NodeTable> {
    let statements = split::compact_statements(body);

    let master_fields = fields(&statements, "Master")?;
    let Some(master) = master_fields.first().filter(|m| !m.is_empty()) else {
        return Err(Error::MalformedSection {
            section: SECTION.to_string(),
            reason: "empty master node name".to_string(),
        });
    };
    let time_base_ms = master_fields.get(1).and_then(|f| parse_ms(f));
    let jitter_ms = master_fields.get(2).and_then(|f| parse_ms(f));

    let slaves = fields(&statements, "Slaves")?
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    Ok(NodeTable {
        master: master.to_string(),
        slaves,
        time_base_ms,
        jitter_ms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nodes() {
        let body = "\n  Master: ECU, 5 ms, 0.1 ms;\n  Slaves: Door1, Door2;\n";
        let nodes = parse_nodes(body).unwrap();
        assert_eq!(nodes.master, "ECU");
        assert_eq!(nodes.slaves, vec!["Door1", "Door2"]);
        assert_eq!(nodes.time_base_ms, Some(5.0));
        assert_eq!(nodes.jitter_ms, Some(0.1));
    }

    #[test]
    fn test_parse_nodes_without_timing() {
        let nodes = parse_nodes("Master:ECU;Slaves:A,B ,C;").unwrap();
        assert_eq!(nodes.master, "ECU");
        assert_eq!(nodes.slaves, vec!["A", "B", "C"]);
        assert_eq!(nodes.time_base_ms, None);
    }

    #[test]
    fn test_missing_slaves() {
        let err = parse_nodes("Master: ECU, 5 ms, 0.1 ms;").unwrap_err();
        assert!(matches!(err, Error::MalformedSection { section, .. } if section == "Nodes"));
    }

    #[test]
    fn test_missing_master() {
        assert!(parse_nodes("Slaves: A;").is_err());
        assert!(parse_nodes("Master: ; Slaves: A;").is_err());
    }

    #[test]
    fn test_statement_order_and_spacing() {
        let body = "Slaves : Door 1, Door2 ;\n Master :\n ECU , 10ms , 0.5 ms ;";
        let nodes = parse_nodes(body).unwrap();
        assert_eq!(nodes.master, "ECU");
        assert_eq!(nodes.slaves, vec!["Door1", "Door2"]);
        assert_eq!(nodes.time_base_ms, Some(10.0));
        assert_eq!(nodes.jitter_ms, Some(0.5));
    }
}
