// ABOUTME: Link and port normalization for derived specs.
// ABOUTME: Flattens structured link/port graphs into string-keyed maps, last-write-wins.

use crate::model::PortBinding;
use std::collections::{BTreeMap, HashMap};

/// Flatten wire-format link strings into an alias-to-target map.
///
/// The engine reports links as `/target_name:/this_container/alias`; the last
/// path segment of each side carries the identity. Malformed strings are
/// dropped. Duplicate aliases collapse to the last entry seen, in input
/// order.
pub fn parse_links(links: Option<&[String]>) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    let Some(links) = links else {
        return map;
    };
    for raw in links {
        match parse_link(raw) {
            Some((alias, name)) => {
                map.insert(alias, name);
            }
            None => tracing::warn!("skipping malformed link entry: {raw}"),
        }
    }
    map
}

fn parse_link(raw: &str) -> Option<(String, String)> {
    let (name_part, alias_part) = raw.split_once(':')?;
    let name = last_segment(name_part);
    let alias = last_segment(alias_part);
    if name.is_empty() || alias.is_empty() {
        return None;
    }
    Some((alias.to_string(), name.to_string()))
}

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Flatten the port-binding table into a container-port-to-host-spec map.
///
/// The table supports several host bindings per exposed port; the derived
/// spec does not, so when an exposed port carries more than one binding only
/// the last one processed survives. This loss is deliberate. Keys like
/// `"8080/tcp"` are reduced to the decimal port; unparseable keys are
/// dropped.
pub fn parse_ports(
    bindings: Option<&HashMap<String, Option<Vec<PortBinding>>>>,
) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    let Some(bindings) = bindings else {
        return map;
    };
    // Sorted key order: a port exposed under both protocols collapses to the
    // same output key, and which one wins must not depend on hash order.
    let mut exposed_ports: Vec<&String> = bindings.keys().collect();
    exposed_ports.sort();
    for exposed in exposed_ports {
        let port_part = exposed.split('/').next().unwrap_or(exposed);
        let Ok(port) = port_part.parse::<u16>() else {
            tracing::warn!("skipping unparseable exposed port: {exposed}");
            continue;
        };
        let Some(host_bindings) = &bindings[exposed] else {
            continue;
        };
        for binding in host_bindings {
            map.insert(port.to_string(), binding.host_port_spec());
        }
    }
    map
}
