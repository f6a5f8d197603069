// ABOUTME: Mount reconciliation - merges the two engine mount sources into one list.
// ABOUTME: Detailed descriptors win over generic points; legacy bind targets are excluded.

use crate::model::{Mount, MountPoint};
use crate::spec::{MountEntry, MountKind};
use std::collections::HashSet;

/// Targets excluded from reconciliation because they are already represented
/// as legacy bind strings.
///
/// Takes the segment after the last colon of each `source:target[:options]`
/// string, so a bind carrying an options suffix excludes the options token
/// rather than its target. This mirrors how the legacy strings have always
/// been indexed; see DESIGN.md.
pub fn ignored_targets(binds: &[String]) -> HashSet<String> {
    binds.iter().map(|b| after_last(b, ':').to_string()).collect()
}

fn after_last(s: &str, sep: char) -> &str {
    match s.rfind(sep) {
        Some(idx) => &s[idx + sep.len_utf8()..],
        None => s,
    }
}

/// Merge the detailed descriptors and generic mount points into one
/// deduplicated list.
///
/// The engine reports every mount as a generic point but without full type
/// information, while the detailed host-config descriptors are complete but
/// sometimes empty, so both sources are consulted. A target converted from
/// the detailed source is never re-emitted from the generic one. Entries that
/// cannot be converted are dropped, not errored. No dedup is applied within
/// a single source.
pub fn reconcile(
    detailed: Option<&[Mount]>,
    points: Option<&[MountPoint]>,
    ignored: &HashSet<String>,
) -> Vec<MountEntry> {
    let mut converted: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    if let Some(mounts) = detailed {
        for mount in mounts {
            if mount.system {
                continue;
            }
            if let Some(target) = mount.target.as_deref()
                && ignored.contains(target)
            {
                continue;
            }
            if let Some(entry) = from_descriptor(mount) {
                converted.insert(entry.target.clone());
                out.push(entry);
            }
        }
    }

    if let Some(points) = points {
        for point in points {
            if point.system {
                continue;
            }
            let Some(destination) = point.destination.as_deref() else {
                continue;
            };
            if ignored.contains(destination) || converted.contains(destination) {
                continue;
            }
            // Generic points without a resolvable type carry too little
            // information to restate as a declaration.
            let Some(kind) = parse_kind(point.typ.as_deref()) else {
                continue;
            };
            if let Some(entry) = from_point(point, kind) {
                out.push(entry);
            }
        }
    }

    tracing::debug!(
        "reconciled {} mounts ({} ignored bind targets)",
        out.len(),
        ignored.len()
    );
    out
}

fn parse_kind(typ: Option<&str>) -> Option<MountKind> {
    typ?.parse().ok()
}

fn from_descriptor(mount: &Mount) -> Option<MountEntry> {
    let kind = parse_kind(mount.typ.as_deref())?;
    let target = mount.target.clone().filter(|t| !t.is_empty())?;
    let source = match kind {
        MountKind::Bind | MountKind::Volume => {
            Some(mount.source.clone().filter(|s| !s.is_empty())?)
        }
        MountKind::Tmpfs => None,
    };
    Some(MountEntry {
        kind,
        source,
        target,
        read_only: mount.read_only,
    })
}

fn from_point(point: &MountPoint, kind: MountKind) -> Option<MountEntry> {
    let target = point.destination.clone().filter(|t| !t.is_empty())?;
    let source = match kind {
        MountKind::Bind => Some(point.source.clone().filter(|s| !s.is_empty())?),
        // Volume points carry the volume name separately from the engine's
        // storage path; prefer the name.
        MountKind::Volume => Some(
            point
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .or_else(|| point.source.clone())
                .filter(|s| !s.is_empty())?,
        ),
        MountKind::Tmpfs => None,
    };
    Some(MountEntry {
        kind,
        source,
        target,
        read_only: !point.rw,
    })
}
