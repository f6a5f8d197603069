// ABOUTME: Entry point for spec derivation - the reverse compiler core.
// ABOUTME: Maps an inspect report into a fresh ContainerSpec, then runs the post hooks.

mod endpoints;
pub mod image;
pub mod mounts;

use crate::hooks::{self, EnvRestorer, NoopRestorer};
use crate::model::ContainerDetails;
use crate::spec::ContainerSpec;
use std::collections::{BTreeSet, HashSet};
use thiserror::Error;

pub use image::is_image_id;

/// Error deriving a spec from an inspect report.
///
/// Absent optional sections degrade to empty spec fields; the only true
/// failure is a report missing a section the engine contract guarantees.
#[derive(Debug, Error)]
pub enum DeriveError {
    #[error("inspect report is missing the {0} section")]
    MissingSection(&'static str),
}

/// Derives launch specs from inspect reports.
///
/// The derivation itself is a pure function of its input; the configured
/// environment restorer is the one collaborator with external knowledge, and
/// it runs on the fully populated spec together with constraint stripping.
pub struct SpecFactory {
    restorer: Box<dyn EnvRestorer>,
}

impl SpecFactory {
    pub fn new(restorer: Box<dyn EnvRestorer>) -> Self {
        Self { restorer }
    }

    /// Derive a spec for the container described by `details`.
    ///
    /// Each call constructs a fresh spec; nothing is accumulated across
    /// calls.
    pub fn derive(&self, details: &ContainerDetails) -> Result<ContainerSpec, DeriveError> {
        let mut spec = convert(details)?;
        self.restorer.restore(&mut spec);
        hooks::strip_constraints(&mut spec);
        Ok(spec)
    }
}

impl Default for SpecFactory {
    fn default() -> Self {
        Self::new(Box::new(NoopRestorer))
    }
}

/// Derive a spec with no environment restoration configured.
pub fn derive_spec(details: &ContainerDetails) -> Result<ContainerSpec, DeriveError> {
    SpecFactory::default().derive(details)
}

/// The field mapping pass: copy-if-present for ~20 uncontested fields, with
/// the mount reconciler and image resolver invoked along the way.
fn convert(details: &ContainerDetails) -> Result<ContainerSpec, DeriveError> {
    let config = details
        .config
        .as_ref()
        .ok_or(DeriveError::MissingSection("Config"))?;
    let host = details
        .host_config
        .as_ref()
        .ok_or(DeriveError::MissingSection("HostConfig"))?;

    let mut spec = ContainerSpec {
        id: details.id.clone(),
        // The engine prefixes names with a slash; user intent has none.
        name: details
            .name
            .as_deref()
            .map(|n| n.trim_start_matches('/').to_string()),
        ..ContainerSpec::default()
    };

    // Resource limits carry "unset means absent" semantics: a zero from the
    // engine is a default, not a request, and must not be copied.
    spec.blkio_weight = host.blkio_weight.filter(|w| *w > 0);
    spec.cpu_shares = host.cpu_shares.filter(|v| *v > 0);
    spec.cpu_quota = host.cpu_quota.filter(|v| *v > 0);
    spec.memory_limit = host.memory.filter(|v| *v > 0);
    spec.cpuset_cpus = host.cpuset_cpus.clone().filter(|s| !s.is_empty());

    if let Some(dns) = &host.dns {
        spec.dns.extend(dns.iter().cloned());
    }
    if let Some(dns_search) = &host.dns_search {
        spec.dns_search.extend(dns_search.iter().cloned());
    }
    if let Some(env) = &config.env {
        spec.environment.extend(env.iter().cloned());
    }
    if let Some(cmd) = &config.cmd {
        spec.command.extend(cmd.iter().cloned());
    }
    if let Some(extra_hosts) = &host.extra_hosts {
        spec.extra_hosts.extend(extra_hosts.iter().cloned());
    }
    if let Some(security_opt) = &host.security_opt {
        spec.security_opt.extend(security_opt.iter().cloned());
    }

    spec.hostname = config.hostname.clone().filter(|h| !h.is_empty());
    if let Some(labels) = &config.labels {
        spec.labels
            .extend(labels.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    spec.links = endpoints::parse_links(host.links.as_deref());
    spec.ports = endpoints::parse_ports(host.port_bindings.as_ref());

    spec.network = host.network_mode.clone().filter(|n| !n.is_empty());
    spec.node = details.node.as_ref().and_then(|n| n.name.clone());

    if let Some(networks) = details
        .network_settings
        .as_ref()
        .and_then(|s| s.networks.as_ref())
    {
        // Sorted for deterministic output.
        let names: BTreeSet<&String> = networks.keys().collect();
        spec.networks.extend(names.into_iter().cloned());
    }

    spec.volume_driver = host.volume_driver.clone().filter(|d| !d.is_empty());
    if let Some(volumes_from) = &host.volumes_from {
        spec.volumes_from.extend(volumes_from.iter().cloned());
    }

    let ignored = match &host.binds {
        Some(binds) => {
            spec.volume_binds.extend(binds.iter().cloned());
            mounts::ignored_targets(binds)
        }
        None => HashSet::new(),
    };
    spec.mounts.extend(mounts::reconcile(
        host.mounts.as_deref(),
        details.mounts.as_deref(),
        &ignored,
    ));

    spec.image = image::resolve_image_name(details);
    spec.image_id = details.image.clone();

    Ok(spec)
}
