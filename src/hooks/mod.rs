// ABOUTME: Post-processing hooks run on a freshly derived spec.
// ABOUTME: Environment restoration and scheduler constraint stripping.

use crate::spec::ContainerSpec;

/// Label under which a cluster scheduler backs up the pre-rewrite environment
/// as a JSON array of `KEY=value` entries.
pub const ENV_BACKUP_LABEL: &str = "com.cluster.env-backup";

/// Label carrying scheduler placement constraints.
pub const CONSTRAINT_LABEL: &str = "com.docker.swarm.constraints";

/// Prefix of constraint entries a scheduler injects into the environment.
pub const CONSTRAINT_ENV_PREFIX: &str = "constraint:";

/// Restores environment entries that were rewritten between the user's
/// request and the running container.
///
/// A cluster-wide substitution mechanism may have replaced placeholders in
/// the environment before launch; implementations recover the declared
/// values. Runs on the fully populated spec, mutating it in place.
pub trait EnvRestorer {
    fn restore(&self, spec: &mut ContainerSpec);
}

/// Leaves the environment exactly as inspected.
pub struct NoopRestorer;

impl EnvRestorer for NoopRestorer {
    fn restore(&self, _spec: &mut ContainerSpec) {}
}

/// Restores the environment from a JSON backup stored in a label.
///
/// When the label is present and decodes as a string array, it replaces the
/// inspected environment and the bookkeeping label is dropped from the spec.
/// A label that fails to decode is left alone and logged.
pub struct LabelEnvRestorer {
    label: String,
}

impl LabelEnvRestorer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Default for LabelEnvRestorer {
    fn default() -> Self {
        Self::new(ENV_BACKUP_LABEL)
    }
}

impl EnvRestorer for LabelEnvRestorer {
    fn restore(&self, spec: &mut ContainerSpec) {
        let Some(raw) = spec.labels.get(&self.label) else {
            return;
        };
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(environment) => {
                tracing::debug!(
                    "restored {} environment entries from label {}",
                    environment.len(),
                    self.label
                );
                spec.environment = environment;
                spec.labels.remove(&self.label);
            }
            Err(e) => {
                tracing::warn!("ignoring undecodable env backup in label {}: {e}", self.label);
            }
        }
    }
}

/// Strip scheduler-injected placement constraints from a derived spec.
///
/// Standalone-cluster schedulers pin a container by injecting `constraint:`
/// entries into its environment and a bookkeeping label; both are removed so
/// a replayed spec does not pin itself to the node the scheduler happened to
/// choose.
pub fn strip_constraints(spec: &mut ContainerSpec) {
    spec.labels.remove(CONSTRAINT_LABEL);
    spec.labels
        .retain(|key, _| !key.starts_with(CONSTRAINT_ENV_PREFIX));
    spec.environment
        .retain(|entry| !entry.starts_with(CONSTRAINT_ENV_PREFIX));
}
