// ABOUTME: Image identity resolution for derived specs.
// ABOUTME: Swaps a content-addressed reference for the recorded human-readable name.

use crate::model::ContainerDetails;

/// Resolve the image name to record in a derived spec.
///
/// By inspection time the engine has resolved the requested image to an
/// immutable digest; the name the user asked for survives only in the process
/// configuration. When the top-level reference is content-addressed and the
/// config records a name, the name wins; otherwise the reference is kept
/// as-is.
pub fn resolve_image_name(details: &ContainerDetails) -> Option<String> {
    let image = details.image.as_deref()?;
    if is_image_id(image)
        && let Some(name) = details
            .config
            .as_ref()
            .and_then(|c| c.image.as_deref())
            .filter(|n| !n.is_empty())
    {
        return Some(name.to_string());
    }
    Some(image.to_string())
}

/// Whether a reference is a content-addressed identifier rather than a
/// human-readable name: `sha256:` followed by hex, or a bare 64-char hex
/// string.
pub fn is_image_id(reference: &str) -> bool {
    match reference.strip_prefix("sha256:") {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_hexdigit()),
        None => reference.len() == 64 && reference.chars().all(|c| c.is_ascii_hexdigit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_prefixed_digest() {
        assert!(is_image_id(
            "sha256:4a39f3e112a8561e1c5b7cdb2c4b68b2d0601b6a2b2bbd12eddb1a25a4f4a2e0"
        ));
        assert!(is_image_id("sha256:abc123"));
    }

    #[test]
    fn recognizes_bare_hex_id() {
        assert!(is_image_id(&"a".repeat(64)));
    }

    #[test]
    fn rejects_names_and_tags() {
        assert!(!is_image_id("nginx"));
        assert!(!is_image_id("myorg/app:1.2"));
        assert!(!is_image_id("sha256:"));
        assert!(!is_image_id("sha256:nothex"));
        // 64 chars but not hex
        assert!(!is_image_id(&"z".repeat(64)));
    }
}
