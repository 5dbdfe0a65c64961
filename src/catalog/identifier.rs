//! Registry identifier derivation
//!
//! Identifiers are a pure function of the resource coordinates: the same
//! `(namespace, kind, name)` triple always yields the same identifier, across
//! runs and processes. That purity is what lets re-publication target the
//! same registry entry instead of creating duplicates.

use crate::model::ResourceKind;

/// Maximum identifier length accepted by the registry
const MAX_LEN: usize = 128;

/// Prefix applied when the derived name would not start with `[a-z_]`
const PREFIX: &str = "k8s_";

/// Derive a registry-legal identifier from resource coordinates.
///
/// Concatenates `namespace_kind_name`, lower-cases it, maps every character
/// outside `[a-z0-9_$]` to `_`, prefixes `k8s_` when the result does not
/// start with a letter or underscore, and truncates to 128 characters.
///
/// Truncation can in pathological cases collide two distinct long names;
/// accepted limitation, since a disambiguating suffix would break the purity
/// idempotent upsert relies on.
pub fn generate(name: &str, namespace: &str, kind: ResourceKind) -> String {
    let raw = format!("{}_{}_{}", namespace, kind, name).to_lowercase();

    let mut identifier: String = raw
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' | '$' => c,
            _ => '_',
        })
        .collect();

    if !identifier
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
    {
        identifier = format!("{}{}", PREFIX, identifier);
    }

    // Charset mapping leaves only ASCII, so byte truncation is char-safe
    identifier.truncate(MAX_LEN);
    identifier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_legal(id: &str) -> bool {
        let mut chars = id.chars();
        let first_ok = chars
            .next()
            .is_some_and(|c| c.is_ascii_lowercase() || c == '_');
        first_ok
            && id
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '$')
    }

    #[test]
    fn test_basic_derivation() {
        assert_eq!(
            generate("web-server", "shop", ResourceKind::Deployment),
            "shop_deployment_web_server"
        );
        assert_eq!(
            generate("orders", "shop", ResourceKind::Service),
            "shop_service_orders"
        );
    }

    #[test]
    fn test_deterministic_and_pure() {
        let a = generate("api", "prod", ResourceKind::Deployment);
        let b = generate("api", "prod", ResourceKind::Deployment);
        assert_eq!(a, b);
        // Distinct coordinates yield distinct identifiers
        assert_ne!(a, generate("api", "staging", ResourceKind::Deployment));
        assert_ne!(a, generate("api", "prod", ResourceKind::Service));
    }

    #[test]
    fn test_illegal_characters_replaced() {
        let id = generate("my.app/v2", "team-a", ResourceKind::Service);
        assert_eq!(id, "team_a_service_my_app_v2");
        assert!(is_legal(&id));
    }

    #[test]
    fn test_prefix_when_leading_digit() {
        let id = generate("app", "9lives", ResourceKind::Deployment);
        assert!(id.starts_with("k8s_9lives"));
        assert!(is_legal(&id));
    }

    #[test]
    fn test_truncation_to_128() {
        let long = "x".repeat(300);
        let id = generate(&long, "ns", ResourceKind::Deployment);
        assert_eq!(id.len(), 128);
        assert!(is_legal(&id));
    }

    #[test]
    fn test_charset_legality_for_arbitrary_input() {
        for (name, ns) in [
            ("UPPER", "MiXeD"),
            ("with space", "tab\there"),
            ("émoji-🦀", "ünïcode"),
            ("$dollar", "_under"),
            ("", ""),
        ] {
            let id = generate(name, ns, ResourceKind::Pod);
            assert!(is_legal(&id), "illegal identifier {:?} from ({:?}, {:?})", id, name, ns);
            assert!(id.len() <= 128);
        }
    }
}
