/// Resource name used when neither config nor environment provide one.
pub const FALLBACK_RESOURCE: &str = "nova_core";

/// Process-wide override of the resource name.
pub const RESOURCE_ENV: &str = "NOVA_NUI_RESOURCE";

/// Resolve the resource identifier embedded in callback URLs.
///
/// Resolution order: explicit config value, `NOVA_NUI_RESOURCE`, then
/// [`FALLBACK_RESOURCE`]. Blank values are skipped.
pub fn resolve_resource_name(configured: Option<&str>) -> String {
    pick_resource_name(configured, std::env::var(RESOURCE_ENV).ok().as_deref())
}

fn pick_resource_name(configured: Option<&str>, from_env: Option<&str>) -> String {
    configured
        .into_iter()
        .chain(from_env)
        .map(str::trim)
        .find(|name| !name.is_empty())
        .unwrap_or(FALLBACK_RESOURCE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_wins() {
        assert_eq!(pick_resource_name(Some("nova_admin"), Some("env_res")), "nova_admin");
    }

    #[test]
    fn env_used_when_config_missing_or_blank() {
        assert_eq!(pick_resource_name(None, Some("env_res")), "env_res");
        assert_eq!(pick_resource_name(Some("  "), Some("env_res")), "env_res");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(pick_resource_name(None, None), FALLBACK_RESOURCE);
        assert_eq!(pick_resource_name(Some(""), Some("")), "nova_core");
    }
}
