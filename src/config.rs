use std::path::Path;

use anyhow::{Context, Result};

use crate::models::Config;

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(config)
}

/// The `--base-url` flag wins; otherwise the config file must name the API.
pub fn resolve_base_url(flag: Option<&str>, config_path: &Path) -> Result<String> {
    let url = match flag {
        Some(url) => url.to_string(),
        None => load_config(config_path)?.api.base_url,
    };
    Ok(url.trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_overrides_config_and_drops_trailing_slash() {
        let url = resolve_base_url(Some("http://localhost:8000/"), Path::new("missing.toml"))
            .unwrap();
        assert_eq!(url, "http://localhost:8000");
    }

    #[test]
    fn missing_config_without_flag_is_an_error() {
        assert!(resolve_base_url(None, Path::new("does-not-exist.toml")).is_err());
    }
}
