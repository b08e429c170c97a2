//! Configuration discovery and effective settings resolution.
//!
//! pystyle reads `pystyle.toml|yaml|yml` from the closest ancestor of the
//! checked path and merges it with CLI flags. Recognized options:
//! - `output`: `human` | `json` (default: `human`)
//! - `[lint] max_length`: maximum line length for S001 (default: 79)
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::lexical::DEFAULT_MAX_LENGTH;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Lint-related configuration section under `[lint]`.
pub struct LintCfg {
    pub max_length: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `pystyle.toml|yaml`.
pub struct PystyleConfig {
    pub output: Option<String>,
    pub lint: Option<LintCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by the check command.
pub struct Effective {
    pub output: String,
    pub max_length: usize,
}

/// Walk upward from `start` to find the configuration root.
///
/// Stops when a `pystyle.toml|yaml|yml` or a `.git` directory is found;
/// falls back to `start` itself.
pub fn detect_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("pystyle.toml").exists()
            || cur.join("pystyle.yaml").exists()
            || cur.join("pystyle.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `PystyleConfig` from `pystyle.toml` or `pystyle.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<PystyleConfig> {
    let toml_path = root.join("pystyle.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: PystyleConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["pystyle.yaml", "pystyle.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: PystyleConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// Discovery starts at `target` itself for a directory, or at its parent for
/// a file, so a config next to the checked sources wins.
pub fn resolve_effective(
    target: &Path,
    cli_output: Option<&str>,
    cli_max_length: Option<usize>,
) -> Effective {
    let start = if target.is_dir() {
        target.to_path_buf()
    } else {
        target.parent().map(Path::to_path_buf).unwrap_or_default()
    };
    let root = detect_root(&start);
    let cfg = load_config(&root).unwrap_or_default();

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    let max_length = cli_max_length
        .or_else(|| cfg.lint.as_ref().and_then(|l| l.max_length))
        .unwrap_or(DEFAULT_MAX_LENGTH);

    Effective { output, max_length }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let dir = tempdir().unwrap();
        let eff = resolve_effective(dir.path(), None, None);
        assert_eq!(eff.output, "human");
        assert_eq!(eff.max_length, DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("pystyle.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output = "json"
[lint]
max_length = 99
    "#
        )
        .unwrap();

        let eff = resolve_effective(root, None, None);
        assert_eq!(eff.output, "json");
        assert_eq!(eff.max_length, 99);
    }

    #[test]
    fn test_load_yaml_and_cli_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("pystyle.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output: json
lint:
  max_length: 120
            "#
        )
        .unwrap();

        // CLI flags win over the config file.
        let eff = resolve_effective(root, Some("human"), Some(60));
        assert_eq!(eff.output, "human");
        assert_eq!(eff.max_length, 60);
    }

    #[test]
    fn test_config_found_from_file_target() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("pystyle.toml"), "[lint]\nmax_length = 50\n").unwrap();
        let sub = root.join("pkg");
        fs::create_dir(&sub).unwrap();
        let file = sub.join("mod.py");
        fs::write(&file, "x = 1\n").unwrap();

        let eff = resolve_effective(&file, None, None);
        assert_eq!(eff.max_length, 50);
    }
}
