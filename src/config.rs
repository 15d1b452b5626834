use anyhow::{Context, Result};
use modlayout_assets::{catalog_from_file, AssetCatalog, XL_TOWER, XXL_TOWER};
use modlayout_core::{
    AssetKey, Axis, Direction, LayoutMode, LayoutParams, DEFAULT_APPEND_SPACING,
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::warn;

pub const DEFAULT_LAYOUT_PATH: &str = "config/layout.toml";

/// Which placement strategy a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    #[default]
    Packed,
    Append,
}

impl ModeKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "packed" | "pack" => Some(ModeKind::Packed),
            "append" => Some(ModeKind::Append),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub mode: ModeKind,
    pub axis: Axis,
    /// Signed distance between neighbouring faces (packed mode).
    pub gap: f64,
    pub face_camera: bool,
    pub direction: Direction,
    /// Distance between consecutive module origins (append mode).
    pub spacing: f64,
    /// Asset manifest; the built-in towers are used when absent.
    pub manifest: Option<PathBuf>,
    /// Asset keys laid out in order.
    pub modules: Vec<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let params = LayoutParams::default();
        Self {
            mode: ModeKind::Packed,
            axis: params.axis,
            gap: params.gap,
            face_camera: params.face_camera,
            direction: params.direction,
            spacing: DEFAULT_APPEND_SPACING,
            manifest: None,
            modules: vec![XL_TOWER.to_string(), XXL_TOWER.to_string()],
        }
    }
}

impl LayoutConfig {
    /// Load layout configuration from the default path.
    pub fn load() -> Self {
        Self::load_from_path(Path::new(DEFAULT_LAYOUT_PATH))
    }

    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<LayoutConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    LayoutConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_LAYOUT_PATH)
                    || err.kind() != std::io::ErrorKind::NotFound
                {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else {
                    warn!(
                        "Layout config not found at {}. Using defaults",
                        path.display()
                    );
                }
                LayoutConfig::default()
            }
        }
    }

    /// Save layout configuration to an explicit path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, toml)?;
        Ok(())
    }

    /// Layout mode described by this configuration.
    pub fn layout_mode(&self) -> LayoutMode {
        match self.mode {
            ModeKind::Packed => LayoutMode::Packed(LayoutParams {
                axis: self.axis,
                gap: self.gap,
                face_camera: self.face_camera,
                direction: self.direction,
            }),
            ModeKind::Append => LayoutMode::Append {
                axis: self.axis,
                spacing: self.spacing,
                direction: self.direction,
                face_camera: self.face_camera,
            },
        }
    }

    /// Parsed module keys, in layout order.
    pub fn module_keys(&self) -> Result<Vec<AssetKey>> {
        self.modules
            .iter()
            .map(|raw| AssetKey::parse(raw).with_context(|| format!("module key {raw:?}")))
            .collect()
    }

    /// Catalog named by `manifest`, or the built-in towers.
    pub fn load_catalog(&self) -> Result<AssetCatalog> {
        match &self.manifest {
            Some(path) => catalog_from_file(path)
                .with_context(|| format!("loading asset manifest {}", path.display())),
            None => AssetCatalog::builtin().context("building built-in assets"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("modlayout_{name}_{timestamp}.toml"))
    }

    #[test]
    fn defaults_match_the_packed_pair() {
        let cfg = LayoutConfig::default();
        assert_eq!(cfg.layout_mode(), LayoutMode::Packed(LayoutParams::default()));
        assert_eq!(cfg.modules, vec![XL_TOWER, XXL_TOWER]);
        assert_eq!(cfg.module_keys().unwrap().len(), 2);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let cfg: LayoutConfig = toml::from_str(
            r#"
mode = "append"
axis = "x"
spacing = 2.5
"#,
        )
        .unwrap();
        assert_eq!(
            cfg.layout_mode(),
            LayoutMode::Append {
                axis: Axis::X,
                spacing: 2.5,
                direction: Direction::Increasing,
                face_camera: true,
            }
        );
        assert!(cfg.manifest.is_none());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let path = temp_path("malformed");
        fs::write(&path, "gap = \"wide\"").unwrap();
        assert_eq!(LayoutConfig::load_from_path(&path), LayoutConfig::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = temp_path("missing");
        assert_eq!(LayoutConfig::load_from_path(&path), LayoutConfig::default());
    }

    #[test]
    fn saved_config_loads_back() {
        let path = temp_path("saved");
        let cfg = LayoutConfig {
            axis: Axis::X,
            gap: -0.01,
            face_camera: false,
            direction: Direction::Decreasing,
            ..LayoutConfig::default()
        };
        cfg.save_to_path(&path).unwrap();
        assert_eq!(LayoutConfig::load_from_path(&path), cfg);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn bad_module_key_is_reported() {
        let cfg = LayoutConfig {
            modules: vec!["  ".to_string()],
            ..LayoutConfig::default()
        };
        assert!(cfg.module_keys().is_err());
    }

    #[test]
    fn builtin_catalog_is_used_without_manifest() {
        let catalog = LayoutConfig::default().load_catalog().unwrap();
        for key in LayoutConfig::default().module_keys().unwrap() {
            assert!(catalog.get(&key).is_some());
        }
    }
}
