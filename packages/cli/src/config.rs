use blockcraft_compiler_css::CompileOptions as StylesheetOptions;
use blockcraft_model::Device;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "blockcraft.config.json";

/// Blockcraft configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding saved projects
    #[serde(default = "default_store_dir")]
    pub store_dir: String,

    /// Where `generate` writes files; stdout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,

    #[serde(default)]
    pub breakpoints: Breakpoints,
}

/// `max-width` of the device media queries, in px
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    #[serde(default = "default_tablet")]
    pub tablet: u32,
    #[serde(default = "default_mobile")]
    pub mobile: u32,
}

fn default_store_dir() -> String {
    ".blockcraft".to_string()
}

fn default_tablet() -> u32 {
    Device::Tablet.breakpoint()
}

fn default_mobile() -> u32 {
    Device::Mobile.breakpoint()
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            tablet: default_tablet(),
            mobile: default_mobile(),
        }
    }
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    pub fn store_path(&self, cwd: &str) -> PathBuf {
        PathBuf::from(cwd).join(&self.store_dir)
    }

    pub fn out_path(&self, cwd: &str) -> Option<PathBuf> {
        self.out_dir.as_ref().map(|dir| PathBuf::from(cwd).join(dir))
    }

    pub fn stylesheet_options(&self) -> StylesheetOptions {
        StylesheetOptions {
            tablet_breakpoint: self.breakpoints.tablet,
            mobile_breakpoint: self.breakpoints.mobile,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: default_store_dir(),
            out_dir: None,
            breakpoints: Breakpoints::default(),
        }
    }
}
