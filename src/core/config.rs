//! Configuration management

use crate::core::{Error, FallbackPolicy, OperationalCosts, PricingInputs, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Config {
    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("ledwall-quote").join("config.toml"))
    }

    /// Load configuration from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            let config = Self::default();
            config.save_to(&path)?;
            return Ok(config);
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to an explicit file, creating its directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        let p = &self.pricing;
        for (name, value) in [
            ("labor", p.labor),
            ("shipping", p.shipping),
            ("overhead", p.overhead),
            ("service_fee_pct", p.service_fee_pct),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!("pricing.{} must be non-negative, got {}", name, value)));
            }
        }
        if !(0.0..=100.0).contains(&p.margin_pct) {
            return Err(Error::Config(format!(
                "pricing.margin_pct must be between 0 and 100, got {}",
                p.margin_pct
            )));
        }
        if self.engine.max_modules == 0 {
            return Err(Error::Config("engine.max_modules must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// General application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Language: "auto", "en", "tr"
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String { "auto".to_string() }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// Pricing defaults used when the caller does not override them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Currency code (USD, EUR, TRY, etc.)
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Currency symbol
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Installation and labor
    #[serde(default = "default_labor")]
    pub labor: f64,
    /// Shipping and logistics
    #[serde(default = "default_shipping")]
    pub shipping: f64,
    /// Other fixed costs
    #[serde(default = "default_overhead")]
    pub overhead: f64,
    /// Target profit margin (0-100)
    #[serde(default = "default_margin")]
    pub margin_pct: f64,
    /// Service fee as a percentage of materials (0 = disabled)
    #[serde(default)]
    pub service_fee_pct: f64,
    /// Price an enclosure by area
    #[serde(default)]
    pub include_enclosure: bool,
}

fn default_currency() -> String { "USD".to_string() }
fn default_currency_symbol() -> String { "$".to_string() }
fn default_labor() -> f64 { 250.0 }
fn default_shipping() -> f64 { 100.0 }
fn default_overhead() -> f64 { 50.0 }
fn default_margin() -> f64 { 25.0 }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            currency_symbol: default_currency_symbol(),
            labor: default_labor(),
            shipping: default_shipping(),
            overhead: default_overhead(),
            margin_pct: default_margin(),
            service_fee_pct: 0.0,
            include_enclosure: false,
        }
    }
}

impl PricingConfig {
    /// Pricing inputs for a quote, before any per-request override
    pub fn to_inputs(&self) -> PricingInputs {
        PricingInputs {
            costs: OperationalCosts {
                labor: self.labor,
                shipping: self.shipping,
                overhead: self.overhead,
            },
            margin_pct: self.margin_pct,
            service_fee_pct: self.service_fee_pct,
            include_enclosure: self.include_enclosure,
        }
    }
}

/// Engine limits and policies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Largest wall (in modules) the engine will quote
    #[serde(default = "default_max_modules")]
    pub max_modules: u64,
    /// Behaviour when no processor tier is large enough: "largest" or "fail"
    #[serde(default)]
    pub processor_fallback: FallbackPolicy,
}

fn default_max_modules() -> u64 { 100_000 }

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_modules: default_max_modules(),
            processor_fallback: FallbackPolicy::default(),
        }
    }
}

/// Where the product catalog comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// External catalog file (.toml or .json); the built-in table is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}
