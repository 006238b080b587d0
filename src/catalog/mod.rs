//! Product catalog
//!
//! Typed LED module and auxiliary hardware tables. A catalog is validated
//! once when it is built or loaded and is then handed to the engine by
//! reference; nothing in the engine holds a global table.

mod builtin;

use crate::core::{check_non_negative, Environment, Error, ModuleSpec, ProcessorTier, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Power supply unit used to feed the modules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerSupplySpec {
    pub name: String,
    /// Output voltage of the supply
    #[serde(default = "default_voltage")]
    pub voltage: f64,
    /// Rated output current in amps
    pub amperage: f64,
    /// Fraction of rated output that may be loaded (0, 1]
    #[serde(default = "default_derating")]
    pub derating: f64,
    pub unit_price: f64,
}

fn default_voltage() -> f64 { 5.0 }
fn default_derating() -> f64 { 0.8 }

impl PowerSupplySpec {
    /// Usable output in watts for a given amperage
    pub fn usable_watts(&self, amperage: f64) -> f64 {
        self.voltage * amperage * self.derating
    }
}

/// Receiving card driving a block of pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiverCardSpec {
    pub name: String,
    /// Safe pixel load per card
    pub pixel_capacity: u64,
    pub unit_price: f64,
}

/// Magnets/brackets fixing modules to the frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MountingSpec {
    pub name: String,
    pub pieces_per_module: u32,
    pub unit_price: f64,
}

/// Cabinet/enclosure cost by area for one environment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnclosureRate {
    pub environment: Environment,
    pub name: String,
    pub price_per_m2: f64,
}

/// Priced auxiliary parts, keyed by role
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareCatalog {
    pub power_supply: PowerSupplySpec,
    pub receiver_card: ReceiverCardSpec,
    pub processors: Vec<ProcessorTier>,
    pub mounting: MountingSpec,
    #[serde(default)]
    pub enclosures: Vec<EnclosureRate>,
}

impl HardwareCatalog {
    pub fn validate(&self) -> Result<()> {
        let psu = &self.power_supply;
        if !(psu.voltage.is_finite() && psu.voltage > 0.0) {
            return Err(Error::InvalidCatalog(format!("PSU voltage must be positive, got {}", psu.voltage)));
        }
        if !(psu.amperage.is_finite() && psu.amperage > 0.0) {
            return Err(Error::InvalidCatalog(format!("PSU amperage must be positive, got {}", psu.amperage)));
        }
        if !(psu.derating > 0.0 && psu.derating <= 1.0) {
            return Err(Error::InvalidCatalog(format!(
                "PSU derating must be in (0, 1], got {}",
                psu.derating
            )));
        }
        check_non_negative("PSU price", psu.unit_price)?;

        if self.receiver_card.pixel_capacity == 0 {
            return Err(Error::InvalidCatalog("receiver card pixel capacity must be positive".to_string()));
        }
        check_non_negative("receiver card price", self.receiver_card.unit_price)?;

        if self.processors.is_empty() {
            return Err(Error::InvalidCatalog("at least one processor tier is required".to_string()));
        }
        for tier in &self.processors {
            if tier.max_pixels == 0 || tier.max_inputs == 0 {
                return Err(Error::InvalidCatalog(format!(
                    "processor {} must support at least one pixel and one input",
                    tier.name
                )));
            }
            check_non_negative(&format!("processor {} price", tier.name), tier.unit_price)?;
        }

        check_non_negative("mounting price", self.mounting.unit_price)?;

        let mut seen = HashSet::new();
        for rate in &self.enclosures {
            if !seen.insert(rate.environment) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate enclosure rate for {}",
                    rate.environment
                )));
            }
            check_non_negative(&format!("{} enclosure price", rate.environment), rate.price_per_m2)?;
        }

        Ok(())
    }

    /// Enclosure rate for an environment
    pub fn enclosure_for(&self, environment: Environment) -> Option<&EnclosureRate> {
        self.enclosures.iter().find(|r| r.environment == environment)
    }
}

/// Named LED modules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleCatalog {
    modules: Vec<ModuleSpec>,
}

impl ModuleCatalog {
    pub fn new(modules: Vec<ModuleSpec>) -> Result<Self> {
        let catalog = Self { modules };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for module in &self.modules {
            module.validate()?;
            if !names.insert(module.name.to_lowercase()) {
                return Err(Error::InvalidCatalog(format!("duplicate module '{}'", module.name)));
            }
        }
        Ok(())
    }

    /// Look up a module by name (case-insensitive)
    pub fn find(&self, name: &str) -> Result<&ModuleSpec> {
        let name = name.trim();
        self.modules
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::NoCatalogMatch(format!("module '{}' not found", name)))
    }

    /// Modules passing an optional environment/technology filter, in catalog order
    pub fn filter(&self, environment: Option<Environment>, technology: Option<&str>) -> Vec<&ModuleSpec> {
        self.modules
            .iter()
            .filter(|m| m.matches(environment, technology))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleSpec> {
        self.modules.iter()
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

/// Complete catalog: modules plus auxiliary hardware
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub modules: ModuleCatalog,
    pub hardware: HardwareCatalog,
}

impl Catalog {
    pub fn validate(&self) -> Result<()> {
        self.modules.validate()?;
        self.hardware.validate()
    }

    /// The stock product table shipped with the tool
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)
            .map_err(|e| Error::InvalidCatalog(format!("Failed to parse catalog: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(content)
            .map_err(|e| Error::InvalidCatalog(format!("Failed to parse catalog: {}", e)))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog file; `.json` is read as JSON, anything else as TOML
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |e| e.eq_ignore_ascii_case("json"));

        let catalog = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_toml_str(&content)?
        };

        log::info!(
            "Loaded catalog from {} ({} modules, {} processor tiers)",
            path.display(),
            catalog.modules.len(),
            catalog.hardware.processors.len()
        );
        Ok(catalog)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.modules.len(), 6);
        assert_eq!(catalog.hardware.receiver_card.pixel_capacity, 32_768);
    }

    #[test]
    fn test_find_module() {
        let catalog = Catalog::builtin();
        let module = catalog.modules.find("qiangli q1.8").unwrap();
        assert_eq!(module.res_w, 172);

        let missing = catalog.modules.find("Unknown P1");
        assert!(matches!(missing, Err(Error::NoCatalogMatch(_))));
    }

    #[test]
    fn test_filter_by_environment() {
        let catalog = Catalog::builtin();
        let outdoor = catalog.modules.filter(Some(Environment::Outdoor), None);
        assert_eq!(outdoor.len(), 3);
        assert!(outdoor.iter().all(|m| m.environment == Some(Environment::Outdoor)));
    }

    #[test]
    fn test_duplicate_module_rejected() {
        let catalog = Catalog::builtin();
        let first = catalog.modules.iter().next().unwrap().clone();
        let result = ModuleCatalog::new(vec![first.clone(), first]);
        assert!(matches!(result, Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_bad_derating_rejected() {
        let mut catalog = Catalog::builtin();
        catalog.hardware.power_supply.derating = 1.5;
        assert!(matches!(catalog.validate(), Err(Error::InvalidCatalog(_))));

        let mut catalog = Catalog::builtin();
        catalog.hardware.receiver_card.pixel_capacity = 0;
        assert!(matches!(catalog.validate(), Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_toml_round_trip_of_builtin() {
        let catalog = Catalog::builtin();
        let text = catalog.to_toml_string().unwrap();
        let parsed = Catalog::from_toml_str(&text).unwrap();
        assert_eq!(parsed, catalog);
    }

    #[test]
    fn test_parse_minimal_toml() {
        let text = r#"
            [[modules]]
            name = "P3.91 Rental"
            width_mm = 500
            height_mm = 500
            res_w = 128
            res_h = 128
            power_watts = 90
            unit_price = 210
            environment = "outdoor"

            [hardware.power_supply]
            name = "5V 60A"
            amperage = 60
            unit_price = 19

            [hardware.receiver_card]
            name = "A8s"
            pixel_capacity = 65536
            unit_price = 24

            [[hardware.processors]]
            name = "VX1000"
            max_pixels = 6500000
            max_inputs = 8
            unit_price = 2100

            [hardware.mounting]
            name = "Lock"
            pieces_per_module = 2
            unit_price = 1.2
        "#;

        let catalog = Catalog::from_toml_str(text).unwrap();
        assert_eq!(catalog.hardware.power_supply.voltage, 5.0);
        assert_eq!(catalog.hardware.power_supply.derating, 0.8);
        assert!(catalog.hardware.enclosures.is_empty());
        assert_eq!(catalog.modules.find("p3.91 rental").unwrap().width_mm, 500.0);
    }

    #[test]
    fn test_parse_json_rejects_invalid_module() {
        let mut catalog = Catalog::builtin();
        let text = serde_json::to_string(&catalog).unwrap();
        assert!(Catalog::from_json_str(&text).is_ok());

        catalog.hardware.processors.clear();
        let text = serde_json::to_string(&catalog).unwrap();
        assert!(matches!(Catalog::from_json_str(&text), Err(Error::InvalidCatalog(_))));
    }
}
