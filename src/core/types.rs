//! Common types used across the quote engine

use crate::core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Installation environment of a module or enclosure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Indoor,
    Outdoor,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Indoor => "indoor",
            Environment::Outdoor => "outdoor",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indoor" | "in" => Ok(Environment::Indoor),
            "outdoor" | "out" => Ok(Environment::Outdoor),
            other => Err(format!("unknown environment '{}' (expected indoor or outdoor)", other)),
        }
    }
}

/// Technical descriptor of one LED tile/cabinet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Catalog key, e.g. "Qiangli Q2.5"
    pub name: String,
    /// Physical width in millimetres
    pub width_mm: f64,
    /// Physical height in millimetres
    pub height_mm: f64,
    /// Native horizontal pixel count
    pub res_w: u32,
    /// Native vertical pixel count
    pub res_h: u32,
    /// Rated power draw in watts
    pub power_watts: f64,
    /// Purchase price per module
    pub unit_price: f64,
    #[serde(default)]
    pub brightness_nits: Option<u32>,
    #[serde(default)]
    pub environment: Option<Environment>,
    /// Technology tag such as "SMD" or "COB"
    #[serde(default)]
    pub technology: Option<String>,
}

impl ModuleSpec {
    /// Check physical and electrical fields before the spec reaches the engine
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::InvalidCatalog("module name must not be empty".to_string()));
        }
        check_dimension(&format!("{} width", self.name), self.width_mm)?;
        check_dimension(&format!("{} height", self.name), self.height_mm)?;
        if self.res_w == 0 || self.res_h == 0 {
            return Err(Error::InvalidDimension(format!(
                "{} resolution must be positive, got {}x{}",
                self.name, self.res_w, self.res_h
            )));
        }
        check_non_negative(&format!("{} power", self.name), self.power_watts)?;
        check_non_negative(&format!("{} price", self.name), self.unit_price)?;
        Ok(())
    }

    /// Whether this module passes an optional environment/technology filter
    pub fn matches(&self, environment: Option<Environment>, technology: Option<&str>) -> bool {
        let env_ok = match environment {
            Some(env) => self.environment == Some(env),
            None => true,
        };
        let tech_ok = match technology {
            Some(tag) => self
                .technology
                .as_deref()
                .map_or(false, |t| t.eq_ignore_ascii_case(tag)),
            None => true,
        };
        env_ok && tech_ok
    }
}

/// Reject zero, negative and non-finite lengths
pub(crate) fn check_dimension(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidDimension(format!("{} must be positive, got {}", what, value)))
    }
}

pub(crate) fn check_non_negative(what: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidCatalog(format!("{} must be non-negative, got {}", what, value)))
    }
}

/// The customer's target screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenRequest {
    /// Name of the module to build the wall from
    pub module: String,
    pub target_width_mm: f64,
    pub target_height_mm: f64,
    /// Narrows the candidate modules; a module outside the filter is not quoted
    #[serde(default)]
    pub environment: Option<Environment>,
    #[serde(default)]
    pub technology: Option<String>,
    /// Number of simultaneous video inputs the processor must accept
    #[serde(default = "default_input_sources")]
    pub input_sources: u32,
    /// Overrides the catalog PSU amperage (e.g. 60 A instead of 40 A)
    #[serde(default)]
    pub psu_amperage: Option<f64>,
}

fn default_input_sources() -> u32 { 1 }

impl ScreenRequest {
    pub fn new(module: &str, target_width_mm: f64, target_height_mm: f64) -> Self {
        Self {
            module: module.to_string(),
            target_width_mm,
            target_height_mm,
            environment: None,
            technology: None,
            input_sources: default_input_sources(),
            psu_amperage: None,
        }
    }

    pub fn with_inputs(mut self, input_sources: u32) -> Self {
        self.input_sources = input_sources;
        self
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn with_technology(mut self, technology: &str) -> Self {
        self.technology = Some(technology.to_string());
        self
    }

    pub fn with_psu_amperage(mut self, amperage: f64) -> Self {
        self.psu_amperage = Some(amperage);
        self
    }
}

/// Fixed operational costs added on top of materials
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationalCosts {
    pub labor: f64,
    pub shipping: f64,
    pub overhead: f64,
}

impl OperationalCosts {
    pub fn as_array(&self) -> [f64; 3] {
        [self.labor, self.shipping, self.overhead]
    }

    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

impl Default for OperationalCosts {
    fn default() -> Self {
        Self {
            labor: 250.0,
            shipping: 100.0,
            overhead: 50.0,
        }
    }
}

/// Pricing inputs for one quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingInputs {
    pub costs: OperationalCosts,
    /// Markup applied to the total expense, in percent
    pub margin_pct: f64,
    /// Service fee as a percentage of the material lines, 0 disables it
    pub service_fee_pct: f64,
    /// Add an enclosure line priced by area for the module's environment
    pub include_enclosure: bool,
}

impl Default for PricingInputs {
    fn default() -> Self {
        Self {
            costs: OperationalCosts::default(),
            margin_pct: 25.0,
            service_fee_pct: 0.0,
            include_enclosure: false,
        }
    }
}

/// What to do when no processor tier can drive the wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Quote the highest-capacity tier and attach a warning
    #[default]
    Largest,
    /// Refuse to quote
    Fail,
}

/// Columns x rows of modules covering the target area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: u32,
    pub rows: u32,
}

impl Grid {
    pub fn total_modules(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }
}

/// Effective pixel resolution of the assembled wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u64,
    pub height: u64,
}

impl Resolution {
    /// Total pixel count, `None` if it does not fit in 64 bits
    pub fn total_pixels(&self) -> Option<u64> {
        self.width.checked_mul(self.height)
    }
}

/// Auxiliary hardware quantities for a wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HardwareCounts {
    pub power_supplies: u64,
    pub receiver_cards: u64,
    pub mounting_pieces: u64,
}

/// One video processor/controller tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorTier {
    pub name: String,
    /// Maximum pixel count the device can drive
    pub max_pixels: u64,
    /// Maximum simultaneous input sources
    #[serde(default = "default_input_sources")]
    pub max_inputs: u32,
    pub unit_price: f64,
}

impl ProcessorTier {
    pub fn supports(&self, pixels: u64, inputs: u32) -> bool {
        self.max_pixels >= pixels && self.max_inputs >= inputs
    }
}

/// Non-fatal conditions raised while building a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuoteWarning {
    NoProcessorFits { pixels: u64, inputs: u32 },
}

impl fmt::Display for QuoteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteWarning::NoProcessorFits { pixels, inputs } => write!(
                f,
                "no processor supports {} pixels with {} input(s), largest tier selected",
                pixels, inputs
            ),
        }
    }
}

/// Processor chosen for a wall, with the fallback warning if one applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessorSelection {
    pub tier: ProcessorTier,
    pub warning: Option<QuoteWarning>,
}

impl ProcessorSelection {
    pub fn is_fallback(&self) -> bool {
        self.warning.is_some()
    }
}

/// Bill-of-materials role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemRole {
    Module,
    PowerSupply,
    ReceiverCard,
    Processor,
    Mounting,
    Enclosure,
    ServiceFee,
}

impl ItemRole {
    /// Translation key for this role
    pub fn label_key(&self) -> &'static str {
        match self {
            ItemRole::Module => "role.module",
            ItemRole::PowerSupply => "role.power_supply",
            ItemRole::ReceiverCard => "role.receiver_card",
            ItemRole::Processor => "role.processor",
            ItemRole::Mounting => "role.mounting",
            ItemRole::Enclosure => "role.enclosure",
            ItemRole::ServiceFee => "role.service_fee",
        }
    }
}

/// One priced line of the bill of materials
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub role: ItemRole,
    pub name: String,
    /// Piece count, or square metres for enclosure lines
    pub quantity: f64,
    pub unit_price: f64,
}

impl LineItem {
    pub fn new(role: ItemRole, name: &str, quantity: f64, unit_price: f64) -> Self {
        Self {
            role,
            name: name.to_string(),
            quantity,
            unit_price,
        }
    }

    pub fn extended(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Material, expense and sale totals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material_subtotal: f64,
    pub fixed_costs: f64,
    pub total_expense: f64,
    pub margin_pct: f64,
    pub profit: f64,
    pub sale_price: f64,
}

/// Everything computed for one quote; derived, never persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub module: ModuleSpec,
    pub grid: Grid,
    pub total_modules: u64,
    /// Built width, never smaller than requested
    pub actual_width_mm: f64,
    pub actual_height_mm: f64,
    pub area_m2: f64,
    pub resolution: Resolution,
    pub total_pixels: u64,
    pub hardware: HardwareCounts,
    pub processor: ProcessorSelection,
    pub items: Vec<LineItem>,
    pub cost: CostBreakdown,
}

impl QuoteBreakdown {
    pub fn warnings(&self) -> impl Iterator<Item = &QuoteWarning> {
        self.processor.warning.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q18() -> ModuleSpec {
        ModuleSpec {
            name: "Qiangli Q1.8".to_string(),
            width_mm: 320.0,
            height_mm: 160.0,
            res_w: 172,
            res_h: 86,
            power_watts: 30.0,
            unit_price: 45.0,
            brightness_nits: Some(800),
            environment: Some(Environment::Indoor),
            technology: Some("SMD".to_string()),
        }
    }

    #[test]
    fn test_module_validation() {
        assert!(q18().validate().is_ok());

        let mut bad = q18();
        bad.width_mm = 0.0;
        assert!(matches!(bad.validate(), Err(Error::InvalidDimension(_))));

        let mut bad = q18();
        bad.height_mm = f64::NAN;
        assert!(matches!(bad.validate(), Err(Error::InvalidDimension(_))));

        let mut bad = q18();
        bad.res_h = 0;
        assert!(matches!(bad.validate(), Err(Error::InvalidDimension(_))));

        let mut bad = q18();
        bad.unit_price = -1.0;
        assert!(matches!(bad.validate(), Err(Error::InvalidCatalog(_))));
    }

    #[test]
    fn test_module_filter() {
        let module = q18();
        assert!(module.matches(None, None));
        assert!(module.matches(Some(Environment::Indoor), Some("smd")));
        assert!(!module.matches(Some(Environment::Outdoor), None));
        assert!(!module.matches(None, Some("COB")));
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!("Indoor".parse::<Environment>(), Ok(Environment::Indoor));
        assert_eq!(" outdoor ".parse::<Environment>(), Ok(Environment::Outdoor));
        assert!("underwater".parse::<Environment>().is_err());
    }

    #[test]
    fn test_operational_costs_total() {
        let costs = OperationalCosts::default();
        assert_eq!(costs.total(), 400.0);
    }

    #[test]
    fn test_resolution_overflow() {
        let res = Resolution { width: u64::MAX, height: 2 };
        assert_eq!(res.total_pixels(), None);
        let res = Resolution { width: 2064, height: 1204 };
        assert_eq!(res.total_pixels(), Some(2_485_056));
    }
}
