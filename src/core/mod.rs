//! Core module - Configuration, errors, and the quote data model

mod config;
mod error;
mod types;

pub use config::{CatalogConfig, Config, EngineConfig, GeneralConfig, PricingConfig};
pub use error::{Error, Result};
pub use types::{
    CostBreakdown, Environment, FallbackPolicy, Grid, HardwareCounts, ItemRole, LineItem,
    ModuleSpec, OperationalCosts, PricingInputs, ProcessorSelection, ProcessorTier, QuoteBreakdown,
    QuoteWarning, Resolution, ScreenRequest,
};
pub(crate) use types::{check_dimension, check_non_negative};
