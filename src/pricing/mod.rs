//! Pricing engine for LED wall quotes
//!
//! Builds the bill of materials from the sized hardware and prices it:
//! - Material subtotal: sum of quantity x unit price over all lines
//! - Total expense: materials plus fixed operational costs
//! - Sale price: total expense marked up by the margin percentage

use crate::catalog::{EnclosureRate, HardwareCatalog};
use crate::core::{
    CostBreakdown, Grid, HardwareCounts, ItemRole, LineItem, ModuleSpec, PricingConfig,
    PricingInputs, ProcessorTier,
};

/// Pricing engine holding the configured defaults and currency
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Create a new pricing engine with the given configuration
    pub fn new(config: &PricingConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Pricing inputs from the configured defaults
    pub fn default_inputs(&self) -> PricingInputs {
        self.config.to_inputs()
    }

    /// Get the currency symbol
    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    pub fn currency(&self) -> &str {
        &self.config.currency
    }

    /// Format an amount with the currency symbol and thousands separators
    pub fn format_amount(&self, amount: f64) -> String {
        format!("{}{}", self.config.currency_symbol, group_thousands(amount, 2))
    }
}

/// Format a number with `,` thousands separators and fixed decimals
pub fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    if value < 0.0 && grouped.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Sum of extended cost over all lines
pub fn material_subtotal(items: &[LineItem]) -> f64 {
    items.iter().map(LineItem::extended).sum()
}

/// Price a bill of materials
///
/// The margin is applied as given; callers are expected to keep it within
/// 0-100 and out-of-range values simply propagate.
pub fn compute_cost(items: &[LineItem], fixed_costs: &[f64], margin_pct: f64) -> CostBreakdown {
    let material_subtotal = material_subtotal(items);
    let fixed_costs: f64 = fixed_costs.iter().sum();
    let total_expense = material_subtotal + fixed_costs;
    let sale_price = total_expense * (1.0 + margin_pct / 100.0);

    CostBreakdown {
        material_subtotal,
        fixed_costs,
        total_expense,
        margin_pct,
        profit: sale_price - total_expense,
        sale_price,
    }
}

/// Everything needed to list the materials of one wall
pub struct BillOfMaterialsInput<'a> {
    pub module: &'a ModuleSpec,
    pub grid: Grid,
    pub hardware: &'a HardwareCounts,
    pub processor: &'a ProcessorTier,
    pub catalog: &'a HardwareCatalog,
    pub psu_amperage: f64,
    /// Enclosure rate and the wall area it applies to, in square metres
    pub enclosure: Option<(&'a EnclosureRate, f64)>,
    pub service_fee_pct: f64,
}

/// Ordered bill of materials: modules, PSUs, receivers, processor, mounting,
/// then the optional enclosure and service-fee lines
pub fn build_bill_of_materials(input: &BillOfMaterialsInput<'_>) -> Vec<LineItem> {
    let catalog = input.catalog;
    let psu = &catalog.power_supply;

    let psu_name = if (input.psu_amperage - psu.amperage).abs() < f64::EPSILON {
        psu.name.clone()
    } else {
        format!("{}V {}A", psu.voltage, input.psu_amperage)
    };

    let mut items = vec![
        LineItem::new(
            ItemRole::Module,
            &input.module.name,
            input.grid.total_modules() as f64,
            input.module.unit_price,
        ),
        LineItem::new(
            ItemRole::PowerSupply,
            &psu_name,
            input.hardware.power_supplies as f64,
            psu.unit_price,
        ),
        LineItem::new(
            ItemRole::ReceiverCard,
            &catalog.receiver_card.name,
            input.hardware.receiver_cards as f64,
            catalog.receiver_card.unit_price,
        ),
        LineItem::new(ItemRole::Processor, &input.processor.name, 1.0, input.processor.unit_price),
        LineItem::new(
            ItemRole::Mounting,
            &catalog.mounting.name,
            input.hardware.mounting_pieces as f64,
            catalog.mounting.unit_price,
        ),
    ];

    if let Some((rate, area_m2)) = input.enclosure {
        items.push(LineItem::new(ItemRole::Enclosure, &rate.name, area_m2, rate.price_per_m2));
    }

    if input.service_fee_pct > 0.0 {
        let fee = material_subtotal(&items) * input.service_fee_pct / 100.0;
        items.push(LineItem::new(
            ItemRole::ServiceFee,
            &format!("{}%", input.service_fee_pct),
            1.0,
            fee,
        ));
    }

    items
}
