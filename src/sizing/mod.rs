//! Wall sizing
//!
//! Turns a module spec and a target size into a module grid, the wall's
//! pixel resolution and the auxiliary hardware needed to drive it:
//! - Grid: ceiling of target / module size on each axis
//! - PSUs: total module wattage over derated supply output
//! - Receiver cards: total pixels over per-card capacity
//! - Processor: smallest tier covering pixels and input sources

use crate::catalog::HardwareCatalog;
use crate::core::{
    check_dimension, Error, FallbackPolicy, Grid, HardwareCounts, ModuleSpec, ProcessorSelection,
    ProcessorTier, QuoteWarning, Resolution, Result,
};
use std::cmp::Ordering;

/// Number of modules needed on each axis to cover the target
///
/// Partial modules round up, so the built wall is never smaller than requested.
pub fn compute_grid(module: &ModuleSpec, target_w: f64, target_h: f64) -> Result<Grid> {
    check_dimension("module width", module.width_mm)?;
    check_dimension("module height", module.height_mm)?;
    check_dimension("target width", target_w)?;
    check_dimension("target height", target_h)?;

    let columns = modules_along("columns", target_w, module.width_mm)?;
    let rows = modules_along("rows", target_h, module.height_mm)?;

    Ok(Grid { columns, rows })
}

fn modules_along(axis: &str, target: f64, module_size: f64) -> Result<u32> {
    let count = (target / module_size).ceil();
    if !count.is_finite() || count > f64::from(u32::MAX) {
        return Err(Error::OutOfRange(format!(
            "{} {} needed for {} mm exceeds the supported range",
            count, axis, target
        )));
    }
    // Positive inputs always need at least one module
    Ok((count as u32).max(1))
}

/// Effective resolution of a grid of modules
pub fn compute_resolution(module: &ModuleSpec, columns: u32, rows: u32) -> Resolution {
    Resolution {
        width: u64::from(columns) * u64::from(module.res_w),
        height: u64::from(rows) * u64::from(module.res_h),
    }
}

/// Choose a processor tier using the default "never block a quote" policy
pub fn select_processor(
    catalog: &HardwareCatalog,
    total_pixels: u64,
    input_sources: u32,
) -> Result<ProcessorSelection> {
    select_processor_with_policy(catalog, total_pixels, input_sources, FallbackPolicy::Largest)
}

/// Choose the smallest processor tier that covers the pixel count and input sources
///
/// Ties on capacity go to the cheaper unit. When nothing fits, `Largest`
/// returns the highest-capacity tier with a warning and `Fail` returns
/// `Error::NoProcessorFits`.
pub fn select_processor_with_policy(
    catalog: &HardwareCatalog,
    total_pixels: u64,
    input_sources: u32,
    policy: FallbackPolicy,
) -> Result<ProcessorSelection> {
    if input_sources == 0 {
        return Err(Error::OutOfRange("at least one input source is required".to_string()));
    }
    if catalog.processors.is_empty() {
        return Err(Error::NoCatalogMatch("catalog has no processor tiers".to_string()));
    }

    let fitting = catalog
        .processors
        .iter()
        .filter(|tier| tier.supports(total_pixels, input_sources))
        .min_by(|a, b| {
            a.max_pixels
                .cmp(&b.max_pixels)
                .then_with(|| cmp_price(a.unit_price, b.unit_price))
        });

    if let Some(tier) = fitting {
        log::debug!(
            "Selected processor {} for {} px / {} input(s)",
            tier.name,
            total_pixels,
            input_sources
        );
        return Ok(ProcessorSelection {
            tier: tier.clone(),
            warning: None,
        });
    }

    match policy {
        FallbackPolicy::Fail => Err(Error::NoProcessorFits {
            pixels: total_pixels,
            inputs: input_sources,
        }),
        FallbackPolicy::Largest => {
            let largest = largest_tier(&catalog.processors)
                .ok_or_else(|| Error::NoCatalogMatch("catalog has no processor tiers".to_string()))?;
            let warning = QuoteWarning::NoProcessorFits {
                pixels: total_pixels,
                inputs: input_sources,
            };
            log::warn!("{} ({})", warning, largest.name);
            Ok(ProcessorSelection {
                tier: largest.clone(),
                warning: Some(warning),
            })
        }
    }
}

/// Highest capacity, then most inputs, then cheapest
fn largest_tier(tiers: &[ProcessorTier]) -> Option<&ProcessorTier> {
    tiers.iter().max_by(|a, b| {
        a.max_pixels
            .cmp(&b.max_pixels)
            .then_with(|| a.max_inputs.cmp(&b.max_inputs))
            .then_with(|| cmp_price(b.unit_price, a.unit_price))
    })
}

fn cmp_price(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// PSU, receiver card and mounting quantities for a grid
///
/// `psu_amperage` is the chosen supply's rated current; voltage and derating
/// come from the catalog. PSU and receiver counts are at least one for any
/// non-empty wall.
pub fn compute_hardware_counts(
    module: &ModuleSpec,
    columns: u32,
    rows: u32,
    catalog: &HardwareCatalog,
    psu_amperage: f64,
) -> Result<HardwareCounts> {
    let total_modules = u64::from(columns) * u64::from(rows);
    if total_modules == 0 {
        return Ok(HardwareCounts {
            power_supplies: 0,
            receiver_cards: 0,
            mounting_pieces: 0,
        });
    }

    if !(psu_amperage.is_finite() && psu_amperage > 0.0) {
        return Err(Error::OutOfRange(format!("PSU amperage must be positive, got {}", psu_amperage)));
    }
    let usable_watts = catalog.power_supply.usable_watts(psu_amperage);
    if !(usable_watts.is_finite() && usable_watts > 0.0) {
        return Err(Error::OutOfRange(format!("PSU usable output must be positive, got {}", usable_watts)));
    }

    let total_watts = total_modules as f64 * module.power_watts;
    let power_supplies = ((total_watts / usable_watts).ceil() as u64).max(1);

    let resolution = compute_resolution(module, columns, rows);
    let total_pixels = resolution.total_pixels().ok_or_else(|| {
        Error::OutOfRange(format!(
            "{}x{} pixels exceeds the supported range",
            resolution.width, resolution.height
        ))
    })?;
    let capacity = catalog.receiver_card.pixel_capacity;
    if capacity == 0 {
        return Err(Error::InvalidCatalog("receiver card pixel capacity must be positive".to_string()));
    }
    let receiver_cards = total_pixels.div_ceil(capacity).max(1);

    let mounting_pieces = total_modules
        .checked_mul(u64::from(catalog.mounting.pieces_per_module))
        .ok_or_else(|| Error::OutOfRange("mounting piece count overflows".to_string()))?;

    Ok(HardwareCounts {
        power_supplies,
        receiver_cards,
        mounting_pieces,
    })
}
