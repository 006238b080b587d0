//! Quote pipeline
//!
//! Runs grid -> resolution -> hardware counts -> processor -> bill of
//! materials -> cost for one screen request. The engine borrows the catalog
//! it is given and keeps no state between calls.

use crate::catalog::Catalog;
use crate::core::{
    check_dimension, EngineConfig, Error, PricingInputs, QuoteBreakdown, Result, ScreenRequest,
};
use crate::pricing::{build_bill_of_materials, compute_cost, BillOfMaterialsInput};
use crate::sizing;

const MM2_PER_M2: f64 = 1_000_000.0;

/// Sizing and costing engine bound to one catalog
pub struct QuoteEngine<'a> {
    catalog: &'a Catalog,
    settings: EngineConfig,
}

impl<'a> QuoteEngine<'a> {
    pub fn new(catalog: &'a Catalog, settings: EngineConfig) -> Self {
        Self { catalog, settings }
    }

    /// Compute the full quote for a request
    pub fn quote(&self, request: &ScreenRequest, pricing: &PricingInputs) -> Result<QuoteBreakdown> {
        check_dimension("target width", request.target_width_mm)?;
        check_dimension("target height", request.target_height_mm)?;

        let module = self.catalog.modules.find(&request.module)?;
        if !module.matches(request.environment, request.technology.as_deref()) {
            return Err(Error::NoCatalogMatch(format!(
                "module '{}' does not match the requested {}{}",
                module.name,
                request.environment.map_or("", |e| e.as_str()),
                request
                    .technology
                    .as_deref()
                    .map(|t| format!(" {}", t))
                    .unwrap_or_default()
            )));
        }

        let grid = sizing::compute_grid(module, request.target_width_mm, request.target_height_mm)?;
        let total_modules = grid.total_modules();
        if total_modules > self.settings.max_modules {
            return Err(Error::OutOfRange(format!(
                "{}x{} grid needs {} modules, limit is {}",
                grid.columns, grid.rows, total_modules, self.settings.max_modules
            )));
        }

        let resolution = sizing::compute_resolution(module, grid.columns, grid.rows);
        let total_pixels = resolution.total_pixels().ok_or_else(|| {
            Error::OutOfRange(format!(
                "{}x{} pixels exceeds the supported range",
                resolution.width, resolution.height
            ))
        })?;

        let hardware_catalog = &self.catalog.hardware;
        let psu_amperage = request
            .psu_amperage
            .unwrap_or(hardware_catalog.power_supply.amperage);
        let hardware = sizing::compute_hardware_counts(
            module,
            grid.columns,
            grid.rows,
            hardware_catalog,
            psu_amperage,
        )?;

        let processor = sizing::select_processor_with_policy(
            hardware_catalog,
            total_pixels,
            request.input_sources,
            self.settings.processor_fallback,
        )?;

        let actual_width_mm = f64::from(grid.columns) * module.width_mm;
        let actual_height_mm = f64::from(grid.rows) * module.height_mm;
        let area_m2 = actual_width_mm * actual_height_mm / MM2_PER_M2;

        let enclosure = if pricing.include_enclosure {
            let environment = module.environment.ok_or_else(|| {
                Error::NoCatalogMatch(format!(
                    "module '{}' has no environment, cannot price an enclosure",
                    module.name
                ))
            })?;
            let rate = hardware_catalog.enclosure_for(environment).ok_or_else(|| {
                Error::NoCatalogMatch(format!("no enclosure rate for {} walls", environment))
            })?;
            Some((rate, area_m2))
        } else {
            None
        };

        let items = build_bill_of_materials(&BillOfMaterialsInput {
            module,
            grid,
            hardware: &hardware,
            processor: &processor.tier,
            catalog: hardware_catalog,
            psu_amperage,
            enclosure,
            service_fee_pct: pricing.service_fee_pct,
        });
        let cost = compute_cost(&items, &pricing.costs.as_array(), pricing.margin_pct);

        log::debug!(
            "Quoted {}: {}x{} modules, {}x{} px, sale price {:.2}",
            module.name,
            grid.columns,
            grid.rows,
            resolution.width,
            resolution.height,
            cost.sale_price
        );

        Ok(QuoteBreakdown {
            module: module.clone(),
            grid,
            total_modules,
            actual_width_mm,
            actual_height_mm,
            area_m2,
            resolution,
            total_pixels,
            hardware,
            processor,
            items,
            cost,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Environment, FallbackPolicy, ItemRole, OperationalCosts, QuoteWarning};

    fn engine(catalog: &Catalog) -> QuoteEngine<'_> {
        QuoteEngine::new(catalog, EngineConfig::default())
    }

    #[test]
    fn test_reference_scenario() {
        let catalog = Catalog::builtin();
        let request = ScreenRequest::new("Qiangli Q1.8", 3840.0, 2160.0);
        let quote = engine(&catalog).quote(&request, &PricingInputs::default()).unwrap();

        assert_eq!(quote.grid.columns, 12);
        assert_eq!(quote.grid.rows, 14);
        assert_eq!(quote.total_modules, 168);
        assert_eq!(quote.resolution.width, 2064);
        assert_eq!(quote.resolution.height, 1204);
        assert_eq!(quote.total_pixels, 2_485_056);
        assert_eq!(quote.actual_width_mm, 3840.0);
        assert_eq!(quote.actual_height_mm, 2240.0);

        assert_eq!(quote.hardware.power_supplies, 32);
        assert_eq!(quote.hardware.receiver_cards, 76);
        // 2.49 Mpx is beyond the single-input tiers
        assert_eq!(quote.processor.tier.name, "Novastar VX400");
        assert!(quote.processor.warning.is_none());

        // 168*45 + 32*14 + 76*18 + 650 + 672*0.45
        let expected_material = 7560.0 + 448.0 + 1368.0 + 650.0 + 302.4;
        assert!((quote.cost.material_subtotal - expected_material).abs() < 1e-6);
        assert_eq!(quote.cost.fixed_costs, 400.0);
        assert!((quote.cost.sale_price - (expected_material + 400.0) * 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_quote_is_idempotent() {
        let catalog = Catalog::builtin();
        let engine = engine(&catalog);
        let request = ScreenRequest::new("Qiangli P5 Outdoor", 6000.0, 3000.0).with_inputs(2);
        let pricing = PricingInputs {
            service_fee_pct: 7.5,
            include_enclosure: true,
            ..PricingInputs::default()
        };

        let first = engine.quote(&request, &pricing).unwrap();
        let second = engine.quote(&request, &pricing).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sale_price_covers_expense() {
        let catalog = Catalog::builtin();
        let engine = engine(&catalog);
        for module in catalog.modules.iter() {
            let request = ScreenRequest::new(&module.name, 2500.0, 1200.0);
            let quote = engine.quote(&request, &PricingInputs::default()).unwrap();
            assert!(quote.cost.sale_price >= quote.cost.total_expense);
            assert!(quote.actual_width_mm >= 2500.0);
            assert!(quote.actual_height_mm >= 1200.0);
        }
    }

    #[test]
    fn test_unknown_module() {
        let catalog = Catalog::builtin();
        let request = ScreenRequest::new("Mystery P2", 1000.0, 1000.0);
        let result = engine(&catalog).quote(&request, &PricingInputs::default());
        assert!(matches!(result, Err(Error::NoCatalogMatch(_))));
    }

    #[test]
    fn test_environment_filter_excludes_module() {
        let catalog = Catalog::builtin();
        let request = ScreenRequest::new("Qiangli Q2.5", 1000.0, 1000.0).with_environment(Environment::Outdoor);
        let result = engine(&catalog).quote(&request, &PricingInputs::default());
        assert!(matches!(result, Err(Error::NoCatalogMatch(_))));

        let request = ScreenRequest::new("Qiangli Q2.5", 1000.0, 1000.0)
            .with_environment(Environment::Indoor)
            .with_technology("smd");
        assert!(engine(&catalog).quote(&request, &PricingInputs::default()).is_ok());
    }

    #[test]
    fn test_invalid_target_rejected() {
        let catalog = Catalog::builtin();
        let request = ScreenRequest::new("Qiangli Q3", 0.0, 1000.0);
        let result = engine(&catalog).quote(&request, &PricingInputs::default());
        assert!(matches!(result, Err(Error::InvalidDimension(_))));
    }

    #[test]
    fn test_module_limit() {
        let catalog = Catalog::builtin();
        let settings = EngineConfig {
            max_modules: 100,
            ..EngineConfig::default()
        };
        let engine = QuoteEngine::new(&catalog, settings);

        let request = ScreenRequest::new("Qiangli Q1.8", 3840.0, 2160.0);
        let result = engine.quote(&request, &PricingInputs::default());
        assert!(matches!(result, Err(Error::OutOfRange(_))));
    }

    #[test]
    fn test_processor_fallback_warning() {
        let catalog = Catalog::builtin();
        // 30 m x 10 m of Q1.8 is far beyond any tier
        let request = ScreenRequest::new("Qiangli Q1.8", 30_000.0, 10_000.0);

        let quote = engine(&catalog).quote(&request, &PricingInputs::default()).unwrap();
        assert_eq!(quote.processor.tier.name, "Novastar VX600");
        let warnings: Vec<&QuoteWarning> = quote.warnings().collect();
        assert_eq!(warnings.len(), 1);

        let strict = QuoteEngine::new(
            &catalog,
            EngineConfig {
                processor_fallback: FallbackPolicy::Fail,
                ..EngineConfig::default()
            },
        );
        let result = strict.quote(&request, &PricingInputs::default());
        assert!(matches!(result, Err(Error::NoProcessorFits { .. })));
    }

    #[test]
    fn test_enclosure_and_service_fee() {
        let catalog = Catalog::builtin();
        let request = ScreenRequest::new("Qiangli P10 Outdoor", 3200.0, 1600.0);
        let pricing = PricingInputs {
            costs: OperationalCosts {
                labor: 0.0,
                shipping: 0.0,
                overhead: 0.0,
            },
            margin_pct: 0.0,
            service_fee_pct: 10.0,
            include_enclosure: true,
        };

        let quote = engine(&catalog).quote(&request, &pricing).unwrap();
        assert!((quote.area_m2 - 5.12).abs() < 1e-9);

        let enclosure = quote.items.iter().find(|i| i.role == ItemRole::Enclosure).unwrap();
        assert!((enclosure.extended() - 5.12 * 260.0).abs() < 1e-6);

        let fee = quote.items.iter().find(|i| i.role == ItemRole::ServiceFee).unwrap();
        let before_fee: f64 = quote
            .items
            .iter()
            .filter(|i| i.role != ItemRole::ServiceFee)
            .map(|i| i.extended())
            .sum();
        assert!((fee.extended() - before_fee * 0.1).abs() < 1e-6);
        assert!((quote.cost.sale_price - before_fee * 1.1).abs() < 1e-6);
    }

    #[test]
    fn test_psu_override() {
        let catalog = Catalog::builtin();
        let engine = engine(&catalog);
        let base = ScreenRequest::new("Qiangli Q1.8", 3840.0, 2160.0);

        let q40 = engine.quote(&base, &PricingInputs::default()).unwrap();
        let q60 = engine
            .quote(&base.clone().with_psu_amperage(60.0), &PricingInputs::default())
            .unwrap();
        assert!(q60.hardware.power_supplies < q40.hardware.power_supplies);
    }
}
