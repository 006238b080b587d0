//! Plain-text rendering of quotes and module listings

use crate::core::{Environment, ModuleSpec, QuoteBreakdown, QuoteWarning};
use crate::i18n::I18n;
use crate::pricing::{group_thousands, PricingEngine};
use chrono::{Local, NaiveDate};
use std::fmt;

const RULE_WIDTH: usize = 78;

/// A quote rendered for the terminal
pub struct QuoteReport<'a> {
    quote: &'a QuoteBreakdown,
    i18n: &'a I18n,
    pricing: &'a PricingEngine,
    issued_on: NaiveDate,
}

impl<'a> QuoteReport<'a> {
    pub fn new(quote: &'a QuoteBreakdown, i18n: &'a I18n, pricing: &'a PricingEngine) -> Self {
        Self {
            quote,
            i18n,
            pricing,
            issued_on: Local::now().date_naive(),
        }
    }

    /// Override the issue date printed in the header
    pub fn issued_on(mut self, date: NaiveDate) -> Self {
        self.issued_on = date;
        self
    }

    fn money(&self, amount: f64) -> String {
        self.pricing.format_amount(amount)
    }

    fn warning_text(&self, warning: &QuoteWarning) -> String {
        match warning {
            QuoteWarning::NoProcessorFits { pixels, inputs } => self
                .i18n
                .get("warning.no_processor_fits")
                .replace("{pixels}", &group_thousands(*pixels as f64, 0))
                .replace("{inputs}", &inputs.to_string()),
        }
    }
}

fn environment_label(i18n: &I18n, environment: Environment) -> String {
    i18n.get(&format!("env.{}", environment.as_str()))
}

/// Whole numbers without decimals, fractional quantities (areas) with two
fn format_quantity(quantity: f64) -> String {
    if quantity.fract() == 0.0 {
        group_thousands(quantity, 0)
    } else {
        group_thousands(quantity, 2)
    }
}

impl fmt::Display for QuoteReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let q = self.quote;
        let t = |key: &str| self.i18n.get(key);

        writeln!(f, "=== {} ===", t("report.title"))?;
        writeln!(f, "{}: {}", t("report.date"), self.issued_on.format("%Y-%m-%d"))?;

        let mut module_line = q.module.name.clone();
        let mut details = Vec::new();
        if let Some(env) = q.module.environment {
            details.push(environment_label(self.i18n, env));
        }
        if let Some(nits) = q.module.brightness_nits {
            details.push(format!("{} {}", nits, t("unit.nits")));
        }
        if !details.is_empty() {
            module_line.push_str(&format!(" ({})", details.join(", ")));
        }
        writeln!(f, "{}: {}", t("report.module"), module_line)?;
        writeln!(f)?;

        let metrics = [
            (
                t("metric.actual_size"),
                format!("{} x {} mm", q.actual_width_mm, q.actual_height_mm),
            ),
            (t("metric.grid"), format!("{} x {}", q.grid.columns, q.grid.rows)),
            (
                t("metric.total_modules"),
                format!("{} {}", group_thousands(q.total_modules as f64, 0), t("unit.pieces")),
            ),
            (
                t("metric.resolution"),
                format!("{}x{} px", q.resolution.width, q.resolution.height),
            ),
            (t("metric.area"), format!("{:.2} m\u{00B2}", q.area_m2)),
            (
                t("metric.net_cost"),
                format!(
                    "{}{}",
                    self.pricing.currency_symbol(),
                    group_thousands(q.cost.total_expense, 0)
                ),
            ),
        ];
        for (label, value) in &metrics {
            writeln!(f, "{:<22} {}", format!("{}:", label), value)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", t("bom.title"))?;
        writeln!(
            f,
            "{:<44} {:>8} {:>11} {:>12}",
            t("bom.item"),
            t("bom.quantity"),
            t("bom.unit_price"),
            t("bom.total")
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        for item in &q.items {
            let label = format!("{}: {}", t(item.role.label_key()), item.name);
            writeln!(
                f,
                "{:<44} {:>8} {:>11} {:>12}",
                label,
                format_quantity(item.quantity),
                self.money(item.unit_price),
                self.money(item.extended())
            )?;
        }
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        writeln!(f)?;

        writeln!(f, "{}", t("summary.title"))?;
        let summary = [
            (t("summary.material"), self.money(q.cost.material_subtotal)),
            (t("summary.operational"), self.money(q.cost.fixed_costs)),
            (t("summary.margin"), format!("{}%", q.cost.margin_pct)),
            (t("summary.profit"), self.money(q.cost.profit)),
            (t("summary.sale_price"), self.money(q.cost.sale_price)),
        ];
        for (label, value) in &summary {
            writeln!(f, "  {:<24} {}", format!("{}:", label), value)?;
        }
        writeln!(f)?;

        let caption = t("caption.processor")
            .replace("{processor}", &q.processor.tier.name)
            .replace("{pixels}", &group_thousands(q.total_pixels as f64, 0));
        writeln!(f, "{}", caption)?;

        for warning in q.warnings() {
            writeln!(f, "{}", self.warning_text(warning))?;
        }

        Ok(())
    }
}

/// Catalog modules rendered as a table
pub struct ModuleListing<'a> {
    modules: Vec<&'a ModuleSpec>,
    i18n: &'a I18n,
    pricing: &'a PricingEngine,
}

impl<'a> ModuleListing<'a> {
    pub fn new(modules: Vec<&'a ModuleSpec>, i18n: &'a I18n, pricing: &'a PricingEngine) -> Self {
        Self { modules, i18n, pricing }
    }
}

impl fmt::Display for ModuleListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = |key: &str| self.i18n.get(key);

        if self.modules.is_empty() {
            return writeln!(f, "{}", t("modules.empty"));
        }

        writeln!(f, "{}", t("modules.title"))?;
        writeln!(
            f,
            "{:<24} {:>12} {:>10} {:>10} {:>10} {:>12} {:<12}",
            t("report.module"),
            t("modules.size"),
            t("modules.pixels"),
            t("modules.power"),
            t("modules.price"),
            t("modules.brightness"),
            t("report.environment")
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH + 18))?;

        for m in &self.modules {
            let brightness = m
                .brightness_nits
                .map(|n| format!("{} {}", n, t("unit.nits")))
                .unwrap_or_else(|| "-".to_string());
            let environment = m
                .environment
                .map(|e| environment_label(self.i18n, e))
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                f,
                "{:<24} {:>12} {:>10} {:>10} {:>10} {:>12} {:<12}",
                m.name,
                format!("{}x{}", m.width_mm, m.height_mm),
                format!("{}x{}", m.res_w, m.res_h),
                m.power_watts,
                self.pricing.format_amount(m.unit_price),
                brightness,
                environment
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::{EngineConfig, PricingConfig, PricingInputs, ScreenRequest};
    use crate::quote::QuoteEngine;

    fn reference_quote(catalog: &Catalog) -> QuoteBreakdown {
        let request = ScreenRequest::new("Qiangli Q1.8", 3840.0, 2160.0);
        QuoteEngine::new(catalog, EngineConfig::default())
            .quote(&request, &PricingInputs::default())
            .unwrap()
    }

    #[test]
    fn test_english_report() {
        let catalog = Catalog::builtin();
        let quote = reference_quote(&catalog);
        let i18n = I18n::new("en");
        let pricing = PricingEngine::new(&PricingConfig::default());
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();

        let text = QuoteReport::new(&quote, &i18n, &pricing).issued_on(date).to_string();

        assert!(text.contains("Date: 2026-10-16"));
        assert!(text.contains("Qiangli Q1.8 (Indoor, 800 nit)"));
        assert!(text.contains("3840 x 2240 mm"));
        assert!(text.contains("168 pcs"));
        assert!(text.contains("2064x1204 px"));
        assert!(text.contains("Module: Qiangli Q1.8"));
        assert!(text.contains("Controller: Novastar VX400"));
        assert!(text.contains("Novastar VX400 selected. Total managed pixels: 2,485,056."));
        assert!(text.contains(&pricing.format_amount(quote.cost.sale_price)));
        assert!(!text.contains("Warning"));
    }

    #[test]
    fn test_turkish_report_with_warning() {
        let catalog = Catalog::builtin();
        let request = ScreenRequest::new("Qiangli Q1.8", 30_000.0, 10_000.0);
        let quote = QuoteEngine::new(&catalog, EngineConfig::default())
            .quote(&request, &PricingInputs::default())
            .unwrap();
        let i18n = I18n::new("tr");
        let pricing = PricingEngine::new(&PricingConfig::default());

        let text = QuoteReport::new(&quote, &i18n, &pricing).to_string();

        assert!(text.contains("Finansal \u{00F6}zet"));
        assert!(text.contains("Uyar\u{0131}"));
        assert!(text.contains("Novastar VX600"));
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(168.0), "168");
        assert_eq!(format_quantity(1344.0), "1,344");
        assert_eq!(format_quantity(5.12), "5.12");
    }

    #[test]
    fn test_module_listing() {
        let catalog = Catalog::builtin();
        let i18n = I18n::new("en");
        let pricing = PricingEngine::new(&PricingConfig::default());

        let outdoor = catalog.modules.filter(Some(Environment::Outdoor), None);
        let text = ModuleListing::new(outdoor, &i18n, &pricing).to_string();
        assert!(text.contains("Qiangli P10 Outdoor"));
        assert!(!text.contains("Qiangli Q1.8"));

        let none = catalog.modules.filter(None, Some("COB"));
        let text = ModuleListing::new(none, &i18n, &pricing).to_string();
        assert_eq!(text.trim(), "No modules match the filter.");
    }
}
