//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Report header
    t.insert("report.title".into(), "LED Screen Project Quote".into());
    t.insert("report.date".into(), "Date".into());
    t.insert("report.module".into(), "Module".into());
    t.insert("report.environment".into(), "Environment".into());

    // Headline metrics
    t.insert("metric.actual_size".into(), "Actual size".into());
    t.insert("metric.grid".into(), "Grid".into());
    t.insert("metric.total_modules".into(), "Total modules".into());
    t.insert("metric.resolution".into(), "Resolution".into());
    t.insert("metric.area".into(), "Area".into());
    t.insert("metric.net_cost".into(), "Net cost".into());

    // Bill of materials
    t.insert("bom.title".into(), "Detailed bill of materials".into());
    t.insert("bom.item".into(), "Item".into());
    t.insert("bom.quantity".into(), "Qty".into());
    t.insert("bom.unit_price".into(), "Unit".into());
    t.insert("bom.total".into(), "Total".into());

    // Line item roles
    t.insert("role.module".into(), "Module".into());
    t.insert("role.power_supply".into(), "Power supply".into());
    t.insert("role.receiver_card".into(), "Receiving card".into());
    t.insert("role.processor".into(), "Controller".into());
    t.insert("role.mounting".into(), "Magnet / fixing".into());
    t.insert("role.enclosure".into(), "Enclosure".into());
    t.insert("role.service_fee".into(), "Service fee".into());

    // Financial summary
    t.insert("summary.title".into(), "Financial summary".into());
    t.insert("summary.material".into(), "Material total".into());
    t.insert("summary.operational".into(), "Operational costs".into());
    t.insert("summary.margin".into(), "Margin".into());
    t.insert("summary.profit".into(), "Target profit".into());
    t.insert("summary.sale_price".into(), "Suggested sale price".into());

    // Captions and warnings
    t.insert("caption.processor".into(), "{processor} selected. Total managed pixels: {pixels}.".into());
    t.insert(
        "warning.no_processor_fits".into(),
        "Warning: no controller supports {pixels} px with {inputs} input(s); the largest one was quoted.".into(),
    );

    // Module listing
    t.insert("modules.title".into(), "Available modules".into());
    t.insert("modules.empty".into(), "No modules match the filter.".into());
    t.insert("modules.size".into(), "Size (mm)".into());
    t.insert("modules.pixels".into(), "Pixels".into());
    t.insert("modules.power".into(), "Power (W)".into());
    t.insert("modules.price".into(), "Price".into());
    t.insert("modules.brightness".into(), "Brightness".into());

    // Units
    t.insert("unit.pieces".into(), "pcs".into());
    t.insert("unit.nits".into(), "nit".into());

    // Environments
    t.insert("env.indoor".into(), "Indoor".into());
    t.insert("env.outdoor".into(), "Outdoor".into());

    t
}
