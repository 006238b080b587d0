//! Built-in product table

use super::{Catalog, EnclosureRate, HardwareCatalog, ModuleCatalog, MountingSpec, PowerSupplySpec, ReceiverCardSpec};
use crate::core::{Environment, ModuleSpec, ProcessorTier};

#[allow(clippy::too_many_arguments)]
fn module(
    name: &str,
    width_mm: f64,
    height_mm: f64,
    res_w: u32,
    res_h: u32,
    power_watts: f64,
    unit_price: f64,
    brightness_nits: u32,
    environment: Environment,
) -> ModuleSpec {
    ModuleSpec {
        name: name.to_string(),
        width_mm,
        height_mm,
        res_w,
        res_h,
        power_watts,
        unit_price,
        brightness_nits: Some(brightness_nits),
        environment: Some(environment),
        technology: Some("SMD".to_string()),
    }
}

fn processor(name: &str, max_pixels: u64, max_inputs: u32, unit_price: f64) -> ProcessorTier {
    ProcessorTier {
        name: name.to_string(),
        max_pixels,
        max_inputs,
        unit_price,
    }
}

pub(super) fn catalog() -> Catalog {
    use Environment::{Indoor, Outdoor};

    let modules = vec![
        module("Qiangli Q1.8", 320.0, 160.0, 172, 86, 30.0, 45.0, 800, Indoor),
        module("Qiangli Q2.5", 320.0, 160.0, 128, 64, 35.0, 25.0, 1000, Indoor),
        module("Qiangli Q3", 192.0, 192.0, 64, 64, 25.0, 18.0, 1100, Indoor),
        module("Qiangli P4 Outdoor", 320.0, 160.0, 80, 40, 45.0, 35.0, 5500, Outdoor),
        module("Qiangli P5 Outdoor", 320.0, 160.0, 64, 32, 50.0, 28.0, 6000, Outdoor),
        module("Qiangli P10 Outdoor", 320.0, 160.0, 32, 16, 40.0, 20.0, 6500, Outdoor),
    ];

    let hardware = HardwareCatalog {
        power_supply: PowerSupplySpec {
            name: "5V 40A".to_string(),
            voltage: 5.0,
            amperage: 40.0,
            derating: 0.8,
            unit_price: 14.0,
        },
        receiver_card: ReceiverCardSpec {
            name: "Novastar receiving card".to_string(),
            pixel_capacity: 128 * 256,
            unit_price: 18.0,
        },
        processors: vec![
            processor("Novastar MSD300", 1_300_000, 1, 180.0),
            processor("Novastar MCTRL660", 2_300_000, 1, 480.0),
            processor("Novastar VX400", 2_600_000, 4, 650.0),
            processor("Novastar VX600", 3_900_000, 6, 1150.0),
        ],
        mounting: MountingSpec {
            name: "Magnet / fixing kit".to_string(),
            pieces_per_module: 4,
            unit_price: 0.45,
        },
        enclosures: vec![
            EnclosureRate {
                environment: Indoor,
                name: "Aluminium frame".to_string(),
                price_per_m2: 120.0,
            },
            EnclosureRate {
                environment: Outdoor,
                name: "IP65 steel cabinet".to_string(),
                price_per_m2: 260.0,
            },
        ],
    };

    Catalog {
        modules: ModuleCatalog { modules },
        hardware,
    }
}
