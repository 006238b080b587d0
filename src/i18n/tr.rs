//! Turkish translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // Report header
    t.insert("report.title".into(), "LED Ekran Projelendirme Teklifi".into());
    t.insert("report.date".into(), "Tarih".into());
    t.insert("report.module".into(), "Mod\u{00FC}l".into());
    t.insert("report.environment".into(), "Kullan\u{0131}m alan\u{0131}".into());

    // Headline metrics
    t.insert("metric.actual_size".into(), "Ger\u{00E7}ek \u{00F6}l\u{00E7}\u{00FC}".into());
    t.insert("metric.grid".into(), "Dizilim".into());
    t.insert("metric.total_modules".into(), "Toplam mod\u{00FC}l".into());
    t.insert("metric.resolution".into(), "\u{00C7}\u{00F6}z\u{00FC}n\u{00FC}rl\u{00FC}k".into());
    t.insert("metric.area".into(), "Alan".into());
    t.insert("metric.net_cost".into(), "Net maliyet".into());

    // Bill of materials
    t.insert("bom.title".into(), "Detayl\u{0131} malzeme listesi".into());
    t.insert("bom.item".into(), "\u{00DC}r\u{00FC}n".into());
    t.insert("bom.quantity".into(), "Adet".into());
    t.insert("bom.unit_price".into(), "Birim".into());
    t.insert("bom.total".into(), "Toplam".into());

    // Line item roles
    t.insert("role.module".into(), "Mod\u{00FC}l".into());
    t.insert("role.power_supply".into(), "G\u{00FC}\u{00E7} kayna\u{011F}\u{0131}".into());
    t.insert("role.receiver_card".into(), "Al\u{0131}c\u{0131} kart".into());
    t.insert("role.processor".into(), "Kontrolc\u{00FC}".into());
    t.insert("role.mounting".into(), "M\u{0131}knat\u{0131}s / ba\u{011F}lant\u{0131} aparat\u{0131}".into());
    t.insert("role.enclosure".into(), "Kabin".into());
    t.insert("role.service_fee".into(), "Hizmet bedeli".into());

    // Financial summary
    t.insert("summary.title".into(), "Finansal \u{00F6}zet".into());
    t.insert("summary.material".into(), "Malzeme toplam\u{0131}".into());
    t.insert("summary.operational".into(), "Operasyonel giderler".into());
    t.insert("summary.margin".into(), "Kar marj\u{0131}".into());
    t.insert("summary.profit".into(), "Hedef kar".into());
    t.insert("summary.sale_price".into(), "\u{00D6}nerilen sat\u{0131}\u{015F}".into());

    // Captions and warnings
    t.insert("caption.processor".into(), "{processor} se\u{00E7}ildi. Toplam y\u{00F6}netilen piksel: {pixels}.".into());
    t.insert(
        "warning.no_processor_fits".into(),
        "Uyar\u{0131}: {pixels} piksel ve {inputs} giri\u{015F} i\u{00E7}in uygun kontrolc\u{00FC} yok; en b\u{00FC}y\u{00FC}k model se\u{00E7}ildi.".into(),
    );

    // Module listing
    t.insert("modules.title".into(), "Mevcut mod\u{00FC}ller".into());
    t.insert("modules.empty".into(), "Filtreye uyan mod\u{00FC}l yok.".into());
    t.insert("modules.size".into(), "Boyut (mm)".into());
    t.insert("modules.pixels".into(), "Piksel".into());
    t.insert("modules.power".into(), "G\u{00FC}\u{00E7} (W)".into());
    t.insert("modules.price".into(), "Fiyat".into());
    t.insert("modules.brightness".into(), "Parlakl\u{0131}k".into());

    // Units
    t.insert("unit.pieces".into(), "adet".into());
    t.insert("unit.nits".into(), "nit".into());

    // Environments
    t.insert("env.indoor".into(), "\u{0130}\u{00E7} mekan".into());
    t.insert("env.outdoor".into(), "D\u{0131}\u{015F} mekan".into());

    t
}
