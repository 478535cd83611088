//! French translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Calculateur de besoins \u{00E9}nerg\u{00E9}tiques".into());

    // Results
    t.insert("result.success".into(), "Besoins \u{00E9}nerg\u{00E9}tiques calcul\u{00E9}s avec succ\u{00E8}s !".into());
    t.insert("result.title".into(), "Sp\u{00E9}cifications recommand\u{00E9}es :".into());
    t.insert("result.solar".into(), "Panneaux solaires : {value} kW".into());
    t.insert("result.battery".into(), "Parc de batteries : {value} kWh".into());
    t.insert("result.inverter".into(), "Onduleur : {value} kW".into());

    // Errors
    t.insert("error.failure".into(), "\u{00C9}chec du calcul des besoins".into());
    t.insert("error.no_appliances".into(), "Veuillez ajouter au moins un appareil".into());

    // Validation
    t.insert("validation.name_required".into(), "Veuillez saisir un nom d'appareil".into());
    t.insert("validation.watts_positive".into(), "La puissance (watts) doit \u{00EA}tre sup\u{00E9}rieure \u{00E0} z\u{00E9}ro".into());
    t.insert("validation.hours_positive".into(), "Les heures par jour doivent \u{00EA}tre sup\u{00E9}rieures \u{00E0} z\u{00E9}ro".into());
    t.insert("validation.sun_hours_positive".into(), "Les heures d'ensoleillement doivent \u{00EA}tre sup\u{00E9}rieures \u{00E0} z\u{00E9}ro".into());
    t.insert("validation.backup_days_positive".into(), "Les jours d'autonomie doivent \u{00EA}tre sup\u{00E9}rieurs \u{00E0} z\u{00E9}ro".into());
    t.insert("validation.efficiency_range".into(), "Le rendement doit \u{00EA}tre compris entre 0 et 1".into());

    t
}
