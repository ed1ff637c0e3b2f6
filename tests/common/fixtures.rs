use serde_json::{Map, Value, json};

/// A theme that changes nothing.
pub fn empty_theme() -> Value {
    json!({})
}

/// A theme overriding every length setting.
pub fn spacious_theme() -> Value {
    json!({
        "space": "2rem",
        "gridMin": "20rem",
        "measure": "65ch",
        "gutter": "1.5rem"
    })
}

/// A theme restricted to the given presets.
pub fn theme_with_presets(presets: &[&str]) -> Value {
    json!({ "presets": presets })
}

/// A theme adding or replacing one fluid context.
pub fn theme_with_fluid(
    name: &str,
    min_size: f64,
    max_size: f64,
    min_screen: f64,
    max_screen: f64,
) -> Value {
    let mut fluid = Map::new();
    fluid.insert(
        name.to_string(),
        json!({
            "minSize": min_size,
            "maxSize": max_size,
            "minScreen": min_screen,
            "maxScreen": max_screen
        }),
    );
    json!({ "fluid": fluid })
}
