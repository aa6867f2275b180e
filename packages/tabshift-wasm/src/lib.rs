use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct BindingError {
    message: String,
}

fn error_json(message: impl std::fmt::Display) -> String {
    let error = BindingError {
        message: message.to_string(),
    };
    serde_json::to_string(&error).unwrap_or_else(|_| error.message)
}

fn error_to_js(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error_json(message))
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Ignore the error if a logger was already installed by another module
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Transpose every [ch]...[/ch] chord in a tab sheet
#[wasm_bindgen]
pub fn transpose(source: &str, semitones: i32, use_flats: bool) -> String {
    tabshift::transpose(source, i64::from(semitones), use_flats)
}

/// Transpose a single bare chord symbol such as "D/F#"
#[wasm_bindgen]
pub fn transpose_chord(chord: &str, semitones: i32, use_flats: bool) -> String {
    tabshift::transpose_chord(chord, i64::from(semitones), use_flats)
}

/// Transpose using the settings stored on a song or session document,
/// e.g. `{"transpose": -2, "useFlats": true}`
#[wasm_bindgen]
pub fn transpose_with_settings(source: &str, settings_json: &str) -> Result<String, JsValue> {
    let settings = tabshift::TransposeSettings::from_json(settings_json).map_err(error_to_js)?;
    Ok(settings.apply(source))
}

/// Display label for the stored offset: "+2", "-3", "0"
#[wasm_bindgen]
pub fn settings_label(settings_json: &str) -> Result<String, JsValue> {
    let settings = tabshift::TransposeSettings::from_json(settings_json).map_err(error_to_js)?;
    Ok(settings.label())
}

/// Split a tab sheet into display lines of text and chord segments
#[wasm_bindgen]
pub fn render_lines(source: &str) -> Result<JsValue, JsValue> {
    let lines = tabshift::render_lines(source);
    serde_wasm_bindgen::to_value(&lines).map_err(error_to_js)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_widens_offset() {
        assert_eq!(transpose("[ch]C[/ch]", -1, false), "[ch]B[/ch]");
        assert_eq!(
            transpose("[ch]C[/ch]", i32::MIN, false),
            tabshift::transpose("[ch]C[/ch]", i64::from(i32::MIN), false)
        );
    }

    #[test]
    fn test_transpose_chord() {
        assert_eq!(transpose_chord("D/F#", 1, true), "Eb/G");
    }

    #[test]
    fn test_errors_share_json_shape() {
        let settings_error = tabshift::TransposeSettings::from_json("{").unwrap_err();
        let json: serde_json::Value = serde_json::from_str(&error_json(settings_error)).unwrap();
        assert!(json["message"].as_str().unwrap().starts_with("Invalid settings"));

        let json: serde_json::Value =
            serde_json::from_str(&error_json("cannot serialize")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "cannot serialize" }));
    }
}
