//! Fusión shallow de payloads JSON.
//!
//! Las claves de `top` reemplazan a las de `base`; no hay deep-merge. Es la
//! precedencia que usa el snapshot: la metadata del wizard siempre gana a las
//! claves del payload del step.

use serde_json::{Map, Value};

/// Copia de `base` con las claves de `top` sobreescritas encima.
pub fn overlay(base: &Map<String, Value>, top: Map<String, Value>) -> Map<String, Value> {
    let mut out = base.clone();
    for (k, v) in top {
        out.insert(k, v);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn top_keys_win_without_deep_merge() {
        let base = object(json!({"x": 1, "nested": {"a": 1}, "keep": true}));
        let top = object(json!({"x": 2, "nested": "flat"}));
        let out = overlay(&base, top);
        assert_eq!(Value::Object(out), json!({"x": 2, "nested": "flat", "keep": true}));
    }

    #[test]
    fn base_is_left_untouched() {
        let base = object(json!({"x": 1}));
        let _ = overlay(&base, object(json!({"x": 2})));
        assert_eq!(base["x"], json!(1));
    }
}
