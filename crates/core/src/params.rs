//! Infallible typed lookups into a JSON parameter object.
//!
//! A missing key, a wrong type or an out-of-domain value yields the supplied
//! default. Tuning a decorative effect should never fail the host.

use crate::color::Rgba;
use serde_json::Value;

/// `params[name]` as f64 (integers accepted), else `default`.
pub fn param_f64(params: &Value, name: &str, default: f64) -> f64 {
    params
        .get(name)
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

/// Like [`param_f64`], but values `<= 0` also fall back to `default`.
pub fn param_positive_f64(params: &Value, name: &str, default: f64) -> f64 {
    let v = param_f64(params, name, default);
    if v > 0.0 {
        v
    } else {
        default
    }
}

/// `params[name]` as a string, else `default`.
pub fn param_string(params: &Value, name: &str, default: &str) -> String {
    params
        .get(name)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_else(|| default.to_owned())
}

/// `params[name]` parsed with [`Rgba::parse`], else `default`.
pub fn param_color(params: &Value, name: &str, default: Rgba) -> Rgba {
    params
        .get(name)
        .and_then(Value::as_str)
        .and_then(|s| Rgba::parse(s).ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn param_f64_reads_floats_and_integers() {
        let params = json!({"wind": 0.08, "radius": 200});
        assert_eq!(param_f64(&params, "wind", 0.04), 0.08);
        assert_eq!(param_f64(&params, "radius", 180.0), 200.0);
    }

    #[test]
    fn param_f64_falls_back_on_missing_or_wrong_type() {
        let params = json!({"wind": "strong", "radius": null});
        assert_eq!(param_f64(&params, "wind", 0.04), 0.04);
        assert_eq!(param_f64(&params, "radius", 180.0), 180.0);
        assert_eq!(param_f64(&params, "absent", 1.5), 1.5);
        assert_eq!(param_f64(&json!([1, 2]), "wind", 0.04), 0.04);
    }

    #[test]
    fn param_positive_f64_rejects_zero_and_negative() {
        let params = json!({"a": 0, "b": -5.0, "c": 3.0});
        assert_eq!(param_positive_f64(&params, "a", 14000.0), 14000.0);
        assert_eq!(param_positive_f64(&params, "b", 14000.0), 14000.0);
        assert_eq!(param_positive_f64(&params, "c", 14000.0), 3.0);
    }

    #[test]
    fn param_string_reads_or_defaults() {
        let params = json!({"palette": "ember", "n": 4});
        assert_eq!(param_string(&params, "palette", "cobalt"), "ember");
        assert_eq!(param_string(&params, "n", "cobalt"), "cobalt");
    }

    #[test]
    fn param_color_parses_or_defaults() {
        let fallback = Rgba::opaque(3, 3, 3);
        let params = json!({"good": "rgba(1, 2, 3, 0.5)", "bad": "rgba(", "num": 7});
        assert_eq!(param_color(&params, "good", fallback), Rgba::new(1, 2, 3, 0.5));
        assert_eq!(param_color(&params, "bad", fallback), fallback);
        assert_eq!(param_color(&params, "num", fallback), fallback);
    }
}
