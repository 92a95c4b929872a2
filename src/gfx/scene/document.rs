//! # Document Helpers
//!
//! Reading and writing the JSON blocks shared by every object document.
//!
//! Reads are lenient on purpose: a field that is missing, or whose value
//! cannot be coerced to the wanted type, leaves the target untouched. Numbers
//! are accepted from JSON numbers, booleans (`true` = 1) and numeric strings.

use cgmath::{Vector2, Vector3};
use serde_json::{json, Value};

use super::material::Color;

/// Best-effort numeric view of a JSON value
pub fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Best-effort boolean view of a JSON value
pub fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Overwrite `target` with `block[key]` if present and numeric
pub fn read_f32(block: &Value, key: &str, target: &mut f32) -> bool {
    match block.get(key).and_then(coerce_f64) {
        Some(v) => {
            *target = v as f32;
            true
        }
        None => false,
    }
}

/// Like [`read_f32`] for counts. Fractions are rounded, negatives become 0.
pub fn read_u32(block: &Value, key: &str, target: &mut u32) -> bool {
    match block.get(key).and_then(coerce_f64) {
        Some(v) if v.is_finite() => {
            *target = v.round().clamp(0.0, u32::MAX as f64) as u32;
            true
        }
        _ => false,
    }
}

pub fn read_bool(block: &Value, key: &str, target: &mut bool) -> bool {
    match block.get(key).and_then(coerce_bool) {
        Some(v) => {
            *target = v;
            true
        }
        None => false,
    }
}

/// Read an `{x, y, z}` block component by component
pub fn read_vec3(block: &Value, key: &str, target: &mut Vector3<f32>) -> bool {
    let Some(v) = block.get(key).filter(|v| v.is_object()) else {
        return false;
    };
    read_f32(v, "x", &mut target.x);
    read_f32(v, "y", &mut target.y);
    read_f32(v, "z", &mut target.z);
    true
}

/// Read an `{r, g, b, a}` block; channels are rounded and clamped to 0-255
pub fn read_color(block: &Value, key: &str, target: &mut Color) -> bool {
    let Some(v) = block.get(key).filter(|v| v.is_object()) else {
        return false;
    };
    for (channel, slot) in [
        ("r", &mut target.r),
        ("g", &mut target.g),
        ("b", &mut target.b),
        ("a", &mut target.a),
    ] {
        if let Some(c) = v.get(channel).and_then(coerce_f64) {
            *slot = c.round().clamp(0.0, 255.0) as u8;
        }
    }
    true
}

/// Read an `{x, z}` point of a polygon in the ground plane
pub fn read_point_xz(value: &Value) -> Option<Vector2<f32>> {
    if !value.is_object() {
        return None;
    }
    let mut point = Vector2::new(0.0, 0.0);
    read_f32(value, "x", &mut point.x);
    read_f32(value, "z", &mut point.y);
    Some(point)
}

pub fn vec3_document(v: Vector3<f32>) -> Value {
    json!({ "x": v.x, "y": v.y, "z": v.z })
}

pub fn color_document(c: Color) -> Value {
    json!({ "r": c.r, "g": c.g, "b": c.b, "a": c.a })
}

pub fn point_xz_document(p: Vector2<f32>) -> Value {
    json!({ "x": p.x, "z": p.y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(coerce_f64(&json!(0.25)), Some(0.25));
        assert_eq!(coerce_f64(&json!(true)), Some(1.0));
        assert_eq!(coerce_f64(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(coerce_f64(&json!("abc")), None);
        assert_eq!(coerce_f64(&Value::Null), None);
    }

    #[test]
    fn test_missing_fields_keep_prior_value() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert!(read_vec3(&json!({ "p": { "y": 9 } }), "p", &mut v));
        assert_eq!(v, Vector3::new(1.0, 9.0, 3.0));

        assert!(!read_vec3(&json!({}), "p", &mut v));
        assert!(!read_vec3(&json!({ "p": 4 }), "p", &mut v));
        assert_eq!(v, Vector3::new(1.0, 9.0, 3.0));

        let mut f = 7.0;
        assert!(!read_f32(&json!({ "k": [1] }), "k", &mut f));
        assert_eq!(f, 7.0);
    }

    #[test]
    fn test_color_channels_clamped() {
        let mut c = Color::rgba(1, 2, 3, 4);
        read_color(&json!({ "c": { "r": 300, "g": -5, "b": 127.6 } }), "c", &mut c);
        assert_eq!(c, Color::rgba(255, 0, 128, 4));
    }

    #[test]
    fn test_counts() {
        let mut n = 5;
        assert!(read_u32(&json!({ "n": 12.4 }), "n", &mut n));
        assert_eq!(n, 12);
        assert!(read_u32(&json!({ "n": -3 }), "n", &mut n));
        assert_eq!(n, 0);
    }

    #[test]
    fn test_bool_coercion() {
        let mut b = false;
        assert!(read_bool(&json!({ "b": 1 }), "b", &mut b));
        assert!(b);
        assert!(!read_bool(&json!({ "b": "maybe" }), "b", &mut b));
        assert!(b);
    }
}
