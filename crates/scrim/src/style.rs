//! Inline style resolution.
//!
//! Style overrides are supplied as maps from camel-case property names to
//! values, and resolve to a single inline style string of
//! `"; property-in-kebab-case: value"` pairs. Maps are `BTreeMap`s, so the
//! resolved string lists properties in lexicographic order regardless of how
//! the caller assembled the map.

use std::collections::BTreeMap;

use convert_case::{Case, Casing};
use serde_json::Value;

use crate::{
    error::{Error, Result},
    page::Viewport,
};

/// A map of camel-case style property names to values.
pub type StyleMap = BTreeMap<String, String>;

/// Resolve a style map to an inline style string.
///
/// Returns `None` for an empty map; otherwise each entry contributes a
/// `"; prop: value"` pair with the property name converted to kebab case.
pub fn resolve(styles: &StyleMap) -> Option<String> {
    if styles.is_empty() {
        return None;
    }
    let mut out = String::new();
    for (prop, value) in styles {
        out.push_str("; ");
        out.push_str(&prop.to_case(Case::Kebab));
        out.push_str(": ");
        out.push_str(value);
    }
    Some(out)
}

/// Resolve the background region's style: viewport width and height are
/// merged underneath the caller's overrides, so callers win on collision but
/// the backdrop always covers the viewport by default.
pub fn resolve_background(overrides: Option<&StyleMap>, viewport: Viewport) -> Option<String> {
    let mut merged = StyleMap::new();
    merged.insert("width".into(), format!("{}px", viewport.width));
    merged.insert("height".into(), format!("{}px", viewport.height));
    if let Some(overrides) = overrides {
        for (prop, value) in overrides {
            merged.insert(prop.clone(), value.clone());
        }
    }
    resolve(&merged)
}

/// Build a style map from a JSON object of string (or numeric) values.
///
/// Convenient for callers that ship configuration through serde; non-object
/// input and non-scalar values are rejected.
pub fn map_from_value(value: &Value) -> Result<StyleMap> {
    let Value::Object(entries) = value else {
        return Err(Error::Invalid(format!(
            "style map must be an object, got {value}"
        )));
    };
    let mut map = StyleMap::new();
    for (prop, v) in entries {
        let text = match v {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            other => {
                return Err(Error::Invalid(format!(
                    "style value for {prop} must be a string or number, got {other}"
                )));
            }
        };
        map.insert(prop.clone(), text);
    }
    Ok(map)
}
