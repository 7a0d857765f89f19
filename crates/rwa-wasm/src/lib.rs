//! WASM bindings for RWA Studio.
//!
//! Exposes `highlight()`, `renderHtml()`, `generateContract()` and
//! `version()` to JavaScript via wasm-bindgen. Segment and snapshot data
//! cross the boundary as plain JS objects.

use rwa_codegen::{CodegenError, ContractConfig, SnapshotItem, Theme};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Largest integer a JS number holds exactly (`Number.MAX_SAFE_INTEGER`).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Result of `generateContract()`.
#[derive(Debug, Serialize)]
struct GeneratedContract {
    source: String,
    /// Literals that differ from the default configuration.
    changed: Vec<String>,
    snapshot: Vec<SnapshotItem>,
    checklist: Vec<String>,
}

/// Classify `source` and flag segments containing any of `active`.
///
/// Returns an array of
/// `{ kind, text, span: { start, end, line, column }, isActiveHighlight }`.
/// Non-string entries of `active` are ignored.
#[wasm_bindgen]
pub fn highlight(source: &str, active: &js_sys::Array) -> Result<JsValue, JsError> {
    let active = strings(active);
    let segments = rwa_highlight::highlight(source, &active);
    to_js(&segments)
}

/// Highlight `source` and render it to HTML with the default theme.
#[wasm_bindgen(js_name = renderHtml)]
pub fn render_html(source: &str, active: &js_sys::Array) -> String {
    let active = strings(active);
    rwa_codegen::html::render_source(source, &active, &Theme::default())
}

/// Generate the contract source for the given parameters.
///
/// Returns `{ source, changed, snapshot, checklist }`. Throws if a parameter
/// is invalid, including numbers that are fractional, negative or too large
/// to be represented exactly.
#[wasm_bindgen(js_name = generateContract)]
pub fn generate_contract(
    asset_name: &str,
    coupon_bps: f64,
    max_supply: f64,
    admin: &str,
    governance_model: &str,
    governance_notes: &str,
) -> Result<JsValue, JsError> {
    let config = ContractConfig {
        asset_name: asset_name.to_string(),
        coupon_bps: integer_param("couponBps", coupon_bps).map_err(|e| JsError::new(&e))?,
        max_supply: integer_param("maxSupply", max_supply).map_err(|e| JsError::new(&e))?,
        admin: admin.to_string(),
        governance_model: governance_model.to_string(),
        governance_notes: governance_notes.to_string(),
    };
    let generated = native_generate(&config).map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&generated)
}

/// Get the package version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn native_generate(config: &ContractConfig) -> Result<GeneratedContract, CodegenError> {
    let source = rwa_codegen::generate(config)?;
    Ok(GeneratedContract {
        source,
        changed: rwa_codegen::changed_values(&ContractConfig::default(), config),
        snapshot: config.snapshot(),
        checklist: config.governance_checklist(),
    })
}

/// Convert a JS number to `u64` without wrapping or rounding.
fn integer_param(name: &str, value: f64) -> Result<u64, String> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(format!("{name} must be a whole number, got {value}"));
    }
    if value < 0.0 {
        return Err(format!("{name} must not be negative, got {value}"));
    }
    if value > MAX_SAFE_INTEGER {
        return Err(format!("{name} exceeds {MAX_SAFE_INTEGER}, got {value}"));
    }
    // Whole, non-negative and at most 2^53 - 1, so the cast is exact
    Ok(value as u64)
}

fn strings(array: &js_sys::Array) -> Vec<String> {
    array.iter().filter_map(|v| v.as_string()).collect()
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| JsError::new(&e.to_string()))
}
