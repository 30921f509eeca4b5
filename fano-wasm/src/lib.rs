//! WASM bindings for the silicon photoionization cross-sections.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p fano-wasm
//! ```
//!
//! Energies are plain arrays in the unit named by `unit` (`"eV"`, `"keV"`,
//! `"nm"`, `"Hz"`, ...). Results are in barn.

use wasm_bindgen::prelude::*;

use fano::{Quantity, Shell, Subshell, Unit};

fn to_js(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

fn quantity(energies: &[f64], unit: &str) -> Result<Quantity<Vec<f64>>, JsError> {
    let unit: Unit = unit.parse().map_err(to_js)?;
    Ok(Quantity::new(energies.to_vec(), unit))
}

fn subshell_area(subshell: Subshell, energies: &[f64], unit: &str) -> Result<Vec<f64>, JsError> {
    let q = quantity(energies, unit)?;
    fano::evaluate(subshell, &q)
        .map(Quantity::into_value)
        .map_err(to_js)
}

// ── Subshells ──

/// Cross-section (barn) of the subshell named by `subshell` ("K1" .. "M3").
#[wasm_bindgen]
pub fn evaluate(subshell: &str, energies: &[f64], unit: &str) -> Result<Vec<f64>, JsError> {
    let subshell: Subshell = subshell.parse().map_err(to_js)?;
    subshell_area(subshell, energies, unit)
}

#[wasm_bindgen]
pub fn evaluate_k1(energies: &[f64], unit: &str) -> Result<Vec<f64>, JsError> {
    subshell_area(Subshell::K1, energies, unit)
}

#[wasm_bindgen]
pub fn evaluate_l1(energies: &[f64], unit: &str) -> Result<Vec<f64>, JsError> {
    subshell_area(Subshell::L1, energies, unit)
}

#[wasm_bindgen]
pub fn evaluate_l2(energies: &[f64], unit: &str) -> Result<Vec<f64>, JsError> {
    subshell_area(Subshell::L2, energies, unit)
}

#[wasm_bindgen]
pub fn evaluate_l3(energies: &[f64], unit: &str) -> Result<Vec<f64>, JsError> {
    subshell_area(Subshell::L3, energies, unit)
}

#[wasm_bindgen]
pub fn evaluate_m1(energies: &[f64], unit: &str) -> Result<Vec<f64>, JsError> {
    subshell_area(Subshell::M1, energies, unit)
}

#[wasm_bindgen]
pub fn evaluate_m2(energies: &[f64], unit: &str) -> Result<Vec<f64>, JsError> {
    subshell_area(Subshell::M2, energies, unit)
}

#[wasm_bindgen]
pub fn evaluate_m3(energies: &[f64], unit: &str) -> Result<Vec<f64>, JsError> {
    subshell_area(Subshell::M3, energies, unit)
}

// ── Aggregates ──

/// Sum over the subshells of `shell` ("K", "L" or "M").
#[wasm_bindgen]
pub fn evaluate_shell(shell: &str, energies: &[f64], unit: &str) -> Result<Vec<f64>, JsError> {
    let shell: Shell = shell.parse().map_err(to_js)?;
    let q = quantity(energies, unit)?;
    fano::evaluate_shell(shell, &q)
        .map(Quantity::into_value)
        .map_err(to_js)
}

/// Total photoionization cross-section (barn).
#[wasm_bindgen]
pub fn evaluate_total(energies: &[f64], unit: &str) -> Result<Vec<f64>, JsError> {
    let q = quantity(energies, unit)?;
    fano::evaluate_total(&q)
        .map(Quantity::into_value)
        .map_err(to_js)
}

// ── Metadata ──

/// Labels of the seven subshells, in K1 .. M3 order.
#[wasm_bindgen]
pub fn subshell_labels() -> js_sys::Array {
    Subshell::ALL
        .iter()
        .map(|s| JsValue::from_str(s.label()))
        .collect()
}

/// Binding energy (eV) of a subshell.
#[wasm_bindgen]
pub fn binding_energy(subshell: &str) -> Result<f64, JsError> {
    let subshell: Subshell = subshell.parse().map_err(to_js)?;
    let ds = fano::dataset().map_err(to_js)?;
    Ok(ds.table(subshell).binding_energy())
}
