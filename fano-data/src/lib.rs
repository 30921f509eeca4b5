#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// The bundled photoionization tables, deserialized from the embedded blob.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoionizationDatabase {
    /// Free-text identification of the source evaluation (ENDF TPID record).
    pub library: String,
    pub material: MaterialRecord,
    pub subshells: Vec<SubshellRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialRecord {
    pub symbol: String,
    pub atomic_number: u16,
    /// ENDF material number (MAT).
    pub mat: u16,
    pub za: f64,
    pub awr: f64,
}

/// One MF=23 section: photoionization cross-section of a single subshell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubshellRecord {
    /// Subshell label (K1, L1, ... M3).
    pub label: String,
    /// ENDF reaction number (534..=540).
    pub mt: u16,
    /// Binding energy in eV.
    pub binding_energy: f64,
    pub fluorescence_yield: f64,
    /// Incident photon energies in eV, ascending.
    pub energy: Vec<f64>,
    /// Cross-section in barn at each energy.
    pub cross_section: Vec<f64>,
}
