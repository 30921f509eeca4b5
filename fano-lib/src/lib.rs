//! Photoionization cross-sections of the silicon subshells K1 through M3.
//!
//! Tabulated reference data is embedded in the library and decoded on first
//! use. Queries accept photon energies, wavelengths or frequencies and return
//! areas in barn with the same shape as the query.
//!
//! The tables shipped in `data/photoionization.bin.zst` are a synthetic
//! stand-in with the real silicon binding energies; [`ReferenceDataset::library`]
//! says so. Build the blob from an evaluated photo-atomic file with
//! `fano-generate` before using the numbers for physics.

pub mod areas;
pub mod constants;
pub mod db;
pub mod error;
pub mod interp;
pub mod subshell;
pub mod table;
pub mod units;

pub use areas::{
    evaluate, evaluate_k1, evaluate_l1, evaluate_l2, evaluate_l3, evaluate_m1, evaluate_m2,
    evaluate_m3, evaluate_shell, evaluate_total,
};
pub use db::{ReferenceDataset, dataset};
pub use error::{DataLoadError, FanoError, ParseSubshellError, Result, UnitConversionError};
pub use fano_data;
pub use subshell::{Shell, Subshell};
pub use table::CrossSectionTable;
pub use units::{Dimension, Magnitude, Quantity, Unit};
