use thiserror::Error;

use crate::subshell::Subshell;
use crate::units::{Dimension, Unit};

/// The embedded reference tables could not be turned into a usable dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataLoadError {
    #[error("failed to decompress reference data: {0}")]
    Decompress(String),
    #[error("failed to decode reference data: {0}")]
    Decode(String),
    #[error("reference data has no section for subshell {0}")]
    MissingSubshell(Subshell),
    #[error("reference data has more than one section for subshell {0}")]
    DuplicateSubshell(Subshell),
    #[error("subshell {subshell}: {energies} energies but {areas} cross-sections")]
    LengthMismatch {
        subshell: Subshell,
        energies: usize,
        areas: usize,
    },
    #[error("subshell {subshell}: table has {len} point(s), at least 2 are required")]
    TooFewPoints { subshell: Subshell, len: usize },
    #[error(
        "subshell {subshell}: energies not strictly increasing at index {index} \
         ({previous} eV then {next} eV)"
    )]
    NotIncreasing {
        subshell: Subshell,
        index: usize,
        previous: f64,
        next: f64,
    },
    #[error("subshell {subshell}: invalid {field} {value} at index {index}")]
    InvalidValue {
        subshell: Subshell,
        index: usize,
        field: &'static str,
        value: f64,
    },
}

/// A quantity could not be expressed in the requested unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitConversionError {
    #[error("unit '{unit}' ({dimension}) has no spectral equivalent in energy")]
    NotSpectral { unit: Unit, dimension: Dimension },
    #[error("cannot convert '{from}' to '{to}'")]
    Incompatible { from: Unit, to: Unit },
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown subshell: {0}")]
pub struct ParseSubshellError(pub String);

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FanoError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),
    #[error(transparent)]
    UnitConversion(#[from] UnitConversionError),
}

pub type Result<T> = std::result::Result<T, FanoError>;
