use fano_data::SubshellRecord;

use crate::error::DataLoadError;
use crate::interp::{interp, interp_one};
use crate::subshell::Subshell;

/// Tabulated photoionization cross-section of one subshell.
///
/// Energies are in eV, strictly increasing, with at least two points;
/// cross-sections are non-negative and in barn. Queries outside the
/// tabulated range take the nearest boundary value.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSectionTable {
    subshell: Subshell,
    binding_energy: f64,
    energy: Vec<f64>,
    area: Vec<f64>,
}

impl CrossSectionTable {
    /// Builds a table, checking the ordering and value invariants.
    ///
    /// The points are taken as given: nothing is sorted or deduplicated.
    pub fn new(
        subshell: Subshell,
        binding_energy: f64,
        energy: Vec<f64>,
        area: Vec<f64>,
    ) -> Result<Self, DataLoadError> {
        if energy.len() != area.len() {
            return Err(DataLoadError::LengthMismatch {
                subshell,
                energies: energy.len(),
                areas: area.len(),
            });
        }
        if energy.len() < 2 {
            return Err(DataLoadError::TooFewPoints {
                subshell,
                len: energy.len(),
            });
        }
        for (index, (&e, &a)) in energy.iter().zip(area.iter()).enumerate() {
            if !e.is_finite() {
                return Err(DataLoadError::InvalidValue {
                    subshell,
                    index,
                    field: "energy",
                    value: e,
                });
            }
            if !a.is_finite() || a < 0.0 {
                return Err(DataLoadError::InvalidValue {
                    subshell,
                    index,
                    field: "cross-section",
                    value: a,
                });
            }
        }
        if let Some(index) = energy.windows(2).position(|w| w[1] <= w[0]) {
            return Err(DataLoadError::NotIncreasing {
                subshell,
                index: index + 1,
                previous: energy[index],
                next: energy[index + 1],
            });
        }

        Ok(CrossSectionTable {
            subshell,
            binding_energy,
            energy,
            area,
        })
    }

    pub(crate) fn from_record(
        subshell: Subshell,
        record: SubshellRecord,
    ) -> Result<Self, DataLoadError> {
        Self::new(
            subshell,
            record.binding_energy,
            record.energy,
            record.cross_section,
        )
    }

    pub fn subshell(&self) -> Subshell {
        self.subshell
    }

    /// Binding energy of the subshell in eV.
    pub fn binding_energy(&self) -> f64 {
        self.binding_energy
    }

    /// Tabulated energies (eV).
    pub fn energies(&self) -> &[f64] {
        &self.energy
    }

    /// Tabulated cross-sections (barn).
    pub fn areas(&self) -> &[f64] {
        &self.area
    }

    pub fn len(&self) -> usize {
        self.energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// Smallest and largest tabulated energies (eV).
    pub fn energy_range(&self) -> (f64, f64) {
        (self.energy[0], self.energy[self.energy.len() - 1])
    }

    /// Cross-section in barn at a photon energy in eV.
    #[inline]
    pub fn interpolate(&self, energy: f64) -> f64 {
        interp_one(energy, &self.energy, &self.area)
    }

    pub fn interpolate_many(&self, energies: &[f64]) -> Vec<f64> {
        interp(energies, &self.energy, &self.area)
    }
}
