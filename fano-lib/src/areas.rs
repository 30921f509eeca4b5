//! Photoionization cross-sectional areas of the silicon subshells.
//!
//! Every function accepts a photon energy, wavelength or frequency and
//! returns areas in barn with the shape of the input.
//!
//! ```
//! use fano::{Quantity, Unit};
//!
//! let energy = Quantity::new(vec![10.0, 100.0, 1000.0, 10000.0], Unit::ElectronVolt);
//! let k1 = fano::evaluate_k1(&energy).unwrap();
//! let total = fano::evaluate_total(&energy).unwrap();
//! assert_eq!(total.unit(), Unit::Barn);
//! assert_eq!(total.value().len(), 4);
//! assert!(total.value()[3] >= k1.value()[3]);
//! ```

use crate::db::{ReferenceDataset, dataset};
use crate::error::Result;
use crate::subshell::{Shell, Subshell};
use crate::units::{Magnitude, Quantity, Unit};

impl ReferenceDataset {
    /// Cross-section of `subshell` for photons of the given energy-like quantity.
    pub fn evaluate<V: Magnitude>(
        &self,
        subshell: Subshell,
        energy: &Quantity<V>,
    ) -> Result<Quantity<V>> {
        let scale = energy.unit().spectral_scale()?;
        let table = self.table(subshell);
        let area = energy.value().map(|x| table.interpolate(scale.to_ev(x)));
        Ok(Quantity::new(area, Unit::Barn))
    }

    /// Sum of the cross-sections of the subshells in `shell`.
    pub fn evaluate_shell<V: Magnitude>(
        &self,
        shell: Shell,
        energy: &Quantity<V>,
    ) -> Result<Quantity<V>> {
        let scale = energy.unit().spectral_scale()?;
        let area = energy
            .value()
            .map(|x| self.shell_area(shell, scale.to_ev(x)));
        Ok(Quantity::new(area, Unit::Barn))
    }

    /// Total photoionization cross-section, summed over all seven subshells.
    pub fn evaluate_total<V: Magnitude>(&self, energy: &Quantity<V>) -> Result<Quantity<V>> {
        let scale = energy.unit().spectral_scale()?;
        let area = energy.value().map(|x| self.total_area(scale.to_ev(x)));
        Ok(Quantity::new(area, Unit::Barn))
    }
}

/// Photoionization cross-section of `subshell` using the embedded dataset.
pub fn evaluate<V: Magnitude>(subshell: Subshell, energy: &Quantity<V>) -> Result<Quantity<V>> {
    dataset()?.evaluate(subshell, energy)
}

/// Photoionization cross-section of the K1 subshell.
pub fn evaluate_k1<V: Magnitude>(energy: &Quantity<V>) -> Result<Quantity<V>> {
    evaluate(Subshell::K1, energy)
}

/// Photoionization cross-section of the L1 subshell.
pub fn evaluate_l1<V: Magnitude>(energy: &Quantity<V>) -> Result<Quantity<V>> {
    evaluate(Subshell::L1, energy)
}

/// Photoionization cross-section of the L2 subshell.
pub fn evaluate_l2<V: Magnitude>(energy: &Quantity<V>) -> Result<Quantity<V>> {
    evaluate(Subshell::L2, energy)
}

/// Photoionization cross-section of the L3 subshell.
pub fn evaluate_l3<V: Magnitude>(energy: &Quantity<V>) -> Result<Quantity<V>> {
    evaluate(Subshell::L3, energy)
}

/// Photoionization cross-section of the M1 subshell.
pub fn evaluate_m1<V: Magnitude>(energy: &Quantity<V>) -> Result<Quantity<V>> {
    evaluate(Subshell::M1, energy)
}

/// Photoionization cross-section of the M2 subshell.
pub fn evaluate_m2<V: Magnitude>(energy: &Quantity<V>) -> Result<Quantity<V>> {
    evaluate(Subshell::M2, energy)
}

/// Photoionization cross-section of the M3 subshell.
pub fn evaluate_m3<V: Magnitude>(energy: &Quantity<V>) -> Result<Quantity<V>> {
    evaluate(Subshell::M3, energy)
}

/// Combined cross-section of the subshells of one shell.
pub fn evaluate_shell<V: Magnitude>(shell: Shell, energy: &Quantity<V>) -> Result<Quantity<V>> {
    dataset()?.evaluate_shell(shell, energy)
}

/// Total photoionization cross-section of silicon.
///
/// Equal, point by point, to the sum of the seven subshell functions.
pub fn evaluate_total<V: Magnitude>(energy: &Quantity<V>) -> Result<Quantity<V>> {
    dataset()?.evaluate_total(energy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FanoError, UnitConversionError};

    #[test]
    fn test_scalar_in_scalar_out() {
        let q = Quantity::new(2000.0, Unit::ElectronVolt);
        let area: f64 = evaluate_k1(&q).unwrap().into_value();
        assert!(area > 0.0);
    }

    #[test]
    fn test_unit_error_is_reported() {
        let q = Quantity::new(vec![1.0, 2.0], Unit::Barn);
        let err = evaluate_total(&q).unwrap_err();
        assert!(matches!(
            err,
            FanoError::UnitConversion(UnitConversionError::NotSpectral { unit: Unit::Barn, .. })
        ));
    }

    #[test]
    fn test_shell_sums_match_total() {
        let ds = dataset().unwrap();
        for e in [5.0, 50.0, 150.0, 2000.0, 1e6] {
            let by_shell: f64 = Shell::ALL.iter().map(|&s| ds.shell_area(s, e)).sum();
            approx::assert_relative_eq!(by_shell, ds.total_area(e), max_relative = 1e-12);
        }
    }
}
