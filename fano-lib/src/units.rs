use std::fmt;
use std::str::FromStr;

use crate::constants::{BARN, ELEMENTARY_CHARGE, PLANCK_EV, PLANCK_HC};
use crate::error::UnitConversionError;

/// Physical dimension of a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Energy,
    Length,
    Frequency,
    Area,
    Time,
    Mass,
}

impl Dimension {
    /// Whether a photon quantity of this dimension maps onto an energy.
    pub const fn is_spectral(self) -> bool {
        matches!(
            self,
            Dimension::Energy | Dimension::Length | Dimension::Frequency
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dimension::Energy => "energy",
            Dimension::Length => "length",
            Dimension::Frequency => "frequency",
            Dimension::Area => "area",
            Dimension::Time => "time",
            Dimension::Mass => "mass",
        })
    }
}

/// Units accepted by the evaluation API.
///
/// Only the conversions needed here are supported: any energy, wavelength
/// or frequency unit to any other through `E = h·c/λ = h·f`, and area units
/// among themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    ElectronVolt,
    KiloElectronVolt,
    MegaElectronVolt,
    Joule,
    Erg,
    Meter,
    Centimeter,
    Millimeter,
    Micrometer,
    Nanometer,
    Angstrom,
    Hertz,
    Kilohertz,
    Megahertz,
    Gigahertz,
    Terahertz,
    Petahertz,
    Barn,
    Millibarn,
    SquareMeter,
    SquareCentimeter,
    Second,
    Kilogram,
}

const UNIT_SYMBOLS: &[(Unit, &str)] = &[
    (Unit::ElectronVolt, "eV"),
    (Unit::KiloElectronVolt, "keV"),
    (Unit::MegaElectronVolt, "MeV"),
    (Unit::Joule, "J"),
    (Unit::Erg, "erg"),
    (Unit::Meter, "m"),
    (Unit::Centimeter, "cm"),
    (Unit::Millimeter, "mm"),
    (Unit::Micrometer, "um"),
    (Unit::Nanometer, "nm"),
    (Unit::Angstrom, "Angstrom"),
    (Unit::Hertz, "Hz"),
    (Unit::Kilohertz, "kHz"),
    (Unit::Megahertz, "MHz"),
    (Unit::Gigahertz, "GHz"),
    (Unit::Terahertz, "THz"),
    (Unit::Petahertz, "PHz"),
    (Unit::Barn, "barn"),
    (Unit::Millibarn, "mbarn"),
    (Unit::SquareMeter, "m2"),
    (Unit::SquareCentimeter, "cm2"),
    (Unit::Second, "s"),
    (Unit::Kilogram, "kg"),
];

impl Unit {
    pub const fn dimension(self) -> Dimension {
        use Unit::*;
        match self {
            ElectronVolt | KiloElectronVolt | MegaElectronVolt | Joule | Erg => Dimension::Energy,
            Meter | Centimeter | Millimeter | Micrometer | Nanometer | Angstrom => {
                Dimension::Length
            }
            Hertz | Kilohertz | Megahertz | Gigahertz | Terahertz | Petahertz => {
                Dimension::Frequency
            }
            Barn | Millibarn | SquareMeter | SquareCentimeter => Dimension::Area,
            Second => Dimension::Time,
            Kilogram => Dimension::Mass,
        }
    }

    pub fn symbol(self) -> &'static str {
        UNIT_SYMBOLS
            .iter()
            .find(|(unit, _)| *unit == self)
            .map(|(_, sym)| *sym)
            .unwrap_or("?")
    }

    /// Size of one unit in the SI base of its dimension (J, m, Hz, m², s, kg).
    const fn si_factor(self) -> f64 {
        use Unit::*;
        match self {
            ElectronVolt => ELEMENTARY_CHARGE,
            KiloElectronVolt => 1e3 * ELEMENTARY_CHARGE,
            MegaElectronVolt => 1e6 * ELEMENTARY_CHARGE,
            Joule => 1.0,
            Erg => 1e-7,
            Meter => 1.0,
            Centimeter => 1e-2,
            Millimeter => 1e-3,
            Micrometer => 1e-6,
            Nanometer => 1e-9,
            Angstrom => 1e-10,
            Hertz => 1.0,
            Kilohertz => 1e3,
            Megahertz => 1e6,
            Gigahertz => 1e9,
            Terahertz => 1e12,
            Petahertz => 1e15,
            Barn => BARN,
            Millibarn => 1e-3 * BARN,
            SquareMeter => 1.0,
            SquareCentimeter => 1e-4,
            Second => 1.0,
            Kilogram => 1.0,
        }
    }

    /// Elementwise map from values in this unit to photon energies in eV.
    pub fn spectral_scale(self) -> Result<SpectralScale, UnitConversionError> {
        let factor = self.si_factor();
        match self.dimension() {
            Dimension::Energy if self == Unit::ElectronVolt => Ok(SpectralScale::Identity),
            Dimension::Energy => Ok(SpectralScale::Linear(factor / ELEMENTARY_CHARGE)),
            Dimension::Frequency => Ok(SpectralScale::Linear(PLANCK_EV * factor)),
            Dimension::Length => Ok(SpectralScale::Inverse(PLANCK_HC / factor)),
            dimension => Err(UnitConversionError::NotSpectral {
                unit: self,
                dimension,
            }),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = UnitConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let alias = match s {
            "µm" | "micron" => Some(Unit::Micrometer),
            "Å" | "AA" | "angstrom" => Some(Unit::Angstrom),
            "b" => Some(Unit::Barn),
            "mb" => Some(Unit::Millibarn),
            "m^2" => Some(Unit::SquareMeter),
            "cm^2" => Some(Unit::SquareCentimeter),
            _ => None,
        };
        alias
            .or_else(|| {
                UNIT_SYMBOLS
                    .iter()
                    .find(|(_, sym)| *sym == s)
                    .map(|(unit, _)| *unit)
            })
            .ok_or_else(|| UnitConversionError::UnknownUnit(s.to_string()))
    }
}

/// Conversion of a spectral value to photon energy in eV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpectralScale {
    Identity,
    /// `E = k·x` (energies and frequencies).
    Linear(f64),
    /// `E = k/x` (wavelengths).
    Inverse(f64),
}

impl SpectralScale {
    #[inline]
    pub fn to_ev(self, x: f64) -> f64 {
        match self {
            SpectralScale::Identity => x,
            SpectralScale::Linear(k) => k * x,
            SpectralScale::Inverse(k) => k / x,
        }
    }

    #[inline]
    pub fn from_ev(self, e: f64) -> f64 {
        match self {
            SpectralScale::Identity => e,
            SpectralScale::Linear(k) => e / k,
            SpectralScale::Inverse(k) => k / e,
        }
    }
}

/// Numeric payload of a [`Quantity`]: a scalar, a flat array of values or an
/// n-dimensional `ndarray` array.
///
/// Mapping preserves the shape, so a scalar query yields a scalar result and
/// an array query an array of the same shape.
pub trait Magnitude: Clone {
    fn map(&self, f: impl FnMut(f64) -> f64) -> Self;
}

impl Magnitude for f64 {
    fn map(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        f(*self)
    }
}

impl Magnitude for Vec<f64> {
    fn map(&self, f: impl FnMut(f64) -> f64) -> Self {
        self.iter().copied().map(f).collect()
    }
}

impl<const N: usize> Magnitude for [f64; N] {
    fn map(&self, f: impl FnMut(f64) -> f64) -> Self {
        (*self).map(f)
    }
}

impl<D: ndarray::Dimension> Magnitude for ndarray::Array<f64, D> {
    fn map(&self, f: impl FnMut(f64) -> f64) -> Self {
        self.mapv(f)
    }
}

/// A value tagged with a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity<V> {
    value: V,
    unit: Unit,
}

impl<V: Magnitude> Quantity<V> {
    pub fn new(value: V, unit: Unit) -> Self {
        Quantity { value, unit }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn into_value(self) -> V {
        self.value
    }

    /// Numeric value expressed in `unit`.
    ///
    /// Spectral units convert among each other through the photon energy;
    /// area units only convert to other area units.
    pub fn to_value(&self, unit: Unit) -> Result<V, UnitConversionError> {
        if unit == self.unit {
            return Ok(self.value.clone());
        }
        let (from_dim, to_dim) = (self.unit.dimension(), unit.dimension());
        if from_dim.is_spectral() && to_dim.is_spectral() {
            let from = self.unit.spectral_scale()?;
            let to = unit.spectral_scale()?;
            return Ok(self.value.map(|x| to.from_ev(from.to_ev(x))));
        }
        if from_dim == Dimension::Area && to_dim == Dimension::Area {
            let ratio = self.unit.si_factor() / unit.si_factor();
            return Ok(self.value.map(|x| x * ratio));
        }
        Err(UnitConversionError::Incompatible {
            from: self.unit,
            to: unit,
        })
    }

    /// Same quantity expressed in `unit`.
    pub fn to(&self, unit: Unit) -> Result<Self, UnitConversionError> {
        Ok(Quantity::new(self.to_value(unit)?, unit))
    }

    /// Photon energies in eV, the canonical scale of the reference tables.
    pub fn to_ev(&self) -> Result<V, UnitConversionError> {
        let scale = self.unit.spectral_scale()?;
        Ok(self.value.map(|x| scale.to_ev(x)))
    }
}

impl<V: Magnitude + fmt::Display> fmt::Display for Quantity<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
