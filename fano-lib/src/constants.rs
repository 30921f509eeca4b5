/// Planck's constant (J·s), exact since the 2019 SI redefinition.
pub const PLANCK: f64 = 6.626_070_15e-34;

/// Speed of light in vacuum (m/s)
pub const SPEED_OF_LIGHT: f64 = 299_792_458.0;

/// Elementary charge (C), i.e. joules per electronvolt.
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Planck's constant in eV·s
pub const PLANCK_EV: f64 = PLANCK / ELEMENTARY_CHARGE;

/// Planck's constant times speed of light (eV·m)
pub const PLANCK_HC: f64 = PLANCK * SPEED_OF_LIGHT / ELEMENTARY_CHARGE;

/// One barn in m²
pub const BARN: f64 = 1e-28;
