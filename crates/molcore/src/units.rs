use crate::constants::{
    ANGSTROM_TO_BOHR, BOHR_TO_ANGSTROM, DEG_TO_RAD, RAD_TO_DEG, UnitConstants,
};
use crate::error::ParseUnitError;
use crate::types::Scalar;
use phf::{Map, phf_map};
use std::fmt;
use std::ops::Mul;
use std::str::FromStr;
use tracing::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Units of length understood by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LengthUnit {
    /// Ångström, the internal length unit of every coordinate.
    #[default]
    Angstrom,
    /// Bohr radius (atomic unit of length).
    Bohr,
}

/// Units of plane angle understood by the toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngleUnit {
    #[default]
    Degree,
    Radian,
}

static LENGTH_UNIT_ALIASES: Map<&'static str, LengthUnit> = phf_map! {
    "angstrom" => LengthUnit::Angstrom,
    "angstroms" => LengthUnit::Angstrom,
    "ang" => LengthUnit::Angstrom,
    "a" => LengthUnit::Angstrom,
    "å" => LengthUnit::Angstrom,
    "bohr" => LengthUnit::Bohr,
    "bohrs" => LengthUnit::Bohr,
    "au" => LengthUnit::Bohr,
    "a0" => LengthUnit::Bohr,
};

static ANGLE_UNIT_ALIASES: Map<&'static str, AngleUnit> = phf_map! {
    "degree" => AngleUnit::Degree,
    "degrees" => AngleUnit::Degree,
    "deg" => AngleUnit::Degree,
    "°" => AngleUnit::Degree,
    "radian" => AngleUnit::Radian,
    "radians" => AngleUnit::Radian,
    "rad" => AngleUnit::Radian,
};

impl LengthUnit {
    pub const ALL: [LengthUnit; 2] = [LengthUnit::Angstrom, LengthUnit::Bohr];

    pub const fn name(self) -> &'static str {
        match self {
            LengthUnit::Angstrom => "angstrom",
            LengthUnit::Bohr => "bohr",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Angstrom => "Å",
            LengthUnit::Bohr => "a0",
        }
    }

    /// Multiplicative factor taking a length in `self` to a length in `to`.
    pub const fn factor_to(self, to: LengthUnit) -> Scalar {
        match (self, to) {
            (LengthUnit::Angstrom, LengthUnit::Bohr) => ANGSTROM_TO_BOHR,
            (LengthUnit::Bohr, LengthUnit::Angstrom) => BOHR_TO_ANGSTROM,
            _ => 1.0,
        }
    }
}

impl AngleUnit {
    pub const ALL: [AngleUnit; 2] = [AngleUnit::Degree, AngleUnit::Radian];

    pub const fn name(self) -> &'static str {
        match self {
            AngleUnit::Degree => "degree",
            AngleUnit::Radian => "radian",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            AngleUnit::Degree => "°",
            AngleUnit::Radian => "rad",
        }
    }

    /// Multiplicative factor taking an angle in `self` to an angle in `to`.
    pub const fn factor_to(self, to: AngleUnit) -> Scalar {
        match (self, to) {
            (AngleUnit::Degree, AngleUnit::Radian) => DEG_TO_RAD,
            (AngleUnit::Radian, AngleUnit::Degree) => RAD_TO_DEG,
            _ => 1.0,
        }
    }
}

/// Converts `value` between length units. Identity conversions return
/// `value` untouched.
pub fn convert_length(value: Scalar, from: LengthUnit, to: LengthUnit) -> Scalar {
    if from == to {
        return value;
    }
    let converted = value * from.factor_to(to);
    trace!(value, from = from.name(), to = to.name(), converted, "Converted length");
    converted
}

/// Converts `value` between angle units. Identity conversions return
/// `value` untouched.
pub fn convert_angle(value: Scalar, from: AngleUnit, to: AngleUnit) -> Scalar {
    if from == to {
        return value;
    }
    let converted = value * from.factor_to(to);
    trace!(value, from = from.name(), to = to.name(), converted, "Converted angle");
    converted
}

pub fn deg_to_rad<T: UnitConstants + Mul<Output = T>>(degrees: T) -> T {
    degrees * T::DEG_TO_RAD
}

pub fn rad_to_deg<T: UnitConstants + Mul<Output = T>>(radians: T) -> T {
    radians * T::RAD_TO_DEG
}

pub fn bohr_to_angstrom<T: UnitConstants + Mul<Output = T>>(bohr: T) -> T {
    bohr * T::BOHR_TO_ANGSTROM
}

pub fn angstrom_to_bohr<T: UnitConstants + Mul<Output = T>>(angstrom: T) -> T {
    angstrom * T::ANGSTROM_TO_BOHR
}

fn lookup_alias<U: Copy>(aliases: &Map<&'static str, U>, s: &str) -> Result<U, ParseUnitError> {
    let key = s.trim().to_lowercase();
    aliases.get(key.as_str()).copied().ok_or_else(|| {
        debug!("Unknown unit name '{}'", s.trim());
        ParseUnitError(s.trim().to_string())
    })
}

impl FromStr for LengthUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_alias(&LENGTH_UNIT_ALIASES, s)
    }
}

impl FromStr for AngleUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup_alias(&ANGLE_UNIT_ALIASES, s)
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}
