//! Unit conversion factors.
//!
//! Every constant comes in three flavors sharing one base name:
//!
//! - `_D` suffix: `f64`, the source of truth.
//! - `_F` suffix: `f32`, the `_D` value rounded to single precision.
//! - no suffix: [`Scalar`], the `_D` value cast to the configured precision.
//!
//! Call sites pick the flavor matching their arithmetic so no implicit
//! widening or narrowing happens at the point of use. Generic code can use
//! [`UnitConstants`] instead.
#![allow(clippy::unnecessary_cast)]

use crate::types::Scalar;

pub const PI_D: f64 = std::f64::consts::PI;
pub const PI_F: f32 = PI_D as f32;
pub const PI: Scalar = PI_D as Scalar;

pub const DEG_TO_RAD_D: f64 = PI_D / 180.0;
pub const DEG_TO_RAD_F: f32 = DEG_TO_RAD_D as f32;
pub const DEG_TO_RAD: Scalar = DEG_TO_RAD_D as Scalar;

pub const RAD_TO_DEG_D: f64 = 180.0 / PI_D;
pub const RAD_TO_DEG_F: f32 = RAD_TO_DEG_D as f32;
pub const RAD_TO_DEG: Scalar = RAD_TO_DEG_D as Scalar;

/// Bohr radius in ångström (CODATA 2010).
pub const BOHR_TO_ANGSTROM_D: f64 = 0.52917721092;
pub const BOHR_TO_ANGSTROM_F: f32 = BOHR_TO_ANGSTROM_D as f32;
pub const BOHR_TO_ANGSTROM: Scalar = BOHR_TO_ANGSTROM_D as Scalar;

pub const ANGSTROM_TO_BOHR_D: f64 = 1.0 / BOHR_TO_ANGSTROM_D;
pub const ANGSTROM_TO_BOHR_F: f32 = ANGSTROM_TO_BOHR_D as f32;
pub const ANGSTROM_TO_BOHR: Scalar = ANGSTROM_TO_BOHR_D as Scalar;

/// The constant table as associated constants of a float type.
///
/// Implemented for `f64` with the `_D` values and for `f32` with the `_F`
/// values, so `<Scalar as UnitConstants>::PI == PI` under either precision.
pub trait UnitConstants: Copy {
    const PI: Self;
    const DEG_TO_RAD: Self;
    const RAD_TO_DEG: Self;
    const BOHR_TO_ANGSTROM: Self;
    const ANGSTROM_TO_BOHR: Self;
}

impl UnitConstants for f64 {
    const PI: Self = PI_D;
    const DEG_TO_RAD: Self = DEG_TO_RAD_D;
    const RAD_TO_DEG: Self = RAD_TO_DEG_D;
    const BOHR_TO_ANGSTROM: Self = BOHR_TO_ANGSTROM_D;
    const ANGSTROM_TO_BOHR: Self = ANGSTROM_TO_BOHR_D;
}

impl UnitConstants for f32 {
    const PI: Self = PI_F;
    const DEG_TO_RAD: Self = DEG_TO_RAD_F;
    const RAD_TO_DEG: Self = RAD_TO_DEG_F;
    const BOHR_TO_ANGSTROM: Self = BOHR_TO_ANGSTROM_F;
    const ANGSTROM_TO_BOHR: Self = ANGSTROM_TO_BOHR_F;
}
