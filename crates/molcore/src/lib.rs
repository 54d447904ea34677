//! # molcore
//!
//! The numeric and identity vocabulary shared by every component of the
//! molecular-modeling toolkit: atom containers, bond graphs, file readers and
//! force-field evaluators all build on the definitions in this crate.
//!
//! ## Overview
//!
//! - [`types`] - The scalar type used for every physical quantity, the index
//!   type used for every container position, and the [`MAX_INDEX`] sentinel.
//! - [`element`] - The single-byte atomic-number encoding that separates real
//!   elements, custom particles and the invalid marker, plus the
//!   [`AtomicIdentity`] sum-type view of the same byte.
//! - [`constants`] - π and the angle/length conversion factors in double,
//!   single and scalar precision.
//! - [`units`] - Length and angle units with conversions built on the
//!   constant table.
//! - [`error`] - Error types for the checked constructors and parsers.
//!
//! ## Precision
//!
//! [`Scalar`] is `f64` unless the `single-precision` feature is enabled, in
//! which case it is `f32`. Code written against [`Scalar`] and the unsuffixed
//! constants compiles unchanged under either setting.
//!
//! ```
//! use molcore::{is_custom_element, AtomicIdentity, CUSTOM_ELEMENT_MIN, DEG_TO_RAD};
//!
//! assert!(is_custom_element(CUSTOM_ELEMENT_MIN));
//! assert_eq!(AtomicIdentity::from(6u8), AtomicIdentity::Element(6));
//! let right_angle = 90.0 * DEG_TO_RAD;
//! assert!((right_angle - molcore::PI / 2.0).abs() < 1e-6);
//! ```

pub mod constants;
pub mod element;
pub mod error;
pub mod types;
pub mod units;

pub use constants::*;
pub use element::{
    AtomicIdentity, AtomicNumber, CUSTOM_ELEMENT_COUNT, CUSTOM_ELEMENT_MAX, CUSTOM_ELEMENT_MIN,
    INVALID_ELEMENT, is_custom_element,
};
pub use error::{IdentityError, ParseUnitError};
pub use types::{Index, MAX_INDEX, Scalar};
pub use units::{AngleUnit, LengthUnit};
