//! Atomic-number encoding.
//!
//! A single byte carries both the kind of an atom-like particle and, for real
//! elements, its periodic-table identity:
//!
//! | Byte range   | Meaning                                           |
//! |--------------|---------------------------------------------------|
//! | `0..=127`    | Real element (by convention; not validated here)  |
//! | `128..=254`  | Custom particle (dummy atom, pseudo-atom, ...)    |
//! | `255`        | [`INVALID_ELEMENT`], no element / unset           |
//!
//! [`is_custom_element`] is the membership predicate for the custom range.
//! [`AtomicIdentity`] offers the same information as an enum and converts
//! losslessly to and from the byte.

use crate::error::IdentityError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type AtomicNumber = u8;

/// Marks an atom with no element assigned.
pub const INVALID_ELEMENT: AtomicNumber = 255;

/// First atomic number reserved for custom, non-elemental particles.
pub const CUSTOM_ELEMENT_MIN: AtomicNumber = 128;

/// Last atomic number reserved for custom, non-elemental particles.
pub const CUSTOM_ELEMENT_MAX: AtomicNumber = 254;

/// Number of atomic numbers in the custom range.
pub const CUSTOM_ELEMENT_COUNT: AtomicNumber = CUSTOM_ELEMENT_MAX - CUSTOM_ELEMENT_MIN + 1;

const MAX_REAL_ELEMENT: AtomicNumber = CUSTOM_ELEMENT_MIN - 1;

const _: () = {
    assert!(CUSTOM_ELEMENT_MIN <= CUSTOM_ELEMENT_MAX);
    assert!(CUSTOM_ELEMENT_COUNT == 127);
    assert!(INVALID_ELEMENT > CUSTOM_ELEMENT_MAX);
};

/// Returns `true` if `atomic_number` denotes a custom particle type.
///
/// Total over all 256 inputs. [`INVALID_ELEMENT`] and the real-element range
/// both return `false`.
pub const fn is_custom_element(atomic_number: AtomicNumber) -> bool {
    matches!(atomic_number, CUSTOM_ELEMENT_MIN..=CUSTOM_ELEMENT_MAX)
}

/// Maps a 0-based offset inside the custom range to its atomic number.
pub const fn custom_element(offset: u8) -> Option<AtomicNumber> {
    if offset < CUSTOM_ELEMENT_COUNT {
        Some(CUSTOM_ELEMENT_MIN + offset)
    } else {
        None
    }
}

/// Maps a custom atomic number back to its 0-based offset.
pub const fn custom_element_offset(atomic_number: AtomicNumber) -> Option<u8> {
    if is_custom_element(atomic_number) {
        Some(atomic_number - CUSTOM_ELEMENT_MIN)
    } else {
        None
    }
}

/// Sum-type view of an encoded atomic number.
///
/// Decoding from a byte is total and encoding back yields the same byte. A
/// variant built by hand with an out-of-range payload (`Element(200)`,
/// `Custom(127)`) has no byte of its own and encodes as [`INVALID_ELEMENT`];
/// use [`AtomicIdentity::element`] and [`AtomicIdentity::custom`] to build
/// checked values.
///
/// Equality, hashing and ordering follow the encoded byte, so such a value is
/// equal to [`AtomicIdentity::Invalid`] and sorts after every custom particle.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "u8", into = "u8")
)]
pub enum AtomicIdentity {
    /// A periodic-table element, holding its atomic number (`0..=127`).
    Element(AtomicNumber),
    /// A custom particle, holding its offset inside the custom range (`0..=126`).
    Custom(u8),
    /// No element assigned.
    #[default]
    Invalid,
}

impl AtomicIdentity {
    pub const fn from_atomic_number(atomic_number: AtomicNumber) -> Self {
        match atomic_number {
            0..=MAX_REAL_ELEMENT => Self::Element(atomic_number),
            CUSTOM_ELEMENT_MIN..=CUSTOM_ELEMENT_MAX => {
                Self::Custom(atomic_number - CUSTOM_ELEMENT_MIN)
            }
            INVALID_ELEMENT => Self::Invalid,
        }
    }

    pub const fn atomic_number(self) -> AtomicNumber {
        match self {
            Self::Element(n) if n <= MAX_REAL_ELEMENT => n,
            Self::Custom(offset) => match custom_element(offset) {
                Some(n) => n,
                None => INVALID_ELEMENT,
            },
            _ => INVALID_ELEMENT,
        }
    }

    /// Builds a real-element identity, rejecting numbers outside `0..=127`.
    pub fn element(atomic_number: AtomicNumber) -> Result<Self, IdentityError> {
        if atomic_number <= MAX_REAL_ELEMENT {
            Ok(Self::Element(atomic_number))
        } else {
            Err(IdentityError::ElementOutOfRange(atomic_number))
        }
    }

    /// Builds a custom-particle identity from its offset, rejecting offsets
    /// past the end of the custom range.
    pub fn custom(offset: u8) -> Result<Self, IdentityError> {
        if offset < CUSTOM_ELEMENT_COUNT {
            Ok(Self::Custom(offset))
        } else {
            Err(IdentityError::CustomOffsetOutOfRange(offset))
        }
    }

    pub const fn is_element(self) -> bool {
        matches!(self, Self::Element(n) if n <= MAX_REAL_ELEMENT)
    }

    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom(offset) if offset < CUSTOM_ELEMENT_COUNT)
    }

    pub const fn is_invalid(self) -> bool {
        !self.is_element() && !self.is_custom()
    }

    const fn normalized(self) -> Self {
        Self::from_atomic_number(self.atomic_number())
    }

    pub const fn custom_offset(self) -> Option<u8> {
        match self {
            Self::Custom(offset) if offset < CUSTOM_ELEMENT_COUNT => Some(offset),
            _ => None,
        }
    }
}

impl PartialEq for AtomicIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.atomic_number() == other.atomic_number()
    }
}

impl Eq for AtomicIdentity {}

impl Hash for AtomicIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.atomic_number().hash(state);
    }
}

impl PartialOrd for AtomicIdentity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AtomicIdentity {
    fn cmp(&self, other: &Self) -> Ordering {
        self.atomic_number().cmp(&other.atomic_number())
    }
}

impl From<AtomicNumber> for AtomicIdentity {
    fn from(atomic_number: AtomicNumber) -> Self {
        Self::from_atomic_number(atomic_number)
    }
}

impl From<AtomicIdentity> for AtomicNumber {
    fn from(identity: AtomicIdentity) -> Self {
        identity.atomic_number()
    }
}

impl fmt::Display for AtomicIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.normalized() {
            Self::Element(n) => write!(f, "{}", n),
            Self::Custom(offset) => write!(f, "custom:{}", offset),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

impl FromStr for AtomicIdentity {
    type Err = IdentityError;

    /// Parses `"<n>"`, `"custom:<offset>"` or `"invalid"` (case-insensitive).
    ///
    /// A bare number is read as an encoded byte, so `"130"` yields
    /// `Custom(2)` and `"255"` yields `Invalid`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lowered = trimmed.to_ascii_lowercase();

        if lowered == "invalid" {
            return Ok(Self::Invalid);
        }

        if let Some(offset) = lowered.strip_prefix("custom:") {
            let offset = offset.trim().parse::<u8>().map_err(|e| {
                debug!("Rejected custom offset in '{}': {}", trimmed, e);
                IdentityError::Parse(trimmed.to_string())
            })?;
            return Self::custom(offset);
        }

        lowered
            .parse::<AtomicNumber>()
            .map(Self::from_atomic_number)
            .map_err(|e| {
                debug!("Rejected atomic identity '{}': {}", trimmed, e);
                IdentityError::Parse(trimmed.to_string())
            })
    }
}
