use std::{fmt, str::FromStr};

use super::codec;
use crate::error::{Error, Result};

/// Length of the value buffer carried by every SMC frame
pub const SMC_BYTES_LEN: usize = 32;

/// A four character SMC key such as `TC0H` or `F0Ac`.
///
/// Keys are case-sensitive and travel as a big-endian `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SmcKey {
    key: [u8; 4],
}

impl SmcKey {
    /// Build a key from its raw bytes
    pub const fn from_bytes(key: [u8; 4]) -> Self {
        Self { key }
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.key
    }

    /// The key's wire form
    pub fn to_u32(&self) -> u32 {
        codec::pack_key(&self.key)
    }
}

impl FromStr for SmcKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let key: [u8; 4] = s
            .as_bytes()
            .try_into()
            .map_err(|_| Error::invalid_key(format!("'{}' must be exactly 4 bytes, got {}", s, s.len())))?;
        Ok(Self { key })
    }
}

impl fmt::Display for SmcKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.key))
    }
}

/// The four character data type the SMC reports for a key, e.g. `sp78` or `ui16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TypeTag([u8; 4]);

impl TypeTag {
    /// Signed 7.8 fixed point
    pub const SP78: TypeTag = TypeTag(*b"sp78");
    /// Unsigned 8 bit integer (note the trailing space)
    pub const UI8: TypeTag = TypeTag(*b"ui8 ");
    pub const UI16: TypeTag = TypeTag(*b"ui16");
    pub const UI32: TypeTag = TypeTag(*b"ui32");
    /// Unsigned fixed point with 2 fractional bits
    pub const FPE2: TypeTag = TypeTag(*b"fpe2");

    pub const fn from_bytes(tag: [u8; 4]) -> Self {
        Self(tag)
    }

    /// Unpack the integer data type found in a key-info reply
    pub fn from_raw(value: u32) -> Self {
        Self(codec::unpack_type_tag(value))
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Whether values of this type decode as plain unsigned integers
    pub fn is_unsigned_integer(&self) -> bool {
        matches!(*self, Self::UI8 | Self::UI16 | Self::UI32)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.0))
    }
}

/// A value read from the SMC, undecoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawValue {
    pub data_size: u32,
    pub data_type: TypeTag,
    pub bytes: [u8; SMC_BYTES_LEN],
}

impl RawValue {
    /// The meaningful prefix of the buffer, capped at the buffer length
    pub fn data(&self) -> &[u8] {
        let len = (self.data_size as usize).min(SMC_BYTES_LEN);
        &self.bytes[..len]
    }

    pub fn is_empty(&self) -> bool {
        self.data_size == 0
    }

    /// Interpret the value as a temperature in degrees Celsius.
    ///
    /// Anything that is not a non-empty `sp78` value reads as `0.0`.
    pub fn temperature(&self) -> f64 {
        if self.is_empty() || self.data_type != TypeTag::SP78 {
            return 0.0;
        }
        codec::decode_sp78(self.data()).unwrap_or(0.0)
    }

    /// Interpret the value as a fan speed in RPM.
    ///
    /// Integer tags decode as big-endian integers and `fpe2` as fixed point. Anything else reads as `0`.
    pub fn fan_rpm(&self) -> u32 {
        if self.is_empty() {
            return 0;
        }

        if self.data_type.is_unsigned_integer() {
            codec::decode_unsigned(self.data()).unwrap_or(0)
        } else if self.data_type == TypeTag::FPE2 {
            codec::decode_fixed_point(self.data(), 2).map_or(0, |rpm| rpm as u32)
        } else {
            0
        }
    }
}
