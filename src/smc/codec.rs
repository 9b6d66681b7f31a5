//! Conversions between SMC byte buffers and numbers.
//!
//! All decoders take exactly the meaningful bytes of a value (`&bytes[..data_size]`) and return `None` when the slice
//! can't be decoded, instead of reading past it or overflowing a shift.

/// Pack a 4-byte key into its big-endian wire form.
///
/// Byte `i` ends up in bits `(3 - i) * 8`. No character-set validation happens here; any 4 bytes pack losslessly.
pub fn pack_key(key: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*key)
}

/// Unpack a type tag the SMC returned as an integer, most significant byte first.
pub fn unpack_type_tag(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decode a big-endian unsigned integer of 1 to 4 bytes.
pub fn decode_unsigned(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 4 {
        return None;
    }

    Some(bytes.iter().fold(0u32, |total, &b| (total << 8) | u32::from(b)))
}

/// Decode an SMC fixed-point value with `fraction_bits` fractional bits in the last byte.
///
/// Every byte but the last is shifted left by `8 - fraction_bits` bits per position, and the last byte contributes
/// only its integral part (`last >> fraction_bits`). The fractional bits are dropped, so `fpe2` values always come out
/// whole. Fan firmware depends on exactly this arithmetic.
pub fn decode_fixed_point(bytes: &[u8], fraction_bits: u32) -> Option<f32> {
    if bytes.is_empty() || bytes.len() > 4 || fraction_bits > 8 {
        return None;
    }

    let last = bytes.len() - 1;
    let integral_bits = 8 - fraction_bits;
    let total = bytes.iter().enumerate().fold(0f32, |total, (i, &b)| {
        let part = if i == last {
            u32::from(b) >> fraction_bits
        } else {
            u32::from(b) << ((last - i) as u32 * integral_bits)
        };
        total + part as f32
    });

    Some(total)
}

/// Decode an `sp78` temperature in degrees Celsius.
///
/// The first two bytes form a signed big-endian 16-bit value. It is shifted right by 2 and divided by 64, which drops
/// the two least significant fraction bits.
pub fn decode_sp78(bytes: &[u8]) -> Option<f64> {
    match bytes {
        [hi, lo, ..] => {
            let raw = i16::from_be_bytes([*hi, *lo]);
            Some(f64::from(raw >> 2) / 64.0)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_key_is_big_endian() {
        let packed = pack_key(b"TC0P");
        let expected = (b'T' as u32) << 24 | (b'C' as u32) << 16 | (b'0' as u32) << 8 | (b'P' as u32);
        assert_eq!(packed, expected);
    }

    #[test]
    fn test_pack_then_unpack_is_lossless() {
        for key in [*b"TC0H", *b"F0Ac", *b"ui8 ", [0x00, 0xff, 0x7f, 0x80], [0xde, 0xad, 0xbe, 0xef]] {
            assert_eq!(unpack_type_tag(pack_key(&key)), key);
        }
    }

    #[test]
    fn test_unpack_type_tag() {
        assert_eq!(&unpack_type_tag(0x7370_3738), b"sp78");
        assert_eq!(&unpack_type_tag(0x7569_3820), b"ui8 ");
    }

    #[test]
    fn test_decode_unsigned() {
        assert_eq!(decode_unsigned(&[0x2A]), Some(42));
        assert_eq!(decode_unsigned(&[0x00, 0x2A]), Some(42));
        assert_eq!(decode_unsigned(&[0x01, 0x00, 0x00]), Some(65536));
        assert_eq!(decode_unsigned(&[0xff, 0xff, 0xff, 0xff]), Some(u32::MAX));
        // High bytes must not sign-extend
        assert_eq!(decode_unsigned(&[0x80, 0x01]), Some(0x8001));
    }

    #[test]
    fn test_decode_unsigned_rejects_bad_sizes() {
        assert_eq!(decode_unsigned(&[]), None);
        assert_eq!(decode_unsigned(&[1, 2, 3, 4, 5]), None);
    }

    #[test]
    fn test_decode_fixed_point_fpe2() {
        assert_eq!(decode_fixed_point(&[0x0A, 0x40], 2), Some(656.0));
        // 0x1F40 is 2000 rpm in fpe2; the low two bits are fractional
        assert_eq!(decode_fixed_point(&[0x1F, 0x40], 2), Some(2000.0));
        assert_eq!(decode_fixed_point(&[0x1F, 0x43], 2), Some(2000.0));
    }

    #[test]
    fn test_decode_fixed_point_single_byte() {
        assert_eq!(decode_fixed_point(&[0x40], 2), Some(16.0));
        assert_eq!(decode_fixed_point(&[0xff], 0), Some(255.0));
    }

    #[test]
    fn test_decode_fixed_point_rejects_bad_input() {
        assert_eq!(decode_fixed_point(&[], 2), None);
        assert_eq!(decode_fixed_point(&[1, 2, 3, 4, 5], 2), None);
        assert_eq!(decode_fixed_point(&[1, 2], 9), None);
    }

    #[test]
    fn test_decode_sp78() {
        assert_eq!(decode_sp78(&[0x2C, 0x00]), Some(44.0));
        assert_eq!(decode_sp78(&[0x2C, 0x80]), Some(44.5));
        assert_eq!(decode_sp78(&[0x2C, 0x40, 0xff, 0xff]), Some(44.25));
        // The two lowest bits fall away with the shift
        assert_eq!(decode_sp78(&[0x2C, 0x03]), Some(44.0));
        assert_eq!(decode_sp78(&[0x2C, 0x04]), Some(44.015625));
    }

    #[test]
    fn test_decode_sp78_negative() {
        assert_eq!(decode_sp78(&[0xff, 0x00]), Some(-1.0));
    }

    #[test]
    fn test_decode_sp78_needs_two_bytes() {
        assert_eq!(decode_sp78(&[]), None);
        assert_eq!(decode_sp78(&[0x2C]), None);
    }
}
