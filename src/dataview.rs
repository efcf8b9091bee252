//! Fixed-width 64-bit reads and writes against a byte buffer.
//!
//! These mirror the DataView getters and setters: an explicit byte
//! offset, an explicit little-endian flag, and 64-bit wrapping semantics
//! for stored values. The 64 payload bits span three digits: bits 0..30,
//! 30..60 and 60..64.

use crate::bigint::BigInt;
use crate::error::{Error, Result};

/// Read a signed 64-bit integer at `byte_offset`.
pub fn get_big_int64(buffer: &[u8], byte_offset: usize, little_endian: bool) -> Result<BigInt> {
    let bits = read_u64(buffer, byte_offset, little_endian)?;
    Ok(BigInt::from(bits as i64))
}

/// Read an unsigned 64-bit integer at `byte_offset`.
pub fn get_big_uint64(buffer: &[u8], byte_offset: usize, little_endian: bool) -> Result<BigInt> {
    let bits = read_u64(buffer, byte_offset, little_endian)?;
    Ok(BigInt::from(bits))
}

/// Store `value` as a signed 64-bit integer at `byte_offset`, wrapping
/// modulo 2^64 first.
pub fn set_big_int64(
    buffer: &mut [u8],
    byte_offset: usize,
    value: &BigInt,
    little_endian: bool,
) -> Result<()> {
    write_u64(buffer, byte_offset, value.to_u64_wrapping(), little_endian)
}

/// Store `value` as an unsigned 64-bit integer at `byte_offset`, wrapping
/// modulo 2^64 first.
pub fn set_big_uint64(
    buffer: &mut [u8],
    byte_offset: usize,
    value: &BigInt,
    little_endian: bool,
) -> Result<()> {
    write_u64(buffer, byte_offset, value.to_u64_wrapping(), little_endian)
}

fn checked_window(len: usize, byte_offset: usize) -> Result<()> {
    if byte_offset.checked_add(8).map_or(true, |end| end > len) {
        return Err(Error::out_of_bounds());
    }
    Ok(())
}

fn read_u64(buffer: &[u8], byte_offset: usize, little_endian: bool) -> Result<u64> {
    checked_window(buffer.len(), byte_offset)?;
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&buffer[byte_offset..byte_offset + 8]);
    Ok(if little_endian {
        u64::from_le_bytes(bytes)
    } else {
        u64::from_be_bytes(bytes)
    })
}

fn write_u64(buffer: &mut [u8], byte_offset: usize, bits: u64, little_endian: bool) -> Result<()> {
    checked_window(buffer.len(), byte_offset)?;
    let bytes = if little_endian {
        bits.to_le_bytes()
    } else {
        bits.to_be_bytes()
    };
    buffer[byte_offset..byte_offset + 8].copy_from_slice(&bytes);
    Ok(())
}

// TESTS
// -----
