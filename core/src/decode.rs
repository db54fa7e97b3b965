//! Inverse of the encoders in [`crate::elias`].
//!
//! Each function takes exactly one complete code. The zero rule is mirrored:
//! the standalone code `"0"` decodes to 0.

use crate::elias::Code;
use crate::error::CodecError;
use crate::DocId;

pub fn gamma_decode(code: &str) -> Result<u64, CodecError> {
    let bits = bits_of(code)?;
    if bits == b"0" {
        return Ok(0);
    }
    let (value, used) = read_gamma(code, bits)?;
    expect_end(code, bits, used)?;
    Ok(value)
}

pub fn delta_decode(code: &str) -> Result<u64, CodecError> {
    let bits = bits_of(code)?;
    if bits == b"0" {
        return Ok(0);
    }
    let (len, used) = read_gamma(code, bits)?;
    if len > u64::from(u64::BITS) {
        return Err(CodecError::Overflow(code.to_string()));
    }
    let tail = (len - 1) as usize;
    let end = used + tail;
    if bits.len() < end {
        return Err(CodecError::Truncated(code.to_string()));
    }
    expect_end(code, bits, end)?;
    Ok((1u64 << tail) | read_binary(&bits[used..end]))
}

/// Decode a compressed posting list back into document ids.
pub fn decode_postings(codes: &[Code]) -> Result<Vec<DocId>, CodecError> {
    codes
        .iter()
        .map(|code| {
            let value = delta_decode(code)?;
            DocId::try_from(value).map_err(|_| CodecError::DocIdOverflow(value))
        })
        .collect()
}

fn bits_of(code: &str) -> Result<&[u8], CodecError> {
    let bits = code.as_bytes();
    if bits.is_empty() {
        return Err(CodecError::Truncated(String::new()));
    }
    if bits.iter().any(|&b| b != b'0' && b != b'1') {
        return Err(CodecError::InvalidCode(code.to_string()));
    }
    Ok(bits)
}

/// Read a gamma-coded value (>= 1) from the front of `bits`; returns it with the bits consumed.
fn read_gamma(code: &str, bits: &[u8]) -> Result<(u64, usize), CodecError> {
    let zeros = bits.iter().take_while(|&&b| b == b'0').count();
    if zeros >= u64::BITS as usize {
        return Err(CodecError::Overflow(code.to_string()));
    }
    let end = 2 * zeros + 1;
    if bits.len() < end {
        return Err(CodecError::Truncated(code.to_string()));
    }
    Ok((read_binary(&bits[zeros..end]), end))
}

fn read_binary(bits: &[u8]) -> u64 {
    bits.iter().fold(0u64, |acc, &b| (acc << 1) | u64::from(b - b'0'))
}

fn expect_end(code: &str, bits: &[u8], used: usize) -> Result<(), CodecError> {
    if used < bits.len() {
        return Err(CodecError::TrailingBits { code: code.to_string(), extra: bits.len() - used });
    }
    Ok(())
}
