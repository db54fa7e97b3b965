//! Elias universal codes rendered as strings of '0' and '1'.
//!
//! Zero has no classical Elias code; both encoders map it to the literal
//! `"0"`, which is only meaningful as a standalone code.

use crate::error::CodecError;

/// One integer under a universal code, as a string over {'0','1'}.
pub type Code = String;

/// Admit a signed value into the coder's domain.
pub fn codable(value: i64) -> Result<u64, CodecError> {
    u64::try_from(value).map_err(|_| CodecError::InvalidInput(value))
}

/// Elias-gamma: `floor(log2 n)` zero bits followed by the binary form of `n`.
pub fn gamma_encode(n: u64) -> Code {
    if n == 0 {
        return "0".to_string();
    }
    let binary = format!("{n:b}");
    let mut code = "0".repeat(binary.len() - 1);
    code.push_str(&binary);
    code
}

/// Elias-delta: gamma code of the bit length of `n`, then `n` without its leading bit.
pub fn delta_encode(n: u64) -> Code {
    if n == 0 {
        return "0".to_string();
    }
    let binary = format!("{n:b}");
    let mut code = gamma_encode(binary.len() as u64);
    code.push_str(&binary[1..]);
    code
}
