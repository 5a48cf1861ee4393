use thiserror::Error;

/// Exact length of a version-00 traceparent header, in bytes.
pub const TRACEPARENT_LEN: usize = 55;

/// Reasons a traceparent header fails to decode.
///
/// Checks run in declaration order and short-circuit on the first failure.
#[derive(Error, PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum TraceparentError {
    /// Header is not exactly 55 characters.
    #[error("invalid length")]
    InvalidLength,
    /// A dash is missing at offset 2, 35 or 52.
    #[error("invalid format")]
    InvalidFormat,
    /// Version field is not the literal `00`.
    #[error("invalid version")]
    InvalidVersion,
    /// Flag field is not `00` or `01`.
    #[error("invalid flag")]
    InvalidFlag,
    /// Trace id is not 32 lower-case hex characters, or is all zero.
    #[error("invalid trace id")]
    InvalidTraceId,
    /// Parent id is not 16 lower-case hex characters, or is all zero.
    #[error("invalid parent id")]
    InvalidParentId,
}

/// Encode a traceparent header from its version, trace id, parent id and flag
/// bytes.
///
/// Produces the exact 55-character wire layout with lower-case hex and dashes
/// at offsets 2, 35 and 52. Encoding is total: no byte pattern is rejected,
/// only decode enforces the wire format's semantic constraints.
pub fn encode_traceparent(
    version: u8,
    trace_id: [u8; 16],
    parent_id: [u8; 8],
    flags: u8,
) -> String {
    format!(
        "{:02x}-{}-{}-{:02x}",
        version,
        hex::encode(trace_id),
        hex::encode(parent_id),
        flags
    )
}

/// Parse and validate a traceparent header, returning the version, trace id,
/// parent id and flag bytes.
///
/// Version and flag fields are matched against the literal accepted strings
/// (`00`, and `00`/`01`), never parsed as numeric ranges; ids must be
/// strictly lower-case hex and not all zero. Decoding has no side effects.
pub fn decode_traceparent(
    header: &str,
) -> Result<(u8, [u8; 16], [u8; 8], u8), TraceparentError> {
    let raw = header.as_bytes();

    if raw.len() != TRACEPARENT_LEN {
        return Err(TraceparentError::InvalidLength);
    }

    if raw[2] != b'-' || raw[35] != b'-' || raw[52] != b'-' {
        return Err(TraceparentError::InvalidFormat);
    }

    let version = match &raw[..2] {
        b"00" => 0x00,
        _ => return Err(TraceparentError::InvalidVersion),
    };

    let flags = match &raw[53..] {
        b"00" => 0x00,
        b"01" => 0x01,
        _ => return Err(TraceparentError::InvalidFlag),
    };

    let mut trace_id = [0u8; 16];
    if !decode_id(&raw[3..35], &mut trace_id) || trace_id.iter().all(|&b| b == 0) {
        return Err(TraceparentError::InvalidTraceId);
    }

    let mut parent_id = [0u8; 8];
    if !decode_id(&raw[36..52], &mut parent_id) || parent_id.iter().all(|&b| b == 0) {
        return Err(TraceparentError::InvalidParentId);
    }

    Ok((version, trace_id, parent_id, flags))
}

// Decodes 2N hex characters into N bytes; false on any character outside the
// strict lower-case alphabet.
fn decode_id(src: &[u8], dst: &mut [u8]) -> bool {
    for (i, pair) in src.chunks_exact(2).enumerate() {
        let hi = match hex_nibble(pair[0]) {
            Some(d) => d,
            None => return false,
        };
        let lo = match hex_nibble(pair[1]) {
            Some(d) => d,
            None => return false,
        };
        dst[i] = (hi << 4) | lo;
    }
    true
}

// The header grammar allows only 0-9a-f; uppercase is rejected.
fn hex_nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}
