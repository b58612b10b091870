//! Binary codec for run snapshots.
//!
//! All data is serialized with:
//! - JSON for data (compatible with existing serde attributes)
//! - Length-prefixed format for framing
//! - CRC32 checksum for corruption detection
//! - Version byte for forward compatibility

use std::io::{ErrorKind, Read, Write};

use crc32fast::Hasher;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;

/// Current codec version.
pub const CODEC_VERSION: u8 = 1;

/// Magic bytes to identify run snapshot files.
pub const MAGIC: [u8; 4] = *b"MAZE";

/// Snapshots are a handful of labels; anything this large is not ours.
const MAX_ENTRY_SIZE: usize = 16 * 1024 * 1024;

fn read_exact(reader: &mut impl Read, buf: &mut [u8], what: &str) -> Result<(), StorageError> {
    reader.read_exact(buf).map_err(|e| match e.kind() {
        ErrorKind::UnexpectedEof => StorageError::Corrupt(format!("truncated {what}")),
        _ => StorageError::Io(e),
    })
}

fn checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Serializes a value to bytes with checksum.
///
/// Format:
/// ```text
/// [version: 1 byte][length: 4 bytes LE][data: N bytes JSON][crc32: 4 bytes LE]
/// ```
///
/// # Errors
/// `Encode` if the value cannot be serialized or does not fit the length field.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StorageError> {
    let data = serde_json::to_vec(value)
        .map_err(|e| StorageError::Encode(e.to_string()))?;
    let len = u32::try_from(data.len())
        .map_err(|_| StorageError::Encode(format!("entry of {} bytes too large", data.len())))?;

    let mut out = Vec::with_capacity(1 + 4 + data.len() + 4);
    out.push(CODEC_VERSION);
    out.extend_from_slice(&len.to_le_bytes());
    out.extend_from_slice(&data);
    out.extend_from_slice(&checksum(&data).to_le_bytes());
    Ok(out)
}

/// Deserializes a value from bytes, verifying checksum.
///
/// # Errors
/// - `UnsupportedVersion` if the record was written by another codec version
/// - `Corrupt` on truncation, oversized length, checksum mismatch, or bad JSON
pub fn decode<T: DeserializeOwned>(reader: &mut impl Read) -> Result<T, StorageError> {
    let mut version = [0u8; 1];
    read_exact(reader, &mut version, "record version")?;
    if version[0] != CODEC_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: version[0],
            expected: CODEC_VERSION,
        });
    }

    let mut len_bytes = [0u8; 4];
    read_exact(reader, &mut len_bytes, "record length")?;
    let len = u32::from_le_bytes(len_bytes) as usize;
    if len > MAX_ENTRY_SIZE {
        return Err(StorageError::Corrupt(format!(
            "entry size {len} exceeds maximum {MAX_ENTRY_SIZE}"
        )));
    }

    let mut data = vec![0u8; len];
    read_exact(reader, &mut data, "record data")?;

    let mut crc_bytes = [0u8; 4];
    read_exact(reader, &mut crc_bytes, "record checksum")?;
    let stored_crc = u32::from_le_bytes(crc_bytes);
    let computed_crc = checksum(&data);
    if stored_crc != computed_crc {
        return Err(StorageError::Corrupt(format!(
            "CRC mismatch: stored={stored_crc:08x}, computed={computed_crc:08x}"
        )));
    }

    serde_json::from_slice(&data)
        .map_err(|e| StorageError::Corrupt(format!("deserialization failed: {e}")))
}

/// Write the file header (magic + version).
pub fn write_header(writer: &mut impl Write) -> Result<(), StorageError> {
    writer.write_all(&MAGIC)?;
    writer.write_all(&[CODEC_VERSION])?;
    Ok(())
}

/// Read and validate the file header.
pub fn read_header(reader: &mut impl Read) -> Result<(), StorageError> {
    let mut magic = [0u8; 4];
    read_exact(reader, &mut magic, "header")?;
    if magic != MAGIC {
        return Err(StorageError::Corrupt(format!(
            "invalid magic bytes: expected {MAGIC:?}, got {magic:?}"
        )));
    }

    let mut version = [0u8; 1];
    read_exact(reader, &mut version, "header")?;
    if version[0] != CODEC_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: version[0],
            expected: CODEC_VERSION,
        });
    }
    Ok(())
}
