//! Fixed-width on-disk edge records.
//!
//! An edge file is a bare sequence of [`EdgeRecord`]s: two 4-byte signed
//! integers (`src`, `dst`) in the platform's native byte order, with no header,
//! footer or delimiter.

use crate::partitioning::Edge;
use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;
use std::mem::size_of;

/// Size of one edge record in bytes.
pub const EDGE_RECORD_SIZE: usize = size_of::<EdgeRecord>();

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct EdgeRecord {
    pub src: i32, // native-endian
    pub dst: i32, // native-endian
}

const_assert_eq!(size_of::<EdgeRecord>(), 8);

impl EdgeRecord {
    pub fn from_bytes(buf: &[u8; EDGE_RECORD_SIZE]) -> Self {
        bytemuck::pod_read_unaligned(buf)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl From<EdgeRecord> for Edge {
    fn from(r: EdgeRecord) -> Self {
        (r.src, r.dst)
    }
}

impl From<Edge> for EdgeRecord {
    fn from((src, dst): Edge) -> Self {
        Self { src, dst }
    }
}

/// Returns an error message unless `len` is a whole number of records.
pub fn expect_whole_records(len: u64) -> Result<u64, String> {
    let size = EDGE_RECORD_SIZE as u64;
    if len % size == 0 {
        Ok(len / size)
    } else {
        Err(format!("expected a multiple of {size} bytes, got {len}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_uses_native_byte_order() {
        let mut buf = [0u8; EDGE_RECORD_SIZE];
        buf[..4].copy_from_slice(&(-7i32).to_ne_bytes());
        buf[4..].copy_from_slice(&1_000_000i32.to_ne_bytes());
        let r = EdgeRecord::from_bytes(&buf);
        assert_eq!(Edge::from(r), (-7, 1_000_000));
        assert_eq!(r.as_bytes(), &buf[..]);
    }

    #[test]
    fn whole_records_only() {
        assert_eq!(expect_whole_records(0), Ok(0));
        assert_eq!(expect_whole_records(72), Ok(9));
        assert!(expect_whole_records(13).is_err());
    }
}
