//! Streaming reader and writer for binary edge files.

use super::wire::{expect_whole_records, EdgeRecord, EDGE_RECORD_SIZE};
use super::{EdgeSource, EdgeStorage, InMemoryEdges};
use crate::partitioning::Edge;
use crate::partitioning::error::PartitionError;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Sequential reader over a file of [`EdgeRecord`]s.
///
/// Only one record is buffered at a time beyond the reader's own buffer, so
/// partitioners fed from here never hold per-edge state. The edge count is
/// derived from the byte length when the source is opened.
#[derive(Debug)]
pub struct BinaryEdgeFile<R = BufReader<File>> {
    reader: R,
    edge_count: u64,
    offset: u64,
}

impl BinaryEdgeFile<BufReader<File>> {
    /// Open `path` for streaming.
    ///
    /// # Errors
    /// [`PartitionError::MalformedInput`] if the file length is not a multiple
    /// of [`EDGE_RECORD_SIZE`]; [`PartitionError::Io`] if it cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PartitionError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::debug!("opened edge file {}", path.display());
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read + Seek> BinaryEdgeFile<R> {
    /// Wrap any seekable reader positioned anywhere; reading starts at byte 0.
    pub fn from_reader(mut reader: R) -> Result<Self, PartitionError> {
        let len = reader.seek(SeekFrom::End(0))?;
        let edge_count = expect_whole_records(len).map_err(|msg| {
            log::debug!("rejecting edge input: {msg}");
            PartitionError::MalformedInput {
                len,
                record_size: EDGE_RECORD_SIZE,
                truncated_at: None,
            }
        })?;
        reader.seek(SeekFrom::Start(0))?;
        Ok(Self {
            reader,
            edge_count,
            offset: 0,
        })
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read + Seek> EdgeSource for BinaryEdgeFile<R> {
    fn next_edge(&mut self) -> Result<Option<Edge>, PartitionError> {
        let mut buf = [0u8; EDGE_RECORD_SIZE];
        let mut filled = 0;
        while filled < EDGE_RECORD_SIZE {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        match filled {
            0 => Ok(None),
            EDGE_RECORD_SIZE => {
                self.offset += EDGE_RECORD_SIZE as u64;
                Ok(Some(EdgeRecord::from_bytes(&buf).into()))
            }
            partial => Err(PartitionError::MalformedInput {
                len: self.offset + partial as u64,
                record_size: EDGE_RECORD_SIZE,
                truncated_at: Some(self.offset),
            }),
        }
    }

    fn rewind(&mut self) -> Result<(), PartitionError> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.offset = 0;
        Ok(())
    }

    fn edge_count(&self) -> u64 {
        self.edge_count
    }

    fn storage(&self) -> EdgeStorage {
        EdgeStorage::Count
    }
}

/// Read a whole edge file into memory.
pub fn load_edges(path: impl AsRef<Path>) -> Result<InMemoryEdges, PartitionError> {
    let mut file = BinaryEdgeFile::open(path)?;
    let mut edges = Vec::with_capacity(file.edge_count() as usize);
    file.try_for_each_edge(|e| {
        edges.push(e);
        Ok(())
    })?;
    Ok(InMemoryEdges::new(edges))
}

/// Write `edges` as native-endian records, returning the number written.
pub fn write_edges<I>(path: impl AsRef<Path>, edges: I) -> Result<u64, PartitionError>
where
    I: IntoIterator<Item = Edge>,
{
    let mut out = BufWriter::new(File::create(path)?);
    let mut written = 0u64;
    for edge in edges {
        out.write_all(EdgeRecord::from(edge).as_bytes())?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};

    /// Claims `claimed` bytes when seeked to the end but yields only `data`.
    struct ShortStream {
        data: Cursor<Vec<u8>>,
        claimed: u64,
    }

    impl Read for ShortStream {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.data.read(buf)
        }
    }

    impl Seek for ShortStream {
        fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
            match pos {
                SeekFrom::End(delta) => Ok((self.claimed as i64 + delta) as u64),
                other => self.data.seek(other),
            }
        }
    }

    fn encode(edges: &[Edge]) -> Vec<u8> {
        edges
            .iter()
            .flat_map(|&e| EdgeRecord::from(e).as_bytes().to_vec())
            .collect()
    }

    #[test]
    fn streams_and_rewinds() {
        let edges = vec![(1, 4), (1, 6), (2, 1)];
        let mut src = BinaryEdgeFile::from_reader(Cursor::new(encode(&edges))).unwrap();
        assert_eq!(src.edge_count(), 3);
        assert_eq!(src.storage(), EdgeStorage::Count);
        for &e in &edges {
            assert_eq!(src.next_edge().unwrap(), Some(e));
        }
        assert_eq!(src.next_edge().unwrap(), None);
        src.rewind().unwrap();
        assert_eq!(src.next_edge().unwrap(), Some((1, 4)));
    }

    #[test]
    fn rejects_partial_record_length() {
        let mut bytes = encode(&[(1, 2)]);
        bytes.extend_from_slice(&[0, 0, 0]);
        let err = BinaryEdgeFile::from_reader(Cursor::new(bytes)).unwrap_err();
        assert!(matches!(
            err,
            PartitionError::MalformedInput {
                len: 11,
                record_size: 8,
                truncated_at: None
            }
        ));
    }

    #[test]
    fn partial_record_mid_stream_is_malformed() {
        let mut bytes = encode(&[(1, 2)]);
        bytes.extend_from_slice(&[7, 0, 0, 0]);
        let mut src = BinaryEdgeFile::from_reader(ShortStream {
            data: Cursor::new(bytes),
            claimed: 16,
        })
        .unwrap();
        assert_eq!(src.edge_count(), 2);
        assert_eq!(src.next_edge().unwrap(), Some((1, 2)));
        let err = src.next_edge().unwrap_err();
        assert!(matches!(
            err,
            PartitionError::MalformedInput {
                len: 12,
                record_size: 8,
                truncated_at: Some(8)
            }
        ));
        assert!(err.to_string().contains("offset 8"), "{err}");
    }

    #[test]
    fn empty_input_is_valid() {
        let mut src = BinaryEdgeFile::from_reader(Cursor::new(Vec::new())).unwrap();
        assert_eq!(src.edge_count(), 0);
        assert_eq!(src.next_edge().unwrap(), None);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("small.graph");
        let edges = vec![(3, 1), (-2, 0), (i32::MAX, i32::MIN)];
        assert_eq!(write_edges(&path, edges.iter().copied()).unwrap(), 3);
        assert_eq!(load_edges(&path).unwrap().into_inner(), edges);
    }
}
