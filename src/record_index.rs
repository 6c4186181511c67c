// src/record_index.rs

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::node::{Key, RecordPointer};

/// Byte offsets of records in a CSV data file, keyed by their first column.
#[derive(Debug, Default)]
pub struct RecordIndex {
    offsets: HashMap<Key, RecordPointer>,
}

impl RecordIndex {
    pub fn open(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file))
    }

    /// Scans every line; the pointer of a record is the byte offset where
    /// its line starts. Lines whose first field is not an integer (such as
    /// a header) are skipped, and the first record of a repeated key wins.
    pub fn from_reader<R: BufRead>(mut reader: R) -> std::io::Result<Self> {
        let mut offsets = HashMap::new();
        let mut line = Vec::new();
        let mut position: u64 = 0;
        let mut skipped = 0usize;

        loop {
            line.clear();
            let read = reader.read_until(b'\n', &mut line)?;
            if read == 0 {
                break;
            }

            let text = String::from_utf8_lossy(&line);
            let first_field = text.split(',').next().unwrap_or_default().trim();
            match first_field.parse::<Key>() {
                Ok(key) => {
                    offsets.entry(key).or_insert(position as RecordPointer);
                }
                Err(_) => skipped += 1,
            }

            position += read as u64;
        }

        debug!(
            "record index: {} keys, {} lines skipped, {} bytes scanned",
            offsets.len(),
            skipped,
            position
        );
        Ok(Self { offsets })
    }

    pub fn get(&self, key: Key) -> Option<RecordPointer> {
        self.offsets.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_offsets_point_at_line_starts() {
        let csv = "id,name\n1,red\n22,white\n3,rose\n";
        let index = RecordIndex::from_reader(Cursor::new(csv)).expect("in-memory read");

        assert_eq!(index.len(), 3);
        assert_eq!(index.get(1), Some(8));
        assert_eq!(index.get(22), Some(14));
        assert_eq!(index.get(3), Some(23));
        assert_eq!(index.get(4), None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let csv = "7,a\n7,b\n";
        let index = RecordIndex::from_reader(Cursor::new(csv)).expect("in-memory read");
        assert_eq!(index.get(7), Some(0));
    }

    #[test]
    fn test_crlf_and_missing_trailing_newline() {
        let csv = "5,x\r\n6,y";
        let index = RecordIndex::from_reader(Cursor::new(csv)).expect("in-memory read");
        assert_eq!(index.get(5), Some(0));
        assert_eq!(index.get(6), Some(5));
    }

    #[test]
    fn test_empty_input() {
        let index = RecordIndex::from_reader(Cursor::new("")).expect("in-memory read");
        assert!(index.is_empty());
    }
}
