//! Append-only file store
//!
//! One record log per table at `<data_dir>/tables/<table>.log`. Record
//! format:
//!
//! ```text
//! +------------------+
//! | Record Length    | (u32 LE, total including this field)
//! +------------------+
//! | Row Payload      | (JSON)
//! +------------------+
//! | Checksum         | (u32 LE, CRC32 over length + payload)
//! +------------------+
//! ```
//!
//! Writes append and fsync; scans verify the checksum on every record
//! and fail fatally on any framing or checksum mismatch.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};
use super::Store;
use crate::row::Row;

/// Length prefix plus checksum; a record can never be shorter.
const RECORD_OVERHEAD: usize = 8;

/// Append-only, checksum-verified row storage on disk.
pub struct FileStore {
    tables_dir: PathBuf,
}

impl FileStore {
    /// Opens a file store rooted at the given data directory.
    ///
    /// Creates `<data_dir>/tables/` if missing. Reopening over an
    /// existing data directory sees previously appended rows.
    ///
    /// # Errors
    ///
    /// Returns `REL_STORE_OPEN_FAILED` if the directory cannot be
    /// created.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let tables_dir = data_dir.join("tables");
        fs::create_dir_all(&tables_dir).map_err(|e| {
            StoreError::open_failed(
                format!("cannot create table directory {}", tables_dir.display()),
                e,
            )
        })?;

        Ok(Self { tables_dir })
    }

    /// Returns the directory holding the per-table record logs
    pub fn tables_dir(&self) -> &Path {
        &self.tables_dir
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.tables_dir.join(format!("{}.log", table))
    }

    fn encode_record(row: &Row) -> io::Result<Vec<u8>> {
        let payload = serde_json::to_vec(row).map_err(io::Error::other)?;
        let record_length = (RECORD_OVERHEAD + payload.len()) as u32;

        let mut record = Vec::with_capacity(record_length as usize);
        record.extend_from_slice(&record_length.to_le_bytes());
        record.extend_from_slice(&payload);

        // Checksum covers everything before it
        let checksum = crc32fast::hash(&record);
        record.extend_from_slice(&checksum.to_le_bytes());

        Ok(record)
    }
}

impl Store for FileStore {
    fn append(&mut self, table: &str, row: Row) -> StoreResult<()> {
        let record = Self::encode_record(&row)
            .map_err(|e| StoreError::append_failed(table, "cannot encode row", e))?;

        let path = self.table_path(table);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                StoreError::append_failed(table, format!("cannot open {}", path.display()), e)
            })?;

        file.write_all(&record)
            .map_err(|e| StoreError::append_failed(table, "write failed", e))?;

        // fsync so an acknowledged append survives the process
        file.sync_all()
            .map_err(|e| StoreError::append_failed(table, "fsync failed", e))?;

        Ok(())
    }

    fn scan(&self, table: &str) -> StoreResult<Vec<Row>> {
        let path = self.table_path(table);
        let data = match fs::read(&path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::scan_failed(
                    table,
                    format!("cannot read {}", path.display()),
                    e,
                ))
            }
        };

        let mut rows = Vec::new();
        let mut position = 0usize;

        while position < data.len() {
            let offset = position as u64;
            let remaining = &data[position..];

            if remaining.len() < RECORD_OVERHEAD {
                return Err(StoreError::corruption(table, offset, "truncated record header"));
            }

            let record_length =
                u32::from_le_bytes([remaining[0], remaining[1], remaining[2], remaining[3]])
                    as usize;

            if record_length < RECORD_OVERHEAD {
                return Err(StoreError::corruption(
                    table,
                    offset,
                    format!("invalid record length {}", record_length),
                ));
            }

            if remaining.len() < record_length {
                return Err(StoreError::corruption(
                    table,
                    offset,
                    format!(
                        "truncated record: expected {} bytes, got {}",
                        record_length,
                        remaining.len()
                    ),
                ));
            }

            let checksum_offset = record_length - 4;
            let stored_checksum = u32::from_le_bytes([
                remaining[checksum_offset],
                remaining[checksum_offset + 1],
                remaining[checksum_offset + 2],
                remaining[checksum_offset + 3],
            ]);
            let computed_checksum = crc32fast::hash(&remaining[..checksum_offset]);

            if computed_checksum != stored_checksum {
                return Err(StoreError::corruption(
                    table,
                    offset,
                    format!(
                        "checksum mismatch: computed {:08x}, stored {:08x}",
                        computed_checksum, stored_checksum
                    ),
                ));
            }

            let payload = &remaining[4..checksum_offset];
            let row: Row = serde_json::from_slice(payload).map_err(|e| {
                StoreError::corruption(table, offset, format!("invalid row payload: {}", e))
            })?;

            rows.push(row);
            position += record_length;
        }

        Ok(rows)
    }
}
