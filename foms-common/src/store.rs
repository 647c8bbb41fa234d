//! Durable submission store
//!
//! One JSON document on disk, an object keyed by phone number. The file is
//! the sole source of truth: every operation reloads it rather than trusting
//! an in-memory mirror, and all mutation runs inside a single-writer
//! critical section so two concurrent registrations cannot lose an update.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::model::RegistrationRecord;
use crate::{Error, Result};

/// Durable mapping from phone number to registration record.
///
/// Keys are unique: a phone number present in the mapping is never
/// overwritten by a later registration (first write wins).
pub struct SubmissionStore {
    path: PathBuf,
    /// Serializes the reload -> check -> rewrite cycle of [`insert`].
    ///
    /// Without this, two simultaneous registrations with different phone
    /// numbers both read the same prior document and the later rewrite
    /// drops the earlier key.
    ///
    /// [`insert`]: SubmissionStore::insert
    write_lock: Mutex<()>,
}

impl SubmissionStore {
    /// Open a store backed by `path`.
    ///
    /// Creates the document (an empty JSON object) and any missing parent
    /// directories if the file does not exist. Existing content is left
    /// untouched; a malformed document surfaces on first load, never here.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !fs::try_exists(&path).await? {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).await?;
                }
            }
            let empty: BTreeMap<String, RegistrationRecord> = BTreeMap::new();
            write_atomic(&path, &empty).await?;
            debug!("Created empty submission store at {}", path.display());
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full document.
    ///
    /// If the backing file has gone missing since [`open`], it is recreated
    /// empty before being read. A parse failure surfaces as
    /// [`Error::CorruptStore`] and is non-fatal to the process; the document
    /// is never reset automatically.
    ///
    /// [`open`]: SubmissionStore::open
    pub async fn load(&self) -> Result<BTreeMap<String, RegistrationRecord>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let empty = BTreeMap::new();
                write_atomic(&self.path, &empty).await?;
                return Ok(empty);
            }
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&raw).map_err(|e| Error::CorruptStore(e.to_string()))
    }

    /// Insert-if-absent, keyed by the record's phone number.
    ///
    /// Fails with [`Error::MissingFields`] when any of the six fields is
    /// blank, and with [`Error::DuplicateKey`] when the phone is already
    /// registered, leaving the document unchanged. On success the entire
    /// updated document is durably written (atomic whole-file replace)
    /// before this returns.
    pub async fn insert(&self, record: RegistrationRecord) -> Result<()> {
        // All-or-nothing: an incomplete record never touches the document
        if !record.is_complete() {
            return Err(Error::MissingFields);
        }

        let _guard = self.write_lock.lock().await;

        let mut submissions = self.load().await?;
        if submissions.contains_key(&record.phone) {
            return Err(Error::DuplicateKey(record.phone));
        }

        let phone = record.phone.clone();
        submissions.insert(phone.clone(), record);
        write_atomic(&self.path, &submissions).await?;

        debug!("Stored registration for {}", phone);
        Ok(())
    }

    /// All stored records at one point in time.
    ///
    /// The JSON-object backing form does not preserve insertion order, so
    /// records come back in stable map (phone-sorted) order.
    pub async fn snapshot(&self) -> Result<Vec<RegistrationRecord>> {
        Ok(self.load().await?.into_values().collect())
    }
}

/// Overwrite the whole document via a sibling temp file + rename.
///
/// A concurrent reader either sees the previous complete document or the
/// new one, never a torn file.
async fn write_atomic(
    path: &Path,
    submissions: &BTreeMap<String, RegistrationRecord>,
) -> Result<()> {
    let json = serde_json::to_string_pretty(submissions)
        .map_err(|e| Error::Internal(format!("serialize submissions: {}", e)))?;

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp = PathBuf::from(tmp_name);

    fs::write(&tmp, json).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}
