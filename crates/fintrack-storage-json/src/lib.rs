//! fintrack-storage-json
//!
//! Filesystem-backed JSON persistence for the transaction ledger.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use fintrack_core::{storage::LedgerStorage, CoreError};
use fintrack_domain::Ledger;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

pub const DEFAULT_LEDGER_FILE: &str = "finance_data.json";
const TMP_SUFFIX: &str = "tmp";
const INDENT: &[u8] = b"    ";

/// Stores the whole ledger as one pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct JsonLedgerStorage {
    path: PathBuf,
}

impl JsonLedgerStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Uses [`DEFAULT_LEDGER_FILE`] inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_LEDGER_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LedgerStorage for JsonLedgerStorage {
    fn load_ledger(&self) -> Result<Option<Ledger>, CoreError> {
        load_ledger_from_path(&self.path)
    }

    fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError> {
        save_ledger_to_path(ledger, &self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Writes the full ledger to `path`, replacing any previous content.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<(), CoreError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let data = serialize_ledger(ledger)?;
    let tmp = tmp_path(path);
    let written =
        write_file(&tmp, &data).and_then(|()| fs::rename(&tmp, path).map_err(CoreError::from));
    if written.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    written
}

/// Loads a ledger from `path`. A missing file yields `Ok(None)`; unreadable or
/// malformed content is an error.
pub fn load_ledger_from_path(path: &Path) -> Result<Option<Ledger>, CoreError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    serde_json::from_str(&data)
        .map(Some)
        .map_err(|err| CoreError::Serde(err.to_string()))
}

fn serialize_ledger(ledger: &Ledger) -> Result<Vec<u8>, CoreError> {
    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    ledger
        .serialize(&mut serializer)
        .map_err(|err| CoreError::Serde(err.to_string()))?;
    Ok(buffer)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), CoreError> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}
