use std::{
    fs,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::domain::ledger::OrderLedger;

/// File-backed persistence for the order between sessions.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restores the saved order. A missing file is a fresh session; an
    /// unreadable or malformed one is logged and treated as empty.
    pub fn load(&self) -> OrderLedger {
        match fs::read_to_string(&self.path) {
            Ok(text) => {
                let ledger = OrderLedger::deserialize(&text);
                debug!(path = %self.path.display(), entries = ledger.len(), "restored order");
                ledger
            }
            Err(err) if err.kind() == ErrorKind::NotFound => OrderLedger::new(),
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "could not read saved order, starting empty");
                OrderLedger::new()
            }
        }
    }

    /// Writes the order, replacing any previous save.
    pub fn save(&self, ledger: &OrderLedger) -> io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, ledger.serialize())?;
        debug!(path = %self.path.display(), entries = ledger.len(), "saved order");
        Ok(())
    }
}
