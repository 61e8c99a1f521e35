use crate::domain::ports::SnapshotStorage;
use crate::utils::error::Result;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// In-memory snapshot storage. Clones share the same buffer, so a test can
/// hand one clone to a store and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    data: Rc<RefCell<Option<Vec<u8>>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(data: impl Into<Vec<u8>>) -> Self {
        let storage = Self::default();
        storage.data.replace(Some(data.into()));
        storage
    }

    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.data.borrow().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read_snapshot(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.snapshot())
    }

    fn write_snapshot(&self, data: &[u8]) -> Result<()> {
        self.data.replace(Some(data.to_vec()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
