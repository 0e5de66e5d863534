use crate::store::{Storage, StorageError};

/// Keeps the slot in memory, nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
    unavailable: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A storage that already holds `contents`.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Some(contents.into()),
            unavailable: false,
        }
    }

    /// A storage that fails every read and write, like a disabled or full
    /// storage would.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            slot: None,
            unavailable: true,
        }
    }

    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }

        Ok(self.slot.clone())
    }

    fn save(&mut self, contents: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }

        self.slot = Some(contents.to_string());
        Ok(())
    }
}
