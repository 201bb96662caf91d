use std::cell::RefCell;
use std::path::PathBuf;

use super::backend::StorageBackend;
use crate::error::{CardzError, Result};

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since cardz is single-threaded.
/// This avoids the overhead of a lock while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    stored: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with pre-existing stored text.
    pub fn with_stored(text: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.stored.borrow_mut() = Some(text.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Test helper: what is currently stored.
    pub fn stored(&self) -> Option<String> {
        self.stored.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.stored.borrow().clone())
    }

    fn save(&self, text: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(CardzError::Store("Simulated write error".to_string()));
        }
        *self.stored.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn data_path(&self) -> Result<PathBuf> {
        Ok(PathBuf::from("<memory>/card.json"))
    }
}
