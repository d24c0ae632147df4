use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum FlagStoreError {
    /// The backing store could not be reached at all.
    Unavailable(String),
    /// The store was reached but refused the operation (quota, privacy mode).
    Rejected(String),
}

impl fmt::Display for FlagStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagStoreError::Unavailable(reason) => write!(f, "flag store unavailable: {}", reason),
            FlagStoreError::Rejected(reason) => write!(f, "flag store rejected operation: {}", reason),
        }
    }
}

impl std::error::Error for FlagStoreError {}

/// Simple string key-value store holding the persisted balance flag.
pub trait FlagStore {
    fn read_flag(&self, key: &str) -> Result<Option<String>, FlagStoreError>;
    fn write_flag(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError>;
}

impl<S: FlagStore> FlagStore for Rc<RefCell<S>> {
    fn read_flag(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        self.borrow().read_flag(key)
    }

    fn write_flag(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        self.borrow_mut().write_flag(key, value)
    }
}

/// In-process store. `set_available(false)` simulates an outage.
#[derive(Debug, Clone)]
pub struct MemoryFlagStore {
    values: HashMap<String, String>,
    available: bool,
    writes: usize,
}

impl Default for MemoryFlagStore {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
            available: true,
            writes: 0,
        }
    }
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert(key.to_string(), value.to_string());
        store
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Successful writes only.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl FlagStore for MemoryFlagStore {
    fn read_flag(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        if !self.available {
            return Err(FlagStoreError::Unavailable("memory store offline".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn write_flag(&mut self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        if !self.available {
            return Err(FlagStoreError::Unavailable("memory store offline".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// Parses a stored balance for display. Garbage reads as no balance.
pub fn parse_balance(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
