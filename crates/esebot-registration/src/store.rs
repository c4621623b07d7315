use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use tracing::{error, info, warn};

use crate::{Registration, RegistrationError, Result};

/// Holds the single registered destination.
///
/// Every update replaces the whole value. When the store is backed by a
/// file, the file is rewritten on each update while the lock is held so the
/// file never disagrees with memory.
#[derive(Debug, Default)]
pub struct RegistrationStore {
    path: Option<PathBuf>,
    current: RwLock<Option<Registration>>,
}

impl RegistrationStore {
    /// Create a store without backing file.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the store from a file.
    ///
    /// A missing or unreadable file leaves the store unset.
    pub fn load<P: Into<PathBuf>>(path: P) -> Self {
        let path = path.into();
        let current = match Self::read_file(&path) {
            Ok(Some(registration)) => {
                info!(
                    message = "Loaded registration",
                    destination = %registration.destination,
                    path = %path.display()
                );
                Some(registration)
            }
            Ok(None) => {
                info!(
                    message = "No registration file found, waiting for a registration command",
                    path = %path.display()
                );
                None
            }
            Err(e) => {
                warn!(message = "Ignoring registration file", error = %e);
                None
            }
        };

        Self {
            path: Some(path),
            current: RwLock::new(current),
        }
    }

    /// Read a registration file without building a store.
    pub fn read_file(path: &Path) -> Result<Option<Registration>> {
        let content = match fs::read(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RegistrationError::IoError {
                    path: path.to_owned(),
                    source: e,
                })
            }
        };

        serde_json::from_slice(&content)
            .map(Some)
            .map_err(|e| RegistrationError::SerializationError {
                path: path.to_owned(),
                source: e,
            })
    }

    /// Write a registration file, replacing any previous content.
    pub fn write_file(path: &Path, registration: &Registration) -> Result<()> {
        let content =
            serde_json::to_vec(registration).map_err(|e| RegistrationError::SerializationError {
                path: path.to_owned(),
                source: e,
            })?;

        fs::write(path, content).map_err(|e| RegistrationError::IoError {
            path: path.to_owned(),
            source: e,
        })
    }

    /// Current registration, if any.
    pub fn get(&self) -> Option<Registration> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the registration and return the previous one.
    ///
    /// Persistence failures are logged; the new value is kept in memory
    /// regardless.
    pub fn set<T: Into<String>>(&self, destination: T) -> Option<Registration> {
        let registration = Registration::new(destination);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);

        if let Some(path) = &self.path {
            if let Err(e) = Self::write_file(path, &registration) {
                error!(
                    message = "Could not persist registration, keeping it in memory only",
                    destination = %registration.destination,
                    error = %e
                );
            }
        }

        current.replace(registration)
    }
}
