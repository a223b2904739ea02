#[cfg(test)]
use std::cell::RefCell;

use log::debug;
use thiserror::Error;
use web_sys::{window, Storage};

use crate::audience::{Audience, UnknownAudience};
use crate::config;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("no stored audience")]
    Missing,
    #[error("unrecognized stored audience {0:?}")]
    Unrecognized(String),
    #[error("storage write rejected")]
    Write,
}

/// Durable home of the visitor's audience choice.
///
/// `load`/`save` report what went wrong; `get`/`set` are the forgiving
/// variants the page uses, falling back to [`Audience::Public`] and dropping
/// failed writes.
pub trait PreferenceStore {
    fn load(&self) -> Result<Audience, PreferenceError>;

    fn save(&self, audience: Audience) -> Result<(), PreferenceError>;

    fn get(&self) -> Audience {
        match self.load() {
            Ok(audience) => audience,
            Err(err) => {
                debug!("Using default audience: {}", err);
                Audience::default()
            }
        }
    }

    fn set(&self, audience: Audience) {
        if let Err(err) = self.save(audience) {
            debug!("Audience not saved: {}", err);
        }
    }
}

fn parse_stored(value: Option<String>) -> Result<Audience, PreferenceError> {
    let value = value.ok_or(PreferenceError::Missing)?;
    value
        .parse()
        .map_err(|UnknownAudience(raw)| PreferenceError::Unrecognized(raw))
}

/// `window.localStorage` backed store.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPreferenceStore;

impl LocalPreferenceStore {
    fn storage() -> Result<Storage, PreferenceError> {
        // local_storage() throws in some privacy modes and returns None when disabled
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PreferenceError::Unavailable)
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self) -> Result<Audience, PreferenceError> {
        let storage = Self::storage()?;
        let value = storage
            .get_item(config::AUDIENCE_STORAGE_KEY)
            .map_err(|_| PreferenceError::Unavailable)?;
        parse_stored(value)
    }

    fn save(&self, audience: Audience) -> Result<(), PreferenceError> {
        Self::storage()?
            .set_item(config::AUDIENCE_STORAGE_KEY, audience.as_str())
            .map_err(|_| PreferenceError::Write)
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: RefCell<Option<String>>,
    broken: bool,
}

#[cfg(test)]
impl MemoryPreferenceStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
            broken: false,
        }
    }

    pub fn broken() -> Self {
        Self {
            value: RefCell::new(None),
            broken: true,
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Audience, PreferenceError> {
        if self.broken {
            return Err(PreferenceError::Unavailable);
        }
        parse_stored(self.value.borrow().clone())
    }

    fn save(&self, audience: Audience) -> Result<(), PreferenceError> {
        if self.broken {
            return Err(PreferenceError::Write);
        }
        *self.value.borrow_mut() = Some(audience.as_str().to_string());
        Ok(())
    }
}
