//! Durable storage of the complete design state.
//!
//! Unlike the shareable link, the stored record carries everything, selection
//! included. Reading is forgiving: a missing or corrupt record yields `None`,
//! and a readable one is merged field by field over the defaults so records
//! written by older versions never leave holes.

use crate::config::{STORAGE_KEY, STORAGE_VERSION};
use crate::error::Result;
use crate::model::{Color, CourtDesign, CourtType, DesignState, ElementType, OverlaysPatch};
use crate::store::DesignStore;
use crate::taxonomy;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, warn};

/// Key/value string storage, in the manner of browser local storage.
pub trait Storage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// In-memory storage.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// Storage keeping one `<key>.json` file per key in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!(".{}.json.tmp", key))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        // Replace the record in one step so an interrupted write never
        // leaves a truncated file behind.
        let temp = self.temp_path_for(key);
        std::fs::write(&temp, value)?;
        if let Err(err) = std::fs::rename(&temp, self.path_for(key)) {
            let _ = std::fs::remove_file(&temp);
            return Err(err.into());
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        match std::fs::remove_file(self.path_for(key)) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}

#[derive(Serialize)]
struct PersistedRecord<'a> {
    state: &'a DesignState,
    version: u32,
}

/// Saves and restores [`DesignState`] under a fixed storage key.
#[derive(Clone)]
pub struct PersistenceAdapter {
    storage: Rc<dyn Storage>,
    key: String,
}

impl fmt::Debug for PersistenceAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistenceAdapter")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl PersistenceAdapter {
    /// Adapter using the standard storage key.
    pub fn new(storage: Rc<dyn Storage>) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: Rc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Write the full state.
    pub fn save(&self, state: &DesignState) -> Result<()> {
        let record = PersistedRecord {
            state,
            version: STORAGE_VERSION,
        };
        let json = serde_json::to_string(&record)?;
        self.storage.set_item(&self.key, &json)
    }

    /// Read the stored state, merged over defaults. Never fails: absence,
    /// read errors and corrupt records all yield `None`.
    pub fn load(&self) -> Option<DesignState> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored design under '{}'", self.key);
                return None;
            }
            Err(err) => {
                warn!("Failed to read stored design: {}", err);
                return None;
            }
        };
        let value: Value = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!("Ignoring corrupt stored design: {}", err);
                return None;
            }
        };
        // Accept both the versioned record and a bare state object.
        let state = match value.get("state") {
            Some(state) if state.is_object() => state,
            _ => &value,
        };
        match state.as_object() {
            Some(obj) => Some(merge_with_defaults(obj)),
            None => {
                warn!("Ignoring stored design: expected a JSON object");
                None
            }
        }
    }

    /// Remove the stored record.
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(&self.key)
    }

    /// Load into the store (defaults if nothing usable is stored) and mark it
    /// hydrated.
    pub fn hydrate(&self, store: &mut DesignStore) {
        let state = self.load().unwrap_or_default();
        store.replace_state(state);
        store.set_hydrated(true);
    }
}

fn field<T: DeserializeOwned>(obj: &Map<String, Value>, name: &str) -> Option<T> {
    let value = obj.get(name)?;
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            debug!("Ignoring stored field '{}': {}", name, err);
            None
        }
    }
}

/// Merge a stored state object over the default state, one field at a time.
pub fn merge_with_defaults(obj: &Map<String, Value>) -> DesignState {
    let mut state = DesignState::default();

    if let Some(court) = field::<CourtType>(obj, "selectedCourt") {
        state.selected_court = court;
    }
    if let Some(element) = field::<ElementType>(obj, "selectedElement") {
        state.selected_element = element;
    }
    if let Some(color) = field::<Color>(obj, "selectedColor") {
        state.selected_color = color;
    }

    if let Some(designs) = obj.get("designState").and_then(Value::as_object) {
        for court in CourtType::ALL {
            if let Some(design) = designs.get(court.as_str()).and_then(Value::as_object) {
                merge_court(state.design_state.court_mut(court), court, design);
            }
        }
        if let Some(overlays) = field::<OverlaysPatch>(designs, "overlays") {
            state.design_state.overlays.merge(&overlays);
        }
    }

    state
}

fn merge_court(target: &mut CourtDesign, court: CourtType, obj: &Map<String, Value>) {
    if let Some(elements) = obj.get("elements").and_then(Value::as_object) {
        for (name, color) in elements {
            let (Ok(element), Some(code)) = (name.parse::<ElementType>(), color.as_str()) else {
                debug!("Ignoring stored color '{}' for {}", name, court);
                continue;
            };
            if !taxonomy::is_valid_element(court, element) {
                debug!("Dropping stored {} color for {} court", element, court);
                continue;
            }
            target.elements.insert(element, Color::new(code));
        }
    }
    if let Some(show) = obj.get("showAccessories").and_then(Value::as_bool) {
        target.show_accessories = show;
    }
}
