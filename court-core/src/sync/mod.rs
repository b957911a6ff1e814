//! Keeping the design store in step with the address bar and local storage.

pub mod persistence;
pub mod url;

pub use persistence::{FileStorage, MemoryStorage, PersistenceAdapter, Storage};
pub use url::{
    apply_patch, decode_summary, encode_summary, has_customizations, reconcile, share_url,
    sync_location, CourtPatch, DesignPatch, Location,
};
