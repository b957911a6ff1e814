//! court-core - Design state, shareable links and quote requests for
//! sport-court color designs.
//!
//! A design assigns colors to the regions of a basketball, tennis or
//! pickleball court, toggles hoops/nets, and optionally overlays the outlines
//! of other courts. The [`DesignStore`] owns that state; the [`sync`] module
//! keeps it in step with the `design` URL parameter and local storage.
//!
//! # Example
//!
//! ```no_run
//! use court_core::{Color, CourtType, ElementType, Location, MemoryStorage, Session};
//! use std::rc::Rc;
//!
//! let storage = Rc::new(MemoryStorage::new());
//! let mut session = Session::start(storage, Location::court(CourtType::Tennis));
//! session.store_mut().select_element(ElementType::TennisPlayingArea);
//! session.store_mut().set_color(Color::new("#111f2c"));
//! println!("{}", session.location());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod quote;
pub mod render;
pub mod session;
pub mod store;
pub mod sync;
pub mod taxonomy;

// Re-exports for convenience
pub use config::AppConfig;
pub use error::{DesignError, ErrorKind, Result};
pub use model::{
    Color, CourtDesign, CourtSummary, CourtType, DesignState, DesignSummary, ElementType,
    Overlays, OverlaysPatch,
};
pub use quote::{generate_quote_text, ContactInfo, ContactMethod, MailLauncher, QuoteSnapshot};
pub use render::{RenderFrame, Renderer};
pub use session::Session;
pub use store::DesignStore;
pub use sync::{FileStorage, Location, MemoryStorage, PersistenceAdapter, Storage};
