//! A designer session: one store wired to local storage and the address bar.
//!
//! Start-up order is fixed: hydrate from storage, then reconcile with the
//! location. After that every store change is persisted and re-encoded into
//! the location by store subscribers.

use crate::config::{AppConfig, LOCATION_KEY};
use crate::error::Result;
use crate::model::DesignState;
use crate::quote::{submit_quote, ContactInfo, MailLauncher, QuoteRequest, QuoteSnapshot};
use crate::render::RenderFrame;
use crate::store::DesignStore;
use crate::sync::url::{reconcile, share_url, sync_location, Location};
use crate::sync::{PersistenceAdapter, Storage};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, warn};

/// Store, storage and location, kept consistent.
pub struct Session {
    store: DesignStore,
    location: Rc<RefCell<Location>>,
    storage: Rc<dyn Storage>,
    persistence: PersistenceAdapter,
}

impl Session {
    /// Hydrate from storage and reconcile with `location`.
    pub fn start(storage: Rc<dyn Storage>, location: Location) -> Self {
        let persistence = PersistenceAdapter::new(Rc::clone(&storage));
        let mut store = DesignStore::new();
        persistence.hydrate(&mut store);

        let location = Rc::new(RefCell::new(location));

        let saver = persistence.clone();
        store.subscribe(move |state| {
            if let Err(err) = saver.save(state) {
                warn!("Failed to persist design: {}", err);
            }
        });

        let address = Rc::clone(&location);
        let address_storage = Rc::clone(&storage);
        store.subscribe(move |state| {
            let mut address = address.borrow_mut();
            update_address(&mut address, state, address_storage.as_ref());
        });

        let mut session = Self {
            store,
            location,
            storage,
            persistence,
        };
        session.reconcile();
        session
    }

    /// Last location written by a previous session, if any.
    pub fn last_location(storage: &dyn Storage) -> Option<Location> {
        let href = storage.get_item(LOCATION_KEY).ok().flatten()?;
        match Location::parse(&href) {
            Ok(location) => Some(location),
            Err(err) => {
                warn!("Ignoring stored location '{}': {}", href, err);
                None
            }
        }
    }

    /// Route or parameter change.
    pub fn navigate(&mut self, location: Location) {
        *self.location.borrow_mut() = location;
        self.reconcile();
    }

    fn reconcile(&mut self) {
        let current = self.location.borrow().clone();
        debug!("Reconciling with {}", current);
        reconcile(&mut self.store, &current);

        // The store may not have changed, but a stale or malformed
        // parameter still has to be rewritten.
        update_address(
            &mut self.location.borrow_mut(),
            self.store.state(),
            self.storage.as_ref(),
        );
    }

    pub fn store(&self) -> &DesignStore {
        &self.store
    }

    /// Mutable store access; changes are persisted and re-encoded as they
    /// happen.
    pub fn store_mut(&mut self) -> &mut DesignStore {
        &mut self.store
    }

    pub fn state(&self) -> &DesignState {
        self.store.state()
    }

    /// Current address-bar location.
    pub fn location(&self) -> Location {
        self.location.borrow().clone()
    }

    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame::capture(self.store.state())
    }

    /// Shareable link for the current design.
    pub fn share_url(&self, origin: &str) -> Result<String> {
        share_url(origin, self.store.state())
    }

    /// Forget all stored state and return to the defaults.
    pub fn clear(&mut self) -> Result<()> {
        self.store.reset(false);
        let court = self.store.state().selected_court;
        self.navigate(Location::court(court));
        self.persistence.clear()?;
        self.storage.remove_item(LOCATION_KEY)
    }

    /// Validate contact details and hand a quote request to the launcher.
    pub fn request_quote(
        &self,
        contact: ContactInfo,
        config: &AppConfig,
        date: NaiveDate,
        launcher: &mut dyn MailLauncher,
    ) -> Result<QuoteRequest> {
        let snapshot = QuoteSnapshot::capture(self.store.state(), contact);
        submit_quote(&snapshot, config, date, launcher)
    }
}

fn update_address(location: &mut Location, state: &DesignState, storage: &dyn Storage) {
    if let Err(err) = sync_location(location, state) {
        warn!("Failed to encode design into URL: {}", err);
        return;
    }
    if let Err(err) = storage.set_item(LOCATION_KEY, &location.href()) {
        warn!("Failed to remember location: {}", err);
    }
}
