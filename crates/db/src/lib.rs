//! In-memory desk inventory and booking store.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use deskbooker_core::{
    Booking, BookingId, Desk, DeskBookingRepository, DeskId, DeskRepository, RepositoryError,
};
use deskbooker_kernel::{InitCtx, Module};

/// Desks and bookings held behind a single lock, so an availability query
/// and a save never interleave with another request's.
pub struct InMemoryDeskStore {
    state: Mutex<StoreState>,
}

struct StoreState {
    desks: Vec<Desk>,
    bookings: BTreeMap<BookingId, Booking>,
    next_id: u64,
}

impl InMemoryDeskStore {
    /// Store seeded with `desks`, kept in ascending id order.
    pub fn new(mut desks: Vec<Desk>) -> Self {
        desks.sort_by_key(|desk| desk.id);
        desks.dedup_by_key(|desk| desk.id);
        Self {
            state: Mutex::new(StoreState {
                desks,
                bookings: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    /// Store seeded with desks `1..=count`.
    pub fn with_desk_count(count: u32) -> Self {
        Self::new(
            (1..=u64::from(count))
                .map(|id| Desk { id: DeskId(id) })
                .collect(),
        )
    }

    pub fn desk_count(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.desks.len())
    }

    /// All stored bookings, by ascending id.
    pub fn bookings(&self) -> Result<Vec<(BookingId, Booking)>, RepositoryError> {
        Ok(self
            .lock()?
            .bookings
            .iter()
            .map(|(id, booking)| (*id, booking.clone()))
            .collect())
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, RepositoryError> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::unavailable("store lock poisoned"))
    }
}

impl StoreState {
    fn is_booked(&self, desk_id: DeskId, date: NaiveDate) -> bool {
        self.bookings
            .values()
            .any(|booking| booking.desk_id == desk_id && booking.date == date)
    }
}

impl DeskRepository for InMemoryDeskStore {
    fn available_desks(&self, date: NaiveDate) -> Result<Vec<Desk>, RepositoryError> {
        let state = self.lock()?;
        Ok(state
            .desks
            .iter()
            .filter(|desk| !state.is_booked(desk.id, date))
            .copied()
            .collect())
    }
}

impl DeskBookingRepository for InMemoryDeskStore {
    fn save(&self, booking: &Booking) -> Result<BookingId, RepositoryError> {
        let mut state = self.lock()?;

        if state.is_booked(booking.desk_id, booking.date) {
            return Err(RepositoryError::DeskAlreadyBooked {
                desk_id: booking.desk_id,
                date: booking.date,
            });
        }

        let id = BookingId(state.next_id);
        state.next_id += 1;
        state.bookings.insert(id, booking.clone());

        tracing::debug!(target: "deskbooker-db", booking_id = %id, desk_id = %booking.desk_id, "booking stored");
        Ok(id)
    }
}

/// Core module exposing the store's lifecycle to the registry.
pub struct DbModule {
    store: Arc<InMemoryDeskStore>,
}

impl DbModule {
    pub fn new(store: Arc<InMemoryDeskStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl Module for DbModule {
    fn name(&self) -> &'static str {
        "db"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            target: "deskbooker-db",
            desks = self.store.desk_count()?,
            configured = ctx.settings.inventory.desk_count,
            "desk inventory seeded"
        );
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        tracing::info!(
            target: "deskbooker-db",
            bookings = self.store.bookings()?.len(),
            "desk store closed"
        );
        Ok(())
    }
}

/// Create the `db` core module around `store`.
pub fn create_module(store: Arc<InMemoryDeskStore>) -> Arc<dyn Module> {
    Arc::new(DbModule::new(store))
}
