//! Screen controllers - loading state of the list and detail screens
//!
//! Each screen owns its state privately and allows one in-flight request
//! at a time. Requests are identified by a [`RequestTicket`]; a response
//! is applied only if its ticket is still the current one and the screen
//! is still mounted. Late responses after a dismissal are dropped.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use super::catalog::FetchError;
use super::types::{EntityDetail, EntityRef, EntitySummary};
use super::view::{DetailView, SummaryCard};

// =============================================================================
// TICKETS & STATE
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    List,
    Detail,
}

/// Identifies one request issued by one screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    pub screen: ScreenId,
    pub generation: u64,
}

/// What a screen currently displays
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet
    Idle,
    Loading,
    Loaded(T),
    /// Fixed user-facing message
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    fn can_reload(&self) -> bool {
        matches!(self, LoadState::Loaded(_) | LoadState::Failed(_))
    }
}

/// Source of ticket generations. Process-wide so that a ticket issued by a
/// dismissed screen can never match one issued by its replacement.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

#[derive(Debug)]
struct RequestGuard {
    screen: ScreenId,
    /// Generation of the request in flight
    current: Option<u64>,
    mounted: bool,
}

impl RequestGuard {
    fn new(screen: ScreenId) -> Self {
        Self {
            screen,
            current: None,
            mounted: true,
        }
    }

    fn in_flight(&self) -> bool {
        self.current.is_some()
    }

    fn begin(&mut self) -> Option<RequestTicket> {
        if !self.mounted || self.in_flight() {
            return None;
        }
        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        self.current = Some(generation);
        Some(RequestTicket {
            screen: self.screen,
            generation,
        })
    }

    fn accept(&mut self, ticket: RequestTicket) -> bool {
        let is_current = self.mounted
            && ticket.screen == self.screen
            && self.current == Some(ticket.generation);
        if is_current {
            self.current = None;
        } else {
            debug!(
                screen = ?ticket.screen,
                generation = ticket.generation,
                current = ?self.current,
                mounted = self.mounted,
                "[screen] Dropping stale response"
            );
        }
        is_current
    }

    fn unmount(&mut self) {
        self.mounted = false;
        self.current = None;
    }
}

// =============================================================================
// LIST SCREEN
// =============================================================================

pub struct ListScreen {
    guard: RequestGuard,
    state: LoadState<Vec<SummaryCard>>,
}

impl ListScreen {
    pub fn new() -> Self {
        Self {
            guard: RequestGuard::new(ScreenId::List),
            state: LoadState::Idle,
        }
    }

    pub fn state(&self) -> &LoadState<Vec<SummaryCard>> {
        &self.state
    }

    pub fn cards(&self) -> &[SummaryCard] {
        self.state.data().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_mounted(&self) -> bool {
        self.guard.mounted
    }

    pub fn is_in_flight(&self) -> bool {
        self.guard.in_flight()
    }

    /// Start a load. `None` while a request is already in flight.
    pub fn begin_load(&mut self) -> Option<RequestTicket> {
        let ticket = self.guard.begin()?;
        self.state = LoadState::Loading;
        Some(ticket)
    }

    /// User-initiated reload after a result was shown
    pub fn reload(&mut self) -> Option<RequestTicket> {
        if !self.state.can_reload() {
            return None;
        }
        self.begin_load()
    }

    /// Apply a list result. Returns false if the ticket is stale.
    pub fn apply(
        &mut self,
        ticket: RequestTicket,
        result: Result<Vec<EntitySummary>, FetchError>,
    ) -> bool {
        if !self.guard.accept(ticket) {
            return false;
        }

        self.state = match result {
            Ok(summaries) => LoadState::Loaded(
                summaries
                    .iter()
                    .filter_map(|summary| match SummaryCard::from_summary(summary) {
                        Ok(card) => Some(card),
                        Err(e) => {
                            warn!(name = %summary.name, url = %summary.url, error = %e, "[screen] Skipping summary");
                            None
                        }
                    })
                    .collect(),
            ),
            Err(e) => LoadState::Failed(e.user_message().to_string()),
        };
        true
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }
}

impl Default for ListScreen {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// DETAIL SCREEN
// =============================================================================

pub struct DetailScreen {
    name: String,
    guard: RequestGuard,
    state: LoadState<DetailView>,
}

impl DetailScreen {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            guard: RequestGuard::new(ScreenId::Detail),
            state: LoadState::Idle,
        }
    }

    /// Name the screen was opened for
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn identifier(&self) -> EntityRef {
        EntityRef::Name(self.name.clone())
    }

    pub fn state(&self) -> &LoadState<DetailView> {
        &self.state
    }

    pub fn view(&self) -> Option<&DetailView> {
        self.state.data()
    }

    pub fn is_mounted(&self) -> bool {
        self.guard.mounted
    }

    pub fn is_in_flight(&self) -> bool {
        self.guard.in_flight()
    }

    pub fn begin_load(&mut self) -> Option<RequestTicket> {
        let ticket = self.guard.begin()?;
        self.state = LoadState::Loading;
        Some(ticket)
    }

    pub fn reload(&mut self) -> Option<RequestTicket> {
        if !self.state.can_reload() {
            return None;
        }
        self.begin_load()
    }

    /// Apply a detail result. Returns false if the ticket is stale.
    pub fn apply(&mut self, ticket: RequestTicket, result: Result<EntityDetail, FetchError>) -> bool {
        if !self.guard.accept(ticket) {
            return false;
        }

        self.state = match result {
            Ok(detail) => LoadState::Loaded(DetailView::from_detail(&detail)),
            Err(e) => LoadState::Failed(e.user_message().to_string()),
        };
        true
    }

    pub fn unmount(&mut self) {
        self.guard.unmount();
    }
}
