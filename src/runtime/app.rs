//! Pokédex app - navigation between the list and detail screens
//!
//! Owns both screen controllers and the catalog worker, and routes each
//! worker reply to the screen its ticket names.

use std::time::Duration;
use tracing::{debug, info, warn};

use super::config::{ApiSettings, Config};
use super::http::HttpTransport;
use super::worker::{CatalogWorker, WorkerReply};
use crate::core::catalog::{CatalogClient, CatalogRequest, CatalogResponse, FetchError};
use crate::core::io_traits::TransportError;
use crate::core::screen::{DetailScreen, ListScreen, RequestTicket, ScreenId};

pub struct PokedexApp {
    worker: CatalogWorker,
    settings: ApiSettings,
    list: ListScreen,
    /// Top of the navigation stack when present
    detail: Option<DetailScreen>,
}

impl PokedexApp {
    pub fn new(worker: CatalogWorker, settings: ApiSettings) -> Self {
        Self {
            worker,
            settings,
            list: ListScreen::new(),
            detail: None,
        }
    }

    /// Build the app against the real HTTP API
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.api)?;
        let client = CatalogClient::with_base_url(transport, config.api.base_url.as_str());
        info!(base_url = %client.base_url(), "[app] Catalog client ready");
        Ok(Self::new(CatalogWorker::spawn(client), config.api.clone()))
    }

    pub fn current_screen(&self) -> ScreenId {
        if self.detail.is_some() {
            ScreenId::Detail
        } else {
            ScreenId::List
        }
    }

    pub fn list_screen(&self) -> &ListScreen {
        &self.list
    }

    pub fn detail_screen(&self) -> Option<&DetailScreen> {
        self.detail.as_ref()
    }

    /// First display of the list screen: request the configured page
    pub fn start(&mut self) -> bool {
        match self.list.begin_load() {
            Some(ticket) => self.submit_list(ticket),
            None => false,
        }
    }

    /// Push the detail screen for `name` and request its record
    pub fn open_details(&mut self, name: &str) -> bool {
        if let Some(mut previous) = self.detail.take() {
            previous.unmount();
        }

        let mut screen = DetailScreen::new(name);
        let submitted = match screen.begin_load() {
            Some(ticket) => submit_detail(&self.worker, &mut screen, ticket),
            None => false,
        };
        debug!(name, "[app] Opened details");
        self.detail = Some(screen);
        submitted
    }

    /// Pop the detail screen. Its pending response, if any, will be dropped.
    pub fn go_back(&mut self) -> bool {
        match self.detail.take() {
            Some(mut screen) => {
                screen.unmount();
                debug!(name = screen.name(), "[app] Closed details");
                true
            }
            None => false,
        }
    }

    /// User-initiated reload of the visible screen
    pub fn reload(&mut self) -> bool {
        if let Some(screen) = self.detail.as_mut() {
            return match screen.reload() {
                Some(ticket) => submit_detail(&self.worker, screen, ticket),
                None => false,
            };
        }
        match self.list.reload() {
            Some(ticket) => self.submit_list(ticket),
            None => false,
        }
    }

    /// Apply every finished request. Returns how many were applied.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Some(reply) = self.worker.poll() {
            applied += usize::from(self.route(reply));
        }
        applied
    }

    /// Wait up to `timeout` for one finished request, then drain the rest
    pub fn pump_timeout(&mut self, timeout: Duration) -> usize {
        match self.worker.poll_timeout(timeout) {
            Some(reply) => usize::from(self.route(reply)) + self.pump(),
            None => 0,
        }
    }

    fn submit_list(&mut self, ticket: RequestTicket) -> bool {
        let request = CatalogRequest::List {
            limit: self.settings.page_limit,
            offset: self.settings.page_offset,
        };
        match queue(&self.worker, ticket, request) {
            Ok(()) => true,
            Err(e) => {
                self.list.apply(ticket, Err(e));
                false
            }
        }
    }

    fn route(&mut self, reply: WorkerReply) -> bool {
        let WorkerReply { ticket, response } = reply;
        match (ticket.screen, response) {
            (ScreenId::List, CatalogResponse::List(result)) => self.list.apply(ticket, result),
            (ScreenId::Detail, CatalogResponse::Detail(result)) => match self.detail.as_mut() {
                Some(screen) => screen.apply(ticket, result),
                None => {
                    debug!(generation = ticket.generation, "[app] Detail screen gone, dropping response");
                    false
                }
            },
            (screen, _) => {
                warn!(?screen, "[app] Response kind does not match screen");
                false
            }
        }
    }
}

fn submit_detail(worker: &CatalogWorker, screen: &mut DetailScreen, ticket: RequestTicket) -> bool {
    match queue(worker, ticket, CatalogRequest::Detail(screen.identifier())) {
        Ok(()) => true,
        Err(e) => {
            screen.apply(ticket, Err(e));
            false
        }
    }
}

/// Hand a request to the worker. A request that cannot be queued fails
/// right away so its screen leaves `Loading` and can be reloaded.
fn queue(
    worker: &CatalogWorker,
    ticket: RequestTicket,
    request: CatalogRequest,
) -> Result<(), FetchError> {
    let operation = request.operation();
    if worker.submit(ticket, request) {
        Ok(())
    } else {
        Err(FetchError::new(
            operation,
            TransportError::Request("worker unavailable".to_string()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io_traits::mocks::MockTransport;
    use crate::core::screen::LoadState;
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Instant;

    const WAIT: Duration = Duration::from_secs(5);

    fn detail_json(id: u32, name: &str, type_name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "height": 10,
            "weight": 130,
            "base_experience": 142,
            "types": [{ "slot": 1, "type": { "name": type_name } }],
            "stats": [{ "base_stat": 60, "effort": 0, "stat": { "name": "hp" } }],
            "abilities": [{ "ability": { "name": "overgrow" }, "is_hidden": false, "slot": 1 }],
            "sprites": {}
        })
    }

    fn app_with(mock: &Arc<MockTransport>, settings: ApiSettings) -> PokedexApp {
        let worker = CatalogWorker::spawn(CatalogClient::new(Arc::clone(mock)));
        PokedexApp::new(worker, settings)
    }

    /// Pump until `done` holds or the wait expires
    fn pump_until(app: &mut PokedexApp, done: impl Fn(&PokedexApp) -> bool) {
        let deadline = Instant::now() + WAIT;
        while !done(app) && Instant::now() < deadline {
            app.pump_timeout(Duration::from_millis(50));
        }
    }

    #[test]
    fn test_start_loads_configured_page() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_json(json!({
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }));
        let settings = ApiSettings {
            page_limit: 2,
            ..ApiSettings::default()
        };
        let mut app = app_with(&mock, settings);

        assert!(app.start());
        assert!(app.list_screen().state().is_loading());
        // Not re-entrant while the first load is in flight
        assert!(!app.start());

        pump_until(&mut app, |app| !app.list_screen().state().is_loading());
        assert_eq!(app.list_screen().cards().len(), 2);
        assert_eq!(app.list_screen().cards()[0].display_name, "Bulbasaur");
        assert_eq!(
            mock.last_request().as_deref(),
            Some("https://pokeapi.co/api/v2/pokemon?limit=2&offset=0")
        );
    }

    #[test]
    fn test_list_failure_then_reload() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_response(500, "boom");
        mock.queue_json(json!({ "results": [] }));
        let mut app = app_with(&mock, ApiSettings::default());

        app.start();
        pump_until(&mut app, |app| !app.list_screen().state().is_loading());
        assert_eq!(app.list_screen().state().error(), Some("failed to load list"));

        assert!(app.reload());
        pump_until(&mut app, |app| !app.list_screen().state().is_loading());
        assert_eq!(app.list_screen().state(), &LoadState::Loaded(Vec::new()));
        assert_eq!(mock.request_count(), 2);
    }

    #[test]
    fn test_navigation_forward_and_back() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_json(detail_json(1, "bulbasaur", "grass"));
        let mut app = app_with(&mock, ApiSettings::default());

        assert_eq!(app.current_screen(), ScreenId::List);
        assert!(app.open_details("bulbasaur"));
        assert_eq!(app.current_screen(), ScreenId::Detail);

        pump_until(&mut app, |app| {
            app.detail_screen().is_some_and(|s| s.view().is_some())
        });
        let view = app.detail_screen().and_then(DetailScreen::view).unwrap();
        assert_eq!(view.display_name, "Bulbasaur");
        assert_eq!(view.weight, "13.0kg");
        assert_eq!(
            mock.last_request().as_deref(),
            Some("https://pokeapi.co/api/v2/pokemon/bulbasaur")
        );

        assert!(app.go_back());
        assert_eq!(app.current_screen(), ScreenId::List);
        assert!(!app.go_back());
    }

    #[test]
    fn test_late_response_after_dismissal_is_dropped() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_json(detail_json(1, "bulbasaur", "grass"));
        mock.queue_json(detail_json(4, "charmander", "fire"));
        let mut app = app_with(&mock, ApiSettings::default());

        app.open_details("bulbasaur");
        app.go_back();
        app.open_details("charmander");

        pump_until(&mut app, |app| {
            app.detail_screen().is_some_and(|s| s.view().is_some())
        });
        let screen = app.detail_screen().unwrap();
        assert_eq!(screen.name(), "charmander");
        let view = screen.view().unwrap();
        assert_eq!(view.display_name, "Charmander");
        assert_eq!(view.accent_color, "#F08030");
        assert_eq!(mock.request_count(), 2);
    }

    #[test]
    fn test_response_for_closed_screen_is_not_applied() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_json(detail_json(1, "bulbasaur", "grass"));
        let mut app = app_with(&mock, ApiSettings::default());

        app.open_details("bulbasaur");
        app.go_back();

        let deadline = Instant::now() + WAIT;
        let mut applied = 0;
        while mock.request_count() == 0 && Instant::now() < deadline {
            applied += app.pump_timeout(Duration::from_millis(50));
        }
        applied += app.pump_timeout(Duration::from_millis(200));
        assert_eq!(applied, 0);
        assert!(app.detail_screen().is_none());
    }

    #[test]
    fn test_detail_failure_message() {
        let mock = Arc::new(MockTransport::new());
        mock.queue_response(404, "Not Found");
        let mut app = app_with(&mock, ApiSettings::default());

        app.open_details("missingno");
        pump_until(&mut app, |app| {
            app.detail_screen().is_some_and(|s| !s.state().is_loading())
        });
        let screen = app.detail_screen().unwrap();
        assert_eq!(screen.state().error(), Some("failed to load details"));
        assert!(screen.view().is_none());
    }

    #[test]
    fn test_unqueued_requests_fail_instead_of_hanging() {
        let mut worker = CatalogWorker::spawn(CatalogClient::new(MockTransport::new()));
        worker.shutdown();
        let mut app = PokedexApp::new(worker, ApiSettings::default());

        assert!(!app.start());
        assert!(!app.list_screen().is_in_flight());
        assert_eq!(app.list_screen().state().error(), Some("failed to load list"));

        assert!(!app.open_details("bulbasaur"));
        let screen = app.detail_screen().unwrap();
        assert!(!screen.is_in_flight());
        assert_eq!(screen.state().error(), Some("failed to load details"));

        // Reload is still possible on both screens
        assert!(!app.reload());
        assert_eq!(
            app.detail_screen().unwrap().state().error(),
            Some("failed to load details")
        );
        assert!(app.go_back());
        assert!(!app.reload());
        assert_eq!(app.list_screen().state().error(), Some("failed to load list"));
        assert!(!app.list_screen().state().is_loading());
    }

    #[test]
    fn test_from_default_config() {
        let app = PokedexApp::from_config(&Config::default()).unwrap();
        assert_eq!(app.current_screen(), ScreenId::List);
        assert_eq!(app.list_screen().state(), &LoadState::Idle);
    }
}
