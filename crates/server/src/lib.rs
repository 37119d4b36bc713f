use db::DBService;

pub mod config;
pub mod error;
pub mod http;
pub mod routes;

/// Application root state. The store pool is constructed once in `main`,
/// carried by reference through the router, and closed on shutdown; no
/// process-wide globals.
#[derive(Clone)]
pub struct AppState {
    db: DBService,
}

impl AppState {
    pub fn new(db: DBService) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DBService {
        &self.db
    }
}
