//! Typed async client for the TheHive v5 case-management REST API.
//!
//! Every operation maps one-to-one onto an HTTP call against a TheHive
//! instance; queries are composed with the typed builders in [`query`] and
//! posted to the generic query endpoint as a stage pipeline.
//!
//! ```no_run
//! use thehive_client::{Client, Config};
//! use thehive_client::query::{FilterExpr, Paginate, SortExpr};
//!
//! # async fn run() -> thehive_client::Result<()> {
//! let client = Client::new(&Config::new("https://hive.example.org", "apikey"))?;
//!
//! let alerts = client
//!     .alert()
//!     .find(
//!         Some(&(FilterExpr::eq("status", "New") & FilterExpr::gte("severity", 2))),
//!         Some(&SortExpr::desc("date")),
//!         Some(&Paginate::new(0, 25)),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod alert;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod session;

pub use alert::AlertEndpoint;
pub use config::Config;
pub use error::{Error, Result};
pub use session::Session;

/// Handle to a TheHive instance, entry point for all endpoint groups.
pub struct Client {
    session: Session,
}

impl Client {
    /// Create a new client from the given config
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            session: Session::new(config)?,
        })
    }

    /// Alert operations
    pub fn alert(&self) -> AlertEndpoint<'_> {
        AlertEndpoint::new(&self.session)
    }

    /// The underlying HTTP session
    pub fn session(&self) -> &Session {
        &self.session
    }
}
