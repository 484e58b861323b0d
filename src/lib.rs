//! # kanka - typed client for the Kanka REST API
//!
//! A blocking Rust client for [Kanka](https://kanka.io), the campaign
//! management service for tabletop role-playing games. Every resource kind
//! (characters, locations, quests, relations, ...) gets a service offering
//! the Index/Get/Create/Update/Delete operations the API exposes for it.
//!
//! ## Features
//!
//! - One typed service per resource, created once per [`Client`]
//! - "Simple" forms for create/update bodies, validated before sending
//! - "Changed since" filtering of listings through a [`Time`]
//! - Non-success statuses classified as temporary or permanent
//! - Pluggable [`Transport`] for testing or custom HTTP stacks
//!
//! ## Basic Usage
//!
//! ```no_run
//! use kanka::Client;
//! use kanka::resources::SimpleCharacter;
//!
//! fn main() -> Result<(), kanka::KankaError> {
//!     let client = Client::new("personal-access-token")?;
//!
//!     // List the characters of a campaign
//!     let characters = client.characters.index(5272, None)?;
//!     for ch in characters.iter() {
//!         println!("{} ({})", ch.simple.name, ch.meta.id);
//!     }
//!
//!     // Create one
//!     let created = client.characters.create(
//!         5272,
//!         &SimpleCharacter {
//!             name: "Irwie Gemstone".to_string(),
//!             ..Default::default()
//!         },
//!     )?;
//!     println!("created #{}", created.meta.id);
//!     Ok(())
//! }
//! ```
//!
//! ## Synchronizing
//!
//! Every listing carries the server's `sync` time. Passing it back to the next
//! Index call returns only the resources changed since then.
//!
//! ```no_run
//! # let client = kanka::Client::new("token")?;
//! let first = client.locations.index(5272, None)?;
//! let changed = client.locations.index(5272, first.sync.as_ref())?;
//! # Ok::<(), kanka::KankaError>(())
//! ```

pub mod client;
pub mod endpoint;
pub mod error;
pub mod payload;
pub mod resources;
pub mod response;
pub mod rest;
mod service;
pub mod time;
pub mod token;

// Re-export main types for convenience
pub use client::{Client, Config};
pub use endpoint::Endpoint;
pub use error::{KankaError, Result, ResultExt, ServerError, ValidationError};
pub use payload::Payload;
pub use response::List;
pub use rest::{HttpRequest, HttpResponse, ReqwestTransport, RestContext, Transport};
pub use time::Time;
pub use token::Token;
