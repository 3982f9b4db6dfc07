//! `ideas-lib` — Idea list state machine and text codec.
//!
//! Holds an ordered list of ideas in memory, applies the new →
//! in-progress → complete transitions, picks ideas at random without
//! repeating the current one, and persists the list as a flat
//! `:::`-delimited text file.
//!
//! # Quick Start
//!
//! ```no_run
//! use ideas_lib::Session;
//!
//! // Load existing file (a missing file starts an empty list)
//! let mut session = Session::open(".ideas/Ideas.csv");
//!
//! // Add
//! session.add("Write blog post").unwrap();
//!
//! // Choose something to work on
//! let index = session.choose().unwrap();
//! println!("Working on {}", session.store().snapshot()[index].description);
//!
//! // Save back
//! session.suspend().unwrap();
//! ```

pub mod codec;
pub mod error;
pub mod model;
pub mod session;
pub mod store;

pub use error::{IdeaError, Result, ValidationError};
pub use model::{Idea, IdeaStatus};
pub use session::Session;
pub use store::IdeaStore;
