//! Static file server for the browser build of the game.
//!
//! Serves files from one directory: `/` maps to `index.html`, content types
//! come from the file extension, missing files are 404 and other read
//! failures are 500.

pub mod config;
pub mod files;
pub mod server;

pub use config::ServerConfig;
pub use files::{content_type_for, resolve, respond};
pub use server::{router, run_server};
