// Test Helper Modules
//
// Shared infrastructure for the integration test binaries. Include with:
//
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
// HTTP flows use real actix-test servers over the in-memory backend;
// database helpers connect to a real MySQL server.

#![allow(dead_code, unused_imports)]

pub mod assertions;
pub mod test_data;
pub mod test_database;
pub mod test_server;

// Re-export commonly used types and functions
pub use assertions::*;
pub use test_data::*;
pub use test_database::*;
pub use test_server::*;
