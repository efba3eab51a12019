//! Integration tests against a local mock HTTP server

mod error_handling;
mod mock_server;
mod streaming;
