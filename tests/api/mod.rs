//! REST API endpoint tests

mod bookmark_tests;
mod health_tests;
mod user_connection_tests;
