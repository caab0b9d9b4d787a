//! # Bookmark Service Library
//!
//! REST service for two independent slices:
//! - **Bookmarks**: a user's saved references to resources, with notes and tags
//! - **User connections**: per-user friend lists
//!
//! Both are backed by a document store, PostgreSQL or in-memory.
//!
//! ## Architecture
//!
//! - **Domain Layer**: Entities and repository traits
//! - **Application Layer**: Services and request DTOs
//! - **Infrastructure Layer**: Store implementations and metrics
//! - **Presentation Layer**: HTTP routes, handlers and middleware
//!
//! ## Module Structure
//!
//! ```text
//! bookmark_service/
//! +-- config/         Configuration management
//! +-- domain/         Entities and repository traits
//! +-- application/    Services and DTOs
//! +-- infrastructure/ PostgreSQL and in-memory stores, metrics
//! +-- presentation/   HTTP routes and middleware
//! +-- shared/         Errors, snowflake IDs, validation
//! ```

// Configuration module
pub mod config;

// Domain layer - Core business logic
pub mod domain;

// Application layer - Business services
pub mod application;

// Infrastructure layer - External implementations
pub mod infrastructure;

// Presentation layer - HTTP handlers
pub mod presentation;

// Shared utilities
pub mod shared;

// Application startup and state management
pub mod startup;

// Telemetry and observability
pub mod telemetry;
