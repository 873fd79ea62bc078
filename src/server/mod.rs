//! Server-side backend: the HTTP dashboard and the Discord gateway behind it.
//!
//! The backend uses Axum as the web framework and Serenity for the Discord bot. The two
//! run on separate executors: request handling on the main Tokio runtime, the bot on a
//! dedicated single-threaded runtime reached through the bridge.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and flash/redirect handling
//! - **Service Layer** (`service/`) - Parameter validation, DTO conversion and moderation orchestration
//! - **Gateway** (`gateway/`) - Guild cache, connection state and Discord moderation calls
//! - **Model Layer** (`model/`) - Cached guild snapshots and moderation requests
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session-backed flash messages and return-to URLs
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Token** (`token`) - Bot token and session secret loaded from secret files
//! - **Executor** (`executor`) - Dedicated thread running the gateway runtime
//! - **Bridge** (`bridge`) - Blocking submission of work to the gateway executor
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Bot startup and shutdown through the bridge
//! - **Router** (`router`) - Axum route and session configuration
//! - **Bot** (`bot/`) - Discord bot connection and event handlers
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** reads the session and calls a service
//! 3. **Service** validates ids against the gateway cache
//! 4. For moderation, the **Service** submits the action through the **Bridge** and
//!    blocks until the gateway executor reports the outcome
//! 5. **Controller** renders a page, redirects back, or returns a plain-text body

pub mod bot;
pub mod bridge;
pub mod config;
pub mod controller;
pub mod error;
pub mod executor;
pub mod gateway;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod token;
pub mod util;
