//! Request-scoped helpers layered on the session.

pub mod session;
