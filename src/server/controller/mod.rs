//! HTTP request handlers.
//!
//! Controllers extract request parameters and the session, delegate to a service, and
//! turn the result into a page, a redirect or a short plain-text body. Moderation runs
//! on the blocking pool because the bridge blocks its calling thread.

pub mod moderation;
pub mod page;
