//! Auth feature: the session context, the route guards and the client for the
//! (mock) credential service. Passwords stay in the login and register forms
//! and are never logged.

pub(crate) mod client;
mod guards;
pub(crate) mod state;

pub(crate) use guards::{RequireAuth, ResolveRedirect};
