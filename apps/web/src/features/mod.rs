//! Frontend features (auth, the loan application, the notification inbox) and
//! their shared logic. Routes import these modules to keep view code focused
//! on markup.

pub(crate) mod application;
pub(crate) mod auth;
pub(crate) mod inbox;
