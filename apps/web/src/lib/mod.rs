//! Shared frontend utilities: configuration, the HTTP helper used by the
//! submission client, error types, the browser clock and logging, build
//! metadata and the Tailwind class constants pages share.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod clock;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod logging;
pub(crate) mod theme;

pub(crate) use api::post_json;
pub(crate) use config::AppConfig;
pub(crate) use errors::AppError;
