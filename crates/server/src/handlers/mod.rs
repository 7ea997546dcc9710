//! HTTP handlers.

mod import;
mod meta;
mod visits;

pub use import::{import_contacts, import_content};
pub use meta::{health_handler, root_handler};
pub use visits::{stats_handler, track_visit, visits_handler};
