// EssaySort - platform/mod.rs
//
// Platform abstraction layer: filesystem, config, preference storage and
// page loading.
// Dependencies: util, core data types, directories, scraper, url.
// Must NOT depend on: app, ui.

pub mod config;
pub mod fs;
pub mod prefs;
pub mod source;
