// EssaySort - core/mod.rs
//
// Core business logic layer.
// Dependencies: util, regex, serde, csv.
// Must NOT depend on: ui, platform, app, or any filesystem access.

pub mod classify;
pub mod collect;
pub mod document;
pub mod export;
pub mod filter;
pub mod model;
pub mod render;
pub mod search;
pub mod theme;
