// EssaySort - app/mod.rs
//
// Application layer: page assembly, event dispatch, state management and
// the headless runner.
// Dependencies: core layer, platform (config, source loading).
// Must NOT depend on: ui.

pub mod batch;
pub mod events;
pub mod page;
pub mod state;
