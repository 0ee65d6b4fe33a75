// EssaySort - ui/panels/mod.rs

pub mod about;
pub mod sections;
pub mod toolbar;
