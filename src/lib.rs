pub mod catalog;
pub mod config;
pub mod output;
pub mod prefs;
pub mod scoring;
