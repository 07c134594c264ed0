// Library target exists for the criterion benchmark and the integration
// tests over the bundled datasets. The binary entry point is main.rs; this
// file re-declares the module tree so harnesses can import types via
// `quizling::engine::*` / `quizling::content::*`. Most code is only
// exercised through the binary, so suppress dead_code warnings.
#![allow(dead_code)]

// Public: used by benchmarks and integration tests
pub mod content;
pub mod engine;
pub mod feedback;

// Private: required transitively by the app modules
mod app;
mod config;
mod event;
mod ui;

rust_i18n::i18n!("locales", fallback = "en");
