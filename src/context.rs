//! Application Context
//!
//! Shared configuration provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide configuration provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Configured API base URL; `None` disables every network action
    pub api_base: Option<&'static str>,
}

impl AppContext {
    pub fn new(api_base: Option<&'static str>) -> Self {
        Self { api_base }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
