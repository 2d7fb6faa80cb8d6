pub mod error;
pub mod instrumentation;
pub mod services;
