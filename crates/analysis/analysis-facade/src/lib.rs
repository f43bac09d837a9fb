//! Analysis Facade
//!
//! Unified re-exports for the time-series analysis module.
//!
//! This facade provides a single entry point to all analysis functionality:
//! - Data model, traits and `AnalysisError` from SPI
//! - Configuration, country factors and requests from API
//! - Generator, analyzers, random sources and the orchestrator from Core

// Re-export everything from SPI
pub use analysis_spi::*;

// Re-export everything from API
pub use analysis_api::*;

// Re-export everything from Core
pub use analysis_core::*;
