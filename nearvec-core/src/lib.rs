//! # nearvec-core
//!
//! Foundation crate for the nearvec workspace:
//! - Error types
//! - Store configuration
//! - Metrics collection
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  nearvec-core                   │
//! ├─────────────────────────────────────────────────┤
//! │  • error    - Error handling                    │
//! │  • config   - Bucket-exponent schedules         │
//! │  • metrics  - Store activity counters           │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod metrics;

// Re-export commonly used types
pub use config::{BucketSchedule, MAX_BUCKET_BITS};
pub use error::{Error, Result};
pub use metrics::{MetricsSnapshot, StoreMetrics};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
