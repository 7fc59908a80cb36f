//! # nearvec-index
//!
//! Approximate nearest-neighbor search over similarity-hash buckets.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     nearvec-index                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐  │
//! │  │  Vector  │──►│   Hash   │──►│  Store   │◄──│ Bounded  │  │
//! │  │ (f32/f64)│   │ Compress │   │ (buckets)│   │  Top-K   │  │
//! │  └──────────┘   └──────────┘   └──────────┘   └──────────┘  │
//! │       │                                                     │
//! │  ┌──────────┐                                               │
//! │  │ Kernels  │  multi-accumulator dot products               │
//! │  └──────────┘                                               │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `vector`: fixed-dimension vectors over either element width
//! - `kernels`: unrolled dot-product and MSE kernels
//! - `hash`: hash-range compression into bucket ids
//! - `topk`: bounded top-K streaming selection
//! - `store`: the adaptive bucketed store

pub mod hash;
pub mod kernels;
pub mod store;
pub mod topk;
pub mod vector;

pub use hash::{compress_hash, MAX_INPUT_BITS};
pub use store::NearestVectorStore;
pub use topk::BoundedTopK;
pub use vector::{ElementWidth, Vector};
