//! # Neo Primitives
//!
//! Fixed-size value types shared by the Neo N3 SDK codecs.
//!
//! ```rust
//! use neo_primitives::UInt160;
//!
//! let hash: UInt160 = "0x0000000000000000000000000000000000000001".parse().unwrap();
//! assert_eq!(hash.to_array()[0], 1);
//! ```

pub mod error;
pub mod uint160;

pub use error::{PrimitiveError, PrimitiveResult};
pub use uint160::{UInt160, UINT160_SIZE};
