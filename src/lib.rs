//! Problem details (RFC 7807) for HTTP APIs
//!
//! [`ProblemError`] carries the five standard members plus any number of
//! extension members, which are flattened next to the standard ones on the
//! wire:
//!
//! ```
//! use http_problem::ProblemError;
//!
//! let problem = ProblemError::new("Not Found", 404, "https://example.com/probs/not-found")
//!     .with_instance("/orders/42")
//!     .with_extension("order_id", &42)?;
//!
//! let json = problem.to_json()?;
//! assert_eq!(ProblemError::from_json(&json)?, problem);
//! # Ok::<(), http_problem::CodecError>(())
//! ```
pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod problem;
#[cfg(feature = "axum")]
pub mod response;

pub use catalog::ProblemDef;
pub use codec::{JsonCodec, LimitExceeded, ProblemCodec};
pub use config::DecodeLimits;
pub use error::{BoxError, CodecError, Result};
pub use problem::{is_reserved, ExtensionMembers, ProblemError, ABOUT_BLANK, RESERVED_MEMBERS};
#[cfg(feature = "axum")]
pub use response::APPLICATION_PROBLEM_JSON;

pub use serde_json::Value;
