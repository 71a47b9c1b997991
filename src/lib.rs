//! Rank-order counts over a stream of bounded positive integers.
//!
//! Values go into a [`Capture`], which keeps one counter per possible value.
//! [`Capture::build`] turns those counters into a [`Snapshot`] holding, for
//! every value, how many captured values sit strictly below and strictly above
//! it. Queries on the snapshot never rescan the data:
//!
//! ```
//! use data_capture::Capture;
//!
//! let mut capture = Capture::new();
//! for value in [3, 9, 3, 4, 6] {
//!     capture.add(value)?;
//! }
//! let stats = capture.build();
//!
//! assert_eq!(stats.less(4)?, 2);
//! assert_eq!(stats.between(3, 6)?, 4);
//! assert_eq!(stats.greater(4)?, 2);
//! # Ok::<(), data_capture::CaptureError>(())
//! ```

mod capture;
mod error;
mod snapshot;
mod validate;

pub use capture::Capture;
pub use error::{Arity, CaptureError, Operation, Result};
pub use snapshot::{Rank, Snapshot};
pub use validate::{Candidate, IntoCandidate};

/// Default inclusive ceiling for captured values.
pub const MAX_VALUE: u32 = 999;
