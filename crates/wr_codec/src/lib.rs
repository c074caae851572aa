//! The encapsulated response format.
//!
//! Rendered responses are wrapped in an envelope carrying the status code,
//! the echoed input parameters, related links and notifications:
//!
//! ```json
//! {
//!     "meta": { "code": 200, "input_params": {}, "links": {} },
//!     "notifications": {},
//!     "response": {}
//! }
//! ```
//!
//! The options tree of a response comes from the `joins` parameter, a JSON
//! object such as `{"episodes": {"type": "full"}}`.

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod codec;
mod envelope;
mod error;

// -----------------------------------------------------------------------------
// Exports

pub use codec::{ApiCodec, BAD_REQUEST};
pub use envelope::{Envelope, EnvelopeOptions, join_path};
pub use error::CodecError;
