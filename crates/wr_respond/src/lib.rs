//! Options-directed rendering of reflected values into response trees, and
//! validation of request inputs against target structs.
//!
//! - [`ResponseBuilder`] turns any [`Reflect`](wr_reflect::Reflect) value
//!   into a [`ResponseValue`]. An [`Options`] tree, shaped like the response,
//!   selects how nested values render.
//! - [`InputCollector`] checks an [`InputParams`] map against the fields of a
//!   struct type and fills a [`NotificationMap`].
//!
//! Both consult per-type [capabilities](capability) registered in a
//! [`TypeRegistry`](wr_reflect::registry::TypeRegistry).
//!
//! ```
//! use wr_reflect::Reflect;
//! use wr_reflect::registry::TypeRegistry;
//! use wr_respond::{Options, ResponseBuilder};
//!
//! #[derive(Reflect)]
//! pub struct Show {
//!     pub name: String,
//!     pub episodes: Vec<Episode>,
//! }
//!
//! #[derive(Reflect)]
//! pub struct Episode {
//!     pub title: String,
//!     pub minutes: u32,
//! }
//!
//! let registry = TypeRegistry::new();
//! let mut show = Show {
//!     name: "Night Air".into(),
//!     episodes: vec![Episode { title: "Pilot".into(), minutes: 42 }],
//! };
//!
//! let options: Options = serde_json::from_str(r#"{"episodes": {"type": "full"}}"#).unwrap();
//! let response = ResponseBuilder::new(&registry)
//!     .create_response(&mut show, Some(&options))
//!     .unwrap();
//!
//! assert_eq!(
//!     serde_json::to_value(&response).unwrap(),
//!     serde_json::json!({
//!         "name": "Night Air",
//!         "episodes": [{ "title": "Pilot", "minutes": 42 }],
//!     }),
//! );
//! ```

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod builder;
mod error;
mod params;
mod value;

pub mod capability;
pub mod collector;
pub mod notification;
pub mod nullable;
pub mod options;
pub mod schema;
pub mod tag;

// -----------------------------------------------------------------------------
// Exports

pub use builder::{Constructor, ResponseBuilder};
pub use collector::InputCollector;
pub use error::{CollectError, ConfigError, InputError, RenderError};
pub use notification::NotificationMap;
pub use options::{OptionValue, Options};
pub use params::InputParams;
pub use value::{ResponseMap, ResponseValue};
