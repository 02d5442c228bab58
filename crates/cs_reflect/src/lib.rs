//! Runtime struct introspection.
//!
//! Given a value reached through a reference, this crate can look up a field
//! by name, check that it may be written, and read or replace its content.
//! It also parses the small tag syntax carried by field descriptors.
//!
//! Type information is produced at compile time by
//! [`#[derive(Reflect)]`](derive::Reflect) instead of runtime metadata, and
//! is rebuilt on demand each time it is requested.
//!
//! - [`Reflect`]: the base trait, see also [`ops`] for kind-specific interfaces.
//! - [`info`]: static type and field descriptors.
//! - [`access`]: field lookup, mutation, indirection and validation helpers.
//! - [`tags`]: field tag getters and the list scanner.
//!
//! # Example
//!
//! ```
//! use cs_reflect::{access, derive::Reflect, tags};
//! use cs_reflect::info::Typed;
//!
//! #[derive(Reflect)]
//! struct Server {
//!     #[reflect(tag(flag = "port", alias = "['p', 'listen']"))]
//!     pub port: u16,
//!     secret: String,
//! }
//!
//! let mut server = Server { port: 80, secret: String::new() };
//!
//! access::set_struct_field(&mut server, "port", 8080_u16).unwrap();
//! assert_eq!(server.port, 8080);
//!
//! // private fields are not part of the exported surface
//! assert!(access::get_struct_field(&mut server, "secret").is_err());
//!
//! let info = Server::type_info();
//! let field = info.as_struct().unwrap().field("port").unwrap();
//! assert_eq!(tags::get_struct_field_tag(field, "flag"), "port");
//! assert_eq!(tags::get_struct_field_tag_slice(field, "alias"), ["p", "listen"]);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names this crate `::cs_reflect`, including inside itself.
extern crate self as cs_reflect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod reflection;

pub mod access;
pub mod impls;
pub mod info;
pub mod ops;
pub mod tags;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use cs_reflect_derive as derive;
pub use error::AccessError;
pub use reflection::Reflect;
