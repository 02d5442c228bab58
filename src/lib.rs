//! Runtime struct introspection for flag-to-struct binders.
//!
//! This crate is a facade, see [`reflect`] for the actual content.
//!
//! ```
//! use clistruct::reflect::{access, derive::Reflect};
//!
//! #[derive(Reflect)]
//! struct Options {
//!     pub verbose: bool,
//! }
//!
//! let mut opts = Options { verbose: false };
//! access::set_struct_field(&mut opts, "verbose", true).unwrap();
//! assert!(opts.verbose);
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use cs_reflect as reflect;
