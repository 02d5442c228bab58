//! Items referenced by code generated in `cs_reflect_derive`.
//!
//! The invoking crate may be `no_std` without `extern crate alloc`,
//! so everything the macros need from `alloc` goes through here.

pub use alloc::boxed::Box;
