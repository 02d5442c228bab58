use crate::derive::impl_reflect_opaque;

impl_reflect_opaque!(::alloc::string::String);

mod boxed;
mod btree_map;
mod vec;
