mod debug;
pub use debug::*;

mod map;
pub(crate) use map::impl_reflect_for_map;
