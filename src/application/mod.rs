pub mod animation_loop;

pub use animation_loop::*;
