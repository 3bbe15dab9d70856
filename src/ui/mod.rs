pub mod auth;
pub mod common;
pub mod icon;
pub mod logo;
pub mod pages;
pub mod typewriter;

pub use icon::{Icon, icons};
pub use logo::Logo;
pub use typewriter::use_typewriter;
