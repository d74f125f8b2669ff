pub mod auth;
pub mod icon;
pub mod pages;

pub use icon::{Icon, icons};
