#![allow(clippy::new_without_default)]

pub mod catalog;
pub mod error;
pub mod section;
pub mod title;
pub mod tmdb;
pub mod util;
