#![allow(clippy::new_without_default)]

pub mod catalog;
pub mod device;
pub mod error;
pub mod experience;
pub mod host;
pub mod util;
pub mod viewer;
