pub mod config;
pub mod error;
pub mod logging;

pub mod fetch_page;
pub mod title;
pub mod transform;
