pub mod cards;
pub mod grid;
pub mod loader;
pub mod logging;
pub mod models;
pub mod ui_util;
