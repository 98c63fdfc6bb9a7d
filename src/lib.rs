pub mod assistant;
pub mod controller;
pub mod conversation;
pub mod prefs;
pub mod theme;
pub mod types;
pub mod voice;

#[cfg(any(feature = "desktop", feature = "web", feature = "mobile"))]
pub mod ui;
#[cfg(any(feature = "desktop", feature = "web", feature = "mobile"))]
pub mod views;
