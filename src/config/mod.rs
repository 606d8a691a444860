//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::TrackPaths;
pub use settings::Settings;
