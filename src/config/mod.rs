pub mod settings;

pub use settings::{AnimationSettings, ApiSettings, AppSettings, CardSettings, Settings};
