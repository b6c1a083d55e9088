mod settings;

pub use settings::{Settings, ENV_PREFIX};
