mod errors;
mod model;
mod storage;

pub(crate) use model::AppConfig;
pub(crate) use storage::{ConfigLoadStatus, load_config};
