mod database;
mod state_builder;

pub use database::connect_pool;
pub use state_builder::{assemble_app_state, build_app_state};
