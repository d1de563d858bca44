pub mod app_state;
pub mod round_locks;
