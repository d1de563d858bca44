#![allow(dead_code)]

pub mod driver;
pub mod game_setup;
pub mod test_state;
