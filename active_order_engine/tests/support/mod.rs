#![allow(dead_code)]

pub mod fixtures;
pub mod mocks;
pub mod prepare_env;
