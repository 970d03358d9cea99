mod active_order_world;
mod setups;
mod steps;

pub use active_order_world::{ActiveOrderSystem, ActiveOrderWorld};
