//! RocketShoes Domain Concerns

pub mod carts;
