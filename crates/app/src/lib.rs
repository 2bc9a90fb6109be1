//! Cart state for the RocketShoes storefront.
//!
//! The [`CartStore`](domain::carts::CartStore) owns the shopper's cart, checks
//! stock with the storefront API before every quantity increase, and keeps a
//! persisted copy in a key-value slot so the cart survives restarts.

pub mod catalog;
pub mod context;
pub mod domain;
pub mod ids;
pub mod notifications;
pub mod storage;

#[cfg(test)]
mod test;
