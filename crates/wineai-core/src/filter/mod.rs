//! Sidebar filter selections (grape, region, price).
//!
//! The filter panel owns a [`FilterSelection`] and hands it to the turn
//! handler on every interaction; it is serialized into the outbound request
//! with [`FilterSelection::to_context`].

mod model;
mod price;

pub use model::{FilterSelection, Grape, NOT_SPECIFIED, Region};
pub use price::{
    DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN, PRICE_CEILING, PRICE_FLOOR, PRICE_STEP, PriceRange,
};
