//! Page components

mod explore;

pub use explore::{Explore, ExploreProps};
