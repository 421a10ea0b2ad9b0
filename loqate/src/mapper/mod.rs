//! Mapping of raw response items into typed values.
//!
//! Both mappers first transcode every key of an item from the wire
//! convention to the domain convention (see [`crate::naming`]) and then
//! deserialize the resulting map into a [`Shape`].

mod attribute;
mod error;

pub use attribute::AttributeMapper;
pub use error::ErrorMapper;

use serde::de::DeserializeOwned;

use crate::naming::to_domain_key;
use crate::response::RawItem;

/// A typed record that response items can be mapped into.
///
/// The field set is whatever the type's [`Deserialize`](serde::Deserialize)
/// implementation declares, using `snake_case` field names. Undeclared
/// incoming fields are ignored.
pub trait Shape: DeserializeOwned {
    /// Name reported in schema violations.
    const NAME: &'static str;
}

/// Returns a copy of `item` with every key converted to the domain
/// convention.
pub fn transcode_keys(item: &RawItem) -> RawItem {
    item.iter()
        .map(|(key, value)| (to_domain_key(key), value.clone()))
        .collect()
}
