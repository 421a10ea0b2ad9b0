//! Response handling module.
//!
//! This module provides the [`ResponseEnvelope`], the raw and not yet typed
//! payload of a Loqate response, along with the sentinel error used when a
//! request never produced a usable payload.

mod envelope;

pub use envelope::{
    RawItem, ResponseEnvelope, ERROR_KEY, SENTINEL_DESCRIPTION, SENTINEL_ERROR_ID,
    SENTINEL_RESOLUTION,
};
