//! Value module - In-memory representation of decoded YAML/JSON documents.
//!
//! Every manifest is reduced to a [`Value`] tree before it is compared.

mod value;

pub use value::*;
