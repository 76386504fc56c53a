//! Internal utility modules.

pub(crate) mod converter;
