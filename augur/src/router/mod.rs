//! Request routing: one module per capability area.

pub(crate) mod analysis;
pub(crate) mod forecast;
pub(crate) mod fundamentals;
pub(crate) mod macro_rates;
pub(crate) mod sentiment;
