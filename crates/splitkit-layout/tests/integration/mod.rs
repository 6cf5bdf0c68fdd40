//! Integration test modules.

mod resize_flow;
mod style_lookup;
