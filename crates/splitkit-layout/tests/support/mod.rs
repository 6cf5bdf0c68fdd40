//! Test support utilities for SplitKit integration tests.
//!
//! - TestGrid: a DOM-like grid element with inline, matched and computed styles
//! - Assertions: tolerance-based offset checks


pub use assertions::*;
pub use test_grid::TestGrid;

use tracing_subscriber::EnvFilter;

/// Install a test subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
