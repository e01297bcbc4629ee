//! Top-level facade crate for instrumeter.
//!
//! Re-exports the core contracts and the dispatch library so components can depend on a single crate.

pub mod core {
    pub use instrumeter_core::*;
}

pub mod dispatch {
    pub use instrumeter_dispatch::*;
}
