//! PXstats Resolve — maps compact dex codes to display names.

pub mod dex;

pub use dex::Dex;
