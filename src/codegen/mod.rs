//! lisc Code Generation
//!
//! One backend: C-style call syntax emitted as plain text.

pub mod c;

pub use c::generate as generate_c;
