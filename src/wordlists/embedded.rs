//! Embedded word list
//!
//! The fallback list compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/builtin.rs"));
