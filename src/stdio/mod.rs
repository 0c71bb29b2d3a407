//! Newline-delimited JSON transport over standard input/output

pub mod framer;
pub mod transport;
