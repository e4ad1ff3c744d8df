//! A Rust library and tool for decompiling files via the
//! [RetDec](https://github.com/avast/retdec) IDA plugin.
//!
//! IDA's console application (`idat`/`idat64`) is run in batch mode with one
//! of the plugin's IDC scripts. The plugin always writes its output next to
//! its input (`<input>.c`), so the library stages the input into the output
//! directory beforehand and relocates the produced file afterwards.
//!
//! # Status
//!
//! The library is **at the beginning of its development** and its state is
//! **pre-alpha** (**highly experimental**).
//!
//! # License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0,
//!   ([LICENSE-APACHE](https://github.com/s3rvac/retdec-rust/tree/master/LICENSE-APACHE)
//!   or http://www.apache.org/licenses/LICENSE-2.0)
//! * MIT License
//!   ([LICENSE-MIT](https://github.com/s3rvac/retdec-rust/tree/master/LICENSE-APACHE)
//!   or http://opensource.org/licenses/MIT)
//!
//! at your option.

// `error_chain!` can recurse deeply.
#![recursion_limit = "1024"]

// Add more lint checks.
#![deny(unsafe_code)]
#![deny(unstable_features)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]

extern crate clap;
extern crate regex;
extern crate tracing_subscriber;
#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate tracing;

#[cfg(test)]
extern crate tempdir;

/// Crate version.
pub const VERSION: &'static str = env!("CARGO_PKG_VERSION");

pub mod address;
pub mod command;
pub mod decompilation;
pub mod decompiler;
pub mod error;
pub mod invocation;
pub mod relocation;
pub mod runner;
pub mod settings;
pub mod staging;
pub mod tools;
mod utils;
