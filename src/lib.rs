#![warn(
    // clippy::all,
    // clippy::perf,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,

    // clippy::pedantic,
)]

//! Enumerate fixed-length strings over an alphabet and drop those bounded by
//! a forbidden character.
//!
//! ```rust
//! use edgegen::generator::{generate, GeneratorOptions};
//!
//! let opts = GeneratorOptions::new().alphabet("ab").length(2).boundary('a').clone();
//! let generation = generate(&opts).unwrap();
//! assert_eq!(generation.valid, vec!["bb".to_string()]);
//! assert_eq!(generation.candidates, 4);
//! ```

pub mod generator;
pub mod logging;
pub mod output;
pub mod utils;

pub use generator::{generate, Error, Generation, GeneratorOptions, Result};
