//! The font conversion orchestrator.
//!
//! A [`ConversionEngine`] is built for one fixed source/target profile
//! pair. Construction validates the pairing (same script, not
//! Unicode-to-Unicode), derives the target's inverse mapping and compiles
//! every supplied rule; conversion then runs five ordered stages:
//!
//! 1. the source profile's rules, on the font's native representation;
//! 2. the source mapping, forward, into the intermediate representation;
//! 3. the bridge stage between two legacy fonts (currently the identity);
//! 4. the target mapping, inverted, out of the intermediate representation;
//! 5. the target profile's rules, when it declares any.
//!
//! Characters without a mapping entry pass through unchanged in stages 2
//! and 4: legacy text routinely interleaves mapped glyphs with plain
//! ASCII punctuation and whitespace.

pub mod engine;
pub mod error;
mod mapping;

pub use engine::ConversionEngine;
pub use error::ConvertError;
