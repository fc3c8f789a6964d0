pub mod profile;

pub use profile::{EncodingBase, EncodingInfo, FontInfo, FontKind, FontProfile, ScriptInfo};
