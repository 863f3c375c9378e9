#![deny(unsafe_code)]

pub mod doctor;
pub mod error;
pub mod paths;
pub mod pos;
pub mod source;
pub mod store;

pub use crate::doctor::LexiconReport;
pub use crate::error::{LexiconError, UnmappedPosError};
pub use crate::paths::default_lexicon_path;
pub use crate::pos::{KELLY_POS_MAP, map_pos};
pub use crate::store::Lexicon;
