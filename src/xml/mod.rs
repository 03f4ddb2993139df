//! XML building blocks
//!
//! - [`element`] - Element tree builder, serialized with `quick_xml`
//! - `escape` - Detection of characters that need escaping

pub mod element;
mod escape;

pub use element::{RenderOptions, XmlElement, XmlNode};
pub(crate) use escape::contains_escape_characters;
