//! Shared scanning infrastructure for the literal kinds.
//!
//! ## Structure
//!
//! - `cursor.rs` - `Cursor`, the character cursor every scanner drives
//! - `token.rs` - `Token`, `Span` and `LiteralKind` definitions
//! - `boundary.rs` - the trailing-boundary validator
//!
//! The literal scanners themselves live next to their facades in the
//! crate root modules (`number`, `string`, `keyword`, `regexp`, `comment`).

pub mod boundary;
mod cursor;
mod token;

pub use boundary::{is_strict_boundary, Boundary};
pub(crate) use cursor::{is_id_continue, Cursor};
pub(crate) use token::char_offset;
pub use token::{LiteralKind, Span, Spanned, Token};
