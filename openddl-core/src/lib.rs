//! OpenDDL literal parsing.
//!
//! Byte-level lexer for the literals of the Open Data Description
//! Language, the grammar underlying OpenGEX: booleans, characters,
//! multi-base integers, floats, quoted strings, names, references, and
//! type keywords. A document parser that sequences these into structures
//! sits above this crate; nothing here validates document shape.
//!
//! Parsers take a [`Cursor`] and return the cursor just past what they
//! consumed together with the decoded value, or a [`ParseError`] carrying
//! the failure kind, the grammar type being read, and the byte offset.
//!
//! # Architecture
//!
//! - **cursor.rs** - Byte cursor and whitespace/comment skipping
//! - **error.rs** - Flat error taxonomy with position and expected type
//! - **types.rs** - Grammar type enumeration and keyword table
//! - **escape.rs** - Escape sequence decoding
//! - **number.rs** - Width-generic integer and float literal engines
//! - **literal.rs** - Identifier, name, reference, bool, character,
//!   string, and type-keyword parsers
//! - **property.rs** - Leading-byte dispatch into a tagged value
//!
//! # Example
//!
//! ```
//! use openddl_core::{property_value, Cursor, PropertyValue};
//!
//! let mut scratch = String::new();
//! let (rest, value) = property_value(Cursor::new(b"0x1F"), &mut scratch)?;
//! assert_eq!(value, PropertyValue::Binary(31));
//! assert!(rest.is_empty());
//! # Ok::<(), openddl_core::ParseError>(())
//! ```

pub mod cursor;
pub mod error;
pub mod escape;
pub mod literal;
pub mod number;
pub mod property;
pub mod types;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind, Parsed};
pub use escape::{escaped_char, escaped_unicode};
pub use literal::{
    bool_literal, character_literal, identifier, name_literal, reference_literal,
    string_literal, type_keyword, type_literal,
};
pub use number::{float_literal, integer_literal, Base, Floating, Integral};
pub use property::{property_value, PropertyValue};
pub use types::Type;
