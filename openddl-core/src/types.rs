//! Primitive data types of the OpenDDL grammar.
//!
//! Every value a document can hold is one of these fourteen kinds. The
//! enumeration doubles as the "expected type" context attached to parse
//! errors, so a diagnostic can say which kind of literal was being read.

use core::fmt;

/// Primitive type of an OpenDDL data list or property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean: `true` or `false`
    Bool,

    /// 8-bit unsigned integer: `unsigned_int8`
    UnsignedByte,

    /// 8-bit signed integer: `int8`
    Byte,

    /// 16-bit unsigned integer: `unsigned_int16`
    UnsignedShort,

    /// 16-bit signed integer: `int16`
    Short,

    /// 32-bit unsigned integer: `unsigned_int32`
    UnsignedInt,

    /// 32-bit signed integer: `int32`
    Int,

    /// 64-bit unsigned integer: `unsigned_int64`
    UnsignedLong,

    /// 64-bit signed integer: `int64`
    Long,

    /// 32-bit IEEE 754 float: `float`
    Float,

    /// 64-bit IEEE 754 float: `double`
    Double,

    /// Quoted string: `string`
    String,

    /// Structure reference: `ref`
    Reference,

    /// Nested type name: `type`
    Type,
}

/// Keyword table consulted by the type-literal parser.
///
/// Matching walks the table in order and takes the first entry whose keyword
/// is a prefix of the input. No keyword is currently a prefix of an earlier
/// one, but the order is load-bearing for any future addition that would be.
pub(crate) const TYPE_KEYWORDS: &[(&[u8], Type)] = &[
    (b"bool", Type::Bool),
    (b"unsigned_int8", Type::UnsignedByte),
    (b"int8", Type::Byte),
    (b"unsigned_int16", Type::UnsignedShort),
    (b"int16", Type::Short),
    (b"unsigned_int32", Type::UnsignedInt),
    (b"int32", Type::Int),
    (b"unsigned_int64", Type::UnsignedLong),
    (b"int64", Type::Long),
    (b"float", Type::Float),
    (b"double", Type::Double),
    (b"string", Type::String),
    (b"ref", Type::Reference),
    (b"type", Type::Type),
];

impl Type {
    /// Grammar keyword for the type, as written in a document.
    pub fn keyword(self) -> &'static str {
        match self {
            Type::Bool => "bool",
            Type::UnsignedByte => "unsigned_int8",
            Type::Byte => "int8",
            Type::UnsignedShort => "unsigned_int16",
            Type::Short => "int16",
            Type::UnsignedInt => "unsigned_int32",
            Type::Int => "int32",
            Type::UnsignedLong => "unsigned_int64",
            Type::Long => "int64",
            Type::Float => "float",
            Type::Double => "double",
            Type::String => "string",
            Type::Reference => "ref",
            Type::Type => "type",
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_agrees_with_keyword() {
        for &(keyword, ty) in TYPE_KEYWORDS {
            assert_eq!(keyword, ty.keyword().as_bytes());
        }
    }

    #[test]
    fn test_keyword_table_covers_every_type() {
        // One entry per variant, no duplicates.
        assert_eq!(TYPE_KEYWORDS.len(), 14);
        for (i, &(_, ty)) in TYPE_KEYWORDS.iter().enumerate() {
            assert!(TYPE_KEYWORDS[..i].iter().all(|&(_, prev)| prev != ty));
        }
    }

    #[test]
    fn test_no_keyword_is_a_prefix_of_an_earlier_one() {
        for (i, &(keyword, _)) in TYPE_KEYWORDS.iter().enumerate() {
            for &(earlier, _) in &TYPE_KEYWORDS[..i] {
                assert!(
                    !keyword.starts_with(earlier),
                    "{:?} is shadowed by {:?}",
                    keyword,
                    earlier
                );
            }
        }
    }

    #[test]
    fn test_display_is_the_keyword() {
        assert_eq!(Type::UnsignedShort.to_string(), "unsigned_int16");
        assert_eq!(Type::Reference.to_string(), "ref");
    }
}
