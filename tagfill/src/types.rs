use std::borrow::Cow;
use std::fmt;

/// Structural kind of a reflected value.
///
/// This is the key of the by-kind rule layer. The set is closed: every type the
/// engine can see maps onto exactly one of these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    /// `isize`
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    /// `usize`
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float32,
    Float64,
    String,
    /// `std::time::Duration`
    Duration,
    /// `Vec<T>`
    Slice,
    /// A type deriving `Record`
    Struct,
    /// `Option<T>`, the nullable pointer
    Pointer,
}

impl Kind {
    /// Signed integer kinds.
    pub const INTEGERS: [Kind; 5] = [Kind::Int, Kind::Int8, Kind::Int16, Kind::Int32, Kind::Int64];

    /// Unsigned integer kinds.
    pub const UNSIGNED: [Kind; 5] = [Kind::Uint, Kind::Uint8, Kind::Uint16, Kind::Uint32, Kind::Uint64];

    /// Floating point kinds.
    pub const FLOATS: [Kind; 2] = [Kind::Float32, Kind::Float64];

    /// Returns `true` for kinds that hold a single value and never contain other fields.
    pub fn is_scalar(self) -> bool {
        !matches!(self, Kind::Slice | Kind::Struct | Kind::Pointer)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Int8 => "int8",
            Kind::Int16 => "int16",
            Kind::Int32 => "int32",
            Kind::Int64 => "int64",
            Kind::Uint => "uint",
            Kind::Uint8 => "uint8",
            Kind::Uint16 => "uint16",
            Kind::Uint32 => "uint32",
            Kind::Uint64 => "uint64",
            Kind::Float32 => "float32",
            Kind::Float64 => "float64",
            Kind::String => "string",
            Kind::Duration => "duration",
            Kind::Slice => "slice",
            Kind::Struct => "struct",
            Kind::Pointer => "pointer",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete type identity used by the by-type rule layer.
///
/// The identity is the fully qualified type name with one level of pointer
/// indirection stripped, so a rule registered for `T` also matches `Option<T>`
/// and `Box<T>` fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeHash(Cow<'static, str>);

impl TypeHash {
    /// Identity of `T` itself. Pointer stripping happens in the `Reflect` impls.
    pub fn of<T: ?Sized>() -> Self {
        Self(Cow::Borrowed(std::any::type_name::<T>()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TypeHash {
    fn from(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composite_kinds_are_not_scalar() {
        assert!(Kind::Duration.is_scalar());
        assert!(Kind::String.is_scalar());
        assert!(!Kind::Slice.is_scalar());
        assert!(!Kind::Struct.is_scalar());
        assert!(!Kind::Pointer.is_scalar());
    }

    #[test]
    fn type_hash_uses_qualified_name() {
        let hash = TypeHash::of::<std::time::Duration>();
        assert!(hash.as_str().ends_with("time::Duration"), "got {hash}");
        assert_eq!(TypeHash::of::<i32>(), TypeHash::from("i32"));
    }
}
