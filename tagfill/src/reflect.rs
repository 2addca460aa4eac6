//! Minimal runtime reflection for the filler engine.
//!
//! Every type the engine can fill implements [`Reflect`], which reports its
//! [`Kind`] and [`TypeHash`] and hands out a [`ValueMut`] handle. Scalars get a
//! typed slot, composites get a trait object ([`Sequence`], [`Pointer`],
//! [`Record`]) that the composite rules drive.

use std::any::Any;
use std::time::Duration;

use crate::record::Record;
use crate::types::{Kind, TypeHash};

/// A value the engine can inspect and assign.
///
/// Implemented here for the primitive and std types the engine understands and
/// by `#[derive(Record)]` for user structs.
pub trait Reflect {
    /// Kind of this value.
    fn kind(&self) -> Kind;

    /// Concrete type identity, pointer indirection stripped.
    fn type_hash(&self) -> TypeHash;

    /// Mutable handle to the underlying storage.
    fn reflect_mut(&mut self) -> ValueMut<'_>;

    /// Kind of `Self` without an instance, used for empty vectors and nil pointers.
    fn type_kind() -> Kind
    where
        Self: Sized;

    /// Type identity of `Self` without an instance.
    fn type_name() -> TypeHash
    where
        Self: Sized,
    {
        TypeHash::of::<Self>()
    }
}

/// Mutable view over a reflected value, one variant per kind family.
pub enum ValueMut<'a> {
    Bool(&'a mut bool),
    Int(IntMut<'a>),
    Uint(UintMut<'a>),
    Float(FloatMut<'a>),
    String(&'a mut String),
    Duration(&'a mut Duration),
    Slice(&'a mut dyn Sequence),
    Struct(&'a mut dyn Record),
    Pointer(&'a mut dyn Pointer),
}

impl ValueMut<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            ValueMut::Bool(_) => Kind::Bool,
            ValueMut::Int(slot) => slot.kind(),
            ValueMut::Uint(slot) => slot.kind(),
            ValueMut::Float(slot) => slot.kind(),
            ValueMut::String(_) => Kind::String,
            ValueMut::Duration(_) => Kind::Duration,
            ValueMut::Slice(_) => Kind::Slice,
            ValueMut::Struct(_) => Kind::Struct,
            ValueMut::Pointer(_) => Kind::Pointer,
        }
    }
}

macro_rules! numeric_slot {
    ($(#[$meta:meta])* $name:ident, $wide:ty, $( $variant:ident($ty:ty) => $kind:ident ),+ $(,)?) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub enum $name<'a> {
            $( $variant(&'a mut $ty), )+
        }

        impl $name<'_> {
            /// Current value widened to 64 bits.
            pub fn get(&self) -> $wide {
                match self {
                    $( Self::$variant(slot) => **slot as $wide, )+
                }
            }

            /// Stores `value`, narrowing (and truncating) to the slot's width.
            pub fn set(&mut self, value: $wide) {
                match self {
                    $( Self::$variant(slot) => **slot = value as $ty, )+
                }
            }

            /// Largest value representable by the slot's width.
            pub fn max(&self) -> $wide {
                match self {
                    $( Self::$variant(_) => <$ty>::MAX as $wide, )+
                }
            }

            pub fn kind(&self) -> Kind {
                match self {
                    $( Self::$variant(_) => Kind::$kind, )+
                }
            }
        }
    };
}

numeric_slot!(
    /// Slot for a signed integer field of any width.
    IntMut, i64,
    Isize(isize) => Int,
    I8(i8) => Int8,
    I16(i16) => Int16,
    I32(i32) => Int32,
    I64(i64) => Int64,
);

numeric_slot!(
    /// Slot for an unsigned integer field of any width.
    UintMut, u64,
    Usize(usize) => Uint,
    U8(u8) => Uint8,
    U16(u16) => Uint16,
    U32(u32) => Uint32,
    U64(u64) => Uint64,
);

numeric_slot!(
    /// Slot for a floating point field.
    FloatMut, f64,
    F32(f32) => Float32,
    F64(f64) => Float64,
);

/// A growable sequence (`Vec<T>`).
pub trait Sequence {
    fn len(&self) -> usize;

    /// `false` while the vector has never owned storage.
    fn is_allocated(&self) -> bool;

    fn elem_kind(&self) -> Kind;

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Replaces the contents with `len` default elements.
    fn reset(&mut self, len: usize);

    /// The raw byte vector when the element type is `u8`.
    fn bytes_mut(&mut self) -> Option<&mut Vec<u8>>;
}

/// A nullable pointer (`Option<T>`).
pub trait Pointer {
    fn is_nil(&self) -> bool;

    fn pointee_kind(&self) -> Kind;

    /// Allocates a default pointee when nil and returns it.
    fn alloc(&mut self) -> &mut dyn Reflect;

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect>;
}

macro_rules! reflect_leaf {
    ($( $ty:ty => $kind:ident, |$this:ident| $slot:expr );+ $(;)?) => {
        $(
            impl Reflect for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }

                fn type_hash(&self) -> TypeHash {
                    TypeHash::of::<$ty>()
                }

                fn reflect_mut(&mut self) -> ValueMut<'_> {
                    let $this = self;
                    $slot
                }

                fn type_kind() -> Kind {
                    Kind::$kind
                }
            }
        )+
    };
}

reflect_leaf! {
    bool => Bool, |v| ValueMut::Bool(v);
    isize => Int, |v| ValueMut::Int(IntMut::Isize(v));
    i8 => Int8, |v| ValueMut::Int(IntMut::I8(v));
    i16 => Int16, |v| ValueMut::Int(IntMut::I16(v));
    i32 => Int32, |v| ValueMut::Int(IntMut::I32(v));
    i64 => Int64, |v| ValueMut::Int(IntMut::I64(v));
    usize => Uint, |v| ValueMut::Uint(UintMut::Usize(v));
    u8 => Uint8, |v| ValueMut::Uint(UintMut::U8(v));
    u16 => Uint16, |v| ValueMut::Uint(UintMut::U16(v));
    u32 => Uint32, |v| ValueMut::Uint(UintMut::U32(v));
    u64 => Uint64, |v| ValueMut::Uint(UintMut::U64(v));
    f32 => Float32, |v| ValueMut::Float(FloatMut::F32(v));
    f64 => Float64, |v| ValueMut::Float(FloatMut::F64(v));
    String => String, |v| ValueMut::String(v);
    Duration => Duration, |v| ValueMut::Duration(v);
}

impl<T: Reflect + Default + 'static> Reflect for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Slice
    }

    fn type_hash(&self) -> TypeHash {
        TypeHash::of::<Self>()
    }

    fn reflect_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Slice(self)
    }

    fn type_kind() -> Kind {
        Kind::Slice
    }
}

impl<T: Reflect + Default + 'static> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn is_allocated(&self) -> bool {
        self.capacity() > 0
    }

    fn elem_kind(&self) -> Kind {
        T::type_kind()
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.get_mut(index).map(|element| element as &mut dyn Reflect)
    }

    fn reset(&mut self, len: usize) {
        *self = std::iter::repeat_with(T::default).take(len).collect();
    }

    fn bytes_mut(&mut self) -> Option<&mut Vec<u8>> {
        (self as &mut dyn Any).downcast_mut::<Vec<u8>>()
    }
}

impl<T: Reflect + Default + 'static> Reflect for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Pointer
    }

    fn type_hash(&self) -> TypeHash {
        Self::type_name()
    }

    fn reflect_mut(&mut self) -> ValueMut<'_> {
        ValueMut::Pointer(self)
    }

    fn type_kind() -> Kind {
        Kind::Pointer
    }

    /// One level of indirection is stripped: `Option<Option<T>>` hashes as
    /// `Option<T>`, while `Option<Box<T>>` hashes as `T`.
    fn type_name() -> TypeHash {
        match T::type_kind() {
            Kind::Pointer => TypeHash::of::<T>(),
            _ => T::type_name(),
        }
    }
}

impl<T: Reflect + Default + 'static> Pointer for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }

    fn pointee_kind(&self) -> Kind {
        T::type_kind()
    }

    fn alloc(&mut self) -> &mut dyn Reflect {
        self.get_or_insert_with(T::default)
    }

    fn pointee_mut(&mut self) -> Option<&mut dyn Reflect> {
        self.as_mut().map(|pointee| pointee as &mut dyn Reflect)
    }
}

// Box is owned storage rather than a nullable pointer, so it is transparent.
impl<T: Reflect> Reflect for Box<T> {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn type_hash(&self) -> TypeHash {
        (**self).type_hash()
    }

    fn reflect_mut(&mut self) -> ValueMut<'_> {
        (**self).reflect_mut()
    }

    fn type_kind() -> Kind {
        T::type_kind()
    }

    fn type_name() -> TypeHash {
        T::type_name()
    }
}
