//! Declarative building blocks shared by every schema module.

/// Implement [`Identifiable`](tlkit_wire::Identifiable) for a shape.
macro_rules! tl_id {
    ($ty:ty => $id:literal, $name:literal) => {
        impl ::tlkit_wire::Identifiable for $ty {
            const CONSTRUCTOR_ID: u32 = $id;
            const NAME: &'static str = $name;
        }
    };
}

/// Declare a constructor without parameters as a unit struct.
macro_rules! tl_unit {
    ($(#[$meta:meta])* $ty:ident => $id:literal, $name:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
        #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $ty;

        tl_id!($ty => $id, $name);

        impl ::tlkit_wire::Serializable for $ty {
            fn serialize(&self, _buf: &mut impl Extend<u8>) {}
        }

        impl ::tlkit_wire::Deserializable for $ty {
            fn deserialize(_buf: ::tlkit_wire::Buffer) -> ::tlkit_wire::Result<Self> {
                Ok(Self)
            }
        }
    };
}

/// Declare a constructor without a flags word.
///
/// Fields are written and read in declaration order, which must be the wire
/// order. Shapes with a `flags:#` word are written out by hand instead.
macro_rules! tl_struct {
    (
        $(#[$meta:meta])*
        pub struct $ty:ident => $id:literal, $name:literal {
            $( $(#[$fmeta:meta])* pub $field:ident: $fty:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $ty {
            $( $(#[$fmeta])* pub $field: $fty, )+
        }

        tl_id!($ty => $id, $name);

        impl ::tlkit_wire::Serializable for $ty {
            fn serialize(&self, buf: &mut impl Extend<u8>) {
                $( ::tlkit_wire::Serializable::serialize(&self.$field, buf); )+
            }
        }

        impl ::tlkit_wire::Deserializable for $ty {
            fn deserialize(buf: ::tlkit_wire::Buffer) -> ::tlkit_wire::Result<Self> {
                Ok(Self {
                    $( $field: <$fty as ::tlkit_wire::Deserializable>::deserialize(buf)?, )+
                })
            }
        }
    };
}

/// Declare a legacy revision whose body a current shape can still read.
///
/// The revision wraps the current shape; `read` names the reader for the old
/// layout, called with the buffer followed by the listed arguments. Decoding
/// the revision through `family` yields the current variant.
macro_rules! tl_revision {
    (
        $(#[$meta:meta])*
        pub struct $ty:ident($shape:ty) => $id:literal, $name:literal;
        into $family:ty;
        read = $($seg:ident)::+ ( $($arg:expr),* $(,)? );
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $ty(pub $shape);

        tl_id!($ty => $id, $name);

        impl ::tlkit_wire::Deserializable for $ty {
            fn deserialize(buf: ::tlkit_wire::Buffer) -> ::tlkit_wire::Result<Self> {
                $($seg)::+(buf, $($arg),*).map(Self)
            }
        }

        impl From<$ty> for $family {
            fn from(x: $ty) -> Self {
                x.0.into()
            }
        }
    };
}

/// Declare a request. Requests always encode boxed, tag first.
macro_rules! tl_function {
    (
        $(#[$meta:meta])*
        pub struct $ty:ident => $id:literal, $name:literal {
            $( $(#[$fmeta:meta])* pub $field:ident: $fty:ty ),+ $(,)?
        } -> $ret:ty
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $ty {
            $( $(#[$fmeta])* pub $field: $fty, )+
        }

        tl_id!($ty => $id, $name);

        impl ::tlkit_wire::Serializable for $ty {
            fn serialize(&self, buf: &mut impl Extend<u8>) {
                ::tlkit_wire::Serializable::serialize(
                    &<Self as ::tlkit_wire::Identifiable>::CONSTRUCTOR_ID,
                    buf,
                );
                $( ::tlkit_wire::Serializable::serialize(&self.$field, buf); )+
            }
        }

        impl ::tlkit_wire::RemoteCall for $ty {
            type Return = $ret;
        }
    };
}

/// Declare a logical family and its constructor registry.
///
/// ```text
/// tl_family! {
///     /// docs
///     pub enum Peer as "Peer" {
///         User(types::PeerUser),
///         Chat(types::PeerChat),
///     }
///     legacy { layers::PeerUserLayer132 }
///     normalize = some_fn;
/// }
/// ```
///
/// Expands to the enum, `From`/`TryFrom` between the enum and each current
/// shape, the boxed codec, the family's `CONSTRUCTORS` table with a
/// compile-time duplicate check, and [`TlObject`](tlkit_wire::TlObject).
/// Legacy shapes are decode-only and must provide `From<Legacy> for Family`.
/// `normalize` runs on every decoded value, whatever shape it came from.
macro_rules! tl_family {
    (@norm $value:ident) => { $value };
    (@norm $value:ident, $normalize:expr) => { ($normalize)($value) };

    (
        $(#[$meta:meta])*
        pub enum $family:ident as $name:literal {
            $( $(#[$vmeta:meta])* $variant:ident($shape:ty) ),+ $(,)?
        }
        $( legacy { $( $legacy:ty ),+ $(,)? } )?
        $( normalize = $normalize:expr; )?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        #[cfg_attr(feature = "impl-serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum $family {
            $( $(#[$vmeta])* $variant($shape), )+
        }

        impl $family {
            /// Every constructor this family decodes, current shapes first.
            pub const CONSTRUCTORS: &'static [(u32, &'static str)] = &[
                $( (
                    <$shape as ::tlkit_wire::Identifiable>::CONSTRUCTOR_ID,
                    <$shape as ::tlkit_wire::Identifiable>::NAME,
                ), )+
                $($( (
                    <$legacy as ::tlkit_wire::Identifiable>::CONSTRUCTOR_ID,
                    <$legacy as ::tlkit_wire::Identifiable>::NAME,
                ), )+)?
            ];

            /// The tag this value is encoded with.
            pub fn constructor_id(&self) -> u32 {
                match self {
                    $( Self::$variant(_) => <$shape as ::tlkit_wire::Identifiable>::CONSTRUCTOR_ID, )+
                }
            }
        }

        const _: () = assert!(
            ::tlkit_wire::ids_unique($family::CONSTRUCTORS),
            concat!("duplicate constructor id in ", $name),
        );

        $(
            impl From<$shape> for $family {
                fn from(x: $shape) -> Self {
                    Self::$variant(x)
                }
            }

            impl TryFrom<$family> for $shape {
                type Error = $family;
                #[allow(unreachable_patterns)]
                fn try_from(v: $family) -> Result<Self, Self::Error> {
                    match v {
                        $family::$variant(x) => Ok(x),
                        other => Err(other),
                    }
                }
            }
        )+

        impl ::tlkit_wire::Serializable for $family {
            fn serialize(&self, buf: &mut impl Extend<u8>) {
                match self {
                    $( Self::$variant(x) => ::tlkit_wire::write_boxed(x, buf), )+
                }
            }
        }

        impl ::tlkit_wire::Deserializable for $family {
            fn deserialize(buf: ::tlkit_wire::Buffer) -> ::tlkit_wire::Result<Self> {
                let id = <u32 as ::tlkit_wire::Deserializable>::deserialize(buf)?;
                buf.descend($name, |buf| <Self as ::tlkit_wire::TlObject>::read_params(id, buf))
            }
        }

        impl ::tlkit_wire::TlObject for $family {
            const FAMILY: &'static str = $name;

            fn read_params(id: u32, buf: ::tlkit_wire::Buffer) -> ::tlkit_wire::Result<Self> {
                use ::tlkit_wire::{Deserializable, Identifiable};

                let value = match id {
                    $(
                        _ if id == <$shape as Identifiable>::CONSTRUCTOR_ID => {
                            Self::from(<$shape as Deserializable>::deserialize(buf)?)
                        }
                    )+
                    $($(
                        _ if id == <$legacy as Identifiable>::CONSTRUCTOR_ID => {
                            ::log::trace!(
                                "[tl] normalizing legacy {} into {}",
                                <$legacy as Identifiable>::NAME,
                                $name,
                            );
                            Self::from(<$legacy as Deserializable>::deserialize(buf)?)
                        }
                    )+)?
                    _ => return Err(buf.unknown_constructor(id)),
                };
                Ok(tl_family!(@norm value $(, $normalize)?))
            }
        }
    };
}
