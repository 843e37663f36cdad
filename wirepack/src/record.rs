use crate::Pack;

/// A named composite whose fields go on the wire in declared order.
///
/// Implemented by [`record!`](crate::record); the `Default` bound is what
/// lets decoders (and the [`registry`](crate::registry)) allocate a fresh
/// instance to fill. A type that implements [`Pack`] by hand and then
/// declares `impl Record for T {}` supplies its own codec — the walker
/// delegates to it without adding any envelope.
pub trait Record: Pack + Default + Send + 'static {}

/// Declares a record struct together with its field-order walk.
///
/// ```
/// wirepack::record! {
///     #[derive(Default, PartialEq, Debug)]
///     pub struct Person {
///         pub name: String,
///         pub age: i32,
///         pub height: f64,
///     }
/// }
/// ```
///
/// Every field type must implement [`Pack`], and the struct must be
/// `Default` (derive it). Fields are encoded and decoded in declaration
/// order with no enclosing flag — embedding a record by value in another
/// record splices its bytes in place.
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::Pack for $name {
            fn pack(&self, w: &mut $crate::WireWriter) -> $crate::Result<()> {
                $($crate::Pack::pack(&self.$field, w)?;)*
                let _ = w;
                Ok(())
            }

            fn unpack(&mut self, r: &mut $crate::WireReader<'_>) -> $crate::Result<()> {
                $($crate::Pack::unpack(&mut self.$field, r)?;)*
                let _ = r;
                Ok(())
            }
        }

        impl $crate::Record for $name {}
    };
}
