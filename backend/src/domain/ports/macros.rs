//! Helper macros for declaring port error enums.

/// Declare a `thiserror` enum whose variants each get a snake_case
/// constructor accepting `impl Into<_>` for every field.
macro_rules! define_port_error {
    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]($($field: impl Into<$ty>),*) -> Self {
                Self::$variant { $($field: $field.into()),* }
            }
        }
    };
    (@ctor $variant:ident) => {
        ::paste::paste! {
            #[doc = concat!("Construct the `", stringify!($variant), "` variant.")]
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                $crate::domain::ports::define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

/// Declare the error enum for a store port.
///
/// Every store fails in one of two ways: the backing store could not be
/// reached (`Connection`) or a statement failed (`Query`). The generated enum
/// implements [`StoreError`](super::StoreError) so adapters can build it
/// generically, and converts into the domain [`Error`](crate::domain::Error)
/// as `service_unavailable` or `internal` respectively.
macro_rules! define_store_error {
    (
        $(#[$outer:meta])*
        $name:ident {
            connection: $connection:literal,
            query: $query:literal $(,)?
        }
    ) => {
        $crate::domain::ports::define_port_error! {
            $(#[$outer])*
            pub enum $name {
                /// The store could not be reached.
                Connection { message: String } => $connection,
                /// A statement failed during execution.
                Query { message: String } => $query,
            }
        }

        impl $crate::domain::ports::StoreError for $name {
            fn connection_failed(message: String) -> Self {
                Self::Connection { message }
            }

            fn query_failed(message: String) -> Self {
                Self::Query { message }
            }
        }

        impl From<$name> for $crate::domain::Error {
            fn from(error: $name) -> Self {
                match error {
                    $name::Connection { .. } => {
                        $crate::domain::Error::service_unavailable(error.to_string())
                    }
                    $name::Query { .. } => $crate::domain::Error::internal(error.to_string()),
                }
            }
        }
    };
}

pub(crate) use define_port_error;
pub(crate) use define_store_error;
