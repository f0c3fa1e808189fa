//! Error types for the routeplan core library.
//!
//! The algorithms themselves never fail: unreachable points and disconnected
//! networks are ordinary outcomes. Errors only arise when building
//! [`crate::Connection`] values from untrusted input.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error produced when a [`crate::Connection`] cannot be constructed.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConnectionError {
    /// Connection weights must be strictly positive.
    #[error("connection {id} has non-positive weight")]
    NonPositiveWeight {
        /// Identifier of the rejected connection.
        id: i64,
    },
    /// Both endpoints must carry a non-empty name.
    #[error("connection {id} has a blank endpoint name")]
    BlankEndpoint {
        /// Identifier of the rejected connection.
        id: i64,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConnectionError`] variants.
    enum ConnectionErrorCode for ConnectionError {
        /// Connection weights must be strictly positive.
        NonPositiveWeight => NonPositiveWeight { .. } => "CONNECTION_NON_POSITIVE_WEIGHT",
        /// Both endpoints must carry a non-empty name.
        BlankEndpoint => BlankEndpoint { .. } => "CONNECTION_BLANK_ENDPOINT",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ConnectionError>;
