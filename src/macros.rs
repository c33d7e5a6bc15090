//! Internal macros

/// Private API.
///
/// Declares a unit error type with a static description.
macro_rules! static_str_error {
    (
        $(#[$m:meta])*
        pub struct $name:ident = $desc:literal;
    ) => {
        $(#[$m])*
        #[derive(Debug, Default, Clone, PartialEq, Eq)]
        #[non_exhaustive]
        #[doc = $desc]
        pub struct $name;

        impl $name {
            #[doc = concat!("Create a new ", stringify!($name), ".")]
            #[must_use]
            pub fn new() -> Self {
                Self::default()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($desc)
            }
        }

        impl std::error::Error for $name {}
    };
}

pub(crate) use static_str_error;
