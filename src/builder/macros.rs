//! Macros for declaring state and trigger enums.

/// Generate a state enum with its [`State`](crate::core::State) impl.
///
/// The enum derives `Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize,
/// Deserialize`, implements `Display` using the variant name, and gets an
/// `ALL` constant listing every variant in declaration order.
///
/// # Example
///
/// ```
/// use bugstate::state_enum;
/// use bugstate::core::State;
///
/// state_enum! {
///     pub enum ReviewState {
///         Pending,
///         Approved,
///         Rejected,
///     }
///     final: [Approved, Rejected]
/// }
///
/// assert_eq!(ReviewState::ALL.len(), 3);
/// assert!(ReviewState::Rejected.is_final());
/// assert_eq!(ReviewState::Pending.to_string(), "Pending");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        #[allow(dead_code)]
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}

/// Generate a trigger enum with its [`Trigger`](crate::core::Trigger) impl.
///
/// Derives and helpers match [`state_enum!`].
///
/// # Example
///
/// ```
/// use bugstate::trigger_enum;
/// use bugstate::core::Trigger;
///
/// trigger_enum! {
///     pub enum ReviewAction {
///         Approve,
///         Reject,
///     }
/// }
///
/// assert_eq!(ReviewAction::Reject.name(), "Reject");
/// assert_eq!(ReviewAction::ALL, &[ReviewAction::Approve, ReviewAction::Reject]);
/// ```
#[macro_export]
macro_rules! trigger_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        #[allow(dead_code)]
        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];
        }

        impl $crate::core::Trigger for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::Trigger::name(self))
            }
        }
    };
}
