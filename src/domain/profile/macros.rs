//! Macro for the fixed option lists offered by the selection steps.
//!
//! Every option list is a closed enum whose wire and display form is a
//! human label ("Lightly Active", "Gluten Free"). `profile_option!` generates
//! the enum, its serde renames, `ALL`, `label()`, `Display` and a
//! case-insensitive `FromStr` that reports a `ValidationError`.
//!
//! ```ignore
//! profile_option! {
//!     /// How active the user is on a typical week.
//!     ActivityLevel, field = "activityLevel", noun = "activity level" {
//!         Sedentary => "Sedentary",
//!         LightlyActive => "Lightly Active",
//!     }
//! }
//! ```

macro_rules! profile_option {
    (
        $(#[$meta:meta])*
        $name:ident, field = $field:literal, noun = $noun:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in the order it is offered.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The draft field this option populates.
            pub const FIELD: &'static str = $field;

            /// Returns the display and wire label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::domain::foundation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        $crate::domain::foundation::ValidationError::invalid_format(
                            $field,
                            format!("'{}' is not a valid {}", wanted, $noun),
                        )
                    })
            }
        }
    };
}
