//! Defines the helper macro for closed, string-tokened domain enums.

/// Declares a unit enum whose variants map one-to-one onto wire tokens.
///
/// The generated enum derives the usual value traits plus serde, and gets
/// `ALL`, `as_str`, `Display`, and a `FromStr` impl whose error type is
/// `Parse<Name>Error`.
macro_rules! define_catalog_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident ($label:literal) {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $token:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the wire token for this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        ::paste::paste! {
            #[doc = concat!("Error returned when parsing an unknown ", $label, " token.")]
            #[derive(Debug, Clone, PartialEq, Eq, ::thiserror::Error)]
            #[error("unknown {label}: {input}", label = $label)]
            pub struct [<Parse $name Error>] {
                /// The unrecognised input value.
                pub input: String,
            }

            impl ::std::str::FromStr for $name {
                type Err = [<Parse $name Error>];

                fn from_str(value: &str) -> Result<Self, Self::Err> {
                    match value {
                        $($token => Ok(Self::$variant),)+
                        _ => Err([<Parse $name Error>] {
                            input: value.to_owned(),
                        }),
                    }
                }
            }
        }
    };
}

pub(crate) use define_catalog_enum;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    define_catalog_enum! {
        /// Test-only enum.
        pub enum Spice ("spice grade") {
            Raw => "raw",
            Refined => "refined_melange",
        }
    }

    #[test]
    fn tokens_round_trip_through_from_str() {
        for value in Spice::ALL {
            assert_eq!(value.as_str().parse::<Spice>(), Ok(*value));
        }
    }

    #[test]
    fn unknown_tokens_report_the_label() {
        let err = "sand".parse::<Spice>().expect_err("unknown token");
        assert_eq!(err.to_string(), "unknown spice grade: sand");
    }

    #[test]
    fn serde_uses_the_wire_token() {
        let json = serde_json::to_string(&Spice::Refined).expect("serialize");
        assert_eq!(json, "\"refined_melange\"");
    }
}
