/// Error when a wire string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{value}\" is not a valid {kind}")]
pub struct UnknownVariantError {
    /// The name of the enum
    pub kind: &'static str,

    /// The rejected value
    pub value: Box<str>,
}

/// Define a closed enum that is sent and received as a fixed string.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal,
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "&'static str")]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Get the wire string of this value.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)*
                }
            }

            /// Look up a value by its wire string.
            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $($wire => Some(Self::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownVariantError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::from_wire(value).ok_or_else(|| UnknownVariantError {
                    kind: stringify!($name),
                    value: value.into(),
                })
            }
        }

        impl TryFrom<String> for $name {
            type Error = UnknownVariantError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }

        impl From<$name> for &'static str {
            fn from(value: $name) -> Self {
                value.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl crate::client::ToQueryValue for $name {
            fn to_query_value(
                &self,
            ) -> Result<crate::client::QueryValue, crate::client::InvalidQueryValue> {
                Ok(crate::client::QueryValue::Scalar(self.as_str().into()))
            }
        }
    };
}

wire_enum! {
    /// A server rating
    pub enum RatingType {
        Admins => "admins",
        Advocates => "advocates",
        CombineOperators => "combine_operators",
        BusDrivers => "bus_drivers",
        TractorDrivers => "tractor_drivers",
        Catchers => "catchers",
        Collectors => "collectors",
        CornPilots => "corn_pilots",
        CryptoAsc => "crypto_asc",
        CryptoBtc => "crypto_btc",
        ElectricTrainDrivers => "electric_train_drivers",
        LvlFamilies => "lvl_families",
        LvlPlayers => "lvl_players",
        Mechanics => "mechanics",
        Richest => "richest",
        Outbids => "outbids",
        Pilots => "pilots",
        Sellers => "sellers",
        TaxiDrivers => "taxi_drivers",
        TramDrivers => "tram_drivers",
        Truckers => "truckers",
        Cladmens => "cladmens",
    }
}

wire_enum! {
    /// A kind of estate listing
    pub enum EstateType {
        Houses => "houses",
        Businesses => "businesses",
    }
}

wire_enum! {
    /// The kind of a single estate
    pub enum EstateHistoryType {
        House => "house",
        Business => "business",
    }
}

wire_enum! {
    /// A punishment issued by an admin
    pub enum PunishType {
        Kick => "kick",
        Warn => "warn",
        WarnOff => "warnoff",
        Jail => "jail",
        JailOff => "jailoff",
        Mute => "mute",
        MuteOff => "muteoff",
        RMute => "rmute",
        Ban => "ban",
        BanIp => "banip",
        UnJail => "unjail",
        UnMute => "unmute",
        UnRMute => "unrmute",
        APunish => "apunish",
        APunishOff => "apunishoff",
        UnAPunish => "unapunish",
    }
}

wire_enum! {
    /// A font for generated screenshots
    pub enum SSFont {
        ArialBold => "arialbd.ttf",
        ArialBoldItalic => "arialbdi.ttf",
        BitterBold => "bitterbd.ttf",
        BitterBoldItalic => "bitterbdi.ttf",
        MontserratBold => "montserratbd.ttf",
        MontserratBoldItalic => "montserratbdi.ttf",
        NunitoBold => "nunitobd.ttf",
        NunitoBoldItalic => "nunitobdi.ttf",
        OpenSansBold => "opensansbd.ttf",
        OpenSansBoldItalic => "opensansbdi.ttf",
        UbuntuBold => "ubuntubd.ttf",
        UbuntuBoldItalic => "ubuntubdi.ttf",
        RobotoBold => "robotobd.ttf",
        RobotoBoldItalic => "robotobdi.ttf",
        SfProDisplayBold => "SF-Pro-Display-Bold.otf",
    }
}

impl Default for SSFont {
    fn default() -> Self {
        Self::ArialBold
    }
}

wire_enum! {
    /// A character gender
    pub enum Gender {
        Male => "male",
        Female => "female",
    }
}

wire_enum! {
    /// A character nationality, used for rp names
    pub enum Nation {
        Russian => "russian",
        American => "american",
        German => "german",
        French => "french",
        Italian => "italian",
        Japanese => "japanese",
        Latinos => "latinos",
        Swedish => "swedish",
        Danish => "danish",
        Romanian => "romanian",
    }
}

wire_enum! {
    /// Who changed an online record
    pub enum ModifiedBy {
        System => "system",
        Admin => "admin",
    }
}

wire_enum! {
    /// The verdict of a manual rp name override
    pub enum OverrideStatus {
        Confirmed => "confirmed",
        Denied => "denied",
    }
}

wire_enum! {
    /// Which half of an rp nickname an override applies to
    pub enum OverrideKind {
        Name => "name",
        Surname => "surname",
    }
}

wire_enum! {
    /// A messenger platform
    pub enum PrivacyPlatform {
        Vk => "vk",
        Tg => "tg",
    }
}

wire_enum! {
    /// The kind of token statistics to request
    pub enum StatResponseType {
        Counts => "counts",
        Requests => "requests",
    }
}
