// ============================================================================
// Currency Dataset
// Compiled-in registry table and the types generated from it
// ============================================================================

use super::CurrencyRecord;

macro_rules! option_symbol {
    () => {
        None
    };
    ($symbol:literal) => {
        Some($symbol)
    };
}

/// Expands one static currency table into the whole registry surface:
/// the `CurrencyId` enum (bare identifier shape), the `tags` module of
/// zero-sized type witnesses, and the `record` lookup every accessor
/// forwards to.
macro_rules! define_currency_registry {
    ($($name:ident: {
        alpha: $alpha:literal,
        numeric: $numeric:literal,
        scale: $scale:literal,
        description: $description:literal
        $(, short_symbol: $short:literal)?
        $(, long_symbol: $long:literal)? $(,)?
    }),+ $(,)?) => {
        /// Identifier of a currency known to the registry.
        ///
        /// This is the runtime (bare identifier) shape of a currency. The
        /// matching compile-time shape is the zero-sized witness in [`tags`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum CurrencyId {
            $($name,)+
        }

        impl CurrencyId {
            /// Every currency in the registry, in table order.
            pub const ALL: &'static [CurrencyId] = &[$(CurrencyId::$name,)+];

            /// The metadata record for this currency.
            ///
            /// This is the single identifier-shaped lookup; the type- and
            /// instance-shaped accessors all forward here.
            pub const fn record(self) -> CurrencyRecord {
                match self {
                    $(CurrencyId::$name => CurrencyRecord {
                        id: CurrencyId::$name,
                        alpha_code: $alpha,
                        numeric_code: $numeric,
                        default_scale: $scale,
                        description: $description,
                        short_symbol: option_symbol!($($short)?),
                        long_symbol: option_symbol!($($long)?),
                    },)+
                }
            }
        }

        /// Zero-sized type witnesses, one per registry entry.
        ///
        /// These carry the currency identity at the type level and tag
        /// [`Money`](crate::money::Money) values.
        pub mod tags {
            $(
                #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
                pub struct $name;

                impl crate::registry::CurrencyTag for $name {
                    const ID: crate::registry::CurrencyId =
                        crate::registry::CurrencyId::$name;
                    const DEFAULT_SCALE: i8 = $scale;
                }

                impl crate::registry::HasCurrency for $name {
                    #[inline]
                    fn currency_id(&self) -> crate::registry::CurrencyId {
                        crate::registry::CurrencyId::$name
                    }
                }
            )+
        }
    };
}

// ISO 4217 currencies carry their official numeric code and an uppercase
// alphabetic code. Non-ISO currencies use numeric code 0 and a lowercase
// code. A scale of -1 is the sentinel for "no sane minor unit".
define_currency_registry! {
    Usd: {
        alpha: "USD",
        numeric: 840,
        scale: 2,
        description: "United States dollar",
        short_symbol: "$",
        long_symbol: "US$",
    },
    Eur: {
        alpha: "EUR",
        numeric: 978,
        scale: 2,
        description: "Euro",
        short_symbol: "€",
    },
    Jpy: {
        alpha: "JPY",
        numeric: 392,
        scale: 0,
        description: "Japanese yen",
        short_symbol: "¥",
        long_symbol: "JP¥",
    },
    Gbp: {
        alpha: "GBP",
        numeric: 826,
        scale: 2,
        description: "Pound sterling",
        short_symbol: "£",
    },
    Chf: {
        alpha: "CHF",
        numeric: 756,
        scale: 2,
        description: "Swiss franc",
        short_symbol: "Fr",
    },
    Cad: {
        alpha: "CAD",
        numeric: 124,
        scale: 2,
        description: "Canadian dollar",
        short_symbol: "$",
        long_symbol: "CA$",
    },
    Aud: {
        alpha: "AUD",
        numeric: 36,
        scale: 2,
        description: "Australian dollar",
        short_symbol: "$",
        long_symbol: "AU$",
    },
    Nzd: {
        alpha: "NZD",
        numeric: 554,
        scale: 2,
        description: "New Zealand dollar",
        short_symbol: "$",
        long_symbol: "NZ$",
    },
    Cny: {
        alpha: "CNY",
        numeric: 156,
        scale: 2,
        description: "Renminbi",
        short_symbol: "¥",
        long_symbol: "CN¥",
    },
    Hkd: {
        alpha: "HKD",
        numeric: 344,
        scale: 2,
        description: "Hong Kong dollar",
        short_symbol: "$",
        long_symbol: "HK$",
    },
    Sgd: {
        alpha: "SGD",
        numeric: 702,
        scale: 2,
        description: "Singapore dollar",
        short_symbol: "$",
        long_symbol: "SG$",
    },
    Inr: {
        alpha: "INR",
        numeric: 356,
        scale: 2,
        description: "Indian rupee",
        short_symbol: "₹",
    },
    Krw: {
        alpha: "KRW",
        numeric: 410,
        scale: 0,
        description: "South Korean won",
        short_symbol: "₩",
    },
    Sek: {
        alpha: "SEK",
        numeric: 752,
        scale: 2,
        description: "Swedish krona",
        short_symbol: "kr",
    },
    Nok: {
        alpha: "NOK",
        numeric: 578,
        scale: 2,
        description: "Norwegian krone",
        short_symbol: "kr",
    },
    Dkk: {
        alpha: "DKK",
        numeric: 208,
        scale: 2,
        description: "Danish krone",
        short_symbol: "kr",
    },
    Pln: {
        alpha: "PLN",
        numeric: 985,
        scale: 2,
        description: "Polish złoty",
        short_symbol: "zł",
    },
    Brl: {
        alpha: "BRL",
        numeric: 986,
        scale: 2,
        description: "Brazilian real",
        short_symbol: "R$",
    },
    Mxn: {
        alpha: "MXN",
        numeric: 484,
        scale: 2,
        description: "Mexican peso",
        short_symbol: "$",
        long_symbol: "MX$",
    },
    Zar: {
        alpha: "ZAR",
        numeric: 710,
        scale: 2,
        description: "South African rand",
        short_symbol: "R",
    },
    Try: {
        alpha: "TRY",
        numeric: 949,
        scale: 2,
        description: "Turkish lira",
        short_symbol: "₺",
    },
    Rub: {
        alpha: "RUB",
        numeric: 643,
        scale: 2,
        description: "Russian ruble",
        short_symbol: "₽",
    },
    Aed: {
        alpha: "AED",
        numeric: 784,
        scale: 2,
        description: "United Arab Emirates dirham",
    },
    Sar: {
        alpha: "SAR",
        numeric: 682,
        scale: 2,
        description: "Saudi riyal",
    },
    Bhd: {
        alpha: "BHD",
        numeric: 48,
        scale: 3,
        description: "Bahraini dinar",
    },
    Kwd: {
        alpha: "KWD",
        numeric: 414,
        scale: 3,
        description: "Kuwaiti dinar",
    },
    Jod: {
        alpha: "JOD",
        numeric: 400,
        scale: 3,
        description: "Jordanian dinar",
    },
    Omr: {
        alpha: "OMR",
        numeric: 512,
        scale: 3,
        description: "Omani rial",
    },
    Tnd: {
        alpha: "TND",
        numeric: 788,
        scale: 3,
        description: "Tunisian dinar",
    },
    Clf: {
        alpha: "CLF",
        numeric: 990,
        scale: 4,
        description: "Unidad de fomento",
    },
    Vnd: {
        alpha: "VND",
        numeric: 704,
        scale: 0,
        description: "Vietnamese đồng",
        short_symbol: "₫",
    },
    Isk: {
        alpha: "ISK",
        numeric: 352,
        scale: 0,
        description: "Icelandic króna",
        short_symbol: "kr",
    },
    Xau: {
        alpha: "XAU",
        numeric: 959,
        scale: -1,
        description: "Gold (one troy ounce)",
        short_symbol: "Au",
        long_symbol: "gold",
    },
    Xag: {
        alpha: "XAG",
        numeric: 961,
        scale: -1,
        description: "Silver (one troy ounce)",
        short_symbol: "Ag",
        long_symbol: "silver",
    },
    Xpt: {
        alpha: "XPT",
        numeric: 962,
        scale: -1,
        description: "Platinum (one troy ounce)",
        short_symbol: "Pt",
        long_symbol: "platinum",
    },
    Xpd: {
        alpha: "XPD",
        numeric: 964,
        scale: -1,
        description: "Palladium (one troy ounce)",
        short_symbol: "Pd",
        long_symbol: "palladium",
    },
    Btc: {
        alpha: "btc",
        numeric: 0,
        scale: 8,
        description: "Bitcoin",
        short_symbol: "₿",
    },
    Usdt: {
        alpha: "usdt",
        numeric: 0,
        scale: 6,
        description: "Tether USD",
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_currency_has_exactly_one_record() {
        let mut codes = HashSet::new();
        for &id in CurrencyId::ALL {
            let record = id.record();
            assert_eq!(record.id, id);
            assert!(codes.insert(record.alpha_code), "duplicate code {}", record.alpha_code);
        }
        assert_eq!(codes.len(), CurrencyId::ALL.len());
    }

    #[test]
    fn test_iso_codes_are_uppercase_with_numeric() {
        for &id in CurrencyId::ALL {
            let record = id.record();
            if record.numeric_code != 0 {
                assert_eq!(record.alpha_code.len(), 3);
                assert!(record.alpha_code.chars().all(|c| c.is_ascii_uppercase()));
            } else {
                assert!(record.alpha_code.chars().all(|c| c.is_ascii_lowercase()));
            }
        }
    }

    #[test]
    fn test_known_scales() {
        assert_eq!(CurrencyId::Usd.record().default_scale, 2);
        assert_eq!(CurrencyId::Jpy.record().default_scale, 0);
        assert_eq!(CurrencyId::Bhd.record().default_scale, 3);
        assert_eq!(CurrencyId::Clf.record().default_scale, 4);
        assert_eq!(CurrencyId::Xau.record().default_scale, -1);
        assert_eq!(CurrencyId::Btc.record().default_scale, 8);
    }

    #[test]
    fn test_tags_match_records() {
        use crate::registry::CurrencyTag;

        assert_eq!(tags::Usd::ID, CurrencyId::Usd);
        assert_eq!(tags::Usd::DEFAULT_SCALE, 2);
        assert_eq!(tags::Jpy::DEFAULT_SCALE, 0);
        assert_eq!(tags::Xau::DEFAULT_SCALE, -1);
        assert_eq!(tags::Btc::DEFAULT_SCALE, 8);
    }
}
