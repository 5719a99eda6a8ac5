//! Locales supported by the fake-data source.
//!
//! Locales are written with ISO codes (`fr_FR`) rather than the `fake`
//! crate's constant names (`FR_FR`).

use crate::error::PopulateError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    ArSa,
    #[default]
    EnUs,
    FrFr,
    JaJp,
    PtBr,
    ZhCn,
    ZhTw,
}

impl Locale {
    pub const ALL: [Locale; 7] = [
        Locale::ArSa,
        Locale::EnUs,
        Locale::FrFr,
        Locale::JaJp,
        Locale::PtBr,
        Locale::ZhCn,
        Locale::ZhTw,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::ArSa => "ar_SA",
            Locale::EnUs => "en_US",
            Locale::FrFr => "fr_FR",
            Locale::JaJp => "ja_JP",
            Locale::PtBr => "pt_BR",
            Locale::ZhCn => "zh_CN",
            Locale::ZhTw => "zh_TW",
        }
    }

    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(Locale::code).collect()
    }

    /// ISO 3166 country used for IBANs generated under this locale
    pub fn iban_country(&self) -> &'static str {
        match self {
            Locale::ArSa => "SA",
            Locale::FrFr => "FR",
            Locale::PtBr => "BR",
            // No IBAN in the US, Japan or China; fall back to a GB layout
            Locale::EnUs | Locale::JaJp | Locale::ZhCn | Locale::ZhTw => "GB",
        }
    }
}

impl FromStr for Locale {
    type Err = PopulateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "ar_sa" => Ok(Locale::ArSa),
            "en" | "en_us" => Ok(Locale::EnUs),
            "fr" | "fr_fr" => Ok(Locale::FrFr),
            "ja_jp" => Ok(Locale::JaJp),
            "pt_br" => Ok(Locale::PtBr),
            "zh_cn" => Ok(Locale::ZhCn),
            "zh_tw" => Ok(Locale::ZhTw),
            _ => Err(PopulateError::UnsupportedLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
