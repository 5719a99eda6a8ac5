//! Seeded column generation.
//!
//! A [`Populator`] owns one [`FakeSource`] per locale it needs: the one
//! selected with `--locale`, plus a French one created on first use for
//! `siret`. Nothing is process-global, so two populators built from the same
//! seed produce the same rows independently.

pub mod ids;
mod unique;

pub use unique::{UniqueValues, MAX_ATTEMPTS};

use crate::column::ColumnKind;
use crate::error::Result;
use crate::locale::Locale;
use crate::seed::Seed;
use fake::faker::company::raw::CompanyName;
use fake::faker::internet::raw::SafeEmail;
use fake::faker::lorem::raw::Sentence;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::{AR_SA, EN, FR_FR, JA_JP, PT_BR, ZH_CN, ZH_TW};
use fake::Fake;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Sentences per `lorem_ipsum` value
pub const LOREM_SENTENCES: usize = 10;

/// Words per `lorem_ipsum` sentence
const LOREM_WORDS: std::ops::Range<usize> = 4..10;

/// Call a `fake` raw faker with the `fake` locale matching a [`Locale`]
macro_rules! localized {
    ($locale:expr, $rng:expr, $faker:ident $(, $arg:expr)*) => {
        match $locale {
            Locale::ArSa => $faker(AR_SA $(, $arg)*).fake_with_rng::<String, _>($rng),
            Locale::EnUs => $faker(EN $(, $arg)*).fake_with_rng::<String, _>($rng),
            Locale::FrFr => $faker(FR_FR $(, $arg)*).fake_with_rng::<String, _>($rng),
            Locale::JaJp => $faker(JA_JP $(, $arg)*).fake_with_rng::<String, _>($rng),
            Locale::PtBr => $faker(PT_BR $(, $arg)*).fake_with_rng::<String, _>($rng),
            Locale::ZhCn => $faker(ZH_CN $(, $arg)*).fake_with_rng::<String, _>($rng),
            Locale::ZhTw => $faker(ZH_TW $(, $arg)*).fake_with_rng::<String, _>($rng),
        }
    };
}

/// One generated row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: u64,
    pub value: String,
}

/// Locale-bound fake-data generator with its own RNG
pub struct FakeSource {
    locale: Locale,
    rng: StdRng,
}

impl FakeSource {
    /// Create a source, seeded for reproducibility or from OS entropy
    pub fn new(locale: Locale, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { locale, rng }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Draw one value
    ///
    /// `city` is never drawn: its row sequence is always empty.
    pub fn value(&mut self, kind: ColumnKind) -> String {
        let locale = self.locale;
        let rng = &mut self.rng;
        match kind {
            ColumnKind::Email => localized!(locale, rng, SafeEmail),
            ColumnKind::Company => localized!(locale, rng, CompanyName),
            ColumnKind::FirstName => localized!(locale, rng, FirstName),
            ColumnKind::LastName => localized!(locale, rng, LastName),
            // One line per row: sentences joined with spaces, not newlines
            ColumnKind::LoremIpsum => (0..LOREM_SENTENCES)
                .map(|_| localized!(locale, &mut *rng, Sentence, LOREM_WORDS.clone()))
                .collect::<Vec<_>>()
                .join(" "),
            ColumnKind::Iban => ids::iban(locale, rng),
            ColumnKind::Siret => ids::siret(rng),
            ColumnKind::City => String::new(),
        }
    }
}

/// Dispatches column kinds to the right [`FakeSource`]
pub struct Populator {
    source: FakeSource,
    french: Option<FakeSource>,
    seed: Option<u64>,
}

impl Populator {
    pub fn new(locale: Locale, seed: Option<&Seed>) -> Self {
        let seed = seed.map(Seed::value);
        Self {
            source: FakeSource::new(locale, seed),
            french: None,
            seed,
        }
    }

    pub fn locale(&self) -> Locale {
        self.source.locale()
    }

    /// Lazily generate `row_count` unique values of `kind`
    ///
    /// `city` always yields nothing. `siret` draws from a dedicated `fr_FR`
    /// source seeded like the main one, whatever the populator's locale.
    pub fn generate(&mut self, kind: ColumnKind, row_count: u64) -> Rows<'_> {
        let seed = self.seed;
        let source = if kind.is_french_only() {
            self.french
                .get_or_insert_with(|| FakeSource::new(Locale::FrFr, seed))
        } else {
            &mut self.source
        };

        Rows {
            source,
            kind,
            total: if kind.is_implemented() { row_count } else { 0 },
            next_id: 0,
            unique: UniqueValues::new(),
            done: false,
        }
    }

    /// Resolve `name` to a column kind and generate it
    pub fn generate_named(&mut self, name: &str, row_count: u64) -> Result<Rows<'_>> {
        let kind: ColumnKind = name.parse()?;
        Ok(self.generate(kind, row_count))
    }
}

/// Lazy sequence of rows for one column kind
///
/// Stops after the first error.
pub struct Rows<'a> {
    source: &'a mut FakeSource,
    kind: ColumnKind,
    total: u64,
    next_id: u64,
    unique: UniqueValues,
    done: bool,
}

impl Rows<'_> {
    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// Rows this sequence produces when nothing fails
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Iterator for Rows<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.next_id >= self.total {
            return None;
        }

        let kind = self.kind;
        let source = &mut *self.source;
        match self.unique.next_with(kind, || source.value(kind)) {
            Ok(value) => {
                let row = Row {
                    id: self.next_id,
                    value,
                };
                self.next_id += 1;
                Some(Ok(row))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = usize::try_from(self.total - self.next_id).unwrap_or(usize::MAX);
        (0, Some(remaining))
    }
}
