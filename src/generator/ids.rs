//! Identifier generators with valid check digits.
//!
//! The `fake` crate has no IBAN or SIRET faker, so both are assembled from
//! the same RNG used for everything else.

use crate::locale::Locale;
use rand::Rng;

/// BBAN layout per country: `9` = digit, `A` = uppercase letter
fn bban_layout(country: &str) -> &'static str {
    match country {
        "FR" => "99999999999999999999999",
        "SA" => "99999999999999999999",
        "BR" => "99999999999999999999999A9",
        _ => "AAAA99999999999999",
    }
}

/// Generate an IBAN for the locale's country
pub fn iban<R: Rng>(locale: Locale, rng: &mut R) -> String {
    let country = locale.iban_country();

    let bban: String = bban_layout(country)
        .chars()
        .map(|c| match c {
            'A' => rng.random_range(b'A'..=b'Z') as char,
            _ => char::from(b'0' + rng.random_range(0..10u8)),
        })
        .collect();

    let check = 98 - iban_mod97(&bban, country, "00");
    format!("{}{:02}{}", country, check, bban)
}

/// ISO 13616 mod-97 over `bban + country + check`, letters mapped A=10..Z=35
fn iban_mod97(bban: &str, country: &str, check: &str) -> u32 {
    bban.chars()
        .chain(country.chars())
        .chain(check.chars())
        .fold(0u32, |acc, c| match c.to_digit(36) {
            Some(v) if v >= 10 => (acc * 100 + v) % 97,
            Some(v) => (acc * 10 + v) % 97,
            None => acc,
        })
}

/// Check an IBAN's check digits
pub fn is_valid_iban(iban: &str) -> bool {
    if iban.len() < 5 || !iban.is_ascii() {
        return false;
    }
    let (country, rest) = iban.split_at(2);
    let (check, bban) = rest.split_at(2);
    if !check.chars().all(|c| c.is_ascii_digit())
        || !bban.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return false;
    }
    iban_mod97(bban, country, check) == 1
}

/// Generate a 14 digit SIRET: a Luhn-valid SIREN followed by a NIC whose
/// last digit makes the whole number Luhn-valid
pub fn siret<R: Rng>(rng: &mut R) -> String {
    let mut digits: Vec<u8> = (0..8).map(|_| rng.random_range(0..10u8)).collect();
    digits.push(luhn_check_digit(&digits));

    // Establishment number, head offices use low numbers
    let nic = rng.random_range(1..10_000u16);
    digits.extend(format!("{:04}", nic).bytes().map(|b| b - b'0'));
    digits.push(luhn_check_digit(&digits));

    digits.into_iter().map(|d| char::from(b'0' + d)).collect()
}

/// Digit that makes `payload + digit` pass the Luhn check
fn luhn_check_digit(payload: &[u8]) -> u8 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            let d = d as u32;
            if i % 2 == 0 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Luhn check over a string of ASCII digits
pub fn is_luhn_valid(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
    let (payload, check) = digits.split_at(digits.len() - 1);
    luhn_check_digit(payload) == check[0]
}
