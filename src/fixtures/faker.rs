//! Seedable source of plausible random values for factories.

use std::collections::HashSet;
use std::ops::Range;

use fake::Fake;
use fake::faker::boolean::en::Boolean;
use fake::faker::company::en::CompanyName;
use fake::faker::currency::en::CurrencyCode;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Paragraphs, Words};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::distributions::uniform::{SampleRange, SampleUniform};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

const LEI_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug)]
pub struct Faker {
    rng: StdRng,
    issued_emails: HashSet<String>,
}

impl Faker {
    /// Same seed, same sequence of values.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            issued_emails: HashSet::new(),
        }
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Random (v4 layout) uuid drawn from this faker's rng.
    pub fn uuid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.r#gen()).into_uuid()
    }

    pub fn between<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// `true` with the given probability, in percent.
    pub fn boolean(&mut self, chance: u8) -> bool {
        Boolean(chance).fake_with_rng(&mut self.rng)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }

    pub fn company_name(&mut self) -> String {
        CompanyName().fake_with_rng(&mut self.rng)
    }

    pub fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    pub fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    pub fn phone_number(&mut self) -> String {
        PhoneNumber().fake_with_rng(&mut self.rng)
    }

    pub fn currency_code(&mut self) -> String {
        CurrencyCode().fake_with_rng(&mut self.rng)
    }

    /// An e-mail on a reserved example domain that this faker never handed out before.
    pub fn unique_safe_email(&mut self) -> String {
        let mut email: String = SafeEmail().fake_with_rng(&mut self.rng);
        let mut attempt = 1u32;
        while self.issued_emails.contains(&email) {
            let base: String = SafeEmail().fake_with_rng(&mut self.rng);
            email = match base.split_once('@') {
                Some((local, domain)) => format!("{local}{attempt}@{domain}"),
                None => format!("{base}{attempt}"),
            };
            attempt += 1;
        }
        self.issued_emails.insert(email.clone());
        email
    }

    pub fn image_url(&mut self, width: u32, height: u32) -> String {
        let token: u32 = self.rng.r#gen();
        format!("https://picsum.photos/seed/{token:08x}/{width}/{height}")
    }

    /// ISO 17442 legal entity identifier with valid check digits.
    pub fn lei_code(&mut self) -> String {
        let mut code: String = (0..18)
            .map(|_| LEI_ALPHABET[self.rng.gen_range(0..LEI_ALPHABET.len())] as char)
            .collect();
        let remainder = mod97(&format!("{code}00"));
        code.push_str(&format!("{:02}", 98 - remainder));
        code
    }

    /// A capitalised sentence cut to at most `max_chars` characters.
    pub fn text(&mut self, max_chars: usize) -> String {
        let words: Vec<String> = Words(3..8).fake_with_rng(&mut self.rng);
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get(0..1) {
            sentence = first.to_uppercase() + &sentence[1..];
        }
        sentence.push('.');
        truncate_chars(&sentence, max_chars)
    }

    pub fn paragraphs(&mut self, count: Range<usize>) -> String {
        let paragraphs: Vec<String> = Paragraphs(count).fake_with_rng(&mut self.rng);
        paragraphs.join("\n\n")
    }
}

pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect::<String>().trim_end().to_string()
}

/// ISO 7064 mod 97-10 remainder, letters counted as 10..=35.
fn mod97(code: &str) -> u32 {
    code.chars().fold(0u32, |acc, c| {
        let value = c.to_digit(36).unwrap_or(0);
        if value >= 10 {
            (acc * 100 + value) % 97
        } else {
            (acc * 10 + value) % 97
        }
    })
}
