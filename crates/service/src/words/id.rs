use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use models::WordId;
use rand::Rng;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const TIMESTAMP_WIDTH: usize = 11;
const SUFFIX_WIDTH: usize = 6;

static GLOBAL: WordIdGenerator = WordIdGenerator::new();

/// Issues `(id, created_at)` pairs for new words.
///
/// Ids are `<11 base-36 digits of created_at in µs><6 random base-36 chars>`.
/// Within one generator the timestamp strictly increases (bumped by 1µs when
/// the clock stalls or steps back), so ids never repeat and sort in creation
/// order. The random suffix covers separate processes.
#[derive(Debug)]
pub struct WordIdGenerator {
    last_micros: Mutex<i64>,
}

impl WordIdGenerator {
    pub const fn new() -> Self { Self { last_micros: Mutex::new(i64::MIN) } }

    /// Process-wide generator shared by every service.
    pub fn global() -> &'static WordIdGenerator { &GLOBAL }

    pub fn next(&self) -> (WordId, DateTime<Utc>) {
        let now = Utc::now();
        let micros = {
            let mut last = self.last_micros.lock().unwrap_or_else(PoisonError::into_inner);
            let candidate = now.timestamp_micros().max(0);
            let micros = if candidate > *last { candidate } else { *last + 1 };
            *last = micros;
            micros
        };
        let created_at = DateTime::from_timestamp_micros(micros).unwrap_or(now);

        let mut id = String::with_capacity(TIMESTAMP_WIDTH + SUFFIX_WIDTH);
        id.push_str(&to_base36(micros as u64, TIMESTAMP_WIDTH));
        let mut rng = rand::thread_rng();
        for _ in 0..SUFFIX_WIDTH {
            id.push(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
        }
        (WordId::new(id), created_at)
    }
}

impl Default for WordIdGenerator {
    fn default() -> Self { Self::new() }
}

fn to_base36(mut n: u64, width: usize) -> String {
    let mut digits = Vec::with_capacity(width);
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    while digits.len() < width {
        digits.push(b'0');
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}
