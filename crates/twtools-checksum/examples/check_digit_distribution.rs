//! Check digit distribution measurement
//!
//! Generates identifiers and reports how often each check digit appears,
//! along with how many UBNs carry the exception digit at position 6.
//!
//! Usage: cargo run --release --example check_digit_distribution [samples]

use rand::SeedableRng;
use rand::rngs::StdRng;
use twtools_checksum::constants::{UBN_SPECIAL_DIGIT, UBN_SPECIAL_POSITION};
use twtools_checksum::{TwidOptions, generate_twid_with, generate_ubn_with};

const DEFAULT_SAMPLES: usize = 100_000;

fn last_digit(s: &str) -> usize {
    s.bytes().last().map(|b| (b - b'0') as usize).unwrap_or(0)
}

fn print_histogram(label: &str, counts: &[usize; 10], total: usize) {
    println!("{}:", label);
    for (digit, &count) in counts.iter().enumerate() {
        println!(
            "  {}: {:>8} ({:.2}%)",
            digit,
            count,
            count as f64 / total as f64 * 100.0
        );
    }
}

fn main() {
    let samples = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SAMPLES);
    let mut rng = StdRng::seed_from_u64(0);

    let mut twid_counts = [0usize; 10];
    let mut ubn_counts = [0usize; 10];
    let mut ubn_special = 0usize;

    for _ in 0..samples {
        let id = generate_twid_with(&mut rng, TwidOptions::default());
        twid_counts[last_digit(&id)] += 1;

        let ubn = generate_ubn_with(&mut rng);
        ubn_counts[last_digit(&ubn)] += 1;
        let special = ubn.as_bytes()[UBN_SPECIAL_POSITION] - b'0';
        if u32::from(special) == UBN_SPECIAL_DIGIT {
            ubn_special += 1;
        }
    }

    println!("Samples: {}", samples);
    print_histogram("TWID check digit", &twid_counts, samples);
    print_histogram("UBN check digit", &ubn_counts, samples);
    println!(
        "UBN with {} at position {}: {} ({:.2}%)",
        UBN_SPECIAL_DIGIT,
        UBN_SPECIAL_POSITION,
        ubn_special,
        ubn_special as f64 / samples as f64 * 100.0
    );
}
