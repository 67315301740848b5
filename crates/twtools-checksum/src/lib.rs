//! twtools-checksum - Taiwanese identifier checksums
//!
//! This crate provides functionality to:
//! - Validate and generate national identification numbers (TWID)
//! - Validate, normalize and generate unified business numbers (UBN)
//! - Validate and build consent codes
//! - Read and write newline-delimited identifier lists

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::generator::{
    TwidOptions, clamp_batch_count, generate_consent, generate_consent_with, generate_twid,
    generate_twid_with, generate_ubn, generate_ubn_with, generate_ubns, generate_ubns_with,
};
#[cfg(feature = "parallel")]
pub use app::generator::generate_ubns_parallel;
pub use domain::consent::{ConsentError, format_consent, is_valid_consent};
pub use domain::twid::{
    Gender, RegionLetter, TwidError, complete_twid, is_valid_twid, letter_code,
};
pub use domain::ubn::{complete_ubn, is_valid_ubn, normalize_ubn};
