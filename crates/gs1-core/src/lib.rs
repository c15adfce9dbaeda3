//! # gs1-core: GS1-128 Payload Codec
//!
//! Builds and reads the logical data string a GS1-128 (or GS1 DataMatrix /
//! GS1 QR) symbol carries: Application Identifiers (AIs) followed by their
//! values, with the FNC1 group separator after every variable-length value
//! that is not last.
//!
//! ## Key Design Principles
//!
//! 1. **One `ApplicationIdentifier` enum.** Every supported AI is a variant.
//!    Field extraction, wire rules, and display labels are exhaustive
//!    `match`es over it.
//!
//! 2. **Static tables.** The registry and the canonical emission order are
//!    `static` data. Nothing in this crate mutates shared state.
//!
//! 3. **Failures are data.** Bad business input produces `None` or a list of
//!    [`FieldError`]s. Nothing here panics on malformed input.
//!
//! 4. **Decode is advisory.** [`format_gs1_human_readable`] skips what it
//!    cannot read and exists for display, not for field reconstruction.
//!
//! ## Crate Policy
//!
//! - No I/O, no `unsafe`.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public DTOs derive `Debug`, `Clone`, and `Serialize`.

pub mod decode;
pub mod encode;
pub mod error;
pub mod gtin;
pub mod registry;
pub mod temporal;
pub mod validate;

/// ASCII 29 (group separator), the in-band FNC1 delimiter between fields.
pub const GROUP_SEPARATOR: char = '\u{1D}';

// Re-export primary types for ergonomic imports.
pub use decode::{
    decode_elements, format_gs1_human_readable, strip_symbology_identifier, DecodedElement,
    SYMBOLOGY_IDENTIFIERS,
};
pub use encode::{generate_gs1_code, EncodingRequest, EncodingResult};
pub use error::{FieldError, Gs1Error};
pub use gtin::{calculate_check_digit, normalize_to_gtin14, verify_check_digit};
pub use registry::{
    get_ai_config, list_supported_ais, AiDescriptor, ApplicationIdentifier, ValueKind,
    CANONICAL_ORDER,
};
pub use temporal::{format_date_to_gs1, format_gs1_to_date, Gs1Date};
pub use validate::{validate_gs1_params, ValidationReport};
