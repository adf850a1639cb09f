//! Fuzz target for contact masking
//!
//! Masking must never panic on arbitrary UTF-8 and must be deterministic.
//! Phone output only ever contains `+`, digits and the marker.

#![no_main]

use libfuzzer_sys::fuzz_target;
use roost_app::mask::{mask_email, mask_phone, PHONE_MARKER};

fuzz_target!(|contact: &str| {
    assert_eq!(mask_email(contact), mask_email(contact));

    let phone = mask_phone(contact);
    assert_eq!(phone, mask_phone(contact));
    assert!(phone.chars().all(|c| c == '+' || c == PHONE_MARKER || c.is_ascii_digit()));
    assert!(phone.chars().skip(1).all(|c| c != '+'));
});
