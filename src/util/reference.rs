use uuid::Uuid;

use crate::domain::BookingReference;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const CODE_LEN: usize = 9;

/// New `DR` + 9 base-36 characters reference, drawn from a random v4 UUID.
pub fn new_booking_reference() -> BookingReference {
    reference_from_bits(Uuid::new_v4().as_u128())
}

fn reference_from_bits(mut bits: u128) -> BookingReference {
    let mut code = String::with_capacity(BookingReference::PREFIX.len() + CODE_LEN);
    code.push_str(BookingReference::PREFIX);
    for _ in 0..CODE_LEN {
        code.push(ALPHABET[(bits % 36) as usize] as char);
        bits /= 36;
    }
    BookingReference::new(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_has_prefix_and_nine_base36_chars() {
        let reference = new_booking_reference();
        let code = reference.as_str();
        assert_eq!(code.len(), 11);
        assert!(code.starts_with("DR"));
        assert!(code[2..]
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch.is_ascii_uppercase()));
    }

    #[test]
    fn digits_are_least_significant_first() {
        assert_eq!(reference_from_bits(0).as_str(), "DR000000000");
        assert_eq!(reference_from_bits(35).as_str(), "DRZ00000000");
        assert_eq!(reference_from_bits(36).as_str(), "DR010000000");
    }

    #[test]
    fn references_differ() {
        let a = new_booking_reference();
        let b = new_booking_reference();
        assert_ne!(a, b);
    }
}
