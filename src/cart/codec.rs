//! Slot payload encoding.
//!
//! The durable slot holds a JSON array of `{id, name, price, quantity}`
//! objects in cart order. Decoding also enforces the cart invariants, so a
//! payload that parses but would produce an invalid cart is rejected whole.

use std::collections::HashSet;

use super::{checked_subtotal, CodecError};
use crate::model::LineItem;

pub fn encode(items: &[LineItem]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(items)?)
}

pub fn decode(payload: &str) -> Result<Vec<LineItem>, CodecError> {
    let items: Vec<LineItem> = serde_json::from_str(payload)?;
    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        if item.quantity == 0 {
            return Err(CodecError::ZeroQuantity(item.id.clone()));
        }
        if item.price.is_sign_negative() && !item.price.is_zero() {
            return Err(CodecError::NegativePrice(item.id.clone()));
        }
        if !seen.insert(&item.id) {
            return Err(CodecError::DuplicateId(item.id.clone()));
        }
    }
    if checked_subtotal(&items).is_none() {
        return Err(CodecError::TotalsOverflow);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};
    use rust_decimal_macros::dec;

    fn sample() -> Vec<LineItem> {
        vec![
            LineItem::new(&Product::new(101_i64, "Pro Mechanical Keyboard K-900", dec!(189.99)), 1),
            LineItem::new(&Product::new("p1002", "Organic Cotton T-Shirt", dec!(29.50)), 3),
        ]
    }

    #[test]
    fn round_trip_preserves_ids_prices_and_order() {
        let items = sample();
        let payload = encode(&items).unwrap();
        let decoded = decode(&payload).unwrap();
        assert_eq!(decoded, items);
        assert_eq!(decoded[0].id, ProductId::Number(101));
    }

    #[test]
    fn decodes_payload_written_by_the_web_store() {
        let payload = r#"[{"id":"a","name":"Widget","price":10,"quantity":2}]"#;
        let items = decode(payload).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].price, dec!(10.00));
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn empty_array_is_an_empty_cart() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_garbage_and_invariant_violations() {
        assert!(matches!(decode("{not json"), Err(CodecError::Json(_))));
        assert!(matches!(decode("null"), Err(CodecError::Json(_))));
        assert!(matches!(
            decode(r#"[{"id":"a","name":"W","price":1,"quantity":-1}]"#),
            Err(CodecError::Json(_))
        ));
        assert!(matches!(
            decode(r#"[{"id":"a","name":"W","price":1,"quantity":0}]"#),
            Err(CodecError::ZeroQuantity(_))
        ));
        assert!(matches!(
            decode(r#"[{"id":"a","name":"W","price":-1,"quantity":1}]"#),
            Err(CodecError::NegativePrice(_))
        ));
        assert!(matches!(
            decode(
                r#"[{"id":"a","name":"W","price":1,"quantity":1},{"id":"a","name":"W","price":1,"quantity":2}]"#
            ),
            Err(CodecError::DuplicateId(_))
        ));
    }

    #[test]
    fn rejects_totals_that_overflow() {
        assert!(matches!(
            decode(r#"[{"id":"a","name":"W","price":70000000000000000000000000000,"quantity":2}]"#),
            Err(CodecError::TotalsOverflow)
        ));
        assert!(matches!(
            decode(
                r#"[{"id":"a","name":"W","price":50000000000000000000000000000,"quantity":1},{"id":"b","name":"W","price":50000000000000000000000000000,"quantity":1}]"#
            ),
            Err(CodecError::TotalsOverflow)
        ));
    }

    #[test]
    fn long_prices_round_trip_exactly() {
        let items = vec![LineItem::new(
            &Product::new("bond", "Bond", dec!(12345678901234567.89)),
            1,
        )];
        let decoded = decode(&encode(&items).unwrap()).unwrap();
        assert_eq!(decoded[0].price, dec!(12345678901234567.89));
        assert_eq!(decoded, items);
    }
}
