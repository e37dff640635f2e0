//! # Signing Properties
//!
//! - verify(sign(e, k)) holds for every event and key
//! - changing any signable field after signing breaks verification
//! - signing is reproducible

#[cfg(test)]
mod tests {
    use nip07_signer::{sign_event, verify_event, Tag, UnsignedEvent};
    use proptest::prelude::*;
    use shared_crypto::SecretKey;

    fn secret_key() -> impl Strategy<Value = SecretKey> {
        any::<[u8; 32]>().prop_filter_map("scalar out of range", |b| SecretKey::from_bytes(b).ok())
    }

    fn tags() -> impl Strategy<Value = Vec<Tag>> {
        prop::collection::vec(prop::collection::vec("[a-z0-9:/\"\\\\\\n]{0,12}", 0..4), 0..4)
    }

    fn event() -> impl Strategy<Value = UnsignedEvent> {
        (any::<u64>(), any::<u16>(), tags(), "\\PC{0,128}|[\\x00-\\x1f]{0,8}").prop_map(
            |(created_at, kind, tags, content)| UnsignedEvent::new(created_at, kind, tags, content),
        )
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_sign_verify(e in event(), k in secret_key()) {
            let signed = sign_event(&e, &k).unwrap();
            prop_assert!(verify_event(&signed).is_ok());
        }

        #[test]
        fn prop_reproducible(e in event(), k in secret_key()) {
            let first = sign_event(&e, &k).unwrap();
            let second = sign_event(&e, &k).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_any_field_change_breaks_verification(
            e in event(),
            k in secret_key(),
            field in 0usize..4,
        ) {
            let mut signed = sign_event(&e, &k).unwrap();
            match field {
                0 => signed.created_at = signed.created_at.wrapping_add(1),
                1 => signed.kind = signed.kind.wrapping_add(1),
                2 => signed.tags.push(vec!["x".to_string()]),
                _ => signed.content.push('!'),
            }
            prop_assert!(verify_event(&signed).is_err());
        }
    }
}
