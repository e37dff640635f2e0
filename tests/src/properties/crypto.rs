//! # Crypto Properties
//!
//! - derivation is deterministic
//! - ECDH is symmetric
//! - decrypt(encrypt(p)) == p
//! - any single-bit flip in the payload fails decryption

#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use nip07_signer::domain::pairwise::{decrypt, encrypt, shared_secret};
    use nip07_signer::{EncryptedPayload, SignerError};
    use proptest::prelude::*;
    use shared_crypto::{derive_public_key, derive_shared_secret, SecretKey};

    fn secret_key() -> impl Strategy<Value = SecretKey> {
        any::<[u8; 32]>().prop_filter_map("scalar out of range", |b| SecretKey::from_bytes(b).ok())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_derive_is_deterministic(bytes in any::<[u8; 32]>()) {
            match (derive_public_key(&bytes), derive_public_key(&bytes)) {
                (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
                (Err(a), Err(b)) => prop_assert_eq!(a, b),
                _ => prop_assert!(false, "derivation not deterministic"),
            }
        }

        #[test]
        fn prop_ecdh_symmetric(a in secret_key(), b in secret_key()) {
            let ab = derive_shared_secret(&a, &b.public_key().unwrap()).unwrap();
            let ba = derive_shared_secret(&b, &a.public_key().unwrap()).unwrap();
            prop_assert_eq!(ab, ba);
        }

        #[test]
        fn prop_roundtrip(a in secret_key(), b in secret_key(), text in ".{0,256}") {
            let sender = shared_secret(&a, &b.public_key().unwrap()).unwrap();
            let receiver = shared_secret(&b, &a.public_key().unwrap()).unwrap();

            let wire = encrypt(&sender, &text).unwrap().to_string();
            let parsed: EncryptedPayload = wire.parse().unwrap();

            prop_assert_eq!(decrypt(&receiver, &parsed).unwrap(), text);
        }

        #[test]
        fn prop_bit_flip_detected(
            a in secret_key(),
            b in secret_key(),
            text in ".{1,64}",
            position in any::<prop::sample::Index>(),
            bit in 0u8..8,
        ) {
            let shared = shared_secret(&a, &b.public_key().unwrap()).unwrap();
            let payload = encrypt(&shared, &text).unwrap();

            // Flip one bit of the raw ciphertext || tag || nonce, then re-encode.
            let mut ct = payload.ciphertext().to_vec();
            let mut nonce = payload.nonce().as_bytes().to_vec();
            let total = ct.len() + nonce.len();
            let index = position.index(total);
            if index < ct.len() {
                ct[index] ^= 1 << bit;
            } else {
                nonce[index - ct.len()] ^= 1 << bit;
            }
            let forged = format!("{}?iv={}", STANDARD.encode(&ct), STANDARD.encode(&nonce));
            let forged: EncryptedPayload = forged.parse().unwrap();

            prop_assert_eq!(decrypt(&shared, &forged), Err(SignerError::Decryption));
        }

        #[test]
        fn prop_fresh_nonce(a in secret_key(), b in secret_key(), text in ".{0,32}") {
            let shared = shared_secret(&a, &b.public_key().unwrap()).unwrap();
            let first = encrypt(&shared, &text).unwrap();
            let second = encrypt(&shared, &text).unwrap();
            prop_assert_ne!(first.to_string(), second.to_string());
        }
    }
}
