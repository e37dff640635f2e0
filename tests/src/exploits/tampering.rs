//! # Ciphertext Tampering
//!
//! ## Attack Vector
//!
//! An active relay rewrites a message in flight: flips ciphertext bits,
//! swaps in a different nonce, splices parts of two messages together or
//! mangles the encoding.
//!
//! ## Expected Defense
//!
//! Every variant fails with `DecryptionError`. No partial plaintext and no
//! distinguishable error reaches the caller.

#[cfg(test)]
mod tests {
    use crate::fixtures::memory_provider;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use nip07_signer::{InMemoryBlobStore, Nip07Api, SignerError, SigningProvider};

    struct Conversation {
        alice: SigningProvider<InMemoryBlobStore>,
        bob: SigningProvider<InMemoryBlobStore>,
        alice_pk: String,
        bob_pk: String,
    }

    async fn conversation() -> Conversation {
        let alice = memory_provider();
        let bob = memory_provider();
        let alice_pk = alice.get_public_key().await.unwrap();
        let bob_pk = bob.get_public_key().await.unwrap();
        Conversation {
            alice,
            bob,
            alice_pk,
            bob_pk,
        }
    }

    fn split(payload: &str) -> (Vec<u8>, Vec<u8>) {
        let (ct, iv) = payload.split_once("?iv=").unwrap();
        (STANDARD.decode(ct).unwrap(), STANDARD.decode(iv).unwrap())
    }

    fn join(ct: &[u8], iv: &[u8]) -> String {
        format!("{}?iv={}", STANDARD.encode(ct), STANDARD.encode(iv))
    }

    #[tokio::test]
    async fn test_every_ciphertext_byte_is_authenticated() {
        let c = conversation().await;
        let payload = c.alice.nip04_encrypt(&c.bob_pk, "attack at dawn").await.unwrap();
        let (ct, iv) = split(&payload);

        for i in 0..ct.len() {
            let mut forged = ct.clone();
            forged[i] ^= 0x01;
            assert_eq!(
                c.bob.nip04_decrypt(&c.alice_pk, &join(&forged, &iv)).await,
                Err(SignerError::Decryption),
                "byte {i}"
            );
        }
    }

    #[tokio::test]
    async fn test_nonce_swap_rejected() {
        let c = conversation().await;
        let first = c.alice.nip04_encrypt(&c.bob_pk, "one").await.unwrap();
        let second = c.alice.nip04_encrypt(&c.bob_pk, "two").await.unwrap();

        let (ct1, _) = split(&first);
        let (_, iv2) = split(&second);

        assert_eq!(
            c.bob.nip04_decrypt(&c.alice_pk, &join(&ct1, &iv2)).await,
            Err(SignerError::Decryption)
        );
    }

    #[tokio::test]
    async fn test_truncation_and_extension_rejected() {
        let c = conversation().await;
        let payload = c.alice.nip04_encrypt(&c.bob_pk, "hello bob").await.unwrap();
        let (ct, iv) = split(&payload);

        let truncated = join(&ct[..ct.len() - 1], &iv);
        let mut extended = ct.clone();
        extended.push(0);
        let extended = join(&extended, &iv);
        let tag_only = join(&ct[ct.len() - 16..], &iv);
        let empty = join(&[], &iv);

        for forged in [truncated, extended, tag_only, empty] {
            assert_eq!(
                c.bob.nip04_decrypt(&c.alice_pk, &forged).await,
                Err(SignerError::Decryption),
                "{forged}"
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_encodings_rejected() {
        let c = conversation().await;
        let payload = c.alice.nip04_encrypt(&c.bob_pk, "hello").await.unwrap();
        let (ct, iv) = split(&payload);

        let cases = [
            String::new(),
            "no separator at all".to_string(),
            STANDARD.encode(&ct),
            format!("{}?iv=", STANDARD.encode(&ct)),
            format!("!!!?iv={}", STANDARD.encode(&iv)),
            join(&ct, &iv[..12]),
            join(&ct, &[iv.clone(), vec![0]].concat()),
        ];

        for forged in cases {
            let err = c.bob.nip04_decrypt(&c.alice_pk, &forged).await.unwrap_err();
            assert_eq!(err.kind(), "DecryptionError", "{forged:?}");
        }
    }

    #[tokio::test]
    async fn test_wrong_direction_key_rejected() {
        // Bob claiming the message came from himself derives a different key.
        let c = conversation().await;
        let payload = c.alice.nip04_encrypt(&c.bob_pk, "hi").await.unwrap();

        assert_eq!(
            c.bob.nip04_decrypt(&c.bob_pk, &payload).await,
            Err(SignerError::Decryption)
        );
    }

    #[tokio::test]
    async fn test_valid_payload_still_decrypts() {
        let c = conversation().await;
        let payload = c.alice.nip04_encrypt(&c.bob_pk, "untouched").await.unwrap();
        let (ct, iv) = split(&payload);

        assert_eq!(
            c.bob.nip04_decrypt(&c.alice_pk, &join(&ct, &iv)).await.unwrap(),
            "untouched"
        );
    }
}
