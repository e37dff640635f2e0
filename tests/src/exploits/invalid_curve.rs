//! # Invalid Curve Attacks
//!
//! ## Attack Vector
//!
//! A peer supplies an x coordinate that is not on secp256k1 (or is not a
//! field element at all) hoping ECDH leaks bits of our scalar through a
//! small-order twist point.
//!
//! ## Expected Defense
//!
//! The peer key is rejected with `InvalidKeyError` before any scalar
//! multiplication. Secret scalars outside `[1, n-1]` are rejected at load.

#[cfg(test)]
mod tests {
    use crate::fixtures::{memory_provider, provider_with_key};
    use nip07_signer::{BlobStore, InMemoryBlobStore, KeyStore, Nip07Api, SignerError};
    use shared_crypto::{derive_public_key, CryptoError, SecretKey, XOnlyPublicKey};

    /// The field prime p.
    const FIELD_PRIME: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f";
    /// BIP-340 test vector 14: exceeds the field size.
    const ABOVE_FIELD: &str = "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc30";
    /// secp256k1 group order n.
    const ORDER: &str = "fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141";

    #[test]
    fn test_peer_coordinates_outside_field_rejected() {
        let all_ones = "ff".repeat(32);
        for hex in [FIELD_PRIME, ABOVE_FIELD, all_ones.as_str()] {
            assert_eq!(
                XOnlyPublicKey::from_hex(hex).unwrap_err(),
                CryptoError::InvalidPublicKey,
                "{hex}"
            );
        }
    }

    #[test]
    fn test_zero_and_order_scalars_rejected() {
        assert_eq!(
            derive_public_key(&[0u8; 32]).unwrap_err(),
            CryptoError::InvalidPrivateKey
        );
        let order: [u8; 32] = hex::decode(ORDER).unwrap().try_into().unwrap();
        assert_eq!(
            derive_public_key(&order).unwrap_err(),
            CryptoError::InvalidPrivateKey
        );
        assert!(SecretKey::from_hex(ORDER).is_err());
    }

    #[tokio::test]
    async fn test_encrypt_to_invalid_peer_refused() {
        let provider = memory_provider();

        for peer in [FIELD_PRIME, ABOVE_FIELD, "02", "not hex", ""] {
            let err = provider.nip04_encrypt(peer, "hi").await.unwrap_err();
            assert_eq!(err.kind(), "InvalidKeyError", "{peer}");
        }
    }

    #[tokio::test]
    async fn test_decrypt_from_invalid_peer_refused() {
        let alice = memory_provider();
        let bob = memory_provider();
        let bob_pk = bob.get_public_key().await.unwrap();
        let ciphertext = alice.nip04_encrypt(&bob_pk, "hi").await.unwrap();

        let err = bob.nip04_decrypt(ABOVE_FIELD, &ciphertext).await.unwrap_err();
        assert!(matches!(err, SignerError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn test_compressed_sec1_prefix_not_accepted() {
        // 33-byte compressed encodings are not x-only keys.
        let provider = memory_provider();
        let peer = format!("02{}", memory_provider().get_public_key().await.unwrap());

        let err = provider.nip04_encrypt(&peer, "hi").await.unwrap_err();
        assert!(matches!(err, SignerError::InvalidKey(_)));
    }

    #[tokio::test]
    async fn test_stored_out_of_range_scalar_is_corrupt() {
        let store = InMemoryBlobStore::with_value(nip07_signer::DEFAULT_STORAGE_KEY, ORDER);
        let provider = nip07_signer::SigningProvider::new(
            KeyStore::with_default_slot(store),
            Default::default(),
        );

        let err = provider.get_public_key().await.unwrap_err();
        assert_eq!(err.kind(), "StorageError");

        // The corrupt value is left for the operator, never silently replaced.
        assert_eq!(
            provider
                .keystore()
                .store()
                .get(nip07_signer::DEFAULT_STORAGE_KEY)
                .await
                .unwrap()
                .as_deref(),
            Some(ORDER)
        );
    }

    #[tokio::test]
    async fn test_generator_key_is_usable() {
        // Scalar 1: the smallest valid secret must still work end to end.
        let mut one = [0u8; 32];
        one[31] = 1;
        let provider = provider_with_key(&SecretKey::from_bytes(one).unwrap());

        assert_eq!(
            provider.get_public_key().await.unwrap(),
            "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }
}
