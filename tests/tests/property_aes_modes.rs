//! Property-based tests for AES in ECB and CBC mode

use proptest::prelude::*;
use rijndael_algorithms::padding::{pad, unpad};
use rijndael_algorithms::BlockBuffer;
use rijndael_api::{Error, Mode, Variant};
use rijndael_symmetric::{decrypt, encrypt, Cipher};

fn variant() -> impl Strategy<Value = Variant> {
    prop::sample::select(Variant::ALL.to_vec())
}

fn mode() -> impl Strategy<Value = Mode> {
    prop_oneof![Just(Mode::Ecb), Just(Mode::Cbc)]
}

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=256)
}

/// Four whole blocks, unpadded
fn four_blocks() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 64)
}

fn raw_encrypt(cipher: &Cipher, data: &[u8]) -> Vec<u8> {
    let mut blocks = BlockBuffer::from_slice(data).unwrap();
    cipher.encrypt_blocks(&mut blocks).unwrap();
    blocks.merge()
}

fn raw_decrypt(cipher: &Cipher, data: &[u8]) -> Vec<u8> {
    let mut blocks = BlockBuffer::from_slice(data).unwrap();
    cipher.decrypt_blocks(&mut blocks).unwrap();
    blocks.merge()
}

fn block(data: &[u8], i: usize) -> &[u8] {
    &data[i * 16..(i + 1) * 16]
}

proptest! {
    #[test]
    fn roundtrip_every_variant_and_mode(
        variant in variant(),
        mode in mode(),
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in message()
    ) {
        let key = &key[..variant.key_len()];

        let ciphertext = encrypt(&data, variant, mode, key, Some(&iv[..])).unwrap();
        let plaintext = decrypt(&ciphertext, variant, mode, key, Some(&iv[..])).unwrap();

        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn ciphertext_length_matches_padded_plaintext(
        variant in variant(),
        mode in mode(),
        data_len in 0usize..=1000
    ) {
        let key = vec![0u8; variant.key_len()];
        let data = vec![0u8; data_len];

        let ciphertext = encrypt(&data, variant, mode, &key, Some(&[0u8; 16][..])).unwrap();

        prop_assert_eq!(ciphertext.len(), (data_len / 16 + 1) * 16);
    }

    #[test]
    fn encryption_is_deterministic(
        variant in variant(),
        mode in mode(),
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in message()
    ) {
        let key = &key[..variant.key_len()];
        let first = encrypt(&data, variant, mode, key, Some(&iv[..])).unwrap();
        let second = encrypt(&data, variant, mode, key, Some(&iv[..])).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn different_keys_produce_different_ciphertexts(
        key1 in any::<[u8; 16]>(),
        key2 in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in message()
    ) {
        prop_assume!(key1 != key2);

        let ct1 = encrypt(&data, Variant::Aes128, Mode::Cbc, &key1, Some(&iv[..])).unwrap();
        let ct2 = encrypt(&data, Variant::Aes128, Mode::Cbc, &key2, Some(&iv[..])).unwrap();

        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn ecb_blocks_are_independent(
        key in any::<[u8; 16]>(),
        data in four_blocks(),
        changed in 0usize..4,
        delta in 1u8..=255
    ) {
        let cipher = Cipher::new(Variant::Aes128, Mode::Ecb, &key, None).unwrap();

        let mut altered = data.clone();
        altered[changed * 16 + 3] ^= delta;

        let before = raw_encrypt(&cipher, &data);
        let after = raw_encrypt(&cipher, &altered);

        for i in 0..4 {
            if i == changed {
                prop_assert_ne!(block(&before, i), block(&after, i));
            } else {
                prop_assert_eq!(block(&before, i), block(&after, i));
            }
        }
    }

    #[test]
    fn ecb_equal_blocks_give_equal_ciphertext(
        key in any::<[u8; 24]>(),
        repeated in any::<[u8; 16]>()
    ) {
        let cipher = Cipher::new(Variant::Aes192, Mode::Ecb, &key, None).unwrap();
        let data = [repeated, repeated].concat();
        let ciphertext = raw_encrypt(&cipher, &data);

        prop_assert_eq!(block(&ciphertext, 0), block(&ciphertext, 1));
    }

    #[test]
    fn cbc_change_reaches_every_later_block(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in four_blocks(),
        changed in 0usize..4,
        delta in 1u8..=255
    ) {
        let cipher = Cipher::new(Variant::Aes256, Mode::Cbc, &key, Some(&iv[..])).unwrap();

        let mut altered = data.clone();
        altered[changed * 16] ^= delta;

        let before = raw_encrypt(&cipher, &data);
        let after = raw_encrypt(&cipher, &altered);

        for i in 0..4 {
            if i < changed {
                prop_assert_eq!(block(&before, i), block(&after, i));
            } else {
                prop_assert_ne!(block(&before, i), block(&after, i));
            }
        }
    }

    #[test]
    fn cbc_iv_change_reaches_every_block(
        key in any::<[u8; 16]>(),
        iv1 in any::<[u8; 16]>(),
        iv2 in any::<[u8; 16]>(),
        data in four_blocks()
    ) {
        prop_assume!(iv1 != iv2);

        let a = Cipher::new(Variant::Aes128, Mode::Cbc, &key, Some(&iv1[..])).unwrap();
        let b = Cipher::new(Variant::Aes128, Mode::Cbc, &key, Some(&iv2[..])).unwrap();
        let ct1 = raw_encrypt(&a, &data);
        let ct2 = raw_encrypt(&b, &data);

        for i in 0..4 {
            prop_assert_ne!(block(&ct1, i), block(&ct2, i));
        }
    }

    #[test]
    fn cbc_decrypt_damage_stays_local(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in four_blocks(),
        changed in 0usize..4,
        delta in 1u8..=255
    ) {
        let cipher = Cipher::new(Variant::Aes128, Mode::Cbc, &key, Some(&iv[..])).unwrap();
        let mut ciphertext = raw_encrypt(&cipher, &data);
        ciphertext[changed * 16 + 7] ^= delta;

        let recovered = raw_decrypt(&cipher, &ciphertext);

        for i in 0..4 {
            if i == changed || i == changed + 1 {
                prop_assert_ne!(block(&recovered, i), block(&data, i));
            } else {
                prop_assert_eq!(block(&recovered, i), block(&data, i));
            }
        }
    }

    #[test]
    fn pad_then_unpad_is_identity(data in message()) {
        let padded = pad(&data);

        prop_assert_eq!(padded.len() % 16, 0);
        prop_assert!(padded.len() > data.len());
        prop_assert!(padded.len() - data.len() <= 16);
        prop_assert_eq!(unpad(&padded).unwrap(), data.as_slice());
    }

    #[test]
    fn aligned_input_gains_one_block(blocks in 0usize..8) {
        let data = vec![0x5au8; blocks * 16];
        let padded = pad(&data);

        prop_assert_eq!(padded.len(), data.len() + 16);
        prop_assert!(padded[data.len()..].iter().all(|&b| b == 16));
    }

    #[test]
    fn misaligned_ciphertext_is_rejected(
        variant in variant(),
        mode in mode(),
        len in 0usize..200
    ) {
        prop_assume!(len % 16 != 0 || len == 0);
        let key = vec![0u8; variant.key_len()];

        let result = decrypt(&vec![0u8; len], variant, mode, &key, Some(&[0u8; 16][..]));

        let is_input_length_error = matches!(result, Err(Error::InvalidInputLength { .. }));
        prop_assert!(is_input_length_error);
    }
}
