//! Published known-answer vectors
//!
//! - FIPS-197 Appendix C: one block per key size
//! - NIST SP 800-38A Appendix F: four blocks, ECB and CBC, per key size

use rijndael_api::{Mode, Variant};

/// Single-block cipher vector
#[derive(Debug, Clone, Copy)]
pub struct BlockVector {
    pub name: &'static str,
    pub variant: Variant,
    pub key: &'static str,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

/// Multi-block mode vector, no padding
#[derive(Debug, Clone, Copy)]
pub struct ModeVector {
    pub name: &'static str,
    pub variant: Variant,
    pub mode: Mode,
    pub key: &'static str,
    pub iv: Option<&'static str>,
    pub plaintext: &'static str,
    pub ciphertext: &'static str,
}

const FIPS_PLAINTEXT: &str = "00112233445566778899aabbccddeeff";

pub const FIPS197_APPENDIX_C: [BlockVector; 3] = [
    BlockVector {
        name: "C.1 AES-128",
        variant: Variant::Aes128,
        key: "000102030405060708090a0b0c0d0e0f",
        plaintext: FIPS_PLAINTEXT,
        ciphertext: "69c4e0d86a7b0430d8cdb78070b4c55a",
    },
    BlockVector {
        name: "C.2 AES-192",
        variant: Variant::Aes192,
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        plaintext: FIPS_PLAINTEXT,
        ciphertext: "dda97ca4864cdfe06eaf70a0ec0d7191",
    },
    BlockVector {
        name: "C.3 AES-256",
        variant: Variant::Aes256,
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: FIPS_PLAINTEXT,
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
];

/// FIPS-197 Appendix B cipher example
pub const FIPS197_APPENDIX_B: BlockVector = BlockVector {
    name: "B AES-128",
    variant: Variant::Aes128,
    key: "2b7e151628aed2a6abf7158809cf4f3c",
    plaintext: "3243f6a8885a308d313198a2e0370734",
    ciphertext: "3925841d02dc09fbdc118597196a0b32",
};

const SP800_38A_PLAINTEXT: &str = concat!(
    "6bc1bee22e409f96e93d7e117393172a",
    "ae2d8a571e03ac9c9eb76fac45af8e51",
    "30c81c46a35ce411e5fbc1191a0a52ef",
    "f69f2445df4f9b17ad2b417be66c3710",
);

const KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const KEY_192: &str = "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b";
const KEY_256: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";
const IV: &str = "000102030405060708090a0b0c0d0e0f";

pub const SP800_38A: [ModeVector; 6] = [
    ModeVector {
        name: "F.1.1 ECB-AES128",
        variant: Variant::Aes128,
        mode: Mode::Ecb,
        key: KEY_128,
        iv: None,
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: concat!(
            "3ad77bb40d7a3660a89ecaf32466ef97",
            "f5d3d58503b9699de785895a96fdbaaf",
            "43b1cd7f598ece23881b00e3ed030688",
            "7b0c785e27e8ad3f8223207104725dd4",
        ),
    },
    ModeVector {
        name: "F.1.3 ECB-AES192",
        variant: Variant::Aes192,
        mode: Mode::Ecb,
        key: KEY_192,
        iv: None,
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: concat!(
            "bd334f1d6e45f25ff712a214571fa5cc",
            "974104846d0ad3ad7734ecb3ecee4eef",
            "ef7afd2270e2e60adce0ba2face6444e",
            "9a4b41ba738d6c72fb16691603c18e0e",
        ),
    },
    ModeVector {
        name: "F.1.5 ECB-AES256",
        variant: Variant::Aes256,
        mode: Mode::Ecb,
        key: KEY_256,
        iv: None,
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: concat!(
            "f3eed1bdb5d2a03c064b5a7e3db181f8",
            "591ccb10d410ed26dc5ba74a31362870",
            "b6ed21b99ca6f4f9f153e7b1beafed1d",
            "23304b7a39f9f3ff067d8d8f9e24ecc7",
        ),
    },
    ModeVector {
        name: "F.2.1 CBC-AES128",
        variant: Variant::Aes128,
        mode: Mode::Cbc,
        key: KEY_128,
        iv: Some(IV),
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: concat!(
            "7649abac8119b246cee98e9b12e9197d",
            "5086cb9b507219ee95db113a917678b2",
            "73bed6b8e3c1743b7116e69e22229516",
            "3ff1caa1681fac09120eca307586e1a7",
        ),
    },
    ModeVector {
        name: "F.2.3 CBC-AES192",
        variant: Variant::Aes192,
        mode: Mode::Cbc,
        key: KEY_192,
        iv: Some(IV),
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: concat!(
            "4f021db243bc633d7178183a9fa071e8",
            "b4d9ada9ad7dedf4e5e738763f69145a",
            "571b242012fb7ae07fa9baac3df102e0",
            "08b0e27988598881d920a9e64f5615cd",
        ),
    },
    ModeVector {
        name: "F.2.5 CBC-AES256",
        variant: Variant::Aes256,
        mode: Mode::Cbc,
        key: KEY_256,
        iv: Some(IV),
        plaintext: SP800_38A_PLAINTEXT,
        ciphertext: concat!(
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6",
            "9cfc4e967edb808d679f777bc6702c7d",
            "39f23369a9d9bacfa530e26304231461",
            "b2eb05e2c39be9fcda6c19078c6a9d1b",
        ),
    },
];
