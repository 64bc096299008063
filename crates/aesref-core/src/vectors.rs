//! Built-in known-answer vectors: FIPS-197 key expansion tables and the
//! NIST SP 800-38A F.1 ECB single-block vectors.

use crate::cipher::Direction;

/// Expected schedule for one key.
pub struct KeyExpansionVector {
    /// Human-readable case name.
    pub name: &'static str,
    /// Cipher key as hex.
    pub key: &'static str,
    /// Every round key as hex, in encryption order.
    pub round_keys: &'static [&'static str],
}

/// One ECB block with its expected output.
pub struct EcbVector {
    /// Human-readable case name.
    pub name: &'static str,
    /// Direction the block is transformed in.
    pub direction: Direction,
    /// Cipher key as hex.
    pub key: &'static str,
    /// Input block as hex.
    pub input: &'static str,
    /// Expected output block as hex.
    pub expected: &'static str,
}

/// Key-expansion tables for 128-, 192- and 256-bit keys.
pub const KEY_EXPANSION: &[KeyExpansionVector] = &[
    KeyExpansionVector {
        name: "128-bit all-zero key",
        key: "00000000000000000000000000000000",
        round_keys: &[
            "00000000000000000000000000000000",
            "62636363626363636263636362636363",
            "9b9898c9f9fbfbaa9b9898c9f9fbfbaa",
            "90973450696ccffaf2f457330b0fac99",
            "ee06da7b876a1581759e42b27e91ee2b",
            "7f2e2b88f8443e098dda7cbbf34b9290",
            "ec614b851425758c99ff09376ab49ba7",
            "217517873550620bacaf6b3cc61bf09b",
            "0ef903333ba9613897060a04511dfa9f",
            "b1d4d8e28a7db9da1d7bb3de4c664941",
            "b4ef5bcb3e92e21123e951cf6f8f188e",
        ],
    },
    KeyExpansionVector {
        name: "128-bit all-ones key",
        key: "ffffffffffffffffffffffffffffffff",
        round_keys: &[
            "ffffffffffffffffffffffffffffffff",
            "e8e9e9e917161616e8e9e9e917161616",
            "adaeae19bab8b80f525151e6454747f0",
            "090e2277b3b69a78e1e7cb9ea4a08c6e",
            "e16abd3e52dc2746b33becd8179b60b6",
            "e5baf3ceb766d488045d385013c658e6",
            "71d07db3c6b6a93bc2eb916bd12dc98d",
            "e90d208d2fbb89b6ed5018dd3c7dd150",
            "96337366b988fad054d8e20d68a5335d",
            "8bf03f233278c5f366a027fe0e0514a3",
            "d60a3588e472f07b82d2d7858cd7c326",
        ],
    },
    KeyExpansionVector {
        name: "128-bit sequential key",
        key: "000102030405060708090a0b0c0d0e0f",
        round_keys: &[
            "000102030405060708090a0b0c0d0e0f",
            "d6aa74fdd2af72fadaa678f1d6ab76fe",
            "b692cf0b643dbdf1be9bc5006830b3fe",
            "b6ff744ed2c2c9bf6c590cbf0469bf41",
            "47f7f7bc95353e03f96c32bcfd058dfd",
            "3caaa3e8a99f9deb50f3af57adf622aa",
            "5e390f7df7a69296a7553dc10aa31f6b",
            "14f9701ae35fe28c440adf4d4ea9c026",
            "47438735a41c65b9e016baf4aebf7ad2",
            "549932d1f08557681093ed9cbe2c974e",
            "13111d7fe3944a17f307a78b4d2b30c5",
        ],
    },
    KeyExpansionVector {
        name: "128-bit text key",
        key: "6920e299a5202a6d656e636869746f2a",
        round_keys: &[
            "6920e299a5202a6d656e636869746f2a",
            "fa8807605fa82d0d3ac64e6553b2214f",
            "cf75838d90ddae80aa1be0e5f9a9c1aa",
            "180d2f1488d0819422cb6171db62a0db",
            "baed96ad323d173910f67648cb94d693",
            "881b4ab2ba265d8baad02bc36144fd50",
            "b34f195d096944d6a3b96f15c2fd9245",
            "a7007778ae6933ae0dd05cbbcf2dcefe",
            "ff8bccf251e2ff5c5c32a3e7931f6d19",
            "24b7182e7555e77229674495ba78298c",
            "ae127cdadb479ba8f220df3d4858f6b1",
        ],
    },
    KeyExpansionVector {
        name: "192-bit all-zero key",
        key: "000000000000000000000000000000000000000000000000",
        round_keys: &[
            "00000000000000000000000000000000",
            "00000000000000006263636362636363",
            "62636363626363636263636362636363",
            "9b9898c9f9fbfbaa9b9898c9f9fbfbaa",
            "9b9898c9f9fbfbaa90973450696ccffa",
            "f2f457330b0fac9990973450696ccffa",
            "c81d19a9a171d65353858160588a2df9",
            "c81d19a9a171d6537bebf49bda9a22c8",
            "891fa3a8d1958e51198897f8b8f941ab",
            "c26896f718f2b43f91ed1797407899c6",
            "59f00e3ee1094f9583ecbc0f9b1e0830",
            "0af31fa74a8b8661137b885ff272c7ca",
            "432ac886d834c0b6d2c7df11984c5970",
        ],
    },
    KeyExpansionVector {
        name: "192-bit all-ones key",
        key: "ffffffffffffffffffffffffffffffffffffffffffffffff",
        round_keys: &[
            "ffffffffffffffffffffffffffffffff",
            "ffffffffffffffffe8e9e9e917161616",
            "e8e9e9e917161616e8e9e9e917161616",
            "adaeae19bab8b80f525151e6454747f0",
            "adaeae19bab8b80fc5c2d8ed7f7a60e2",
            "2d2b3104686c76f4c5c2d8ed7f7a60e2",
            "1712403f686820dd454311d92d2f672d",
            "e8edbfc09797df228f8cd3b7e7e4f36a",
            "a2a7e2b38f88859e67653a5ef0f2e57c",
            "2655c33bc1b130516316d2e2ec9e577c",
            "8bfb6d227b09885e67919b1aa620ab4b",
            "c53679a929a82ed5a25343f7d95acba9",
            "598e482fffaee3643a989acd1330b418",
        ],
    },
    KeyExpansionVector {
        name: "192-bit sequential key",
        key: "000102030405060708090a0b0c0d0e0f1011121314151617",
        round_keys: &[
            "000102030405060708090a0b0c0d0e0f",
            "10111213141516175846f2f95c43f4fe",
            "544afef55847f0fa4856e2e95c43f4fe",
            "40f949b31cbabd4d48f043b810b7b342",
            "58e151ab04a2a5557effb5416245080c",
            "2ab54bb43a02f8f662e3a95d66410c08",
            "f501857297448d7ebdf1c6ca87f33e3c",
            "e510976183519b6934157c9ea351f1e0",
            "1ea0372a995309167c439e77ff12051e",
            "dd7e0e887e2fff68608fc842f9dcc154",
            "859f5f237a8d5a3dc0c02952beefd63a",
            "de601e7827bcdf2ca223800fd8aeda32",
            "a4970a331a78dc09c418c271e3a41d5d",
        ],
    },
    KeyExpansionVector {
        name: "256-bit all-zero key",
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        round_keys: &[
            "00000000000000000000000000000000",
            "00000000000000000000000000000000",
            "62636363626363636263636362636363",
            "aafbfbfbaafbfbfbaafbfbfbaafbfbfb",
            "6f6c6ccf0d0f0fac6f6c6ccf0d0f0fac",
            "7d8d8d6ad77676917d8d8d6ad7767691",
            "5354edc15e5be26d31378ea23c38810e",
            "968a81c141fcf7503c717a3aeb070cab",
            "9eaa8f28c0f16d45f1c6e3e7cdfe62e9",
            "2b312bdf6acddc8f56bca6b5bdbbaa1e",
            "6406fd52a4f79017553173f098cf1119",
            "6dbba90b0776758451cad331ec71792f",
            "e7b0e89c4347788b16760b7b8eb91a62",
            "74ed0ba1739b7e252251ad14ce20d43b",
            "10f80a1753bf729c45c979e7cb706385",
        ],
    },
    KeyExpansionVector {
        name: "256-bit all-ones key",
        key: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
        round_keys: &[
            "ffffffffffffffffffffffffffffffff",
            "ffffffffffffffffffffffffffffffff",
            "e8e9e9e917161616e8e9e9e917161616",
            "0fb8b8b8f04747470fb8b8b8f0474747",
            "4a4949655d5f5f73b5b6b69aa2a0a08c",
            "355858dcc51f1f9bcaa7a7233ae0e064",
            "afa80ae5f2f755964741e30ce5e14380",
            "eca0421129bf5d8ae318faa9d9f81acd",
            "e60ab7d014fde24653bc014ab65d42ca",
            "a2ec6e658b5333ef684bc946b1b3d38b",
            "9b6c8a188f91685edc2d69146a702bde",
            "a0bd9f782beeac9743a565d1f216b65a",
            "fc22349173b35ccfaf9e35dbc5ee1e05",
            "0695ed132d7b41846ede24559cc8920f",
            "546d424f27de1e8088402b5b4dae355e",
        ],
    },
    KeyExpansionVector {
        name: "256-bit sequential key",
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        round_keys: &[
            "000102030405060708090a0b0c0d0e0f",
            "101112131415161718191a1b1c1d1e1f",
            "a573c29fa176c498a97fce93a572c09c",
            "1651a8cd0244beda1a5da4c10640bade",
            "ae87dff00ff11b68a68ed5fb03fc1567",
            "6de1f1486fa54f9275f8eb5373b8518d",
            "c656827fc9a799176f294cec6cd5598b",
            "3de23a75524775e727bf9eb45407cf39",
            "0bdc905fc27b0948ad5245a4c1871c2f",
            "45f5a66017b2d387300d4d33640a820a",
            "7ccff71cbeb4fe5413e6bbf0d261a7df",
            "f01afafee7a82979d7a5644ab3afe640",
            "2541fe719bf500258813bbd55a721c0a",
            "4e5a6699a9f24fe07e572baacdf8cdea",
            "24fc79ccbf0979e9371ac23c6d68de36",
        ],
    },
];

const NIST_KEY_128: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const NIST_KEY_192: &str = "8e73b0f7da0e6452c810f32b809079e562f8ead2522c6b7b";
const NIST_KEY_256: &str = "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4";

const PLAINTEXT_0: &str = "6bc1bee22e409f96e93d7e117393172a";
const PLAINTEXT_1: &str = "ae2d8a571e03ac9c9eb76fac45af8e51";
const PLAINTEXT_2: &str = "30c81c46a35ce411e5fbc1191a0a52ef";
const PLAINTEXT_3: &str = "f69f2445df4f9b17ad2b417be66c3710";

/// ECB single-block cases, both directions, all key sizes.
pub const ECB: &[EcbVector] = &[
    EcbVector {
        name: "ECB-128 encipher block 0",
        direction: Direction::Encipher,
        key: NIST_KEY_128,
        input: PLAINTEXT_0,
        expected: "3ad77bb40d7a3660a89ecaf32466ef97",
    },
    EcbVector {
        name: "ECB-128 encipher block 1",
        direction: Direction::Encipher,
        key: NIST_KEY_128,
        input: PLAINTEXT_1,
        expected: "f5d3d58503b9699de785895a96fdbaaf",
    },
    EcbVector {
        name: "ECB-128 encipher block 2",
        direction: Direction::Encipher,
        key: NIST_KEY_128,
        input: PLAINTEXT_2,
        expected: "43b1cd7f598ece23881b00e3ed030688",
    },
    EcbVector {
        name: "ECB-128 encipher block 3",
        direction: Direction::Encipher,
        key: NIST_KEY_128,
        input: PLAINTEXT_3,
        expected: "7b0c785e27e8ad3f8223207104725dd4",
    },
    EcbVector {
        name: "ECB-128 decipher block 0",
        direction: Direction::Decipher,
        key: NIST_KEY_128,
        input: "3ad77bb40d7a3660a89ecaf32466ef97",
        expected: PLAINTEXT_0,
    },
    EcbVector {
        name: "ECB-128 decipher block 1",
        direction: Direction::Decipher,
        key: NIST_KEY_128,
        input: "f5d3d58503b9699de785895a96fdbaaf",
        expected: PLAINTEXT_1,
    },
    EcbVector {
        name: "ECB-128 decipher block 2",
        direction: Direction::Decipher,
        key: NIST_KEY_128,
        input: "43b1cd7f598ece23881b00e3ed030688",
        expected: PLAINTEXT_2,
    },
    EcbVector {
        name: "ECB-128 decipher block 3",
        direction: Direction::Decipher,
        key: NIST_KEY_128,
        input: "7b0c785e27e8ad3f8223207104725dd4",
        expected: PLAINTEXT_3,
    },
    EcbVector {
        name: "ECB-192 encipher block 0",
        direction: Direction::Encipher,
        key: NIST_KEY_192,
        input: PLAINTEXT_0,
        expected: "bd334f1d6e45f25ff712a214571fa5cc",
    },
    EcbVector {
        name: "ECB-192 encipher block 1",
        direction: Direction::Encipher,
        key: NIST_KEY_192,
        input: PLAINTEXT_1,
        expected: "974104846d0ad3ad7734ecb3ecee4eef",
    },
    EcbVector {
        name: "ECB-192 encipher block 2",
        direction: Direction::Encipher,
        key: NIST_KEY_192,
        input: PLAINTEXT_2,
        expected: "ef7afd2270e2e60adce0ba2face6444e",
    },
    EcbVector {
        name: "ECB-192 encipher block 3",
        direction: Direction::Encipher,
        key: NIST_KEY_192,
        input: PLAINTEXT_3,
        expected: "9a4b41ba738d6c72fb16691603c18e0e",
    },
    EcbVector {
        name: "ECB-192 decipher block 0",
        direction: Direction::Decipher,
        key: NIST_KEY_192,
        input: "bd334f1d6e45f25ff712a214571fa5cc",
        expected: PLAINTEXT_0,
    },
    EcbVector {
        name: "ECB-192 decipher block 1",
        direction: Direction::Decipher,
        key: NIST_KEY_192,
        input: "974104846d0ad3ad7734ecb3ecee4eef",
        expected: PLAINTEXT_1,
    },
    EcbVector {
        name: "ECB-192 decipher block 2",
        direction: Direction::Decipher,
        key: NIST_KEY_192,
        input: "ef7afd2270e2e60adce0ba2face6444e",
        expected: PLAINTEXT_2,
    },
    EcbVector {
        name: "ECB-192 decipher block 3",
        direction: Direction::Decipher,
        key: NIST_KEY_192,
        input: "9a4b41ba738d6c72fb16691603c18e0e",
        expected: PLAINTEXT_3,
    },
    EcbVector {
        name: "ECB-256 encipher block 0",
        direction: Direction::Encipher,
        key: NIST_KEY_256,
        input: PLAINTEXT_0,
        expected: "f3eed1bdb5d2a03c064b5a7e3db181f8",
    },
    EcbVector {
        name: "ECB-256 encipher block 1",
        direction: Direction::Encipher,
        key: NIST_KEY_256,
        input: PLAINTEXT_1,
        expected: "591ccb10d410ed26dc5ba74a31362870",
    },
    EcbVector {
        name: "ECB-256 encipher block 2",
        direction: Direction::Encipher,
        key: NIST_KEY_256,
        input: PLAINTEXT_2,
        expected: "b6ed21b99ca6f4f9f153e7b1beafed1d",
    },
    EcbVector {
        name: "ECB-256 encipher block 3",
        direction: Direction::Encipher,
        key: NIST_KEY_256,
        input: PLAINTEXT_3,
        expected: "23304b7a39f9f3ff067d8d8f9e24ecc7",
    },
    EcbVector {
        name: "ECB-256 decipher block 0",
        direction: Direction::Decipher,
        key: NIST_KEY_256,
        input: "f3eed1bdb5d2a03c064b5a7e3db181f8",
        expected: PLAINTEXT_0,
    },
    EcbVector {
        name: "ECB-256 decipher block 1",
        direction: Direction::Decipher,
        key: NIST_KEY_256,
        input: "591ccb10d410ed26dc5ba74a31362870",
        expected: PLAINTEXT_1,
    },
    EcbVector {
        name: "ECB-256 decipher block 2",
        direction: Direction::Decipher,
        key: NIST_KEY_256,
        input: "b6ed21b99ca6f4f9f153e7b1beafed1d",
        expected: PLAINTEXT_2,
    },
    EcbVector {
        name: "ECB-256 decipher block 3",
        direction: Direction::Decipher,
        key: NIST_KEY_256,
        input: "23304b7a39f9f3ff067d8d8f9e24ecc7",
        expected: PLAINTEXT_3,
    },
];
