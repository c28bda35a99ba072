// Declarations read by `tests/generate.rs` and compiled together with `records_parser.rs` by
// `tests/decode.rs`.

pub type HpkeKemId = u16;

#[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
pub struct HpkeCiphersuite {
    pub kdf_id: u16,
    pub aead_id: u16,
}

#[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
pub struct HpkeKeyConfig {
    pub config_id: u8,
    pub kem_id: HpkeKemId,
    #[tls(uint16prefixed)]
    pub public_key: Vec<u8>,
    #[tls(uint16prefixed)]
    pub ciphersuites: Vec<HpkeCiphersuite>,
}

#[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
pub struct KeyShare {
    #[tls(uint8prefixed)]
    pub public_key: Vec<u8>,
    #[tls(uint16prefixed)]
    pub ciphersuites: Vec<HpkeCiphersuite>,
}

#[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
pub struct Extension {
    pub extension_type: u16,
    #[tls = "uint16prefixed"]
    pub extension_data: Vec<u8>,
}

#[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
pub struct CertificateEntry {
    #[tls(uint24prefixed)]
    pub cert_data: Vec<u8>,
    #[tls(uint16prefixed)]
    pub extensions: Vec<Extension>,
}

#[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
pub struct Certificate {
    #[tls(uint8prefixed)]
    pub request_context: Vec<u8>,
    #[tls(uint24prefixed)]
    pub entries: Vec<CertificateEntry>,
}

#[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
pub struct Timestamps {
    pub version: u8,
    #[tls(uint24)]
    pub sequence: u32,
    #[tls(uint48)]
    pub issued_at: u64,
    pub epoch: u32,
    pub nonce: u64,
}

#[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
pub struct Leaf {
    pub leaves: u8,
}

#[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
pub struct Branch {
    pub id: u8,
    #[tls(uint8prefixed)]
    pub leaves: Vec<Leaf>,
    pub weight: u16,
}

#[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
pub struct Tree {
    #[tls(uint8prefixed)]
    pub leaves: Vec<Branch>,
    pub checksum: u16,
}

pub mod suites {
    #[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
    pub struct Suite {
        pub kdf_id: u16,
        #[tls(uint8prefixed)]
        pub label: Vec<u8>,
    }
}

#[derive(tlsparse::Record, Clone, Debug, PartialEq, Eq)]
pub struct Offer {
    pub version: u16,
    #[tls(uint16prefixed)]
    pub offered: Vec<suites::Suite>,
}
