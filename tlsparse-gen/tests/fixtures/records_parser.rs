// Code generated by tlsparse-gen. DO NOT EDIT.

/// Decodes a [`HpkeKeyConfig`] from its wire encoding.
pub fn hpke_key_config_parser(
    input: &[u8],
) -> Result<HpkeKeyConfig, ::tlsparse::Malformed> {
    let mut __reader_0 = ::tlsparse::Reader::new(input);
    let config_id = __reader_0.read_u8()?;
    let kem_id = __reader_0.read_u16()?;
    let public_key = __reader_0.read_u16_length_prefixed()?.as_slice().to_vec();
    let mut __reader_1 = __reader_0.read_u16_length_prefixed()?;
    let mut __items_1 = Vec::new();
    while !__reader_1.is_empty() {
        let kdf_id = __reader_1.read_u16()?;
        let aead_id = __reader_1.read_u16()?;
        __items_1.push(HpkeCiphersuite { kdf_id, aead_id });
    }
    let ciphersuites = __items_1;
    Ok(HpkeKeyConfig {
        config_id,
        kem_id,
        public_key,
        ciphersuites,
    })
}
/// Decodes a [`KeyShare`] from its wire encoding.
pub fn key_share_parser(input: &[u8]) -> Result<KeyShare, ::tlsparse::Malformed> {
    let mut __reader_0 = ::tlsparse::Reader::new(input);
    let public_key = __reader_0.read_u8_length_prefixed()?.as_slice().to_vec();
    let mut __reader_1 = __reader_0.read_u16_length_prefixed()?;
    let mut __items_1 = Vec::new();
    while !__reader_1.is_empty() {
        let kdf_id = __reader_1.read_u16()?;
        let aead_id = __reader_1.read_u16()?;
        __items_1.push(HpkeCiphersuite { kdf_id, aead_id });
    }
    let ciphersuites = __items_1;
    Ok(KeyShare {
        public_key,
        ciphersuites,
    })
}
/// Decodes a [`Certificate`] from its wire encoding.
pub fn certificate_parser(input: &[u8]) -> Result<Certificate, ::tlsparse::Malformed> {
    let mut __reader_0 = ::tlsparse::Reader::new(input);
    let request_context = __reader_0.read_u8_length_prefixed()?.as_slice().to_vec();
    let mut __reader_1 = __reader_0.read_u24_length_prefixed()?;
    let mut __items_1 = Vec::new();
    while !__reader_1.is_empty() {
        let cert_data = __reader_1.read_u24_length_prefixed()?.as_slice().to_vec();
        let mut __reader_2 = __reader_1.read_u16_length_prefixed()?;
        let mut __items_2 = Vec::new();
        while !__reader_2.is_empty() {
            let extension_type = __reader_2.read_u16()?;
            let extension_data = __reader_2
                .read_u16_length_prefixed()?
                .as_slice()
                .to_vec();
            __items_2
                .push(Extension {
                    extension_type,
                    extension_data,
                });
        }
        let extensions = __items_2;
        __items_1
            .push(CertificateEntry {
                cert_data,
                extensions,
            });
    }
    let entries = __items_1;
    Ok(Certificate {
        request_context,
        entries,
    })
}
/// Decodes a [`Timestamps`] from its wire encoding.
pub fn timestamps_parser(input: &[u8]) -> Result<Timestamps, ::tlsparse::Malformed> {
    let mut __reader_0 = ::tlsparse::Reader::new(input);
    let version = __reader_0.read_u8()?;
    let sequence = __reader_0.read_u24()?;
    let issued_at = __reader_0.read_u48()?;
    let epoch = __reader_0.read_u32()?;
    let nonce = __reader_0.read_u64()?;
    Ok(Timestamps {
        version,
        sequence,
        issued_at,
        epoch,
        nonce,
    })
}
/// Decodes a [`Tree`] from its wire encoding.
pub fn tree_parser(input: &[u8]) -> Result<Tree, ::tlsparse::Malformed> {
    let mut __reader_0 = ::tlsparse::Reader::new(input);
    let mut __reader_1 = __reader_0.read_u8_length_prefixed()?;
    let mut __items_1 = Vec::new();
    while !__reader_1.is_empty() {
        let id = __reader_1.read_u8()?;
        let mut __reader_2 = __reader_1.read_u8_length_prefixed()?;
        let mut __items_2 = Vec::new();
        while !__reader_2.is_empty() {
            let leaves = __reader_2.read_u8()?;
            __items_2.push(Leaf { leaves });
        }
        let leaves = __items_2;
        let weight = __reader_1.read_u16()?;
        __items_1.push(Branch { id, leaves, weight });
    }
    let leaves = __items_1;
    let checksum = __reader_0.read_u16()?;
    Ok(Tree { leaves, checksum })
}
/// Decodes a [`Offer`] from its wire encoding.
pub fn offer_parser(input: &[u8]) -> Result<Offer, ::tlsparse::Malformed> {
    let mut __reader_0 = ::tlsparse::Reader::new(input);
    let version = __reader_0.read_u16()?;
    let mut __reader_1 = __reader_0.read_u16_length_prefixed()?;
    let mut __items_1 = Vec::new();
    while !__reader_1.is_empty() {
        let kdf_id = __reader_1.read_u16()?;
        let label = __reader_1.read_u8_length_prefixed()?.as_slice().to_vec();
        __items_1.push(suites::Suite { kdf_id, label });
    }
    let offered = __items_1;
    Ok(Offer { version, offered })
}
