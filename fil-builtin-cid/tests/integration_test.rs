//! Integration tests for the builtin CID registry and chain hash bridge.
//!
//! These tests pin the text forms of the v6 actor code CIDs and run the
//! bridge against a real blake2b-256 transaction CID.

use fil_builtin_cid::infrastructure::multihash_hex;
use fil_builtin_cid::{
    cid_from_eth_hash, decode_cid, eth_hash_from_cid, init_registry_default,
    init_registry_from_file, init_registry_from_str, parse_hex, to_fixed_hash, ActorRegistry,
    ActorSpec, BuiltinActor, CodeCidBuilder, Codec, Error, EthHash, HashFunction,
    IdentityCidBuilder, InitError, RegistryConfig,
};
use std::collections::HashSet;
use tempfile::TempDir;

const V6_CODE_CIDS: [(&str, &str); 11] = [
    ("fil/6/system", "bafkqaddgnfwc6nrpon4xg5dfnu"),
    ("fil/6/init", "bafkqactgnfwc6nrpnfxgs5a"),
    ("fil/6/cron", "bafkqactgnfwc6nrpmnzg63q"),
    ("fil/6/account", "bafkqadlgnfwc6nrpmfrwg33vnz2a"),
    ("fil/6/storagepower", "bafkqaetgnfwc6nrpon2g64tbm5sxa33xmvza"),
    ("fil/6/storageminer", "bafkqaetgnfwc6nrpon2g64tbm5sw22lomvza"),
    ("fil/6/storagemarket", "bafkqae3gnfwc6nrpon2g64tbm5sw2ylsnnsxi"),
    ("fil/6/paymentchannel", "bafkqafdgnfwc6nrpobqxs3lfnz2gg2dbnzxgk3a"),
    ("fil/6/multisig", "bafkqadtgnfwc6nrpnv2wy5djonuwo"),
    ("fil/6/reward", "bafkqaddgnfwc6nrpojsxoylsmq"),
    ("fil/6/verifiedregistry", "bafkqaftgnfwc6nrpozsxe2lgnfswi4tfm5uxg5dspe"),
];

const TX_CID: &str = "bafy2bzaceakw6vvxudgtws6mevvaxft6vum3pqpktpoqp6ovwvykfyg2wzzhi";
const TX_HASH: &str = "156f56b7a0cd3b4bcc256a0b967ead19b7c1ea9bdd07f9d5b570a2e0dab67274";

#[test]
fn test_default_registry_matches_known_code_cids() {
    let registry = init_registry_default().unwrap();
    assert_eq!(registry.len(), 11);

    for (name, text) in V6_CODE_CIDS {
        let code = registry.code_cid(name).unwrap();
        assert_eq!(code.to_string(), text, "code CID for {name}");
        assert_eq!(decode_cid(text).unwrap(), *code);
    }
}

#[test]
fn test_signable_callers_are_account_and_multisig() {
    let registry = init_registry_default().unwrap();
    let signable: Vec<String> = registry
        .caller_types_signable()
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(
        signable,
        vec![
            "bafkqadlgnfwc6nrpmfrwg33vnz2a".to_string(),
            "bafkqadtgnfwc6nrpnv2wy5djonuwo".to_string(),
        ]
    );
}

#[test]
fn test_explicit_entry_list_in_any_order() {
    let mut specs = BuiltinActor::specs(6);
    specs.reverse();
    let registry = ActorRegistry::build(&IdentityCidBuilder, specs).unwrap();
    let default = init_registry_default().unwrap();

    for actor in BuiltinActor::ALL {
        assert_eq!(registry.builtin_code(actor), default.builtin_code(actor));
    }
    assert_eq!(registry.caller_types_signable().len(), 2);
}

#[test]
fn test_distinct_names_give_distinct_cids() {
    let names = [
        "a", "b", "ab", "ba", "aa", "fil/6/init", "fil/6/init ", "fil/7/init", "FIL/6/INIT",
        "fil/6/account", "fil/6/accounts",
    ];
    let codes: HashSet<_> = names
        .iter()
        .map(|n| IdentityCidBuilder.build(n.as_bytes()).unwrap().to_bytes())
        .collect();
    assert_eq!(codes.len(), names.len());
}

#[test]
fn test_identity_digest_round_trip() {
    for payload in [&b"fil/6/cron"[..], &[0u8, 1, 2, 0xff][..], &[][..]] {
        let cid = IdentityCidBuilder.build(payload).unwrap();
        assert_eq!(cid.hash().digest(), payload);
    }
}

#[test]
fn test_tx_cid_to_hash_and_back() {
    let cid = decode_cid(TX_CID).unwrap();
    let hash = eth_hash_from_cid(&cid).unwrap();
    assert_eq!(hash.to_string(), format!("0x{TX_HASH}"));

    let rebuilt = cid_from_eth_hash(&hash, HashFunction::Blake2b256, Codec::DagCbor).unwrap();
    assert_eq!(rebuilt, cid);
}

#[test]
fn test_account_code_cid_bridge_fixture() {
    let registry = init_registry_default().unwrap();
    let code = registry.builtin_code(BuiltinActor::Account).unwrap();
    assert_eq!(multihash_hex(code), "000d66696c2f362f6163636f756e74");

    let hash = eth_hash_from_cid(code).unwrap();
    assert_eq!(
        hash.to_string(),
        "0x0000000000000000000000000000000000000000006c2f362f6163636f756e74"
    );
}

#[test]
fn test_odd_length_hash_overflows_32_bytes() {
    // 65 hex characters: the implicit left pad makes 33 bytes.
    let odd = format!("0{TX_HASH}");
    assert_eq!(odd.len(), 65);
    let err = parse_hex(&odd, 32).unwrap_err();
    assert!(matches!(err, Error::Length { max: 32, actual: 33 }));
    assert!(odd.parse::<EthHash>().is_err());

    // The 64-character hash itself fits exactly.
    let bytes = parse_hex(TX_HASH, 32).unwrap();
    assert_eq!(bytes.len(), 32);
    assert_eq!(to_fixed_hash::<32>(&bytes).unwrap().as_bytes()[..], bytes[..]);
}

#[test]
fn test_registry_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("registry.toml");

    let config = RegistryConfig {
        actors_version: 6,
        actors: Some(vec![
            ActorSpec::new("fil/6/account", true),
            ActorSpec::new("fil/6/system", false),
        ]),
    };
    config.to_file(&path).unwrap();

    let registry = init_registry_from_file(&path).unwrap();
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.caller_types_signable().len(), 1);
    assert_eq!(
        registry.code_cid("fil/6/account").unwrap().to_string(),
        "bafkqadlgnfwc6nrpmfrwg33vnz2a"
    );
}

#[test]
fn test_registry_from_str_reports_construction_failure() {
    let toml_content = r#"
[[actors]]
name = "fil/6/init"

[[actors]]
name = "fil/6/init"
signer = true
"#;
    let result = init_registry_from_str(toml_content);
    assert!(matches!(
        result,
        Err(InitError::Registry(Error::DuplicateCode { .. }))
    ));
}

#[test]
fn test_registry_from_str_reports_parse_failure() {
    let result = init_registry_from_str("[[actors]]\nsigner = true\n");
    assert!(matches!(result, Err(InitError::Config(_))));
}
