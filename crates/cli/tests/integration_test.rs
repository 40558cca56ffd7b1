use k256::ecdsa::SigningKey;
use knife_cli::commands::finder::{self, FinderArgs};
use knife_cli::commands::subdigest;
use knife_cli::report::{format_attempt, outcome_table};
use subdigest_kernel::recovery::address_of;
use subdigest_kernel::{search_with, subdigest_of, Address, ChainId, Digest32, KernelError, Phase, SearchOutcome};

const ADDR_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
const ADDR_B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

fn digest_hex(byte: u8) -> String {
    format!("0x{}", format!("{:02x}", byte).repeat(32))
}

fn base_args() -> FinderArgs {
    FinderArgs {
        chain_ids: "1, 137".to_string(),
        addresses: format!("{},{}", ADDR_A, ADDR_B),
        digests: format!("{},{}", digest_hex(1), digest_hex(2)),
        quiet: true,
        ..FinderArgs::default()
    }
}

fn kernel_error(err: &anyhow::Error) -> Option<&KernelError> {
    err.chain().find_map(|e| e.downcast_ref::<KernelError>())
}

#[test]
fn test_subdigest_command() {
    let digest = format!("0x{}", "00".repeat(32));
    let got = subdigest::run("1", "0x0000000000000000000000000000000000000001", &digest).unwrap();
    assert_eq!(
        got.to_string(),
        "0xad11a48ddd8319510bd4535311b202b21f1c0422e711a6a563669dac2818b9f2"
    );

    assert!(subdigest::run("1", "0x01", &digest).is_err());
    assert!(subdigest::run("x", ADDR_A, &digest).is_err());
}

#[test]
fn test_finder_direct_match() {
    let b: Address = ADDR_B.parse().unwrap();
    let target = subdigest_of(ChainId(137), &b, &Digest32([1; 32]));

    let args = FinderArgs {
        target_subdigest: Some(target.to_string().to_uppercase().replacen("0X", "0x", 1)),
        ..base_args()
    };
    let outcome = finder::run(&args).unwrap();

    let w = outcome.witness().unwrap();
    assert_eq!(w.chain_id, ChainId(137));
    assert_eq!(w.path, vec![b]);
    assert_eq!(w.digest, format!("digest:{}", digest_hex(1)));
    // chain 137 is second: 2 * 2 + (B, first digest) = 4 + 3
    assert_eq!(w.attempts, 7);
}

#[test]
fn test_finder_signer_match_nested() {
    let key = SigningKey::from_slice(&[0x42; 32]).unwrap();
    let signer = address_of(key.verifying_key());
    let a: Address = ADDR_A.parse().unwrap();
    let b: Address = ADDR_B.parse().unwrap();

    let inner = subdigest_of(ChainId(1), &a, &Digest32([2; 32]));
    let outer = subdigest_of(ChainId(1), &b, &inner);
    let (sig, rid) = key.sign_prehash_recoverable(outer.as_bytes()).unwrap();
    let mut raw = sig.to_bytes().to_vec();
    raw.push(27 + rid.to_byte());

    let args = FinderArgs {
        signature: Some(format!("0x{}", hex::encode(&raw))),
        expected_signer: Some(signer.to_checksum()),
        json: true,
        ..base_args()
    };
    match finder::run(&args).unwrap() {
        SearchOutcome::Found(w) => {
            assert_eq!(w.phase, Phase::Nested { depth: 2 });
            assert_eq!(w.path, vec![a, b]);
            assert_eq!(w.digest, format!("digest:{}", digest_hex(2)));
        }
        other => panic!("expected nested match, got {:?}", other),
    }
}

#[test]
fn test_finder_exhaustion_is_ok() {
    let args = FinderArgs {
        target_subdigest: Some(digest_hex(0xee)),
        ..base_args()
    };
    // 2*2*2 direct + 2 chains * 2! * 2 digests * 2 depths
    assert_eq!(finder::run(&args).unwrap(), SearchOutcome::Exhausted { attempts: 24 });
}

#[test]
fn test_finder_configuration_errors() {
    let neither = base_args();
    let err = finder::run(&neither).unwrap_err();
    assert_eq!(kernel_error(&err), Some(&KernelError::MissingTarget));

    let both = FinderArgs {
        target_subdigest: Some(digest_hex(1)),
        signature: Some("0x00".to_string()),
        expected_signer: Some(ADDR_A.to_string()),
        ..base_args()
    };
    let err = finder::run(&both).unwrap_err();
    assert_eq!(kernel_error(&err), Some(&KernelError::ConflictingTarget));
    assert_eq!(err.to_string(), finder::TARGET_USAGE);

    let half = FinderArgs {
        expected_signer: Some(ADDR_A.to_string()),
        ..base_args()
    };
    let err = finder::run(&half).unwrap_err();
    assert_eq!(
        kernel_error(&err),
        Some(&KernelError::IncompleteRecoveryTarget("signature"))
    );
    assert_eq!(err.to_string(), finder::TARGET_USAGE);
}

#[test]
fn test_finder_malformed_input() {
    let args = FinderArgs {
        digests: "0x1234".to_string(),
        target_subdigest: Some(digest_hex(1)),
        ..base_args()
    };
    let err = finder::run(&args).unwrap_err();
    assert!(matches!(
        kernel_error(&err),
        Some(KernelError::InvalidLength { what: "digest", .. })
    ));

    let args = FinderArgs {
        target_subdigest: Some("0x1234".to_string()),
        ..base_args()
    };
    assert!(matches!(
        kernel_error(&finder::run(&args).unwrap_err()),
        Some(KernelError::InvalidLength { what: "digest", expected: 32, found: 2 })
    ));
}

#[test]
fn test_finder_undecodable_signature_exhausts() {
    // Not hex at all: the search still runs and nothing recovers.
    let args = FinderArgs {
        signature: Some("not hex".to_string()),
        expected_signer: Some(ADDR_A.to_string()),
        ..base_args()
    };
    let (space, target) = finder::prepare(&args).unwrap();
    assert!(target.is_recovery());

    let mut recovered = Vec::new();
    let outcome = search_with(&space, &target, |a| recovered.push(a.recovered));
    assert_eq!(outcome, SearchOutcome::Exhausted { attempts: 24 });
    assert!(recovered.iter().all(Option::is_none));

    assert_eq!(finder::run(&args).unwrap(), SearchOutcome::Exhausted { attempts: 24 });
}

#[test]
fn test_finder_bad_signature_exhausts() {
    let args = FinderArgs {
        signature: Some("0xdeadbeef".to_string()),
        expected_signer: Some(ADDR_A.to_string()),
        ..base_args()
    };
    assert_eq!(finder::run(&args).unwrap(), SearchOutcome::Exhausted { attempts: 24 });
}

#[test]
fn test_report_formatting() {
    let args = FinderArgs {
        target_subdigest: Some(digest_hex(0xee)),
        ..base_args()
    };
    let (space, target) = finder::prepare(&args).unwrap();

    let mut blocks = Vec::new();
    let outcome = search_with(&space, &target, |a| blocks.push(format_attempt(a, false)));

    assert!(blocks[0].starts_with("\nAttempt 1 (direct):"));
    assert!(blocks[0].contains("  Digest:   digest:"));
    assert!(blocks[0].ends_with("❌ No"));

    let nested = &blocks[8];
    assert!(nested.starts_with("\nAttempt 9 (nested, depth 1):"));
    assert!(nested.contains(&format!("  Path:     {}", ADDR_A)));
    assert!(blocks[9].contains(&format!("  Path:     {} -> {}", ADDR_A, ADDR_B)));
    assert!(!nested.contains("Recovered"));

    let joined: Vec<String> = blocks[0].split('\n').map(str::to_string).collect();
    assert_eq!(joined.len(), 7);
    assert_eq!(joined[1], "Attempt 1 (direct):");

    let table = outcome_table(&outcome).to_string();
    assert!(table.contains("EXHAUSTED"));
    assert!(table.contains("24"));
}

#[test]
fn test_report_recovery_lines() {
    let args = FinderArgs {
        signature: Some("0xdeadbeef".to_string()),
        expected_signer: Some(ADDR_A.to_string()),
        ..base_args()
    };
    let (space, target) = finder::prepare(&args).unwrap();

    let mut blocks = Vec::new();
    search_with(&space, &target, |a| blocks.push(format_attempt(a, true)));

    assert!(blocks[0].contains("\n  Recovered: invalid signature\n  Match:    ❌ No"));
    // Nested blocks end with the path line.
    let last = blocks.last().unwrap();
    assert!(last.ends_with(&format!("  Path:     {} -> {}", ADDR_B, ADDR_A)));
}
