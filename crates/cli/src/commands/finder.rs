use anyhow::Context;
use clap::Args;
use subdigest_kernel::types::decode_hex;
use subdigest_kernel::{search_with, Address, CandidateSpace, Digest32, SearchOutcome, SearchTarget};

use crate::report::{describe_target, format_attempt, outcome_table};

pub const TARGET_USAGE: &str =
    "Pass either --target-subdigest, or --signature together with --expected-signer";

#[derive(Args, Debug, Clone, Default)]
pub struct FinderArgs {
    /// Comma-separated list of chain IDs to try (decimal or 0x-hex)
    #[arg(long)]
    pub chain_ids: String,

    /// Comma-separated list of addresses to try
    #[arg(long)]
    pub addresses: String,

    /// Comma-separated list of 32-byte digests to try
    #[arg(long, default_value = "")]
    pub digests: String,

    /// The known subdigest to match against
    #[arg(long, conflicts_with_all = ["signature", "expected_signer"])]
    pub target_subdigest: Option<String>,

    /// ECDSA signature to recover
    #[arg(long, requires = "expected_signer")]
    pub signature: Option<String>,

    /// Expected signer address to match against signature recovery
    #[arg(long, requires = "signature")]
    pub expected_signer: Option<String>,

    /// Only print the final report
    #[arg(long, short)]
    pub quiet: bool,

    /// Print the outcome as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Validates everything the search needs. Nothing is attempted if this fails.
pub fn prepare(args: &FinderArgs) -> anyhow::Result<(CandidateSpace, SearchTarget)> {
    let subdigest = args
        .target_subdigest
        .as_deref()
        .map(str::parse::<Digest32>)
        .transpose()
        .context("Failed to parse --target-subdigest")?;
    // Undecodable signatures still run: every recovery fails and the search exhausts.
    let signature = args.signature.as_deref().map(|s| {
        decode_hex("signature", s).unwrap_or_else(|e| {
            tracing::warn!("{e}; no attempt can match");
            Vec::new()
        })
    });
    let expected = args
        .expected_signer
        .as_deref()
        .map(str::parse::<Address>)
        .transpose()
        .context("Failed to parse --expected-signer")?;

    let target = match SearchTarget::from_parts(subdigest, signature, expected) {
        Ok(target) => target,
        Err(e) if e.is_configuration() => {
            return Err(anyhow::Error::new(e).context(TARGET_USAGE));
        }
        Err(e) => return Err(e.into()),
    };
    let space = CandidateSpace::parse(&args.chain_ids, &args.addresses, &args.digests)
        .context("Invalid candidate list")?;

    Ok((space, target))
}

pub fn run(args: &FinderArgs) -> anyhow::Result<SearchOutcome> {
    let (space, target) = prepare(args)?;
    let verbose = !args.quiet && !args.json;

    if verbose {
        println!("\nStarting subdigest search...");
        for (name, value) in describe_target(&target) {
            println!("{name}: {value}");
        }
        println!(
            "Testing with {} chainIds and {} addresses ({} attempts at most)",
            space.chain_ids.len(),
            space.addresses.len(),
            space.attempt_budget()
        );
    }
    if space.digests.is_empty() {
        tracing::warn!("No digests given; there is nothing to search");
    }

    let recovery = target.is_recovery();
    let outcome = search_with(&space, &target, |attempt| {
        if verbose {
            println!("{}", format_attempt(attempt, recovery));
        }
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(outcome);
    }

    match &outcome {
        SearchOutcome::Found(_) => println!("\n🎉 Found matching combination!\n"),
        SearchOutcome::Exhausted { .. } => {
            println!("\n❌ No matching combination found after trying all possibilities.\n")
        }
    }
    println!("{}\n", outcome_table(&outcome));

    Ok(outcome)
}
