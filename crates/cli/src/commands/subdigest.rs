use anyhow::Context;
use subdigest_kernel::{subdigest_of, Address, ChainId, Digest32};

/// Computes and prints a single subdigest.
pub fn run(chain_id: &str, address: &str, digest: &str) -> anyhow::Result<Digest32> {
    let chain_id: ChainId = chain_id.parse().context("Failed to parse --chain-id")?;
    let address: Address = address.parse().context("Failed to parse --address")?;
    let digest: Digest32 = digest.parse().context("Failed to parse --digest")?;

    let subdigest = subdigest_of(chain_id, &address, &digest);
    tracing::debug!(%chain_id, %address, %digest, %subdigest, "computed subdigest");

    println!("{subdigest}");
    Ok(subdigest)
}
