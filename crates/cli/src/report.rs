use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use subdigest_kernel::{Address, Attempt, Phase, SearchOutcome, SearchTarget};

fn join_path(path: &[Address]) -> String {
    path.iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// One progress block per attempt.
pub fn format_attempt(attempt: &Attempt<'_>, recovery: bool) -> String {
    let mut lines = Vec::with_capacity(8);

    lines.push(match attempt.phase {
        Phase::Direct => format!("\nAttempt {} (direct):", attempt.number),
        Phase::Nested { depth } => format!("\nAttempt {} (nested, depth {}):", attempt.number, depth),
    });
    lines.push(format!("  Chain ID: {}", attempt.chain_id));
    lines.push(format!("  Address:  {}", attempt.address));
    lines.push(match attempt.phase {
        Phase::Direct => format!("  Digest:   {}", attempt.provenance),
        Phase::Nested { .. } => format!("  Using:    {} ({})", attempt.provenance, attempt.input),
    });
    lines.push(format!("  Result:   {}", attempt.subdigest));
    if recovery {
        let recovered = attempt
            .recovered
            .map(|a| a.to_checksum())
            .unwrap_or_else(|| "invalid signature".to_string());
        lines.push(format!("  Recovered: {}", recovered));
    }
    lines.push(format!("  Match:    {}", if attempt.matched { "✅ YES!" } else { "❌ No" }));
    if let Phase::Nested { .. } = attempt.phase {
        lines.push(format!("  Path:     {}", join_path(attempt.path)));
    }
    lines.join("\n")
}

/// Describes the target in the search header.
pub fn describe_target(target: &SearchTarget) -> Vec<(String, String)> {
    match target {
        SearchTarget::Subdigest(d) => vec![("Target subdigest".into(), d.to_string())],
        SearchTarget::Signer { signature, expected } => vec![
            ("Target signature".into(), format!("0x{}", hex::encode(signature))),
            ("Expected signer".into(), expected.to_string()),
        ],
    }
}

/// Final report table.
pub fn outcome_table(outcome: &SearchOutcome) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Field", "Value"]);

    match outcome {
        SearchOutcome::Found(w) => {
            let phase = match w.phase {
                Phase::Direct => "direct".to_string(),
                Phase::Nested { depth } => format!("nested (depth {depth})"),
            };
            table.add_row(vec!["Result".to_string(), "FOUND".to_string()]);
            table.add_row(vec!["Phase".to_string(), phase]);
            table.add_row(vec!["Chain ID".to_string(), w.chain_id.to_string()]);
            let label = if w.path.len() == 1 { "Address" } else { "Address Path" };
            table.add_row(vec![label.to_string(), join_path(&w.path)]);
            table.add_row(vec!["Initial Digest".to_string(), w.digest.clone()]);
            table.add_row(vec!["Subdigest".to_string(), w.subdigest.to_string()]);
            table.add_row(vec!["Attempts".to_string(), w.attempts.to_string()]);
        }
        SearchOutcome::Exhausted { attempts } => {
            table.add_row(vec!["Result".to_string(), "EXHAUSTED".to_string()]);
            table.add_row(vec!["Attempts".to_string(), attempts.to_string()]);
        }
    }
    table
}
