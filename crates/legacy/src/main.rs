use anyhow::{Context, Result};
use mcblock_legacy::{LegacyBlock, audit, decode, encode, registry};
use mcblock_model::Block;
use serde::Serialize;

const USAGE: &str = "\
usage: mcblock [--decode ID[:DATA]]... [--table] [--audit] [--pretty]

  --decode ID[:DATA]  decode a legacy pair (decimal or 0x hex), repeatable
  --table             print every bound type id
  --audit             decode and re-encode all 65536 pairs
  --pretty            pretty-print JSON output

Log level is read from RUST_LOG (default: info).";

#[derive(Serialize)]
struct Decoded {
    input: LegacyBlock,
    block: Block,
    /// `None` when the block has no legacy form.
    reencoded: Option<LegacyBlock>,
}

#[derive(Serialize)]
struct Binding {
    type_id: u8,
    kind: mcblock_model::BlockKind,
    primary: bool,
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let pretty = args.iter().any(|a| a == "--pretty");
    let show_table = args.iter().any(|a| a == "--table");
    let run_audit = args.iter().any(|a| a == "--audit");
    let pairs: Vec<LegacyBlock> = args
        .windows(2)
        .filter(|w| w[0] == "--decode")
        .map(|w| {
            w[1].parse::<LegacyBlock>()
                .with_context(|| format!("bad --decode argument {:?}", w[1]))
        })
        .collect::<Result<_>>()?;

    if pairs.is_empty() && !show_table && !run_audit {
        eprintln!("{USAGE}");
        return Ok(());
    }

    for input in pairs {
        let block = decode(input);
        let reencoded = encode(&block).ok();
        if block.is_unknown() {
            tracing::warn!("Type id {} is not bound, decoded as unknown", input.type_id);
        }
        print_json(
            &Decoded {
                input,
                block,
                reencoded,
            },
            pretty,
        )?;
    }

    if show_table {
        let registry = registry();
        for (type_id, kind) in registry.bindings() {
            print_json(
                &Binding {
                    type_id,
                    kind,
                    primary: registry.id_of(kind) == type_id,
                },
                pretty,
            )?;
        }
        tracing::info!("{} type ids bound", registry.len());
    }

    if run_audit {
        let report = audit::sweep();
        print_json(&report, pretty)?;
        if !report.is_consistent() {
            anyhow::bail!(
                "{} pairs decoded to a kind other than their binding",
                report.kind_mismatches.len()
            );
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let line = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serializing output")?;
    println!("{line}");
    Ok(())
}
