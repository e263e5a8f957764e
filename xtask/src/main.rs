//! Build automation tasks for PepStats Tables
//!
//! - Generating the CLI reference from the clap definitions

use clap::Parser;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for PepStats Tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &str) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    let markdown = clap_markdown::help_markdown::<pepstats_tables::Cli>();

    let content = format!(
        r#"# PepStats Tables CLI Reference

This documentation is auto-generated from the CLI source code. Last updated: {}.

## Overview

`pepstats-tables` runs EMBOSS `pepstats` on a proteome (or reads an existing
pepstats report) and writes two tab-separated tables with 32 properties per
protein: molecular weight, isoelectric point, the Mole% of the 20 standard
residues and the Mole% of 9 physicochemical classes.

## Quick Start

```bash
# Analyze a proteome (requires EMBOSS pepstats on PATH)
pepstats-tables -p Homo_sapiens.GRCh38.pep.all.fa -r Human

# Tabulate a report produced earlier
pepstats-tables --report proteome.pepstats -r Human -o results/

# Re-tabulate a saved flattened stream, dropping a truncated last protein
pepstats-tables --flattened Human.flattened --partial-blocks drop
```

Debug logging is `--verbose` (long form only); `-V` prints the version.

## Run Directory

With `prefix = <input file name>_<run name>`, every run writes into
`<output root>/<prefix>.dir` (created, or emptied if it exists):

| File | Content |
|------|---------|
| `<prefix>.log` | Run log |
| `<prefix>.00_Main_PepStats_Analysis` | Raw pepstats report (not with `--flattened`) |
| `<prefix>.01_PepStats_Table_01` | One row per protein, header first |
| `<prefix>.02_PepStats_Table_02` | One row per property, name first |
| `<prefix>.flattened` | Flattened token stream (`--keep-flattened`, or the `--flattened` input) |

## Commands

{}

## Environment Variables

- `PEPSTATS_BIN` - pepstats executable (default: `pepstats`)
- `PEPSTATS_LOG_LEVEL` - Log level (`trace`, `debug`, `info`, `warn`, `error`)
- `PEPSTATS_LOG_OUTPUT` - Log output (`console`, `file`, `both`)
- `PEPSTATS_LOG_FORMAT` - Log format (`text`, `json`)
- `PEPSTATS_LOG_FILTER` - Additional filter directives
- `TMPDIR` - Parent of the scratch directory with `-z 0`

---

*To update, run `cargo xtask generate-cli-docs`.*
"#,
        chrono::Utc::now().format("%Y-%m-%d"),
        markdown
    );

    let output_path = PathBuf::from(output_dir);
    fs::create_dir_all(&output_path)?;

    let file_path = output_path.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
