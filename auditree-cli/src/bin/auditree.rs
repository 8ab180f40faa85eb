// Command line front end for auditree.
// 3 sub-commands
// - root: root digest of a newline separated element list
// - prove: audit proof of one element, as JSON
// - verify: check a JSON proof without the element list
use std::fs;
use std::process;

use anyhow::{Context, Result};
use auditree_cli::common::{cli, commands, utils};
use clap::Parser;
use log::{info, warn};

fn main() -> Result<()> {
    let args = cli::AuditreeCli::parse();
    utils::init_logging(&args.log_level);

    match &args.command {
        cli::Command::Root { input } => {
            let elements = utils::read_elements(input)?;
            let report = commands::root_report(elements, args.algorithm)?;
            info!("root of {} built with {}", input, args.algorithm);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        cli::Command::Prove { input, element } => {
            let elements = utils::read_elements(input)?;
            let doc = commands::prove(elements, element, args.algorithm)?;
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        cli::Command::Verify { proof, element } => {
            let text = fs::read_to_string(proof).with_context(|| format!("cannot read {}", proof))?;
            let doc: commands::ProofDocument =
                serde_json::from_str(&text).context("malformed proof document")?;
            if commands::verify_document(&doc, element.as_deref())? {
                println!("valid");
            } else {
                warn!("proof does not lead to root {}", doc.root);
                println!("invalid");
                process::exit(1);
            }
        }
    }
    Ok(())
}
