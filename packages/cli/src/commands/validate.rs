use super::open_store;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use sigforge_schema::{validate_signature, Signature};
use sigforge_store::SignatureRepository;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// A JSON file holding one signature record (defaults to the whole store)
    pub file: Option<PathBuf>,
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let signatures: Vec<Signature> = match &args.file {
        Some(file) => {
            let content = std::fs::read_to_string(PathBuf::from(cwd).join(file))?;
            vec![serde_json::from_str(&content)?]
        }
        None => open_store(cwd)?.1.list().to_vec(),
    };

    let mut invalid = 0;
    for signature in &signatures {
        match validate_signature(signature) {
            Ok(()) => println!("  {} {}", "✓".green(), signature.name),
            Err(err) => {
                invalid += 1;
                eprintln!("  {} {}", "✗".red(), signature.name);
                for message in err.messages() {
                    eprintln!("      {}", message.red());
                }
            }
        }
    }

    if invalid > 0 {
        return Err(anyhow!(
            "{invalid} of {} signatures failed validation",
            signatures.len()
        ));
    }

    println!();
    println!("{} {} signatures valid", "✅".green(), signatures.len());
    Ok(())
}
