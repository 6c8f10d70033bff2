//! `testexec extract` - show what `create` would submit, without the network.

use anyhow::Result;
use serde_json::json;

use crate::cli::args::{ExtractArgs, OutputFormat};
use crate::exit_codes::SUCCESS;

use super::helpers::reduce_input;

pub fn run(args: ExtractArgs) -> Result<i32> {
    let (path, reduced) = reduce_input(&args.input)?;

    match args.format {
        OutputFormat::Json => {
            let out = json!({
                "source": path.display().to_string(),
                "count": reduced.len(),
                "tests": reduced,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            eprintln!("Reading {}", path.display());
            println!("{} tests:", reduced.len());
            for (ticket, status) in reduced.iter() {
                let status = if status.is_empty() {
                    "(no status)"
                } else {
                    status.as_str()
                };
                println!("  {ticket}\t{status}");
            }
        }
    }
    Ok(SUCCESS)
}
