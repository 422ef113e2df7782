//! Parse command implementation.

use crate::cli::ParseArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use draftwatch_domain::traits::IssueStore;
use draftwatch_domain::{IssueRecord, UploadMetadata};
use draftwatch_extractor::{CategoryCounters, Clock, IssueExtractor, ParseResult};
use draftwatch_store::SqliteStore;
use std::fs;
use std::io::{self, Read};
use tracing::info;

/// Execute the parse command.
pub fn execute_parse(
    args: ParseArgs,
    store: &mut SqliteStore,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    // Read the email from file or stdin
    let content = if args.stdin {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        buffer
    } else if let Some(file_path) = &args.file {
        fs::read(file_path)?
    } else {
        return Err(CliError::InvalidInput(
            "Must specify either --file or --stdin".to_string(),
        ));
    };

    let extractor = IssueExtractor::new(config.extractor.clone());
    let result = extract(&extractor, &content, args.job.as_deref(), store)?;

    for warning in &result.errors {
        eprintln!("{}", formatter.warning(warning));
    }
    println!("{}", formatter.format_parse_result(&result)?);

    if !args.confirm {
        if !result.issues.is_empty() {
            eprintln!("{}", formatter.info("Preview only; re-run with --confirm to store these issues"));
        }
        return Ok(());
    }

    let metadata = upload_metadata(&args, config);
    let stored = confirm(result, &metadata, store)?;
    eprintln!("{}", formatter.bulk_result("Stored", stored.len()));

    Ok(())
}

/// Run the extractor with counters seeded from every stored display ID.
pub(crate) fn extract<C: Clock>(
    extractor: &IssueExtractor<C>,
    content: &[u8],
    job_number_hint: Option<&str>,
    store: &SqliteStore,
) -> Result<ParseResult> {
    let mut counters = CategoryCounters::seeded(store.known_display_ids()?);
    Ok(extractor.parse_bytes(content, job_number_hint, &mut counters))
}

/// Store the drafts of a parse, refusing an empty batch or a missing job number.
pub(crate) fn confirm(
    result: ParseResult,
    metadata: &UploadMetadata,
    store: &mut SqliteStore,
) -> Result<Vec<IssueRecord>> {
    if result.issues.is_empty() {
        return Err(CliError::InvalidInput("No issues to store".to_string()));
    }
    if result.needs_job_number() {
        return Err(CliError::InvalidInput(
            "No job number detected; pass one with --job".to_string(),
        ));
    }

    let stored = store.create_batch(result.issues, metadata)?;
    info!(
        "Stored {} issues for job '{}' uploaded by '{}'",
        stored.len(),
        result.job_number,
        metadata.uploaded_by
    );
    Ok(stored)
}

fn upload_metadata(args: &ParseArgs, config: &Config) -> UploadMetadata {
    let pick = |flag: &Option<String>, fallback: &str| match flag.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => fallback.to_string(),
    };

    let mut metadata = UploadMetadata {
        squad: pick(&args.squad, &config.defaults.squad),
        uploaded_by: pick(&args.uploaded_by, &config.defaults.uploaded_by),
    };
    if metadata.uploaded_by.is_empty() {
        metadata.uploaded_by = UploadMetadata::default().uploaded_by;
    }
    metadata
}
