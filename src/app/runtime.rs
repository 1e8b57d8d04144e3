//! Interactive run orchestration: menu, adapter dispatch, preview, save.

use std::io;
use std::path::Path;

use anyhow::{Result, bail};
use tracing::{error, info, warn};

use harvester_core::{
    SessionRecord, Source, collect_manual, normalize_session_filename, parse_curl, parse_raw_http,
    write_session_file,
};

use crate::app::prompts;
use crate::output;

pub(crate) fn run_harvester() -> Result<()> {
    output::print_banner();
    output::print_mode_menu();

    let choice = prompts::prompt_line("\nChoice [1-3]: ")?;

    let record = match choice.as_str() {
        "1" => {
            let raw_data = collect_paste()?;
            if raw_data.is_empty() {
                info!("No input provided");
                return Ok(());
            }
            parse_raw_http(&raw_data)
        }
        "2" => {
            let raw_data = collect_paste()?;
            if raw_data.is_empty() {
                info!("No input provided");
                return Ok(());
            }
            match parse_curl(&raw_data) {
                Ok(record) => record,
                Err(error) => {
                    // Tokenize failure aborts the adapter; the run continues
                    // with an empty record
                    error!("Failed to parse cURL command: {error}");
                    SessionRecord::new(Source::Curl)
                }
            }
        }
        "3" => {
            println!("\n--- Manual Entry ---");
            collect_manual(io::stdin().lock(), io::stdout())?
        }
        other => bail!("invalid selection '{other}' (expected 1, 2, or 3)"),
    };

    println!("\n--- Analysis ---");
    if record.has_auth_material() {
        info!(
            cookies = record.cookies.len(),
            headers = record.headers.len(),
            source = %record.meta.source,
            "Authentication material captured"
        );
    } else {
        warn!("No obvious authentication markers (Cookies, Auth Header, CSRF) found");
    }

    output::print_session_preview(&record)?;

    let confirm = prompts::prompt_line("\nSave this session? [Y/n]: ")?;
    if prompts::confirm_save(&confirm) {
        let filename = prompts::prompt_line("Filename (default: session.json): ")?;
        let path = normalize_session_filename(&filename);
        write_session_file(&record, Path::new(&path))?;
        info!(path = %path, "Session saved");
    } else {
        warn!("Discarded");
    }

    Ok(())
}

/// Collects pasted multi-line input (raw HTTP or cURL modes).
fn collect_paste() -> io::Result<String> {
    println!("{}", output::PASTE_GUIDANCE);
    let text = prompts::read_multiline(io::stdin().lock())?;
    Ok(text.trim().to_string())
}
