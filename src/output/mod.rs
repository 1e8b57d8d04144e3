//! Console output formatting for the harvester binary.

use harvester_core::SessionRecord;

/// Banner shown at the start of every run.
pub const BANNER: &str = "Authenticated Session Harvester";

/// Hint printed under the banner.
pub const BANNER_HINT: &str =
    "Prepare your authenticated request from Burp Suite or Browser DevTools.";

/// Instructions for the paste-until-end-of-input collectors.
pub const PASTE_GUIDANCE: &str =
    "(Paste your data below. Press Enter then Ctrl+D (Linux/Mac) or Ctrl+Z (Win) to finish)";

pub(crate) fn print_banner() {
    println!("{BANNER}");
    println!("{BANNER_HINT}\n");
}

pub(crate) fn print_mode_menu() {
    println!("Select Input Mode:");
    println!("1. Raw HTTP Request (Copy from Burp Repeater)");
    println!("2. cURL Command (Copy as cURL from Chrome/Firefox)");
    println!("3. Manual Entry");
}

/// Prints the captured cookie count and the headers map as pretty JSON.
pub(crate) fn print_session_preview(record: &SessionRecord) -> serde_json::Result<()> {
    println!("Captured Cookies: {}", record.cookies.len());
    println!(
        "Captured Headers: {}",
        serde_json::to_string_pretty(&record.headers)?
    );
    Ok(())
}
