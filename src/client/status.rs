//! Status-line formatting for client display.

use crate::common::time::timestamp_to_rfc3339;

/// Status-line formatter for client display
pub struct StatusFormatter;

impl StatusFormatter {
    /// Format the presence-count status text.
    ///
    /// This exact string is also cached as the fallback status while a
    /// typing indicator is shown.
    pub fn format_presence(count: u64) -> String {
        format!("online users: {}", count)
    }

    /// Format a status update for terminal display.
    pub fn format_status_line(status: &str) -> String {
        format!("\n-- {} --\n", status)
    }

    /// Format the banner printed once the chamber connection is open.
    pub fn format_join_banner(chamber_name: &str, username: &str, joined_at_millis: i64) -> String {
        format!(
            "\nYou are '{}' in chamber '{}', entered at {}.\n\
             Type to send a typing notice; press Enter to go idle. Ctrl+D exits.\n",
            username,
            chamber_name,
            timestamp_to_rfc3339(joined_at_millis)
        )
    }
}
