//! Command-line interface definition using clap.

use clap::Parser;

use crate::core::sentiment::SentimentLabel;

/// Search and filter Zoom chat history CSV exports by keyword, date range,
/// participant, and message tone.
#[derive(Parser, Debug, Clone)]
#[command(name = "zoomsift")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    zoomsift chat_history.csv --api-key $ZOOM_FILTER_API_KEY
    zoomsift chat.csv -k KEY --keyword deploy --after 2024-01-01 --before 2024-01-31
    zoomsift chat.csv -k KEY --sender Alice --tone urgent -o urgent.csv
    zoomsift chat.csv -k KEY --list-participants")]
pub struct Args {
    /// Path to the chat history CSV export
    pub input: String,

    /// Access key, checked against the ZOOM_FILTER_API_KEY secret
    #[arg(short = 'k', long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Keyword searched across every field (case-insensitive)
    #[arg(long, value_name = "WORD")]
    pub keyword: Option<String>,

    /// Include messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Include messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Only messages from this sender
    #[arg(long, value_name = "NAME")]
    pub sender: Option<String>,

    /// Only messages to this receiver
    #[arg(long, value_name = "NAME")]
    pub receiver: Option<String>,

    /// Only messages with this tone (positive, negative, neutral,
    /// professional, unprofessional, urgent, friendly)
    #[arg(long, value_name = "TONE")]
    pub tone: Option<SentimentLabel>,

    /// Write the filtered subset to this CSV file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Print distinct senders and receivers instead of filtering
    #[arg(long)]
    pub list_participants: bool,

    /// Classify tones via a remote service instead of the keyword table
    #[cfg(feature = "remote")]
    #[arg(long, value_name = "URL")]
    pub remote_tone: Option<String>,
}
