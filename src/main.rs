//! # zoomsift CLI
//!
//! Command-line interface for the zoomsift library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use zoomsift::ZoomsiftError;
use zoomsift::cli::Args;
use zoomsift::core::{FilterCriteria, KeywordClassifier, ToneClassifier};
use zoomsift::gate::AccessGate;
use zoomsift::ingest::{IngestConfig, parse_file};
use zoomsift::session::Session;

#[cfg(feature = "remote")]
use zoomsift::core::{RemoteToneClassifier, RemoteToneConfig, SentimentLabel};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ZoomsiftError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();

    // Print header
    println!("🔎 zoomsift v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    if let Some(ref output) = args.output {
        println!("💾 Output:  {}", output);
    }

    // Step 1: the gate comes before anything touches the file
    let gate = AccessGate::from_env();
    let mut session = Session::authenticate(&gate, args.api_key.as_deref().unwrap_or_default())?;
    println!("🔓 Access:  granted");

    // Step 2: build filter criteria
    let mut criteria = FilterCriteria::new();

    if let Some(ref keyword) = args.keyword {
        criteria = criteria.with_keyword(keyword);
        println!("🔍 Keyword: {}", keyword);
    }

    if let Some(ref after) = args.after {
        criteria = criteria.with_date_from(after)?;
        println!("📅 After:   {}", after);
    }

    if let Some(ref before) = args.before {
        criteria = criteria.with_date_to(before)?;
        println!("📅 Before:  {}", before);
    }

    if let Some(ref sender) = args.sender {
        criteria = criteria.with_sender(sender);
        println!("👤 Sender:  {}", sender);
    }

    if let Some(ref receiver) = args.receiver {
        criteria = criteria.with_receiver(receiver);
        println!("👥 To:      {}", receiver);
    }

    if let Some(tone) = args.tone {
        criteria = criteria.with_tone(tone);
        println!("{} Tone:    {}", tone.emoji(), tone);
    }

    println!();

    // Step 3: ingest
    println!("⏳ Reading chat history...");
    let parse_start = Instant::now();
    let log = parse_file(Path::new(&args.input), &IngestConfig::new())?;
    let record_count = log.len();
    println!(
        "   Found {} records ({:.2}s)",
        record_count,
        parse_start.elapsed().as_secs_f64()
    );

    // Step 4: classify tones and take ownership of the log
    let classifier = make_classifier(&args)?;
    let tone_start = Instant::now();
    session.load(log, classifier.as_ref());
    println!(
        "🎭 Classified {} distinct messages ({:.2}s)",
        session.tones().len(),
        tone_start.elapsed().as_secs_f64()
    );

    if args.list_participants {
        print_participants(&session);
        return Ok(());
    }

    // Step 5: filter
    let filtered = if criteria.is_active() {
        println!("🔍 Filtering records...");
        let filter_start = Instant::now();
        let filtered = session.filter(&criteria);
        println!(
            "   {} records after filtering ({:.2}s)",
            filtered.len(),
            filter_start.elapsed().as_secs_f64()
        );
        filtered
    } else {
        session.filter(&criteria)
    };

    // Step 6: export the subset if requested
    if let Some(ref output) = args.output {
        zoomsift::core::write_csv(&session.log().header, &filtered, Path::new(output))?;
        println!("💾 Written to {}", output);
    }

    println!();
    println!("✅ Done!");

    // Summary
    println!();
    println!("📊 Summary:");
    println!("   Records:   {}", record_count);
    if criteria.is_active() {
        println!("   Matching:  {}", filtered.len());
    }
    println!("   Senders:   {}", session.senders().len());
    println!("   Time:      {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Pick the tone backend: the keyword table by default, the remote service
/// when `--remote-tone` is given.
#[cfg(feature = "remote")]
fn make_classifier(args: &Args) -> Result<Box<dyn ToneClassifier>, ZoomsiftError> {
    match args.remote_tone {
        Some(ref url) => {
            println!("🌐 Tone backend: remote ({})", url);
            let remote = RemoteToneClassifier::new(RemoteToneConfig::new(url))?;
            Ok(Box::new(ReportingRemote(remote)))
        }
        None => Ok(Box::new(KeywordClassifier::new())),
    }
}

#[cfg(not(feature = "remote"))]
fn make_classifier(_args: &Args) -> Result<Box<dyn ToneClassifier>, ZoomsiftError> {
    Ok(Box::new(KeywordClassifier::new()))
}

/// Remote backend wrapper that surfaces the fail-open fallback to the user.
#[cfg(feature = "remote")]
struct ReportingRemote(RemoteToneClassifier);

#[cfg(feature = "remote")]
impl ToneClassifier for ReportingRemote {
    fn classify(&self, text: &str) -> SentimentLabel {
        self.0.classify(text)
    }

    fn classify_batch(&self, texts: &[String]) -> Vec<SentimentLabel> {
        match self.0.try_classify_batch(texts) {
            Ok(labels) => labels,
            Err(e) => {
                eprintln!("⚠️  Remote classification failed ({e}); using neutral labels");
                vec![SentimentLabel::Neutral; texts.len()]
            }
        }
    }
}

fn print_participants(session: &Session) {
    println!();
    println!("👤 Senders:");
    for sender in session.senders() {
        println!("   {}", sender);
    }
    println!();
    println!("👥 Receivers:");
    for receiver in session.receivers() {
        println!("   {}", receiver);
    }
}
