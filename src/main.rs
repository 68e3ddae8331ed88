use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use question_bank::export::{self, ExportFormat};
use question_bank::validate::validate;
use question_bank::{BankError, Browser, QuestionStore};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "question-bank", version, about = "Read the multiple-choice question bank")]
struct Cli {
    /// Bank to read instead of the built-in one (bank text, or .json)
    #[arg(long, global = true, env = "QUESTION_BANK")]
    bank: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every question with its label and stated answer
    List,

    /// Print one question in bank notation
    Show {
        /// 1-based position in the bank
        position: usize,

        /// Include the stated answer
        #[arg(long)]
        reveal: bool,
    },

    /// Report data-quality issues; exits with 1 on consistency errors
    Check,

    /// Write the bank as JSON
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Records)]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Browse the questions in the terminal
    Browse,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, BankError> {
    let store: Cow<'static, QuestionStore> = match &cli.bank {
        Some(path) => Cow::Owned(QuestionStore::from_path(path)?),
        None => Cow::Borrowed(QuestionStore::builtin()),
    };

    match cli.command {
        Commands::List => list(&store),
        Commands::Show { position, reveal } => show(&store, position, reveal),
        Commands::Check => check(&store),
        Commands::Export {
            format,
            output,
            compact,
        } => export_bank(&store, format, output, compact),
        Commands::Browse => {
            Browser::new(&store).run()?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn list(store: &QuestionStore) -> Result<ExitCode, BankError> {
    if let Some(title) = store.title() {
        println!("{} ({} questions)", title, store.len());
    }

    for (index, record) in store.iter().enumerate() {
        let answer = record
            .correct_choice
            .map(|label| label.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>3}  #{:<3} {} choices  {}  {}",
            index + 1,
            record.id,
            record.choices.len(),
            answer,
            record.preview()
        );
    }

    Ok(ExitCode::SUCCESS)
}

fn show(store: &QuestionStore, position: usize, reveal: bool) -> Result<ExitCode, BankError> {
    let record = store.at_position(position)?;

    if !reveal {
        print!("{}", record.display_without_answer());
    } else if record.is_answered() {
        print!("{}", record);
    } else {
        print!("{}", record);
        println!("(no answer stated)");
    }

    Ok(ExitCode::SUCCESS)
}

fn check(store: &QuestionStore) -> Result<ExitCode, BankError> {
    let report = validate(store);

    println!(
        "{}: {} questions, {} answered, {} unanswered, {} choices",
        store.title().unwrap_or("question bank"),
        report.records,
        report.answered,
        report.unanswered,
        report.choices
    );
    for issue in report.errors() {
        println!("  ERROR: {}", issue);
    }
    for issue in report.warnings() {
        println!("  WARNING: {}", issue);
    }

    if report.is_consistent() {
        println!("No consistency errors.");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{} error(s) found.", report.errors().count());
        Ok(ExitCode::FAILURE)
    }
}

fn export_bank(
    store: &QuestionStore,
    format: ExportFormat,
    output: Option<PathBuf>,
    compact: bool,
) -> Result<ExitCode, BankError> {
    let json = export::to_json(store, format, !compact)?;

    match output {
        Some(path) => {
            fs::write(&path, json + "\n")?;
            eprintln!("Wrote {} questions to {}", store.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(ExitCode::SUCCESS)
}
