//! CLI for excerpt-tools - toggle query filters and format excerpt citations.

use std::fmt;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use excerpt_tools::{format_citation, load_settings, toggle_book_filter, Layout};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Toggle book filters in search queries and format excerpt citations
#[derive(Parser)]
#[command(name = "excerpt-tools")]
#[command(version)]
#[command(after_help = "\
Examples:
  excerpt-tools toggle 'errors' niv
  excerpt-tools toggle 'book:esv text' niv
  excerpt-tools cite excerpt.txt --heading 'John 3:16'
  cat excerpt.txt | excerpt-tools cite - --heading 'Gen 1:1' --layout readable")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Toggle a book filter in a search query
    #[command(after_help = "\
Examples:
  excerpt-tools toggle 'errors' niv            # appends book:niv
  excerpt-tools toggle 'book:niv errors' niv   # negates to NOT book:niv
  excerpt-tools toggle 'NOT book:niv x' niv    # re-affirms book:niv

Filter syntax: book:<abbr>, NOT book:<abbr>, optional glued '?' suffix")]
    Toggle {
        /// The current query string
        query: String,

        /// Book abbreviation to toggle (lowercased before use)
        abbr: String,
    },

    /// Format a selected excerpt as a citation
    #[command(after_help = "\
Examples:
  excerpt-tools cite excerpt.txt --heading 'John 3:16'
  excerpt-tools cite - --heading 'Gen 1:1' --layout readable
  excerpt-tools cite excerpt.txt --heading 'Ps 23' --settings page.json -o out.txt")]
    Cite {
        /// Input file with the selected text (use '-' for stdin)
        input: PathBuf,

        /// Heading to append after the em-dash
        #[arg(long)]
        heading: String,

        /// Citation layout (overrides the settings file)
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,

        /// Page settings file (JSON)
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Layout names accepted on the command line.
#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Readable,
    Condensed,
}

impl From<LayoutArg> for Layout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Readable => Layout::Readable,
            LayoutArg::Condensed => Layout::Condensed,
        }
    }
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — input file not found / unreadable
    InputFile(String),
    /// Exit 11 — settings file not found / invalid
    Settings(String),
    /// Exit 12 — cannot write output file
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::Settings(_) => 11,
            AppError::OutputFile(_) => 12,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::Settings(msg) => {
                write!(
                    f,
                    "{}\n  hint: the file must be a JSON object with the page settings fields",
                    msg
                )
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the output directory exists and is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Toggle { query, abbr } => {
            toggle_command(&query, &abbr);
        }
        Commands::Cite {
            input,
            heading,
            layout,
            settings,
            output,
        } => {
            cite_command(
                &input,
                &heading,
                layout,
                settings.as_deref(),
                output.as_deref(),
            )?;
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Toggle a book filter and print the rewritten query.
fn toggle_command(query: &str, abbr: &str) {
    println!("{}", toggle_book_filter(query, abbr));
}

/// Format an excerpt selection as a citation.
fn cite_command(
    input: &Path,
    heading: &str,
    layout: Option<LayoutArg>,
    settings: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), AppError> {
    // 1. Read the selected text (support '-' for stdin)
    let selection = if input == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::InputFile(format!("failed to read from stdin: {}", e)))?;
        buf
    } else {
        fs::read_to_string(input)
            .map_err(|e| AppError::InputFile(format!("'{}': {}", input.display(), e)))?
    };

    // 2. Resolve the layout: flag beats settings file, default condensed
    let layout = match (layout, settings) {
        (Some(arg), _) => arg.into(),
        (None, Some(path)) => load_settings(path)
            .map_err(|e| AppError::Settings(format!("'{}': {}", path.display(), e)))?
            .layout(),
        (None, None) => Layout::Condensed,
    };

    // 3. Format
    let result = format_citation(&selection, heading, layout);

    // 4. Write to file or stdout
    if let Some(output_path) = output {
        fs::write(output_path, &result)
            .map_err(|e| AppError::OutputFile(format!("'{}': {}", output_path.display(), e)))?;
        eprintln!("wrote {}", output_path.display());
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", result)
            .map_err(|e| AppError::OutputFile(format!("stdout: {}", e)))?;
    }

    Ok(())
}
