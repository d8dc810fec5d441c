use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use pagesim::common::config::DEFAULT_FRAME_COUNT;
use pagesim::input::{
    collect_elements, load_reference_file, parse_frame_count, parse_length, parse_reference_string,
};
use pagesim::report::{format_comparison, format_outcome};
use pagesim::{PolicyKind, SimulationRequest};

type Prompt = Editor<(), DefaultHistory>;

#[derive(Parser)]
#[command(author, version, about = "pagesim - simulate FIFO, LRU and Optimal page replacement")]
struct Cli {
    /// Reference string, e.g. "ABCBD" or "7 0 1 2" (defaults to ABCBDAFBGBAHAGFA)
    #[arg(short, long, conflicts_with = "file")]
    refs: Option<String>,

    /// Read the reference string from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of page frames
    #[arg(short = 'n', long, default_value_t = DEFAULT_FRAME_COUNT as i64, allow_negative_numbers = true)]
    frames: i64,

    /// Command to execute (defaults to the interactive shell)
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one policy and print its trace
    Run {
        /// Replacement policy
        #[arg(value_enum)]
        policy: PolicyKind,
    },

    /// Run every policy and compare fault counts
    Compare,

    /// Start the interactive menu
    Shell,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let request = build_request(&cli)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Run { policy } => println!("{}", format_outcome(&request.run(policy))),
        Commands::Compare => println!("{}", format_comparison(&request.run_all())),
        Commands::Shell => run_shell(request)?,
    }

    Ok(())
}

fn build_request(cli: &Cli) -> Result<SimulationRequest<String>> {
    let reference_string = match (&cli.refs, &cli.file) {
        (Some(refs), _) => parse_reference_string(refs),
        (None, Some(path)) => load_reference_file(path)
            .with_context(|| format!("Failed to load reference string from {}", path.display()))?,
        (None, None) => SimulationRequest::default().reference_string().to_vec(),
    };

    Ok(SimulationRequest::new(reference_string, cli.frames)?)
}

fn run_shell(mut request: SimulationRequest<String>) -> Result<()> {
    let mut rl = Prompt::new()?;

    loop {
        print_menu();

        let line = match read_line(&mut rl, "Select: ")? {
            Some(line) => line,
            None => break,
        };

        match line.trim().parse::<usize>() {
            Ok(0) => match accept(&mut rl) {
                Ok(Some(new_request)) => request = new_request,
                Ok(None) => println!("Input cancelled, keeping the current reference string."),
                Err(err) => println!("Error: {:#}", err),
            },
            Ok(choice @ 1..=3) => {
                let outcome = request.run(PolicyKind::ALL[choice - 1]);
                println!("\n{}", format_outcome(&outcome));
            }
            Ok(4) => {
                println!("Exiting.");
                break;
            }
            Ok(_) => println!("Invalid choice. Please select a valid option."),
            Err(_) => println!("Invalid choice. Try again."),
        }
    }

    Ok(())
}

fn print_menu() {
    println!("\nSIMULATION OF PAGE REPLACEMENT ALGORITHMS");
    println!("Menu:");
    println!("0. Accept new reference string and frame size");
    println!("1. FIFO");
    println!("2. LRU");
    println!("3. Optimal");
    println!("4. Exit");
}

/// Prompt for a new reference string, element by element, then a frame size.
///
/// Returns `None` if the user hits Ctrl-C or Ctrl-D part way through.
fn accept(rl: &mut Prompt) -> Result<Option<SimulationRequest<String>>> {
    let Some(line) = read_line(rl, "Enter the size of the reference string: ")? else {
        return Ok(None);
    };
    let len = parse_length(&line)?;

    let Some(reference_string) =
        collect_elements(len, |n| read_line(rl, &format!(" Enter element [{}]: ", n)))?
    else {
        return Ok(None);
    };

    let Some(line) = read_line(rl, "\nEnter the page frame size: ")? else {
        return Ok(None);
    };
    let frame_count = parse_frame_count(&line)?;

    Ok(Some(SimulationRequest::with_frames(reference_string, frame_count)))
}

/// Read one line, or `None` on Ctrl-C / Ctrl-D.
fn read_line(rl: &mut Prompt, prompt: &str) -> Result<Option<String>> {
    match rl.readline(prompt) {
        Ok(line) => {
            let _ = rl.add_history_entry(line.as_str());
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(None),
        Err(err) => Err(err).context("Failed to read input"),
    }
}
