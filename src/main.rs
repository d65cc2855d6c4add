// ABOUTME: Main entry point for the lega-slides program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use lega::deck::SlideBody;
use lega::export::text::row_line;
use lega::{Controller, ExportFormat, Key, Phase, Slide, TerminalHost};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the deck in one format
    Export(ExportArgs),

    /// Export the deck in every supported format
    ExportAll(ExportAllArgs),

    /// Walk through the deck interactively in the terminal
    Present(PresentArgs),
}

#[derive(Args)]
struct ExportArgs {
    /// Output format: pptx, pdf, html or text
    #[arg(short, long)]
    format: String,

    /// Directory to write the artifact into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args)]
struct ExportAllArgs {
    /// Directory to write the artifacts into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Args)]
struct PresentArgs {
    /// Start with the welcome audio enabled
    #[arg(long)]
    audio: bool,
}

fn print_slide(slide: &Slide, index: usize, total: usize) {
    println!();
    println!("--- Slide {}/{}: {} ---", index + 1, total, slide.title);
    match slide.body {
        SlideBody::Cover { subtitle } => println!("{}", subtitle),
        SlideBody::List { entries } => {
            for entry in entries {
                println!("{} {}", entry.icon, entry.label);
            }
        }
        SlideBody::Table { caption, rows } => {
            if !caption.is_empty() {
                println!("{}", caption);
            }
            for row in rows {
                println!("{}", row_line(row));
            }
        }
        SlideBody::Notes { entries } => {
            for note in entries {
                println!("{} {}: {}. {}", note.icon, note.clinic, note.status, note.description);
            }
        }
        SlideBody::Paragraphs { text } => {
            for paragraph in text {
                println!("{}", paragraph);
            }
        }
    }
}

fn run_present(args: &PresentArgs) -> lega::Result<()> {
    let slides = lega::deck();
    let mut controller = Controller::new(TerminalHost, slides.len());
    let config = lega::Config::from_env();

    controller.start(args.audio);
    println!("Legalização e Infraestrutura — apresentação iniciada.");
    controller.intro_finished();

    let mut last_tick = Instant::now();
    print_slide(&slides[controller.state().current], 0, slides.len());

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).map_err(lega::DeckError::FileReadError)? == 0 {
            break;
        }

        // Elapsed time advances by the measured wall-clock delta.
        let now = Instant::now();
        controller.tick(now.duration_since(last_tick));
        last_tick = now;

        let before = controller.state().current;
        let input = line.trim();
        let mut parts = input.split_whitespace();
        match parts.next() {
            None | Some("n") | Some("next") => controller.handle_key(Key::ArrowRight),
            Some("p") | Some("prev") => controller.handle_key(Key::ArrowLeft),
            Some("home") => controller.handle_key(Key::Home),
            Some("end") => controller.handle_key(Key::End),
            Some("f") => controller.handle_key(Key::KeyF),
            Some("a") => controller.toggle_audio(),
            Some("v") => {
                if let Some(v) = parts.next().and_then(|s| s.parse::<f32>().ok()) {
                    controller.set_volume(v);
                }
            }
            Some("g") => {
                if let Some(n) = parts.next().and_then(|s| s.parse::<usize>().ok()) {
                    controller.go_to_slide(n.saturating_sub(1));
                }
            }
            Some("x") => match parts.next() {
                Some(format) => export_one(format, &PathBuf::from("."), &config),
                None => println!("Uso: x <pptx|pdf|html|text>"),
            },
            Some("q") | Some("quit") => break,
            Some(other) => println!("Comando desconhecido: {}", other),
        }

        let state = controller.state();
        if state.phase == Phase::SlideDeck && state.current != before {
            print_slide(&slides[state.current], state.current, slides.len());
        }
    }

    println!(
        "Sessão encerrada após {}s no slide {}.",
        controller.state().elapsed_secs(),
        controller.state().current + 1
    );
    Ok(())
}

// Export failures inside the walkthrough are reported and swallowed; the
// session keeps running.
fn export_one(format: &str, out_dir: &PathBuf, config: &lega::Config) {
    let result = format
        .parse::<ExportFormat>()
        .and_then(|f| lega::export_deck(lega::deck(), f, out_dir, config));
    match result {
        Ok(path) => println!("Exportado: {:?}", path),
        Err(e) => {
            eprintln!("Erro ao exportar. Tente novamente. ({})", e);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = lega::Config::from_env();

    let result = match &cli.command {
        Some(Commands::Export(args)) => {
            println!("Executing export command...");
            let format = args.format.parse::<ExportFormat>()?;
            let path = lega::export_deck(lega::deck(), format, &args.out_dir, &config)?;
            println!("Export written successfully: {:?}", path);
            Ok(())
        }
        Some(Commands::ExportAll(args)) => {
            println!("Executing export-all command...");
            let mut failed = 0;
            for format in ExportFormat::ALL {
                match lega::export_deck(lega::deck(), format, &args.out_dir, &config) {
                    Ok(path) => println!("Export written successfully: {:?}", path),
                    Err(e) => {
                        failed += 1;
                        eprintln!("Erro ao exportar. Tente novamente. ({:?}: {})", format, e);
                    }
                }
            }
            if failed == ExportFormat::ALL.len() {
                Err(lega::DeckError::ExportError(
                    "All export formats failed".to_string(),
                ))
            } else {
                Ok(())
            }
        }
        Some(Commands::Present(args)) => run_present(args),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
