use cardpress::{layout, metadata, output, render, scan};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardpress")]
#[command(about = "Typesets print-and-play card sheets into a LaTeX document")]
#[command(long_about = "\
Typesets print-and-play card sheets into a LaTeX document

Your filesystem is the data source. Front images anywhere under the source
tree are discovered by name, ordered by their embedded identifier, replicated
per the item metadata, and laid out on a 4-wide grid with mirrored backs for
two-sided printing.

Source structure:

  ./
  ├── items.json                 # Item metadata: number → copy count
  ├── items/
  │   ├── gh-001a.png            # Deck marker (3 digits + 'a'): printed once
  │   ├── gh-001a-back.png       # Back image: derived, never discovered
  │   ├── gh-014b.png            # Qualifier '014b' drives print order
  │   └── gh-014b-back.png
  └── solo/
      ├── gh-153.png             # Subdirectories are walked recursively
      └── gh-153-back.png

Naming rules:
  Front image:  any .png without 'back' in the filename
  Identifier:   gh- + three digits + optional 'a' or 'b'
  Back image:   <front stem>-back.png, expected next to the front

Run 'cardpress build' to produce main.tex and hand it to pdflatex.")]
#[command(version)]
struct Cli {
    /// Source directory to scan for card images
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Item metadata file
    #[arg(long, default_value = "items.json", global = true)]
    metadata: PathBuf,

    /// Generated LaTeX document
    #[arg(long, default_value = "main.tex", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover and list card fronts without writing anything
    Scan,
    /// Run the full pipeline: scan → layout → render → pdflatex
    Build {
        /// Write the .tex file but skip the pdflatex invocation
        #[arg(long)]
        no_typeset: bool,
    },
    /// Validate that every discovered front parses
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let items = metadata::ItemIndex::load(&cli.metadata)?;

    match cli.command {
        Command::Scan => {
            let cards = scan::scan(&cli.source, &items)?;
            output::print_scan_output(&cards);
        }
        Command::Build { no_typeset } => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let cards = scan::scan(&cli.source, &items)?;
            output::print_scan_output(&cards);

            println!("==> Stage 2: Laying out the sheet");
            let rows = layout::build_rows(cards, &items)?;
            output::print_layout_output(&rows);

            println!("==> Stage 3: Rendering {}", cli.output.display());
            let document = render::render_document(&rows);
            std::fs::write(&cli.output, document)?;

            if no_typeset {
                println!("==> Wrote {} (typesetting skipped)", cli.output.display());
            } else {
                println!("==> Typesetting via pdflatex");
                // Fire and forget: the .tex file is the deliverable, the PDF
                // is a convenience. pdflatex's own output tells the rest.
                let _ = std::process::Command::new("pdflatex")
                    .arg(&cli.output)
                    .status();
            }
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let cards = scan::scan(&cli.source, &items)?;
            output::print_scan_output(&cards);
            println!("==> All {} fronts parse", cards.len());
        }
    }

    Ok(())
}
