use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::info;
use resume_pdf::style::{FONT_SIZE_RANGE, SPACING_RANGE};
use resume_pdf::{
    assemble, export_json, export_pdf, FontLibrary, FormattingConfig, ResumeError, ResumeRecord,
};

/// Renders resume JSON files to PDF and normalized JSON.
///
/// PDF rendering needs the Liberation fonts under `assets/fonts`, in the system font
/// directory, or in the directory named by `RESUME_PDF_FONTS_DIR`.
#[derive(Parser)]
#[command(author, version, about = "Render resume data to PDF")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the resume to `<name>.pdf`.
    Render {
        #[command(flatten)]
        input: InputArgs,
        #[command(flatten)]
        formatting: FormattingArgs,
        /// Directory the PDF is written to.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Write the normalized resume data to `<name>.json`.
    #[command(name = "export-json", aliases = ["export_json", "json"])]
    ExportJson {
        #[command(flatten)]
        input: InputArgs,
        /// Directory the JSON file is written to.
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print a plain text outline of the rendered document.
    Outline {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Resume data file (JSON).
    #[arg(short, long)]
    input: PathBuf,
}

#[derive(Args)]
struct FormattingArgs {
    /// Formatting file (JSON with `font`, `fontSize`, `spacing`); flags override it.
    #[arg(long)]
    formatting: Option<PathBuf>,
    /// Font family, e.g. `Helvetica` or `Times-Roman`.
    #[arg(long)]
    font: Option<String>,
    /// Base font size in points.
    #[arg(long, value_parser = clap::value_parser!(u8).range(
        *FONT_SIZE_RANGE.start() as i64..=*FONT_SIZE_RANGE.end() as i64
    ))]
    font_size: Option<u8>,
    /// Line spacing; the line height is spacing / 4.
    #[arg(long, value_parser = clap::value_parser!(u8).range(
        *SPACING_RANGE.start() as i64..=*SPACING_RANGE.end() as i64
    ))]
    spacing: Option<u8>,
}

impl FormattingArgs {
    fn load(&self) -> Result<FormattingConfig, Box<dyn Error>> {
        let mut config = match &self.formatting {
            Some(path) => FormattingConfig::from_json_str(&fs::read_to_string(path)?)?,
            None => FormattingConfig::editor_defaults(),
        };
        if let Some(font) = &self.font {
            config.font = Some(font.clone());
        }
        if self.font_size.is_some() {
            config.font_size = self.font_size;
        }
        if self.spacing.is_some() {
            config.spacing = self.spacing;
        }
        Ok(config)
    }
}

fn load_record(path: &Path) -> Result<ResumeRecord, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    ResumeRecord::from_json_str(&text).map_err(|err| -> Box<dyn Error> {
        if matches!(err, ResumeError::InvalidInput(_)) {
            format!("Invalid JSON uploaded: {} ({})", path.display(), err).into()
        } else {
            err.into()
        }
    })
}

fn run(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Render {
            input,
            formatting,
            out_dir,
        } => {
            let record = load_record(&input.input)?;
            let document = assemble(&record, &formatting.load()?);
            let fonts = FontLibrary::locate()?;
            info!("Preparing PDF...");
            let path = export_pdf(&document, &fonts)?.write_to_dir(&out_dir)?;
            println!("Generated {}", path.display());
        }
        Commands::ExportJson { input, out_dir } => {
            let record = load_record(&input.input)?;
            let path = export_json(&record)?.write_to_dir(&out_dir)?;
            println!("Generated {}", path.display());
        }
        Commands::Outline { input } => {
            let record = load_record(&input.input)?;
            let document = assemble(&record, &FormattingConfig::editor_defaults());
            print!("{}", document.to_plain_text());
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("resume_pdf=info"))
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli.command) {
        eprintln!("Error: {}", err);
        print_error_sources(err.as_ref());
        std::process::exit(1);
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
