use anyhow::{Context, Result};
use clap::Parser;
use image_to_palette_wasm::naming::descriptive_color_name;
use image_to_palette_wasm::{
    ClockIds, ExportFormat, ExtractOptions, Extraction, analyze_bytes, analyze_colors,
    best_text_color, export_palette, gradient_css, parse_color_list,
};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Extract dominant colors from images and derive scored color palettes.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// One or more input image paths
    #[arg(required_unless_present = "colors")]
    inputs: Vec<PathBuf>,

    /// Comma-separated list of hex colors to build palettes from (skips image decoding)
    #[arg(short = 'c', long)]
    colors: Option<String>,

    /// Export every palette in this format (json, css, tailwind) instead of the summary
    #[arg(short, long)]
    format: Option<ExportFormat>,

    /// Also print CSS rules for the generated gradients
    #[arg(short, long)]
    gradients: bool,

    /// Maximum number of extracted colors
    #[arg(short = 'k', long, default_value_t = 5)]
    max_colors: usize,

    /// Minimum RGB distance between extracted colors
    #[arg(short, long, default_value_t = 50.0)]
    threshold: f64,

    /// Longest side of the working image
    #[arg(short, long, default_value_t = 200)]
    scale: u32,

    /// Write one report per input into this directory instead of stdout
    #[arg(short = 'd', long)]
    out_dir: Option<PathBuf>,
}

fn analyze_file(input: &Path, args: &Args, ids: &mut ClockIds) -> Result<Extraction> {
    let options = ExtractOptions {
        max_colors: args.max_colors,
        dedup_threshold: args.threshold,
        max_side: args.scale,
        ..ExtractOptions::default()
    };

    let bytes = fs::read(input).with_context(|| format!("reading {}", input.display()))?;
    let extraction = analyze_bytes(&bytes, &options, ids).context("palette extraction failed")?;
    info!(
        input = %input.display(),
        colors = extraction.colors.len(),
        "analyzed image"
    );
    Ok(extraction)
}

fn report(label: &str, extraction: &Extraction, args: &Args) -> Result<String> {
    let mut out = String::new();
    match args.format {
        Some(format) => {
            let exports: Vec<String> = extraction
                .palettes
                .iter()
                .map(|palette| export_palette(palette, format))
                .collect();
            // Keep multi-palette JSON output a single valid document.
            if format == ExportFormat::Json {
                writeln!(out, "[\n{}\n]", exports.join(",\n"))?;
            } else {
                writeln!(out, "{}", exports.join("\n\n"))?;
            }
        }
        None => {
            writeln!(out, "{label}")?;
            writeln!(out, "colors:")?;
            for color in &extraction.colors {
                let hsl = color.hsl();
                writeln!(
                    out,
                    "  {}  hsl({}, {}%, {}%)  text {}  {}",
                    color,
                    hsl.h,
                    hsl.s,
                    hsl.l,
                    best_text_color(color),
                    descriptive_color_name(color)
                )?;
            }
            writeln!(out, "palettes:")?;
            for palette in &extraction.palettes {
                let hexes: Vec<String> = palette.colors.iter().map(|c| c.hex()).collect();
                writeln!(
                    out,
                    "  {:<20} {:>3}  {}",
                    palette.name,
                    palette.score,
                    hexes.join(" ")
                )?;
                writeln!(out, "    {}", palette.reason)?;
                for issue in &palette.contrast_issues {
                    writeln!(out, "    ! {issue}")?;
                }
            }
        }
    }

    if args.gradients {
        for gradient in &extraction.gradients {
            writeln!(out, "{}", gradient_css(gradient))?;
        }
    }

    Ok(out)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut ids = ClockIds::new();

    if let Some(list) = &args.colors {
        let colors = parse_color_list(list).context("parsing --colors")?;
        info!(colors = colors.len(), "using colors from the command line");
        let extraction = analyze_colors(colors, &mut ids);
        emit("colors", &report("colors", &extraction, &args)?, &args)?;
    }

    for input in &args.inputs {
        let text = analyze_file(input, &args, &mut ids)
            .and_then(|extraction| report(&input.display().to_string(), &extraction, &args))
            .with_context(|| format!("processing {}", input.display()))?;
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        emit(&stem, &text, &args)?;
    }

    Ok(())
}

fn emit(stem: &str, text: &str, args: &Args) -> Result<()> {
    match &args.out_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let extension = match args.format {
                Some(ExportFormat::Json) => "json",
                Some(ExportFormat::Css) => "css",
                Some(ExportFormat::Tailwind) => "js",
                None => "txt",
            };
            let out_path = dir.join(format!("{stem}.{extension}"));
            fs::write(&out_path, text)?;
            println!("Saved → {}", out_path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
