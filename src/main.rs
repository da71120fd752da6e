// SPDX-License-Identifier: MIT
//
// pforge: five-color palette generator for the terminal.
//
// Wires the crates together:
//
//   pf-color  → Rgb / Hsl, hex parsing and formatting
//   pf-engine → generators, lock merge, adjustment, contrast, exports
//
// Every invocation builds a fresh `Session` from the starting palette
// (`--from`, or the default), runs one subcommand against it and prints the
// result. Nothing is persisted between runs.
//
//   argv → clap → Config → Session / engine call → Renderer → stdout

mod ansi;
mod cli;
mod config;
mod render;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use pf_engine::{
    ContrastReport, GenerationMode, LockMask, Palette, PaletteEngine, RandomSource, Session,
    TRENDING, Xorshift32, accessibility_report, adjust, export, from_share_code,
    palette_from_text, to_share_code,
};

use crate::cli::{Cli, Command, GenerateArgs, PaletteFormat};
use crate::config::Config;
use crate::render::Renderer;

// ─── Commands ───────────────────────────────────────────────────────────────

fn run(cli: Cli, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut out = Renderer::new(stdout.lock(), config.color);

    match cli.command {
        Command::Generate(args) => match args.rng_seed {
            Some(seed) => generate(&args, config, PaletteEngine::new(Xorshift32::new(seed)), &mut out)?,
            None => generate(&args, config, PaletteEngine::with_system_random(), &mut out)?,
        },
        Command::Adjust { color, adjust: sliders } => {
            let adjusted = adjust(color, sliders.vector());
            log::info!("{color} adjusted by {:?} -> {adjusted}", sliders.vector());
            out.color(adjusted)?;
        }
        Command::Inspect { color } => out.inspect(color)?,
        Command::Contrast { a, b } => out.contrast(a, b, &ContrastReport::new(a, b))?,
        Command::Report { code } => {
            let palette = palette_arg(code.as_deref(), config)?;
            out.report(&palette, &accessibility_report(&palette))?;
        }
        Command::Export { code, format } => {
            let palette = palette_arg(code.as_deref(), config)?;
            print_palette(&mut out, &palette, &LockMask::NONE, format)?;
        }
        Command::Import { file } => {
            let text = read_input(&file)?;
            let palette = palette_from_text(&text)
                .with_context(|| format!("no palette in {}", file.display()))?;
            out.palette(&palette, &LockMask::NONE)?;
            out.line(&to_share_code(&palette))?;
        }
        Command::Trending => {
            for (i, (name, palette)) in TRENDING.iter().enumerate() {
                out.preset(i, name, palette)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn generate<R: RandomSource, W: Write>(
    args: &GenerateArgs,
    config: &Config,
    mut engine: PaletteEngine<R>,
    out: &mut Renderer<W>,
) -> Result<()> {
    let mode = GenerationMode::resolve(args.seed, args.harmony.as_deref(), args.mood.as_deref());
    let slots: Vec<usize> = args.lock.iter().map(|&s| usize::from(s) - 1).collect();
    let locks = LockMask::from_slots(&slots)?;

    let mut session = Session::new(config.palette);
    session.set_mode(mode);
    session.set_locks(locks);
    session.set_adjustment(args.adjust.vector());
    log::info!("generating {} palette(s), {mode}, {} locked", args.count, locks.count());

    for _ in 0..args.count {
        let palette = *session.regenerate(&mut engine);
        print_palette(out, &palette, &locks, args.format)?;
    }
    Ok(())
}

fn print_palette<W: Write>(
    out: &mut Renderer<W>,
    palette: &Palette,
    locks: &LockMask,
    format: PaletteFormat,
) -> Result<()> {
    match format {
        PaletteFormat::Swatch => out.palette(palette, locks)?,
        PaletteFormat::Hex => out.hex_lines(palette)?,
        PaletteFormat::Code => out.line(&to_share_code(palette))?,
        PaletteFormat::Css | PaletteFormat::Tailwind | PaletteFormat::Json | PaletteFormat::Scss => {
            if let Some(export_format) = format.export_format() {
                out.line(&export(palette, export_format)?)?;
            }
        }
    }
    Ok(())
}

/// The palette named by a positional share code, or the configured one.
fn palette_arg(code: Option<&str>, config: &Config) -> Result<Palette> {
    code.map_or(Ok(config.palette), |code| {
        from_share_code(code).with_context(|| format!("share code {code:?}"))
    })
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("reading stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let config = Config::from_cli(&cli).unwrap_or_else(|e| {
        eprintln!("pforge: {e:#}");
        process::exit(1);
    });
    config::init_logging(config.log_level);
    log::debug!("{config:?}");

    if let Err(e) = run(cli, &config) {
        eprintln!("pforge: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
