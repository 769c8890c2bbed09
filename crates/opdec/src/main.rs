//! `opdec` — generates a C decoder from a table of opcode bit templates.
//!
//! Each line of the input table is `NAME TEMPLATE`, where the template is a
//! fixed-width string of `0`, `1`, and field letters (`000111rdddddrrrr`).
//! The table is checked for duplicate constraints and for opcodes that
//! can't be told apart by their literal bits; only a table that passes both
//! checks produces any output.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use opdec_codegen::Config;
use opdec_common::diagnostics::print_diagnostics;
use opdec_common::files::FileStore;
use opdec_common::panic::install_panic_hook;

#[derive(ValueEnum, Debug, PartialEq, Copy, Clone)]
enum EmitTarget {
    /// The complete C decoder source.
    Decoder,
    /// Empty handler definitions for every opcode.
    Stubs,
    /// A readable dump of the decision tree.
    Tree,
}

#[derive(Parser, Debug)]
#[command(version, about = "Decoder generator for fixed-width opcode tables")]
struct Opts {
    /// The input table file, e.g. avr.opd
    input: String,

    /// The directory to store the generated output
    #[arg(short, long, default_value = "output")]
    output_dir: String,

    /// Comma separated emit targets, e.g. -e decoder,tree
    #[arg(short, long, value_delimiter = ',', default_value = "decoder")]
    emit: Vec<EmitTarget>,

    /// Overwrite contents of the output directory
    #[arg(long)]
    overwrite: bool,

    /// Check the table without generating anything
    #[arg(long)]
    check: bool,

    /// Indentation unit used in generated code
    #[arg(long, default_value = "    ")]
    indent: String,

    /// Prefix for derived handler identifiers
    #[arg(long, default_value = "op_")]
    prefix: String,

    /// Name of the generated decode function
    #[arg(long, default_value = "opcode_decode")]
    decode_fn: String,
}

fn main() -> ExitCode {
    install_panic_hook();
    let opts = Opts::parse();

    let mut files = FileStore::new();
    let (content, id) = match files.load_file(&opts.input) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Failed to load file: `{}`. Error: {err}", opts.input);
            return ExitCode::FAILURE;
        }
    };

    if opts.check {
        let diagnostics = opdec_driver::check(id, &content);
        if diagnostics.is_empty() {
            println!("{}: table is unambiguous", opts.input);
            return ExitCode::SUCCESS;
        }
        print_diagnostics(&diagnostics, &files);
        return ExitCode::FAILURE;
    }

    let config = Config {
        indent: opts.indent.clone(),
        name_prefix: opts.prefix.clone(),
        decode_fn: opts.decode_fn.clone(),
    };
    let compiled = match opdec_driver::compile(id, &content, &config) {
        Ok(compiled) => compiled,
        Err(error) => {
            eprintln!("Unable to generate a decoder for {}.", opts.input);
            print_diagnostics(&error.0, &files);
            return ExitCode::FAILURE;
        }
    };

    match write_output_files(&opts, &compiled) {
        Ok(()) => {
            println!("Generated decoder for {}. Outputs in `{}`", opts.input, opts.output_dir);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!(
                "Failed to write output to directory: `{}`. Error: {err}",
                opts.output_dir
            );
            ExitCode::FAILURE
        }
    }
}

fn write_output_files(opts: &Opts, compiled: &opdec_driver::CompiledDecoder) -> Result<(), String> {
    let output_dir = Path::new(&opts.output_dir);
    if output_dir.is_file() {
        return Err(format!(
            "A file exists at path `{}`, the location of the output directory. Refusing to overwrite.",
            output_dir.display()
        ));
    }

    if !opts.overwrite {
        verify_nonexistent_or_empty(output_dir)?;
    }

    fs::create_dir_all(output_dir).map_err(ioerr_to_string)?;

    if opts.emit.contains(&EmitTarget::Decoder) {
        write_output(&output_dir.join("decoder.c"), &compiled.decoder)?;
    }
    if opts.emit.contains(&EmitTarget::Stubs) {
        write_output(&output_dir.join("stubs.c"), &compiled.stubs)?;
    }
    if opts.emit.contains(&EmitTarget::Tree) {
        write_output(&output_dir.join("decoder.tree"), &compiled.tree)?;
    }

    Ok(())
}

fn write_output(path: &Path, content: &str) -> Result<(), String> {
    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(ioerr_to_string)?;
    file.write_all(content.as_bytes())
        .map_err(ioerr_to_string)?;
    Ok(())
}

fn ioerr_to_string(error: std::io::Error) -> String {
    format!("{error}")
}

fn verify_nonexistent_or_empty(dir: &Path) -> Result<(), String> {
    if !dir.exists() || dir.read_dir().map_err(ioerr_to_string)?.next().is_none() {
        Ok(())
    } else {
        Err(format!(
            "Directory '{}' is not empty. Use --overwrite to overwrite.",
            dir.display()
        ))
    }
}
