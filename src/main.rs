use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use transpiler::{
    analyze, display_error, errors::errors::Error, generator::generator::Generator, parse, scan,
    Scope,
};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Emit {
    /// One token per line
    Tokens,
    /// The untyped syntax tree
    Ast,
    /// Java source
    Java,
}

/// Translates a program into a Java class.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to read; `-` or nothing reads standard input
    input: Option<PathBuf>,

    /// Where to write the result (defaults to standard output)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Name of the generated wrapper class
    #[arg(long, value_name = "NAME", default_value = "Main")]
    class_name: String,

    /// Stop after the given stage and print its result
    #[arg(long, value_enum, default_value_t = Emit::Java)]
    emit: Emit,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let (source, file_name) = read_input(cli.input.as_ref())?;

    match run(&cli, &source) {
        Ok(output) => {
            write_output(cli.output.as_ref(), &output)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprint!("{}", display_error(&error, &source, &file_name));
            Ok(ExitCode::FAILURE)
        }
    }
}

fn run(cli: &Cli, source: &str) -> Result<String, Error> {
    let start = Instant::now();

    let tokens = scan(source)?;
    info!("Tokenized in {:?}", start.elapsed());

    if cli.emit == Emit::Tokens {
        let mut output = String::new();
        for token in &tokens {
            output.push_str(&format!("{}\n", token));
        }
        return Ok(output);
    }

    let parse_start = Instant::now();
    let ast = parse(tokens)?;
    info!("Parsed in {:?}", parse_start.elapsed());

    if cli.emit == Emit::Ast {
        return Ok(format!("{:#?}\n", ast));
    }

    let analyze_start = Instant::now();
    let typed = analyze(&ast, Scope::new())?;
    info!("Analyzed in {:?}", analyze_start.elapsed());

    let generate_start = Instant::now();
    let java = Generator::with_class_name(&cli.class_name).generate(&typed);
    info!("Generated in {:?}", generate_start.elapsed());
    info!("Total time: {:?}", start.elapsed());

    Ok(java)
}

fn read_input(input: Option<&PathBuf>) -> Result<(String, String)> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            let source = fs::read_to_string(path)
                .with_context(|| format!("failed to read input file {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok((source, file_name))
        }
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read standard input")?;
            Ok((buffer, String::from("<stdin>")))
        }
    }
}

fn write_output(output: Option<&PathBuf>, text: &str) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
