use std::{fs, path::PathBuf, process, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use skconf::{ast::printer::print_tree, display_error, generator::generator::new_generator, parser::parser::parse};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compiles skill configuration scripts to Lua")]
struct Cli {
    /// Script to compile
    input: PathBuf,

    /// Directory receiving the generated files
    output_dir: PathBuf,

    /// Target language
    #[clap(long, default_value = "lua")]
    lang: String,

    /// Log timings and progress
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut generator = new_generator(&cli.lang)?;

    let start = Instant::now();
    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let file_name = cli.input.display().to_string();

    let program = match parse(source.clone(), Some(file_name)) {
        Ok(program) => program,
        Err(errors) => {
            eprintln!("Parser errors:");
            for error in &errors {
                eprintln!("\t{}", error);
            }
            if let Some(first) = errors.first() {
                eprintln!();
                eprintln!("{}", display_error(first, &source));
            }
            process::exit(1);
        }
    };
    info!("Parsed in {:?}", start.elapsed());

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("failed to create {}", cli.output_dir.display()))?;

    let tree_path = cli.output_dir.join("ast_tree.dot");
    if let Err(error) = fs::write(&tree_path, print_tree(&program)) {
        warn!("could not write {}: {}", tree_path.display(), error);
    }

    let generate_start = Instant::now();
    let output = generator.generate(&program);
    info!("Generated {} in {:?}", cli.lang, generate_start.elapsed());

    let stem = cli
        .input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("out"));
    let output_path = cli
        .output_dir
        .join(format!("{}.{}", stem, generator.extension()));
    fs::write(&output_path, output)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    info!("Wrote {} in {:?}", output_path.display(), start.elapsed());
    Ok(())
}
