//! lisc compiler CLI

use clap::Parser as ClapParser;
use std::fs;
use std::path::PathBuf;
use std::process;

use lisc::diagnostics::Diagnostics;
use lisc::{codegen, printer, Lexer, Parser, VERSION};

#[derive(ClapParser, Debug)]
#[command(name = "lisc")]
#[command(version = VERSION)]
#[command(about = "Compiles Lisp-style call expressions to C-style calls", long_about = None)]
struct Args {
    /// Source file to compile
    input: PathBuf,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Dump the token stream after lexing
    #[arg(long)]
    emit_tokens: bool,

    /// Dump the AST after parsing
    #[arg(long)]
    emit_ast: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    if !run(&args) {
        process::exit(1);
    }
}

fn run(args: &Args) -> bool {
    let source = match fs::read_to_string(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to read {}: {}", args.input.display(), e);
            return false;
        }
    };

    if args.verbose {
        println!(
            "compiling {} ({} bytes, {} lines)",
            args.input.display(),
            source.len(),
            source.lines().count()
        );
    }

    let filename = args.input.display().to_string();
    let diagnostics = Diagnostics::new(&source, &filename);

    let tokens = match Lexer::new(&source).tokenize() {
        Ok(tokens) => tokens,
        Err(err) => {
            eprint!("{}", diagnostics.format_error(&err));
            return false;
        }
    };

    if args.emit_tokens {
        print!("{}", printer::render_tokens(&tokens));
    }

    let program = match Parser::new(&tokens).parse() {
        Ok(program) => program,
        Err(err) => {
            eprint!("{}", diagnostics.format_error(&err));
            return false;
        }
    };

    if args.emit_ast {
        print!("{}", printer::render_program(&program));
    }

    let code = codegen::c::generate(&program);
    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &code) {
                eprintln!("failed to write {}: {}", path.display(), e);
                return false;
            }
            if args.verbose {
                println!("wrote {}", path.display());
            }
        }
        None => print!("{}", code),
    }

    true
}
