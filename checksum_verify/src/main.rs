use anyhow::{anyhow, bail, Context, Result};
use checksum_core::{
    hash_file, hash_reader, verify_file, verify_reader, AlgorithmId, Digest, Verification,
};
use clap::{ArgAction, Parser};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::thread;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// files to hash, `-` means stdin
    ///
    /// the program will read from stdin if no files are given
    files: Vec<PathBuf>,

    /// hash algorithm to use, e.g. md5, sha1, sha512/256, sha3-256, shake128
    #[arg(short, long, env = "CHECKSUM_ALGORITHM", default_value = "sha256")]
    algorithm: AlgorithmId,

    /// checksum the input is expected to have, in hex
    ///
    /// only valid with a single input, exits non-zero on a mismatch
    #[arg(short, long)]
    expected: Option<String>,

    /// output length in bytes, shake128 and shake256 only
    #[arg(short, long)]
    length: Option<usize>,

    /// log more, -v for debug and -vv for trace
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// print the supported algorithms and exit
    #[arg(long, default_value_t = false)]
    list: bool,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn list_algorithms(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{:<12} {:<18} {:>6} {:>8}", "name", "engine", "block", "digest")?;
    for id in AlgorithmId::ALL {
        let info = id.info();
        let digest = match info.digest_size {
            Some(size) => size.to_string(),
            None => format!("{}+", info.default_output),
        };
        writeln!(
            out,
            "{:<12} {:<18} {:>6} {:>8}",
            id.name(),
            info.engine.to_string(),
            info.block_size,
            digest
        )?;
    }
    Ok(())
}

fn hash_input(algorithm: AlgorithmId, path: &Path, length: Option<usize>) -> Result<Digest> {
    if path == Path::new("-") {
        let stdin = io::stdin().lock();
        hash_reader(algorithm, stdin, length, "stdin").context("Hashing standard input.")
    } else {
        hash_file(algorithm, path, length).with_context(|| format!("Hashing {path:?}."))
    }
}

/// Hash `path` and compare it with `expected`. SHAKE output is as long as
/// the expected checksum.
fn verify_input(algorithm: AlgorithmId, path: &Path, expected: &str) -> Result<Verification> {
    if path == Path::new("-") {
        let stdin = io::stdin().lock();
        verify_reader(algorithm, stdin, expected, "stdin").context("Verifying standard input.")
    } else {
        verify_file(algorithm, path, expected).with_context(|| format!("Verifying {path:?}."))
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.list {
        list_algorithms(&mut out)?;
        return Ok(ExitCode::SUCCESS);
    }

    let inputs = if args.files.is_empty() {
        vec![PathBuf::from("-")]
    } else {
        args.files
    };

    let algorithm = args.algorithm;
    let length = args.length;

    if let Some(expected) = &args.expected {
        let [path] = inputs.as_slice() else {
            bail!("--expected can only be used with a single input, got {}", inputs.len());
        };
        if length.is_some() {
            bail!("--length cannot be combined with --expected, the checksum sets the length");
        }
        debug!(%algorithm, "verifying");
        return match verify_input(algorithm, path, expected)? {
            Verification::Match { .. } => {
                writeln!(out, "{}: OK", path.display())?;
                Ok(ExitCode::SUCCESS)
            }
            Verification::Mismatch { expected, actual } => {
                writeln!(out, "{}: FAILED", path.display())?;
                eprintln!("expected {expected}\nactual   {actual}");
                Ok(ExitCode::FAILURE)
            }
        };
    }

    debug!(%algorithm, inputs = inputs.len(), "starting");

    // one hasher per input, each on its own thread
    let results: Vec<Result<Digest>> = thread::scope(|s| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|path| s.spawn(move || hash_input(algorithm, path, length)))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|_| Err(anyhow!("Hashing thread panicked.")))
            })
            .collect()
    });

    let mut status = ExitCode::SUCCESS;
    for (path, result) in inputs.iter().zip(results) {
        let digest = match result {
            Ok(digest) => digest,
            Err(e) => {
                eprintln!("{}: {e:#}", path.display());
                status = ExitCode::FAILURE;
                continue;
            }
        };

        writeln!(out, "{digest}  {}", path.display())?;
    }

    Ok(status)
}
