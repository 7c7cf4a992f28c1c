//! dnsgen - DNS name permutation generator
//!
//! Reads seed domains from a file or stdin and prints candidate hostnames,
//! one per line, ready to be fed to a resolver.

use anyhow::Context;
use clap::Parser;
use dnsgen::{permutator::RULES, DnsgenError, PermutationGenerator, WordlistSource};
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Read, StdoutLock, Write};
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(
    name = "dnsgen",
    version,
    about = "Generate DNS name permutations for subdomain discovery",
    after_help = "EXAMPLES:\n    dnsgen domains.txt\n    dnsgen -f -w words.txt domains.txt | massdns -r resolvers.txt\n    cat domains.txt | dnsgen - -o candidates.txt --silent"
)]
struct Cli {
    /// Input file with one domain per line, `-` for stdin
    #[arg(value_name = "FILENAME", required_unless_present = "list_rules")]
    filename: Option<String>,

    /// Min length of custom words extracted from domains
    #[arg(
        short = 'l',
        long,
        default_value_t = 6,
        env = "DNSGEN_WORDLEN",
        value_parser = clap::value_parser!(u64).range(1..=100)
    )]
    wordlen: u64,

    /// Path to custom wordlist
    #[arg(short = 'w', long, env = "DNSGEN_WORDLIST")]
    wordlist: Option<PathBuf>,

    /// Fast generation
    #[arg(short = 'f', long)]
    fast: bool,

    /// Increment/decrement steps for numbers found in labels
    #[arg(
        short = 'n',
        long = "num-count",
        default_value_t = 3,
        env = "DNSGEN_NUM_COUNT",
        value_parser = clap::value_parser!(u64).range(1..=100)
    )]
    num_count: u64,

    /// Output file
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Do not echo results to stdout
    #[arg(long, requires = "output")]
    silent: bool,

    /// Emit JSON lines with the producing rule and source domain
    #[arg(long)]
    json: bool,

    /// List permutation rules and exit
    #[arg(long)]
    list_rules: bool,

    /// Verbose logging to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() {
    // Initialize the library
    if let Err(e) = dnsgen::init() {
        eprintln!("Error: failed to initialize: {}", e);
        process::exit(1);
    }

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<DnsgenError>() {
            Some(err) => eprintln!("Error: {}", err.user_message()),
            None => eprintln!("Error: {:#}", e),
        }
        process::exit(1);
    }
}

/// Respect RUST_LOG, default to warnings only
fn init_logging(verbose: bool) {
    let level = if verbose {
        Level::DEBUG
    } else {
        std::env::var("RUST_LOG")
            .ok()
            .and_then(|s| s.parse::<Level>().ok())
            .unwrap_or(Level::WARN)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.list_rules {
        print_rules();
        return Ok(());
    }

    let filename = cli.filename.as_deref().context("missing FILENAME")?;
    let input = read_input(filename)?;
    let domains: Vec<&str> = input.lines().collect();

    let wordlist = cli
        .wordlist
        .clone()
        .map_or(WordlistSource::Bundled, WordlistSource::File);

    let generator = PermutationGenerator::new()
        .with_wordlist(wordlist)
        .with_wordlen(cli.wordlen as usize)
        .with_num_count(cli.num_count as usize)
        .fast(cli.fast);

    tracing::debug!(config = ?generator.config(), "Configuration");

    let mut permutations = generator.generate(&domains)?;
    let mut sink = OutputSink::open(cli)?;
    let mut seen = HashSet::new();

    let written = if cli.json {
        permutations.tagged().try_fold(0usize, |written, p| -> anyhow::Result<usize> {
            if !seen.insert(p.domain.clone()) {
                return Ok(written);
            }
            let line = serde_json::to_string(&p).map_err(DnsgenError::from)?;
            sink.write_line(&line)?;
            Ok(written + 1)
        })
    } else {
        permutations.try_fold(0usize, |written, domain| -> anyhow::Result<usize> {
            if seen.contains(&domain) {
                return Ok(written);
            }
            sink.write_line(&domain)?;
            seen.insert(domain);
            Ok(written + 1)
        })
    };

    let written = match written {
        Err(e) if is_broken_pipe(&e) => return Ok(()),
        other => other?,
    };
    match sink.finish() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
        other => other?,
    }

    tracing::info!(unique = written, "Wrote candidates");
    Ok(())
}

fn read_input(filename: &str) -> dnsgen::Result<String> {
    let mut content = String::new();
    if filename == "-" {
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| DnsgenError::io(e.to_string(), Some("<stdin>".to_string())))?;
    } else {
        content = std::fs::read_to_string(filename)
            .map_err(|e| DnsgenError::io(e.to_string(), Some(filename.to_string())))?;
    }
    Ok(content)
}

fn print_rules() {
    println!("{:<28} {}", "RULE", "MODES");
    for rule in RULES {
        let modes = if rule.fast { "full, fast" } else { "full" };
        println!("{:<28} {}", rule.name, modes);
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
}

/// Stdout and/or output file, with a spinner while writing to a file
struct OutputSink {
    stdout: Option<BufWriter<StdoutLock<'static>>>,
    file: Option<BufWriter<File>>,
    progress: Option<ProgressBar>,
}

impl OutputSink {
    fn open(cli: &Cli) -> dnsgen::Result<Self> {
        let file = match &cli.output {
            Some(path) => Some(BufWriter::new(File::create(path).map_err(|e| {
                DnsgenError::io(e.to_string(), Some(path.display().to_string()))
            })?)),
            None => None,
        };

        let progress = (file.is_some() && io::stderr().is_terminal()).then(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::with_template("{spinner} {pos} candidates written ({elapsed})")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            pb.enable_steady_tick(Duration::from_millis(120));
            pb
        });

        Ok(Self {
            stdout: (!cli.silent).then(|| BufWriter::new(io::stdout().lock())),
            file,
            progress,
        })
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        if let Some(out) = self.stdout.as_mut() {
            writeln!(out, "{}", line)?;
        }
        if let Some(file) = self.file.as_mut() {
            writeln!(file, "{}", line)?;
        }
        if let Some(pb) = &self.progress {
            pb.inc(1);
        }
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        if let Some(out) = self.stdout.as_mut() {
            out.flush()?;
        }
        if let Some(file) = self.file.as_mut() {
            file.flush()?;
        }
        if let Some(pb) = self.progress.take() {
            pb.finish_and_clear();
        }
        Ok(())
    }
}
