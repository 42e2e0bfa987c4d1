//! Subcommand definitions and execution.

use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anfgen_core::{CostModel, ResolveMap, Sbox, cipher_names, encode_system, translate_claim};
use clap::{Parser, Subcommand, ValueEnum};

/// ANF equation-system generator for S-box circuit-complexity search.
#[derive(Debug, Parser)]
#[command(name = "anfgen", version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Emit the ANF feasibility system for an S-box and cost bound
    Encode(EncodeCmd),
    /// Translate a solver claim back to named variable assignments
    Translate(TranslateCmd),
    /// List the registered cipher S-boxes
    List,
}

impl Cli {
    pub fn execute(self) -> Result<(), CliError> {
        match self.command {
            Command::Encode(cmd) => cmd.execute(),
            Command::Translate(cmd) => cmd.execute(),
            Command::List => {
                for name in cipher_names() {
                    let sbox = Sbox::for_cipher(name)?;
                    println!("{name:<16} {}-bit", sbox.word_bits());
                }
                Ok(())
            },
        }
    }
}

/// Cost mode selection, named as in the solver toolchain.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Multiplicative complexity (count AND gates only)
    Mc,
    /// Bitslice gate complexity (restricted 2-input gate set)
    Bgc,
    /// Gate complexity (universal 2-input gate set)
    Gc,
    /// Circuit depth with a fixed layer width
    Depth,
}

impl Mode {
    fn cost_model(self) -> CostModel {
        match self {
            Self::Mc => CostModel::MultiplicativeComplexity,
            Self::Bgc => CostModel::BitsliceGateCount,
            Self::Gc => CostModel::GateCount,
            Self::Depth => CostModel::Depth,
        }
    }
}

/// Emit the feasibility system to stdout.
#[derive(Debug, Parser)]
struct EncodeCmd {
    /// Cost model to bound
    #[arg(value_enum)]
    mode: Mode,

    /// Name of the cipher whose S-box to encode
    cipher: String,

    /// Value to test for: number of nonlinear gates for mc, circuit depth
    /// for depth, etc.
    #[arg(value_parser = clap::value_parser!(u32).range(1..50))]
    k: u32,

    /// Gates per depth layer; required for (and only meaningful in) depth
    /// mode
    #[arg(value_parser = clap::value_parser!(u32).range(1..50))]
    width: Option<u32>,
}

impl EncodeCmd {
    fn execute(self) -> Result<(), CliError> {
        let width = match (self.mode, self.width) {
            (Mode::Depth, None) => return Err(CliError::MissingWidth),
            (_, width) => width.unwrap_or(1) as usize,
        };
        let sbox = Sbox::for_cipher(&self.cipher)?;
        let lines = encode_system(self.mode.cost_model(), &sbox, self.k as usize, width);
        tracing::debug!(cipher = %self.cipher, lines = lines.len(), "emitting system");

        let mut out = BufWriter::new(io::stdout().lock());
        for line in &lines {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
        Ok(())
    }
}

/// Print the named assignment encoded by a solver claim.
#[derive(Debug, Parser)]
struct TranslateCmd {
    /// Claim file produced by the SAT solver
    claim: PathBuf,

    /// Resolve file mapping DIMACS numbers to variable names; defaults to
    /// `<claim stem>.eqs.cnf.resolve` next to the claim file
    resolve: Option<PathBuf>,
}

impl TranslateCmd {
    fn execute(self) -> Result<(), CliError> {
        let resolve = self.resolve.unwrap_or_else(|| default_resolve_path(&self.claim));
        let map = ResolveMap::parse(&read_file(&resolve)?);
        tracing::debug!(mapped = map.len(), "parsed resolve file");
        let claim = read_file(&self.claim)?;
        for assignment in translate_claim(&claim, &map)? {
            println!("{assignment}");
        }
        Ok(())
    }
}

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Rewrites `[path/]file.any.ext` to `[path/]file.eqs.cnf.resolve`, the
/// solver toolchain's naming convention.
fn default_resolve_path(claim: &Path) -> PathBuf {
    let file_name = claim.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    let resolve = format!("{stem}.eqs.cnf.resolve");
    match claim.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(resolve),
        _ => PathBuf::from(resolve),
    }
}

/// Errors surfaced by the command-line layer.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("the following arguments are required for mode=depth: width")]
    MissingWidth,
    #[error(transparent)]
    Core(#[from] anfgen_core::Error),
    #[error("failed to read `{}`: {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
}
