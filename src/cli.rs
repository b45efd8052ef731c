use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "debinfo")]
#[command(version)]
#[command(about = "Show control metadata of Debian binary packages", long_about = None)]
#[command(after_help = "Examples:\n  \
  debinfo foo_1.0_amd64.deb          print the parsed control fields\n  \
  debinfo -r foo_1.0_amd64.deb       dump the raw ./control file\n  \
  RUST_LOG=debinfo=trace debinfo *.deb   show every archive member visited")]
pub struct Cli {
    /// Package files to read
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<String>,

    /// Write the raw control file instead of the parsed fields
    #[arg(short = 'r', long = "raw")]
    pub raw: bool,

    /// Verbose logging (-vv => trace)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode, no file separators
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,
}

impl Cli {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    /// Default log filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debinfo=debug",
            _ => "debinfo=trace",
        }
    }
}
