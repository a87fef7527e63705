//! Command dispatch

use crate::cli::args::Args;

/// The command selected by the parsed arguments
#[derive(Debug)]
pub enum Command {
    /// Create a default configuration file
    Init,
    /// Walk a tree and write reports
    Scan(Box<Args>),
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            Command::Init
        } else {
            Command::Scan(Box::new(args))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn init_flag_selects_init() {
        let args = Args::parse_from(["importscan", "--init"]);
        assert!(matches!(Command::from_args(args), Command::Init));
    }

    #[test]
    fn default_is_scan() {
        let args = Args::parse_from(["importscan", "some/dir"]);
        assert!(matches!(Command::from_args(args), Command::Scan(_)));
    }
}
