mod convert;

use clap::Parser;
use convert::ConvertCommand;
use eyre::Result;

use crate::logging;

#[derive(Parser, Debug)]
#[command(name = "svg-to-ts")]
#[command(version)]
#[command(about = "Convert SVG icons into TypeScript constants, a type union and an interface")]
pub(crate) struct Cli {
    #[command(flatten)]
    convert: ConvertCommand,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        logging::init(self.verbose);
        self.convert.run()
    }
}
