//! CLI entry point for curriculum ordering of image patches

use clap::Parser;
use patch_curriculum::io::cli::{Cli, FileProcessor, describe_measures, init_tracing};
use patch_curriculum::measures::default_registry;

// The measure listing is the command's output
#[allow(clippy::print_stdout)]
fn main() -> patch_curriculum::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.list_measures {
        print!("{}", describe_measures(default_registry()));
        return Ok(());
    }

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
