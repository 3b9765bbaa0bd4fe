use crate::export::ExportFormat;
use crate::render::Layout;
use clap::{Parser, Subcommand};

/// Command-line interface definition for lithoview
/// CLI application to fetch and display lithology well-log records
#[derive(Parser)]
#[command(
    name = "lithoview",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple lithology log viewer: fetch well-log records and render them as tables or log strips",
    long_about = None
)]
pub struct Cli {
    /// Override the lithology API endpoint (useful for tests or another server)
    #[arg(global = true, long = "url")]
    pub url: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Fetch the lithology catalog and render one card per log
    Show {
        /// Card body layout (defaults to the configured one)
        #[arg(long, value_enum, help = "Card layout: plain table or proportional log strip")]
        layout: Option<Layout>,

        #[arg(
            long = "entry",
            help = "Show only the log whose tab name or title matches"
        )]
        entry: Option<String>,

        #[arg(long = "height", help = "Total band rows of the strip layout")]
        height: Option<usize>,

        #[arg(long = "plain", help = "Disable ANSI colors in the rendered cards")]
        plain: bool,
    },

    /// Export the lithology catalog to a file
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
