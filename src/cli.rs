use crate::config::Options;
use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

/// Visualize the live state of an attached game controller
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "controllermap")]
#[command(version)]
#[command(about = "Game controller test: draws pressed buttons and deflected axes", long_about = None)]
pub struct Cli {
    /// Print every known controller mapping before opening the window
    #[arg(long)]
    pub mappings: bool,
}

impl Cli {
    /// Parse arguments, ignoring anything unrecognized.
    ///
    /// Help and version requests still print and exit the process.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let args: Vec<std::ffi::OsString> = args.into_iter().map(Into::into).collect();
        match Self::try_parse_from(&args) {
            Ok(cli) => cli,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.exit()
            }
            Err(err) => {
                log::warn!("Ignoring unrecognized arguments ({:?})", err.kind());
                Self {
                    mappings: args.get(1).map_or(false, |arg| arg == "--mappings"),
                }
            }
        }
    }

    /// Merge CLI arguments into the options struct
    pub fn merge_into_options(&self, mut opts: Options) -> Result<Options> {
        if self.mappings {
            opts.dump_mappings = true;
        }
        Ok(opts)
    }
}
