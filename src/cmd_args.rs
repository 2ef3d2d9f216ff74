use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use clap::Parser;
use clap::ValueEnum;

/// Which screen to open
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenKind {
    /// Sliding sign-in / sign-up panel
    #[default]
    Panel,
    /// Standalone registration form
    Registration,
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Section of the profile file to read settings from. Default is 'default'.
    /// A missing profile falls back to built-in settings.
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    #[clap(long, value_enum, default_value_t = ScreenKind::Panel, help = "screen to open")]
    screen: ScreenKind,

    #[clap(long, help = "sign-in endpoint URL (overrides the profile)")]
    sign_in_url: Option<String>,

    #[clap(long, help = "sign-up endpoint URL (overrides the profile)")]
    sign_up_url: Option<String>,

    #[clap(long, help = "JSON file overriding display texts")]
    texts: Option<PathBuf>,

    #[clap(long, help = "write logs to this file instead of stderr")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct CommandLineArgs {
    profile: String,
    screen: ScreenKind,
    sign_in_url: Option<String>,
    sign_up_url: Option<String>,
    texts: Option<PathBuf>,
    log_file: Option<PathBuf>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            profile: args.profile,
            screen: args.screen,
            sign_in_url: args.sign_in_url,
            sign_up_url: args.sign_up_url,
            texts: args.texts,
            log_file: args.log_file,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn profile(&self) -> &str {
        if self.profile.is_empty() {
            "default"
        } else {
            &self.profile
        }
    }

    pub fn screen(&self) -> ScreenKind {
        self.screen
    }

    pub fn sign_in_url(&self) -> Option<&str> {
        self.sign_in_url.as_deref()
    }

    pub fn sign_up_url(&self) -> Option<&str> {
        self.sign_up_url.as_deref()
    }

    pub fn texts(&self) -> Option<&Path> {
        self.texts.as_deref()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }
}
