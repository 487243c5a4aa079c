//! Responsible for creating the colorconv settings from the command line

mod cli;

use clap::Parser;
use webcolors::{Representation, Specification};

/// Holds all the configurable information for a colorconv invocation
#[derive(Debug, PartialEq)]
pub struct Settings {
    /// Vocabulary that color names are looked up in
    pub specification: Specification,

    /// Representation to convert into
    pub target: Representation,

    /// The color to convert, as typed by the user
    pub value: Option<String>,

    /// List every color name of the specification instead of converting
    pub list: bool,
}

impl Settings {
    /// Reads the settings from the arguments of the current process.
    ///
    /// Exits the process with a usage message if the arguments are invalid.
    #[must_use]
    pub fn init() -> Self {
        Self::from_arguments(cli::Arguments::parse())
    }

    /// Like [Settings::init], but for an explicit argument list.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        cli::Arguments::try_parse_from(args).map(Self::from_arguments)
    }

    fn from_arguments(args: cli::Arguments) -> Self {
        let mut settings = Self::default();
        args.update_settings(&mut settings);
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            specification: Specification::Css3,
            target: Representation::Hex,
            value: None,
            list: false,
        }
    }
}
