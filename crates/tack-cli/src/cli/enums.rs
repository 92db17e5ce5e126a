use clap::ValueEnum;
use tack_config::Mode;

/// Build mode selected on the command line
#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Single unhashed bundle with dev server and hot reload
    #[value(name = "development")]
    Development,

    /// Split, content-hashed, minified output
    #[value(name = "production")]
    Production,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Development => Mode::Development,
            ModeArg::Production => Mode::Production,
        }
    }
}

impl ModeArg {
    pub fn as_str(&self) -> &'static str {
        Mode::from(*self).as_str()
    }
}
