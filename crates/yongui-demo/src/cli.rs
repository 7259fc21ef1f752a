#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo.
//!
//! Parses args by hand. `YONGUI_DEMO_TONE` sets the default tone, overridden
//! by an explicit `--tone`.

use std::env;
use std::process;

use yongui::Tone;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
YongUI dropdown demo

USAGE:
    yongui-demo [OPTIONS]

OPTIONS:
    --light              Use the light palette
    --dark               Use the dark palette
    --tone NAME          Trigger tone: brand, neutral, danger, success,
                         warning or info (default: brand)
    --no-mouse           Disable mouse event capture
    --help, -h           Show this help message
    --version, -V        Show version

KEYBINDINGS:
    Enter / Space    Open the list
    Up / Down        Move the focus (wraps around)
    Enter            Select the focused item, keeping the list open
    Space            Pick the focused item and close the list
    Esc              Close the list, or quit when it is closed
    Tab / Shift-Tab  Switch between dropdowns
    q / Ctrl+C       Quit

ENVIRONMENT VARIABLES:
    YONGUI_DEMO_TONE   Default for --tone
    YONGUI_LOG         Log filter, e.g. 'debug' or 'yongui_widgets=trace'
    YONGUI_LOG_FILE    Log file path (default: yongui-demo.log)
    COLORFGBG          Picks light or dark when neither flag is given";

/// Light/dark choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Ask the terminal through `COLORFGBG`.
    #[default]
    Detect,
    Light,
    Dark,
}

impl Palette {
    pub fn is_dark(self) -> bool {
        match self {
            Self::Detect => yongui::Theme::detect_dark_mode(),
            Self::Light => false,
            Self::Dark => true,
        }
    }
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    pub palette: Palette,
    /// Tone of the first dropdown's trigger.
    pub tone: Tone,
    pub mouse: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            palette: Palette::Detect,
            tone: Tone::Brand,
            mouse: true,
        }
    }
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(Opts),
    Help,
    Version,
}

impl Opts {
    /// Parse process arguments and environment, exiting on `--help`,
    /// `--version` or bad input.
    pub fn parse() -> Self {
        let env_tone = env::var("YONGUI_DEMO_TONE").ok();
        match Self::parse_from(env::args().skip(1), env_tone.as_deref()) {
            Ok(Command::Run(opts)) => opts,
            Ok(Command::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Command::Version) => {
                println!("yongui-demo {VERSION}");
                process::exit(0);
            }
            Err(msg) => {
                eprintln!("{msg}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse without touching the process.
    pub fn parse_from<I>(args: I, env_tone: Option<&str>) -> Result<Command, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut opts = Self::default();

        if let Some(val) = env_tone {
            opts.tone = val.parse().map_err(|err| format!("YONGUI_DEMO_TONE: {err}"))?;
        }

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--light" => opts.palette = Palette::Light,
                "--dark" => opts.palette = Palette::Dark,
                "--no-mouse" => opts.mouse = false,
                "--tone" => {
                    let val = args.next().ok_or("--tone needs a value")?;
                    opts.tone = parse_tone(&val)?;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--tone=") {
                        opts.tone = parse_tone(val)?;
                    } else {
                        return Err(format!("Unknown argument: {other}"));
                    }
                }
            }
        }

        Ok(Command::Run(opts))
    }
}

fn parse_tone(val: &str) -> Result<Tone, String> {
    val.parse().map_err(|err| format!("Invalid --tone value: {err}"))
}
