#![forbid(unsafe_code)]

//! Terminal session lifecycle guard.
//!
//! [`TerminalSession`] owns raw mode and the optional modes a dropdown host
//! needs (alternate screen, mouse capture, focus events). Enabled modes are
//! recorded in order and disabled in reverse when the session is dropped,
//! on panic (through a panic hook) and on SIGINT/SIGTERM (unix).
//!
//! ```no_run
//! use yongui_core::terminal_session::{SessionOptions, TerminalSession};
//!
//! let session = TerminalSession::new(SessionOptions {
//!     alternate_screen: true,
//!     mouse_capture: true,
//!     ..Default::default()
//! })?;
//! let (width, height) = session.size()?;
//! # let _ = (width, height);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Duration;

use crate::event::Event;

#[cfg(unix)]
use signal_hook::consts::signal::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::iterator::Signals;

/// Terminal session configuration. Everything defaults to off.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Switch to the alternate screen buffer, restoring the original on exit.
    pub alternate_screen: bool,

    /// Enable mouse capture (SGR encoding). Required for clicking items.
    pub mouse_capture: bool,

    /// Report terminal focus changes as [`Event::Focus`].
    pub focus_events: bool,
}

impl SessionOptions {
    /// Requested modes in the order they are switched on.
    fn modes(&self) -> impl Iterator<Item = Mode> + '_ {
        Mode::ALL.into_iter().filter(|mode| match mode {
            Mode::AlternateScreen => self.alternate_screen,
            Mode::MouseCapture => self.mouse_capture,
            Mode::FocusEvents => self.focus_events,
        })
    }
}

/// A terminal mode that must be switched off again before exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    AlternateScreen,
    MouseCapture,
    FocusEvents,
}

impl Mode {
    const ALL: [Mode; 3] = [Mode::AlternateScreen, Mode::MouseCapture, Mode::FocusEvents];

    fn name(self) -> &'static str {
        match self {
            Mode::AlternateScreen => "alternate_screen",
            Mode::MouseCapture => "mouse_capture",
            Mode::FocusEvents => "focus_events",
        }
    }

    fn enable(self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Mode::AlternateScreen => {
                crossterm::execute!(out, crossterm::terminal::EnterAlternateScreen)
            }
            Mode::MouseCapture => crossterm::execute!(out, crossterm::event::EnableMouseCapture),
            Mode::FocusEvents => crossterm::execute!(out, crossterm::event::EnableFocusChange),
        }
    }

    fn disable(self, out: &mut impl Write) -> io::Result<()> {
        match self {
            Mode::AlternateScreen => {
                crossterm::execute!(out, crossterm::terminal::LeaveAlternateScreen)
            }
            Mode::MouseCapture => crossterm::execute!(out, crossterm::event::DisableMouseCapture),
            Mode::FocusEvents => crossterm::execute!(out, crossterm::event::DisableFocusChange),
        }
    }
}

/// RAII guard for raw mode and the modes requested in [`SessionOptions`].
///
/// Only one session should exist at a time.
#[derive(Debug)]
pub struct TerminalSession {
    options: SessionOptions,
    /// Modes switched on so far, oldest first.
    enabled: Vec<Mode>,
    #[cfg(unix)]
    signal_guard: Option<SignalGuard>,
}

impl TerminalSession {
    /// Enter raw mode and enable the requested modes.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or any requested mode cannot be enabled.
    /// Modes enabled before the failure are restored by `Drop`.
    pub fn new(options: SessionOptions) -> io::Result<Self> {
        install_panic_hook();

        crossterm::terminal::enable_raw_mode()?;
        crate::info!("terminal raw mode enabled");

        let mut session = Self {
            options: options.clone(),
            enabled: Vec::with_capacity(Mode::ALL.len()),
            #[cfg(unix)]
            signal_guard: Some(SignalGuard::new()?),
        };

        let mut stdout = io::stdout();
        for mode in options.modes() {
            mode.enable(&mut stdout)?;
            session.enabled.push(mode);
            crate::info!(mode = mode.name(), "terminal mode enabled");
        }

        Ok(session)
    }

    /// Current terminal size as `(columns, rows)`.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }

    /// Wait up to `timeout` for input. `Ok(true)` means an event is ready.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<bool> {
        crossterm::event::poll(timeout)
    }

    /// Read the next event, blocking until one arrives.
    ///
    /// Returns `Ok(None)` for input with no canonical [`Event`].
    pub fn read_event(&self) -> io::Result<Option<Event>> {
        let event = crossterm::event::read()?;
        Ok(Event::from_crossterm(event))
    }

    pub fn hide_cursor(&self) -> io::Result<()> {
        crossterm::execute!(io::stdout(), crossterm::cursor::Hide)
    }

    pub fn show_cursor(&self) -> io::Result<()> {
        crossterm::execute!(io::stdout(), crossterm::cursor::Show)
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    fn restore(&mut self) {
        #[cfg(unix)]
        drop(self.signal_guard.take());

        let mut stdout = io::stdout();
        while let Some(mode) = self.enabled.pop() {
            if let Err(err) = mode.disable(&mut stdout) {
                crate::warn!(mode = mode.name(), error = %err, "failed to disable terminal mode");
            }
        }
        let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = stdout.flush();
        crate::info!("terminal restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_all();
            previous(info);
        }));
    });
}

/// Switch every mode off without knowing which were on.
fn restore_all() {
    let mut stdout = io::stdout();
    for mode in Mode::ALL.into_iter().rev() {
        let _ = mode.disable(&mut stdout);
    }
    let _ = crossterm::execute!(stdout, crossterm::cursor::Show);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}

/// Background thread that restores the terminal on SIGINT/SIGTERM.
#[cfg(unix)]
#[derive(Debug)]
struct SignalGuard {
    handle: signal_hook::iterator::Handle,
    thread: Option<std::thread::JoinHandle<()>>,
}

#[cfg(unix)]
impl SignalGuard {
    fn new() -> io::Result<Self> {
        let mut signals = Signals::new([SIGINT, SIGTERM]).map_err(io::Error::other)?;
        let handle = signals.handle();
        let thread = std::thread::spawn(move || {
            if let Some(signal) = signals.forever().next() {
                crate::warn!(signal, "termination signal received");
                restore_all();
                std::process::exit(128 + signal);
            }
        });
        Ok(Self {
            handle,
            thread: Some(thread),
        })
    }
}

#[cfg(unix)]
impl Drop for SignalGuard {
    fn drop(&mut self) {
        self.handle.close();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
