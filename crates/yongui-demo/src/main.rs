#![forbid(unsafe_code)]

//! YongUI dropdown demo binary entry point.

use std::io;
use std::process;
use std::time::Duration;

use yongui::{Buffer, Event, Frame, Presenter, SessionOptions, TerminalSession, Theme};
use yongui_demo::app::{Control, DemoApp};
use yongui_demo::{cli, logging};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() {
    let opts = cli::Opts::parse();

    if let Err(err) = logging::init_from_env() {
        eprintln!("Failed to open log file: {err}");
        process::exit(1);
    }

    if let Err(err) = run(&opts) {
        eprintln!("Runtime error: {err}");
        process::exit(1);
    }
}

fn run(opts: &cli::Opts) -> yongui::Result<()> {
    let theme = Theme::default().resolve(opts.palette.is_dark());
    let mut app = DemoApp::new(theme, opts.tone);

    let session = TerminalSession::new(SessionOptions {
        alternate_screen: true,
        mouse_capture: opts.mouse,
        ..Default::default()
    })?;
    session.hide_cursor()?;

    let (width, height) = session.size()?;
    let mut frame = Frame::with_hit_grid(width, height);
    let mut presenter = Presenter::new(io::stdout());
    let mut dirty = true;
    let mut shown: Option<Buffer> = None;

    loop {
        if dirty {
            frame.clear();
            app.view(&mut frame);
            if shown
                .as_ref()
                .is_none_or(|prev| !prev.content_eq(&frame.buffer))
            {
                presenter.present(&frame.buffer)?;
                shown = Some(frame.buffer.clone());
            }
            dirty = false;
        }

        if !session.poll_event(POLL_INTERVAL)? {
            continue;
        }
        let Some(event) = session.read_event()? else {
            continue;
        };

        if let Event::Resize { width, height } = event {
            tracing::debug!(width, height, "terminal resized");
            frame = Frame::with_hit_grid(width, height);
            presenter.invalidate();
            shown = None;
            dirty = true;
            continue;
        }

        if app.handle_event(&event, &frame) == Control::Quit {
            break;
        }
        dirty = true;
    }

    session.show_cursor()?;
    tracing::info!("demo finished");
    Ok(())
}
