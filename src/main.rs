//! Terminal 2048 runner (default binary).
//!
//! It uses crossterm for input and the framebuffer renderer from `term`.
//! The loop is event driven: it blocks on the next terminal event and redraws
//! synchronously after every change, so the board has a single owner.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{error, info};

use tui_2048::cli::{Cli, EXIT_SCREEN_INIT, EXIT_USAGE};
use tui_2048::engine::Session;
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::logging;
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(EXIT_USAGE)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let _logger = match logging::init(&cli) {
        Ok(handle) => handle,
        Err(e) => {
            eprintln!("tui-2048: {:#}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let mut term = TerminalRenderer::new();
    if let Err(e) = term.enter() {
        let _ = term.exit();
        error!("terminal setup failed: {:#}", e);
        eprintln!("tui-2048: cannot set up the terminal: {:#}", e);
        return ExitCode::from(EXIT_SCREEN_INIT);
    }

    let mut session = Session::new(cli.session_config());
    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    println!("{}", session.board().display_score());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("aborted: {:#}", e);
            eprintln!("tui-2048: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let (w, h) = crossterm::terminal::size()?;
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);

    loop {
        view.render_into(session.board(), session.status(), viewport, &mut fb);
        term.draw(&fb)?;

        // Block until something needs a redraw.
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(
                            "quit after {} game(s), score {}",
                            session.games(),
                            session.board().score()
                        );
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if session.apply(action).changed() {
                            break;
                        }
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    break;
                }
                _ => {}
            }
        }
    }
}
