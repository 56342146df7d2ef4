//! Runtime — the terminal game loop.
//!
//! Owns the `Game` and drives it at a fixed frame rate: drain input, step
//! the simulation, rasterize the scene, write the changed cells, count down
//! timers, wait for the next tick. The runtime makes no game decisions.

pub mod input;

use std::io::{self, Write};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::{cursor, event, execute, queue, style, terminal};
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::geometry::{FRAMES_PER_SECOND, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::engine::{Game, GameState};
use crate::menubar::print_menu_item;
use crate::renderer::{Grid, Renderer};
use crate::types::{Cell, Color, Frame, Style};
use input::InputState;

/// Rows reserved above the canvas for the menu bar.
const CANVAS_OFFSET: u16 = 1;

pub struct Runtime {
    game: Game,
    config: GameConfig,
    grid: Option<Grid>,
    frames: u64,
}

impl Runtime {
    pub fn new(game: Game, config: GameConfig) -> Self {
        Self {
            game,
            config,
            grid: None,
            frames: 0,
        }
    }

    /// Run the game in the terminal until the player quits.
    ///
    /// Sets up the terminal, enters the frame loop, and restores the terminal
    /// on exit (even on error).
    pub fn run(&mut self) -> Result<()> {
        let (term_w, term_h) = terminal::size().context("Failed to query terminal size")?;
        let (need_w, need_h) = Renderer::grid_size(WINDOW_WIDTH, WINDOW_HEIGHT);
        // +2: one row for menu bar, one row for status bar
        if term_w < need_w || term_h < need_h + 2 {
            bail!(
                "Terminal too small: need {}x{}, have {}x{}",
                need_w,
                need_h + 2,
                term_w,
                term_h,
            );
        }

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All),
        )?;
        let release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if release_events {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        info!(release_events, "terminal ready");

        let result = self.run_loop(&mut stdout, release_events);

        // Always restore terminal state.
        if release_events {
            let _ = execute!(stdout, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();

        info!(frames = self.frames, "terminal restored");
        result
    }

    // -----------------------------------------------------------------------
    // Frame loop
    // -----------------------------------------------------------------------

    fn run_loop(&mut self, stdout: &mut io::Stdout, release_events: bool) -> Result<()> {
        let frame_time = Duration::from_secs(1) / FRAMES_PER_SECOND;
        let mut input = InputState::new(&self.config, release_events);

        self.render_menubar(stdout)?;

        while self.game.state() == GameState::Running {
            let frame_start = Instant::now();

            while event::poll(Duration::ZERO)? {
                match event::read()? {
                    event::Event::Resize(_, _) => {
                        // the terminal was cleared or reflowed; repaint everything
                        self.grid = None;
                        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
                        self.render_menubar(stdout)?;
                    }
                    other => input.handle(&other),
                }
            }

            let frame_input = input.sample();
            if let Some(outcome) = self.game.step(&frame_input) {
                debug!(?outcome, frame = self.frames, "step");
            }
            if self.game.state() == GameState::Terminated {
                break;
            }

            let grid = Renderer::rasterize(&self.game.resolve());
            let frame = Renderer::frame(self.grid.as_ref(), &grid);
            self.render_frame(stdout, &frame)?;
            self.render_status(stdout)?;
            stdout.flush()?;
            self.grid = Some(grid);

            self.game.tick();
            self.frames += 1;

            if let Some(rest) = frame_time.checked_sub(frame_start.elapsed()) {
                thread::sleep(rest);
            }
        }

        Ok(())
    }

    // -----------------------------------------------------------------------
    // Terminal output
    // -----------------------------------------------------------------------

    fn render_menubar(&self, stdout: &mut io::Stdout) -> Result<()> {
        let keys = &self.config.key_bindings;
        let items = [
            format!("[{}][{}][{}][{}] move", keys.left, keys.right, keys.up, keys.down),
            format!("[{}] interact", keys.interact),
            format!("[{}] quit", keys.quit),
        ];

        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::Print(" "),
        )?;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                queue!(stdout, style::Print("  "))?;
            }
            print_menu_item(stdout, item)?;
        }
        stdout.flush()?;
        Ok(())
    }

    fn render_frame(&self, stdout: &mut io::Stdout, frame: &Frame) -> Result<()> {
        match frame {
            Frame::Full { cells } => {
                for (y, row) in cells.iter().enumerate() {
                    queue!(stdout, cursor::MoveTo(0, y as u16 + CANVAS_OFFSET))?;
                    for cell in row {
                        print_cell(stdout, cell)?;
                    }
                }
            }
            Frame::Diff { changes } => {
                for change in changes {
                    queue!(stdout, cursor::MoveTo(change.x, change.y + CANVAS_OFFSET))?;
                    print_cell(stdout, &change.cell)?;
                }
            }
        }
        Ok(())
    }

    fn render_status(&self, stdout: &mut io::Stdout) -> Result<()> {
        let (_, rows) = Renderer::grid_size(WINDOW_WIDTH, WINDOW_HEIGHT);
        let player = self.game.player();
        let status = format!(
            " {} | x {:>3} y {:>3} ",
            self.game.room().name(),
            player.x,
            player.y,
        );

        let mut cs = style::ContentStyle::default();
        cs.attributes.set(style::Attribute::Dim);

        queue!(
            stdout,
            cursor::MoveTo(0, rows + CANVAS_OFFSET),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::PrintStyledContent(style::StyledContent::new(cs, status)),
        )?;
        Ok(())
    }
}

fn print_cell(stdout: &mut io::Stdout, cell: &Cell) -> Result<()> {
    let cs = to_content_style(&cell.style);
    queue!(
        stdout,
        style::PrintStyledContent(style::StyledContent::new(cs, cell.ch))
    )?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Style conversion
// ---------------------------------------------------------------------------

pub fn to_content_style(s: &Style) -> style::ContentStyle {
    let mut cs = style::ContentStyle::default();
    if let Some(fg) = &s.fg {
        cs.foreground_color = Some(to_ct_color(fg));
    }
    if let Some(bg) = &s.bg {
        cs.background_color = Some(to_ct_color(bg));
    }
    if s.bold {
        cs.attributes.set(style::Attribute::Bold);
    }
    cs
}

pub fn to_ct_color(c: &Color) -> style::Color {
    style::Color::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}
