use std::{
    io::{self, stdin, stdout, Write},
    sync::mpsc,
    thread::{self, JoinHandle},
    time::Duration,
};

use log::{error, warn};
use termion::{event::Key, input::TermRead, raw::IntoRawMode};

use crate::{cell, presets, CellId, Dims, SimHandle, Snapshot};

pub use canvas::Canvas;
mod canvas;

pub struct View {
    thread: JoinHandle<()>,
}

impl View {
    pub fn spawn(handle: SimHandle, dims: Dims) -> Self {
        let thread = thread::spawn(move || {
            if let Err(err) = view_loop(handle, dims) {
                error!("terminal view failed: {err}");
            }
        });
        Self { thread }
    }

    pub fn join(self) {
        if self.thread.join().is_err() {
            error!("view thread panicked");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCmd {
    Exit,
    Move(Dir),
    Toggle,
    Tick,
    Untick,
    PlayPause,
    NextPreset,
    Clear,
}

fn input_cmd(key: Key) -> Option<InputCmd> {
    let command = match key {
        Key::Char('q') | Key::Esc | Key::Ctrl('c') => InputCmd::Exit,
        Key::Up => InputCmd::Move(Dir::Up),
        Key::Down => InputCmd::Move(Dir::Down),
        Key::Left => InputCmd::Move(Dir::Left),
        Key::Right => InputCmd::Move(Dir::Right),
        Key::Char(' ') => InputCmd::Toggle,
        Key::Char('t') => InputCmd::Tick,
        Key::Char('u') => InputCmd::Untick,
        Key::Char('p') => InputCmd::PlayPause,
        Key::Char('n') => InputCmd::NextPreset,
        Key::Char('c') => InputCmd::Clear,
        _ => return None,
    };
    Some(command)
}

fn input_loop(sender: mpsc::Sender<InputCmd>) {
    for key in stdin().keys() {
        let key = match key {
            Ok(key) => key,
            Err(err) => {
                warn!("failed to read key: {err}");
                break;
            }
        };
        let Some(command) = input_cmd(key) else {
            continue;
        };
        if sender.send(command).is_err() {
            break;
        }
    }
}

const VIEW_REFRESH_INTERVAL: Duration = Duration::from_millis(50);

/// cursor and scroll position of the view over the torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Viewport {
    dims: Dims,
    cursor: CellId,
    origin: CellId,
    preset: usize,
}

impl Viewport {
    fn new(dims: Dims) -> Self {
        Self {
            dims,
            cursor: cell!(0, 0),
            origin: cell!(0, 0),
            preset: 0,
        }
    }

    fn step(&mut self, direction: Dir) {
        let (dr, dc) = match direction {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        };
        self.cursor = self.dims.wrap(self.cursor, dr, dc);
    }

    /// shifts the origin so the cursor stays inside a `width` x `height` window.
    fn follow(&mut self, width: usize, height: usize) {
        fn axis(origin: u32, cursor: u32, span: usize) -> u32 {
            let span = span.max(1) as u32;
            if cursor < origin {
                cursor
            } else if cursor >= origin + span {
                cursor + 1 - span
            } else {
                origin
            }
        }
        self.origin = cell!(
            axis(self.origin.row, self.cursor.row, height),
            axis(self.origin.col, self.cursor.col, width)
        );
    }
}

fn view_loop(handle: SimHandle, dims: Dims) -> io::Result<()> {
    let mut out = stdout().into_raw_mode()?;
    let (sender, receiver) = mpsc::channel();
    let _input_handle = thread::spawn(move || input_loop(sender));

    let mut viewport = Viewport::new(dims);
    loop {
        while let Ok(cmd) = receiver.try_recv() {
            if !handle_input(cmd, &handle, &mut viewport) {
                handle.shutdown();
                write!(out, "{}{}", termion::clear::All, termion::cursor::Goto(1, 1))?;
                return Ok(());
            }
        }
        let Some(snapshot) = handle.snapshot() else {
            return Ok(());
        };
        let mut canvas = Canvas::from_screen()?;
        viewport.follow(canvas.width(), canvas.height());
        draw(&mut canvas, &snapshot, &viewport);
        canvas.display(&mut out, &status_line(&snapshot, &viewport))?;
        thread::sleep(VIEW_REFRESH_INTERVAL);
    }
}

/// returns false when the view should close.
fn handle_input(cmd: InputCmd, handle: &SimHandle, viewport: &mut Viewport) -> bool {
    match cmd {
        InputCmd::Exit => return false,
        InputCmd::Move(direction) => viewport.step(direction),
        InputCmd::Toggle => handle.toggle(viewport.cursor),
        InputCmd::Tick => handle.tick(),
        InputCmd::Untick => handle.untick(),
        InputCmd::PlayPause => {
            let running = handle.snapshot().is_some_and(|s| s.running);
            handle.set_running(!running);
        }
        InputCmd::NextPreset => {
            let preset = &presets::ALL[viewport.preset % presets::ALL.len()];
            viewport.preset += 1;
            handle.load_named(preset.name);
        }
        InputCmd::Clear => handle.clear(),
    }
    true
}

fn draw(canvas: &mut Canvas, snapshot: &Snapshot, viewport: &Viewport) {
    let dims = snapshot.grid.dims();
    canvas.layer(|x, y| {
        let row = viewport.origin.row as usize + y;
        let col = viewport.origin.col as usize + x;
        if row >= dims.rows() as usize || col >= dims.cols() as usize {
            return None;
        }
        let cell = cell!(row as u32, col as u32);
        let alive = snapshot.grid.get(cell);
        Some(match (cell == viewport.cursor, alive) {
            (true, true) => '@',
            (true, false) => '+',
            (false, true) => '#',
            (false, false) => '.',
        })
    });
}

fn status_line(snapshot: &Snapshot, viewport: &Viewport) -> String {
    let state = if snapshot.running { "running" } else { "paused" };
    format!(
        "gen {} | pop {} | history {} (cursor {}) | {} | ({}, {}) | space t u p n c q",
        snapshot.generation,
        snapshot.grid.population(),
        snapshot.history,
        snapshot.cursor,
        state,
        viewport.cursor.row,
        viewport.cursor.col,
    )
}
