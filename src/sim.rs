use std::{
    sync::mpsc,
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use log::{debug, warn};

use crate::{CellId, Engine, EngineError, Grid, TickOutcome};

/// what a view needs to draw one frame.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub grid: Grid,
    pub generation: u64,
    pub cursor: isize,
    pub history: usize,
    pub can_untick: bool,
    pub running: bool,
}

pub enum SimCmd {
    Toggle(CellId),
    Tick,
    Untick,
    Load(Vec<CellId>),
    LoadNamed(String),
    Clear,
    SetRunning(bool),
    Snapshot(mpsc::Sender<Snapshot>),
    Shutdown,
}

/// a cloneable handle through which any number of threads drive one engine.
/// Commands are applied one at a time in arrival order.
#[derive(Clone)]
pub struct SimHandle {
    sender: mpsc::Sender<SimCmd>,
}

impl SimHandle {
    pub fn new(sender: mpsc::Sender<SimCmd>) -> Self {
        Self { sender }
    }

    fn send(&self, cmd: SimCmd) {
        if self.sender.send(cmd).is_err() {
            warn!("simulation thread has stopped, command dropped");
        }
    }

    pub fn toggle(&self, cell: CellId) {
        self.send(SimCmd::Toggle(cell))
    }

    pub fn tick(&self) {
        self.send(SimCmd::Tick)
    }

    pub fn untick(&self) {
        self.send(SimCmd::Untick)
    }

    pub fn load(&self, cells: Vec<CellId>) {
        self.send(SimCmd::Load(cells))
    }

    pub fn load_named(&self, name: impl Into<String>) {
        self.send(SimCmd::LoadNamed(name.into()))
    }

    pub fn clear(&self) {
        self.send(SimCmd::Clear)
    }

    pub fn set_running(&self, running: bool) {
        self.send(SimCmd::SetRunning(running))
    }

    /// `None` once the simulation thread has stopped.
    pub fn snapshot(&self) -> Option<Snapshot> {
        let (sender, receiver) = mpsc::channel();
        self.sender.send(SimCmd::Snapshot(sender)).ok()?;
        receiver.recv().ok()
    }

    pub fn shutdown(&self) {
        self.send(SimCmd::Shutdown)
    }
}

#[derive(Debug)]
pub struct Sim {
    thread: JoinHandle<Engine>,
    sender: mpsc::Sender<SimCmd>,
}

impl Sim {
    /// moves `engine` onto its own thread. While running, it ticks once per
    /// `interval`.
    pub fn spawn(engine: Engine, interval: Duration) -> Self {
        let (sender, receiver) = mpsc::channel();
        let thread = thread::spawn(move || sim_loop(receiver, engine, interval));
        Self { thread, sender }
    }

    pub fn handle(&self) -> SimHandle {
        SimHandle::new(self.sender.clone())
    }

    /// waits for a shutdown and hands the engine back.
    pub fn join(self) -> thread::Result<Engine> {
        drop(self.sender);
        self.thread.join()
    }
}

const EVT_CHECK_TIMEOUT: Duration = Duration::from_millis(10);

fn sim_loop(receiver: mpsc::Receiver<SimCmd>, mut engine: Engine, interval: Duration) -> Engine {
    let mut running = false;
    let mut last_update = Instant::now();

    loop {
        match receiver.recv_timeout(EVT_CHECK_TIMEOUT) {
            Ok(SimCmd::Shutdown) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Ok(cmd) => apply(&mut engine, &mut running, cmd),
            Err(mpsc::RecvTimeoutError::Timeout) => (),
        }

        if running && last_update.elapsed() >= interval {
            engine.tick();
            last_update = Instant::now();
        }
    }

    debug!("simulation stopped at generation {}", engine.generation());
    engine
}

fn apply(engine: &mut Engine, running: &mut bool, cmd: SimCmd) {
    let result = match cmd {
        SimCmd::Toggle(cell) => {
            // an edit while rewound forks history, like an undo stack
            if engine.dims().contains(cell) {
                engine.discard_future();
            }
            engine.toggle_cell(cell.row, cell.col).map(drop)
        }
        SimCmd::Tick => {
            if engine.tick() == TickOutcome::Refused {
                debug!("tick refused at cursor {}", engine.cursor());
            }
            Ok(())
        }
        SimCmd::Untick => engine.untick(),
        SimCmd::Load(cells) => engine.load_preset(cells),
        SimCmd::LoadNamed(name) => match engine.load_named(&name) {
            Ok(false) => {
                warn!("no preset named {name:?}");
                Ok(())
            }
            other => other.map(drop),
        },
        SimCmd::Clear => {
            engine.reset();
            Ok(())
        }
        SimCmd::SetRunning(value) => {
            *running = value;
            Ok(())
        }
        SimCmd::Snapshot(sender) => {
            let _ = sender.send(Snapshot {
                grid: engine.grid().clone(),
                generation: engine.generation(),
                cursor: engine.cursor(),
                history: engine.history_len(),
                can_untick: engine.can_untick(),
                running: *running,
            });
            Ok(())
        }
        SimCmd::Shutdown => Ok(()),
    };

    match result {
        Ok(()) => (),
        Err(EngineError::NothingToUntick) => debug!("nothing to untick"),
        Err(err) => warn!("command rejected: {err}"),
    }
}
