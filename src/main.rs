//! Terminal runner (default binary).
//!
//! Wires the game session to crossterm input, the framebuffer renderer and
//! the SQLite score history.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tetromino::core::{EngineConfig, GameSnapshot, RandomShapes, ShapeSource};
use tetromino::input::{confirm_key, handle_key_event, should_quit};
use tetromino::session::{Flow, GameSession, RestartPrompt, StatusSink};
use tetromino::store::{MemoryScoreStore, ScoreStore, SqliteScoreStore, StoreError, DEFAULT_DB_PATH};
use tetromino::term::{FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use tetromino::types::{StatusMessage, FRAME_MS, SPEED_MS};

#[derive(Parser, Debug)]
#[command(name = "tetromino", version, about = "Falling-block puzzle for the terminal")]
struct Cli {
    #[arg(
        long,
        value_name = "FILE",
        default_value = DEFAULT_DB_PATH,
        help = "SQLite score database"
    )]
    db: PathBuf,

    #[arg(long, help = "Keep score history in memory only")]
    memory: bool,

    #[arg(long, value_name = "SEED", help = "Seed for a reproducible piece sequence")]
    seed: Option<u64>,

    #[arg(
        long,
        value_name = "MS",
        default_value_t = SPEED_MS,
        help = "Milliseconds per gravity tick"
    )]
    speed: u32,

    #[arg(long, value_name = "FILE", help = "Write logs to this file (filtered by RUST_LOG)")]
    log_file: Option<PathBuf>,
}

type Session = GameSession<Box<dyn ScoreStore>, RandomShapes<StdRng>>;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let store = open_store(&cli);
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let config = EngineConfig::with_tick_ms(cli.speed);
    let mut session = GameSession::new(store, RandomShapes::new(rng), config)
        .context("failed to read score history")?;

    let mut shell = TerminalShell::new();
    shell.renderer.enter()?;

    let result = run(&mut shell, &mut session);

    // Always try to restore terminal state.
    let _ = shell.renderer.exit();

    info!(
        "session ended: score {}, max score {}",
        session.score(),
        session.max_score()
    );
    if let Some(unsaved) = session.unsaved_score() {
        warn!("score {} was never saved", unsaved);
    }
    session.close().context("failed to close score store")?;
    result
}

/// Logs go to a file only; the terminal belongs to the game.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

/// SQLite history at `--db`, or an in-memory store if that is unusable.
fn open_store(cli: &Cli) -> Box<dyn ScoreStore> {
    if cli.memory {
        return Box::new(MemoryScoreStore::new());
    }

    let opened = SqliteScoreStore::open(&cli.db).and_then(|store| store.max_score().map(|_| store));
    match opened {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!(
                "score database {} unavailable ({}); scores will not persist",
                cli.db.display(),
                err
            );
            Box::new(MemoryScoreStore::new())
        }
    }
}

/// Terminal side of the session: status line, restart prompt, drawing.
struct TerminalShell {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    snapshot: GameSnapshot,
    hud: Hud,
    /// Hud or terminal changed since the last draw
    needs_draw: bool,
    /// A restart prompt blocked the loop since the last check
    prompted: bool,
}

impl TerminalShell {
    fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            snapshot: GameSnapshot::default(),
            hud: Hud::default(),
            needs_draw: true,
            prompted: false,
        }
    }

    fn sync<St: ScoreStore, S: ShapeSource>(&mut self, session: &GameSession<St, S>) {
        session.snapshot_into(&mut self.snapshot);
        self.hud.unsaved_score = session.unsaved_score();
    }

    fn draw(&mut self) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(&self.snapshot, &self.hud, Viewport::new(w, h), &mut self.fb);
        self.needs_draw = false;
        self.renderer.draw_swap(&mut self.fb)
    }

    /// Redraw if the engine or the hud changed.
    fn refresh<St: ScoreStore, S: ShapeSource>(
        &mut self,
        session: &mut GameSession<St, S>,
    ) -> Result<()> {
        if session.state_mut().take_dirty() || self.needs_draw {
            self.sync(session);
            self.draw()?;
        }
        Ok(())
    }

    /// Block until the player answers y or n.
    fn wait_for_answer(&mut self) -> Result<bool> {
        loop {
            self.draw()?;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(answer) = confirm_key(key) {
                        return Ok(answer);
                    }
                }
                Event::Resize(..) => self.renderer.invalidate(),
                _ => {}
            }
        }
    }

    fn resized(&mut self) {
        self.renderer.invalidate();
        self.needs_draw = true;
    }
}

impl StatusSink for TerminalShell {
    fn show_status(&mut self, message: &StatusMessage) {
        debug!("status: {}", message);
        self.hud.status = Some(*message);
        self.needs_draw = true;
    }

    fn report_store_error(&mut self, _error: &StoreError) {
        // The session keeps the unsaved score; pick it up on the next sync.
        self.needs_draw = true;
    }
}

impl RestartPrompt for TerminalShell {
    fn confirm_restart(&mut self) -> bool {
        self.hud.restart_prompt = true;
        let answer = self.wait_for_answer().unwrap_or_else(|err| {
            warn!("restart prompt failed: {:#}", err);
            false
        });
        self.hud.restart_prompt = false;
        self.needs_draw = true;
        self.prompted = true;
        answer
    }
}

fn run(shell: &mut TerminalShell, session: &mut Session) -> Result<()> {
    let frame = Duration::from_millis(FRAME_MS as u64);

    if session.start(shell) == Flow::Quit {
        return Ok(());
    }
    let mut last_tick = Instant::now();

    loop {
        shell.refresh(session)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if session.handle_action(action, shell) == Flow::Quit {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => shell.resized(),
                _ => {}
            }
        }

        // Time spent waiting on the prompt is not gravity time.
        if std::mem::take(&mut shell.prompted) {
            last_tick = Instant::now();
        }

        // Whole milliseconds only; the remainder carries into the next frame.
        let elapsed_ms = u32::try_from(last_tick.elapsed().as_millis()).unwrap_or(u32::MAX);
        if elapsed_ms >= FRAME_MS {
            last_tick += Duration::from_millis(elapsed_ms as u64);
            if session.tick(elapsed_ms, shell) == Flow::Quit {
                return Ok(());
            }
        }
    }
}
