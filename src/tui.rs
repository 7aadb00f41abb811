//! Interactive terminal front end.
//!
//! Arrow keys slide a tile in the arrow's direction, digits slide the tile
//! with that label. `h` shows a hint, `s` replays an optimal solution,
//! `n` starts a new game and `q` or Esc quits.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};
use log::warn;
use rand::Rng;

use eight_puzzle::puzzle::EMPTY;
use eight_puzzle::{Config, Direction, Game, Move, Solver, GRID_SIZE};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Raw mode and the alternate screen for as long as this lives.
struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, Hide).context("failed to set up terminal")?;
        Ok(Self { out })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

enum Action {
    Slide(Move),
    Tile(u8),
    Hint,
    Solve,
    NewGame,
    Quit,
}

fn action_for(key: KeyEvent, game: &Game) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // The tile sliding up sits below the gap, and so on.
    let slide = |dir: Direction| {
        Move::towards(game.state().empty(), dir.opposite()).map(Action::Slide)
    };

    match key.code {
        KeyCode::Up => slide(Direction::Up),
        KeyCode::Down => slide(Direction::Down),
        KeyCode::Left => slide(Direction::Left),
        KeyCode::Right => slide(Direction::Right),
        KeyCode::Char(c @ '1'..='8') => Some(Action::Tile(c as u8 - b'0')),
        KeyCode::Char('h') => Some(Action::Hint),
        KeyCode::Char('s') => Some(Action::Solve),
        KeyCode::Char('n') => Some(Action::NewGame),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn position_of(game: &Game, label: u8) -> Option<Move> {
    game.state()
        .cells()
        .iter()
        .position(|&tile| tile == label)
        .map(|ix| Move::new(ix / GRID_SIZE, ix % GRID_SIZE))
}

pub fn run<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<()> {
    let solver = Solver::new(config.search_limits());
    let delay = Duration::from_millis(config.autoplay_delay_ms);

    let mut game = Game::shuffled(config.shuffle_moves, rng);
    let mut started = Instant::now();
    let mut last_tick = Instant::now();
    let mut status = String::new();

    let mut term = TerminalGuard::enter()?;

    loop {
        draw(&mut term.out, &game, started.elapsed(), &status)?;

        if game.is_autoplaying() && last_tick.elapsed() >= delay {
            game.tick();
            last_tick = Instant::now();
            continue;
        }

        if !event::poll(POLL_INTERVAL).context("failed to poll terminal events")? {
            continue;
        }
        let Event::Key(key) = event::read().context("failed to read terminal event")? else {
            continue;
        };

        match action_for(key, &game) {
            Some(Action::Quit) => break,
            Some(Action::NewGame) => {
                game.new_game(config.shuffle_moves, rng);
                started = Instant::now();
                status.clear();
            }
            Some(Action::Hint) => {
                status = match game.hint() {
                    Some(mv) => {
                        format!("Hint: move tile {}", game.state().tile_at(mv.row, mv.col))
                    }
                    None => String::new(),
                };
            }
            Some(Action::Solve) => {
                status = match game.start_solve(&solver) {
                    Ok(0) => String::new(),
                    Ok(n) => {
                        last_tick = Instant::now();
                        format!("Solving in {} moves...", n)
                    }
                    Err(e) => {
                        warn!("solve failed: {}", e);
                        format!("No solution found: {}", e)
                    }
                };
            }
            Some(Action::Slide(mv)) => {
                if game.click(mv.row, mv.col).is_ok() {
                    status.clear();
                }
            }
            Some(Action::Tile(label)) => {
                if let Some(mv) = position_of(&game, label) {
                    if game.click(mv.row, mv.col).is_ok() {
                        status.clear();
                    }
                }
            }
            None => {}
        }
    }

    Ok(())
}

fn draw(out: &mut Stdout, game: &Game, elapsed: Duration, status: &str) -> Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0), Print("8-Puzzle Solver"))?;

    let hint = game.hint_move();
    let movable = game.movable_tiles();

    for row in 0..GRID_SIZE {
        queue!(out, MoveTo(2, 2 + row as u16))?;
        for col in 0..GRID_SIZE {
            let tile = game.state().tile_at(row, col);
            let here = Move::new(row, col);
            let text = if tile == EMPTY {
                "   ".to_string()
            } else {
                format!(" {} ", tile)
            };

            if hint == Some(here) {
                queue!(out, PrintStyledContent(text.black().on_yellow()))?;
            } else if movable.contains(&here) {
                queue!(out, PrintStyledContent(text.bold()))?;
            } else {
                queue!(out, Print(text))?;
            }
        }
    }

    let secs = elapsed.as_secs();
    queue!(
        out,
        MoveTo(0, 6),
        Print(format!("Moves: {}   Time: {:02}:{:02}", game.moves(), secs / 60, secs % 60)),
        MoveTo(0, 7),
        Print(status)
    )?;

    if game.is_solved() {
        queue!(out, MoveTo(0, 8), PrintStyledContent("Puzzle solved!".green()))?;
    }

    queue!(
        out,
        MoveTo(0, 10),
        Print("arrows/1-8 move  h hint  s solve  n new game  q quit")
    )?;

    out.flush()?;
    Ok(())
}
