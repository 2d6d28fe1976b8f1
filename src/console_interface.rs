use crate::core::{BoundedGrid, Cell, Direction, Element, GameState, Maze, SharedGameState, Tile, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

fn parse_cell(ch: char) -> Cell {
    match ch {
        '#' => Cell::WALL,
        ' ' => Cell::FLOOR,
        '.' => Cell::GOAL,
        '$' => Cell::new(Tile::Floor, Element::Box),
        '*' => Cell::new(Tile::Goal, Element::Box),
        '@' => Cell::new(Tile::Floor, Element::Player),
        '+' => Cell::new(Tile::Goal, Element::Player),
        _ => Cell::VOID,
    }
}

fn render_cell(cell: Cell) -> char {
    match (cell.get_tile(), cell.get_element()) {
        (Tile::Void, _) => '_',
        (Tile::Wall, _) => '#',
        (Tile::Floor, Element::None) => ' ',
        (Tile::Floor, Element::Box) => '$',
        (Tile::Floor, Element::Player) => '@',
        (Tile::Goal, Element::None) => '.',
        (Tile::Goal, Element::Box) => '*',
        (Tile::Goal, Element::Player) => '+',
    }
}

/// Reads an ASCII level. Blank lines are skipped and short rows are padded
/// with void.
pub fn parse_level(s: &str) -> Maze {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for line in s.lines() {
        if line.is_empty() {
            continue;
        }
        rows.push(line.chars().map(parse_cell).collect());
    }

    let max_width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
    for row in rows.iter_mut() {
        row.resize(max_width, Cell::VOID);
    }

    BoundedGrid::from_rows(rows).unwrap_or_else(|| BoundedGrid::new_with_size(0, 0, Cell::VOID))
}

pub fn render_maze_to_string(maze: &Maze) -> String {
    let mut result = String::new();
    for row in maze.rows() {
        result.extend(row.iter().map(|&cell| render_cell(cell)));
        result.push('\n');
    }
    result
}

pub fn render_game_to_string(shared: &SharedGameState, game: &GameState) -> String {
    render_maze_to_string(&shared.to_maze(game))
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `run`, then `cleanup` whether or not `run` failed. The error from
/// `run` wins over one from `cleanup`.
pub fn run_then_cleanup<T, R, C>(run: R, cleanup: C) -> Result<T, Box<dyn std::error::Error>>
where
    R: FnOnce() -> Result<T, Box<dyn std::error::Error>>,
    C: FnOnce() -> Result<(), Box<dyn std::error::Error>>,
{
    let result = run();
    let cleaned = cleanup();
    let value = result?;
    cleaned?;
    Ok(value)
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    shared: &SharedGameState,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        let placed = shared.count_boxes_on_goals(&state.game.boxes);
        let title = match state.par {
            Some(par) => format!(
                "Sokoban | {}/{} placed | {} moves, solver found {}",
                placed, shared.total_targets(), state.moves, par
            ),
            None => format!("Sokoban | {}/{} placed | {} moves", placed, shared.total_targets(), state.moves),
        };
        let game_text = render_game_to_string(shared, &state.game).replace('_', " ");
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        let instructions = if state.won {
            "You Win! Press any key to quit."
        } else {
            "Controls: WASD or Arrow keys to move, R to restart, Q to quit"
        };

        let instructions = if let Some(err) = &state.error {
            format!("{} | Error: {}", instructions, err)
        } else {
            instructions.to_string()
        };

        let instructions = if let Some(change_type) = &state.last_change {
            format!("{} | Last: {:?}", instructions, change_type)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Restart,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Restart,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Up))
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Down))
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Left))
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::UserAction(UserAction::Move(Direction::Right))
                }
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::assert_eq_text;

    #[test]
    fn short_rows_are_padded_with_void() {
        let maze = parse_level("\n####\n#@\n\n#.$#\n");
        assert_eq!(maze.height(), 3);
        assert_eq!(maze.width(), 4);
        let rendered = render_maze_to_string(&maze);
        assert_eq_text!(rendered.as_str(), "####\n#@__\n#.$#\n");
    }

    #[test]
    fn every_symbol_survives_a_render() {
        let level = "_#. $*@+\n";
        let rendered = render_maze_to_string(&parse_level(level));
        assert_eq_text!(rendered.as_str(), level);
    }

    #[test]
    fn cleanup_runs_when_play_fails() {
        let mut cleaned = false;
        let result: Result<(), _> = run_then_cleanup(
            || Err("input failed".into()),
            || {
                cleaned = true;
                Ok(())
            },
        );
        assert!(cleaned);
        assert_eq!(result.unwrap_err().to_string(), "input failed");

        let result = run_then_cleanup(|| Ok(7), || Err("restore failed".into()));
        assert_eq!(result.unwrap_err().to_string(), "restore failed");
    }

    #[test]
    fn empty_level_is_an_empty_maze() {
        let maze = parse_level("\n\n");
        assert!(maze.is_empty());
        assert_eq!(render_maze_to_string(&maze), "");
    }
}
