use crate::game::{EndReason, Point, Snapshot};

pub const BORDER: char = '#';
pub const SNAKE_HEAD: char = '@';
pub const SNAKE_BODY: char = 'o';
pub const FOOD: char = '*';
pub const EMPTY: char = ' ';

pub const CONTROLS_HINT: &str = "Use Arrow Keys to move | Q to quit";
pub const GAME_OVER_HINT: &str = "*** GAME OVER! Press R to restart or Q to quit ***";
pub const BOARD_FILLED_HINT: &str = "*** BOARD FILLED, YOU WIN! Press R to restart or Q to quit ***";

/// Lay a snapshot out as rows of glyphs, border included
pub fn draw_board(snapshot: &Snapshot) -> Vec<Vec<char>> {
    let width = snapshot.width.max(0) as usize;
    let height = snapshot.height.max(0) as usize;

    let mut grid: Vec<Vec<char>> = (0..height)
        .map(|y| {
            (0..width)
                .map(|x| {
                    if y == 0 || y == height - 1 || x == 0 || x == width - 1 {
                        BORDER
                    } else {
                        EMPTY
                    }
                })
                .collect()
        })
        .collect();

    for (i, segment) in snapshot.snake.iter().enumerate() {
        let glyph = if i == 0 { SNAKE_HEAD } else { SNAKE_BODY };
        put(&mut grid, *segment, glyph);
    }
    put(&mut grid, snapshot.food, FOOD);

    grid
}

/// Score line, controls hint and, once the game ended, how to continue
pub fn status_lines(snapshot: &Snapshot) -> Vec<String> {
    let mut lines = vec![format!("Score: {}", snapshot.score), CONTROLS_HINT.to_string()];

    if snapshot.game_over {
        let hint = match snapshot.end {
            Some(EndReason::BoardFilled) => BOARD_FILLED_HINT,
            _ => GAME_OVER_HINT,
        };
        lines.push(String::new());
        lines.push(hint.to_string());
    }

    lines
}

fn put(grid: &mut [Vec<char>], pos: Point, glyph: char) {
    let (Ok(x), Ok(y)) = (usize::try_from(pos.x), usize::try_from(pos.y)) else {
        return;
    };
    if let Some(cell) = grid.get_mut(y).and_then(|row| row.get_mut(x)) {
        *cell = glyph;
    }
}
