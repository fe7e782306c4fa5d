use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use tictactoe_ai::{Board, Cell, Move, CELLS, SIZE};

/// Draws the board to stdout, labelling empty cells with the number used to play them
pub fn draw(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    stdout.queue(PrintStyledContent(style("\n".to_string())))?;
    for index in 0..CELLS {
        let mv = Move::new(index / SIZE, index % SIZE);
        let cell = board.cells()[index];

        let content = match cell {
            Cell::Empty => style(format!(" {} ", mv.cell_number())).with(Color::DarkGrey),
            Cell::X => style(" X ".to_string())
                .attribute(Attribute::Bold)
                .with(Color::Red),
            Cell::O => style(" O ".to_string())
                .attribute(Attribute::Bold)
                .with(Color::Yellow),
        };
        stdout.queue(PrintStyledContent(content.on(Color::DarkBlue)))?;

        if mv.column == SIZE - 1 {
            stdout.queue(PrintStyledContent(style("\n".to_string())))?;
        }
    }
    stdout.queue(PrintStyledContent(style("\n".to_string())))?;
    stdout.flush()?;
    Ok(())
}
