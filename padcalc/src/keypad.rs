//! Keypad layout and button identities

/// Binary operators, in the order they appear down the right column.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Divide,
    Multiply,
    Subtract,
    Add,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Form written into the expression text.
    pub fn ascii(self) -> char {
        match self {
            Operator::Divide => '/',
            Operator::Multiply => '*',
            Operator::Subtract => '-',
            Operator::Add => '+',
        }
    }

    /// Form shown on buttons and in the total line.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Divide => "\u{00F7}",
            Operator::Multiply => "\u{00D7}",
            Operator::Subtract => "-",
            Operator::Add => "+",
        }
    }

    pub fn from_ascii(c: char) -> Option<Operator> {
        Operator::ALL.into_iter().find(|op| op.ascii() == c)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Button {
    Digit(u8),
    Point,
    Operator(Operator),
    Clear,
    Square,
    SquareRoot,
    Equals,
}

/// Visual family of a button; picks its fill and font.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Role {
    Digit,
    Operator,
    Equals,
}

impl Button {
    pub fn label(self) -> String {
        match self {
            Button::Digit(d) => d.to_string(),
            Button::Point => ".".to_string(),
            Button::Operator(op) => op.symbol().to_string(),
            Button::Clear => "C".to_string(),
            Button::Square => "x\u{00B2}".to_string(),
            Button::SquareRoot => "\u{221A}x".to_string(),
            Button::Equals => "=".to_string(),
        }
    }

    pub fn role(self) -> Role {
        match self {
            Button::Digit(_) | Button::Point => Role::Digit,
            Button::Equals => Role::Equals,
            Button::Operator(_) | Button::Clear | Button::Square | Button::SquareRoot => {
                Role::Operator
            }
        }
    }

    /// Button typed from the keyboard. Enter is handled as a key, not text.
    pub fn from_char(c: char) -> Option<Button> {
        match c {
            '0'..='9' => c.to_digit(10).map(|d| Button::Digit(d as u8)),
            '.' => Some(Button::Point),
            _ => Operator::from_ascii(c).map(Button::Operator),
        }
    }
}

/// Grid position of a button. Columns run 1..=4.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Cell {
    pub row: usize,
    pub column: usize,
    pub span: usize,
}

const fn at(row: usize, column: usize) -> Cell {
    Cell { row, column, span: 1 }
}

pub const ROWS: usize = 5;
pub const COLUMNS: usize = 4;

pub const KEYPAD: [(Button, Cell); 19] = [
    (Button::Clear, at(0, 1)),
    (Button::Square, at(0, 2)),
    (Button::SquareRoot, at(0, 3)),
    (Button::Operator(Operator::Divide), at(0, 4)),
    (Button::Digit(7), at(1, 1)),
    (Button::Digit(8), at(1, 2)),
    (Button::Digit(9), at(1, 3)),
    (Button::Operator(Operator::Multiply), at(1, 4)),
    (Button::Digit(4), at(2, 1)),
    (Button::Digit(5), at(2, 2)),
    (Button::Digit(6), at(2, 3)),
    (Button::Operator(Operator::Subtract), at(2, 4)),
    (Button::Digit(1), at(3, 1)),
    (Button::Digit(2), at(3, 2)),
    (Button::Digit(3), at(3, 3)),
    (Button::Operator(Operator::Add), at(3, 4)),
    (Button::Point, at(4, 1)),
    (Button::Digit(0), at(4, 2)),
    (Button::Equals, Cell { row: 4, column: 3, span: 2 }),
];

/// Buttons of each row, left to right.
pub fn rows() -> Vec<Vec<(Button, Cell)>> {
    let mut rows: Vec<Vec<(Button, Cell)>> = vec![Vec::new(); ROWS];
    for (button, cell) in KEYPAD {
        rows[cell.row].push((button, cell));
    }
    for row in &mut rows {
        row.sort_by_key(|(_, cell)| cell.column);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_row_covers_all_columns_once() {
        for (index, row) in rows().iter().enumerate() {
            let mut next = 1;
            for (_, cell) in row {
                assert_eq!(cell.row, index);
                assert_eq!(cell.column, next, "gap or overlap in row {}", index);
                next += cell.span;
            }
            assert_eq!(next, COLUMNS + 1, "row {} is not full", index);
        }
    }

    #[test]
    fn every_digit_appears_once() {
        for d in 0..=9u8 {
            let count = KEYPAD.iter().filter(|(b, _)| *b == Button::Digit(d)).count();
            assert_eq!(count, 1, "digit {}", d);
        }
    }

    #[test]
    fn operators_fill_right_column_in_order() {
        let column: Vec<Button> = rows()
            .iter()
            .take(4)
            .map(|row| row[row.len() - 1].0)
            .collect();
        let expected: Vec<Button> = Operator::ALL.into_iter().map(Button::Operator).collect();
        assert_eq!(column, expected);
    }

    #[test]
    fn labels_use_display_symbols() {
        assert_eq!(Button::Operator(Operator::Divide).label(), "÷");
        assert_eq!(Button::Operator(Operator::Multiply).label(), "×");
        assert_eq!(Button::Square.label(), "x²");
        assert_eq!(Button::SquareRoot.label(), "√x");
        assert_eq!(Button::Digit(7).label(), "7");
    }

    #[test]
    fn keyboard_characters_map_to_buttons() {
        assert_eq!(Button::from_char('5'), Some(Button::Digit(5)));
        assert_eq!(Button::from_char('.'), Some(Button::Point));
        assert_eq!(Button::from_char('*'), Some(Button::Operator(Operator::Multiply)));
        assert_eq!(Button::from_char('/'), Some(Button::Operator(Operator::Divide)));
        assert_eq!(Button::from_char('='), None);
        assert_eq!(Button::from_char('x'), None);
    }

    #[test]
    fn roles_pick_button_family() {
        assert_eq!(Button::Point.role(), Role::Digit);
        assert_eq!(Button::Clear.role(), Role::Operator);
        assert_eq!(Button::Equals.role(), Role::Equals);
    }
}
