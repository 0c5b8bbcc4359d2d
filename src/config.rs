/// Width and height of the board.
pub const BOARD_SIZE: usize = 4;
/// Number of reserve stacks each player keeps off the board.
pub const RESERVE_SLOTS: usize = 3;
/// Number of distinct piece sizes.
pub const NUM_SIZES: usize = 4;

/// Glyphs by owner (player 1, player 2) and size (smallest first).
pub const GLYPHS: [[&str; NUM_SIZES]; 2] = [
    ["▫", "◇", "◯", "□"],
    ["▪", "◆", "●", "■"],
];

/// Rendering of a slot with no piece; same width as a padded glyph.
pub const EMPTY_CELL: &str = "   ";

/// Label printed in front of each storage row. Storage row 0 is the top
/// of the display and carries the highest label.
pub const ROW_LABELS: [char; BOARD_SIZE] = ['3', '2', '1', '0'];
/// Labels printed under each column, left to right.
pub const COLUMN_LABELS: [char; BOARD_SIZE] = ['0', '1', '2', '3'];

pub const CELL_DIVIDER: char = '|';
pub const CELL_RULE: &str = "───";
pub const RULE_JUNCTION: char = '┼';

/// Column header shown above the reserve stacks.
pub const RESERVE_HEADER: &str = "0   1   2 ";
/// Characters a player line adds after the name: the colon and three
/// space separated cells.
pub const PLAYER_LINE_SUFFIX: usize = 13;

pub const ORIGIN_PROMPT: &str =
    "Donnez le numéro de la pile (p) ou la position sur le plateau (x,y):";
pub const DESTINATION_PROMPT: &str = "Où voulez-vous placer votre gobelet (x,y):";
