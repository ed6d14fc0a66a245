// recorded game
pub const N: usize = othello::RECORDED_WIDTH;

// earliest ply analysed unless asked otherwise
pub const DEFAULT_TO_PLY: usize = 18;

// mtdf
pub const DEFAULT_GUESS: i32 = 0;
