use crate::{Color, Square};

const fn full_mask(n: usize) -> u64 {
    if n * n >= 64 {
        u64::MAX
    } else {
        (1 << (n * n)) - 1
    }
}

const fn column_mask(n: usize, column: usize) -> u64 {
    let mut mask = 0;
    let mut y = 0;
    while y < n {
        mask |= 1 << (y * n + column);
        y += 1;
    }
    mask
}

/// Two bitboards, one per color. Bit `y * N + x` is the square `(x, y)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Board<const N: usize> {
    black: u64,
    white: u64,
}

impl<const N: usize> Board<N> {
    const VALID_WIDTH: () = assert!(
        N % 2 == 0 && N >= 4 && N <= 8,
        "board width must be even and between 4 and 8"
    );

    pub(crate) const FULL: u64 = full_mask(N);
    /// Every square except the leftmost column.
    pub(crate) const NOT_WEST: u64 = Self::FULL & !column_mask(N, 0);
    /// Every square except the rightmost column.
    pub(crate) const NOT_EAST: u64 = Self::FULL & !column_mask(N, N - 1);

    pub fn empty_board() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_WIDTH;
        Board { black: 0, white: 0 }
    }

    /// Standard opening: white on the main diagonal of the centre.
    pub fn start() -> Self {
        let h = (N / 2) as u8;
        let mut board = Self::empty_board();
        board.set(Square::new(h - 1, h - 1), Some(Color::White));
        board.set(Square::new(h, h), Some(Color::White));
        board.set(Square::new(h, h - 1), Some(Color::Black));
        board.set(Square::new(h - 1, h), Some(Color::Black));
        board
    }

    pub fn get(&self, square: Square) -> Option<Color> {
        if !square.on_board::<N>() {
            return None;
        }
        let bit = square.bit::<N>();
        if self.black & bit != 0 {
            Some(Color::Black)
        } else if self.white & bit != 0 {
            Some(Color::White)
        } else {
            None
        }
    }

    pub fn set(&mut self, square: Square, disc: Option<Color>) {
        debug_assert!(square.on_board::<N>());
        let bit = square.bit::<N>();
        self.black &= !bit;
        self.white &= !bit;
        match disc {
            Some(Color::Black) => self.black |= bit,
            Some(Color::White) => self.white |= bit,
            None => {}
        }
    }

    pub fn discs(&self, color: Color) -> u64 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub(crate) fn discs_mut(&mut self, color: Color) -> &mut u64 {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    pub fn empty(&self) -> u64 {
        Self::FULL & !(self.black | self.white)
    }

    pub fn count(&self, color: Color) -> u32 {
        self.discs(color).count_ones()
    }

    pub fn full(&self) -> bool {
        self.empty() == 0
    }

    /// Iterate over rows top to bottom, each row left to right.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Option<Color>> + '_> + '_ {
        (0..N).map(move |y| (0..N).map(move |x| self.get(Square::new(x as u8, y as u8))))
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::{Color, Square};

    #[test]
    fn masks() {
        assert_eq!(Board::<8>::FULL, u64::MAX);
        assert_eq!(Board::<4>::FULL, 0xffff);
        assert_eq!(Board::<4>::NOT_WEST, 0xeeee);
        assert_eq!(Board::<4>::NOT_EAST, 0x7777);
    }

    #[test]
    fn start_position() {
        let board = Board::<6>::start();
        assert_eq!(board.get(Square::new(2, 2)), Some(Color::White));
        assert_eq!(board.get(Square::new(3, 3)), Some(Color::White));
        assert_eq!(board.get(Square::new(3, 2)), Some(Color::Black));
        assert_eq!(board.get(Square::new(2, 3)), Some(Color::Black));
        assert_eq!(board.count(Color::Black), 2);
        assert_eq!(board.count(Color::White), 2);
        assert_eq!(board.empty().count_ones(), 32);
    }

    #[test]
    fn set_overwrites() {
        let mut board = Board::<4>::start();
        board.set(Square::new(1, 1), Some(Color::Black));
        assert_eq!(board.get(Square::new(1, 1)), Some(Color::Black));
        assert_eq!(board.count(Color::White), 1);
        board.set(Square::new(1, 1), None);
        assert_eq!(board.get(Square::new(1, 1)), None);
    }
}
