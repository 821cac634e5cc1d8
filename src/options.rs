use crate::Direction;

const DEFAULT_PAYLOAD: bool = false;
const DEFAULT_EACH_LINE: bool = false;

#[derive(Debug, Clone)]
pub struct Options {
    /// Which layout the input is expected in.
    pub direction: Direction,
    /// Whether to print the reassembled verifier payload instead of the condition and statement.
    pub payload: bool,
    /// Whether every non-blank line of the input is transcoded on its own.
    /// If `false`, the whole input is a single line whose statement may span several lines.
    /// Input without any non-blank line is still one unit, so it fails like in single-line mode.
    pub each_line: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            payload: DEFAULT_PAYLOAD,
            each_line: DEFAULT_EACH_LINE,
        }
    }
}

impl Options {
    /// Splits the input into the units that are transcoded independently, together with their
    /// 1-based line numbers.
    pub fn units<'a>(&self, input: &'a str) -> Vec<(usize, &'a str)> {
        if self.each_line {
            let units: Vec<_> = input
                .lines()
                .enumerate()
                .filter(|(_, l)| !l.trim().is_empty())
                .map(|(i, l)| (i + 1, l))
                .collect();
            if !units.is_empty() {
                return units;
            }
        }
        vec![(1, input)]
    }
}
