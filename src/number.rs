use crate::cursor::{Cursor, Step};

/// Where the scanner is inside the current number.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    /// `-` consumed; the first integer digit is mandatory.
    Minus,

    /// A leading `0` consumed; the integer part is closed.
    Zero,

    /// Inside a `1-9` led digit run.
    Integer,

    /// `.` consumed; the first fraction digit is mandatory.
    FracDot,

    /// Inside the fraction digits.
    Frac,

    /// `e`/`E` consumed; a sign or the first exponent digit is next.
    ExpMark,

    /// Exponent sign consumed; the first exponent digit is mandatory.
    ExpSign,

    /// Inside the exponent digits.
    Exp,
}

/// A resumable scanner for JSON numbers. A number has no closing delimiter:
/// it ends at the first byte that cannot extend it, and that byte stays
/// unconsumed for the enclosing production. A chunk that runs out while the
/// number could still continue therefore suspends, even if the digits seen
/// so far already form a complete number; the one-byte lookahead arrives
/// with the next chunk or with the caller's end-of-input signal.
///
/// On `Err(())` the cursor is parked at the offending byte.
pub(crate) struct NumberScanner {
    phase: Phase,
}

impl NumberScanner {
    pub fn new() -> Self {
        NumberScanner { phase: Phase::Zero }
    }

    /// Start scanning at a fresh number. The caller has consumed `first`,
    /// which is `-` or a digit.
    pub fn begin(&mut self, first: u8) {
        self.phase = match first {
            b'-' => Phase::Minus,
            b'0' => Phase::Zero,
            _ => Phase::Integer,
        };
    }

    pub fn scan(&mut self, cur: &mut Cursor<'_>) -> Result<Step, ()> {
        loop {
            let Some(b) = cur.peek() else {
                return Ok(Step::NeedMoreInput);
            };
            match self.phase {
                Phase::Minus => match b {
                    b'0' => self.shift(cur, Phase::Zero),
                    b'1'..=b'9' => self.shift(cur, Phase::Integer),
                    _ => return Err(()),
                },
                Phase::Zero => match b {
                    b'.' => self.shift(cur, Phase::FracDot),
                    b'e' | b'E' => self.shift(cur, Phase::ExpMark),
                    _ => return Ok(Step::Complete),
                },
                Phase::Integer => match b {
                    b'0'..=b'9' => cur.bump(),
                    b'.' => self.shift(cur, Phase::FracDot),
                    b'e' | b'E' => self.shift(cur, Phase::ExpMark),
                    _ => return Ok(Step::Complete),
                },
                Phase::FracDot => match b {
                    b'0'..=b'9' => self.shift(cur, Phase::Frac),
                    _ => return Err(()),
                },
                Phase::Frac => match b {
                    b'0'..=b'9' => cur.bump(),
                    b'e' | b'E' => self.shift(cur, Phase::ExpMark),
                    _ => return Ok(Step::Complete),
                },
                Phase::ExpMark => match b {
                    b'+' | b'-' => self.shift(cur, Phase::ExpSign),
                    b'0'..=b'9' => self.shift(cur, Phase::Exp),
                    _ => return Err(()),
                },
                Phase::ExpSign => match b {
                    b'0'..=b'9' => self.shift(cur, Phase::Exp),
                    _ => return Err(()),
                },
                Phase::Exp => match b {
                    b'0'..=b'9' => cur.bump(),
                    _ => return Ok(Step::Complete),
                },
            }
        }
    }

    /// Whether the digits consumed so far form a complete number, should the
    /// input end here.
    pub fn is_terminable(&self) -> bool {
        matches!(
            self.phase,
            Phase::Zero | Phase::Integer | Phase::Frac | Phase::Exp
        )
    }

    fn shift(&mut self, cur: &mut Cursor<'_>, next: Phase) {
        cur.bump();
        self.phase = next;
    }
}
