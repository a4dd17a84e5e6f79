use twinsolve_core::{Digit, DigitSet, Grid, House, Position};

use super::{BoxedRule, Rule};

const NAME: &str = "hidden single";

/// Rule Three: a digit with only one possible home in a house goes there.
///
/// For every empty cell and every candidate digit still possible there, the
/// rule asks whether that digit is possible nowhere else within the cell's
/// row, column, or block; any one of the three scopes qualifying is enough.
/// The cell may well still list several candidates; uniqueness within a
/// house, not singleton-ness, is what distinguishes a hidden single from a
/// naked one.
///
/// The whole pass is evaluated against a snapshot taken on entry: a solved
/// cell contributes only its own digit, an empty cell its candidate set.
/// Candidate sets of solved cells go stale (nothing prunes a cell's own set
/// after it is filled) and must not be consulted, or a digit long since
/// placed elsewhere would keep vetoing genuine singles in its houses. Digits
/// placed earlier in the same pass neither enable nor veto later placements,
/// so the result is independent of cell scan order.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` rule.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }

    /// Returns `true` if `digit` appears in no snapshot candidate set of the
    /// house other than the one at `pos`.
    fn unique_in_house(
        snapshot: &[DigitSet; 81],
        house: House,
        pos: Position,
        digit: Digit,
    ) -> bool {
        house
            .positions()
            .iter()
            .all(|other| *other == pos || !snapshot[other.index()].contains(digit))
    }
}

impl Rule for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedRule {
        Box::new(*self)
    }

    fn apply(&self, grid: &mut Grid) -> usize {
        let snapshot: [DigitSet; 81] = std::array::from_fn(|i| {
            let pos = Position::from_index(i);
            match grid.digit(pos) {
                Some(digit) => DigitSet::from_elem(digit),
                None => grid.candidates(pos),
            }
        });

        let mut filled = 0;
        for pos in Position::ALL {
            if grid.digit(pos).is_some() {
                continue;
            }
            'candidates: for digit in snapshot[pos.index()] {
                for house in House::houses_of(pos) {
                    if Self::unique_in_house(&snapshot, house, pos, digit) {
                        grid.set_digit(pos, digit);
                        filled += 1;
                        // First qualifying digit wins; the cell is filled now
                        break 'candidates;
                    }
                }
            }
        }
        filled
    }
}
