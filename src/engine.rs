//! Generation advance.
//!
//! Every call computes the whole next generation into the scratch grid, counting cells that change
//! state along the way, and only then makes it current.

use tracing::trace;

use crate::ChangeCount;
use crate::generations::Generations;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

/// Advance by one generation under Conway's rules. Returns the number of cells that changed state.
pub fn advance<const R: usize, const C: usize>(gens: &mut Generations<R, C>) -> ChangeCount {
    advance_with(&B3S23, gens)
}

/// Advance by one generation under `rules`. Returns the number of cells that changed state.
pub fn advance_with<const R: usize, const C: usize>(
    rules: &RuleSet,
    gens: &mut Generations<R, C>,
) -> ChangeCount {
    let mut changes = 0;

    {
        let (cur, next) = gens.split();
        let dst = next.rows_mut();

        for (row, cells) in cur.rows().iter().enumerate() {
            for (col, &alive) in cells.iter().enumerate() {
                let n = cur.live_neighbors(row, col);
                let state = rules.next_state(alive, n);

                dst[row][col] = state;

                if state != alive {
                    changes += 1;
                }
            }
        }
    }

    gens.swap();

    trace!(changes, "advanced generation");

    changes
}
