//! Unit tests for mow-mower.

use mow_core::{Cell, Heading, Move, MowerId};
use mow_lawn::Lawn;

use crate::{MowTally, Mower, StepOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn mower(x: i32, y: i32, heading: Heading, program: &str) -> Mower {
    Mower::new(MowerId(0), Cell::new(x, y), heading)
        .with_program(Move::parse_program(program).unwrap())
}

// ── Target computation ────────────────────────────────────────────────────────

#[cfg(test)]
mod target {
    use super::*;

    #[test]
    fn forward_and_backward_per_heading() {
        let cases = [
            ((0, 0), Heading::North, Move::StepForward,  (0, 1)),
            ((0, 1), Heading::North, Move::StepBackward, (0, 0)),
            ((0, 0), Heading::East,  Move::StepForward,  (1, 0)),
            ((1, 0), Heading::East,  Move::StepBackward, (0, 0)),
            ((0, 0), Heading::West,  Move::StepForward,  (-1, 0)),
            ((0, 0), Heading::West,  Move::StepBackward, (1, 0)),
            ((0, 0), Heading::South, Move::StepForward,  (0, -1)),
            ((0, 0), Heading::South, Move::StepBackward, (0, 1)),
        ];
        for (i, ((x, y), heading, mv, want)) in cases.into_iter().enumerate() {
            let m = Mower::new(MowerId(0), Cell::new(x, y), heading);
            assert_eq!(m.target(mv), Some(Cell::from(want)), "case #{i}");
        }
    }

    #[test]
    fn rotation_targets_current_cell() {
        let m = Mower::new(MowerId(0), Cell::new(4, 4), Heading::East);
        assert_eq!(m.target(Move::RotateLeft), Some(Cell::new(4, 4)));
    }

    #[test]
    fn overflow_has_no_target() {
        let m = Mower::new(MowerId(0), Cell::new(i32::MAX, 0), Heading::East);
        assert_eq!(m.target(Move::StepForward), None);
    }
}

// ── Rotation ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod rotation {
    use super::*;

    #[test]
    fn rotations_never_touch_the_lawn() {
        let lawn = Lawn::new(1, 1);
        let mut m = mower(0, 0, Heading::North, "LLRRRL");
        m.execute(&lawn);
        assert_eq!(m.heading(), Heading::North);
        assert_eq!(m.position(), Cell::new(0, 0));
        assert_eq!(lawn.plot_count(), 0);
    }

    #[test]
    fn left_right_pairs_restore_heading() {
        let lawn = Lawn::new(0, 0);
        for h in Heading::ALL {
            let mut m = mower(0, 0, h, "LR");
            m.execute(&lawn);
            assert_eq!(m.heading(), h);

            let mut m = mower(0, 0, h, "RL");
            m.execute(&lawn);
            assert_eq!(m.heading(), h);
        }
    }
}

// ── Translation ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod translation {
    use super::*;

    #[test]
    fn forward_then_backward_returns_home() {
        let lawn = Lawn::new(5, 5);
        for h in Heading::ALL {
            let mut m = mower(2, 2, h, "FB");
            m.execute(&lawn);
            assert_eq!(m.position(), Cell::new(2, 2), "heading {h}");
            assert_eq!(m.heading(), h, "translations never rotate");
        }
    }

    #[test]
    fn reference_program() {
        let lawn = Lawn::new(2, 2);
        let mut m = mower(0, 0, Heading::North, "RFLFLFLFB");
        let tally = m.execute(&lawn);

        assert_eq!(m.position(), Cell::new(0, 1));
        assert_eq!(m.heading(), Heading::South);
        assert_eq!(tally.moves, 5);
        assert_eq!(tally.rotations, 4);
        assert_eq!(tally.steps(), 9);
    }

    #[test]
    fn classic_two_mower_programs() {
        let lawn = Lawn::new(5, 5);

        let mut a = mower(1, 2, Heading::North, "LFLFLFLFF");
        a.execute(&lawn);
        assert_eq!(a.to_string(), "1 3 N");

        let mut b = mower(3, 3, Heading::East, "FFRFFRFRRF");
        b.execute(&lawn);
        assert_eq!(b.to_string(), "5 1 E");
    }

    #[test]
    fn stays_put_at_lawn_boundary() {
        let lawn = Lawn::new(0, 0);
        let mut m = mower(0, 0, Heading::North, "F");
        let tally = m.execute(&lawn);
        assert_eq!(m.position(), Cell::new(0, 0));
        assert_eq!(tally.out_of_bounds, 1);
    }

    #[test]
    fn pushes_against_edge_without_moving() {
        let lawn = Lawn::new(3, 3);
        let mut m = mower(3, 3, Heading::East, "FFFLFFFF");
        m.execute(&lawn);
        assert_eq!(m.position(), Cell::new(3, 3));
        assert_eq!(m.heading(), Heading::North);
    }

    #[test]
    fn out_of_lawn_start_can_only_move_inside() {
        let lawn = Lawn::new(2, 2);
        let mut m = mower(-1, 1, Heading::East, "BF");
        let mut outcomes = Vec::new();
        while let Some(o) = m.step(&lawn) {
            outcomes.push(o);
        }
        assert_eq!(outcomes, vec![StepOutcome::OutOfBounds, StepOutcome::Moved(Cell::new(0, 1))]);
    }

    #[test]
    fn overflowing_step_is_out_of_bounds() {
        let lawn = Lawn::new(u32::MAX, 0);
        let mut m = mower(i32::MAX, 0, Heading::East, "F");
        assert_eq!(m.step(&lawn), Some(StepOutcome::OutOfBounds));
        assert_eq!(m.position(), Cell::new(i32::MAX, 0));
    }

    #[test]
    fn moved_plot_is_released_after_commit() {
        let lawn = Lawn::new(2, 2);
        let mut m = mower(0, 0, Heading::North, "F");
        m.execute(&lawn);
        assert_eq!(m.position(), Cell::new(0, 1));
        assert!(!lawn.is_held(Cell::new(0, 1)), "resting cell must not stay locked");
        assert!(!lawn.is_held(Cell::new(0, 0)));
    }

    #[test]
    fn held_target_is_skipped_without_retry() {
        let lawn = Lawn::new(2, 2);
        let blocked = Cell::new(0, 1);
        assert!(lawn.try_acquire(blocked));

        let mut m = mower(0, 0, Heading::North, "FF");
        assert_eq!(m.step(&lawn), Some(StepOutcome::Contended(blocked)));
        assert_eq!(m.position(), Cell::new(0, 0));

        lawn.release(blocked).unwrap();
        assert_eq!(m.step(&lawn), Some(StepOutcome::Moved(blocked)));
        assert_eq!(m.step(&lawn), None);
    }
}

// ── Program control ───────────────────────────────────────────────────────────

#[cfg(test)]
mod program {
    use super::*;

    #[test]
    fn cursor_advances_to_terminal_state() {
        let lawn = Lawn::new(5, 5);
        let mut m = mower(0, 0, Heading::North, "FRF");
        assert_eq!(m.cursor(), 0);
        assert!(!m.is_finished());

        m.step(&lawn);
        assert_eq!(m.cursor(), 1);
        m.execute(&lawn);
        assert_eq!(m.cursor(), 3);
        assert!(m.is_finished());
        assert_eq!(m.step(&lawn), None);
    }

    #[test]
    fn execute_with_reports_every_instruction() {
        let lawn = Lawn::new(1, 1);
        let mut m = mower(0, 0, Heading::North, "FFRB");
        assert_eq!(m.next_move(), Some(Move::StepForward));

        let mut seen = Vec::new();
        let tally = m.execute_with(&lawn, |mv, outcome| seen.push((mv, outcome)));

        assert_eq!(seen, vec![
            (Move::StepForward,  StepOutcome::Moved(Cell::new(0, 1))),
            (Move::StepForward,  StepOutcome::OutOfBounds),
            (Move::RotateRight,  StepOutcome::Rotated(Heading::East)),
            (Move::StepBackward, StepOutcome::OutOfBounds),
        ]);
        assert_eq!(tally.out_of_bounds, 2);
        assert_eq!(m.next_move(), None);
    }

    #[test]
    fn execute_with_resumes_after_manual_steps() {
        let lawn = Lawn::new(2, 2);
        let mut m = mower(0, 0, Heading::North, "RFLF");
        assert_eq!(m.step(&lawn), Some(StepOutcome::Rotated(Heading::East)));
        assert_eq!(m.cursor(), 1);

        let mut seen = Vec::new();
        let tally = m.execute_with(&lawn, |mv, outcome| seen.push((mv, outcome)));

        assert_eq!(seen, vec![
            (Move::StepForward, StepOutcome::Moved(Cell::new(1, 0))),
            (Move::RotateLeft,  StepOutcome::Rotated(Heading::North)),
            (Move::StepForward, StepOutcome::Moved(Cell::new(1, 1))),
        ]);
        assert_eq!(tally.steps(), 3);
        assert_eq!(m.cursor(), 4);
        assert!(m.is_finished());
        assert_eq!(m.step(&lawn), None);
    }

    #[test]
    fn empty_program_is_finished() {
        let lawn = Lawn::new(1, 1);
        let mut m = Mower::new(MowerId(3), Cell::new(1, 1), Heading::West);
        assert!(m.is_finished());
        assert_eq!(m.execute(&lawn), MowTally::default());
        assert_eq!(m.to_string(), "1 1 W");
    }

    #[test]
    fn instruct_rewinds_cursor() {
        let lawn = Lawn::new(5, 5);
        let mut m = mower(0, 0, Heading::North, "F");
        m.execute(&lawn);
        m.instruct(vec![Move::StepForward, Move::StepForward]);
        assert_eq!(m.cursor(), 0);
        m.execute(&lawn);
        assert_eq!(m.position(), Cell::new(0, 3));
    }

    #[test]
    fn tally_accumulates() {
        let mut total = MowTally::default();
        total += MowTally { rotations: 1, moves: 2, contended: 3, out_of_bounds: 4 };
        total += MowTally { rotations: 1, moves: 0, contended: 0, out_of_bounds: 1 };
        assert_eq!(total.steps(), 12);
        assert_eq!(total.out_of_bounds, 5);
        assert!(StepOutcome::OutOfBounds.is_rejected());
        assert!(!StepOutcome::Moved(Cell::new(0, 0)).is_rejected());
    }
}
