//! Property tests over random positions and random play.

use arbiter_core::{Color, Direction, Movement, Position, Role};
use arbiter_engine::rules::attacks;
use arbiter_engine::{placement, Board, Game};
use proptest::prelude::*;

fn any_position() -> impl Strategy<Value = Position> {
    (1u8..=8, 1u8..=8).prop_map(|(file, rank)| Position::new(file, rank).unwrap())
}

/// Plays `picks.len()` moves (or until mate), choosing among the legal moves
/// by index.
fn random_game(picks: &[usize]) -> Game {
    let mut game = Game::new();
    for &pick in picks {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let (source, destination) = moves[pick % moves.len()];
        game.apply_move(source, destination).unwrap();
    }
    game
}

/// Builds a board from explicit (square, placement letter) pairs.
fn board_with(pieces: &[(Position, char)]) -> Board {
    let mut rows = Vec::new();
    for rank in (1..=8).rev() {
        let row: String = (1..=8)
            .map(|file| {
                pieces
                    .iter()
                    .find(|(p, _)| p.file() == file && p.rank() == rank)
                    .map_or('1', |&(_, c)| c)
            })
            .collect();
        rows.push(row);
    }
    placement::decode(&rows.join("/"))
}

/// Squares from `source` to the edge in `direction` on an empty board.
fn distance_to_edge(source: Position, direction: Direction) -> usize {
    let (df, dr) = direction.delta();
    let steps = |coord: u8, delta: i8| match delta {
        d if d > 0 => (Position::MAX - coord) as usize,
        d if d < 0 => (coord - Position::MIN) as usize,
        _ => usize::MAX,
    };
    steps(source.file(), df).min(steps(source.rank(), dr))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sliding_routes_run_to_the_edge(source in any_position(), role in prop::sample::select(vec![Role::Rook, Role::Bishop, Role::Queen])) {
        for route in role.candidate_routes(Color::White, source) {
            prop_assert_eq!(route.len(), distance_to_edge(source, route.direction()));
        }
    }

    #[test]
    fn stepping_routes_are_at_most_one_square(source in any_position(), role in prop::sample::select(vec![Role::King, Role::Knight])) {
        prop_assert_eq!(role.shift_pattern(Color::Black).movement, Movement::Stepping);
        for route in role.candidate_routes(Color::Black, source) {
            prop_assert!(route.len() <= 1);
        }
    }

    #[test]
    fn slider_stops_at_first_obstruction(source in any_position(), blocker in any_position()) {
        prop_assume!(source != blocker);
        let board = board_with(&[(source, 'Q'), (blocker, 'p')]);
        for route in Role::Queen.candidate_routes(Color::White, source) {
            let reachable = route
                .positions()
                .iter()
                .filter(|&&target| attacks::reachable_route(&board, source, target).is_some())
                .count();
            let expected = route
                .positions()
                .iter()
                .position(|&p| p == blocker)
                .map_or(route.len(), |i| i + 1);
            prop_assert_eq!(reachable, expected);
        }
    }

    #[test]
    fn placement_roundtrips_after_random_play(picks in prop::collection::vec(any::<usize>(), 0..40)) {
        let game = random_game(&picks);
        let board = *game.state().board();
        let encoded = placement::encode(&board);
        prop_assert_eq!(placement::decode(&encoded), board);
        prop_assert_eq!(placement::decode_strict(&encoded), Ok(board));
    }

    #[test]
    fn accepted_moves_never_leave_own_king_attacked(picks in prop::collection::vec(any::<usize>(), 1..30)) {
        let mut game = Game::new();
        for pick in picks {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let mover = game.turn();
            let (source, destination) = moves[pick % moves.len()];
            game.apply_move(source, destination).unwrap();
            let board: &Board = game.state().board();
            prop_assert_eq!(attacks::is_checked_by(board, mover.opposite()), Ok(false));
        }
    }

    #[test]
    fn rejected_moves_change_nothing(
        picks in prop::collection::vec(any::<usize>(), 0..20),
        source in any_position(),
        destination in any_position(),
    ) {
        let mut game = random_game(&picks);
        let legal = game.legal_moves().contains(&(source, destination));
        let before = game.placement();
        let turn = game.turn();
        let result = game.apply_move(source, destination);
        if legal {
            prop_assert!(result.is_ok());
        } else {
            prop_assert!(result.is_err());
            prop_assert_eq!(game.placement(), before);
            prop_assert_eq!(game.turn(), turn);
        }
    }
}
