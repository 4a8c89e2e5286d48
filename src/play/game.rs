use super::player::Player;
use super::rotation::*;
use crate::*;

/// The outcome of one completed game.
///
/// - `turns` — Turns taken, including turns by players with no chips
/// - `winner` — Seat of the only player left holding chips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Record {
    pub turns: Turns,
    pub winner: Position,
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{} wins after {} turns", self.winner, self.turns)
    }
}

/// One game of Left-Center-Right, from stake distribution to a single survivor.
///
/// A `Game` borrows the simulation's players, die, and random source for
/// its duration. Construction deals every player the stake and draws the
/// starting seat; [`step`](Self::step) plays one turn and
/// [`play`](Self::play) runs turns until one player holds chips.
///
/// # Turn
///
/// The actor rolls `min(stake, chips)` dice, fixed at the start of the
/// turn, and applies each outcome before the next roll. A player with no
/// chips rolls nothing but still uses up a turn. The actor then passes
/// to the next seat regardless.
///
/// There is no cap on game length.
#[derive(Debug)]
pub struct Game<'a, C: Chance> {
    seats: &'a mut [Player],
    die: &'a mut Die,
    chance: &'a mut C,
    stake: Chips,
    actor: Position,
    turns: Turns,
}

impl<'a, C: Chance> Game<'a, C> {
    /// Deals `stake` chips to every seat and picks the first actor uniformly.
    pub fn new(seats: &'a mut [Player], die: &'a mut Die, chance: &'a mut C, stake: Chips) -> Self {
        debug_assert!(seats.len() >= MIN_PLAYERS);
        debug_assert!(stake > 0);
        seats.iter_mut().for_each(|seat| seat.reset(stake));
        let actor = chance.seat(seats.len());
        Self {
            seats,
            die,
            chance,
            stake,
            actor,
            turns: 0,
        }
    }
    /// Plays turns until exactly one player holds chips.
    pub fn play(mut self) -> Record {
        while !self.is_over() {
            self.step();
        }
        let record = Record {
            turns: self.turns,
            winner: self.winner().expect("exactly one seat holds chips"),
        };
        log::trace!("{}", record);
        record
    }
    /// Plays one turn for the current actor and passes to the next seat.
    pub fn step(&mut self) {
        let rolls = self.rolls();
        for _ in 0..rolls {
            if !self.seats[self.actor].has_chips() {
                break;
            }
            let outcome = self.die.roll(&mut *self.chance);
            log::trace!("P{} rolls {}", self.actor, outcome);
            self.apply(outcome);
        }
        self.actor = after(self.actor, self.n());
        self.turns += 1;
    }
    /// Applies one rolled outcome to the current actor.
    pub fn apply(&mut self, outcome: Outcome) {
        let n = self.n();
        let actor = self.actor;
        match outcome {
            Outcome::Dot => {}
            Outcome::Center => self.seats[actor].discard(),
            Outcome::Left => {
                let (from, into) = pair_mut(&mut *self.seats, actor, before(actor, n));
                from.give(into);
            }
            Outcome::Right => {
                let (from, into) = pair_mut(&mut *self.seats, actor, after(actor, n));
                from.give(into);
            }
        }
    }
}

/// Public state accessors.
impl<'a, C: Chance> Game<'a, C> {
    /// Number of seats at the table.
    pub fn n(&self) -> usize {
        self.seats.len()
    }
    /// All seats in turn order.
    pub fn seats(&self) -> &[Player] {
        &*self.seats
    }
    /// Seat of the player about to act.
    pub fn actor(&self) -> Position {
        self.actor
    }
    /// Turns played so far.
    pub fn turns(&self) -> Turns {
        self.turns
    }
    /// Dice the current actor will roll this turn.
    pub fn rolls(&self) -> Chips {
        self.stake.min(self.seats[self.actor].chips())
    }
    /// Players still holding chips.
    pub fn alive(&self) -> usize {
        self.seats.iter().filter(|p| p.has_chips()).count()
    }
    /// Chips held across all seats. The pot holds the rest.
    pub fn total(&self) -> usize {
        self.seats.iter().map(|p| p.chips() as usize).sum()
    }
    /// Per-seat chip counts in turn order.
    pub fn chips(&self) -> Vec<Chips> {
        self.seats.iter().map(Player::chips).collect()
    }
    /// True once a single player holds every remaining chip.
    pub fn is_over(&self) -> bool {
        self.alive() == 1
    }
    /// The sole chip holder, once the game is over.
    pub fn winner(&self) -> Option<Position> {
        match self.is_over() {
            true => self.seats.iter().position(Player::has_chips),
            false => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn table(n: usize) -> Vec<Player> {
        (0..n).map(Player::from).collect()
    }

    #[test]
    fn new_game_deals_stake() {
        let ref mut seats = table(4);
        let ref mut die = Die::new();
        let ref mut script = Script::new(&[2], &[]);
        let game = Game::new(seats, die, script, STAKE);
        assert_eq!(game.chips(), vec![STAKE; 4]);
        assert_eq!(game.total(), 4 * STAKE as usize);
        assert_eq!(game.actor(), 2);
        assert_eq!(game.turns(), 0);
        assert!(!game.is_over());
        assert!(game.winner().is_none());
    }

    #[test]
    fn scripted_three_player_game() {
        let ref mut seats = table(3);
        let ref mut die = Die::new();
        let ref mut script = Script::new(
            &[1],
            &[
                LEFT, RIGHT, DOT, // P1
                CENTER, CENTER, LEFT, // P2
                CENTER, CENTER, CENTER, // P0
                CENTER, CENTER, // P1
                RIGHT,  // P2
            ],
        );
        let mut game = Game::new(seats, die, script, STAKE);
        let expected: [(Vec<Chips>, Position); 5] = [
            (vec![4, 1, 4], 2),
            (vec![4, 2, 1], 0),
            (vec![1, 2, 1], 1),
            (vec![1, 0, 1], 2),
            (vec![2, 0, 0], 0),
        ];
        for (turn, (chips, actor)) in expected.into_iter().enumerate() {
            assert!(!game.is_over());
            game.step();
            assert_eq!(game.chips(), chips, "after turn {}", turn + 1);
            assert_eq!(game.actor(), actor, "after turn {}", turn + 1);
        }
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(0));
        assert_eq!(game.turns(), 5);
        assert_eq!(die.last(), Some(Outcome::Right));
        assert!(script.is_spent());
    }

    #[test]
    fn scripted_game_record() {
        let ref mut seats = table(3);
        let ref mut die = Die::new();
        let ref mut script = Script::new(
            &[1],
            &[
                LEFT, RIGHT, DOT, CENTER, CENTER, LEFT, CENTER, CENTER, CENTER, CENTER, CENTER,
                RIGHT,
            ],
        );
        let record = Game::new(seats, die, script, STAKE).play();
        assert_eq!(record, Record { turns: 5, winner: 0 });
        assert!(seats[0].has_chips());
        assert!(!seats[1].has_chips());
        assert!(!seats[2].has_chips());
    }

    #[test]
    fn first_rolls_apply_in_order() {
        let ref mut seats = table(3);
        let ref mut die = Die::new();
        let ref mut script = Script::new(&[1], &[]);
        let mut game = Game::new(seats, die, script, STAKE);
        game.apply(Outcome::Left);
        assert_eq!(game.chips(), vec![4, 2, 3]);
        game.apply(Outcome::Right);
        assert_eq!(game.chips(), vec![4, 1, 4]);
        game.apply(Outcome::Dot);
        assert_eq!(game.chips(), vec![4, 1, 4]);
        game.apply(Outcome::Center);
        assert_eq!(game.chips(), vec![4, 0, 4]);
        assert_eq!(game.total(), 8);
    }

    #[test]
    fn empty_seat_still_takes_a_turn() {
        let ref mut seats = table(3);
        let ref mut die = Die::new();
        let ref mut script = Script::new(
            &[0],
            &[
                CENTER, CENTER, CENTER, // P0
                DOT, DOT, DOT, // P1
                DOT, DOT, DOT, // P2
            ],
        );
        let mut game = Game::new(seats, die, script, STAKE);
        for _ in 0..3 {
            game.step();
        }
        assert_eq!(game.chips(), vec![0, 3, 3]);
        assert_eq!(game.actor(), 0);
        assert_eq!(game.rolls(), 0);
        game.step();
        assert_eq!(game.chips(), vec![0, 3, 3]);
        assert_eq!(game.actor(), 1);
        assert_eq!(game.turns(), 4);
        assert!(script.is_spent());
    }

    #[test]
    fn rolls_capped_by_stake_and_chips() {
        let ref mut seats = table(2);
        let ref mut die = Die::new();
        let ref mut script = Script::new(&[0], &[LEFT, LEFT, DOT]);
        let mut game = Game::new(seats, die, script, STAKE);
        assert_eq!(game.rolls(), STAKE);
        game.step();
        assert_eq!(game.chips(), vec![1, 5]);
        assert_eq!(game.rolls(), STAKE);
    }

    #[test]
    fn heads_up_left_and_right_hit_the_same_seat() {
        let ref mut seats = table(2);
        let ref mut die = Die::new();
        let ref mut script = Script::new(&[0], &[]);
        let mut game = Game::new(seats, die, script, STAKE);
        game.apply(Outcome::Left);
        assert_eq!(game.chips(), vec![2, 4]);
        game.apply(Outcome::Right);
        assert_eq!(game.chips(), vec![1, 5]);
    }

    #[test]
    fn always_one_survivor() {
        let ref mut rng = SmallRng::seed_from_u64(0xDEADBEEF);
        let ref mut die = Die::new();
        for n in MIN_PLAYERS..=8 {
            let ref mut seats = table(n);
            for _ in 0..200 {
                let record = Game::new(seats, die, rng, STAKE).play();
                assert!(record.turns >= 1);
                assert!(record.winner < n);
                assert_eq!(seats.iter().filter(|p| p.has_chips()).count(), 1);
                assert!(seats[record.winner].has_chips());
            }
        }
    }

    #[test]
    fn chips_never_created() {
        let ref mut rng = SmallRng::seed_from_u64(11);
        let ref mut die = Die::new();
        for n in MIN_PLAYERS..=6 {
            let ref mut seats = table(n);
            for _ in 0..50 {
                let mut game = Game::new(seats, die, rng, STAKE);
                let mut total = game.total();
                assert_eq!(total, n * STAKE as usize);
                while !game.is_over() {
                    game.step();
                    assert!(game.total() <= total);
                    assert!(game.alive() >= 1);
                    total = game.total();
                }
            }
        }
    }

    #[test]
    fn seeded_games_repeat() {
        let play = |seed: u64| {
            let ref mut rng = SmallRng::seed_from_u64(seed);
            let ref mut die = Die::new();
            let ref mut seats = table(5);
            (0..20)
                .map(|_| Game::new(seats, die, rng, STAKE).play())
                .collect::<Vec<Record>>()
        };
        assert_eq!(play(3), play(3));
    }

    #[test]
    fn seeded_three_player_game() {
        let ref mut rng = SmallRng::seed_from_u64(7);
        let ref mut die = Die::new();
        let ref mut seats = table(3);
        let mut game = Game::new(seats, die, rng, STAKE);
        assert_eq!(game.actor(), 0);
        game.step();
        assert_eq!(game.chips(), vec![2, 3, 3]);
        assert_eq!(game.turns(), 1);
        let record = game.play();
        assert_eq!(record, Record { turns: 18, winner: 1 });
    }
}
