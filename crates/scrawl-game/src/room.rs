//! The room aggregate: membership, drawer rotation, guessing, scoring.
//!
//! A `Room` moves through three phases: Idle (no round running), active
//! round (word assigned, guesses accepted), and back to Idle between
//! rounds or after game over. The phase flag is `game_active`; `round`
//! is 0 until the first start and 1-indexed afterwards.
//!
//! The drawer is tracked as an *index* into the join-ordered player list,
//! never as a cached id — the id is derived on read. This matters when a
//! player leaves: an index below the drawer's shifts everything down, and
//! re-deriving the id keeps rotation pointing at the same logical player.

use rand::Rng;
use scrawl_protocol::{PlayerId, PlayerView, RoomId, RoomSnapshot};

use crate::{GameConfig, GameError, Player, WordList};

/// A game needs at least this many players.
pub const MIN_PLAYERS: usize = 2;

/// First correct guess earns this many points.
const BASE_POINTS: u32 = 10;
/// Each subsequent correct guess earns this much less.
const POINTS_DECAY: u32 = 2;
/// No correct guess earns less than this.
const FLOOR_POINTS: u32 = 5;

// ---------------------------------------------------------------------------
// Transition results
// ---------------------------------------------------------------------------

/// Result of [`Room::start_next_round`].
#[derive(Debug, Clone, PartialEq)]
pub enum RoundOutcome {
    /// A new round began.
    Started {
        /// 1-indexed round number.
        round: u32,
        /// Who draws this round.
        drawer: PlayerId,
        /// The secret word, to be delivered to the drawer only.
        word: String,
    },
    /// Every player has drawn `total_rounds` times; the game is over.
    /// The room is back in Idle and a fresh game may be started.
    GameOver {
        /// Final roster, best score first; ties keep join order.
        standings: Vec<PlayerView>,
    },
}

/// Result of [`Room::handle_guess`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Not the word. No state changed; relay the text as chat.
    Incorrect,
    /// The word. Points were awarded.
    Correct {
        /// Points added to the guesser's score.
        awarded: u32,
        /// True when every non-drawer has now guessed — the round is
        /// already marked ended and the word may be revealed.
        round_complete: bool,
    },
}

/// Result of [`Room::remove_player`]. Removal is idempotent: removing an
/// absent player yields the all-false outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeaveOutcome {
    /// A player was actually removed.
    pub removed: bool,
    /// The round was force-ended (drawer left, or fewer than two players
    /// remain mid-round).
    pub round_aborted: bool,
    /// The departure shrank the guesser pool enough that everyone left
    /// has now guessed; the round ended as if the last guess landed.
    pub round_completed: bool,
    /// The roster is empty; the room must be destroyed.
    pub now_empty: bool,
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// One isolated game instance: roster, phase, and round state.
#[derive(Debug, Clone)]
pub struct Room {
    id: RoomId,
    host: PlayerId,
    /// Join order. Rotation indexes into this, so order is significant.
    players: Vec<Player>,
    /// Index of the current drawer. Meaningful only while `game_active`.
    drawer_index: usize,
    /// 0 before the first start, then 1-indexed.
    round: u32,
    total_rounds: u32,
    /// The active secret. `Some` from round start until the next round
    /// replaces it, so it stays available for the end-of-round reveal.
    word: Option<String>,
    /// Who guessed correctly this round, in order. Order drives scoring
    /// decay. Never contains the drawer.
    guessed_order: Vec<PlayerId>,
    game_active: bool,
}

impl Room {
    /// Creates a room with the creator as host and sole member.
    pub fn new(id: RoomId, creator: Player, config: &GameConfig) -> Self {
        let host = creator.id;
        Self {
            id,
            host,
            players: vec![creator],
            drawer_index: 0,
            round: 0,
            total_rounds: config.total_rounds,
            word: None,
            guessed_order: Vec::new(),
            game_active: false,
        }
    }

    // -- accessors -------------------------------------------------------

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn host(&self) -> PlayerId {
        self.host
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    pub fn is_active(&self) -> bool {
        self.game_active
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// The active secret word, if a round has been started. Stays set
    /// after a round ends so the reveal can read it.
    pub fn word(&self) -> Option<&str> {
        self.word.as_deref()
    }

    /// The current drawer, derived from the rotation index. `None` unless
    /// a round is active.
    pub fn current_drawer(&self) -> Option<PlayerId> {
        if !self.game_active {
            return None;
        }
        self.players.get(self.drawer_index).map(|p| p.id)
    }

    /// Roster in join order.
    pub fn roster(&self) -> Vec<PlayerView> {
        self.players.iter().map(Player::view).collect()
    }

    /// Roster ranked by score, best first. The sort is stable, so ties
    /// keep join order.
    pub fn standings(&self) -> Vec<PlayerView> {
        let mut views = self.roster();
        views.sort_by_key(|p| std::cmp::Reverse(p.score));
        views
    }

    /// The public projection sent to clients. Never includes the word.
    pub fn snapshot(&self) -> RoomSnapshot {
        RoomSnapshot {
            id: self.id.clone(),
            host: self.host,
            players: self.roster(),
            round: self.round,
            total_rounds: self.total_rounds,
            game_active: self.game_active,
            current_drawer: self.current_drawer(),
        }
    }

    // -- membership ------------------------------------------------------

    /// Appends a player to the roster.
    ///
    /// Join order is preserved because drawer rotation indexes into it.
    pub fn add_player(&mut self, player: Player) -> Result<(), GameError> {
        if self.contains(player.id) {
            return Err(GameError::AlreadyJoined(player.id));
        }
        tracing::debug!(room = %self.id, player = %player.id, "player joined");
        self.players.push(player);
        Ok(())
    }

    /// Removes a player, fixing up rotation state. Idempotent.
    ///
    /// - An index below the drawer's shifts the drawer index down so it
    ///   keeps pointing at the same logical player.
    /// - The drawer leaving force-ends the round, regardless of timers.
    /// - Dropping below two players mid-round also force-ends it.
    /// - Otherwise the all-guessed denominator is recomputed, which can
    ///   complete the round (`round_completed`).
    pub fn remove_player(&mut self, player_id: PlayerId) -> LeaveOutcome {
        let Some(idx) = self.players.iter().position(|p| p.id == player_id)
        else {
            return LeaveOutcome::default();
        };

        let was_drawer = self.game_active && idx == self.drawer_index;
        self.players.remove(idx);
        self.guessed_order.retain(|id| *id != player_id);

        if idx < self.drawer_index {
            self.drawer_index -= 1;
        }

        let mut outcome = LeaveOutcome {
            removed: true,
            ..LeaveOutcome::default()
        };

        if self.players.is_empty() {
            self.game_active = false;
            outcome.now_empty = true;
            return outcome;
        }

        if !self.game_active {
            return outcome;
        }

        if was_drawer || self.players.len() < MIN_PLAYERS {
            // A drawer's departure invalidates the round; so does losing
            // the second-to-last player.
            self.game_active = false;
            outcome.round_aborted = true;
            tracing::debug!(room = %self.id, player = %player_id, "round aborted by departure");
        } else if self.all_guessed() {
            self.game_active = false;
            outcome.round_completed = true;
        }

        outcome
    }

    // -- round lifecycle -------------------------------------------------

    /// Starts the first round, advances to the next drawer, or reports
    /// game over.
    ///
    /// The very first call (Idle, `round == 0`) zeroes every score and
    /// hands the pencil to the first joiner. Later calls advance the
    /// rotation, wrapping back to the first player and bumping `round`
    /// once everyone has drawn. When `round` passes `total_rounds` the
    /// game ends and the room returns to Idle so the host can start over.
    pub fn start_next_round(
        &mut self,
        words: &WordList,
        rng: &mut impl Rng,
    ) -> Result<RoundOutcome, GameError> {
        if self.players.len() < MIN_PLAYERS {
            return Err(GameError::InsufficientPlayers {
                have: self.players.len(),
            });
        }

        if !self.game_active && self.round == 0 {
            for p in &mut self.players {
                p.score = 0;
            }
            self.round = 1;
            self.drawer_index = 0;
        } else {
            self.drawer_index += 1;
            if self.drawer_index >= self.players.len() {
                self.drawer_index = 0;
                self.round += 1;
            }
        }

        if self.round > self.total_rounds {
            self.game_active = false;
            self.word = None;
            self.guessed_order.clear();
            let standings = self.standings();
            // Back to Idle: the next start-game begins a fresh game.
            self.round = 0;
            tracing::debug!(room = %self.id, "game over");
            return Ok(RoundOutcome::GameOver { standings });
        }

        let word = words.pick(rng).to_string();
        self.word = Some(word.clone());
        self.guessed_order.clear();
        self.game_active = true;
        let drawer = self.players[self.drawer_index].id;
        tracing::debug!(room = %self.id, round = self.round, %drawer, "round started");

        Ok(RoundOutcome::Started {
            round: self.round,
            drawer,
            word,
        })
    }

    /// Force-ends the round without a completing guess (timer expiry or
    /// forced teardown). The word is kept for the reveal.
    pub fn abort_round(&mut self) {
        self.game_active = false;
    }

    // -- guessing --------------------------------------------------------

    /// Evaluates a guess against the active word.
    ///
    /// Both sides are trimmed and lowercased before an exact-match
    /// comparison — no partial credit. A wrong guess changes nothing and
    /// should be relayed as chat. A correct guess scores
    /// `max(10 − 2·position, 5)` by arrival order and may complete the
    /// round when every non-drawer has guessed.
    pub fn handle_guess(
        &mut self,
        guesser: PlayerId,
        text: &str,
    ) -> Result<GuessOutcome, GameError> {
        if !self.game_active {
            return Err(GameError::GameNotActive);
        }
        if self.current_drawer() == Some(guesser) {
            return Err(GameError::DrawerCannotGuess(guesser));
        }
        let Some(idx) = self.players.iter().position(|p| p.id == guesser)
        else {
            return Err(GameError::PlayerNotFound(guesser));
        };
        let Some(word) = self.word.as_deref() else {
            // `game_active` implies a word; treat the impossible case as
            // an inactive game rather than panicking.
            return Err(GameError::GameNotActive);
        };

        if normalize(text) != normalize(word) {
            return Ok(GuessOutcome::Incorrect);
        }

        if self.guessed_order.contains(&guesser) {
            return Err(GameError::AlreadyGuessed(guesser));
        }

        let position = self.guessed_order.len() as u32;
        let awarded = BASE_POINTS
            .saturating_sub(POINTS_DECAY * position)
            .max(FLOOR_POINTS);
        self.players[idx].score += awarded;
        self.guessed_order.push(guesser);
        tracing::debug!(room = %self.id, player = %guesser, awarded, "correct guess");

        let round_complete = self.all_guessed();
        if round_complete {
            self.game_active = false;
        }

        Ok(GuessOutcome::Correct {
            awarded,
            round_complete,
        })
    }

    /// True when every current non-drawer appears in `guessed_order`.
    fn all_guessed(&self) -> bool {
        self.guessed_order.len() == self.players.len() - 1
    }
}

/// Guess/word normalization: surrounding whitespace and case are
/// insignificant.
fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pid(n: u64) -> PlayerId {
        PlayerId(n)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn words() -> WordList {
        WordList::new(["banana"])
    }

    /// Alice (host) plus `others` extra players.
    fn room_with(others: &[(u64, &str)]) -> Room {
        let mut room = Room::new(
            RoomId::new("R1"),
            Player::new(pid(1), "Alice"),
            &GameConfig::default(),
        );
        for (id, name) in others {
            room.add_player(Player::new(pid(*id), *name)).unwrap();
        }
        room
    }

    fn start(room: &mut Room) -> RoundOutcome {
        room.start_next_round(&words(), &mut rng()).unwrap()
    }

    fn drawer_of(outcome: &RoundOutcome) -> PlayerId {
        match outcome {
            RoundOutcome::Started { drawer, .. } => *drawer,
            RoundOutcome::GameOver { .. } => panic!("expected Started"),
        }
    }

    // -- membership ------------------------------------------------------

    #[test]
    fn test_creator_is_host_and_sole_member() {
        let room = room_with(&[]);
        assert_eq!(room.host(), pid(1));
        assert_eq!(room.players().len(), 1);
        assert!(!room.is_active());
        assert_eq!(room.round(), 0);
    }

    #[test]
    fn test_duplicate_join_is_rejected() {
        let mut room = room_with(&[(2, "Bob")]);
        let err = room.add_player(Player::new(pid(2), "Bob")).unwrap_err();
        assert!(matches!(err, GameError::AlreadyJoined(id) if id == pid(2)));
        assert_eq!(room.players().len(), 2);
    }

    #[test]
    fn test_remove_absent_player_is_a_noop() {
        let mut room = room_with(&[(2, "Bob")]);
        let outcome = room.remove_player(pid(99));
        assert_eq!(outcome, LeaveOutcome::default());
        assert_eq!(room.players().len(), 2);
    }

    #[test]
    fn test_last_player_leaving_empties_the_room() {
        let mut room = room_with(&[]);
        let outcome = room.remove_player(pid(1));
        assert!(outcome.removed);
        assert!(outcome.now_empty);
        assert!(room.players().is_empty());
    }

    // -- round lifecycle / rotation --------------------------------------

    #[test]
    fn test_start_requires_two_players() {
        let mut room = room_with(&[]);
        let err = room
            .start_next_round(&words(), &mut rng())
            .unwrap_err();
        assert!(matches!(err, GameError::InsufficientPlayers { have: 1 }));
    }

    #[test]
    fn test_first_start_resets_scores_and_picks_first_joiner() {
        let mut room = room_with(&[(2, "Bob")]);
        match start(&mut room) {
            RoundOutcome::Started { round, drawer, word } => {
                assert_eq!(round, 1);
                assert_eq!(drawer, pid(1));
                assert_eq!(word, "banana");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(room.is_active());
        assert_eq!(room.current_drawer(), Some(pid(1)));
        assert!(room.players().iter().all(|p| p.score == 0));
    }

    #[test]
    fn test_round_robin_over_three_players() {
        // [A, B, C] must draw A, B, C, A, ... with `round` bumping
        // exactly every three assignments.
        let mut room = room_with(&[(2, "Bob"), (3, "Carol")]);
        let expected = [
            (1, pid(1)),
            (1, pid(2)),
            (1, pid(3)),
            (2, pid(1)),
            (2, pid(2)),
        ];
        for (round, drawer) in expected {
            room.abort_round();
            match start(&mut room) {
                RoundOutcome::Started { round: r, drawer: d, .. } => {
                    assert_eq!((r, d), (round, drawer));
                }
                other => panic!("unexpected outcome: {other:?}"),
            }
        }
    }

    #[test]
    fn test_game_over_after_total_rounds() {
        let mut room = room_with(&[(2, "Bob")]);
        // 3 rounds x 2 players = 6 starts; the 7th reports game over.
        for _ in 0..6 {
            assert!(matches!(start(&mut room), RoundOutcome::Started { .. }));
        }
        match start(&mut room) {
            RoundOutcome::GameOver { standings } => {
                assert_eq!(standings.len(), 2);
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(!room.is_active());
        // Back to Idle: a new game can start from scratch.
        assert_eq!(room.round(), 0);
        assert!(matches!(
            start(&mut room),
            RoundOutcome::Started { round: 1, .. }
        ));
    }

    #[test]
    fn test_standings_rank_by_score_with_stable_ties() {
        let mut room = room_with(&[(2, "Bob"), (3, "Carol"), (4, "Dave")]);
        start(&mut room); // Alice draws
        room.handle_guess(pid(3), "banana").unwrap(); // Carol: 10
        room.handle_guess(pid(2), "banana").unwrap(); // Bob: 8
        // Dave never guesses: 0, ties with Alice (0) — join order wins.
        let standings = room.standings();
        let ids: Vec<_> = standings.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![pid(3), pid(2), pid(1), pid(4)]);
    }

    // -- guessing --------------------------------------------------------

    #[test]
    fn test_guess_requires_active_round() {
        let mut room = room_with(&[(2, "Bob")]);
        let err = room.handle_guess(pid(2), "banana").unwrap_err();
        assert!(matches!(err, GameError::GameNotActive));
    }

    #[test]
    fn test_drawer_cannot_guess() {
        let mut room = room_with(&[(2, "Bob")]);
        start(&mut room);
        let err = room.handle_guess(pid(1), "banana").unwrap_err();
        assert!(matches!(err, GameError::DrawerCannotGuess(id) if id == pid(1)));
    }

    #[test]
    fn test_non_member_cannot_guess() {
        let mut room = room_with(&[(2, "Bob")]);
        start(&mut room);
        let err = room.handle_guess(pid(99), "banana").unwrap_err();
        assert!(matches!(err, GameError::PlayerNotFound(id) if id == pid(99)));
    }

    #[test]
    fn test_incorrect_guess_changes_nothing() {
        let mut room = room_with(&[(2, "Bob")]);
        start(&mut room);
        let outcome = room.handle_guess(pid(2), "pineapple").unwrap();
        assert_eq!(outcome, GuessOutcome::Incorrect);
        assert!(room.is_active());
        assert_eq!(room.players()[1].score, 0);
    }

    #[test]
    fn test_guess_normalization_trims_and_case_folds() {
        // The word is "banana"; "  BaNaNa  " must match exactly after
        // normalization.
        let mut room = room_with(&[(2, "Bob")]);
        start(&mut room);
        let outcome = room.handle_guess(pid(2), "  BaNaNa  ").unwrap();
        assert!(matches!(
            outcome,
            GuessOutcome::Correct { awarded: 10, round_complete: true }
        ));
    }

    #[test]
    fn test_two_player_round_completes_on_single_guess() {
        let mut room = room_with(&[(2, "Bob")]);
        start(&mut room);
        let outcome = room.handle_guess(pid(2), "banana").unwrap();
        assert!(matches!(
            outcome,
            GuessOutcome::Correct { awarded: 10, round_complete: true }
        ));
        assert!(!room.is_active());
        // The word stays readable for the reveal.
        assert_eq!(room.word(), Some("banana"));
        assert_eq!(room.players()[1].score, 10);
    }

    #[test]
    fn test_scoring_decays_ten_eight_six_five() {
        let mut room = room_with(&[
            (2, "Bob"),
            (3, "Carol"),
            (4, "Dave"),
            (5, "Eve"),
        ]);
        start(&mut room); // Alice draws, four guessers
        let mut awards = Vec::new();
        for id in [2, 3, 4, 5] {
            match room.handle_guess(pid(id), "banana").unwrap() {
                GuessOutcome::Correct { awarded, .. } => awards.push(awarded),
                other => panic!("unexpected outcome: {other:?}"),
            }
        }
        assert_eq!(awards, vec![10, 8, 6, 5]);
    }

    #[test]
    fn test_scoring_floor_holds_for_late_guessers() {
        let mut room = room_with(&[
            (2, "b"),
            (3, "c"),
            (4, "d"),
            (5, "e"),
            (6, "f"),
            (7, "g"),
        ]);
        start(&mut room);
        let mut last = 0;
        for id in [2, 3, 4, 5, 6, 7] {
            match room.handle_guess(pid(id), "banana").unwrap() {
                GuessOutcome::Correct { awarded, .. } => last = awarded,
                other => panic!("unexpected outcome: {other:?}"),
            }
        }
        assert_eq!(last, 5, "5th+ guesser stays at the floor");
    }

    #[test]
    fn test_repeat_correct_guess_is_rejected_and_does_not_rescore() {
        let mut room = room_with(&[(2, "Bob"), (3, "Carol")]);
        start(&mut room);
        room.handle_guess(pid(2), "banana").unwrap();
        let err = room.handle_guess(pid(2), "banana").unwrap_err();
        assert!(matches!(err, GameError::AlreadyGuessed(id) if id == pid(2)));
        assert_eq!(room.players()[1].score, 10, "score unchanged");
    }

    #[test]
    fn test_partial_completion_keeps_round_active() {
        let mut room = room_with(&[(2, "Bob"), (3, "Carol")]);
        start(&mut room);
        let outcome = room.handle_guess(pid(2), "banana").unwrap();
        assert!(matches!(
            outcome,
            GuessOutcome::Correct { round_complete: false, .. }
        ));
        assert!(room.is_active());
    }

    // -- departures mid-round --------------------------------------------

    #[test]
    fn test_drawer_leaving_aborts_the_round() {
        let mut room = room_with(&[(2, "Bob"), (3, "Carol")]);
        start(&mut room); // Alice draws
        let outcome = room.remove_player(pid(1));
        assert!(outcome.removed);
        assert!(outcome.round_aborted);
        assert!(!outcome.now_empty);
        assert!(!room.is_active());
    }

    #[test]
    fn test_departure_below_drawer_index_keeps_drawer_stable() {
        let mut room = room_with(&[(2, "Bob"), (3, "Carol")]);
        room.abort_round();
        start(&mut room); // drawer_index 0 → Alice
        room.abort_round();
        start(&mut room); // drawer_index 1 → Bob draws
        assert_eq!(room.current_drawer(), Some(pid(2)));

        // Alice (index 0, below the drawer) leaves: the index shifts down
        // but still points at Bob.
        let outcome = room.remove_player(pid(1));
        assert!(outcome.removed);
        assert!(!outcome.round_aborted);
        assert_eq!(room.current_drawer(), Some(pid(2)));
    }

    #[test]
    fn test_mid_round_departure_can_complete_the_round() {
        // Alice draws; Bob guesses; Carol leaves without guessing.
        // The denominator shrinks to 1, Bob has guessed → round completes.
        let mut room = room_with(&[(2, "Bob"), (3, "Carol")]);
        start(&mut room);
        room.handle_guess(pid(2), "banana").unwrap();
        assert!(room.is_active());

        let outcome = room.remove_player(pid(3));
        assert!(outcome.removed);
        assert!(outcome.round_completed);
        assert!(!outcome.round_aborted);
        assert!(!room.is_active());
    }

    #[test]
    fn test_dropping_below_two_players_aborts_the_round() {
        let mut room = room_with(&[(2, "Bob")]);
        start(&mut room); // Alice draws, Bob guesses
        let outcome = room.remove_player(pid(2));
        assert!(outcome.round_aborted);
        assert!(!room.is_active());
    }

    #[test]
    fn test_departed_guesser_is_pruned_from_guessed_order() {
        // Bob guesses then leaves; Carol remains the only guesser and the
        // round must wait for her, not count Bob's stale entry.
        let mut room =
            room_with(&[(2, "Bob"), (3, "Carol"), (4, "Dave")]);
        start(&mut room);
        room.handle_guess(pid(2), "banana").unwrap();
        let outcome = room.remove_player(pid(2));
        assert!(outcome.removed);
        assert!(!outcome.round_completed, "Carol and Dave still owe guesses");
        assert!(room.is_active());
    }

    // -- invariants & monotonicity ---------------------------------------

    #[test]
    fn test_score_never_decreases_across_a_round() {
        let mut room = room_with(&[(2, "Bob"), (3, "Carol")]);
        start(&mut room);
        let before: Vec<u32> = room.players().iter().map(|p| p.score).collect();
        room.handle_guess(pid(2), "wrong").unwrap();
        let _ = room.handle_guess(pid(2), "banana").unwrap();
        let _ = room.handle_guess(pid(2), "banana"); // AlreadyGuessed
        let after: Vec<u32> = room.players().iter().map(|p| p.score).collect();
        for (b, a) in before.iter().zip(&after) {
            assert!(a >= b);
        }
    }

    #[test]
    fn test_snapshot_never_leaks_the_word() {
        let mut room = room_with(&[(2, "Bob")]);
        start(&mut room);
        let snap = room.snapshot();
        assert!(snap.game_active);
        assert_eq!(snap.current_drawer, Some(pid(1)));
        let json = format!("{snap:?}");
        assert!(!json.contains("banana"));
    }

    #[test]
    fn test_drawer_derived_only_while_active() {
        let mut room = room_with(&[(2, "Bob")]);
        assert_eq!(room.current_drawer(), None);
        start(&mut room);
        assert_eq!(room.current_drawer(), Some(pid(1)));
        room.abort_round();
        assert_eq!(room.current_drawer(), None);
    }
}
