//! The session orchestrator.
//!
//! A `Session` owns the roster, the generated deck, the cursor into it,
//! and the currently open minigame. It is the single writer of the
//! drink counters: minigame outcomes flow back through it, it applies
//! the deltas, and it emits the events the progress trackers observe.
//!
//! Everything is synchronous and single-threaded; the only time-driven
//! behavior is the caller pumping [`Session::tick`] into the open
//! minigame.

use log::{debug, warn};

use crate::cards::{Card, CardKind, DeckBuilder, GameMode};
use crate::content::ContentPool;
use crate::core::{PlayerId, Roster, SessionError, SessionRng};
use crate::minigames::{ActiveMinigame, MinigameAction, MinigameCtx, MinigameStatus};

use super::constraint::{ActiveConstraint, ConstraintList};
use super::event::{EventId, SessionEvent, SessionEventKind};

/// What `advance` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// A prompt card was consumed; the cursor moved.
    Advanced,
    /// The card opened a minigame; the cursor is parked until it
    /// finishes.
    MinigameOpened(CardKind),
    /// The deck is exhausted; the session is over.
    SessionComplete,
}

/// A running game session.
#[derive(Debug)]
pub struct Session {
    roster: Roster,
    mode: GameMode,
    cards: Vec<Card>,
    cursor: usize,
    current_player: PlayerId,
    active: Option<ActiveMinigame>,
    pool: ContentPool,
    rng: SessionRng,
    constraints: ConstraintList,
    events: Vec<SessionEvent>,
    next_event_id: u64,
    completed: bool,
}

impl Session {
    /// Start a session: validate the roster, generate the deck, zero
    /// every drink counter, park the cursor at the first card.
    ///
    /// Deck generation and in-play picks use independent RNG streams
    /// derived from `seed`, so the same seed always produces the same
    /// session.
    pub fn start(
        player_names: Vec<String>,
        mode: GameMode,
        card_count: usize,
        seed: u64,
    ) -> Result<Self, SessionError> {
        let roster = Roster::new(player_names)?;

        let master = SessionRng::new(seed);
        let mut deck_rng = master.for_context("deck");
        let mut rng = master.for_context("play");

        let mut pool = ContentPool::new();
        let cards = DeckBuilder::new(mode, card_count).build(&mut pool, &mut deck_rng);

        let current_player =
            PlayerId::new(rng.gen_range_usize(0..roster.player_count()) as u8);

        let mut session = Self {
            roster,
            mode,
            cards,
            cursor: 0,
            current_player,
            active: None,
            pool,
            rng,
            constraints: ConstraintList::new(),
            events: Vec::new(),
            next_event_id: 0,
            completed: false,
        };
        session.emit(SessionEventKind::SessionStarted {
            player_count: session.roster.player_count(),
        });
        Ok(session)
    }

    // === Accessors ===

    /// The player roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The mode this session was started in.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The card under the cursor, if any remain.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.cursor)
    }

    /// Cursor position into the deck.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total cards generated for this session.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// The open minigame, if any.
    #[must_use]
    pub fn active_minigame(&self) -> Option<&ActiveMinigame> {
        self.active.as_ref()
    }

    /// Table rules currently in effect.
    #[must_use]
    pub fn constraints(&self) -> &[ActiveConstraint] {
        self.constraints.active()
    }

    /// Whether the deck has been exhausted.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Take all events emitted since the last drain.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    // === Operations ===

    /// Move to the next card.
    ///
    /// With one card (or none) left the session completes instead, and
    /// `SessionCompleted` is emitted exactly once. A card whose kind has
    /// a minigame opens it and parks the cursor; the cursor advances
    /// when the minigame reports finished. Prompt cards are consumed
    /// immediately and a new current player is picked at random.
    pub fn advance(&mut self) -> AdvanceOutcome {
        if self.completed {
            return AdvanceOutcome::SessionComplete;
        }
        if let Some(active) = &self.active {
            debug!("advance ignored: {} still open", active.kind());
            return AdvanceOutcome::MinigameOpened(active.kind());
        }
        if self.cursor + 1 >= self.cards.len() {
            self.complete();
            return AdvanceOutcome::SessionComplete;
        }

        let card = &self.cards[self.cursor];
        match ActiveMinigame::open(card, self.current_player, &self.roster) {
            Some(game) => {
                let kind = game.kind();
                debug!("opening {} for card {}", kind, card.id);
                self.active = Some(game);
                AdvanceOutcome::MinigameOpened(kind)
            }
            None => {
                self.consume_card();
                AdvanceOutcome::Advanced
            }
        }
    }

    /// Skip the current card: like `advance`, but the card never opens
    /// its minigame and a `CardSkipped` event feeds the skip counters.
    pub fn skip(&mut self) -> AdvanceOutcome {
        if self.completed {
            return AdvanceOutcome::SessionComplete;
        }
        if let Some(active) = &self.active {
            debug!("skip ignored: {} still open", active.kind());
            return AdvanceOutcome::MinigameOpened(active.kind());
        }

        if let Some(card) = self.cards.get(self.cursor) {
            let kind = card.kind;
            self.emit(SessionEventKind::CardSkipped { kind });
        }

        if self.cursor + 1 >= self.cards.len() {
            self.complete();
            return AdvanceOutcome::SessionComplete;
        }

        self.cursor += 1;
        self.pick_current_player();
        AdvanceOutcome::Advanced
    }

    /// Apply a drink delta to a player by name.
    ///
    /// Unknown names are logged and reported, but leave the session
    /// untouched; nothing downstream depends on the result.
    pub fn apply_penalty(&mut self, name: &str, amount: i32) -> Result<(), SessionError> {
        match self.roster.id_of(name) {
            Some(player) => {
                self.apply_penalty_by_id(player, amount);
                Ok(())
            }
            None => {
                warn!("penalty for unknown player {:?} ignored", name);
                Err(SessionError::UnknownPlayer(name.to_string()))
            }
        }
    }

    /// Route a user input to the open minigame.
    pub fn minigame_input(&mut self, action: MinigameAction) -> Result<(), SessionError> {
        let Some(active) = self.active.as_mut() else {
            return Err(SessionError::NoActiveMinigame);
        };
        let kind = active.kind();
        let mut ctx = MinigameCtx {
            roster: &self.roster,
            pool: &mut self.pool,
            rng: &mut self.rng,
        };
        let status = active.handle(&action, &mut ctx);
        self.handle_status(kind, status);
        Ok(())
    }

    /// Advance the open minigame by one tick. A no-op when nothing is
    /// open; prompt cards have no clocks.
    pub fn tick(&mut self) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let kind = active.kind();
        let mut ctx = MinigameCtx {
            roster: &self.roster,
            pool: &mut self.pool,
            rng: &mut self.rng,
        };
        let status = active.tick(&mut ctx);
        self.handle_status(kind, status);
    }

    /// Close the open minigame without applying anything.
    ///
    /// The card stays under the cursor; the caller can `advance` to
    /// reopen it or `skip` past it.
    pub fn abort_minigame(&mut self) -> Result<(), SessionError> {
        match self.active.take() {
            Some(game) => {
                debug!("{} aborted, pending penalties dropped", game.kind());
                Ok(())
            }
            None => Err(SessionError::NoActiveMinigame),
        }
    }

    // === Internals ===

    fn handle_status(&mut self, kind: CardKind, status: MinigameStatus) {
        match status {
            MinigameStatus::InProgress => {}
            MinigameStatus::RoundComplete(outcome) => {
                for (player, drinks) in &outcome.penalties {
                    self.apply_penalty_by_id(*player, *drinks);
                }
                if let Some(constraint) = outcome.constraint {
                    debug!("new table rule: {}", constraint.text);
                    self.constraints.add(constraint);
                }
                self.emit(SessionEventKind::RoundResolved { kind });
            }
            MinigameStatus::Finished => {
                self.active = None;
                self.consume_card();
            }
        }
    }

    fn apply_penalty_by_id(&mut self, player: PlayerId, amount: i32) {
        self.roster.add_drinks(player, amount);
        self.emit(SessionEventKind::DrinkApplied { player, amount });
    }

    fn consume_card(&mut self) {
        let kind = self.cards[self.cursor].kind;
        self.cursor += 1;
        self.pick_current_player();
        self.emit(SessionEventKind::CardResolved { kind });

        for expired in self.constraints.advance_round() {
            self.emit(SessionEventKind::ConstraintExpired { text: expired.text });
        }
    }

    fn pick_current_player(&mut self) {
        let count = self.roster.player_count();
        self.current_player = PlayerId::new(self.rng.gen_range_usize(0..count) as u8);
    }

    fn complete(&mut self) {
        self.completed = true;
        self.emit(SessionEventKind::SessionCompleted);
    }

    fn emit(&mut self, kind: SessionEventKind) {
        let id = EventId(self.next_event_id);
        self.next_event_id += 1;
        self.events.push(SessionEvent { id, kind });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn session(card_count: usize, seed: u64) -> Session {
        Session::start(
            names(&["Ana", "Beto", "Coco"]),
            GameMode::Clasico,
            card_count,
            seed,
        )
        .unwrap()
    }

    #[test]
    fn test_start_validates_roster() {
        let err = Session::start(names(&["Ana"]), GameMode::Clasico, 10, 42).unwrap_err();
        assert_eq!(err, SessionError::InsufficientPlayers(1));
    }

    #[test]
    fn test_start_generates_exact_deck_and_zero_drinks() {
        let s = session(25, 42);

        assert_eq!(s.card_count(), 25);
        assert_eq!(s.cursor(), 0);
        for player in s.roster().player_ids() {
            assert_eq!(s.roster().drinks(player), 0);
        }
    }

    #[test]
    fn test_start_emits_session_started() {
        let mut s = session(5, 42);
        let events = s.drain_events();

        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].kind,
            SessionEventKind::SessionStarted { player_count: 3 }
        );
        assert_eq!(events[0].id, EventId(0));
    }

    #[test]
    fn test_apply_penalty_by_name() {
        let mut s = session(5, 42);
        s.drain_events();

        s.apply_penalty("Beto", 3).unwrap();
        let beto = s.roster().id_of("Beto").unwrap();
        assert_eq!(s.roster().drinks(beto), 3);

        let events = s.drain_events();
        assert_eq!(
            events[0].kind,
            SessionEventKind::DrinkApplied {
                player: beto,
                amount: 3
            }
        );
    }

    #[test]
    fn test_apply_penalty_zero_is_noop() {
        let mut s = session(5, 42);
        let ana = s.roster().id_of("Ana").unwrap();

        s.apply_penalty("Ana", 0).unwrap();
        assert_eq!(s.roster().drinks(ana), 0);
    }

    #[test]
    fn test_apply_penalty_unknown_player() {
        let mut s = session(5, 42);

        let err = s.apply_penalty("Zoe", 2).unwrap_err();
        assert_eq!(err, SessionError::UnknownPlayer("Zoe".to_string()));

        // Nothing changed, no drink event emitted
        s.drain_events()
            .iter()
            .for_each(|e| assert!(!matches!(e.kind, SessionEventKind::DrinkApplied { .. })));
    }

    #[test]
    fn test_minigame_input_without_minigame() {
        let mut s = session(5, 42);
        let err = s.minigame_input(MinigameAction::Start).unwrap_err();
        assert_eq!(err, SessionError::NoActiveMinigame);
    }

    #[test]
    fn test_event_ids_are_monotonic() {
        let mut s = session(5, 42);
        s.apply_penalty("Ana", 1).unwrap();
        s.apply_penalty("Beto", 1).unwrap();

        let events = s.drain_events();
        for pair in events.windows(2) {
            assert!(pair[0].id < pair[1].id);
        }
    }
}
