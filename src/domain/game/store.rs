//! In-memory catalog store.

use super::{seed_games, CreateGameRequest, Game, StoreError};

/// Ordered, append-only collection of games held in process memory.
///
/// The store itself does no locking. Shared access goes through
/// `Arc<RwLock<GameStore>>`; `create` must run under a single write guard so
/// the count it reads is the count it appends to.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
    games: Vec<Game>,
}

impl GameStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { games: Vec::new() }
    }

    /// Creates a store holding the three seed records.
    pub fn seeded() -> Self {
        Self {
            games: seed_games(),
        }
    }

    /// All games in insertion order.
    pub fn list_all(&self) -> &[Game] {
        &self.games
    }

    /// First game with the given id, if any.
    pub fn find_by_id(&self, id: i32) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Pushes a game at the end. Ids must stay unique: an id already present
    /// is rejected with `DuplicateId`.
    pub fn append(&mut self, game: Game) -> Result<(), StoreError> {
        if self.find_by_id(game.id).is_some() {
            return Err(StoreError::DuplicateId(game.id));
        }
        self.games.push(game);
        Ok(())
    }

    /// Id the next created game will receive (`count + 1`).
    pub fn next_id(&self) -> Result<i32, StoreError> {
        id_after(self.games.len())
    }

    /// Assigns the next id to `request`, appends the resulting game and
    /// returns it. Fails with `DuplicateId` when an earlier `append` already
    /// took `count + 1`.
    pub fn create(&mut self, request: CreateGameRequest) -> Result<Game, StoreError> {
        let game = request.into_game(self.next_id()?);
        self.append(game.clone())?;
        Ok(game)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

fn id_after(count: usize) -> Result<i32, StoreError> {
    count
        .checked_add(1)
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(StoreError::IdExhausted(count))
}
