//! The mini-games reachable from the games lobby.

/// A mini-game with its own route and view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Game {
    Oca,
    Tetris,
    Memory,
    Puzzle,
    Snake,
    Breakout,
    Whack,
    Simon,
    Quiz,
    Catch,
    Collage,
    Reinas,
    Mica,
    Kintsugi,
    Pong,
    Reaction,
    Typing,
    Chess,
    Checkers,
    Connect4,
    Reversi,
    Restaurador,
}

/// How a game is started once its script has loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEntry {
    /// A global object with an `init()` method, e.g. `SnakeGame`.
    Object(&'static str),
    /// A global function taking the game's container element, e.g. `initChessGame`.
    Mount {
        function: &'static str,
        container: &'static str,
    },
}

impl Game {
    /// Every game, in lobby order.
    pub const ALL: [Game; 22] = [
        Game::Oca,
        Game::Tetris,
        Game::Memory,
        Game::Puzzle,
        Game::Snake,
        Game::Breakout,
        Game::Whack,
        Game::Simon,
        Game::Quiz,
        Game::Catch,
        Game::Collage,
        Game::Reinas,
        Game::Mica,
        Game::Kintsugi,
        Game::Pong,
        Game::Reaction,
        Game::Typing,
        Game::Chess,
        Game::Checkers,
        Game::Connect4,
        Game::Reversi,
        Game::Restaurador,
    ];

    /// The route key the game lives under.
    pub fn route(self) -> &'static str {
        match self {
            Game::Oca => "/juego",
            Game::Tetris => "/tetris",
            Game::Memory => "/memory",
            Game::Puzzle => "/puzzle",
            Game::Snake => "/snake",
            Game::Breakout => "/breakout",
            Game::Whack => "/whack",
            Game::Simon => "/simon",
            Game::Quiz => "/quiz",
            Game::Catch => "/catch",
            Game::Collage => "/collage",
            Game::Reinas => "/reinas",
            Game::Mica => "/mica",
            Game::Kintsugi => "/kintsugi",
            Game::Pong => "/pong",
            Game::Reaction => "/reaction",
            Game::Typing => "/typing",
            Game::Chess => "/chess",
            Game::Checkers => "/checkers",
            Game::Connect4 => "/connect4",
            Game::Reversi => "/reversi",
            Game::Restaurador => "/restaurador",
        }
    }

    /// The id of the view the game is drawn in.
    pub fn view(self) -> &'static str {
        match self {
            Game::Oca => "view-juego",
            Game::Tetris => "view-tetris",
            Game::Memory => "view-memory",
            Game::Puzzle => "view-puzzle",
            Game::Snake => "view-snake",
            Game::Breakout => "view-breakout",
            Game::Whack => "view-whack",
            Game::Simon => "view-simon",
            Game::Quiz => "view-quiz",
            Game::Catch => "view-catch",
            Game::Collage => "view-collage",
            Game::Reinas => "view-reinas",
            Game::Mica => "view-mica",
            Game::Kintsugi => "view-kintsugi",
            Game::Pong => "view-pong",
            Game::Reaction => "view-reaction",
            Game::Typing => "view-typing",
            Game::Chess => "view-chess",
            Game::Checkers => "view-checkers",
            Game::Connect4 => "view-connect4",
            Game::Reversi => "view-reversi",
            Game::Restaurador => "view-restaurador",
        }
    }

    /// How the game's script is started.
    pub fn entry(self) -> GameEntry {
        match self {
            Game::Oca => GameEntry::Object("OcaGame"),
            Game::Tetris => GameEntry::Object("TetrisGame"),
            Game::Memory => GameEntry::Object("MemoryGame"),
            Game::Puzzle => GameEntry::Object("PuzzleGame"),
            Game::Snake => GameEntry::Object("SnakeGame"),
            Game::Breakout => GameEntry::Object("BreakoutGame"),
            Game::Whack => GameEntry::Object("WhackGame"),
            Game::Simon => GameEntry::Object("SimonGame"),
            Game::Quiz => GameEntry::Object("QuizGame"),
            Game::Catch => GameEntry::Object("CatchGame"),
            Game::Collage => GameEntry::Object("CollageGame"),
            Game::Reinas => GameEntry::Object("ReinasGame"),
            Game::Mica => GameEntry::Object("MicaGame"),
            Game::Kintsugi => GameEntry::Object("KintsugiGame"),
            Game::Pong => GameEntry::Object("PongGame"),
            Game::Reaction => GameEntry::Object("ReactionGame"),
            Game::Typing => GameEntry::Object("TypingGame"),
            Game::Chess => GameEntry::Mount {
                function: "initChessGame",
                container: "chess-container",
            },
            Game::Checkers => GameEntry::Mount {
                function: "initCheckersGame",
                container: "checkers-container",
            },
            Game::Connect4 => GameEntry::Mount {
                function: "initConnect4Game",
                container: "connect4-container",
            },
            Game::Reversi => GameEntry::Mount {
                function: "initReversiGame",
                container: "reversi-container",
            },
            Game::Restaurador => GameEntry::Object("RestauradorGame"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn routes_and_views_are_unique() {
        let routes: HashSet<_> = Game::ALL.iter().map(|g| g.route()).collect();
        let views: HashSet<_> = Game::ALL.iter().map(|g| g.view()).collect();
        assert_eq!(routes.len(), Game::ALL.len());
        assert_eq!(views.len(), Game::ALL.len());
    }

    #[test]
    fn views_follow_routes() {
        for game in Game::ALL {
            assert_eq!(
                game.view().strip_prefix("view-"),
                game.route().strip_prefix('/'),
                "{game:?}"
            );
        }
    }
}
