use serde::Serialize;

/// Opaque source-position token.
///
/// Positions are minted by an external producer (typically the front-end
/// that builds the trees) and carried on every node. This crate never
/// interprets a position: it only stores it on construction and propagates
/// it when a node is rebuilt during rewriting.
///
/// The raw token space is the producer's to manage; `u32::MAX` is reserved
/// for the [`Position::NONE`] sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position(u32);

impl Position {
    /// The "no position" sentinel, carried by synthetic nodes and by the
    /// empty-tree sentinel.
    pub const NONE: Position = Position(u32::MAX);

    /// Wrap a raw producer token.
    pub fn new(token: u32) -> Position {
        Position(token)
    }

    /// The raw token handed in by the producer.
    pub fn token(self) -> u32 {
        self.0
    }

    /// True for the [`Position::NONE`] sentinel.
    pub fn is_none(self) -> bool {
        self == Position::NONE
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::NONE
    }
}

#[test]
fn test_none_sentinel() {
    assert!(Position::NONE.is_none());
    assert!(!Position::new(0).is_none());
    assert_eq!(Position::new(7).token(), 7);
}
