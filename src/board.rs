use crate::coord::Coord;
use crate::piece::{self, Color, Piece};

/// Opaque handle to a piece living in a board's arena.
///
/// Handles are issued by [`Board::add_piece`] and stay valid for the life of
/// the board; a captured piece keeps its handle, it merely stops being
/// referenced by any tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId(usize);

/// The (from, to) record delivered to a piece's post-move hook.
///
/// `from` is `None` when the piece was placed directly onto the board
/// outside normal play (e.g., initial setup); hooks skip their in-play
/// state transitions for such placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveEvent {
    pub from: Option<Coord>,
    pub to: Coord,
}

/// An uncommitted (piece, destination) pairing produced during selection.
///
/// Candidates live on their destination tile, are regenerated on every
/// selection cycle and never persist past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCandidate {
    pub piece: PieceId,
    pub to: Coord,
}

/// One cell of the board.
#[derive(Debug)]
pub struct Tile {
    coord: Coord,
    occupant: Option<PieceId>,
    candidate: Option<MoveCandidate>,
}

impl Tile {
    /// The tile's address, fixed at board construction.
    #[inline]
    pub fn coord(&self) -> Coord {
        self.coord
    }

    #[inline]
    pub fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    /// The pending candidate highlighted on this tile, if any.
    ///
    /// Transient selection state, not board truth; written only by the
    /// engine, read by renderers.
    #[inline]
    pub fn candidate(&self) -> Option<MoveCandidate> {
        self.candidate
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

#[derive(Debug)]
struct Slot {
    piece: Piece,
    /// Back-reference to the tile holding the piece; the lookup half of the
    /// placement relation. The tile's occupant field is the owning half.
    at: Option<Coord>,
}

/// The 8×8 grid of tiles plus the arena of every piece ever added.
///
/// The board is the sole authority for what occupies which coordinate;
/// detach-before-attach is enforced inside the single [`Board::place`]
/// primitive.
#[derive(Debug)]
pub struct Board {
    tiles: Vec<Tile>,
    pieces: Vec<Slot>,
}

impl Board {
    pub fn new() -> Self {
        let tiles = (0u8..64)
            .map(|i| Tile {
                coord: Coord::at(i % 8, i / 8),
                occupant: None,
                candidate: None,
            })
            .collect();
        Self {
            tiles,
            pieces: Vec::new(),
        }
    }

    #[inline]
    fn index(coord: Coord) -> usize {
        coord.rank() as usize * 8 + coord.file() as usize
    }

    /// The tile at `coord`. Total over valid coordinates.
    pub fn tile_at(&self, coord: Coord) -> &Tile {
        &self.tiles[Self::index(coord)]
    }

    pub fn piece_id_at(&self, coord: Coord) -> Option<PieceId> {
        self.tile_at(coord).occupant
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.piece_id_at(coord).map(|id| self.piece(id))
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0].piece
    }

    pub fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id.0].piece
    }

    /// Where `id` currently stands; `None` while it is off the board.
    pub fn coord_of(&self, id: PieceId) -> Option<Coord> {
        self.pieces[id.0].at
    }

    /// Adds a piece to the arena, unplaced.
    pub fn add_piece(&mut self, piece: Piece) -> PieceId {
        self.pieces.push(Slot { piece, at: None });
        PieceId(self.pieces.len() - 1)
    }

    /// Puts `piece` on `to`, then fires its move event.
    ///
    /// The piece leaves any tile it stood on and any previous occupant of
    /// `to` becomes unplaced (this is how captures work). Never fails; the
    /// moved piece's post-move hook runs synchronously before this returns
    /// and may mutate the board further (rook relocation, en-passant
    /// removal, promotion).
    pub fn place(&mut self, piece: PieceId, to: Coord) {
        let from = self.pieces[piece.0].at;
        if let Some(old) = from {
            self.tiles[Self::index(old)].occupant = None;
        }

        let displaced = self.tiles[Self::index(to)].occupant.replace(piece);
        if let Some(captured) = displaced {
            self.pieces[captured.0].at = None;
        }
        self.pieces[piece.0].at = Some(to);

        piece::dispatch_on_move(self, piece, MoveEvent { from, to }, displaced.is_some());
    }

    /// Takes the piece off `coord` without firing a move event.
    pub fn remove(&mut self, coord: Coord) -> Option<PieceId> {
        let id = self.tiles[Self::index(coord)].occupant.take()?;
        self.pieces[id.0].at = None;
        Some(id)
    }

    /// Every placed piece, in row-major tile order (a1, b1, ..., h8).
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> {
        self.tiles
            .iter()
            .filter_map(|tile| tile.occupant)
            .map(|id| self.piece(id))
    }

    pub fn pieces_of_color(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.all_pieces().filter(move |piece| piece.color == color)
    }

    /// Drops every tile's transient candidate highlight. Idempotent.
    pub fn clear_highlights(&mut self) {
        for tile in &mut self.tiles {
            tile.candidate = None;
        }
    }

    /// Highlights a pending candidate on its destination tile.
    pub(crate) fn set_candidate(&mut self, at: Coord, candidate: MoveCandidate) {
        self.tiles[Self::index(at)].candidate = Some(candidate);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
