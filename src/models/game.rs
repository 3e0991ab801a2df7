//! Game state model - the application layer for chess game state.
//!
//! Owns the board, the live pieces, the turn history, the drag in progress
//! and a pending promotion. No GPUI dependencies, the views drive it.

use crate::domain::{
    Action, Board, Direction, History, MalformedFen, PieceColor, PieceId, PieceKind, Position,
    Turn, decode, encode,
};
use crate::settings::Settings;

use super::pieces::{Highlight, PieceInstance, PieceSet, TurnEffect};
use super::sound::SoundCue;

/// State for a piece being dragged
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    pub piece_id: PieceId,
    pub from: Position,
    /// Square under the pointer, if it is over the board
    pub hover: Option<Position>,
    /// Mouse position relative to the board panel
    pub mouse_x: f32,
    pub mouse_y: f32,
}

/// A relocation waiting for the promotion choice
#[derive(Clone, Debug, PartialEq)]
pub struct PendingPromotion {
    pub at: Position,
    pub color: PieceColor,
    turn: Turn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromotionChoice {
    Queen,
    Rook,
    Bishop,
    Knight,
    Cancel,
}

impl PromotionChoice {
    /// Choices in the order the picker shows them
    pub const ALL: [PromotionChoice; 5] = [
        PromotionChoice::Queen,
        PromotionChoice::Rook,
        PromotionChoice::Bishop,
        PromotionChoice::Knight,
        PromotionChoice::Cancel,
    ];

    pub fn kind(self) -> Option<PieceKind> {
        match self {
            PromotionChoice::Queen => Some(PieceKind::Queen),
            PromotionChoice::Rook => Some(PieceKind::Rook),
            PromotionChoice::Bishop => Some(PieceKind::Bishop),
            PromotionChoice::Knight => Some(PieceKind::Knight),
            PromotionChoice::Cancel => None,
        }
    }
}

/// Result of dropping a piece
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Nothing happened (same square, empty square, off board)
    Ignored,
    /// The turn was applied and recorded
    Committed(TurnEffect),
    /// A pawn reached the last rank; waiting for [`GameModel::end_promotion`]
    PromotionPending(TurnEffect),
}

impl MoveOutcome {
    pub fn sound(&self) -> Option<SoundCue> {
        match self {
            MoveOutcome::Ignored => None,
            MoveOutcome::Committed(effect) | MoveOutcome::PromotionPending(effect) => {
                SoundCue::for_effect(effect)
            }
        }
    }
}

/// The main game model containing all chess game state
pub struct GameModel {
    board: Board,
    pieces: PieceSet,
    history: History,
    highlight: Option<Highlight>,
    promotion: Option<PendingPromotion>,
    /// FEN the current game was set up from
    start_fen: String,
    /// Drag state for piece movement
    pub drag_state: Option<DragState>,
    pub settings: Settings,
}

impl GameModel {
    /// A new game from the configured start position.
    ///
    /// Settings are validated on load, so a bad start position here falls
    /// back to the standard one.
    pub fn new(settings: Settings) -> Self {
        let board = decode(&settings.start_fen).unwrap_or_else(|err| {
            tracing::warn!("{err}, using the standard start position");
            Board::starting()
        });
        let start_fen = encode(&board);
        Self {
            pieces: PieceSet::from_board(&board),
            board,
            history: History::new(),
            highlight: None,
            promotion: None,
            start_fen,
            drag_state: None,
            settings,
        }
    }

    /// Replace the whole game with the position in `fen`.
    ///
    /// On error the current game is left untouched.
    pub fn new_game(&mut self, fen: &str) -> Result<(), MalformedFen> {
        let board = decode(fen)?;
        tracing::info!(fen = %encode(&board), "new game");
        self.pieces = PieceSet::from_board(&board);
        self.start_fen = encode(&board);
        self.board = board;
        // old turns refer to the old pieces' ids
        self.history.clear();
        self.highlight = None;
        self.promotion = None;
        self.drag_state = None;
        Ok(())
    }

    /// Start over from the position the current game was set up from
    pub fn restart(&mut self) {
        let fen = self.start_fen.clone();
        if let Err(err) = self.new_game(&fen) {
            tracing::warn!("{err}");
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn pieces(&self) -> impl Iterator<Item = &PieceInstance> {
        self.pieces.iter()
    }

    pub fn piece_at(&self, pos: Position) -> Option<&PieceInstance> {
        self.pieces.alive_at(pos)
    }

    pub fn side_to_move(&self) -> PieceColor {
        self.board.side_to_move
    }

    pub fn highlight(&self) -> Option<Highlight> {
        self.highlight
    }

    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        self.promotion.as_ref()
    }

    pub fn start_side(&self) -> PieceColor {
        if self.history.cursor() % 2 == 0 {
            self.board.side_to_move
        } else {
            self.board.side_to_move.opposite()
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.promotion.is_none() && !self.history.is_at_start()
    }

    pub fn can_go_forward(&self) -> bool {
        self.promotion.is_none() && !self.history.is_at_head()
    }

    /// FEN of the position currently on screen
    pub fn current_fen(&self) -> String {
        let mut board = self.board.clone();
        board.grid = self.pieces.to_grid();
        encode(&board)
    }

    /// Pick up the piece on `square`. Returns whether a drag started.
    pub fn grab(&mut self, square: Position, mouse_x: f32, mouse_y: f32) -> bool {
        if self.drag_state.is_some() {
            return false;
        }
        let Some(piece) = self.pieces.alive_at(square) else {
            return false;
        };
        if !piece.can_move {
            return false;
        }
        let piece_id = piece.id.clone();
        self.pieces.set_dragging(Some(&piece_id));
        self.drag_state = Some(DragState {
            piece_id,
            from: square,
            hover: Some(square),
            mouse_x,
            mouse_y,
        });
        true
    }

    pub fn drag_to(&mut self, mouse_x: f32, mouse_y: f32, hover: Option<Position>) {
        if let Some(drag) = self.drag_state.as_mut() {
            drag.mouse_x = mouse_x;
            drag.mouse_y = mouse_y;
            drag.hover = hover;
        }
    }

    /// Drop the dragged piece on `square` (`None` when off the board)
    pub fn release(&mut self, square: Option<Position>) -> MoveOutcome {
        let Some(drag) = self.drag_state.take() else {
            return MoveOutcome::Ignored;
        };
        self.pieces.set_dragging(None);
        match square {
            Some(to) => self.move_piece(drag.from, to),
            None => MoveOutcome::Ignored,
        }
    }

    /// Relocate the piece on `from` to `to`, capturing whatever stands there.
    pub fn move_piece(&mut self, from: Position, to: Position) -> MoveOutcome {
        if from == to || self.promotion.is_some() {
            return MoveOutcome::Ignored;
        }
        let Some(piece) = self.pieces.alive_at(from).filter(|p| p.can_move) else {
            return MoveOutcome::Ignored;
        };
        let id = piece.id.clone();
        let (kind, color) = (piece.kind, piece.color);

        let mut turn = Turn::default();
        if let Some(target) = self.pieces.alive_at(to) {
            turn.push(Action::Take {
                id: target.id.clone(),
                at: to,
            });
        }
        turn.push(Action::Move {
            id: id.clone(),
            from,
            to,
        });
        turn.push(Action::UiHighlight {
            id,
            from_from: self.highlight.map(|h| h.from),
            from_to: self.highlight.map(|h| h.to),
            to_from: from,
            to_to: to,
        });

        let effect = self.apply(&turn, Direction::Forward);

        if kind == PieceKind::Pawn && to.row == color.promotion_row() {
            tracing::debug!(at = %to, ?color, "promotion pending");
            self.promotion = Some(PendingPromotion {
                at: to,
                color,
                turn,
            });
            self.pieces.refresh_mobility(self.board.side_to_move, true);
            return MoveOutcome::PromotionPending(effect);
        }

        self.commit(turn);
        MoveOutcome::Committed(effect)
    }

    /// Resolve a pending promotion. Cancelling takes the relocation back.
    pub fn end_promotion(&mut self, choice: PromotionChoice) -> Option<TurnEffect> {
        let pending = self.promotion.take()?;

        let Some(to_kind) = choice.kind() else {
            tracing::debug!(at = %pending.at, "promotion cancelled");
            let effect = self.apply(&pending.turn, Direction::Backward);
            return Some(effect);
        };

        let mut turn = pending.turn;
        let Some(pawn) = self
            .pieces
            .alive_at_mut(pending.at)
            .filter(|p| p.color == pending.color)
        else {
            tracing::warn!(at = %pending.at, "promoted pawn is missing");
            self.apply(&turn, Direction::Backward);
            return None;
        };
        pawn.kind = to_kind;
        turn.push(Action::Transform {
            id: pawn.id.clone(),
            from_kind: PieceKind::Pawn,
            to_kind,
        });
        tracing::debug!(at = %pending.at, ?to_kind, "promoted");
        self.commit(turn);
        Some(TurnEffect::default())
    }

    /// Redo the next turn in the history
    pub fn next_move(&mut self) -> Option<TurnEffect> {
        if self.promotion.is_some() {
            return None;
        }
        self.cancel_drag();
        let turn = self.history.step_forward()?.clone();
        tracing::trace!(cursor = self.history.cursor(), "step forward");
        self.board.flip_side_to_move();
        Some(self.apply(&turn, Direction::Forward))
    }

    /// Take back the last applied turn
    pub fn previous_move(&mut self) -> Option<TurnEffect> {
        if self.promotion.is_some() {
            return None;
        }
        self.cancel_drag();
        let turn = self.history.step_backward()?.clone();
        tracing::trace!(cursor = self.history.cursor(), "step backward");
        self.board.flip_side_to_move();
        Some(self.apply(&turn, Direction::Backward))
    }

    /// Put a dragged piece back without moving it
    pub fn cancel_drag(&mut self) {
        if self.drag_state.take().is_some() {
            self.pieces.set_dragging(None);
        }
    }

    fn commit(&mut self, turn: Turn) {
        tracing::debug!(
            actions = turn.actions.len(),
            cursor = self.history.cursor(),
            "turn committed"
        );
        self.history.append(turn);
        self.board.flip_side_to_move();
        self.pieces.refresh_mobility(self.board.side_to_move, false);
    }

    fn apply(&mut self, turn: &Turn, direction: Direction) -> TurnEffect {
        let effect = self.pieces.apply_turn(turn, direction);
        if let Some(highlight) = effect.highlight {
            self.highlight = highlight;
        }
        self.pieces
            .refresh_mobility(self.board.side_to_move, self.promotion.is_some());
        effect
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
