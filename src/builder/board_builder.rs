//! Board builder: allocate gates and marbles before a game.

use tracing::debug;

use crate::core::{
    Board, BuildError, Color, Extension, GameRng, GateId, GateInfo, GateType, LayerId, LayerInfo,
    MarbleId, MarbleInfo, Orientation, RulesConfig,
};
use crate::rules::GameState;

use super::inventory::Inventory;
use super::placement::Placement;

/// Incrementally configures a board from the two players' inventories.
///
/// Gates are placed first, then marbles. A layer's orientation is fixed by
/// the first gate placed on it. Every placement can be undone in reverse
/// order.
///
/// Players take turns: every placement hands the turn to the other color,
/// silver first. [`BoardBuilder::play_gate`] and [`BoardBuilder::play_marble`]
/// place for the color at play; `place_gate` and `place_marble` name the
/// color explicitly. The color at play once the board is complete moves
/// first in the game.
///
/// ## Example
///
/// ```
/// use marble_drop::builder::BoardBuilder;
/// use marble_drop::core::{Color, Extension, GateId, GateType, LayerId, Orientation};
///
/// let mut builder = BoardBuilder::new();
/// let layer = LayerId::new(0).unwrap();
///
/// builder
///     .place_gate(layer, GateId::new(0).unwrap(), Orientation::Vertical,
///                 Extension::TopLeft, GateType::Near, Color::Silver)
///     .unwrap();
///
/// assert_eq!(builder.orientation(layer), Some(Orientation::Vertical));
/// assert_eq!(builder.remaining(Color::Silver, GateType::Near), 1);
///
/// assert_eq!(builder.color_at_play(), Color::Gold);
///
/// builder.undo();
/// assert_eq!(builder.orientation(layer), None);
/// assert_eq!(builder.color_at_play(), Color::Silver);
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    inventory: Inventory,
    orientations: [Option<Orientation>; 4],
    gates: [[Option<GateInfo>; 3]; 4],
    marbles: [Option<Color>; 9],
    placements: Vec<Placement>,
    color_at_play: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            inventory: Inventory::new(),
            orientations: [None; 4],
            gates: [[None; 3]; 4],
            marbles: [None; 9],
            placements: Vec::new(),
            color_at_play: Color::Silver,
        }
    }
}

impl BoardBuilder {
    /// Create an empty builder with full inventories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a complete random board from a seed.
    pub fn random(seed: u64) -> Result<Self, BuildError> {
        let mut builder = Self::new();
        builder.fill_random(&mut GameRng::new(seed))?;
        Ok(builder)
    }

    // === Queries ===

    /// Orientation fixed for `layer`, if any gate is placed on it.
    #[must_use]
    pub fn orientation(&self, layer: LayerId) -> Option<Orientation> {
        self.orientations[layer.index()]
    }

    #[must_use]
    pub fn gate(&self, layer: LayerId, gate: GateId) -> Option<&GateInfo> {
        self.gates[layer.index()][gate.index()].as_ref()
    }

    #[must_use]
    pub fn marble(&self, marble: MarbleId) -> Option<Color> {
        self.marbles[marble.index()]
    }

    /// Color whose turn it is to place.
    #[must_use]
    pub fn color_at_play(&self) -> Color {
        self.color_at_play
    }

    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// How many gates of `gate_type` `color` may still place.
    #[must_use]
    pub fn remaining(&self, color: Color, gate_type: GateType) -> u8 {
        self.inventory.remaining(color, gate_type)
    }

    /// Gate types `color` may still place.
    #[must_use]
    pub fn available_types(&self, color: Color) -> Vec<GateType> {
        self.inventory.available(color)
    }

    /// Placements made so far, oldest first.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    #[must_use]
    pub fn remaining_gates(&self) -> usize {
        self.gates.iter().flatten().filter(|g| g.is_none()).count()
    }

    #[must_use]
    pub fn remaining_marbles(&self) -> usize {
        self.marbles.iter().filter(|m| m.is_none()).count()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.remaining_gates() == 0 && self.remaining_marbles() == 0
    }

    // === Placement ===

    /// Place a gate for the color at play and pass the turn.
    pub fn play_gate(
        &mut self,
        layer: LayerId,
        gate: GateId,
        orientation: Orientation,
        extension: Extension,
        gate_type: GateType,
    ) -> Result<(), BuildError> {
        self.place_gate(layer, gate, orientation, extension, gate_type, self.color_at_play)
    }

    /// Give `marble` the color at play and pass the turn.
    pub fn play_marble(&mut self, marble: MarbleId) -> Result<(), BuildError> {
        self.place_marble(marble, self.color_at_play)
    }

    /// Place a gate owned by `owner` and pass the turn.
    ///
    /// Fails without change if the position is taken, the layer has a
    /// different orientation, or `owner` has no gate of that type left.
    pub fn place_gate(
        &mut self,
        layer: LayerId,
        gate: GateId,
        orientation: Orientation,
        extension: Extension,
        gate_type: GateType,
        owner: Color,
    ) -> Result<(), BuildError> {
        if self.gate(layer, gate).is_some() {
            return Err(BuildError::GateAlreadyPlaced { layer, gate });
        }
        if let Some(fixed) = self.orientation(layer) {
            if fixed != orientation {
                return Err(BuildError::OrientationMismatch {
                    layer,
                    fixed,
                    requested: orientation,
                });
            }
        }
        self.inventory.take(owner, gate_type)?;

        let info = GateInfo::new(owner, gate_type, extension);
        self.orientations[layer.index()] = Some(orientation);
        self.gates[layer.index()][gate.index()] = Some(info);
        self.placements.push(Placement::Gate {
            layer,
            gate,
            orientation,
            info,
        });
        self.color_at_play = self.color_at_play.opponent();

        debug!(%layer, %gate, %orientation, %gate_type, %owner, "gate placed");
        Ok(())
    }

    /// Give `marble` a color and pass the turn. Only allowed once every
    /// gate is placed.
    pub fn place_marble(&mut self, marble: MarbleId, color: Color) -> Result<(), BuildError> {
        let remaining = self.remaining_gates();
        if remaining > 0 {
            return Err(BuildError::GatesIncomplete { remaining });
        }
        if self.marble(marble).is_some() {
            return Err(BuildError::MarbleAlreadyPlaced(marble));
        }

        self.marbles[marble.index()] = Some(color);
        self.placements.push(Placement::Marble { marble, color });
        self.color_at_play = self.color_at_play.opponent();

        debug!(%marble, %color, "marble placed");
        Ok(())
    }

    /// Undo the most recent placement of either kind and take the turn back.
    ///
    /// Returns the placement undone, or `None` if nothing was placed.
    pub fn undo(&mut self) -> Option<Placement> {
        let placement = self.placements.pop()?;

        match placement {
            Placement::Gate {
                layer, gate, info, ..
            } => {
                self.gates[layer.index()][gate.index()] = None;
                self.inventory.restore(info.owner, info.gate_type);
                if self.gates[layer.index()].iter().all(Option::is_none) {
                    self.orientations[layer.index()] = None;
                }
            }
            Placement::Marble { marble, .. } => {
                self.marbles[marble.index()] = None;
            }
        }
        self.color_at_play = self.color_at_play.opponent();

        debug!(?placement, "placement undone");
        Some(placement)
    }

    /// Complete every outstanding placement with random legal choices.
    ///
    /// Turns keep alternating. A color with no gates left yields its
    /// turn's gate to the opponent, and each marble takes the color at play.
    pub fn fill_random(&mut self, rng: &mut GameRng) -> Result<(), BuildError> {
        for (layer, gate) in Board::gate_positions() {
            if self.gate(layer, gate).is_some() {
                continue;
            }

            let orientation = match self.orientation(layer) {
                Some(fixed) => fixed,
                None if rng.flip() => Orientation::Horizontal,
                None => Orientation::Vertical,
            };
            let extension = if rng.flip() {
                Extension::TopLeft
            } else {
                Extension::BottomRight
            };

            let owner = match self.color_at_play {
                c if self.inventory.total(c) > 0 => c,
                c if self.inventory.total(c.opponent()) > 0 => c.opponent(),
                _ => break,
            };
            let types = self.inventory.available(owner);
            let Some(&gate_type) = rng.choose(&types) else {
                break;
            };

            self.place_gate(layer, gate, orientation, extension, gate_type, owner)?;
        }

        for marble in MarbleId::all() {
            if self.marble(marble).is_none() {
                self.play_marble(marble)?;
            }
        }

        Ok(())
    }

    // === Output ===

    fn layer_info(&self, layer: LayerId) -> Option<LayerInfo> {
        let [a, b, c] = self.gates[layer.index()];
        Some(LayerInfo::new(self.orientation(layer)?, [a?, b?, c?]))
    }

    /// The finished board: every gate closed, every marble on the top layer.
    pub fn snapshot(&self) -> Result<Board, BuildError> {
        let gates_left = BuildError::GatesIncomplete {
            remaining: self.remaining_gates(),
        };
        let marbles_left = BuildError::MarblesIncomplete {
            remaining: self.remaining_marbles(),
        };

        let layers: Vec<LayerInfo> = LayerId::all()
            .map(|layer| self.layer_info(layer))
            .collect::<Option<_>>()
            .ok_or_else(|| gates_left.clone())?;
        let marbles: Vec<MarbleInfo> = self
            .marbles
            .iter()
            .map(|c| c.map(MarbleInfo::new))
            .collect::<Option<_>>()
            .ok_or_else(|| marbles_left.clone())?;

        let layers = layers.try_into().map_err(|_| gates_left)?;
        let marbles = marbles.try_into().map_err(|_| marbles_left)?;
        Ok(Board::new(layers, marbles))
    }

    /// Start a game on the finished board.
    ///
    /// The builder's color at play moves first; `config` supplies the
    /// remaining rules.
    pub fn finish(&self, config: RulesConfig) -> Result<GameState, BuildError> {
        let board = self.snapshot()?;
        debug!(
            placements = self.placements.len(),
            starting = %self.color_at_play,
            "board finished"
        );
        Ok(GameState::from_parts(
            board,
            config.with_starting_color(self.color_at_play),
        ))
    }
}
