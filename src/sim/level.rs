//! Brick wall generators
//!
//! Every generator fills `line_count` full rows across the draw area. The
//! staggered layouts shift odd rows left by half a brick and plug the gap at
//! the right end of each odd row with one extra brick.

use std::str::FromStr;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::brick::{Brick, BrickKind};
use super::geom::Bounds;
use crate::error::GameError;

/// Wall pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelKind {
    /// Checkerboard on even rows, center band on odd rows
    Chain,
    /// Two center columns of type A through every row
    TwoLines,
    /// Every brick gets a random material
    Random,
    /// Unstaggered rows alternating A/B
    StraightLines,
}

impl LevelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LevelKind::Chain => "chain",
            LevelKind::TwoLines => "two_lines",
            LevelKind::Random => "random",
            LevelKind::StraightLines => "straight_lines",
        }
    }

    pub fn is_staggered(&self) -> bool {
        !matches!(self, LevelKind::StraightLines)
    }

    /// Lay out a brick wall.
    ///
    /// `brick_count` is truncated to a multiple of `line_count` first. Brick
    /// width is the area width over bricks per row; height is width over
    /// `size_ratio`. Staggered patterns add `line_count / 2` extra bricks.
    #[allow(clippy::too_many_arguments)]
    pub fn generate<R: Rng>(
        &self,
        area: &Bounds,
        brick_count: usize,
        line_count: usize,
        size_ratio: f32,
        type_a: BrickKind,
        type_b: BrickKind,
        rng: &mut R,
    ) -> Result<Vec<Brick>, GameError> {
        let layout = LevelLayout::new(area, brick_count, line_count, size_ratio)?;
        Ok(self.build(&layout, type_a, type_b, rng))
    }

    /// Lay out a wall on an already validated layout
    pub fn build<R: Rng>(
        &self,
        layout: &LevelLayout,
        type_a: BrickKind,
        type_b: BrickKind,
        rng: &mut R,
    ) -> Vec<Brick> {
        let staggered = self.is_staggered();

        let mut bricks = Vec::with_capacity(layout.len(staggered));
        let mut next_id = 1u32;
        let mut push = |bricks: &mut Vec<Brick>, kind: BrickKind, pos: Vec2| {
            bricks.push(Brick::new(next_id, kind, pos, layout.brick_size));
            next_id += 1;
        };

        for i in 0..layout.full_count() {
            let line = i / layout.per_row;
            let col = i % layout.per_row;
            let kind = match self {
                LevelKind::Chain => {
                    let pick_a = if line % 2 == 0 {
                        i % 2 == 0
                    } else {
                        layout.in_center_band(col)
                    };
                    if pick_a { type_a } else { type_b }
                }
                LevelKind::TwoLines => {
                    if layout.in_center_band(col) { type_a } else { type_b }
                }
                LevelKind::Random => random_kind(rng),
                LevelKind::StraightLines => {
                    if i % 2 == 0 { type_a } else { type_b }
                }
            };
            push(&mut bricks, kind, layout.cell_position(line, col, staggered));
        }

        if staggered {
            for k in 0..layout.extra_count() {
                let kind = match self {
                    LevelKind::Chain => type_a,
                    LevelKind::TwoLines | LevelKind::StraightLines => type_b,
                    LevelKind::Random => random_kind(rng),
                };
                push(&mut bricks, kind, layout.extra_position(k));
            }
        }

        log::info!(
            "generated {} level: {} bricks ({} per row, {} lines, {:.1}x{:.1})",
            self.as_str(),
            bricks.len(),
            layout.per_row,
            layout.line_count,
            layout.brick_size.x,
            layout.brick_size.y
        );
        bricks
    }
}

impl FromStr for LevelKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "chain" | "chessboard" | "checkerboard" => Ok(LevelKind::Chain),
            "two_lines" | "twolines" => Ok(LevelKind::TwoLines),
            "random" => Ok(LevelKind::Random),
            "straight_lines" | "straightlines" | "straight" => Ok(LevelKind::StraightLines),
            _ => Err(GameError::UnknownLevel { name: s.to_string() }),
        }
    }
}

fn random_kind<R: Rng>(rng: &mut R) -> BrickKind {
    BrickKind::ALL[rng.random_range(0..BrickKind::ALL.len())]
}

/// Row/column geometry shared by all generators
#[derive(Debug, Clone, Copy)]
pub struct LevelLayout {
    pub origin: Vec2,
    pub line_count: usize,
    pub per_row: usize,
    pub brick_size: Vec2,
}

impl LevelLayout {
    pub fn new(
        area: &Bounds,
        brick_count: usize,
        line_count: usize,
        size_ratio: f32,
    ) -> Result<Self, GameError> {
        if line_count == 0 || brick_count < line_count {
            return Err(GameError::InvalidLayout {
                brick_count,
                line_count,
            });
        }
        if !(size_ratio.is_finite() && size_ratio > 0.0) {
            return Err(GameError::InvalidRatio {
                ratio: size_ratio.to_string(),
            });
        }
        let truncated = brick_count - brick_count % line_count;
        let per_row = truncated / line_count;
        let width = area.width() / per_row as f32;
        Ok(Self {
            origin: area.pos,
            line_count,
            per_row,
            brick_size: Vec2::new(width, width / size_ratio),
        })
    }

    /// Bricks in the full rows
    pub fn full_count(&self) -> usize {
        self.per_row * self.line_count
    }

    /// Bricks plugging the right end of odd rows
    pub fn extra_count(&self) -> usize {
        self.line_count / 2
    }

    pub fn len(&self, staggered: bool) -> usize {
        if staggered {
            self.full_count() + self.extra_count()
        } else {
            self.full_count()
        }
    }

    /// Columns strictly after `per_row/2 - 1` up to `per_row/2 + 1`
    pub fn in_center_band(&self, col: usize) -> bool {
        let half = self.per_row / 2;
        col + 1 > half && col <= half + 1
    }

    fn cell_position(&self, line: usize, col: usize, staggered: bool) -> Vec2 {
        let mut x = col as f32 * self.brick_size.x;
        if staggered && line % 2 == 1 {
            x -= self.brick_size.x / 2.0;
        }
        let y = line as f32 * self.brick_size.y;
        self.origin + Vec2::new(x, y)
    }

    /// k-th extra brick sits at the end of odd row 2k+1
    fn extra_position(&self, k: usize) -> Vec2 {
        let x = self.per_row as f32 * self.brick_size.x - self.brick_size.x / 2.0;
        let y = (2 * k + 1) as f32 * self.brick_size.y;
        self.origin + Vec2::new(x, y)
    }
}

/// A configured level: pattern plus its two materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub kind: LevelKind,
    pub type_a: BrickKind,
    pub type_b: BrickKind,
}

impl LevelSpec {
    pub fn new(kind: LevelKind, type_a: BrickKind, type_b: BrickKind) -> Self {
        Self {
            kind,
            type_a,
            type_b,
        }
    }

    /// Resolve names coming from configuration
    pub fn parse(kind: &str, type_a: &str, type_b: &str) -> Result<Self, GameError> {
        Ok(Self::new(kind.parse()?, type_a.parse()?, type_b.parse()?))
    }
}
