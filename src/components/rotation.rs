// src/components/rotation.rs

use serde::{Deserialize, Serialize};

use crate::ecs::component::Component;

/// シャッフルで付く見た目だけの回転 (度)。物理には影響しない。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rotation {
    pub degrees: f32,
}

impl Component for Rotation {}

impl Rotation {
    /// CSS の `transform` にそのまま入れる文字列。
    pub fn to_css(&self) -> String {
        format!("rotate({}deg)", self.degrees)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_css() {
        assert_eq!(Rotation { degrees: -12.5 }.to_css(), "rotate(-12.5deg)");
        assert_eq!(Rotation::default().to_css(), "rotate(0deg)");
    }
}
