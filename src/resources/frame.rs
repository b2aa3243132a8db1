use bevy::prelude::*;

use crate::{utils::DEFAULT_SEPARATION_ANGLE, views::Panel};

/// Angle of attack, in degrees, shown by the separation view.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SeparationAngle(pub f64);

impl Default for SeparationAngle {
    fn default() -> Self {
        Self(DEFAULT_SEPARATION_ANGLE)
    }
}

/// Most recent repaint of the active tab.
#[derive(Resource, Debug, Default)]
pub struct CurrentFrame {
    pub panel: Option<Panel>,
    /// PNG encoding of `panel.scene`.
    pub png: Vec<u8>,
    /// Bumped on every repaint.
    pub generation: u64,
}

impl CurrentFrame {
    pub fn update(&mut self, panel: Panel, png: Vec<u8>) {
        self.panel = Some(panel);
        self.png = png;
        self.generation += 1;
    }

    pub fn is_empty(&self) -> bool {
        self.panel.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::{render_panel, Study, Tab};

    #[test]
    fn test_frame_generation_counts_updates() {
        let study = Study::default();
        let mut frame = CurrentFrame::default();
        assert!(frame.is_empty());

        frame.update(render_panel(&study, Tab::Airfoil, 6.0), vec![1, 2, 3]);
        frame.update(render_panel(&study, Tab::Acoustic, 6.0), vec![4]);
        assert_eq!(frame.generation, 2);
        assert_eq!(frame.panel.as_ref().map(|p| p.tab), Some(Tab::Acoustic));
        assert_eq!(frame.png, vec![4]);
    }
}
