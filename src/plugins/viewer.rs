use bevy::{prelude::*, state::app::StatesPlugin};

use crate::{
    resources::{CurrentFrame, SeparationAngle, VizConfig},
    systems::{
        handle_angle_selection, handle_tab_selection, repaint_system, SelectAngle, SelectTab,
    },
    views::Study,
};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum ViewerSystemSet {
    Input,
    Repaint,
}

/// Headless owl-wing study viewer: tab state, angle selection and repaint.
pub struct VisualizationPlugin {
    config: VizConfig,
}

impl VisualizationPlugin {
    pub fn new(config: VizConfig) -> Self {
        Self { config }
    }
}

impl Default for VisualizationPlugin {
    fn default() -> Self {
        Self::new(VizConfig::default())
    }
}

impl Plugin for VisualizationPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<StatesPlugin>() {
            app.add_plugins(StatesPlugin);
        }

        app.insert_resource(self.config.clone())
            .init_resource::<Study>()
            .insert_resource(SeparationAngle(self.config.initial_angle))
            .init_resource::<CurrentFrame>()
            .insert_state(self.config.initial_tab)
            .add_event::<SelectTab>()
            .add_event::<SelectAngle>()
            .add_systems(
                PreUpdate,
                (handle_tab_selection, handle_angle_selection).in_set(ViewerSystemSet::Input),
            )
            .add_systems(PostUpdate, repaint_system.in_set(ViewerSystemSet::Repaint));

        info!(
            "Viewer ready on {:?} at {}°",
            self.config.initial_tab, self.config.initial_angle
        );
    }
}
