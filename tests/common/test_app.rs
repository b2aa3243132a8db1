use bevy::prelude::*;
use owlwing::{
    resources::{CurrentFrame, SeparationAngle, VizConfig},
    systems::{SelectAngle, SelectTab},
    views::{Panel, Tab},
    VisualizationPlugin,
};

// Builder for creating a test application with customizable configuration
pub struct TestAppBuilder {
    config: VizConfig,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self {
            config: VizConfig::default(),
        }
    }
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tab(mut self, tab: Tab) -> Self {
        self.config.initial_tab = tab;
        self
    }

    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.config.initial_angle = degrees;
        self
    }

    pub fn with_pixel_density(mut self, density: f32) -> Self {
        self.config.render.pixel_density = density;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(VisualizationPlugin::new(self.config));

        // Paint the initial frame
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.app.world_mut().send_event(SelectTab { tab });
        self.app.update();
    }

    pub fn select_angle(&mut self, degrees: f64) {
        self.app.world_mut().send_event(SelectAngle { degrees });
        self.app.update();
    }

    pub fn tab(&self) -> Tab {
        *self.app.world().resource::<State<Tab>>().get()
    }

    pub fn angle(&self) -> f64 {
        self.app.world().resource::<SeparationAngle>().0
    }

    pub fn frame(&self) -> &CurrentFrame {
        self.app.world().resource::<CurrentFrame>()
    }

    pub fn panel(&self) -> &Panel {
        self.frame().panel.as_ref().expect("no frame painted")
    }

    pub fn get_state<T: Resource>(&self) -> Option<&T> {
        self.app.world().get_resource::<T>()
    }
}
