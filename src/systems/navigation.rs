use bevy::prelude::*;

use crate::{
    resources::SeparationAngle,
    views::{Study, Tab},
};

/// Switch the active tab.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SelectTab {
    pub tab: Tab,
}

/// Pick the separation angle of attack, in degrees.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SelectAngle {
    pub degrees: f64,
}

pub fn handle_tab_selection(
    mut requests: EventReader<SelectTab>,
    current: Res<State<Tab>>,
    mut next: ResMut<NextState<Tab>>,
) {
    // Last request in a frame wins
    if let Some(request) = requests.read().last() {
        if *current.get() == request.tab {
            debug!("Tab {:?} already active", request.tab);
            return;
        }
        info!("Switching tab: {:?} -> {:?}", current.get(), request.tab);
        next.set(request.tab);
    }
}

pub fn handle_angle_selection(
    mut requests: EventReader<SelectAngle>,
    study: Res<Study>,
    mut angle: ResMut<SeparationAngle>,
) {
    for request in requests.read() {
        if !study.separation.contains(request.degrees) {
            warn!(
                "No separation data at {}°, overlay will be empty",
                request.degrees
            );
        }
        if angle.set_if_neq(SeparationAngle(request.degrees)) {
            info!("Separation angle set to {}°", request.degrees);
        }
    }
}
