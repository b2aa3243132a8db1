mod navigation;
mod repaint;

pub use navigation::{handle_angle_selection, handle_tab_selection, SelectAngle, SelectTab};
pub use repaint::repaint_system;
