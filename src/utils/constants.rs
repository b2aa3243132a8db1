// Canvas sizes in logical units (width, height)
pub const AIRFOIL_CANVAS: (u32, u32) = (600, 300);
pub const LIFT_DRAG_CANVAS: (u32, u32) = (600, 400);
pub const SEPARATION_CANVAS: (u32, u32) = (600, 320);
pub const ACOUSTIC_CANVAS: (u32, u32) = (500, 450);

pub const AIRFOIL_SAMPLES: usize = 100; // chord positions in the generated profile
pub const DEFAULT_SEPARATION_ANGLE: f64 = 6.0; // degrees
pub const MAX_PIXEL_DENSITY: f32 = 8.0; // keeps every canvas well inside tiny-skia's pixmap limits

pub const FONT_FAMILY: &str = "Arial";
pub const CAPTION_FONT_SIZE: f32 = 14.0;
pub const LABEL_FONT_SIZE: f32 = 12.0;
pub const SMALL_FONT_SIZE: f32 = 10.0;

pub const PAGE_TITLE: &str = "Bionic Owl Wing Airfoil Analysis";
