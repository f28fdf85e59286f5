use eframe::egui::Color32;

// Buttons
pub const PRIMARY_BUTTON_BG: Color32 = Color32::from_rgb(76, 175, 80); // Green download button
pub const BUTTON_MAIN_TEXT: Color32 = Color32::from_rgb(255, 255, 255);
pub const BORDER_COLOR: Color32 = Color32::from_rgba_premultiplied(60, 60, 67, 15);

// Inputs
pub const INPUT_FILL: Color32 = Color32::from_rgb(250, 250, 250);
pub const INPUT_STROKE: Color32 = Color32::LIGHT_GRAY;

// Text
pub const SECONDARY_TEXT: Color32 = Color32::from_rgb(138, 138, 143);
pub const TEXT_ERROR: Color32 = Color32::from_rgb(200, 30, 30);

// Sizing & Spacing
pub const ROUNDING_FRAME: f32 = 4.0;
pub const ROUNDING_BUTTON: f32 = 8.0;
pub const MIN_SIZE_BUTTON: egui::Vec2 = egui::Vec2::new(120.0, 40.0);
pub const INPUT_HEIGHT: f32 = 30.0;
pub const BUTTON_FONT_SIZE: f32 = 16.0;
