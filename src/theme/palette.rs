//! Color constants and font size tokens for consistent UI theming.

#![allow(dead_code)] // Tokens are shared across screens; not all are used everywhere.

use bevy::prelude::*;

// === Text Colors ===

/// Header/title text color (white).
pub const HEADER_TEXT: Color = Color::WHITE;

/// Body/subtitle text color (light gray).
pub const BODY_TEXT: Color = Color::srgb(0.7, 0.7, 0.7);

/// Button label text color.
pub const BUTTON_TEXT: Color = Color::srgb(0.925, 0.925, 0.925);

/// Combo counter text (hot orange).
pub const COMBO_TEXT: Color = Color::srgb(1.0, 0.6, 0.1);

/// Perfect-guard flash text (cyan).
pub const PERFECT_GUARD_TEXT: Color = Color::srgb(0.3, 0.9, 1.0);

/// Super flash text (gold).
pub const SUPER_FLASH_TEXT: Color = Color::srgb(1.0, 0.85, 0.0);

/// Victory headline (green).
pub const VICTORY_TEXT: Color = Color::srgb(0.2, 0.9, 0.3);

/// Defeat headline (red).
pub const DEFEAT_TEXT: Color = Color::srgb(0.9, 0.2, 0.2);

// === UI Backgrounds ===

/// Semi-transparent dark overlay for pause/endgame screens.
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

/// Panel background (dark blue-gray, nearly opaque).
pub const PANEL_BACKGROUND: Color = Color::srgba(0.1, 0.1, 0.15, 0.95);

/// Panel border (light blue-gray, semi-transparent).
pub const PANEL_BORDER: Color = Color::srgba(0.5, 0.5, 0.6, 0.8);

// === Button Colors ===

pub const BUTTON_BACKGROUND: Color = Color::srgb(0.275, 0.4, 0.75);
pub const BUTTON_HOVERED_BACKGROUND: Color = Color::srgb(0.384, 0.6, 0.82);
pub const BUTTON_PRESSED_BACKGROUND: Color = Color::srgb(0.239, 0.286, 0.6);

// === HUD Bars ===

/// Shared track color behind every stat/progress bar.
pub const STAT_BAR_BG: Color = Color::srgb(0.15, 0.15, 0.2);

pub const HEALTH_BAR_FILL: Color = Color::srgb(0.1, 0.9, 0.1);
pub const SUPER_METER_FILL: Color = Color::srgb(0.3, 0.5, 0.9);
pub const CHARGE_FILL: Color = Color::srgb(1.0, 0.6, 0.1);
pub const LOADING_BAR_FILL: Color = Color::srgb(0.3, 0.5, 0.9);

// === Arena Colors ===

/// Daytime sky (also the fog tint).
pub const SKY: Color = Color::srgb(0.53, 0.81, 0.92);

pub const ARENA_FLOOR: Color = Color::srgb(0.25, 0.25, 0.25);
pub const ARENA_WALL: Color = Color::srgb(0.4, 0.4, 0.4);

/// The challenger's block is always tinted red.
pub const OPPONENT_BLOCK: Color = Color::srgb(1.0, 0.267, 0.267);

// === Font Size Tokens ===

pub const FONT_SIZE_TITLE: f32 = 72.0;
pub const FONT_SIZE_HEADER: f32 = 64.0;
pub const FONT_SIZE_LABEL: f32 = 32.0;
pub const FONT_SIZE_HUD: f32 = 28.0;
pub const FONT_SIZE_PROMPT: f32 = 24.0;
pub const FONT_SIZE_BODY: f32 = 16.0;
