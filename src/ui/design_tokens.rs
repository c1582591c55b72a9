// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the player screen.
//!
//! # Organization
//!
//! - **Palette**: Base colors
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Radius**: Border radii
//! - **Shadow**: Shadow definitions
//!
//! Progress track geometry lives with the snapshot in
//! [`crate::screen::snapshot::track`] since the screen's hit-testing uses it.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Progress fill and seek handle.
    pub const ACCENT_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Dimming layer behind the transport controls.
    pub const OVERLAY_DIM: f32 = 0.4;
    /// Disabled forward/backward buttons.
    pub const DISABLED: f32 = 0.6;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const LG: f32 = 24.0; // 3 units
    pub const XXL: f32 = 40.0; // 5 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    /// Play/pause button diameter.
    pub const TRANSPORT_PRIMARY: f32 = 72.0;
    /// Forward/backward button diameter.
    pub const TRANSPORT_SECONDARY: f32 = 56.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXL > spacing::LG);

    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_DIM > 0.0 && opacity::OVERLAY_DIM < opacity::DISABLED);
    assert!(opacity::DISABLED < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < opacity::OVERLAY_HOVER);
    assert!(opacity::OVERLAY_HOVER < opacity::OPAQUE);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::TRANSPORT_PRIMARY > sizing::TRANSPORT_SECONDARY);
};
