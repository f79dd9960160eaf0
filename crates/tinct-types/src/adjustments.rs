// ABOUTME: Global hue/saturation/lightness adjustment data type
// ABOUTME: Clamped ranges with an identity default and a partial-merge patch

use serde::{Deserialize, Serialize};

const HUE_SHIFT_RANGE: (f32, f32) = (-180.0, 180.0);
const SATURATION_SCALE_RANGE: (f32, f32) = (0.0, 2.0);
const LIGHTNESS_SCALE_RANGE: (f32, f32) = (0.2, 2.0);

const IDENTITY_EPSILON: f32 = 1e-4;

/// A global color adjustment applied on top of the token values.
///
/// `hue_shift` is degrees in [-180, 180], `saturation_scale` in [0, 2],
/// `lightness_scale` in [0.2, 2]. The default is the identity adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HslAdjustments {
    #[serde(default)]
    pub hue_shift: f32,
    #[serde(default = "unit_scale")]
    pub saturation_scale: f32,
    #[serde(default = "unit_scale")]
    pub lightness_scale: f32,
}

fn unit_scale() -> f32 {
    1.0
}

impl Default for HslAdjustments {
    fn default() -> Self {
        Self {
            hue_shift: 0.0,
            saturation_scale: 1.0,
            lightness_scale: 1.0,
        }
    }
}

impl HslAdjustments {
    pub fn new(hue_shift: f32, saturation_scale: f32, lightness_scale: f32) -> Self {
        Self {
            hue_shift,
            saturation_scale,
            lightness_scale,
        }
        .clamped()
    }

    /// Clamp all components into their legal ranges.
    pub fn clamped(self) -> Self {
        Self {
            hue_shift: self.hue_shift.clamp(HUE_SHIFT_RANGE.0, HUE_SHIFT_RANGE.1),
            saturation_scale: self
                .saturation_scale
                .clamp(SATURATION_SCALE_RANGE.0, SATURATION_SCALE_RANGE.1),
            lightness_scale: self
                .lightness_scale
                .clamp(LIGHTNESS_SCALE_RANGE.0, LIGHTNESS_SCALE_RANGE.1),
        }
    }

    /// Whether this adjustment is a no-op within floating-point tolerance.
    pub fn is_identity(&self) -> bool {
        self.hue_shift.abs() < IDENTITY_EPSILON
            && (self.saturation_scale - 1.0).abs() < IDENTITY_EPSILON
            && (self.lightness_scale - 1.0).abs() < IDENTITY_EPSILON
    }

    /// Merge a partial update into this adjustment, clamping the result.
    pub fn apply(&mut self, patch: HslAdjustmentsPatch) {
        if let Some(hue_shift) = patch.hue_shift {
            self.hue_shift = hue_shift;
        }
        if let Some(saturation_scale) = patch.saturation_scale {
            self.saturation_scale = saturation_scale;
        }
        if let Some(lightness_scale) = patch.lightness_scale {
            self.lightness_scale = lightness_scale;
        }
        *self = self.clamped();
    }
}

/// Partial mirror of [`HslAdjustments`] for merge-style updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HslAdjustmentsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hue_shift: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturation_scale: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightness_scale: Option<f32>,
}

impl HslAdjustmentsPatch {
    pub fn hue_shift(hue_shift: f32) -> Self {
        Self {
            hue_shift: Some(hue_shift),
            ..Self::default()
        }
    }

    pub fn saturation_scale(saturation_scale: f32) -> Self {
        Self {
            saturation_scale: Some(saturation_scale),
            ..Self::default()
        }
    }

    pub fn lightness_scale(lightness_scale: f32) -> Self {
        Self {
            lightness_scale: Some(lightness_scale),
            ..Self::default()
        }
    }
}
