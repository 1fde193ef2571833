// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const SQRT_5: f32 = 2.23606797749979;
    pub const PI: f32 = std::f32::consts::PI;

    /// Goldener Winkel π·(3 − √5), ca. 137.5°. Erzeugt maximal irrationale
    /// Winkelschritte und vermeidet dadurch Streifenbildung auf der Kugel.
    pub const GOLDEN_ANGLE: f32 = PI * (3.0 - SQRT_5);
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Prüft ob zwei Floats mit custom Toleranz gleich sind
    pub fn nearly_equal_eps(a: f32, b: f32, epsilon: f32) -> bool {
        (a - b).abs() < epsilon
    }

    /// Prüft ob Float (nahezu) Null ist
    pub fn nearly_zero(a: f32) -> bool {
        a.abs() < EPSILON
    }
}
