// src/math/geometry/sphere/sampling.rs

use crate::math::{error::*, types::*, utils::constants};

/// Verteilt `count` Punkte näherungsweise gleichmäßig auf der Oberfläche einer
/// Kugel mit dem angegebenen Radius (Fibonacci-Spirale, Goldener Winkel).
///
/// Die Höhen `y` überstreichen linear das Intervall knapp oberhalb von −1 bis
/// knapp unterhalb von +1; pro Punkt dreht der Azimut um einen Goldwinkel
/// weiter. Der Winkelindex läuft dabei um einen Schritt versetzt:
/// `a = ((i − 1) mod count) · Goldwinkel` statt des kanonischen
/// `i · Goldwinkel`. Der Rest folgt dem Vorzeichen des Dividenden (trunkierte
/// Division), für `i = 0` ergibt sich also `−Goldwinkel` bzw. Winkel 0 bei
/// `count == 1`. Gegenüber der kanonischen Variante ist die Folge damit um
/// einen Goldwinkel-Schritt gedreht; die Verteilung selbst bleibt gleichmäßig.
///
/// Jeder Aufruf rechnet die komplette Folge neu und liefert einen frischen
/// Vektor; gleiche Eingaben ergeben bitidentische Ergebnisse (kein Zufall).
pub fn fibonacci_sphere_points(count: usize, radius: f32) -> MathResult<Vec<Point3D>> {
    if count == 0 {
        return Err(MathError::InvalidPointCount { count });
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(MathError::InvalidConfiguration {
            message: format!("sphere radius must be positive and finite, got {radius}"),
        });
    }

    let offset = 2.0 / count as f32;
    let mut points = Vec::with_capacity(count);

    for i in 0..count {
        let y = (i as f32 * offset - 1.0) + offset * 0.5;
        let r = (1.0 - y * y).sqrt();
        let a = ((i as i64 - 1) % count as i64) as f32 * constants::GOLDEN_ANGLE;

        points.push(Point3D::new(
            a.cos() * r * radius,
            y * radius,
            a.sin() * r * radius,
        ));
    }

    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::comparison;
    use approx::assert_relative_eq;

    #[test]
    fn test_point_count() {
        for count in [1, 2, 3, 50, 200] {
            let points = fibonacci_sphere_points(count, 2.0).unwrap();
            assert_eq!(points.len(), count);
        }
    }

    #[test]
    fn test_points_on_scaled_sphere() {
        let points = fibonacci_sphere_points(200, 2.0).unwrap();

        // Alle Punkte liegen auf der Kugel mit Radius 2, also x² + y² + z² ≈ 4.
        for point in &points {
            assert_relative_eq!(point.length_squared(), 4.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_same_count_is_deterministic() {
        let first = fibonacci_sphere_points(137, 2.0).unwrap();
        let second = fibonacci_sphere_points(137, 2.0).unwrap();

        // Bitidentisch, nicht nur "nahe beieinander".
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_count_recomputes() {
        let large = fibonacci_sphere_points(200, 2.0).unwrap();
        let small = fibonacci_sphere_points(50, 2.0).unwrap();

        assert_eq!(large.len(), 200);
        assert_eq!(small.len(), 50);
        // Ein anderes count verschiebt das Höhenraster, schon der erste Punkt
        // weicht ab.
        assert!(!comparison::nearly_equal(large[0].y, small[0].y));
    }

    #[test]
    fn test_single_point_boundary() {
        // count == 1: offset = 2, y = (0·2 − 1) + 1 = 0, Winkel (−1 mod 1) = 0.
        let points = fibonacci_sphere_points(1, 2.0).unwrap();
        assert_eq!(points.len(), 1);

        let p = points[0];
        assert!(p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        // Exakte Nullen sind hier berechnete Koordinaten, keine fehlenden Werte.
        assert_eq!(p.y, 0.0);
        assert_eq!(p.z, 0.0);
        assert!(comparison::nearly_equal(p.x, 2.0));
    }

    #[test]
    fn test_angle_convention() {
        // Goldwinkel π·(3 − √5) ≈ 2.39996 rad.
        assert!(comparison::nearly_equal_eps(
            constants::GOLDEN_ANGLE,
            2.399_963_2,
            1e-5
        ));

        let points = fibonacci_sphere_points(10, 2.0).unwrap();

        // Punkt 1 sitzt bei Azimut 0 (Winkel (1 − 1)·Goldwinkel = 0)...
        let azimuth_1 = points[1].z.atan2(points[1].x);
        assert!(comparison::nearly_zero(azimuth_1));

        // ...Punkt 0 einen Goldwinkel davor (Winkel (0 − 1)·Goldwinkel).
        let azimuth_0 = points[0].z.atan2(points[0].x);
        assert!(comparison::nearly_equal_eps(
            azimuth_0,
            -constants::GOLDEN_ANGLE,
            1e-5
        ));
    }

    #[test]
    fn test_linear_y_sweep() {
        let count = 64;
        let radius = 2.0;
        let points = fibonacci_sphere_points(count, radius).unwrap();

        // Erster Punkt knapp über dem Südpol, letzter knapp unter dem Nordpol.
        let margin = radius / count as f32;
        assert_relative_eq!(points[0].y, -radius + margin, epsilon = 1e-4);
        assert_relative_eq!(points[count - 1].y, radius - margin, epsilon = 1e-4);

        for pair in points.windows(2) {
            assert!(pair[0].y < pair[1].y);
        }
    }

    #[test]
    fn test_rejects_zero_count() {
        let result = fibonacci_sphere_points(0, 2.0);
        assert!(matches!(
            result,
            Err(MathError::InvalidPointCount { count: 0 })
        ));
    }

    #[test]
    fn test_rejects_invalid_radius() {
        for radius in [0.0, -2.0, f32::NAN, f32::INFINITY] {
            let result = fibonacci_sphere_points(10, radius);
            assert!(matches!(
                result,
                Err(MathError::InvalidConfiguration { .. })
            ));
        }
    }
}
