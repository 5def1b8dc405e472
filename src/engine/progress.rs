//! Cálculo del ProgressReport
//!
//! Dada la posición actual y los puntos ordenados de la ruta activa:
//! punto más cercano, distancia sobre la polilínea, porcentaje completado
//! y tiempo restante a 5 km/h. Con datos insuficientes (sin posición, sin
//! ruta o menos de 2 puntos) degrada al reporte de demostración fijo en
//! lugar de fallar, para que el cliente siempre tenga algo que pintar.

use chrono::Utc;

use crate::engine::geo::haversine_km;
use crate::models::progress::{GeoPosition, ProgressReport, TimeRemaining};
use crate::models::route::{Route, RoutePoint};
use crate::models::weather::WeatherSnapshot;

/// Velocidad media de caminata asumida
const WALKING_SPEED_KMH: f64 = 5.0;

/// Radio de proximidad a un punto de la ruta (50 m)
const SNAP_RADIUS_KM: f64 = 0.05;

/// Índice del punto más cercano a la posición actual. En empate exacto
/// gana el índice más bajo. Precondición: lista no vacía (con lista vacía
/// el resultado es 0 por construcción y no significa nada).
pub fn nearest_point_index(position: &GeoPosition, points: &[RoutePoint]) -> usize {
    let mut nearest_index = 0;
    let mut min_distance = f64::MAX;

    for (index, point) in points.iter().enumerate() {
        let distance = haversine_km(position, &point.position());
        if distance < min_distance {
            min_distance = distance;
            nearest_index = index;
        }
    }

    nearest_index
}

/// Longitud de la polilínea a través de todos los puntos en orden de
/// secuencia. No es camino más corto ni se ajusta al segmento del usuario.
fn polyline_km(points: &[RoutePoint]) -> f64 {
    points
        .windows(2)
        .map(|pair| haversine_km(&pair[0].position(), &pair[1].position()))
        .sum()
}

/// Tiempo restante a paso de caminata. El redondeo de minutos puede dar
/// 60; se acarrea a horas para no reportar "1 h 60 min".
pub(crate) fn estimate_time_remaining(remaining_km: f64) -> TimeRemaining {
    let estimated_hours = remaining_km / WALKING_SPEED_KMH;
    let mut hours = estimated_hours.floor() as u32;
    let mut minutes = ((estimated_hours - estimated_hours.floor()) * 60.0).round() as u32;
    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }
    TimeRemaining { hours, minutes }
}

/// Calcula el ProgressReport para la ruta activa. Nunca falla: cualquier
/// entrada degenerada produce el reporte de respaldo documentado.
pub fn compute_progress(
    position: Option<GeoPosition>,
    route: Option<&Route>,
    points: &[RoutePoint],
    weather: &WeatherSnapshot,
) -> ProgressReport {
    match (position, route) {
        (Some(position), Some(route)) if points.len() >= 2 => {
            progress_report(position, route, points, weather)
        }
        (position, route) => fallback_report(position, route, points, weather),
    }
}

fn progress_report(
    position: GeoPosition,
    route: &Route,
    points: &[RoutePoint],
    weather: &WeatherSnapshot,
) -> ProgressReport {
    let nearest_index = nearest_point_index(&position, points);

    let total_distance = polyline_km(points);
    let mut completed_distance = polyline_km(&points[..=nearest_index]);

    // TODO: interpolar el avance parcial dentro del segmento
    // [nearest_index - 1, nearest_index]; por ahora, a menos de 50 m del
    // punto más cercano se vuelve a derivar el prefijo de la polilínea.
    if nearest_index > 0 {
        let to_nearest = haversine_km(&position, &points[nearest_index].position());
        if to_nearest <= SNAP_RADIUS_KM {
            completed_distance = polyline_km(&points[..=nearest_index]);
        }
    }

    let remaining_distance = total_distance - completed_distance;

    let progress_percentage = if total_distance > f64::EPSILON {
        ((completed_distance / total_distance) * 100.0).min(100.0).round() as u8
    } else {
        0
    };

    ProgressReport {
        route_name: route.name.clone(),
        route_id: route.id,
        current_location: position,
        nearest_point_index: nearest_index,
        total_points: points.len(),
        total_distance: format!("{:.2}", total_distance),
        completed_distance: format!("{:.2}", completed_distance),
        remaining_distance: format!("{:.2}", remaining_distance),
        progress_percentage,
        estimated_time_remaining: estimate_time_remaining(remaining_distance),
        weather: weather.clone(),
        timestamp: Utc::now().to_rfc3339(),
    }
}

/// Reporte de respaldo con datos insuficientes. Los valores son el
/// placeholder de demostración que el cliente ya conoce y renderiza.
fn fallback_report(
    position: Option<GeoPosition>,
    route: Option<&Route>,
    points: &[RoutePoint],
    weather: &WeatherSnapshot,
) -> ProgressReport {
    ProgressReport {
        route_name: route
            .map(|r| r.name.clone())
            .unwrap_or_else(|| "Demo Route".to_string()),
        route_id: route.map(|r| r.id).unwrap_or(999),
        current_location: position.unwrap_or(GeoPosition {
            latitude: 37.7749,
            longitude: -122.4194,
        }),
        nearest_point_index: 1,
        total_points: if points.is_empty() { 3 } else { points.len() },
        total_distance: "5.20".to_string(),
        completed_distance: "2.10".to_string(),
        remaining_distance: "3.10".to_string(),
        progress_percentage: 40,
        estimated_time_remaining: TimeRemaining { hours: 0, minutes: 37 },
        weather: weather.clone(),
        timestamp: Utc::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(id: i64, name: &str) -> Route {
        Route {
            id,
            name: name.to_string(),
            created_at: 1_700_000_000_000,
        }
    }

    fn point(sequence: i32, latitude: f64, longitude: f64) -> RoutePoint {
        RoutePoint {
            id: sequence as i64 + 1,
            route_id: 1,
            marker_id: Some(sequence as i64 + 1),
            sequence,
            latitude,
            longitude,
        }
    }

    /// Los tres puntos de San Francisco del recorrido de demostración
    fn demo_points() -> Vec<RoutePoint> {
        vec![
            point(0, 37.7749, -122.4194),
            point(1, 37.7850, -122.4300),
            point(2, 37.7900, -122.4150),
        ]
    }

    #[test]
    fn test_nearest_point_index_picks_minimum() {
        let points = demo_points();
        let at_last = GeoPosition::new(37.7900, -122.4150);
        assert_eq!(nearest_point_index(&at_last, &points), 2);

        let at_first = GeoPosition::new(37.7749, -122.4194);
        assert_eq!(nearest_point_index(&at_first, &points), 0);
    }

    #[test]
    fn test_nearest_point_index_tie_breaks_to_lowest() {
        // Dos puntos idénticos: empate exacto, gana el índice 0
        let points = vec![
            point(0, 37.7749, -122.4194),
            point(1, 37.7749, -122.4194),
            point(2, 37.7900, -122.4150),
        ];
        let position = GeoPosition::new(37.7800, -122.4200);
        assert_eq!(nearest_point_index(&position, &points), 0);
    }

    #[test]
    fn test_progress_at_middle_waypoint() {
        let points = demo_points();
        let r = route(1, "Golden Gate Walk");
        // Posición exactamente sobre el segundo punto
        let position = GeoPosition::new(37.7850, -122.4300);

        let report = compute_progress(Some(position), Some(&r), &points, &WeatherSnapshot::default());

        assert_eq!(report.nearest_point_index, 1);
        assert_eq!(report.total_points, 3);

        let segment_0_1 = haversine_km(&points[0].position(), &points[1].position());
        let segment_1_2 = haversine_km(&points[1].position(), &points[2].position());
        assert!(segment_0_1 > 1.4 && segment_0_1 < 1.5);

        assert_eq!(report.completed_distance, format!("{:.2}", segment_0_1));
        assert_eq!(report.total_distance, format!("{:.2}", segment_0_1 + segment_1_2));

        let expected_pct =
            ((segment_0_1 / (segment_0_1 + segment_1_2)) * 100.0).min(100.0).round() as u8;
        assert_eq!(report.progress_percentage, expected_pct);
        assert!((49..=51).contains(&report.progress_percentage));
    }

    #[test]
    fn test_total_distance_is_sum_of_consecutive_segments() {
        let points = demo_points();
        let r = route(1, "Golden Gate Walk");
        let position = GeoPosition::new(37.7749, -122.4194);

        let report = compute_progress(Some(position), Some(&r), &points, &WeatherSnapshot::default());

        let expected: f64 = points
            .windows(2)
            .map(|pair| haversine_km(&pair[0].position(), &pair[1].position()))
            .sum();
        assert_eq!(report.total_distance, format!("{:.2}", expected));
    }

    #[test]
    fn test_completed_plus_remaining_equals_total() {
        let points = demo_points();
        let r = route(1, "Golden Gate Walk");

        for position in [
            GeoPosition::new(37.7749, -122.4194),
            GeoPosition::new(37.7850, -122.4300),
            GeoPosition::new(37.7900, -122.4150),
            GeoPosition::new(37.7820, -122.4250),
        ] {
            let report =
                compute_progress(Some(position), Some(&r), &points, &WeatherSnapshot::default());
            let completed: f64 = report.completed_distance.parse().unwrap();
            let remaining: f64 = report.remaining_distance.parse().unwrap();
            let total: f64 = report.total_distance.parse().unwrap();
            // Tolerancia de redondeo: los strings llevan dos decimales
            assert!((completed + remaining - total).abs() < 0.011);
        }
    }

    #[test]
    fn test_percentage_bounds() {
        let points = demo_points();
        let r = route(1, "Golden Gate Walk");

        for position in [
            GeoPosition::new(37.7749, -122.4194),
            GeoPosition::new(37.7900, -122.4150),
            GeoPosition::new(0.0, 0.0),
            GeoPosition::new(-45.0, 170.0),
        ] {
            let report =
                compute_progress(Some(position), Some(&r), &points, &WeatherSnapshot::default());
            assert!(report.progress_percentage <= 100);
        }

        // Sobre el último punto: todo el recorrido completado
        let at_end = GeoPosition::new(37.7900, -122.4150);
        let report = compute_progress(Some(at_end), Some(&r), &points, &WeatherSnapshot::default());
        assert_eq!(report.progress_percentage, 100);
    }

    #[test]
    fn test_degenerate_route_with_identical_points() {
        // Dos puntos idénticos: distancia total 0, el porcentaje no divide
        let points = vec![
            point(0, 37.7749, -122.4194),
            point(1, 37.7749, -122.4194),
        ];
        let r = route(1, "Parado");
        let position = GeoPosition::new(37.7749, -122.4194);

        let report = compute_progress(Some(position), Some(&r), &points, &WeatherSnapshot::default());
        assert_eq!(report.progress_percentage, 0);
        assert_eq!(report.total_distance, "0.00");
        assert_eq!(report.estimated_time_remaining, TimeRemaining { hours: 0, minutes: 0 });
    }

    #[test]
    fn test_minutes_never_reach_sixty() {
        // 4.9965 km a 5 km/h = 0.9993 h; los minutos redondean a 60 y
        // deben acarrearse a la hora
        let eta = estimate_time_remaining(4.9965);
        assert_eq!(eta, TimeRemaining { hours: 1, minutes: 0 });

        let mut remaining = 0.0;
        while remaining < 25.0 {
            let eta = estimate_time_remaining(remaining);
            assert!(eta.minutes <= 59, "minutos fuera de rango para {} km", remaining);
            remaining += 0.0137;
        }

        assert_eq!(estimate_time_remaining(0.0), TimeRemaining { hours: 0, minutes: 0 });
    }

    #[test]
    fn test_fallback_with_too_few_points() {
        let r = route(7, "Media Ruta");
        let position = GeoPosition::new(40.0, -74.0);
        let single = vec![point(0, 40.0, -74.0)];

        let report = compute_progress(Some(position), Some(&r), &single, &WeatherSnapshot::default());

        assert_eq!(report.route_name, "Media Ruta");
        assert_eq!(report.route_id, 7);
        assert_eq!(report.current_location, position);
        assert_eq!(report.nearest_point_index, 1);
        assert_eq!(report.total_points, 1);
        assert_eq!(report.total_distance, "5.20");
        assert_eq!(report.completed_distance, "2.10");
        assert_eq!(report.remaining_distance, "3.10");
        assert_eq!(report.progress_percentage, 40);
        assert_eq!(report.estimated_time_remaining, TimeRemaining { hours: 0, minutes: 37 });
    }

    #[test]
    fn test_fallback_with_nothing_at_all() {
        let report = compute_progress(None, None, &[], &WeatherSnapshot::default());

        assert_eq!(report.route_name, "Demo Route");
        assert_eq!(report.route_id, 999);
        assert_eq!(report.current_location, GeoPosition::new(37.7749, -122.4194));
        assert_eq!(report.nearest_point_index, 1);
        assert_eq!(report.total_points, 3);
        assert_eq!(report.total_distance, "5.20");
        assert_eq!(report.progress_percentage, 40);
        assert_eq!(report.estimated_time_remaining, TimeRemaining { hours: 0, minutes: 37 });
    }

    #[test]
    fn test_fallback_is_deterministic_across_inputs() {
        // Mismos literales sin importar qué posición o ruta llegue
        let r = route(3, "Otra");
        let a = compute_progress(None, Some(&r), &[], &WeatherSnapshot::default());
        let b = compute_progress(
            Some(GeoPosition::new(1.0, 2.0)),
            None,
            &[],
            &WeatherSnapshot::default(),
        );
        assert_eq!(a.total_distance, b.total_distance);
        assert_eq!(a.completed_distance, b.completed_distance);
        assert_eq!(a.remaining_distance, b.remaining_distance);
        assert_eq!(a.progress_percentage, b.progress_percentage);
        assert_eq!(a.estimated_time_remaining, b.estimated_time_remaining);
    }

    #[test]
    fn test_report_serializes_with_contract_field_names() {
        let report = compute_progress(None, None, &[], &WeatherSnapshot::default());
        let value = serde_json::to_value(&report).unwrap();

        for field in [
            "routeName",
            "routeId",
            "currentLocation",
            "nearestPointIndex",
            "totalPoints",
            "totalDistance",
            "completedDistance",
            "remainingDistance",
            "progressPercentage",
            "estimatedTimeRemaining",
            "weather",
            "timestamp",
        ] {
            assert!(value.get(field).is_some(), "falta el campo {}", field);
        }
        assert!(value["currentLocation"].get("latitude").is_some());
        assert!(value["estimatedTimeRemaining"].get("minutes").is_some());
        assert!(value["weather"].get("windSpeed").is_some());
    }
}
