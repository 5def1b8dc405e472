//! Briefing local por reglas
//!
//! Respaldo determinista que no necesita I/O: cascada de tips por banda de
//! progreso, temperatura y condición, saludo según la hora local y una
//! línea de ánimo elegida al azar. El generador aleatorio se inyecta para
//! que los tests fijen la semilla.

use chrono::{Local, Timelike};
use rand::Rng;

use crate::models::briefing::Briefing;
use crate::models::progress::ProgressReport;
use crate::models::weather::WeatherSnapshot;

const ENCOURAGEMENTS: [&str; 5] = [
    "You're doing great! Keep moving forward.",
    "Every step brings you closer to your goal.",
    "Enjoying the journey is just as important as reaching the destination.",
    "Your determination is inspiring!",
    "Remember to take in the scenery along the way.",
];

/// Briefing local con hora y RNG del sistema
pub fn local_briefing(report: Option<&ProgressReport>) -> Briefing {
    derive_local_briefing(report, Local::now().hour(), &mut rand::thread_rng())
}

/// Deriva el briefing por reglas. Sin reporte devuelve el saludo de
/// bienvenida fijo en lugar de fallar.
pub fn derive_local_briefing<R: Rng>(
    report: Option<&ProgressReport>,
    hour: u32,
    rng: &mut R,
) -> Briefing {
    let Some(report) = report else {
        return welcome_briefing();
    };

    let mut tips = Vec::new();

    // Banda de progreso: exactamente una de las cuatro siempre aplica
    if report.progress_percentage < 25 {
        tips.push("Pace yourself! You're just getting started on this journey.".to_string());
    } else if report.progress_percentage < 50 {
        tips.push("You've made good progress, but remember to stay hydrated!".to_string());
    } else if report.progress_percentage < 75 {
        tips.push("You're over halfway there - keep up the good work!".to_string());
    } else {
        tips.push("You're in the final stretch! Push through to complete your route.".to_string());
    }

    if report.weather.temperature > 80.0 {
        tips.push(
            "It's quite warm today. Remember to drink plenty of water and use sun protection."
                .to_string(),
        );
    } else if report.weather.temperature < 60.0 {
        tips.push(
            "It's a bit cool today. Consider wearing an extra layer to stay comfortable."
                .to_string(),
        );
    }

    if report.weather.condition == "Rainy" {
        tips.push("Watch out for slippery surfaces due to rain.".to_string());
    }

    Briefing {
        greeting: greeting_line(&report.route_name, hour),
        progress_summary: format!(
            "You've completed {}% of your route ({} km out of {} km).",
            report.progress_percentage, report.completed_distance, report.total_distance
        ),
        time_estimate: time_estimate_line(report),
        weather_update: weather_line(&report.weather),
        tips,
        encouragement: pick_encouragement(rng),
    }
}

/// Saludo según la hora local: <12 morning, <18 afternoon, resto evening
pub fn time_of_day(hour: u32) -> &'static str {
    if hour < 12 {
        "morning"
    } else if hour < 18 {
        "afternoon"
    } else {
        "evening"
    }
}

pub fn greeting_line(route_name: &str, hour: u32) -> String {
    format!(
        "Good {}! Your journey on \"{}\" continues.",
        time_of_day(hour),
        route_name
    )
}

pub fn time_estimate_line(report: &ProgressReport) -> String {
    format!(
        "At your current pace, you have approximately {} hours and {} minutes remaining.",
        report.estimated_time_remaining.hours, report.estimated_time_remaining.minutes
    )
}

pub fn weather_line(weather: &WeatherSnapshot) -> String {
    format!(
        "Current conditions: {}°F, {}, with {}% humidity.",
        weather.temperature, weather.condition, weather.humidity
    )
}

pub fn pick_encouragement<R: Rng>(rng: &mut R) -> String {
    ENCOURAGEMENTS[rng.gen_range(0..ENCOURAGEMENTS.len())].to_string()
}

fn welcome_briefing() -> Briefing {
    let weather = WeatherSnapshot::default();
    Briefing {
        greeting: "Good day! Welcome to your journey assistant.".to_string(),
        progress_summary: "Ready to start your adventure?".to_string(),
        time_estimate: "Your journey awaits!".to_string(),
        weather_update: weather_line(&weather),
        tips: vec![
            "Remember to stay hydrated during your trip!".to_string(),
            "Check the map tab to create your first route.".to_string(),
        ],
        encouragement: "Every journey begins with a single step.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::progress::{GeoPosition, TimeRemaining};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn report(percentage: u8, temperature: f64, condition: &str) -> ProgressReport {
        ProgressReport {
            route_name: "Golden Gate Walk".to_string(),
            route_id: 1,
            current_location: GeoPosition::new(37.7749, -122.4194),
            nearest_point_index: 1,
            total_points: 3,
            total_distance: "2.89".to_string(),
            completed_distance: "1.45".to_string(),
            remaining_distance: "1.44".to_string(),
            progress_percentage: percentage,
            estimated_time_remaining: TimeRemaining { hours: 0, minutes: 17 },
            weather: WeatherSnapshot {
                temperature,
                condition: condition.to_string(),
                humidity: 45,
                wind_speed: 8.0,
            },
            timestamp: "2026-08-26T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_time_of_day_boundaries() {
        assert_eq!(time_of_day(0), "morning");
        assert_eq!(time_of_day(11), "morning");
        assert_eq!(time_of_day(12), "afternoon");
        assert_eq!(time_of_day(17), "afternoon");
        assert_eq!(time_of_day(18), "evening");
        assert_eq!(time_of_day(23), "evening");
    }

    #[test]
    fn test_warm_start_yields_exactly_two_tips() {
        let r = report(10, 90.0, "Sunny");
        let mut rng = StdRng::seed_from_u64(7);
        let briefing = derive_local_briefing(Some(&r), 9, &mut rng);

        assert_eq!(briefing.tips.len(), 2);
        assert!(briefing.tips[0].contains("just getting started"));
        assert!(briefing.tips[1].contains("quite warm"));
    }

    #[test]
    fn test_rain_adds_third_tip() {
        let r = report(10, 90.0, "Rainy");
        let mut rng = StdRng::seed_from_u64(7);
        let briefing = derive_local_briefing(Some(&r), 9, &mut rng);

        assert_eq!(briefing.tips.len(), 3);
        assert!(briefing.tips[2].contains("slippery surfaces"));
    }

    #[test]
    fn test_mild_weather_yields_only_band_tip() {
        // 60-80 °F sin lluvia: solo la banda de progreso aplica
        let r = report(60, 70.0, "Cloudy");
        let mut rng = StdRng::seed_from_u64(7);
        let briefing = derive_local_briefing(Some(&r), 14, &mut rng);

        assert_eq!(briefing.tips.len(), 1);
        assert!(briefing.tips[0].contains("over halfway"));
    }

    #[test]
    fn test_band_tip_per_percentage() {
        let mut rng = StdRng::seed_from_u64(1);
        let cases = [
            (0, "just getting started"),
            (24, "just getting started"),
            (25, "stay hydrated"),
            (49, "stay hydrated"),
            (50, "over halfway"),
            (74, "over halfway"),
            (75, "final stretch"),
            (100, "final stretch"),
        ];
        for (pct, needle) in cases {
            let r = report(pct, 70.0, "Sunny");
            let briefing = derive_local_briefing(Some(&r), 9, &mut rng);
            assert!(
                briefing.tips[0].contains(needle),
                "para {}% se esperaba tip con '{}'",
                pct,
                needle
            );
        }
    }

    #[test]
    fn test_greeting_and_summary_interpolation() {
        let r = report(50, 72.0, "Sunny");
        let mut rng = StdRng::seed_from_u64(7);
        let briefing = derive_local_briefing(Some(&r), 9, &mut rng);

        assert_eq!(
            briefing.greeting,
            "Good morning! Your journey on \"Golden Gate Walk\" continues."
        );
        assert_eq!(
            briefing.progress_summary,
            "You've completed 50% of your route (1.45 km out of 2.89 km)."
        );
        assert_eq!(
            briefing.time_estimate,
            "At your current pace, you have approximately 0 hours and 17 minutes remaining."
        );
        assert_eq!(
            briefing.weather_update,
            "Current conditions: 72°F, Sunny, with 45% humidity."
        );
    }

    #[test]
    fn test_encouragement_is_seed_stable_and_from_fixed_list() {
        let r = report(50, 72.0, "Sunny");

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = derive_local_briefing(Some(&r), 9, &mut rng_a);
        let b = derive_local_briefing(Some(&r), 9, &mut rng_b);

        assert_eq!(a.encouragement, b.encouragement);
        assert!(ENCOURAGEMENTS.contains(&a.encouragement.as_str()));
    }

    #[test]
    fn test_missing_report_returns_welcome_briefing() {
        let mut rng = StdRng::seed_from_u64(7);
        let briefing = derive_local_briefing(None, 9, &mut rng);

        assert_eq!(briefing.greeting, "Good day! Welcome to your journey assistant.");
        assert_eq!(briefing.progress_summary, "Ready to start your adventure?");
        assert_eq!(briefing.time_estimate, "Your journey awaits!");
        assert_eq!(briefing.tips.len(), 2);
        assert_eq!(briefing.encouragement, "Every journey begins with a single step.");
    }
}
