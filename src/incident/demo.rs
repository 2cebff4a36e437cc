// demo.rs - the built-in dataset shown before a live feed exists
use super::{Incident, Priority};
use chrono::{TimeZone, Utc};

/// Reports used by the home screen map in demo mode
///
/// D1, D2 and D3 are pinned next to each other by the position override
/// table, so this set always shows at least one count badge.
pub fn demo_incidents() -> Vec<Incident> {
    let at = |day: u32, hour: u32| {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0)
            .single()
            .unwrap_or_default()
    };

    vec![
        Incident::new("D1", "Fuga de agua en la plaza", "Agua potable", Priority::High, at(4, 8)),
        Incident::new("D2", "Tubería rota en calle Prat", "Tubería", Priority::High, at(4, 9)),
        Incident::new("D3", "Poste sin luz frente al colegio", "Alumbrado público", Priority::Medium, at(4, 10)),
        Incident::new("R-101", "Corte de electricidad sector norte", "Electricidad", Priority::High, at(5, 7)),
        Incident::new("R-102", "Olor a gas en pasaje Los Aromos", "Gas", Priority::High, at(5, 12)),
        Incident::new("R-103", "Bache en avenida principal", "Vialidad", Priority::Low, at(6, 15)),
        Incident::new("R-104", "Microbasural en sitio eriazo", "Aseo y ornato", Priority::Medium, at(7, 11)),
        Incident::new("R-105", "Luminaria intermitente", "Luz", Priority::Low, at(8, 21)),
    ]
}
