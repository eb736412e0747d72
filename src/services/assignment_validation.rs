//! Reglas de validación de asignaciones
//!
//! Motor de reglas puro: comparador de licencias, validador de fechas,
//! chequeo de conflictos para altas/modificaciones y auditoría global tras
//! editar conductores o camiones. Todas las funciones operan sobre estado
//! recibido como parámetro; el caller decide qué y cuándo persistir.
//!
//! Orden fijo de chequeos en `check_assignment`: existencia del conductor →
//! existencia del camión → formato de fecha → exclusividad del conductor →
//! exclusividad del camión → suficiencia de licencia. Se reporta el primer
//! fallo encontrado.

use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Assignment, Driver, LicenseClass, Truck};
use crate::utils::errors::AppError;

/// Motivo por el que un candidato o el estado global viola las reglas
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConflictReason {
    #[error("Driver not found")]
    DriverNotFound,

    #[error("Truck not found")]
    TruckNotFound,

    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,

    #[error("The driver is already assigned to a truck on {date}")]
    DriverAlreadyAssigned { date: String },

    #[error("The truck is already assigned to a driver on {date}")]
    TruckAlreadyAssigned { date: String },

    #[error("The driver's license type is not compatible with the truck")]
    LicenseNotCompatible,

    #[error("Assignment {assignment_id} is invalid due to license incompatibility")]
    AuditFailed { assignment_id: Uuid },
}

impl From<ConflictReason> for AppError {
    fn from(reason: ConflictReason) -> Self {
        match reason {
            ConflictReason::DriverNotFound | ConflictReason::TruckNotFound => {
                AppError::NotFound(reason.to_string())
            }
            ConflictReason::InvalidDate => AppError::BadRequest(reason.to_string()),
            _ => AppError::Conflict(reason.to_string()),
        }
    }
}

/// Rango entero de una clase de licencia en texto.
/// Valores desconocidos rankean 0, por debajo de cualquier clase válida;
/// la frontera de entrada rechaza clases desconocidas antes de llegar aquí.
pub fn license_rank(class: &str) -> u8 {
    class.parse::<LicenseClass>().map(LicenseClass::rank).unwrap_or(0)
}

/// La licencia del conductor alcanza para el mínimo exigido por el camión
pub fn is_license_sufficient(driver_license: &str, truck_min_license: &str) -> bool {
    license_rank(driver_license) >= license_rank(truck_min_license)
}

/// Valida una fecha de calendario en formato estricto YYYY-MM-DD:
/// año de 4 dígitos, mes y día de 2 dígitos, guiones en posiciones fijas.
/// Consciente de años bisiestos via chrono.
pub fn is_valid_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return false;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Tupla candidata (conductor, camión, fecha) para alta o modificación
#[derive(Debug, Clone)]
pub struct AssignmentCandidate<'a> {
    pub driver_id: Uuid,
    pub truck_id: Uuid,
    pub date: &'a str,
}

/// Decide si el candidato es aceptable contra el conjunto de asignaciones
/// existentes. `exclude_id` omite la propia asignación al modificarla.
pub fn check_assignment(
    candidate: &AssignmentCandidate<'_>,
    driver: Option<&Driver>,
    truck: Option<&Truck>,
    existing: &[Assignment],
    exclude_id: Option<Uuid>,
) -> Result<(), ConflictReason> {
    let driver = driver.ok_or(ConflictReason::DriverNotFound)?;
    let truck = truck.ok_or(ConflictReason::TruckNotFound)?;

    if !is_valid_date(candidate.date) {
        return Err(ConflictReason::InvalidDate);
    }

    let others = existing
        .iter()
        .filter(|a| exclude_id.map_or(true, |id| a.id != id));

    for assignment in others {
        if assignment.driver_id == candidate.driver_id && assignment.date == candidate.date {
            return Err(ConflictReason::DriverAlreadyAssigned {
                date: candidate.date.to_string(),
            });
        }
        if assignment.truck_id == candidate.truck_id && assignment.date == candidate.date {
            return Err(ConflictReason::TruckAlreadyAssigned {
                date: candidate.date.to_string(),
            });
        }
    }

    if !is_license_sufficient(&driver.license_type, &truck.min_license_type) {
        return Err(ConflictReason::LicenseNotCompatible);
    }

    Ok(())
}

/// Auditoría global: re-chequea solo la compatibilidad de licencias de cada
/// asignación contra la vista de conductores y camiones recibida, que puede
/// ser hipotética (entidad editada aún sin persistir). Devuelve la primera
/// asignación en violación.
pub fn audit_assignments(
    assignments: &[Assignment],
    drivers: &[Driver],
    trucks: &[Truck],
) -> Result<(), ConflictReason> {
    let driver_licenses: HashMap<Uuid, &str> = drivers
        .iter()
        .map(|d| (d.id, d.license_type.as_str()))
        .collect();
    let truck_licenses: HashMap<Uuid, &str> = trucks
        .iter()
        .map(|t| (t.id, t.min_license_type.as_str()))
        .collect();

    for assignment in assignments {
        let failed = ConflictReason::AuditFailed {
            assignment_id: assignment.id,
        };
        let (Some(driver_license), Some(truck_min)) = (
            driver_licenses.get(&assignment.driver_id),
            truck_licenses.get(&assignment.truck_id),
        ) else {
            // Referencia colgante en la vista: trátala como violación
            return Err(failed);
        };
        if !is_license_sufficient(driver_license, truck_min) {
            return Err(failed);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn driver(name: &str, license: &str) -> Driver {
        Driver {
            id: Uuid::new_v4(),
            name: name.to_string(),
            license_type: license.to_string(),
            created_at: Utc::now(),
        }
    }

    fn truck(plate: &str, min_license: &str) -> Truck {
        Truck {
            id: Uuid::new_v4(),
            plate: plate.to_string(),
            model: None,
            min_license_type: min_license.to_string(),
            created_at: Utc::now(),
        }
    }

    fn assignment(driver_id: Uuid, truck_id: Uuid, date: &str) -> Assignment {
        Assignment {
            id: Uuid::new_v4(),
            driver_id,
            truck_id,
            date: date.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_license_sufficiency_matches_rank_for_all_pairs() {
        for d in LicenseClass::ALL {
            for t in LicenseClass::ALL {
                assert_eq!(
                    is_license_sufficient(d.as_str(), t.as_str()),
                    d.rank() >= t.rank(),
                    "pair ({}, {})",
                    d,
                    t
                );
            }
        }
    }

    #[test]
    fn test_license_sufficiency_is_reflexive() {
        for class in LicenseClass::ALL {
            assert!(is_license_sufficient(class.as_str(), class.as_str()));
        }
    }

    #[test]
    fn test_unknown_license_ranks_below_every_class() {
        assert_eq!(license_rank("Z"), 0);
        assert_eq!(license_rank(""), 0);
        for class in LicenseClass::ALL {
            assert!(!is_license_sufficient("Z", class.as_str()));
            assert!(is_license_sufficient(class.as_str(), "Z"));
        }
        // Ambos desconocidos: 0 >= 0. La frontera de entrada impide que una
        // clase desconocida llegue al almacén.
        assert!(is_license_sufficient("Z", "Z"));
    }

    #[test]
    fn test_valid_dates() {
        assert!(is_valid_date("2024-04-03"));
        assert!(is_valid_date("2024-06-01"));
        assert!(is_valid_date("2024-02-29")); // bisiesto
        assert!(is_valid_date("2000-02-29")); // bisiesto secular
        assert!(is_valid_date("1999-12-31"));
    }

    #[test]
    fn test_invalid_dates() {
        assert!(!is_valid_date("2023-02-29")); // no bisiesto
        assert!(!is_valid_date("1900-02-29")); // secular no bisiesto
        assert!(!is_valid_date("2024-13-01"));
        assert!(!is_valid_date("2024-00-10"));
        assert!(!is_valid_date("2024-04-31"));
        assert!(!is_valid_date("2024-4-3")); // sin zero-padding
        assert!(!is_valid_date("2024-04-3"));
        assert!(!is_valid_date("03-04-2024"));
        assert!(!is_valid_date("2024/04/03"));
        assert!(!is_valid_date("20240403"));
        assert!(!is_valid_date("2024-04-03T00:00:00"));
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("2024-04-0x"));
    }

    #[test]
    fn test_check_rejects_missing_driver_before_anything_else() {
        let t = truck("ABC1234", "B");
        let candidate = AssignmentCandidate {
            driver_id: Uuid::new_v4(),
            truck_id: t.id,
            date: "not-a-date",
        };
        // Fecha inválida también, pero gana la existencia
        assert_eq!(
            check_assignment(&candidate, None, Some(&t), &[], None),
            Err(ConflictReason::DriverNotFound)
        );
    }

    #[test]
    fn test_check_rejects_missing_truck() {
        let d = driver("Ana", "C");
        let candidate = AssignmentCandidate {
            driver_id: d.id,
            truck_id: Uuid::new_v4(),
            date: "2024-06-01",
        };
        assert_eq!(
            check_assignment(&candidate, Some(&d), None, &[], None),
            Err(ConflictReason::TruckNotFound)
        );
    }

    #[test]
    fn test_check_rejects_invalid_date() {
        let d = driver("Ana", "C");
        let t = truck("ABC1234", "B");
        let candidate = AssignmentCandidate {
            driver_id: d.id,
            truck_id: t.id,
            date: "2024-6-1",
        };
        assert_eq!(
            check_assignment(&candidate, Some(&d), Some(&t), &[], None),
            Err(ConflictReason::InvalidDate)
        );
    }

    #[test]
    fn test_driver_exclusivity_regardless_of_truck() {
        let d = driver("Ana", "E");
        let t1 = truck("ABC1234", "B");
        let t2 = truck("XYZ9876", "B");
        let existing = vec![assignment(d.id, t1.id, "2024-06-01")];

        let candidate = AssignmentCandidate {
            driver_id: d.id,
            truck_id: t2.id,
            date: "2024-06-01",
        };
        assert_eq!(
            check_assignment(&candidate, Some(&d), Some(&t2), &existing, None),
            Err(ConflictReason::DriverAlreadyAssigned {
                date: "2024-06-01".to_string()
            })
        );

        // Otra fecha, mismo conductor: aceptable
        let candidate = AssignmentCandidate {
            driver_id: d.id,
            truck_id: t2.id,
            date: "2024-06-02",
        };
        assert_eq!(
            check_assignment(&candidate, Some(&d), Some(&t2), &existing, None),
            Ok(())
        );
    }

    #[test]
    fn test_truck_exclusivity_regardless_of_driver() {
        let d1 = driver("Ana", "E");
        let d2 = driver("Bruno", "E");
        let t = truck("ABC1234", "B");
        let existing = vec![assignment(d1.id, t.id, "2024-06-01")];

        let candidate = AssignmentCandidate {
            driver_id: d2.id,
            truck_id: t.id,
            date: "2024-06-01",
        };
        assert_eq!(
            check_assignment(&candidate, Some(&d2), Some(&t), &existing, None),
            Err(ConflictReason::TruckAlreadyAssigned {
                date: "2024-06-01".to_string()
            })
        );
    }

    #[test]
    fn test_license_conflict_without_date_conflict() {
        let d = driver("Caio", "D");
        let t = truck("ABC1234", "E");
        let candidate = AssignmentCandidate {
            driver_id: d.id,
            truck_id: t.id,
            date: "2024-06-01",
        };
        assert_eq!(
            check_assignment(&candidate, Some(&d), Some(&t), &[], None),
            Err(ConflictReason::LicenseNotCompatible)
        );
    }

    #[test]
    fn test_exclusivity_reported_before_license() {
        // El candidato viola exclusividad del conductor Y licencia; se
        // reporta la exclusividad por el orden fijo de chequeos.
        let d = driver("Ana", "A");
        let t1 = truck("ABC1234", "A");
        let t2 = truck("XYZ9876", "E");
        let existing = vec![assignment(d.id, t1.id, "2024-06-01")];

        let candidate = AssignmentCandidate {
            driver_id: d.id,
            truck_id: t2.id,
            date: "2024-06-01",
        };
        assert_eq!(
            check_assignment(&candidate, Some(&d), Some(&t2), &existing, None),
            Err(ConflictReason::DriverAlreadyAssigned {
                date: "2024-06-01".to_string()
            })
        );
    }

    #[test]
    fn test_update_excludes_itself_from_conflict_search() {
        let d = driver("Ana", "C");
        let t = truck("ABC1234", "B");
        let existing = vec![assignment(d.id, t.id, "2024-06-01")];
        let self_id = existing[0].id;

        // Mismo (conductor, fecha) que la propia asignación: sin conflicto
        let candidate = AssignmentCandidate {
            driver_id: d.id,
            truck_id: t.id,
            date: "2024-06-01",
        };
        assert_eq!(
            check_assignment(&candidate, Some(&d), Some(&t), &existing, Some(self_id)),
            Ok(())
        );
    }

    #[test]
    fn test_audit_passes_when_all_compatible() {
        let d = driver("Ana", "C");
        let t = truck("ABC1234", "B");
        let assignments = vec![assignment(d.id, t.id, "2024-06-01")];
        assert_eq!(
            audit_assignments(&assignments, &[d], &[t]),
            Ok(())
        );
    }

    #[test]
    fn test_audit_reports_first_offending_assignment() {
        let good = driver("Ana", "E");
        let bad = driver("Bruno", "A");
        let t1 = truck("ABC1234", "B");
        let t2 = truck("XYZ9876", "C");
        let assignments = vec![
            assignment(good.id, t1.id, "2024-06-01"),
            assignment(bad.id, t2.id, "2024-06-02"),
        ];
        let offending = assignments[1].id;
        assert_eq!(
            audit_assignments(&assignments, &[good, bad], &[t1, t2]),
            Err(ConflictReason::AuditFailed {
                assignment_id: offending
            })
        );
    }

    #[test]
    fn test_audit_flags_dangling_reference() {
        let d = driver("Ana", "C");
        let t = truck("ABC1234", "B");
        let orphan = assignment(Uuid::new_v4(), t.id, "2024-06-01");
        let orphan_id = orphan.id;
        assert_eq!(
            audit_assignments(&[orphan], &[d], &[t]),
            Err(ConflictReason::AuditFailed {
                assignment_id: orphan_id
            })
        );
    }

    // Escenario completo: alta válida, doble reserva rechazada y edición de
    // licencia rechazada por la auditoría sobre la vista hipotética.
    #[test]
    fn test_scenario_booking_then_incompatible_license_edit() {
        let ana = driver("Ana", "C");
        let t = truck("ABC1234", "B");
        let other = truck("XYZ9876", "B");
        let mut assignments: Vec<Assignment> = Vec::new();

        let candidate = AssignmentCandidate {
            driver_id: ana.id,
            truck_id: t.id,
            date: "2024-06-01",
        };
        assert_eq!(
            check_assignment(&candidate, Some(&ana), Some(&t), &assignments, None),
            Ok(())
        );
        assignments.push(assignment(ana.id, t.id, "2024-06-01"));

        // Segunda asignación de Ana el mismo día con otro camión
        let candidate = AssignmentCandidate {
            driver_id: ana.id,
            truck_id: other.id,
            date: "2024-06-01",
        };
        assert_eq!(
            check_assignment(&candidate, Some(&ana), Some(&other), &assignments, None),
            Err(ConflictReason::DriverAlreadyAssigned {
                date: "2024-06-01".to_string()
            })
        );

        // Edición hipotética: Ana baja a licencia A (rango 1 < rango 2)
        let mut prospective = ana.clone();
        prospective.license_type = "A".to_string();
        let result = audit_assignments(
            &assignments,
            &[prospective],
            &[t.clone(), other.clone()],
        );
        assert_eq!(
            result,
            Err(ConflictReason::AuditFailed {
                assignment_id: assignments[0].id
            })
        );

        // La vista original sigue siendo válida: nada se persistió
        assert_eq!(audit_assignments(&assignments, &[ana], &[t, other]), Ok(()));
    }

    #[test]
    fn test_scenario_license_conflict_even_without_booking_conflict() {
        let d = driver("Davi", "D");
        let t = truck("ABC1234", "E");
        let candidate = AssignmentCandidate {
            driver_id: d.id,
            truck_id: t.id,
            date: "2024-07-15",
        };
        assert_eq!(
            check_assignment(&candidate, Some(&d), Some(&t), &[], None),
            Err(ConflictReason::LicenseNotCompatible)
        );
    }
}
