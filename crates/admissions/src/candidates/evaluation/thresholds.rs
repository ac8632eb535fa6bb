use super::super::domain::Faculty;

/// Lowest score (inclusive) that earns admission to the faculty.
pub const fn minimum_score(faculty: Faculty) -> i32 {
    match faculty {
        Faculty::Ingenieria => 350,
        Faculty::Artes => 350,
        Faculty::Tecnologica => 280,
        Faculty::MedioAmbiente => 300,
        Faculty::Ciencias => 320,
    }
}
