use synastry_core::{BirthRecord, CompatibilityModel, CosmicProfile};

fn main() {
    let model = CompatibilityModel::default();

    // asha, 15th july 1990 / ravi, 16th february 1988
    let asha = match BirthRecord::new(1990, 7, 15) {
        Ok(birth) => CosmicProfile::new("Asha", &birth, 2026),
        Err(e) => return eprintln!("Error: {}", e),
    };
    let ravi = match BirthRecord::new(1988, 2, 16) {
        Ok(birth) => CosmicProfile::new("Ravi", &birth, 2026),
        Err(e) => return eprintln!("Error: {}", e),
    };

    println!("{:#?}", model.score(&asha, &ravi));
    println!("{:#?}", model.generate_report(&asha, &ravi));
}
