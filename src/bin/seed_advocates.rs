//! Seeds the advocates table with sample directory records.
//!
//! The table must already exist (run the Diesel migrations first). Running
//! the seeder twice inserts the records twice; it is meant for fresh local
//! databases.

use dotenvy::dotenv;

use advocate_directory::db::establish_connection_pool;
use advocate_directory::domain::advocate::NewAdvocate;
use advocate_directory::models::config::ServerConfig;
use advocate_directory::repository::AdvocateWriter;
use advocate_directory::repository::advocate::DieselAdvocateRepository;

fn sample_advocates() -> Vec<NewAdvocate> {
    let raw: Vec<(&str, &str, &str, &str, Vec<&str>, i32, i64)> = vec![
        (
            "John",
            "Doe",
            "New York",
            "MD",
            vec!["Bipolar", "LGBTQ", "Medication/Prescribing"],
            10,
            5551234567,
        ),
        (
            "Jane",
            "Smith",
            "Los Angeles",
            "PhD",
            vec!["Chronic pain", "Weight loss & nutrition"],
            8,
            5559876543,
        ),
        (
            "Alice",
            "Johnson",
            "Chicago",
            "MSW",
            vec!["Pediatrics", "Domestic abuse"],
            5,
            5554567890,
        ),
        (
            "Michael",
            "Brown",
            "Houston",
            "MD",
            vec!["Substance use/abuse", "Sleep issues"],
            12,
            5556543210,
        ),
        (
            "Emily",
            "Davis",
            "Phoenix",
            "PhD",
            vec!["Trauma & PTSD", "Personality disorders"],
            7,
            5553210987,
        ),
        (
            "Chris",
            "Martinez",
            "Philadelphia",
            "MSW",
            vec!["Schizophrenia and psychotic disorders", "Life coaching"],
            3,
            5557890123,
        ),
        (
            "Jessica",
            "Taylor",
            "San Antonio",
            "MD",
            vec!["Obsessive-compulsive disorders"],
            9,
            5554561234,
        ),
        (
            "David",
            "Harris",
            "San Diego",
            "PhD",
            vec!["Neuropsychological evaluations", "Eating disorders"],
            11,
            5557896543,
        ),
        (
            "Laura",
            "Clark",
            "Dallas",
            "MSW",
            vec!["General mental health"],
            2,
            5550123456,
        ),
        (
            "Daniel",
            "Lewis",
            "San Jose",
            "MD",
            vec!["Men's issues", "Relationship issues"],
            14,
            5553217654,
        ),
        (
            "Sarah",
            "Lee",
            "Austin",
            "PhD",
            vec!["Pediatrics", "Women's issues"],
            6,
            5559873456,
        ),
        (
            "James",
            "King",
            "Jacksonville",
            "MSW",
            vec!["Veterans", "Attention and hyperactivity"],
            4,
            5556540987,
        ),
    ];

    raw.into_iter()
        .map(|(first, last, city, degree, specialties, years, phone)| {
            NewAdvocate::new(
                first.to_string(),
                last.to_string(),
                city.to_string(),
                degree.to_string(),
                specialties.into_iter().map(String::from).collect(),
                years,
                phone,
            )
        })
        .collect()
}

fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let server_config = ServerConfig::load()
        .map_err(|e| std::io::Error::other(format!("Failed to load configuration: {e}")))?;

    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselAdvocateRepository::new(&pool);
    let advocates = sample_advocates();
    let inserted = repo
        .create_advocates(&advocates)
        .map_err(|e| std::io::Error::other(format!("Failed to seed advocates: {e}")))?;

    log::info!("Seeded {inserted} advocates into {}", server_config.database_url);
    Ok(())
}
