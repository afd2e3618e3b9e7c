//! # Seed Data Generator
//!
//! Populates the database with sample categories and items for development.
//!
//! ## Usage
//! ```bash
//! # Seed ./tarefas_dev.db
//! cargo run -p tarefas-db --bin seed
//!
//! # Specify database path
//! cargo run -p tarefas-db --bin seed -- --db ./data/tarefas.db
//! ```
//!
//! Every category gets a handful of items; every third item is marked
//! completed and every other one gets a deadline a few days out.

use chrono::{Duration, Utc};
use std::env;
use tarefas_core::{Category, Item};
use tarefas_db::{Database, DbConfig};

/// Sample categories with the items they own.
const SAMPLE_DATA: &[(&str, &[&str])] = &[
    (
        "Trabalho",
        &[
            "Enviar relatório mensal",
            "Revisar pull requests",
            "Preparar apresentação da sprint",
            "Responder e-mails pendentes",
        ],
    ),
    (
        "Casa",
        &[
            "Lavar a louça",
            "Pagar conta de luz",
            "Trocar lâmpada da sala",
        ],
    ),
    (
        "Estudos",
        &[
            "Ler capítulo 4 do livro de Rust",
            "Fazer exercícios de álgebra",
            "Assistir aula gravada",
        ],
    ),
    ("Compras", &["Comprar pão", "Comprar café", "Comprar frutas"]),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./tarefas_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Tarefas Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./tarefas_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Tarefas Seed Data Generator");
    println!("==============================");
    println!("Database: {}", db_path);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let mut conn = db.acquire().await?;
    let existing = db.categories().count(&mut conn).await?;
    drop(conn);

    if existing > 0 {
        println!("⚠ Database already has {} categories", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut tx = db.begin().await?;
    let mut items_created = 0;

    for (name, descriptions) in SAMPLE_DATA {
        let category = Category::new(*name);
        db.categories().insert(&mut tx, &category).await?;

        for (idx, description) in descriptions.iter().enumerate() {
            let due_at = (idx % 2 == 0).then(|| Utc::now() + Duration::days(idx as i64 + 1));
            let item = Item::new(*description, idx % 3 == 2, due_at, category.id.clone());
            db.items().insert(&mut tx, &item).await?;
            items_created += 1;
        }

        println!("  {} ({} itens)", category.name, descriptions.len());
    }

    tx.commit().await?;

    println!();
    println!(
        "✓ Seeded {} categories and {} items",
        SAMPLE_DATA.len(),
        items_created
    );

    db.close().await;
    Ok(())
}
