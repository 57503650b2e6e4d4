//! # Seed Data Generator
//!
//! Populates a data directory with a realistic stand day for development.
//!
//! ## Usage
//! ```bash
//! # Seed 12 orders (default) into ./data for today
//! cargo run -p comanda-store --bin seed
//!
//! # Custom amount and data directory
//! cargo run -p comanda-store --bin seed -- --count 30 --data-dir ./scratch
//!
//! # Seed a specific business day
//! cargo run -p comanda-store --bin seed -- --date 2024-05-17
//! ```
//!
//! ## Generated Day
//! - Drawer opened with a $10.00 float
//! - Orders drawn across the whole menu, most of them paid, a few still
//!   in progress or cancelled, payment methods rotating through all four
//! - The stand's usual petty-cash expenses (gas, bread, ice, bags)

use std::env;
use std::time::Instant;

use chrono::{Local, NaiveDate};
use tracing_subscriber::EnvFilter;

use comanda_core::menu::MENU;
use comanda_core::order::build_order;
use comanda_core::{compute_closing, LineItem, Money, OrderStatus, PaymentMethod};
use comanda_store::{Store, StoreConfig};

/// Customer labels the stand actually uses: names when known, table
/// numbers when not.
const CUSTOMERS: &[&str] = &[
    "Berta Coello",
    "Mesa 1",
    "Mesa 2",
    "Mesa 3",
    "Don Marcos",
    "Sra. Piedad",
    "Mesa 4",
    "Llevar",
];

/// Petty-cash expenses of a normal day, amounts in cents.
const EXPENSES: &[(&str, i64)] = &[
    ("Gas para la freidora", 550),
    ("Pan y salchichas", 1275),
    ("Hielo", 125),
    ("Fundas y servilletas", 300),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 12;
    let mut data_dir = String::from("./data");
    let mut date = Local::now().date_naive();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(12);
                    i += 1;
                }
            }
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--date" => {
                if i + 1 < args.len() {
                    date = NaiveDate::parse_from_str(&args[i + 1], "%Y-%m-%d").unwrap_or(date);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Comanda Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>       Number of orders to generate (default: 12)");
                println!("  -d, --data-dir <DIR>  Data directory (default: ./data)");
                println!("      --date <DATE>     Business day, YYYY-MM-DD (default: today)");
                println!("  -h, --help            Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Comanda Seed Data Generator");
    println!("==============================");
    println!("Data dir: {}", data_dir);
    println!("Date:     {}", date);
    println!("Orders:   {}", count);
    println!();

    let store = Store::new(StoreConfig::new(&data_dir))?;
    println!("✓ Store opened");

    // Check existing orders
    let existing = store.orders().load()?;
    if !existing.is_empty() {
        println!("⚠ Store already has {} orders", existing.len());
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the data directory to regenerate.");
        return Ok(());
    }

    store.drawer().open_day(date, Money::from_cents(1000))?;
    println!("✓ Drawer opened with a $10.00 float");

    // Generate orders
    println!();
    println!("Generating orders...");

    let start = Instant::now();
    let mut orders = Vec::with_capacity(count);

    for seed in 0..count {
        let customer = CUSTOMERS[seed % CUSTOMERS.len()];
        let created_at = date
            .and_hms_opt(11 + (seed % 8) as u32, ((seed * 17) % 60) as u32, 0)
            .ok_or("seed timestamp out of range")?;

        // One or two menu lines, walking the menu at co-prime strides
        let mut selection = vec![LineItem::new(
            MENU[(seed * 7) % MENU.len()].key(),
            (seed % 3) as i64 + 1,
        )];
        if seed % 3 == 0 {
            selection.push(LineItem::new(MENU[(seed * 11 + 3) % MENU.len()].key(), 1));
        }

        // Mostly paid days are what closings get tested against
        let status = match seed % 6 {
            0..=3 => OrderStatus::Paid,
            4 => OrderStatus::Delivered,
            _ => OrderStatus::InProgress,
        };
        let status = if seed % 13 == 12 {
            OrderStatus::Cancelled
        } else {
            status
        };
        let method = PaymentMethod::ALL[(seed * 3) % PaymentMethod::ALL.len()];

        let order = build_order(MENU, &orders, customer, &selection, status, method, created_at)?;
        orders.push(order);

        if (seed + 1) % 10 == 0 {
            println!("  Generated {} orders...", seed + 1);
        }
    }

    store.orders().save(&orders)?;

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} orders in {:?}", orders.len(), elapsed);

    // Expenses
    let expenses: Vec<_> = EXPENSES
        .iter()
        .map(|(description, cents)| {
            comanda_core::Expense::new(date, *description, Money::from_cents(*cents))
        })
        .collect::<Result<_, _>>()?;
    store.expenses().save(&expenses)?;
    println!("✓ Recorded {} expenses", expenses.len());

    // Verify the day reads back
    println!();
    println!("Verifying stores...");

    let hits = store.orders().search("mesa")?;
    println!("  Search 'mesa': {} results", hits.len());

    let report = compute_closing(
        date,
        &store.orders().load()?,
        &store.expenses().load()?,
        &store.drawer().load()?,
    );
    println!("  Closing preview: net {} / cash on hand {}", report.net_profit, report.cash_on_hand);

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
