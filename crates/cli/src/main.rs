mod report;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "shapes-cli")]
#[command(about = "Area and right-angle checks for circles and triangles")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Area and circumference of a circle
    Circle {
        #[arg(long, allow_negative_numbers = true)]
        radius: f64,
    },
    /// Area, perimeter and right-angle check of a triangle given by its sides
    Triangle {
        #[arg(long, allow_negative_numbers = true)]
        a: f64,
        #[arg(long, allow_negative_numbers = true)]
        b: f64,
        #[arg(long, allow_negative_numbers = true)]
        c: f64,
        /// Right-angle tolerance as 10^(-N); defaults to an absolute 1e-10
        #[arg(long, allow_negative_numbers = true)]
        decimal_places: Option<i32>,
    },
    /// Print library version and tolerance defaults
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Circle { radius } => {
            tracing::info!(radius, "circle");
            print_json(&report::circle_report(radius)?)
        }
        Action::Triangle {
            a,
            b,
            c,
            decimal_places,
        } => {
            tracing::info!(a, b, c, decimal_places = ?decimal_places, "triangle");
            print_json(&report::triangle_report(a, b, c, decimal_places)?)
        }
        Action::Report => print_json(&report::version_report()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
