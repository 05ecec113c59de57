use front_desk::{console, print_banner, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, logging)
    let config = setup_environment();

    tracing::info!(
        total_seats = config.total_seats,
        environment = %config.environment,
        "Front desk starting"
    );

    // 2. Console owns the terminal until the operator quits
    let summary = console::run(&config).map_err(|e| {
        tracing::error!("Console error: {}", e);
        e
    })?;

    print_banner();
    println!(
        "Seats left: {}/{}  Active: {}  Checked out: {}",
        summary.seats_left, summary.total_seats, summary.active, summary.checked_out
    );
    Ok(())
}
