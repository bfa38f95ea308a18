use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hackpad_control::{Config, Controller};
use hackpad_firmware::system::System;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    info!("{}", "=".repeat(50));
    info!("Hackpad controller v{}", env!("CARGO_PKG_VERSION"));
    info!("{}", "=".repeat(50));
    info!("Brightness encoder: adjust LED brightness");
    info!("Volume encoder: adjust system volume");
    info!("Switches 1-9: toggle individual LEDs");
    info!("{}", "=".repeat(50));

    let config = Config::default();
    let idle = Duration::from_millis(config.idle.to_millis());

    let mut system = System::init(&config).context("failed to initialize hardware")?;
    let mut controller = Controller::new(config);

    let running = Arc::new(AtomicBool::new(true));
    let r = Arc::clone(&running);
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("failed to install interrupt handler")?;

    let snapshot = system.inputs.sample();
    controller
        .start(&snapshot, &mut system.strip, system.audio.as_mut())
        .context("failed to blank the LED strip")?;

    while running.load(Ordering::SeqCst) {
        let snapshot = system.inputs.sample();
        controller
            .tick(&snapshot, &mut system.strip, system.audio.as_mut())
            .context("failed to update the LED strip")?;
        thread::sleep(idle);
    }

    info!("Shutting down...");
    controller
        .shutdown(&mut system.strip)
        .context("failed to turn the LEDs off")?;
    info!("All LEDs turned off. Goodbye!");

    Ok(())
}
