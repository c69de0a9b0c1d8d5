//! Security monitor agent binary.

use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use camwatch_models::{Category, Taxonomy};
use camwatch_monitor::{
    metrics, AlertActuator, CooldownGate, DetectionFeed, JsonlFeed, MonitorAgent, MonitorConfig,
    Pipeline, SyntheticFeed,
};
use camwatch_notify::{
    Dispatcher, EmailChannel, EmailConfig, NotifyChannel, TelegramChannel, TelegramConfig,
};

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (required for TLS/HTTPS)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing with colored output for dev, JSON for production
    let use_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let env_filter =
        EnvFilter::from_default_env().add_directive("camwatch=info".parse().unwrap());

    if use_json {
        tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(env_filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_ansi(true)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .with(env_filter)
            .init();
    }

    info!("Starting camwatch-monitor");

    // Optional Prometheus recorder
    let _metrics_handle = if std::env::var("METRICS_ENABLED")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false)
    {
        Some(metrics::init_metrics())
    } else {
        None
    };

    // Load configuration
    let config = MonitorConfig::from_env();
    info!("Monitor config: {:?}", config);

    info!("Security surveillance system activated");
    for &category in Category::ALL {
        info!(
            priority = category.priority(),
            "Monitoring category: {}",
            category.label()
        );
    }

    // Class-id taxonomy
    let taxonomy = match &config.taxonomy_path {
        Some(path) => match Taxonomy::from_file(path) {
            Ok(t) => {
                info!(path = %path, classes = t.len(), "Loaded taxonomy");
                t
            }
            Err(e) => {
                error!("Failed to load taxonomy from {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Taxonomy::coco(),
    };

    // Notification channels, primary first. Channels with incomplete
    // configuration are skipped, not constructed.
    let mut channels: Vec<Box<dyn NotifyChannel>> = Vec::new();

    match TelegramConfig::from_env() {
        Some(telegram) => {
            match TelegramChannel::new(telegram.with_timeout(config.channel_timeout)) {
                Ok(channel) => {
                    info!("Telegram notifications enabled");
                    channels.push(Box::new(channel));
                }
                Err(e) => {
                    error!("Failed to create Telegram channel: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => info!("Telegram notifications not configured"),
    }

    match EmailConfig::from_env() {
        Some(email) => match EmailChannel::new(email.with_timeout(config.channel_timeout)) {
            Ok(channel) => {
                info!("Email notifications enabled");
                channels.push(Box::new(channel));
            }
            Err(e) => {
                error!("Failed to create email channel: {}", e);
                std::process::exit(1);
            }
        },
        None => info!("Email notifications not configured"),
    }

    if channels.is_empty() {
        warn!("No remote notifications configured - check your .env file");
    }

    let dispatcher = Dispatcher::new(channels);

    // Startup self-test: exercise each configured channel once.
    if dispatcher.is_configured() {
        info!(
            channels = ?dispatcher.channel_names(),
            "Testing notification channels"
        );
        let results = dispatcher
            .self_test("Security system started successfully!\nAll notifications are working.")
            .await;
        for result in &results {
            if result.ok {
                info!(channel = result.channel, "Notification test: SUCCESS");
            } else {
                warn!(channel = result.channel, "Notification test: FAILED");
            }
        }
    }

    // Detection feed
    let feed: Box<dyn DetectionFeed> = match &config.feed_path {
        Some(path) => match JsonlFeed::open(path) {
            Ok(feed) => {
                info!(path = %path, "Replaying detection feed");
                Box::new(feed)
            }
            Err(e) => {
                error!("Failed to open detection feed {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            info!("No detection feed configured, using synthetic walkthrough");
            Box::new(SyntheticFeed::new())
        }
    };

    let pipeline = Pipeline::new(
        config.confidence_threshold,
        taxonomy,
        CooldownGate::new(config.alert_cooldown),
        AlertActuator::terminal(),
        dispatcher,
    );

    let mut agent = MonitorAgent::new(config, pipeline, feed);

    // Setup signal handlers
    let shutdown = agent.shutdown_handle();
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Received shutdown signal");
        let _ = shutdown.send(true);
    });

    // Run agent
    if let Err(e) = agent.run().await {
        error!("Agent error: {}", e);
        std::process::exit(1);
    }

    info!("Monitor shutdown complete");
}
