use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use flowstore::app::AppCore;
use flowstore::auth::memory::{InMemoryAuthRepository, InMemorySessionStorage};
use flowstore::auth::AuthEvent;
use flowstore::config::Config;
use flowstore::counter::{counter_store, CounterEvent};
use flowstore::logging::init_tracing;

#[derive(Parser)]
#[command(name = "flowstore", about = "Reactive store demos")]
struct Cli {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    demo: Demo,
}

#[derive(Subcommand)]
enum Demo {
    /// Drive the bounded counter through a scripted event sequence.
    Counter,
    /// Run a login/logout session against the in-memory backend.
    Auth,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;
    init_tracing(&config.log.filter);

    match cli.demo {
        Demo::Counter => counter_demo(config.counter.initial).await,
        Demo::Auth => auth_demo().await,
    }
    Ok(())
}

async fn counter_demo(initial: i32) {
    let store = counter_store("counter", initial);
    let subscription = store.subscribe(|state| println!("counter -> {}", state.value));

    for event in [
        CounterEvent::Increase,
        CounterEvent::Increase,
        CounterEvent::Multiply,
        CounterEvent::Multiply,
        CounterEvent::Set { value: 60 },
        CounterEvent::Multiply,
        CounterEvent::Divide,
        CounterEvent::Decrease,
        CounterEvent::Reset,
    ] {
        store.dispatch(event);
    }

    // Counter handlers are synchronous; a short yield lets the queue drain.
    tokio::time::sleep(Duration::from_millis(50)).await;
    println!("final: {}", store.current().value);
    subscription.cancel();
    store.close();
}

async fn auth_demo() {
    let repository = Arc::new(InMemoryAuthRepository::new().with_account(
        "ada@example.com",
        "enchantress",
        "Ada",
    ));
    let storage = Arc::new(InMemorySessionStorage::new());

    let core = AppCore::start(repository, storage);
    let subscription = core.auth().subscribe(|state| println!("auth -> {state:?}"));

    core.auth().dispatch(AuthEvent::LoginRequested {
        email: "ada@example.com".into(),
        password: "wrong-password".into(),
    });
    core.auth().dispatch(AuthEvent::LoginRequested {
        email: "ada@example.com".into(),
        password: "enchantress".into(),
    });
    core.auth().dispatch(AuthEvent::LogoutRequested);

    tokio::time::sleep(Duration::from_millis(100)).await;
    println!("final: {:?}", core.auth().current());
    subscription.cancel();
    core.shutdown();
}
