use std::net::SocketAddr;
use std::sync::Arc;

use tweet_searcher::app::{Services, router};
use tweet_searcher::config::Config;
use tweet_searcher::indexer::notify::ChannelSink;
use tweet_searcher::storage::memory::MemoryIndexStore;
use tweet_searcher::storage::remote::RemoteIndexStore;
use tweet_searcher::storage::store::SharedIndexStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = Config::from_env()?;
    let args: Vec<String> = std::env::args().collect();
    config.apply_args(&args)?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Starting tweet searcher on {}", config.bind_addr);

    // 1. Index store:
    let mut local_store: Option<Arc<MemoryIndexStore>> = None;
    let store: SharedIndexStore = match &config.index_store_url {
        Some(url) => {
            let remote = RemoteIndexStore::new(url, config.store_timeout);
            tracing::info!(
                "Using remote index store at {} (timeout {:?})",
                remote.base_url(),
                config.store_timeout
            );
            Arc::new(remote)
        }
        None => {
            tracing::info!("Using in-process index store");
            let memory = Arc::new(MemoryIndexStore::new());
            local_store = Some(memory.clone());
            memory
        }
    };

    // 2. Pipeline:
    let (sink, mut notifications) = ChannelSink::new();
    let services = Services::new(store, Arc::new(sink), config.default_page_size);

    services.consumer.clone().start()?;

    // 3. Spawn notification drain:
    tokio::spawn(async move {
        while let Some(notification) = notifications.recv().await {
            match serde_json::to_string(&notification) {
                Ok(json) => tracing::info!("Indexed: {}", json),
                Err(e) => tracing::warn!("Failed to serialize notification: {}", e),
            }
        }
    });

    // 4. Spawn stats reporter:
    if let Some(memory) = local_store
        && !config.stats_interval.is_zero()
    {
        let queue = services.queue.clone();
        let period = config.stats_interval;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);

            loop {
                interval.tick().await;
                let (pending, running, acked, rejected) = queue.status_counts();
                tracing::info!(
                    "Index stats: {} terms, {} postings | queue: {} pending, {} running, {} acked, {} rejected",
                    memory.term_count(),
                    memory.posting_count(),
                    pending,
                    running,
                    acked,
                    rejected
                );
            }
        });
    }

    // 5. Start HTTP server:
    let app = router(&services);
    let http_addr: SocketAddr = config.bind_addr;

    tracing::info!("HTTP server listening on {}", http_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(http_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
