use crate::config::Settings;
use crate::dataset::Dataset;
use crate::server::start_server;

pub fn serve(settings: Settings, dataset: Dataset) {
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to start async runtime: {}", e);
        std::process::exit(1);
    });

    let address = settings.bind_address();
    if let Err(e) = runtime.block_on(start_server(settings, dataset)) {
        eprintln!("Server on {} failed: {}", address, e);
        std::process::exit(1);
    }
}
