use attest_scan::adapters::outbound::console::StderrProgressReporter;
use attest_scan::adapters::outbound::filesystem::{FileReportWriter, StdoutPresenter};
use attest_scan::adapters::outbound::network::{
    FullDocumentResolver, RankingsClient, ReqwestTransport, RetryingFetcher, VersionScopedResolver,
};
use attest_scan::application::dto::ScanRequest;
use attest_scan::application::use_cases::ScanAttestationsUseCase;
use attest_scan::attestation_scan::domain::Report;
use attest_scan::cli::{Args, Strategy};
use attest_scan::config::{discover_config, load_config_from_path, ConfigFile, Settings};
use attest_scan::ports::outbound::{AttestationResolver, ReportPresenter};
use attest_scan::shared::{ExitCode, Result};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load configuration (explicit path wins over auto-discovery)
    let config = match args.config.as_deref() {
        Some(path) => load_config_from_path(Path::new(path))?,
        None => discover_config(Path::new("."))?.unwrap_or_else(ConfigFile::default),
    };
    let settings = Settings::resolve(&args, &config);
    settings.validate()?;

    // Create adapters (Dependency Injection)
    let transport = ReqwestTransport::new()?;
    let lister = RankingsClient::new(
        RetryingFetcher::new(transport.clone()),
        settings.rankings_url.clone(),
        settings.registry.clone(),
    );
    let progress_reporter = StderrProgressReporter::new();

    // Resolve the strategy once per run; the rest of the pipeline is
    // identical for both.
    let report = match settings.strategy {
        Strategy::VersionScoped => {
            let resolver =
                VersionScopedResolver::new(RetryingFetcher::new(transport), settings.registry_url.clone());
            scan(lister, resolver, progress_reporter, &settings).await?
        }
        Strategy::FullDocument => {
            let resolver =
                FullDocumentResolver::new(RetryingFetcher::new(transport), settings.registry_url.clone());
            scan(lister, resolver, progress_reporter, &settings).await?
        }
    };

    let serialized = serde_json::to_string_pretty(&report)?;

    // Present output
    let presenter: Box<dyn ReportPresenter> = if let Some(output_path) = settings.output {
        Box::new(FileReportWriter::new(PathBuf::from(output_path)))
    } else {
        Box::new(StdoutPresenter::new())
    };
    presenter.present(&serialized)?;

    Ok(())
}

async fn scan<R: AttestationResolver>(
    lister: RankingsClient<ReqwestTransport>,
    resolver: R,
    progress_reporter: StderrProgressReporter,
    settings: &Settings,
) -> Result<Report> {
    let use_case = ScanAttestationsUseCase::new(lister, resolver, progress_reporter);
    let response = use_case
        .execute(ScanRequest::new(settings.limit, settings.registry.clone()))
        .await?;
    Ok(response.report)
}
