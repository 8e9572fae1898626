use clap::Parser;
use sf_schema_migrate::utils::error::ErrorSeverity;
use sf_schema_migrate::utils::{logger, validation::Validate};
use sf_schema_migrate::{
    CliArgs, CliCommandPipeline, Command, EtlEngine, ImportPipeline, LocalStorage, MigrateConfig,
    MigrateError, OutputSink, SoqlPipeline,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose, args.log_json);

    tracing::info!("Starting ssm");
    if args.verbose {
        tracing::debug!("CLI args: {:?}", args);
    }

    let mut config = match MigrateConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    args.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e);
    }

    let storage = LocalStorage::default();

    let result = match &args.command {
        Command::ImportMetadata {
            csv_file, output, ..
        } => {
            let pipeline = ImportPipeline::new(storage, config, csv_file.as_str()).with_output(output.clone());
            EtlEngine::new(pipeline).run().await
        }
        Command::GenerateSoql { json_file, form } => {
            let pipeline = SoqlPipeline::new(storage, config, json_file.as_str(), *form);
            EtlEngine::new(pipeline).run().await
        }
        Command::GenerateCli {
            json_file, stdout, ..
        } => {
            let sink = if *stdout {
                OutputSink::Stdout
            } else {
                OutputSink::File
            };
            let pipeline = CliCommandPipeline::new(storage, config, json_file.as_str()).with_sink(sink);
            EtlEngine::new(pipeline).run().await
        }
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ Completed successfully");
            if !matches!(args.command, Command::GenerateCli { stdout: true, .. }) {
                println!("✅ Output saved to: {}", output_path);
            }
        }
        Err(e) => fail(&e),
    }

    Ok(())
}

fn fail(e: &MigrateError) -> ! {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code)
}
