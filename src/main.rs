use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use voice_studio_client::cli::{Cli, Command, DesignArgs, EnrollArgs};
use voice_studio_client::controllers::VoiceStudio;
use voice_studio_client::domain::shared::Messages;
use voice_studio_client::domain::voice::{mime_for_path, AudioUpload, EnrollForm, SynthesisForm};
use voice_studio_client::infrastructure::config::{Config, LogFormat};
use voice_studio_client::infrastructure::http::VoiceStudioClient;
use voice_studio_client::infrastructure::view::TerminalView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        base_url = %config.base_url,
        locale = ?config.locale,
        output_dir = %config.output_dir.display(),
        "Starting voice studio client"
    );

    let messages = Messages::for_locale(config.locale);
    let api = Arc::new(
        VoiceStudioClient::new(config.base_url.clone())
            .with_fallback_message(messages.request_failed),
    );
    let view = Arc::new(TerminalView::new(config.output_dir.clone()));
    let studio = VoiceStudio::new(api, view.clone(), messages, config.api_key.clone());

    match cli.command {
        Command::Design(args) => run_design(&studio, &view, args).await,
        Command::Enroll(args) => run_enroll(&studio, &view, args).await,
    }
}

async fn run_design(
    studio: &VoiceStudio,
    view: &TerminalView,
    args: DesignArgs,
) -> anyhow::Result<()> {
    studio.design.create_voice(args.form()).await?;
    view.save_pending().await;

    if let Some(text) = args.speak {
        let form = SynthesisForm::new(text, args.target_model).with_sample_rate(args.sample_rate);
        studio.design.synthesize(form).await?;
        view.save_pending().await;
    }

    Ok(())
}

async fn run_enroll(
    studio: &VoiceStudio,
    view: &TerminalView,
    args: EnrollArgs,
) -> anyhow::Result<()> {
    let audio = AudioUpload::read(&args.audio_path).await?;
    let audio_mime_type = args
        .audio_mime_type
        .unwrap_or_else(|| mime_for_path(&args.audio_path).to_string());

    let form = EnrollForm {
        audio: Some(audio),
        preferred_name: args.preferred_name.unwrap_or_default(),
        audio_mime_type,
        target_model: args.target_model.clone(),
    };
    studio.enroll.create_voice(form).await?;

    if let Some(text) = args.speak {
        studio
            .enroll
            .synthesize(SynthesisForm::new(text, args.target_model))
            .await?;
        view.save_pending().await;
    }

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voice_studio_client=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "voice_studio_client=warn".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
