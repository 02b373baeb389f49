use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use client_core::{ContactForm, HttpInquiryTransport, SubmitOutcome};
use motion::{Backdrop, FrameInput, RenderSupport, SpaceScene, ThemeMode};
use rand::{rngs::StdRng, SeedableRng};
use server_api::{create_inquiry, ApiContext};
use shared::protocol::CreateInquiryRequest;
use site::{render_page, PageConfig, SceneKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Operator tools for the agency site")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Theme {
    Dark,
    Light,
}

impl From<Theme> for ThemeMode {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Dark => ThemeMode::Dark,
            Theme::Light => ThemeMode::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scene {
    Atmosphere,
    Space,
}

impl From<Scene> for SceneKind {
    fn from(scene: Scene) -> Self {
        match scene {
            Scene::Atmosphere => SceneKind::Atmosphere,
            Scene::Space => SceneKind::Space,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send an inquiry through a running server's JSON endpoint.
    Submit {
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        server_url: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// Append an inquiry straight to a store, bypassing HTTP.
    Record {
        /// Leave unset to use the in-memory demo store.
        #[arg(long)]
        database_url: Option<String>,
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// Print backdrop frames as JSON lines for a fixed pointer and scroll.
    Simulate {
        #[arg(long, default_value_t = 60)]
        frames: u32,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        pointer_x: f32,
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        pointer_y: f32,
        #[arg(long, default_value_t = 0.0)]
        scroll: f32,
        #[arg(long, value_enum, default_value_t = Scene::Atmosphere)]
        scene: Scene,
        #[arg(long, value_enum, default_value_t = Theme::Dark)]
        theme: Theme,
        /// Pretend the host cannot render 3D.
        #[arg(long)]
        no_webgl: bool,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Write the rendered landing page to a file.
    Render {
        #[arg(long, value_enum, default_value_t = Theme::Dark)]
        theme: Theme,
        #[arg(long, value_enum, default_value_t = Scene::Atmosphere)]
        scene: Scene,
        #[arg(long, default_value = "index.html")]
        out: PathBuf,
    },
}

const FRAME_SECONDS: f32 = 1.0 / 60.0;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Submit {
            server_url,
            name,
            email,
            message,
        } => {
            let transport = HttpInquiryTransport::new(&server_url)
                .with_context(|| format!("invalid server url '{server_url}'"))?;
            let mut form = ContactForm::with_values(name, email, message);
            match form.submit(&transport).await {
                SubmitOutcome::Sent(inquiry) => {
                    println!("{}", serde_json::to_string_pretty(&inquiry)?);
                }
                SubmitOutcome::Invalid(errors) => bail!("{errors}"),
                SubmitOutcome::Failed(notice) => {
                    bail!("{}: {}", notice.title, notice.description)
                }
            }
        }
        Command::Record {
            database_url,
            name,
            email,
            message,
        } => {
            let store = storage::select_store(database_url.as_deref()).await?;
            let ctx = ApiContext::new(store);
            let request = CreateInquiryRequest {
                name,
                email,
                message,
            };
            let inquiry = create_inquiry(&ctx, request)
                .await
                .map_err(|e| anyhow::anyhow!("{:?}: {}", e.code, e.message))?;
            println!("recorded inquiry id={} mode={}", inquiry.id.0, ctx.mode().as_str());
        }
        Command::Simulate {
            frames,
            pointer_x,
            pointer_y,
            scroll,
            scene,
            theme,
            no_webgl,
            seed,
        } => {
            let support = RenderSupport {
                webgl: !no_webgl,
                reduced_motion: false,
            };
            simulate(
                frames,
                (pointer_x, pointer_y, scroll),
                scene,
                theme.into(),
                support,
                seed,
            )?;
        }
        Command::Render { theme, scene, out } => {
            let mut config = PageConfig::new(theme.into(), Utc::now().year());
            config.scene = scene.into();
            let html = render_page(&config, &ContactForm::new());
            fs::write(&out, html).with_context(|| format!("failed to write '{}'", out.display()))?;
            println!("wrote {}", out.display());
        }
    }

    Ok(())
}

fn simulate(
    frames: u32,
    (pointer_x, pointer_y, scroll): (f32, f32, f32),
    scene: Scene,
    theme: ThemeMode,
    support: RenderSupport,
    seed: Option<u64>,
) -> Result<()> {
    let input_at =
        |frame: u32| FrameInput::new(pointer_x, pointer_y, scroll, frame as f32 * FRAME_SECONDS);

    let mut backdrop = Backdrop::select(support, theme);
    if let Backdrop::Static { color } = &backdrop {
        println!("{}", serde_json::json!({ "static": color }));
        return Ok(());
    }

    match scene {
        Scene::Atmosphere => {
            for frame in 0..frames {
                if let Some(state) = backdrop.tick(&input_at(frame)) {
                    println!("{}", serde_json::to_string(&state)?);
                }
            }
        }
        Scene::Space => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut space = SpaceScene::new(motion::space::DEFAULT_PARTICLE_COUNT, &mut rng);
            for frame in 0..frames {
                println!("{}", serde_json::to_string(&space.tick(&input_at(frame)))?);
            }
        }
    }
    Ok(())
}
