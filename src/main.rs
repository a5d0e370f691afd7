// src/main.rs

use std::io::Write as _;
use std::str::FromStr;

use clap::Parser;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use animind::avatar::AvatarMood;
use animind::character::CharacterId;
use animind::chat::{ChatClient, ReadinessProbe, ReadinessStatus};
use animind::config::CONFIG;
use animind::mood::{animation_class, detect_mood};
use animind::prefs::{default_prefs_path, Prefs};

#[derive(Parser, Debug)]
#[command(name = "animind", about = "Terminal chat shell for the AniMind character backend")]
struct Cli {
    /// Character to chat with (goku, vegeta, itachi)
    #[arg(short, long)]
    character: Option<String>,

    /// Send a single message and exit instead of starting the chat loop
    #[arg(short, long)]
    message: Option<String>,

    /// Skip the backend wake-up wait (assume it is already running)
    #[arg(long)]
    skip_readiness: bool,

    /// Disable the character voice line
    #[arg(long)]
    no_voice: bool,

    /// Disable the character selection sound effect
    #[arg(long)]
    no_sound: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = Level::from_str(&CONFIG.log_level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting AniMind chat shell");
    info!("Backend: {}", CONFIG.api_base_url);

    // Preferences: CLI flags override the persisted toggles.
    let prefs_path = CONFIG
        .prefs_path
        .as_ref()
        .map(std::path::PathBuf::from)
        .or_else(default_prefs_path);
    let mut prefs = prefs_path
        .as_ref()
        .map(Prefs::load)
        .unwrap_or_default();
    if cli.no_voice {
        prefs.voice_enabled = false;
    }
    if cli.no_sound {
        prefs.sound_enabled = false;
    }

    // Resolve the character: flag, then saved preference, then config default.
    let character = cli
        .character
        .as_deref()
        .map(|s| {
            CharacterId::from_str(s)
                .map_err(|_| anyhow::anyhow!("unknown character '{s}' (goku, vegeta, itachi)"))
        })
        .transpose()?
        .or(prefs.last_character)
        .or_else(|| CharacterId::from_str(&CONFIG.default_character).ok())
        .unwrap_or(CharacterId::Goku);

    let profile = character.profile();
    info!("Character: {} - {}", profile.name, profile.title);
    if prefs.sound_enabled {
        debug!("selection sound effect: {}", profile.sound_effect);
    }
    if prefs.voice_enabled {
        println!("[{}] {}", profile.name, profile.voice_line);
    }

    prefs.last_character = Some(character);
    if let Some(path) = &prefs_path {
        prefs.save(path);
    }

    // Wait for the backend to wake up (hosted instances cold-start).
    if !cli.skip_readiness {
        let mut probe = ReadinessProbe::new(
            &CONFIG.api_base_url,
            CONFIG.poll_interval(),
            CONFIG.startup_timeout(),
        );
        if probe.wait_until_ready().await == ReadinessStatus::TimedOut {
            anyhow::bail!(
                "backend did not come up within {}s - try again in a minute",
                CONFIG.startup_timeout_secs
            );
        }
    }

    let client = ChatClient::new(&CONFIG.api_base_url, CONFIG.request_timeout())?;
    let avatar = AvatarMood::new(CONFIG.mood_reset_timeout());
    debug!("session id: {}", client.session_id());

    // One-shot mode
    if let Some(message) = cli.message {
        exchange(&client, &avatar, character, &message).await;
        return Ok(());
    }

    // Interactive loop
    println!("Chatting with {}. Type /quit to exit.", profile.name);
    let stdin = std::io::stdin();
    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" || line == "/exit" {
            break;
        }

        exchange(&client, &avatar, character, line).await;
    }

    avatar.reset();
    info!("Session ended");
    Ok(())
}

/// One round trip: classify the user message, update the avatar, call the
/// backend, print the reply.
async fn exchange(client: &ChatClient, avatar: &AvatarMood, character: CharacterId, text: &str) {
    let mood = detect_mood(text);
    avatar.set_mood(mood);
    debug!(
        "mood: {} ({}) -> animation {}",
        mood,
        mood.description(),
        animation_class(character, mood)
    );

    match client.send_message(character, text).await {
        Ok(reply) => println!("{}> {}", reply.character, reply.bot_message),
        Err(err) => warn!("chat request failed: {err}"),
    }
}
